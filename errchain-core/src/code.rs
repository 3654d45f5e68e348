//! Error codes for a single abstraction layer

use std::fmt;

/// A closed set of named error variants belonging to one layer.
///
/// Every layer of an application declares its own code type, usually with
/// [`error_code!`](crate::error_code). The variant name returned by
/// [`as_str`](ErrorCode::as_str) is what appears in rendered chains, so it
/// must be stable.
pub trait ErrorCode: Copy + fmt::Debug + Send + Sync + 'static {
    /// Returns the variant name as a static string
    fn as_str(&self) -> &'static str;

    /// All variants of this layer, in declaration order
    fn variants() -> &'static [Self];
}

/// Declare a layer's error code enum.
///
/// The generated enum derives `Debug, Clone, Copy, PartialEq, Eq, Hash` and
/// implements [`ErrorCode`] and `Display` using the variant names verbatim.
///
/// ```rust
/// use errchain_core::{error_code, ErrorCode};
///
/// error_code! {
///     /// Storage layer failures
///     pub enum StorageCode {
///         KeyMissing,
///         WriteRejected,
///     }
/// }
///
/// assert_eq!(StorageCode::KeyMissing.as_str(), "KeyMissing");
/// assert_eq!(StorageCode::variants().len(), 2);
/// ```
#[macro_export]
macro_rules! error_code {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $crate::ErrorCode for $name {
            fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant),)+
                }
            }

            fn variants() -> &'static [Self] {
                &[$($name::$variant,)+]
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::ErrorCode::as_str(self))
            }
        }
    };
}
