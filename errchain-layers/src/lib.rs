//! # errchain layers
//!
//! A small three-layer call stack that reports failures as typed error
//! chains.
//!
//! ## Layers
//! - **Low** ([`low_level_open_file`]): reads a file from a [`FileSource`]
//! - **Mid** ([`load_config`]): turns the file into a [`Config`]
//! - **High** ([`perform_operation`]): runs the configured operation
//!
//! Each layer wraps the failure of the one below, so the top-level record
//! renders the whole path down to the root cause. [`handle_request`] is the
//! outermost caller that writes the result to a sink.

pub mod config;
pub mod error;
pub mod handler;
pub mod ops;
pub mod source;

pub use config::{Config, Settings};
pub use error::{ErrorHigh, ErrorLow, ErrorMid, HighResult, LowResult, MidResult};
pub use handler::{handle_request, ReportFormat};
pub use ops::{load_config, low_level_open_file, perform_operation, Outcome};
pub use source::{FileSource, FsSource, MemorySource};
