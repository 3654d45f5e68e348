//! The layered operations
//!
//! Each layer returns a record typed to its own code set and wraps whatever
//! the layer below reported:
//!
//! ```text
//! perform_operation  (ErrorHigh)
//!   └─ load_config   (ErrorMid)
//!        └─ low_level_open_file (ErrorLow)
//! ```

use crate::config::{Config, Settings};
use crate::error::{self, ErrorHigh, ErrorMid, HighResult, LowResult, MidResult, ResultExt};
use crate::source::FileSource;
use serde::Serialize;
use tracing::debug;

/// What a successful operation produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    /// Name taken from the loaded config
    pub name: String,
    /// Number of values the config carried
    pub values: usize,
}

/// Low layer: read `filename` from the source
pub fn low_level_open_file(source: &impl FileSource, filename: &str) -> LowResult<String> {
    source.read(filename).map_err(|e| {
        let err = error::from_io(filename, &e);
        debug!(error = %err.message(), "open failed");
        err
    })
}

/// Mid layer: open and parse the config named by `settings`
pub fn load_config(source: &impl FileSource, settings: &Settings) -> MidResult<Config> {
    let contents = low_level_open_file(source, &settings.config_path)
        .wrap_err_with(ErrorMid::ConfigLoadFailed, || settings.config_details.clone())
        .inspect_err(|err| debug!(depth = err.depth(), "wrapped into config layer"))?;

    serde_json::from_str(&contents)
        .map_err(|e| error::config_parse_failed(&settings.config_path, e.to_string()))
}

/// High layer: run the operation described by the config
pub fn perform_operation(source: &impl FileSource, settings: &Settings) -> HighResult<Outcome> {
    let config = load_config(source, settings)
        .wrap_err_with(ErrorHigh::OperationFailed, || settings.operation_details.clone())
        .inspect_err(|err| debug!(depth = err.depth(), "wrapped into operation layer"))?;

    Ok(Outcome {
        name: config.name,
        values: config.settings.len(),
    })
}
