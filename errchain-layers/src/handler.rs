//! Top-level request handling

use crate::config::Settings;
use crate::ops::perform_operation;
use crate::source::FileSource;
use std::io::{self, Write};
use tracing::{error, info};

/// How [`handle_request`] writes its report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// `Top-level error: <chain>` or `Success!`
    #[default]
    Text,
    /// Pretty JSON of the failed record or of the outcome
    Json,
}

/// Run one request and report the result.
///
/// On failure the record is written to `err` and `false` is returned; on
/// success the report goes to `out`. In text mode the failure line is
/// `Top-level error: <chain>`.
pub fn handle_request<O, E>(
    source: &impl FileSource,
    settings: &Settings,
    format: ReportFormat,
    out: &mut O,
    err: &mut E,
) -> io::Result<bool>
where
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    match perform_operation(source, settings) {
        Ok(outcome) => {
            info!(name = %outcome.name, values = outcome.values, "request succeeded");
            match format {
                ReportFormat::Text => writeln!(out, "Success!")?,
                ReportFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&outcome)?)?,
            }
            Ok(true)
        }
        Err(record) => {
            error!(
                code = %record.code(),
                depth = record.depth(),
                root_cause = record.root_cause().unwrap_or_default(),
                "request failed"
            );
            match format {
                ReportFormat::Text => writeln!(err, "Top-level error: {}", record)?,
                ReportFormat::Json => writeln!(err, "{}", serde_json::to_string_pretty(&record)?)?,
            }
            Ok(false)
        }
    }
}
