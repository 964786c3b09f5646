pub mod sarif;

use crate::error::{Result, TidySarifError};
use crate::types::diagnostic::DiagnosticRecord;

/// Renders `records` as SARIF JSON, resolving file paths against the
/// current working directory.
pub fn render(records: &[DiagnosticRecord]) -> Result<String> {
    let base = std::env::current_dir().map_err(TidySarifError::CurrentDir)?;
    sarif::to_sarif(records, &base).map_err(TidySarifError::Json)
}
