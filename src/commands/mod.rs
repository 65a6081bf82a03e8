pub mod analyze;
pub mod animate;
pub mod canvas;
pub mod export;
pub mod params;

use std::path::PathBuf;

use crate::core::diagnostics::print_analysis_error;
use crate::core::AnalysisError;

/// Output switches shared by every analysing subcommand.
#[derive(Clone, Debug, Default)]
pub struct OutputOptions {
    pub json: bool,
    pub plot: bool,
    pub export: Option<PathBuf>,
}

/// Prints `err` for the user. Returns true if it was an analysis error
/// (invalid parameters rather than an I/O or config failure).
pub fn report_error(subject: &str, err: &anyhow::Error, json: bool) -> bool {
    match err.downcast_ref::<AnalysisError>() {
        Some(ae) if json => {
            let body = serde_json::json!({ "error": ae.kind(), "message": ae.to_string() });
            eprintln!("{body}");
            true
        }
        Some(ae) => {
            print_analysis_error(subject, ae);
            true
        }
        None => {
            eprintln!("error: {err:#}");
            false
        }
    }
}
