// src/core/diagnostics.rs
//! Pretty, colored diagnostics for analysis failures.

use colored::Colorize;

use crate::core::error::AnalysisError;

/// What the user can change to get a valid parameter set.
pub fn hint(err: &AnalysisError) -> &'static str {
    match err {
        AnalysisError::DegenerateCoefficient { .. } => {
            "the leading coefficient (or semi-axis) must be non-zero for this equation kind"
        }
        AnalysisError::InvalidDegree { .. } => "pass between 2 and 7 coefficients (degree 1 to 6)",
        AnalysisError::NumericOverflow { .. } => "use finite coefficients of moderate magnitude",
        AnalysisError::SolverDidNotConverge { .. } => {
            "rescale the coefficients; the eigenvalue iteration stalled"
        }
    }
}

/// Plain-text rendering (no colors), e.g. for logs and tests.
pub fn render_analysis_error(subject: &str, err: &AnalysisError) -> String {
    format!("error: {err}\n  --> {subject}\n   = hint: {}\n", hint(err))
}

pub fn print_analysis_error(subject: &str, err: &AnalysisError) {
    eprintln!("{} {}", "error:".bright_red().bold(), err.to_string().bright_white());
    eprintln!("  {} {}", "-->".bright_blue(), subject.bright_white());
    eprintln!("   {} {}", "=".dimmed(), format!("hint: {}", hint(err)).dimmed());
    eprintln!();
}
