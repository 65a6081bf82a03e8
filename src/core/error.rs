use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Failure of a single evaluation. Nothing here is fatal to the process.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("Degenerate coefficient: {what} = {value}")]
    DegenerateCoefficient { what: String, value: f64 },

    #[error("Invalid degree: {degree} (expected 1..=6)")]
    InvalidDegree { degree: usize },

    #[error("Numeric overflow: {context}")]
    NumericOverflow { context: String },

    #[error("Eigenvalue solver did not converge for a {size}x{size} companion matrix")]
    SolverDidNotConverge { size: usize },
}

impl AnalysisError {
    pub fn degenerate(what: &str, value: f64) -> Self {
        AnalysisError::DegenerateCoefficient { what: what.to_string(), value }
    }
    pub fn invalid_degree(degree: usize) -> Self { AnalysisError::InvalidDegree { degree } }
    pub fn overflow(context: &str) -> Self {
        AnalysisError::NumericOverflow { context: context.to_string() }
    }

    /// Short machine-friendly tag, used in JSON error output.
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::DegenerateCoefficient { .. } => "degenerate_coefficient",
            AnalysisError::InvalidDegree { .. } => "invalid_degree",
            AnalysisError::NumericOverflow { .. } => "numeric_overflow",
            AnalysisError::SolverDidNotConverge { .. } => "solver_did_not_converge",
        }
    }
}

/// Rejects NaN/inf before anything reaches the solver.
pub fn ensure_finite(values: &[f64], context: &str) -> Result<()> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(AnalysisError::overflow(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test] fn test_degenerate_message() {
        let err = AnalysisError::degenerate("slope m", 0.0);
        assert_eq!(format!("{}", err), "Degenerate coefficient: slope m = 0");
    }
    #[test] fn test_invalid_degree_message() {
        let err = AnalysisError::invalid_degree(9);
        assert_eq!(format!("{}", err), "Invalid degree: 9 (expected 1..=6)");
    }
    #[test] fn test_overflow_kind() {
        assert_eq!(AnalysisError::overflow("x").kind(), "numeric_overflow");
    }
    #[test] fn test_ensure_finite() {
        assert!(ensure_finite(&[1.0, -2.5], "coeffs").is_ok());
        assert!(ensure_finite(&[1.0, f64::NAN], "coeffs").is_err());
        assert!(ensure_finite(&[f64::INFINITY], "coeffs").is_err());
    }
}
