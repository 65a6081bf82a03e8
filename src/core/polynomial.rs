//! Coefficient model and derivative engine.
//!
//! Coefficients are always stored highest degree first: `[a_n, ..., a_1, a_0]`.
//! - `Polynomial::new(coeffs)` → validated model (degree 1..=6)
//! - `Polynomial::trimmed(coeffs)` → same, after dropping zero leading coefficients
//! - `derivative(coeffs)` / `nth_derivative(coeffs, k)` → power rule on raw slices
//! - `horner(coeffs, x)` → evaluation

use serde::Serialize;

use crate::core::error::{ensure_finite, AnalysisError, Result};

pub const MIN_DEGREE: usize = 1;
pub const MAX_DEGREE: usize = 6;

/// Coefficients smaller than this are treated as absent (titles, trimming).
pub const ZERO_EPS: f64 = 1e-12;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Polynomial {
    degree: usize,
    coefficients: Vec<f64>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EndBehavior {
    PlusInfinity,
    MinusInfinity,
    Constant,
}

impl Polynomial {
    /// Degree is implied by the coefficient count.
    pub fn new(coefficients: Vec<f64>) -> Result<Self> {
        if coefficients.is_empty() {
            return Err(AnalysisError::invalid_degree(0));
        }
        let degree = coefficients.len() - 1;
        if !(MIN_DEGREE..=MAX_DEGREE).contains(&degree) {
            return Err(AnalysisError::invalid_degree(degree));
        }
        ensure_finite(&coefficients, "polynomial coefficients")?;
        // Only a line may have a vanishing leading term (horizontal line).
        if degree >= 2 && coefficients[0] == 0.0 {
            return Err(AnalysisError::degenerate(
                &format!("leading coefficient a_{degree}"),
                0.0,
            ));
        }
        Ok(Self { degree, coefficients })
    }

    /// Explicit degree, e.g. from a degree selector followed by per-term inputs.
    pub fn with_degree(degree: usize, coefficients: Vec<f64>) -> Result<Self> {
        if coefficients.len() != degree + 1 {
            return Err(AnalysisError::invalid_degree(degree));
        }
        Self::new(coefficients)
    }

    /// Drops leading (near) zero coefficients before validating, but never below
    /// a line: `[0, 0, 3]` becomes the horizontal line `[0, 3]`.
    pub fn trimmed(coefficients: &[f64]) -> Result<Self> {
        let keep = coefficients.len().min(MIN_DEGREE + 1);
        let limit = coefficients.len() - keep;
        let start = coefficients[..limit]
            .iter()
            .position(|c| c.abs() >= ZERO_EPS || !c.is_finite())
            .unwrap_or(limit);
        Self::new(coefficients[start..].to_vec())
    }

    pub fn degree(&self) -> usize { self.degree }
    pub fn coefficients(&self) -> &[f64] { &self.coefficients }
    pub fn leading(&self) -> f64 { self.coefficients[0] }

    pub fn eval(&self, x: f64) -> f64 {
        horner(&self.coefficients, x)
    }

    /// First derivative coefficients; a line yields a single constant.
    pub fn derivative(&self) -> Vec<f64> {
        power_rule(&self.coefficients)
    }

    pub fn second_derivative(&self) -> Vec<f64> {
        power_rule(&power_rule(&self.coefficients))
    }

    /// Behaviour of y as x → +∞.
    pub fn end_behavior(&self) -> EndBehavior {
        let lead = self.leading();
        if lead > 0.0 {
            EndBehavior::PlusInfinity
        } else if lead < 0.0 {
            EndBehavior::MinusInfinity
        } else {
            EndBehavior::Constant
        }
    }

    /// `y = 1.00x^3 + -3.00x`; terms with |c| < 1e-12 are skipped.
    pub fn title(&self) -> String {
        let terms: Vec<String> = self
            .coefficients
            .iter()
            .enumerate()
            .filter(|(_, c)| c.abs() >= ZERO_EPS)
            .map(|(i, c)| match self.degree - i {
                0 => format!("{c:.2}"),
                1 => format!("{c:.2}x"),
                d => format!("{c:.2}x^{d}"),
            })
            .collect();
        if terms.is_empty() {
            "y = 0".to_string()
        } else {
            format!("y = {}", terms.join(" + "))
        }
    }

    /// `(label, coefficient)` pairs, highest power first.
    pub fn coefficient_table(&self) -> Vec<(String, f64)> {
        self.coefficients
            .iter()
            .enumerate()
            .map(|(i, &c)| (format!("x^{}", self.degree - i), c))
            .collect()
    }

    pub fn coefficient_table_text(&self) -> String {
        table_text(&self.coefficient_table())
    }
}

/// Two-row text table (labels over values, 4 decimals, right-aligned).
pub fn table_text(rows: &[(String, f64)]) -> String {
    let cells: Vec<(&str, String)> = rows
        .iter()
        .map(|(label, c)| (label.as_str(), format!("{c:.4}")))
        .collect();
    let widths: Vec<usize> = cells.iter().map(|(l, v)| l.len().max(v.len())).collect();
    let header: Vec<String> = cells
        .iter()
        .zip(&widths)
        .map(|((l, _), w)| format!("{l:>w$}"))
        .collect();
    let values: Vec<String> = cells
        .iter()
        .zip(&widths)
        .map(|((_, v), w)| format!("{v:>w$}"))
        .collect();
    format!("| {} |\n| {} |", header.join(" | "), values.join(" | "))
}

/// Horner evaluation of `[a_n, ..., a_0]` at `x`. Empty input is the zero polynomial.
pub fn horner(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().fold(0.0, |acc, &c| acc * x + c)
}

/// Power-rule derivative: `[a_n, ..., a_0]` → `[n·a_n, ..., 1·a_1]`.
///
/// The constant term is dropped, so a constant maps to an empty list.
/// Fails only on an empty input.
pub fn derivative(coeffs: &[f64]) -> Result<Vec<f64>> {
    if coeffs.is_empty() {
        return Err(AnalysisError::invalid_degree(0));
    }
    Ok(power_rule(coeffs))
}

/// `k`-th derivative. Differentiating past the constant term yields an empty list.
pub fn nth_derivative(coeffs: &[f64], k: usize) -> Result<Vec<f64>> {
    if coeffs.is_empty() {
        return Err(AnalysisError::invalid_degree(0));
    }
    Ok((0..k).fold(coeffs.to_vec(), |acc, _| power_rule(&acc)))
}

fn power_rule(coeffs: &[f64]) -> Vec<f64> {
    let n = coeffs.len();
    if n <= 1 {
        return Vec::new();
    }
    coeffs[..n - 1]
        .iter()
        .enumerate()
        .map(|(i, &c)| c * (n - 1 - i) as f64)
        .collect()
}

/// True for an empty list or one whose entries are all exactly zero.
pub fn is_zero(coeffs: &[f64]) -> bool {
    coeffs.iter().all(|&c| c == 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivative_power_rule() {
        assert_eq!(derivative(&[1.0, 0.0, -3.0, 0.0]).unwrap(), vec![3.0, 0.0, -3.0]);
        assert_eq!(derivative(&[4.0, 7.0]).unwrap(), vec![4.0]);
        assert!(derivative(&[5.0]).unwrap().is_empty());
    }

    #[test]
    fn derivative_rejects_empty() {
        assert_eq!(derivative(&[]), Err(AnalysisError::InvalidDegree { degree: 0 }));
        assert!(nth_derivative(&[], 2).is_err());
    }

    #[test]
    fn second_derivative_of_cubic() {
        let (a, b) = (2.0, -5.0);
        let d2 = nth_derivative(&[a, b, 1.0, 9.0], 2).unwrap();
        assert_eq!(d2, vec![6.0 * a, 2.0 * b]);
        let p = Polynomial::new(vec![a, b, 1.0, 9.0]).unwrap();
        assert_eq!(p.second_derivative(), d2);
    }

    #[test]
    fn nth_derivative_runs_out() {
        assert!(nth_derivative(&[1.0, 2.0], 3).unwrap().is_empty());
        assert_eq!(nth_derivative(&[1.0, 2.0], 0).unwrap(), vec![1.0, 2.0]);
    }

    #[test]
    fn degree_bounds() {
        assert_eq!(
            Polynomial::new(vec![1.0; 8]),
            Err(AnalysisError::InvalidDegree { degree: 7 })
        );
        assert_eq!(
            Polynomial::new(vec![3.0]),
            Err(AnalysisError::InvalidDegree { degree: 0 })
        );
        assert!(Polynomial::new(vec![1.0; 7]).is_ok());
        assert!(Polynomial::with_degree(2, vec![1.0, 2.0]).is_err());
    }

    #[test]
    fn leading_zero_only_for_lines() {
        assert!(Polynomial::new(vec![0.0, 4.0]).is_ok());
        assert!(matches!(
            Polynomial::new(vec![0.0, 1.0, 2.0]),
            Err(AnalysisError::DegenerateCoefficient { .. })
        ));
    }

    #[test]
    fn non_finite_is_overflow() {
        assert!(matches!(
            Polynomial::new(vec![1.0, f64::NAN]),
            Err(AnalysisError::NumericOverflow { .. })
        ));
    }

    #[test]
    fn trimmed_drops_leading_zeros() {
        let p = Polynomial::trimmed(&[0.0, 0.0, 2.0, -1.0, 0.5]).unwrap();
        assert_eq!(p.degree(), 2);
        assert_eq!(p.coefficients(), &[2.0, -1.0, 0.5]);
        let line = Polynomial::trimmed(&[0.0, 0.0, 3.0]).unwrap();
        assert_eq!(line.coefficients(), &[0.0, 3.0]);
        assert_eq!(Polynomial::trimmed(&[0.0, 3.0]).unwrap().degree(), 1);
        assert!(Polynomial::trimmed(&[3.0]).is_err());
        assert!(Polynomial::trimmed(&[]).is_err());
    }

    #[test]
    fn horner_matches_direct() {
        let p = Polynomial::new(vec![2.0, -3.0, 0.0, 5.0]).unwrap();
        let x = 1.5_f64;
        let direct = 2.0 * x.powi(3) - 3.0 * x.powi(2) + 5.0;
        assert!((p.eval(x) - direct).abs() < 1e-12);
    }

    #[test]
    fn title_skips_zero_terms() {
        let p = Polynomial::new(vec![1.0, 0.0, -3.0, 0.0]).unwrap();
        assert_eq!(p.title(), "y = 1.00x^3 + -3.00x");
        let flat = Polynomial::new(vec![0.0, 0.0]).unwrap();
        assert_eq!(flat.title(), "y = 0");
    }

    #[test]
    fn end_behavior_follows_leading_sign() {
        assert_eq!(Polynomial::new(vec![-1.0, 0.0, 0.0]).unwrap().end_behavior(), EndBehavior::MinusInfinity);
        assert_eq!(Polynomial::new(vec![0.0, 3.0]).unwrap().end_behavior(), EndBehavior::Constant);
    }
}
