//! General polynomial `y = a_n xⁿ + ... + a_0`, degree 1..=6.

use serde::Serialize;

use crate::core::polynomial::{EndBehavior, Polynomial};
use crate::core::roots::{real_roots, Root};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PolynomialProperties {
    pub degree: usize,
    pub leading_coefficient: f64,
    pub end_behavior: EndBehavior,
    pub real_root_count: usize,
    pub coefficients: Vec<(String, f64)>,
}

/// Descriptors for a validated polynomial; `roots` comes from the facade.
pub fn properties(p: &Polynomial, roots: &[Root]) -> PolynomialProperties {
    PolynomialProperties {
        degree: p.degree(),
        leading_coefficient: p.leading(),
        end_behavior: p.end_behavior(),
        real_root_count: real_roots(roots).len(),
        coefficients: p.coefficient_table(),
    }
}
