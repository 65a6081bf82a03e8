//! `y = ax³ + bx² + cx + d`
//!
//! f'(x) = 3ax² + 2bx + c, f''(x) = 6ax + 2b, inflection at x = −b/(3a).

use serde::{Deserialize, Serialize};

use crate::core::error::{ensure_finite, AnalysisError, Result};
use crate::core::polynomial::{Polynomial, ZERO_EPS};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CubicParams {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CubicProperties {
    pub first_derivative: [f64; 3],
    pub second_derivative: [f64; 2],
    /// Closed-form inflection point `(x, f(x))`.
    pub inflection: (f64, f64),
}

impl CubicParams {
    pub fn eval(&self, x: f64) -> f64 {
        ((self.a * x + self.b) * x + self.c) * x + self.d
    }

    pub fn polynomial(&self) -> Result<Polynomial> {
        ensure_finite(&[self.a, self.b, self.c, self.d], "cubic parameters")?;
        if self.a.abs() < ZERO_EPS {
            return Err(AnalysisError::degenerate("cubic coefficient a", self.a));
        }
        Polynomial::new(vec![self.a, self.b, self.c, self.d])
    }

    pub fn title(&self) -> String {
        format!(
            "y = {:.2}x³ + {:.2}x² + {:.2}x + {:.2}",
            self.a, self.b, self.c, self.d
        )
    }
}

/// `x = −b/(3a)`; `None` when `a ≈ 0`.
pub fn cubic_inflection(a: f64, b: f64) -> Option<f64> {
    if a.abs() < ZERO_EPS {
        return None;
    }
    Some(-b / (3.0 * a))
}

pub fn properties(p: &CubicParams) -> Result<CubicProperties> {
    p.polynomial()?;
    let xi = cubic_inflection(p.a, p.b).ok_or_else(|| AnalysisError::degenerate("cubic coefficient a", p.a))?;
    Ok(CubicProperties {
        first_derivative: [3.0 * p.a, 2.0 * p.b, p.c],
        second_derivative: [6.0 * p.a, 2.0 * p.b],
        inflection: (xi, p.eval(xi)),
    })
}
