//! `y = ax² + bx + c`

use serde::{Deserialize, Serialize};

use crate::core::error::{ensure_finite, AnalysisError, Result};
use crate::core::polynomial::{Polynomial, ZERO_EPS};
use crate::core::roots::DISCRIMINANT_TOLERANCE;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuadraticParams {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RootNature {
    TwoDistinctReal,
    OneRepeatedReal,
    ComplexPair,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Opening {
    Upward,
    Downward,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QuadraticProperties {
    pub discriminant: f64,
    pub nature: RootNature,
    pub vertex: (f64, f64),
    pub axis_of_symmetry: f64,
    pub opening: Opening,
}

impl QuadraticParams {
    pub fn eval(&self, x: f64) -> f64 {
        (self.a * x + self.b) * x + self.c
    }

    pub fn polynomial(&self) -> Result<Polynomial> {
        self.check()?;
        Polynomial::new(vec![self.a, self.b, self.c])
    }

    pub fn title(&self) -> String {
        let sign = |v: f64| if v >= 0.0 { '+' } else { '−' };
        format!(
            "y = {:.2}x² {} {:.2}x {} {:.2}",
            self.a,
            sign(self.b),
            self.b.abs(),
            sign(self.c),
            self.c.abs()
        )
    }

    fn check(&self) -> Result<()> {
        ensure_finite(&[self.a, self.b, self.c], "quadratic parameters")?;
        if self.a.abs() < ZERO_EPS {
            return Err(AnalysisError::degenerate("quadratic coefficient a", self.a));
        }
        Ok(())
    }
}

/// `D = b² − 4ac`
pub fn discriminant(a: f64, b: f64, c: f64) -> f64 {
    b * b - 4.0 * a * c
}

pub fn nature(d: f64) -> RootNature {
    if d > 0.0 {
        RootNature::TwoDistinctReal
    } else if d.abs() < DISCRIMINANT_TOLERANCE {
        RootNature::OneRepeatedReal
    } else {
        RootNature::ComplexPair
    }
}

pub fn vertex(p: &QuadraticParams) -> Result<(f64, f64)> {
    p.check()?;
    let x = -p.b / (2.0 * p.a);
    Ok((x, p.eval(x)))
}

pub fn properties(p: &QuadraticParams) -> Result<QuadraticProperties> {
    let vertex = vertex(p)?;
    let d = discriminant(p.a, p.b, p.c);
    if !d.is_finite() {
        return Err(AnalysisError::overflow("quadratic discriminant"));
    }
    Ok(QuadraticProperties {
        discriminant: d,
        nature: nature(d),
        vertex,
        axis_of_symmetry: vertex.0,
        opening: if p.a > 0.0 { Opening::Upward } else { Opening::Downward },
    })
}
