//! `y = mx + c`

use serde::{Deserialize, Serialize};

use crate::core::error::{ensure_finite, Result};
use crate::core::polynomial::{Polynomial, ZERO_EPS};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearParams {
    pub m: f64,
    pub c: f64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Increasing,
    Decreasing,
    Horizontal,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LinearProperties {
    pub slope: f64,
    pub y_intercept: f64,
    /// `None` for a horizontal line.
    pub x_intercept: Option<f64>,
    pub horizontal: bool,
    pub direction: Direction,
}

impl LinearParams {
    pub fn eval(&self, x: f64) -> f64 {
        self.m * x + self.c
    }

    pub fn polynomial(&self) -> Result<Polynomial> {
        Polynomial::new(vec![self.m, self.c])
    }

    pub fn title(&self) -> String {
        if self.c >= 0.0 {
            format!("y = {:.2}x + {:.2}", self.m, self.c)
        } else {
            format!("y = {:.2}x − {:.2}", self.m, self.c.abs())
        }
    }
}

pub fn properties(p: &LinearParams) -> Result<LinearProperties> {
    ensure_finite(&[p.m, p.c], "linear parameters")?;
    let horizontal = p.m.abs() < ZERO_EPS;
    let direction = if horizontal {
        Direction::Horizontal
    } else if p.m > 0.0 {
        Direction::Increasing
    } else {
        Direction::Decreasing
    };
    Ok(LinearProperties {
        slope: p.m,
        y_intercept: p.c,
        x_intercept: (!horizontal).then(|| -p.c / p.m),
        horizontal,
        direction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intercepts() {
        let props = properties(&LinearParams { m: 2.0, c: -4.0 }).unwrap();
        assert_eq!(props.x_intercept, Some(2.0));
        assert_eq!(props.y_intercept, -4.0);
        assert_eq!(props.direction, Direction::Increasing);
    }

    #[test]
    fn horizontal_has_no_x_intercept() {
        let props = properties(&LinearParams { m: 0.0, c: 3.0 }).unwrap();
        assert!(props.horizontal);
        assert_eq!(props.x_intercept, None);
        assert_eq!(props.direction, Direction::Horizontal);
    }

    #[test]
    fn title_sign() {
        assert_eq!(LinearParams { m: 1.0, c: -2.5 }.title(), "y = 1.00x − 2.50");
        assert_eq!(LinearParams { m: -0.5, c: 0.0 }.title(), "y = -0.50x + 0.00");
    }
}
