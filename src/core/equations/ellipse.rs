//! Ellipse `x²/a² + y²/b² = 1`.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::core::error::{ensure_finite, AnalysisError, Result};

/// Semi-axes closer than this are reported as a circle.
pub const CIRCLE_TOLERANCE: f64 = 1e-6;
const AXIS_EPS: f64 = 1e-9;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EllipseParams {
    pub a: f64,
    pub b: f64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    X,
    Y,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EllipseProperties {
    pub semi_major: f64,
    pub semi_minor: f64,
    pub area: f64,
    pub eccentricity: f64,
    pub focal_distance: f64,
    pub major_axis_length: f64,
    pub minor_axis_length: f64,
    pub major_axis_along: Axis,
    pub is_circle: bool,
    /// (a,0), (−a,0), (0,b), (0,−b)
    pub vertices: [(f64, f64); 4],
    pub foci: [(f64, f64); 2],
}

impl EllipseParams {
    pub fn title(&self) -> String {
        format!("x²/{:.2}² + y²/{:.2}² = 1", self.a, self.b)
    }
}

pub fn properties(p: &EllipseParams) -> Result<EllipseProperties> {
    ensure_finite(&[p.a, p.b], "ellipse semi-axes")?;
    if p.a.abs() < AXIS_EPS {
        return Err(AnalysisError::degenerate("semi-axis a", p.a));
    }
    if p.b.abs() < AXIS_EPS {
        return Err(AnalysisError::degenerate("semi-axis b", p.b));
    }

    let (ax, by) = (p.a.abs(), p.b.abs());
    let major = ax.max(by);
    let minor = ax.min(by);
    let is_circle = (ax - by).abs() < CIRCLE_TOLERANCE;
    let (eccentricity, focal_distance) = if is_circle {
        (0.0, 0.0)
    } else {
        (
            (1.0 - (minor / major).powi(2)).sqrt(),
            (major * major - minor * minor).sqrt(),
        )
    };
    let major_axis_along = if ax >= by { Axis::X } else { Axis::Y };
    let foci = match major_axis_along {
        Axis::X => [(focal_distance, 0.0), (-focal_distance, 0.0)],
        Axis::Y => [(0.0, focal_distance), (0.0, -focal_distance)],
    };

    Ok(EllipseProperties {
        semi_major: major,
        semi_minor: minor,
        area: PI * ax * by,
        eccentricity,
        focal_distance,
        major_axis_length: 2.0 * major,
        minor_axis_length: 2.0 * minor,
        major_axis_along,
        is_circle,
        vertices: [(p.a, 0.0), (-p.a, 0.0), (0.0, p.b), (0.0, -p.b)],
        foci,
    })
}
