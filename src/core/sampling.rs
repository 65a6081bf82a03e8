//! Plot-ready sample generation.

use std::f64::consts::PI;

use serde::Serialize;

/// Default |y| clip applied before values are handed to a plotter.
pub const CLIP_BOUND: f64 = 1e6;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Curve {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl Curve {
    pub fn len(&self) -> usize { self.xs.len() }
    pub fn is_empty(&self) -> bool { self.xs.is_empty() }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }
}

/// Evenly spaced points including both ends. An empty or inverted range
/// becomes `[start, start + 1e-6]`.
pub fn safe_linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    let end = if start >= end { start + 1e-6 } else { end };
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

pub fn clip_y(y: f64, bound: f64) -> f64 {
    if y.is_nan() {
        return y;
    }
    y.clamp(-bound, bound)
}

/// Samples `f` over `range` and clips the result.
pub fn sample_fn<F>(f: F, range: (f64, f64), n: usize, bound: f64) -> Curve
where
    F: Fn(f64) -> f64,
{
    let xs = safe_linspace(range.0, range.1, n);
    let ys = xs.iter().map(|&x| clip_y(f(x), bound)).collect();
    Curve { xs, ys }
}

/// `x = a·cos t`, `y = b·sin t` for `t ∈ [0, 2π]`; first and last points coincide.
pub fn parametric_ellipse(a: f64, b: f64, n: usize) -> Curve {
    let ts = safe_linspace(0.0, 2.0 * PI, n);
    Curve {
        xs: ts.iter().map(|t| a * t.cos()).collect(),
        ys: ts.iter().map(|t| b * t.sin()).collect(),
    }
}
