//! Text plot of a sampled curve with root / critical / inflection markers.

use crate::core::analysis::{within, Report};
use crate::core::roots::real_roots;
use crate::core::sampling::Curve;

pub const CURVE: char = '*';
pub const ROOT: char = 'x';
pub const CRITICAL: char = 'o';
pub const INFLECTION: char = '#';

pub struct Canvas {
    width: usize,
    height: usize,
    x_bounds: (f64, f64),
    y_bounds: (f64, f64),
    cells: Vec<Vec<char>>,
}

impl Canvas {
    /// Degenerate bounds are widened so every point maps somewhere.
    pub fn new(width: usize, height: usize, x_bounds: (f64, f64), y_bounds: (f64, f64)) -> Self {
        let width = width.max(2);
        let height = height.max(2);
        Self {
            width,
            height,
            x_bounds: widen(x_bounds),
            y_bounds: widen(y_bounds),
            cells: vec![vec![' '; width]; height],
        }
    }

    fn col(&self, x: f64) -> Option<usize> {
        let (lo, hi) = self.x_bounds;
        if !(lo..=hi).contains(&x) {
            return None;
        }
        Some((((x - lo) / (hi - lo)) * (self.width - 1) as f64).round() as usize)
    }

    fn row(&self, y: f64) -> Option<usize> {
        let (lo, hi) = self.y_bounds;
        if !(lo..=hi).contains(&y) {
            return None;
        }
        // row 0 is the top
        Some((((hi - y) / (hi - lo)) * (self.height - 1) as f64).round() as usize)
    }

    pub fn axes(&mut self) {
        if let Some(r) = self.row(0.0) {
            for c in 0..self.width {
                self.cells[r][c] = '-';
            }
        }
        if let Some(c) = self.col(0.0) {
            for r in 0..self.height {
                self.cells[r][c] = if self.cells[r][c] == '-' { '+' } else { '|' };
            }
        }
    }

    pub fn plot(&mut self, x: f64, y: f64, ch: char) {
        if let (Some(c), Some(r)) = (self.col(x), self.row(y)) {
            self.cells[r][c] = ch;
        }
    }

    pub fn curve(&mut self, curve: &Curve) {
        for (x, y) in curve.points() {
            if y.is_finite() {
                self.plot(x, y, CURVE);
            }
        }
    }

    pub fn render(&self) -> String {
        self.cells
            .iter()
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn widen((lo, hi): (f64, f64)) -> (f64, f64) {
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    if hi - lo < 1e-12 {
        (lo - 1.0, hi + 1.0)
    } else {
        (lo, hi)
    }
}

/// Min/max over the finite values.
pub fn bounds(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Curve plus markers for everything inside the report's window.
pub fn plot_report(report: &Report, width: usize, height: usize) -> String {
    let Some(xb) = bounds(&report.curve.xs) else {
        return String::from("(no samples)");
    };
    let yb = bounds(&report.curve.ys).unwrap_or((-1.0, 1.0));
    let mut canvas = Canvas::new(width, height, xb, yb);
    canvas.axes();
    canvas.curve(&report.curve);

    let window = report.window;
    for x in within(&real_roots(&report.roots), window) {
        canvas.plot(x, 0.0, ROOT);
    }
    for p in within(&report.critical_points, window) {
        canvas.plot(p.x, p.y, CRITICAL);
    }
    for p in within(&report.inflection_points, window) {
        canvas.plot(p.x, p.y, INFLECTION);
    }

    format!(
        "{}\n[{ROOT}] root  [{CRITICAL}] critical  [{INFLECTION}] inflection   x ∈ [{:.2}, {:.2}]  y ∈ [{:.2}, {:.2}]",
        canvas.render(),
        xb.0,
        xb.1,
        yb.0,
        yb.1
    )
}
