//! `y = A·sin(Bx + C)` and `y = A·cos(Bx + C)`, plus the phase-sweep animation frames.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::core::error::{ensure_finite, Result};
use crate::core::polynomial::ZERO_EPS;
use crate::core::sampling::{clip_y, safe_linspace};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrigFunction {
    #[default]
    Sin,
    Cos,
}

impl TrigFunction {
    pub fn apply(self, arg: f64) -> f64 {
        match self {
            TrigFunction::Sin => arg.sin(),
            TrigFunction::Cos => arg.cos(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TrigFunction::Sin => "sin",
            TrigFunction::Cos => "cos",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrigParams {
    #[serde(default)]
    pub func: TrigFunction,
    /// A
    pub amplitude: f64,
    /// B
    pub angular_freq: f64,
    /// C, radians
    pub phase: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrigProperties {
    pub amplitude: f64,
    /// `(−|A|, +|A|)`
    pub envelope: (f64, f64),
    pub angular_freq: f64,
    /// `2π/|B|`; infinite for `B ≈ 0`.
    pub period: f64,
    pub frequency: f64,
    /// `−C/B`; zero for `B ≈ 0`.
    pub phase_shift: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Frame {
    pub phase: f64,
    pub ys: Vec<f64>,
}

impl TrigParams {
    pub fn eval(&self, x: f64) -> f64 {
        self.eval_shifted(x, 0.0)
    }

    /// Value with an extra phase offset `φ`: `A·f(Bx + C + φ)`.
    pub fn eval_shifted(&self, x: f64, phi: f64) -> f64 {
        self.amplitude * self.func.apply(self.angular_freq * x + self.phase + phi)
    }

    pub fn title(&self) -> String {
        let c = if self.phase >= 0.0 {
            format!("+{:.2}", self.phase)
        } else {
            format!("{:.2}", self.phase)
        };
        format!(
            "y = {:.2}·{}({:.2}x {})",
            self.amplitude,
            self.func.name(),
            self.angular_freq,
            c
        )
    }
}

pub fn properties(p: &TrigParams) -> Result<TrigProperties> {
    ensure_finite(&[p.amplitude, p.angular_freq, p.phase], "trigonometric parameters")?;
    let amplitude = p.amplitude.abs();
    let envelope = (-amplitude, amplitude);
    if p.angular_freq.abs() < ZERO_EPS {
        return Ok(TrigProperties {
            amplitude,
            envelope,
            angular_freq: 0.0,
            period: f64::INFINITY,
            frequency: 0.0,
            phase_shift: 0.0,
        });
    }
    let b = p.angular_freq;
    Ok(TrigProperties {
        amplitude,
        envelope,
        angular_freq: b,
        period: 2.0 * PI / b.abs(),
        frequency: b.abs() / (2.0 * PI),
        phase_shift: -p.phase / b,
    })
}

/// One frame per phase offset `φ_k`, `φ` evenly spaced over `[0, 2π]`.
pub fn phase_sweep(p: &TrigParams, xs: &[f64], frames: usize, clip: f64) -> Vec<Frame> {
    safe_linspace(0.0, 2.0 * PI, frames)
        .into_iter()
        .map(|phi| Frame {
            phase: phi,
            ys: xs.iter().map(|&x| clip_y(p.eval_shifted(x, phi), clip)).collect(),
        })
        .collect()
}
