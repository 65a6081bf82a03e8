//! Parameter files: one equation per TOML document, selected by `kind`.
//!
//! ```toml
//! kind = "quadratic"
//! a = 1.0
//! b = -3.0
//! c = 2.0
//! ```

use std::fs;
use std::path::Path;
use std::thread::sleep;
use std::time::{Duration, SystemTime};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::warn;

use crate::commands::{analyze, report_error, OutputOptions};
use crate::config::Settings;
use crate::core::equations::{CubicParams, EllipseParams, LinearParams, QuadraticParams, TrigParams};
use crate::core::{Equation, Polynomial};

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EquationSpec {
    Linear(LinearParams),
    Quadratic(QuadraticParams),
    Cubic(CubicParams),
    Polynomial { coefficients: Vec<f64> },
    Ellipse(EllipseParams),
    #[serde(alias = "trig")]
    Trigonometric(TrigParams),
}

impl EquationSpec {
    pub fn into_equation(self) -> crate::core::Result<Equation> {
        Ok(match self {
            EquationSpec::Linear(p) => Equation::Linear(p),
            EquationSpec::Quadratic(p) => Equation::Quadratic(p),
            EquationSpec::Cubic(p) => Equation::Cubic(p),
            EquationSpec::Polynomial { coefficients } => {
                Equation::Polynomial(Polynomial::new(coefficients)?)
            }
            EquationSpec::Ellipse(p) => Equation::Ellipse(p),
            EquationSpec::Trigonometric(p) => Equation::Trigonometric(p),
        })
    }
}

pub fn parse_equation(txt: &str) -> Result<Equation> {
    let spec: EquationSpec = toml::from_str(txt)?;
    Ok(spec.into_equation()?)
}

pub fn load_equation(path: &Path) -> Result<Equation> {
    let txt = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_equation(&txt).with_context(|| format!("parsing {}", path.display()))
}

fn analyze_file(input: &Path, settings: &Settings, out: &OutputOptions) -> Result<()> {
    let eq = load_equation(input)?;
    analyze::run(&eq, settings, out)
}

/// Set to `1` to leave the watch loop after the first analysis.
pub const WATCH_ONCE_ENV: &str = "CURVELAB_WATCH_ONCE";

fn watch_once() -> bool {
    std::env::var(WATCH_ONCE_ENV).ok().as_deref() == Some("1")
}

/// Analyses `input` once, or keeps re-analysing it on every modification.
pub fn run(input: &Path, watch: bool, settings: &Settings, out: &OutputOptions) -> Result<()> {
    if !watch {
        return analyze_file(input, settings, out);
    }
    let subject = input.display().to_string();
    let mtime = || fs::metadata(input).and_then(|m| m.modified()).ok();
    let mut last_mtime = mtime().unwrap_or(SystemTime::UNIX_EPOCH);
    loop {
        if let Err(e) = analyze_file(input, settings, out) {
            report_error(&subject, &e, out.json);
        }
        if watch_once() {
            return Ok(());
        }
        loop {
            sleep(Duration::from_millis(500));
            match mtime() {
                Some(m) if m > last_mtime => {
                    last_mtime = m;
                    println!("[watch] detected change, re-analysing...");
                    break;
                }
                Some(_) => {}
                None => warn!(path = %subject, "input not readable, still watching"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::equations::TrigFunction;
    use crate::core::AnalysisError;

    #[test]
    fn quadratic_file() {
        let eq = parse_equation("kind = \"quadratic\"\na = 1.0\nb = -3.0\nc = 2.0\n").unwrap();
        assert_eq!(eq, Equation::Quadratic(QuadraticParams { a: 1.0, b: -3.0, c: 2.0 }));
    }

    #[test]
    fn trig_alias_and_default_func() {
        let eq = parse_equation("kind = \"trig\"\namplitude = 2.0\nangular_freq = 1.0\nphase = 0.0\n")
            .unwrap();
        match eq {
            Equation::Trigonometric(p) => assert_eq!(p.func, TrigFunction::Sin),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn polynomial_degree_is_checked() {
        let err = parse_equation("kind = \"polynomial\"\ncoefficients = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]\n")
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<AnalysisError>(),
            Some(&AnalysisError::InvalidDegree { degree: 7 })
        );
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!(parse_equation("kind = \"hyperbola\"\na = 1.0\n").is_err());
    }
}
