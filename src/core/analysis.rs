//! Analysis facade.
//!
//! Composes the coefficient model, the derivative engine, and the root classifier:
//! - `roots(p)`             → degree 1 solved directly, otherwise companion eigenvalues
//! - `critical_points(p)`   → real roots of p′, tagged with p(x)
//! - `inflection_points(p)` → real roots of p″, tagged with p(x)
//! - `analyze(eq, settings)` → one `Report` per parameter set (single exhaustive match)
//!
//! Everything is recomputed per call; nothing is cached or shared.

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::Settings;
use crate::core::equations::cubic::{self, CubicParams, CubicProperties};
use crate::core::equations::ellipse::{self, EllipseParams, EllipseProperties};
use crate::core::equations::linear::{self, LinearParams, LinearProperties};
use crate::core::equations::polynomial::{self as general, PolynomialProperties};
use crate::core::equations::quadratic::{self, QuadraticParams, QuadraticProperties};
use crate::core::equations::trigonometric::{self, TrigParams, TrigProperties};
use crate::core::error::{AnalysisError, Result};
use crate::core::polynomial::{derivative, horner, is_zero, nth_derivative, Polynomial, ZERO_EPS};
use crate::core::roots::{find_roots, real_roots, Root, RootOptions};
use crate::core::sampling::{parametric_ellipse, sample_fn, Curve};

/// |f⁽ᵏ⁾(x)| below this (relative to the term magnitudes at x) counts as zero.
pub const VANISHING_TOLERANCE: f64 = 1e-8;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PointNature {
    LocalMinimum,
    LocalMaximum,
    /// Horizontal tangent without an extremum (e.g. x³ at 0).
    Stationary,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct CriticalPoint {
    pub x: f64,
    pub y: f64,
    /// Number of consecutive derivatives, starting at the first, that vanish at x.
    pub order: usize,
    pub nature: PointNature,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct InflectionPoint {
    pub x: f64,
    pub y: f64,
    /// Highest k such that f″ … f⁽ᵏ⁾ all vanish at x (at least 2).
    pub order: usize,
    /// False for roots of f″ where the concavity does not flip (e.g. x⁴ at 0).
    pub changes_concavity: bool,
}

/// Anything with an x position that can be filtered against a plot window.
pub trait Located {
    fn x(&self) -> f64;
}

impl Located for f64 {
    fn x(&self) -> f64 { *self }
}

impl Located for CriticalPoint {
    fn x(&self) -> f64 { self.x }
}

impl Located for InflectionPoint {
    fn x(&self) -> f64 { self.x }
}

/// True if `x` lies in the closed window (either bound order accepted).
pub fn in_window(x: f64, range: (f64, f64)) -> bool {
    let (lo, hi) = if range.0 <= range.1 { range } else { (range.1, range.0) };
    (lo..=hi).contains(&x)
}

/// Points whose x lies in the closed window.
pub fn within<P: Located + Clone>(points: &[P], range: (f64, f64)) -> Vec<P> {
    points
        .iter()
        .filter(|p| in_window(p.x(), range))
        .cloned()
        .collect()
}

#[derive(Copy, Clone, Debug, Default)]
pub struct Analyzer {
    pub options: RootOptions,
}

impl Analyzer {
    pub fn new(options: RootOptions) -> Self {
        Self { options }
    }

    pub fn roots(&self, poly: &Polynomial) -> Result<Vec<Root>> {
        if poly.degree() == 1 {
            let (m, c) = (poly.coefficients()[0], poly.coefficients()[1]);
            if m.abs() < ZERO_EPS {
                return Err(AnalysisError::degenerate("slope m", m));
            }
            let x = -c / m;
            if !x.is_finite() {
                return Err(AnalysisError::overflow("x-intercept -c/m"));
            }
            return Ok(vec![Root::real(x)]);
        }
        find_roots(poly.coefficients(), &self.options)
    }

    pub fn critical_points(&self, poly: &Polynomial) -> Result<Vec<CriticalPoint>> {
        let d1 = poly.derivative();
        if d1.len() < 2 || is_zero(&d1) {
            return Ok(Vec::new());
        }
        let xs = real_roots(&find_roots(&d1, &self.options)?);
        xs.into_iter()
            .map(|x| {
                let order = vanishing_order(poly.coefficients(), x, 1)?;
                Ok(CriticalPoint {
                    x,
                    y: poly.eval(x),
                    order,
                    nature: nature_at(poly.coefficients(), x, order)?,
                })
            })
            .collect()
    }

    pub fn inflection_points(&self, poly: &Polynomial) -> Result<Vec<InflectionPoint>> {
        let d2 = poly.second_derivative();
        if d2.len() < 2 || is_zero(&d2) {
            return Ok(Vec::new());
        }
        let xs = real_roots(&find_roots(&d2, &self.options)?);
        xs.into_iter()
            .map(|x| {
                let order = vanishing_order(poly.coefficients(), x, 2)?;
                Ok(InflectionPoint {
                    x,
                    y: poly.eval(x),
                    order,
                    // first non-vanishing derivative has odd order
                    changes_concavity: order % 2 == 0,
                })
            })
            .collect()
    }

    /// Roots plus critical and inflection points. A horizontal line yields no roots
    /// here instead of an error, since the rest of its report is still meaningful.
    fn polynomial_parts(&self, poly: &Polynomial) -> Result<PolynomialParts> {
        let roots = match self.roots(poly) {
            Err(AnalysisError::DegenerateCoefficient { .. }) if poly.degree() == 1 => {
                warn!("horizontal line: no x-intercept");
                Vec::new()
            }
            other => other?,
        };
        Ok(PolynomialParts {
            roots,
            critical_points: self.critical_points(poly)?,
            inflection_points: self.inflection_points(poly)?,
        })
    }
}

struct PolynomialParts {
    roots: Vec<Root>,
    critical_points: Vec<CriticalPoint>,
    inflection_points: Vec<InflectionPoint>,
}

pub fn roots(poly: &Polynomial) -> Result<Vec<Root>> {
    Analyzer::default().roots(poly)
}

pub fn critical_points(poly: &Polynomial) -> Result<Vec<CriticalPoint>> {
    Analyzer::default().critical_points(poly)
}

pub fn inflection_points(poly: &Polynomial) -> Result<Vec<InflectionPoint>> {
    Analyzer::default().inflection_points(poly)
}

fn vanishes(coeffs: &[f64], x: f64) -> bool {
    let n = coeffs.len();
    let scale: f64 = coeffs
        .iter()
        .enumerate()
        .map(|(i, c)| c.abs() * x.abs().powi((n - 1 - i) as i32))
        .sum();
    horner(coeffs, x).abs() <= VANISHING_TOLERANCE * scale.max(1.0)
}

/// `from` is the derivative already known to vanish at x.
fn vanishing_order(coeffs: &[f64], x: f64, from: usize) -> Result<usize> {
    let mut d = nth_derivative(coeffs, from + 1)?;
    let mut order = from;
    while !d.is_empty() && vanishes(&d, x) {
        order += 1;
        d = derivative(&d)?;
    }
    Ok(order)
}

fn nature_at(coeffs: &[f64], x: f64, order: usize) -> Result<PointNature> {
    let first = order + 1;
    let value = horner(&nth_derivative(coeffs, first)?, x);
    Ok(if first % 2 == 1 || value == 0.0 {
        PointNature::Stationary
    } else if value > 0.0 {
        PointNature::LocalMinimum
    } else {
        PointNature::LocalMaximum
    })
}

// ----- equation dispatch -----

#[derive(Clone, Debug, PartialEq)]
pub enum Equation {
    Linear(LinearParams),
    Quadratic(QuadraticParams),
    Cubic(CubicParams),
    Polynomial(Polynomial),
    Ellipse(EllipseParams),
    Trigonometric(TrigParams),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EquationKind {
    Linear,
    Quadratic,
    Cubic,
    Polynomial,
    Ellipse,
    Trigonometric,
}

impl Equation {
    pub fn kind(&self) -> EquationKind {
        match self {
            Equation::Linear(_) => EquationKind::Linear,
            Equation::Quadratic(_) => EquationKind::Quadratic,
            Equation::Cubic(_) => EquationKind::Cubic,
            Equation::Polynomial(_) => EquationKind::Polynomial,
            Equation::Ellipse(_) => EquationKind::Ellipse,
            Equation::Trigonometric(_) => EquationKind::Trigonometric,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Descriptors {
    Linear(LinearProperties),
    Quadratic(QuadraticProperties),
    Cubic(CubicProperties),
    Polynomial(PolynomialProperties),
    Ellipse(EllipseProperties),
    Trigonometric(TrigProperties),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    pub kind: EquationKind,
    pub title: String,
    pub window: (f64, f64),
    pub descriptors: Descriptors,
    pub roots: Vec<Root>,
    pub critical_points: Vec<CriticalPoint>,
    pub inflection_points: Vec<InflectionPoint>,
    /// Plot samples; exported separately, kept out of the JSON report.
    #[serde(skip)]
    pub curve: Curve,
}

pub fn analyze(eq: &Equation, settings: &Settings) -> Result<Report> {
    let analyzer = Analyzer::new(settings.root_options());
    let window = settings.window();
    let clip = settings.clip_bound;
    let kind = eq.kind();
    debug!(?kind, "analyzing parameter set");

    let report = match eq {
        Equation::Linear(p) => {
            let props = linear::properties(p)?;
            let parts = analyzer.polynomial_parts(&p.polynomial()?)?;
            Report {
                kind,
                title: p.title(),
                window,
                descriptors: Descriptors::Linear(props),
                roots: parts.roots,
                critical_points: parts.critical_points,
                inflection_points: parts.inflection_points,
                curve: sample_fn(|x| p.eval(x), window, settings.samples, clip),
            }
        }
        Equation::Quadratic(p) => {
            let props = quadratic::properties(p)?;
            let parts = analyzer.polynomial_parts(&p.polynomial()?)?;
            Report {
                kind,
                title: p.title(),
                window,
                descriptors: Descriptors::Quadratic(props),
                roots: parts.roots,
                critical_points: parts.critical_points,
                inflection_points: parts.inflection_points,
                curve: sample_fn(|x| p.eval(x), window, settings.samples, clip),
            }
        }
        Equation::Cubic(p) => {
            let props = cubic::properties(p)?;
            let parts = analyzer.polynomial_parts(&p.polynomial()?)?;
            Report {
                kind,
                title: p.title(),
                window,
                descriptors: Descriptors::Cubic(props),
                roots: parts.roots,
                critical_points: parts.critical_points,
                inflection_points: parts.inflection_points,
                curve: sample_fn(|x| p.eval(x), window, settings.samples, clip),
            }
        }
        Equation::Polynomial(poly) => {
            let parts = analyzer.polynomial_parts(poly)?;
            Report {
                kind,
                title: poly.title(),
                window,
                descriptors: Descriptors::Polynomial(general::properties(poly, &parts.roots)),
                roots: parts.roots,
                critical_points: parts.critical_points,
                inflection_points: parts.inflection_points,
                curve: sample_fn(|x| poly.eval(x), window, settings.polynomial_samples, clip),
            }
        }
        Equation::Ellipse(p) => Report {
            kind,
            title: p.title(),
            window,
            descriptors: Descriptors::Ellipse(ellipse::properties(p)?),
            roots: Vec::new(),
            critical_points: Vec::new(),
            inflection_points: Vec::new(),
            curve: parametric_ellipse(p.a, p.b, settings.ellipse_samples),
        },
        Equation::Trigonometric(p) => Report {
            kind,
            title: p.title(),
            window,
            descriptors: Descriptors::Trigonometric(trigonometric::properties(p)?),
            roots: Vec::new(),
            critical_points: Vec::new(),
            inflection_points: Vec::new(),
            curve: sample_fn(|x| p.eval(x), window, settings.samples, clip),
        },
    };
    debug!(
        roots = report.roots.len(),
        critical = report.critical_points.len(),
        inflection = report.inflection_points.len(),
        "analysis done"
    );
    Ok(report)
}
