//! Root classifier.
//!
//! General path: companion matrix of the (normalised) coefficient list, eigenvalues
//! through nalgebra's real Schur decomposition. Lines and quadratics take closed-form
//! fast paths that agree with the general path within floating-point tolerance.
//!
//! Classification:
//! - `Real` when `|Im| < imag_tolerance` (1e-8 by default)
//! - `ComplexConjugatePair` otherwise (one entry per eigenvalue)
//! - `Repeated` when several real roots coincide; reported once with a multiplicity
//!
//! Ordering: real roots ascending, then complex roots by (re, im).

use nalgebra::linalg::Schur;
use nalgebra::DMatrix;
use num_complex::Complex64 as C64;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use tracing::{debug, trace};

use crate::core::error::{ensure_finite, AnalysisError, Result};

pub const IMAG_TOLERANCE: f64 = 1e-8;
pub const REPEAT_TOLERANCE: f64 = 1e-6;
pub const DISCRIMINANT_TOLERANCE: f64 = 1e-10;

const SCHUR_MAX_ITER: usize = 10_000;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RootKind {
    Real,
    ComplexConjugatePair,
    Repeated,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Root {
    pub value: C64,
    pub kind: RootKind,
    pub multiplicity: usize,
}

impl Root {
    pub fn real(x: f64) -> Self {
        Self { value: C64::new(x, 0.0), kind: RootKind::Real, multiplicity: 1 }
    }

    pub fn repeated(x: f64, multiplicity: usize) -> Self {
        Self { value: C64::new(x, 0.0), kind: RootKind::Repeated, multiplicity }
    }

    pub fn complex(z: C64) -> Self {
        Self { value: z, kind: RootKind::ComplexConjugatePair, multiplicity: 1 }
    }

    pub fn is_real(&self) -> bool {
        !matches!(self.kind, RootKind::ComplexConjugatePair)
    }

    pub fn re(&self) -> f64 { self.value.re }
    pub fn im(&self) -> f64 { self.value.im }
}

impl Serialize for Root {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Root", 4)?;
        s.serialize_field("re", &self.value.re)?;
        s.serialize_field("im", &self.value.im)?;
        s.serialize_field("kind", &self.kind)?;
        s.serialize_field("multiplicity", &self.multiplicity)?;
        s.end()
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RootOptions {
    pub imag_tolerance: f64,
    pub repeat_tolerance: f64,
    /// Use the linear/quadratic formulas instead of the eigenvalue path.
    pub closed_form: bool,
}

impl Default for RootOptions {
    fn default() -> Self {
        Self {
            imag_tolerance: IMAG_TOLERANCE,
            repeat_tolerance: REPEAT_TOLERANCE,
            closed_form: true,
        }
    }
}

/// Roots of `[a_n, ..., a_0]` (length ≥ 2 after leading zeros are stripped).
pub fn find_roots(coeffs: &[f64], opts: &RootOptions) -> Result<Vec<Root>> {
    ensure_finite(coeffs, "root finder input")?;
    let coeffs = strip_leading_zeros(coeffs);
    if coeffs.len() < 2 {
        return Err(AnalysisError::degenerate("polynomial of degree 0, leading coefficient", 0.0));
    }

    // x^k factors: exact zero roots, kept out of the solver.
    let mut core = coeffs;
    let mut zeros = 0usize;
    while core.len() > 1 && core[core.len() - 1] == 0.0 {
        core = &core[..core.len() - 1];
        zeros += 1;
    }

    // Closed forms decide multiplicity themselves; only solver output is merged by tolerance.
    let (mut values, merge) = match core.len() {
        1 => (Vec::new(), Merge::Exact),
        2 if opts.closed_form => {
            trace!("closed-form linear root");
            (vec![C64::new(-core[1] / core[0], 0.0)], Merge::Exact)
        }
        3 if opts.closed_form => {
            trace!("closed-form quadratic roots");
            (quadratic_formula(core[0], core[1], core[2]), Merge::Exact)
        }
        _ => (companion_roots(core)?, Merge::Tolerance),
    };
    values.extend(std::iter::repeat(C64::new(0.0, 0.0)).take(zeros));

    for z in &values {
        if !z.re.is_finite() || !z.im.is_finite() {
            return Err(AnalysisError::overflow("non-finite root"));
        }
    }
    Ok(classify(&values, opts, merge))
}

/// Real values only; a repeated root appears once.
pub fn real_roots(roots: &[Root]) -> Vec<f64> {
    roots.iter().filter(|r| r.is_real()).map(|r| r.re()).collect()
}

/// Companion matrix in the row form: first row `-a_{n-1}/a_n, ..., -a_0/a_n`,
/// ones on the subdiagonal.
pub fn companion_matrix(coeffs: &[f64]) -> Result<DMatrix<f64>> {
    ensure_finite(coeffs, "companion matrix input")?;
    let coeffs = strip_leading_zeros(coeffs);
    if coeffs.len() < 2 {
        return Err(AnalysisError::degenerate("polynomial of degree 0, leading coefficient", 0.0));
    }
    let n = coeffs.len() - 1;
    let lead = coeffs[0];
    let mut m = DMatrix::<f64>::zeros(n, n);
    for j in 0..n {
        m[(0, j)] = -coeffs[j + 1] / lead;
    }
    for i in 1..n {
        m[(i, i - 1)] = 1.0;
    }
    ensure_finite(m.as_slice(), "companion matrix entries")?;
    Ok(m)
}

/// Eigenvalues of the companion matrix, unclassified, in solver order.
pub fn companion_roots(coeffs: &[f64]) -> Result<Vec<C64>> {
    let m = companion_matrix(coeffs)?;
    let size = m.nrows();
    debug!(size, "companion matrix eigenvalues");
    let schur = Schur::try_new(m, f64::EPSILON, SCHUR_MAX_ITER)
        .ok_or(AnalysisError::SolverDidNotConverge { size })?;
    Ok(schur.complex_eigenvalues().iter().copied().collect())
}

/// `ax² + bx + c`, `a ≠ 0`. Cancellation-free form for the real case.
/// Any positive discriminant gives two distinct roots; only `-1e-10 < D ≤ 0` is repeated.
pub fn quadratic_formula(a: f64, b: f64, c: f64) -> Vec<C64> {
    let d = b * b - 4.0 * a * c;
    if d > 0.0 {
        let sign = if b >= 0.0 { 1.0 } else { -1.0 };
        let q = -0.5 * (b + sign * d.sqrt());
        vec![C64::new(q / a, 0.0), C64::new(c / q, 0.0)]
    } else if d.abs() < DISCRIMINANT_TOLERANCE {
        let r = -b / (2.0 * a);
        vec![C64::new(r, 0.0), C64::new(r, 0.0)]
    } else {
        let re = -b / (2.0 * a);
        let im = (-d).sqrt() / (2.0 * a.abs());
        vec![C64::new(re, im), C64::new(re, -im)]
    }
}

fn strip_leading_zeros(coeffs: &[f64]) -> &[f64] {
    let start = coeffs.iter().position(|&c| c != 0.0).unwrap_or(coeffs.len());
    &coeffs[start..]
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Merge {
    /// Only bit-identical reals are grouped.
    Exact,
    /// Reals within `repeat_tolerance` (relative) are grouped.
    Tolerance,
}

fn classify(values: &[C64], opts: &RootOptions, merge: Merge) -> Vec<Root> {
    let mut reals: Vec<f64> = Vec::new();
    let mut complex: Vec<C64> = Vec::new();
    for z in values {
        if z.im.abs() < opts.imag_tolerance {
            reals.push(z.re);
        } else {
            complex.push(*z);
        }
    }
    reals.sort_by(|a, b| a.total_cmp(b));
    complex.sort_by(|a, b| a.re.total_cmp(&b.re).then(a.im.total_cmp(&b.im)));

    let mut out: Vec<Root> = Vec::with_capacity(values.len());
    let mut i = 0;
    while i < reals.len() {
        let mut j = i + 1;
        while j < reals.len() && coincide(reals[j - 1], reals[j], opts.repeat_tolerance, merge) {
            j += 1;
        }
        let group = &reals[i..j];
        if group.len() == 1 {
            out.push(Root::real(group[0]));
        } else {
            let mean = group.iter().sum::<f64>() / group.len() as f64;
            trace!(x = mean, multiplicity = group.len(), "merged repeated root");
            out.push(Root::repeated(mean, group.len()));
        }
        i = j;
    }
    out.extend(complex.into_iter().map(Root::complex));
    out
}

fn coincide(a: f64, b: f64, tol: f64, merge: Merge) -> bool {
    match merge {
        Merge::Exact => a == b,
        Merge::Tolerance => (a - b).abs() <= tol * a.abs().max(b.abs()).max(1.0),
    }
}
