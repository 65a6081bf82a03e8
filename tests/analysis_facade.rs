use curvelab::config::Settings;
use curvelab::core::analysis::{analyze, critical_points, inflection_points, Descriptors, PointNature};
use curvelab::core::equations::cubic::{self, cubic_inflection, CubicParams};
use curvelab::core::equations::{LinearParams, QuadraticParams};
use curvelab::core::polynomial::{derivative, nth_derivative};
use curvelab::core::{AnalysisError, Equation, Polynomial};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

#[test]
fn cubic_second_derivative_and_inflection() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..100 {
        let a: f64 = rng.gen_range(0.2..4.0) * if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        let b: f64 = rng.gen_range(-6.0..6.0);
        let c: f64 = rng.gen_range(-6.0..6.0);
        let d: f64 = rng.gen_range(-6.0..6.0);
        let coeffs = [a, b, c, d];
        assert_eq!(nth_derivative(&coeffs, 2).unwrap(), vec![6.0 * a, 2.0 * b]);

        let p = Polynomial::new(coeffs.to_vec()).unwrap();
        let infl = inflection_points(&p).unwrap();
        assert_eq!(infl.len(), 1);
        let want = cubic_inflection(a, b).unwrap();
        assert!(approx_eq(infl[0].x, want, 1e-6), "{} vs {want}", infl[0].x);
        assert!(infl[0].changes_concavity);
    }
}

#[test]
fn x_cubed_minus_3x() {
    let p = Polynomial::new(vec![1.0, 0.0, -3.0, 0.0]).unwrap();
    assert_eq!(derivative(p.coefficients()).unwrap(), vec![3.0, 0.0, -3.0]);
    let crit = critical_points(&p).unwrap();
    assert_eq!(crit.len(), 2);
    assert!(approx_eq(crit[0].x, -1.0, 1e-12) && approx_eq(crit[0].y, 2.0, 1e-12));
    assert!(approx_eq(crit[1].x, 1.0, 1e-12) && approx_eq(crit[1].y, -2.0, 1e-12));
    assert_eq!(crit[0].nature, PointNature::LocalMaximum);
    assert_eq!(crit[1].nature, PointNature::LocalMinimum);

    let infl = inflection_points(&p).unwrap();
    assert_eq!(infl.len(), 1);
    assert!(approx_eq(infl[0].x, 0.0, 1e-12));
}

#[test]
fn quartic_critical_points() {
    // x^4 - 2x^2: minima at ±1, maximum at 0
    let p = Polynomial::new(vec![1.0, 0.0, -2.0, 0.0, 0.0]).unwrap();
    let crit = critical_points(&p).unwrap();
    let natures: Vec<PointNature> = crit.iter().map(|c| c.nature).collect();
    assert_eq!(
        natures,
        vec![PointNature::LocalMinimum, PointNature::LocalMaximum, PointNature::LocalMinimum]
    );
    assert_eq!(inflection_points(&p).unwrap().len(), 2);
}

#[test]
fn report_for_cubic_matches_facade() {
    let eq = Equation::Cubic(CubicParams { a: 2.0, b: -3.0, c: 0.0, d: 1.0 });
    let report = analyze(&eq, &Settings::default()).unwrap();
    let Descriptors::Cubic(props) = &report.descriptors else {
        panic!("expected cubic descriptors");
    };
    assert_eq!(props.second_derivative, [12.0, -6.0]);
    assert_eq!(report.inflection_points.len(), 1);
    assert!(approx_eq(report.inflection_points[0].x, props.inflection.0, 1e-9));
    assert_eq!(report.critical_points.len(), 2);
    assert_eq!(report.curve.len(), 1000);
}

#[test]
fn degenerate_parameter_sets_are_errors() {
    let s = Settings::default();
    assert!(matches!(
        analyze(&Equation::Quadratic(QuadraticParams { a: 0.0, b: 1.0, c: 1.0 }), &s),
        Err(AnalysisError::DegenerateCoefficient { .. })
    ));
    assert!(matches!(
        cubic::properties(&CubicParams { a: 0.0, b: 1.0, c: 0.0, d: 0.0 }),
        Err(AnalysisError::DegenerateCoefficient { .. })
    ));
    assert!(matches!(
        analyze(&Equation::Linear(LinearParams { m: f64::NAN, c: 0.0 }), &s),
        Err(AnalysisError::NumericOverflow { .. })
    ));
    assert_eq!(
        Polynomial::new(vec![1.0; 9]),
        Err(AnalysisError::InvalidDegree { degree: 8 })
    );
}

#[test]
fn polynomial_report_uses_polynomial_samples() {
    let settings = Settings { polynomial_samples: 321, ..Settings::default() };
    let p = Polynomial::new(vec![1.0, 0.0, 0.0, 0.0, -1.0]).unwrap();
    let report = analyze(&Equation::Polynomial(p), &settings).unwrap();
    assert_eq!(report.curve.len(), 321);
    assert_eq!(report.roots.iter().filter(|r| r.is_real()).count(), 2);
    assert_eq!(report.roots.len(), 4);
}
