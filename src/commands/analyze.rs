//! One-shot analysis: evaluate a parameter set, print the report, optionally plot/export.

use std::fmt::Write as _;

use anyhow::Result;
use colored::Colorize;
use tracing::info;

use crate::commands::{canvas, export, OutputOptions};
use crate::config::Settings;
use crate::core::analysis::{analyze, in_window, Descriptors, EquationKind, PointNature, Report};
use crate::core::equations::ellipse::Axis;
use crate::core::equations::linear::Direction;
use crate::core::equations::quadratic::{Opening, RootNature};
use crate::core::polynomial::{table_text, EndBehavior};
use crate::core::roots::{Root, RootKind};
use crate::core::Equation;

pub const PLOT_WIDTH: usize = 72;
pub const PLOT_HEIGHT: usize = 20;

pub fn run(eq: &Equation, settings: &Settings, out: &OutputOptions) -> Result<()> {
    let report = analyze(eq, settings)?;
    if out.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_text(&report));
        if out.plot {
            println!();
            println!("{}", canvas::plot_report(&report, PLOT_WIDTH, PLOT_HEIGHT));
        }
    }
    if let Some(path) = &out.export {
        export::write_report(path, &report)?;
        info!(path = %path.display(), samples = report.curve.len(), "exported curve");
    }
    Ok(())
}

fn kind_label(kind: EquationKind) -> &'static str {
    match kind {
        EquationKind::Linear => "Linear",
        EquationKind::Quadratic => "Quadratic",
        EquationKind::Cubic => "Cubic",
        EquationKind::Polynomial => "Polynomial",
        EquationKind::Ellipse => "Ellipse",
        EquationKind::Trigonometric => "Trigonometric",
    }
}

fn fmt_point((x, y): (f64, f64)) -> String {
    format!("({x:.4}, {y:.4})")
}

fn descriptor_lines(d: &Descriptors) -> Vec<(&'static str, String)> {
    match d {
        Descriptors::Linear(p) => vec![
            ("slope", format!("{:.4}", p.slope)),
            ("y-intercept", format!("{:.4}", p.y_intercept)),
            (
                "x-intercept",
                p.x_intercept
                    .map(|x| format!("{x:.4}"))
                    .unwrap_or_else(|| "none (m = 0)".to_string()),
            ),
            (
                "direction",
                match p.direction {
                    Direction::Increasing => "increasing ↑",
                    Direction::Decreasing => "decreasing ↓",
                    Direction::Horizontal => "horizontal →",
                }
                .to_string(),
            ),
        ],
        Descriptors::Quadratic(p) => vec![
            ("discriminant", format!("{:.4}", p.discriminant)),
            (
                "nature",
                match p.nature {
                    RootNature::TwoDistinctReal => "two distinct real roots",
                    RootNature::OneRepeatedReal => "one repeated real root",
                    RootNature::ComplexPair => "two complex roots",
                }
                .to_string(),
            ),
            ("vertex", fmt_point(p.vertex)),
            ("axis of symmetry", format!("x = {:.4}", p.axis_of_symmetry)),
            (
                "opening",
                match p.opening {
                    Opening::Upward => "upward ∪",
                    Opening::Downward => "downward ∩",
                }
                .to_string(),
            ),
        ],
        Descriptors::Cubic(p) => {
            let [a, b, c] = p.first_derivative;
            let [a2, b2] = p.second_derivative;
            vec![
                ("f'(x)", format!("{a:.2}x² + {b:.2}x + {c:.2}")),
                ("f''(x)", format!("{a2:.2}x + {b2:.2}")),
                ("inflection (−b/3a)", fmt_point(p.inflection)),
            ]
        }
        Descriptors::Polynomial(p) => vec![
            ("degree", p.degree.to_string()),
            ("leading coefficient", format!("{:.4}", p.leading_coefficient)),
            (
                "end behaviour",
                match p.end_behavior {
                    EndBehavior::PlusInfinity => "y → +∞ as x → +∞",
                    EndBehavior::MinusInfinity => "y → −∞ as x → +∞",
                    EndBehavior::Constant => "constant",
                }
                .to_string(),
            ),
            ("real roots", p.real_root_count.to_string()),
            ("coefficients", format!("\n{}", indent(&table_text(&p.coefficients), 4))),
        ],
        Descriptors::Ellipse(p) => vec![
            ("semi-major", format!("{:.4}", p.semi_major)),
            ("semi-minor", format!("{:.4}", p.semi_minor)),
            ("area", format!("{:.4}", p.area)),
            ("eccentricity", format!("{:.6}", p.eccentricity)),
            ("focal distance", format!("{:.4}", p.focal_distance)),
            (
                "axis lengths",
                format!("{:.4} × {:.4}", p.major_axis_length, p.minor_axis_length),
            ),
            (
                "major axis along",
                match p.major_axis_along {
                    Axis::X => "x-axis",
                    Axis::Y => "y-axis",
                }
                .to_string(),
            ),
            (
                "foci",
                format!("{} {}", fmt_point(p.foci[0]), fmt_point(p.foci[1])),
            ),
            (
                "circle",
                if p.is_circle { "yes (a = b)" } else { "no" }.to_string(),
            ),
        ],
        Descriptors::Trigonometric(p) => vec![
            ("amplitude", format!("{:.4}", p.amplitude)),
            ("envelope", format!("{:.4} ≤ y ≤ {:.4}", p.envelope.0, p.envelope.1)),
            ("angular frequency", format!("{:.4}", p.angular_freq)),
            (
                "period",
                if p.period.is_finite() { format!("{:.4}", p.period) } else { "∞".to_string() },
            ),
            ("frequency", format!("{:.4}", p.frequency)),
            ("phase shift", format!("{:.4}", p.phase_shift)),
        ],
    }
}

fn indent(s: &str, n: usize) -> String {
    let pad = " ".repeat(n);
    s.lines().map(|l| format!("{pad}{l}")).collect::<Vec<_>>().join("\n")
}

fn root_line(r: &Root) -> String {
    match r.kind {
        RootKind::Real => format!("x = {:.6}", r.re()),
        RootKind::Repeated => format!("x = {:.6}  (repeated ×{})", r.re(), r.multiplicity),
        RootKind::ComplexConjugatePair => {
            let sign = if r.im() >= 0.0 { '+' } else { '−' };
            format!("x = {:.6} {sign} {:.6}i  (complex)", r.re(), r.im().abs())
        }
    }
}

/// Human-readable report (colored when the terminal supports it).
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    let outside = "(outside window)".dimmed();
    let _ = writeln!(
        out,
        "{}  {}",
        kind_label(report.kind).bright_cyan().bold(),
        report.title.bright_white()
    );
    for (label, value) in descriptor_lines(&report.descriptors) {
        let _ = writeln!(out, "  {} {}", format!("{label:<20}").dimmed(), value);
    }

    let has_roots = matches!(
        report.kind,
        EquationKind::Linear | EquationKind::Quadratic | EquationKind::Cubic | EquationKind::Polynomial
    );
    if !has_roots {
        return out;
    }

    let _ = writeln!(out, "{}", format!("Roots ({})", report.roots.len()).bright_yellow());
    if report.roots.is_empty() {
        let _ = writeln!(out, "  none");
    }
    for r in &report.roots {
        if r.is_real() && !in_window(r.re(), report.window) {
            let _ = writeln!(out, "  {} {}", root_line(r), outside);
        } else {
            let _ = writeln!(out, "  {}", root_line(r));
        }
    }

    if report.kind == EquationKind::Linear {
        return out;
    }

    let _ = writeln!(out, "{}", "Critical points (f'(x) = 0)".bright_green());
    if report.critical_points.is_empty() {
        let _ = writeln!(out, "  none");
    }
    for p in &report.critical_points {
        let nature = match p.nature {
            PointNature::LocalMinimum => "local minimum",
            PointNature::LocalMaximum => "local maximum",
            PointNature::Stationary => "stationary",
        };
        let _ = write!(out, "  {}  {}", fmt_point((p.x, p.y)), nature);
        if p.order > 1 {
            let _ = write!(out, ", order {}", p.order);
        }
        if !in_window(p.x, report.window) {
            let _ = write!(out, " {}", outside);
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "{}", "Inflection points (f''(x) = 0)".bright_green());
    if report.inflection_points.is_empty() {
        let _ = writeln!(out, "  none");
    }
    for p in &report.inflection_points {
        let _ = write!(
            out,
            "  {}  {}",
            fmt_point((p.x, p.y)),
            if p.changes_concavity { "concavity changes" } else { "no concavity change" }
        );
        if !in_window(p.x, report.window) {
            let _ = write!(out, " {}", outside);
        }
        let _ = writeln!(out);
    }
    out
}
