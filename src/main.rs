//! curvelab: elementary-function analysis from the command line.

use std::process::exit;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use curvelab::cli::{Command, CurvelabCli, TrigArgs};
use curvelab::commands::animate::{self, AnimateOptions};
use curvelab::commands::{analyze, params, report_error, OutputOptions};
use curvelab::config::{resolve_config_path, Settings};
use curvelab::core::equations::{
    CubicParams, EllipseParams, LinearParams, QuadraticParams, TrigParams,
};
use curvelab::core::{Equation, Polynomial};

fn init_tracing(verbose: u8, level: Option<&str>) {
    let level = level.unwrap_or(match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    });
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("curvelab={level}")));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn trig_params(t: &TrigArgs) -> TrigParams {
    TrigParams {
        func: t.func.into(),
        amplitude: t.amp,
        angular_freq: t.freq,
        phase: t.phase,
    }
}

/// Short description of what was being analysed, for diagnostics.
fn subject(cmd: &Command) -> String {
    match cmd {
        Command::Linear { m, c } => format!("linear m={m} c={c}"),
        Command::Quadratic { a, b, c } => format!("quadratic a={a} b={b} c={c}"),
        Command::Cubic { a, b, c, d } => format!("cubic a={a} b={b} c={c} d={d}"),
        Command::Poly { coeffs, .. } => format!("poly {coeffs:?}"),
        Command::Ellipse { a, b } => format!("ellipse a={a} b={b}"),
        Command::Trig { trig } | Command::Animate { trig, .. } => trig_params(trig).title(),
        Command::File { input, .. } => input.display().to_string(),
        Command::Config => "config".to_string(),
    }
}

fn load_settings(args: &CurvelabCli) -> anyhow::Result<Settings> {
    let path = resolve_config_path(&args.config);
    let mut settings = Settings::load(path.as_deref(), args.config.is_some())?;
    if let Some(x) = args.x_min {
        settings.x_range[0] = x;
    }
    if let Some(x) = args.x_max {
        settings.x_range[1] = x;
    }
    if let Some(n) = args.samples {
        settings.samples = n;
        settings.polynomial_samples = n;
        settings.ellipse_samples = n;
    }
    settings.validate()?;
    debug!(?path, ?settings, "settings loaded");
    Ok(settings)
}

fn dispatch(args: &CurvelabCli, settings: &Settings) -> anyhow::Result<()> {
    let out = OutputOptions {
        json: args.json,
        plot: args.plot,
        export: args.export.clone(),
    };
    let eq = match &args.cmd {
        Command::Linear { m, c } => Equation::Linear(LinearParams { m: *m, c: *c }),
        Command::Quadratic { a, b, c } => {
            Equation::Quadratic(QuadraticParams { a: *a, b: *b, c: *c })
        }
        Command::Cubic { a, b, c, d } => {
            Equation::Cubic(CubicParams { a: *a, b: *b, c: *c, d: *d })
        }
        Command::Poly { coeffs, strict } => Equation::Polynomial(if *strict {
            Polynomial::new(coeffs.clone())?
        } else {
            Polynomial::trimmed(coeffs)?
        }),
        Command::Ellipse { a, b } => Equation::Ellipse(EllipseParams { a: *a, b: *b }),
        Command::Trig { trig } => Equation::Trigonometric(trig_params(trig)),
        Command::Animate { trig, frames, interval_ms, repeat } => {
            let opts = AnimateOptions {
                repeat: *repeat,
                json: args.json,
                ..AnimateOptions::from_settings(settings, *frames, *interval_ms)
            };
            return animate::run(&trig_params(trig), settings, &opts);
        }
        Command::File { input, watch } => return params::run(input, *watch, settings, &out),
        Command::Config => {
            print!("{}", settings.to_toml()?);
            return Ok(());
        }
    };
    analyze::run(&eq, settings, &out)
}

fn main() -> anyhow::Result<()> {
    let args = CurvelabCli::parse();
    init_tracing(args.verbose, args.log_level.as_deref());

    let settings = load_settings(&args)?;
    if let Err(e) = dispatch(&args, &settings) {
        if report_error(&subject(&args.cmd), &e, args.json) {
            exit(2);
        }
        exit(1);
    }
    Ok(())
}
