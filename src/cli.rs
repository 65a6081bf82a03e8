use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::equations::TrigFunction;

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
pub enum FuncKind {
    #[default]
    Sin,
    Cos,
}

impl From<FuncKind> for TrigFunction {
    fn from(f: FuncKind) -> Self {
        match f {
            FuncKind::Sin => TrigFunction::Sin,
            FuncKind::Cos => TrigFunction::Cos,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "curvelab",
    about = "curvelab: analyse linear, quadratic, cubic, polynomial, ellipse and trig curves",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct CurvelabCli {
    /// Global: print the report as JSON
    #[arg(long = "json", action = ArgAction::SetTrue, global = true)]
    pub json: bool,

    /// Global: draw a text plot of the curve below the report
    #[arg(long = "plot", action = ArgAction::SetTrue, global = true)]
    pub plot: bool,

    /// Global: path to config (TOML); default: ~/.curvelab/config.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Global: plot window lower bound (overrides config)
    #[arg(long = "x-min", value_name = "X", allow_negative_numbers = true, global = true)]
    pub x_min: Option<f64>,

    /// Global: plot window upper bound (overrides config)
    #[arg(long = "x-max", value_name = "X", allow_negative_numbers = true, global = true)]
    pub x_max: Option<f64>,

    /// Global: number of curve samples (overrides config)
    #[arg(long = "samples", value_name = "N", global = true)]
    pub samples: Option<usize>,

    /// Global: write curve samples and markers as JSON to FILE
    #[arg(long = "export", value_name = "FILE", global = true)]
    pub export: Option<PathBuf>,

    /// Global: more log output (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Global: explicit log level (error|warn|info|debug|trace); RUST_LOG wins if set
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Clone, Args)]
pub struct TrigArgs {
    /// sin or cos
    #[arg(long = "func", value_enum, default_value_t = FuncKind::Sin)]
    pub func: FuncKind,
    /// Amplitude A
    #[arg(long = "amp", default_value_t = 1.0, allow_negative_numbers = true)]
    pub amp: f64,
    /// Angular frequency B
    #[arg(long = "freq", default_value_t = 1.0, allow_negative_numbers = true)]
    pub freq: f64,
    /// Phase C (radians)
    #[arg(long = "phase", default_value_t = 0.0, allow_negative_numbers = true)]
    pub phase: f64,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// y = mx + c
    Linear {
        #[arg(long = "m", default_value_t = 1.0, allow_negative_numbers = true)]
        m: f64,
        #[arg(long = "c", default_value_t = 0.0, allow_negative_numbers = true)]
        c: f64,
    },

    /// y = ax² + bx + c
    Quadratic {
        #[arg(long = "a", default_value_t = 1.0, allow_negative_numbers = true)]
        a: f64,
        #[arg(long = "b", default_value_t = 0.0, allow_negative_numbers = true)]
        b: f64,
        #[arg(long = "c", default_value_t = 0.0, allow_negative_numbers = true)]
        c: f64,
    },

    /// y = ax³ + bx² + cx + d
    Cubic {
        #[arg(long = "a", default_value_t = 1.0, allow_negative_numbers = true)]
        a: f64,
        #[arg(long = "b", default_value_t = 0.0, allow_negative_numbers = true)]
        b: f64,
        #[arg(long = "c", default_value_t = -3.0, allow_negative_numbers = true)]
        c: f64,
        #[arg(long = "d", default_value_t = 0.0, allow_negative_numbers = true)]
        d: f64,
    },

    /// General polynomial, coefficients highest degree first
    ///
    /// Examples:
    ///   curvelab poly 1 0 -3 0        (x³ − 3x)
    ///   curvelab poly 2 -1            (2x − 1)
    Poly {
        #[arg(value_name = "COEFFS", required = true, num_args = 1.., allow_negative_numbers = true)]
        coeffs: Vec<f64>,
        /// Keep leading zeros instead of trimming them
        #[arg(long = "strict", action = ArgAction::SetTrue)]
        strict: bool,
    },

    /// x²/a² + y²/b² = 1
    Ellipse {
        #[arg(long = "a", default_value_t = 5.0, allow_negative_numbers = true)]
        a: f64,
        #[arg(long = "b", default_value_t = 3.0, allow_negative_numbers = true)]
        b: f64,
    },

    /// y = A·sin(Bx + C) or y = A·cos(Bx + C)
    Trig {
        #[command(flatten)]
        trig: TrigArgs,
    },

    /// Phase-sweep animation of a trig curve (Ctrl-C to stop)
    Animate {
        #[command(flatten)]
        trig: TrigArgs,
        /// Frames per sweep (overrides config)
        #[arg(long = "frames", value_name = "N")]
        frames: Option<usize>,
        /// Delay between frames in milliseconds (overrides config)
        #[arg(long = "interval-ms", value_name = "MS")]
        interval_ms: Option<u64>,
        /// Keep sweeping until interrupted
        #[arg(long = "repeat", action = ArgAction::SetTrue)]
        repeat: bool,
    },

    /// Analyse a parameter file (TOML, `kind = "..."` plus that kind's parameters)
    File {
        #[arg(value_name = "INPUT")]
        input: PathBuf,
        /// Watch input and re-analyse when it changes
        #[arg(long = "watch", action = ArgAction::SetTrue)]
        watch: bool,
    },

    /// Print the effective settings as TOML
    Config,
}
