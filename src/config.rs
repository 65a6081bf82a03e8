//! Settings: built-in defaults + optional TOML file.
//!
//! - `Settings::default()` → the tool's stock sampling and tolerance constants
//! - `Settings::from_toml_file(path)` → user overrides (missing keys keep defaults)
//! - `Settings::load(path, explicit)` → file if present; a missing *explicit* path is an error

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::roots::{RootOptions, IMAG_TOLERANCE, REPEAT_TOLERANCE};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Plot window `[x_min, x_max]`.
    pub x_range: [f64; 2],
    pub samples: usize,
    pub polynomial_samples: usize,
    pub ellipse_samples: usize,
    /// |y| is clipped to this before plotting/export.
    pub clip_bound: f64,
    pub imag_tolerance: f64,
    pub repeat_tolerance: f64,
    pub animation_frames: usize,
    pub frame_interval_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            x_range: [-10.0, 10.0],
            samples: 1000,
            polynomial_samples: 1200,
            ellipse_samples: 800,
            clip_bound: 1e6,
            imag_tolerance: IMAG_TOLERANCE,
            repeat_tolerance: REPEAT_TOLERANCE,
            animation_frames: 60,
            frame_interval_ms: 50,
        }
    }
}

impl Settings {
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml_str(&txt).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn from_toml_str(txt: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(txt)?;
        settings.validate()?;
        Ok(settings)
    }

    /// `explicit` marks a path given on the command line; only those must exist.
    pub fn load(path: Option<&Path>, explicit: bool) -> Result<Self> {
        match path {
            Some(p) if p.exists() => Self::from_toml_file(p),
            Some(p) if explicit => bail!("config file {} does not exist", p.display()),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.x_range.iter().all(|v| v.is_finite()) {
            bail!("x_range must be finite, got {:?}", self.x_range);
        }
        if !(self.clip_bound.is_finite() && self.clip_bound > 0.0) {
            bail!("clip_bound must be a positive finite number");
        }
        if !(self.imag_tolerance > 0.0 && self.repeat_tolerance > 0.0) {
            bail!("tolerances must be positive");
        }
        Ok(())
    }

    /// `x_range` as `(lo, hi)`; an inverted range is swapped so samples and
    /// markers cover the same interval.
    pub fn window(&self) -> (f64, f64) {
        let [a, b] = self.x_range;
        (a.min(b), a.max(b))
    }

    pub fn root_options(&self) -> RootOptions {
        RootOptions {
            imag_tolerance: self.imag_tolerance,
            repeat_tolerance: self.repeat_tolerance,
            ..RootOptions::default()
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("serializing settings")
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    // ~/.curvelab/config.toml
    dirs_next::home_dir().map(|h| h.join(".curvelab").join("config.toml"))
}

pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.clone());
    }
    default_config_path()
}
