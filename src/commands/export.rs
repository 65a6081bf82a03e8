//! JSON export of a report together with its plot samples.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::analysis::{within, CriticalPoint, InflectionPoint, Report};
use crate::core::roots::real_roots;
use crate::core::sampling::Curve;
use crate::io::atomic_write;

#[derive(Serialize)]
pub struct Markers {
    pub roots: Vec<f64>,
    pub critical_points: Vec<CriticalPoint>,
    pub inflection_points: Vec<InflectionPoint>,
}

#[derive(Serialize)]
pub struct ExportFile<'a> {
    pub generated_at: String,
    pub tool: &'static str,
    pub version: &'static str,
    pub report: &'a Report,
    pub curve: &'a Curve,
    /// Only the markers that fall inside the plot window.
    pub markers: Markers,
}

impl<'a> ExportFile<'a> {
    pub fn new(report: &'a Report) -> Self {
        let window = report.window;
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            tool: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            report,
            curve: &report.curve,
            markers: Markers {
                roots: within(&real_roots(&report.roots), window),
                critical_points: within(&report.critical_points, window),
                inflection_points: within(&report.inflection_points, window),
            },
        }
    }
}

pub fn write_report(path: &Path, report: &Report) -> Result<()> {
    let body = serde_json::to_string_pretty(&ExportFile::new(report))?;
    atomic_write(path, body).with_context(|| format!("writing {}", path.display()))
}
