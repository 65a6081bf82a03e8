//! Phase-sweep animation of a trig curve, redrawn in place until Ctrl-C.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::sleep;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::cursor::MoveUp;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType, SetTitle};
use serde::Serialize;
use tracing::{debug, info};

use crate::commands::canvas::{Canvas, CURVE};
use crate::config::Settings;
use crate::core::equations::trigonometric::{self, phase_sweep, Frame, TrigParams};
use crate::core::sampling::safe_linspace;

pub const WIDTH: usize = 72;
pub const HEIGHT: usize = 16;

#[derive(Clone, Debug)]
pub struct AnimateOptions {
    pub frames: usize,
    pub interval: Duration,
    pub repeat: bool,
    pub json: bool,
}

impl AnimateOptions {
    pub fn from_settings(settings: &Settings, frames: Option<usize>, interval_ms: Option<u64>) -> Self {
        Self {
            frames: frames.unwrap_or(settings.animation_frames).max(1),
            interval: Duration::from_millis(interval_ms.unwrap_or(settings.frame_interval_ms)),
            repeat: false,
            json: false,
        }
    }
}

#[derive(Serialize)]
struct FrameDump<'a> {
    title: String,
    xs: &'a [f64],
    frames: &'a [Frame],
}

/// Renders one frame; y bounds come from the envelope so the axes stay put.
pub fn render_frame(xs: &[f64], frame: &Frame, envelope: (f64, f64), window: (f64, f64)) -> String {
    let mut canvas = Canvas::new(WIDTH, HEIGHT, window, envelope);
    canvas.axes();
    for (&x, &y) in xs.iter().zip(&frame.ys) {
        canvas.plot(x, y, CURVE);
    }
    canvas.render()
}

pub fn run(params: &TrigParams, settings: &Settings, opts: &AnimateOptions) -> Result<()> {
    let props = trigonometric::properties(params)?;
    let window = settings.window();
    let xs = safe_linspace(window.0, window.1, WIDTH);
    let frames = phase_sweep(params, &xs, opts.frames, settings.clip_bound);

    if opts.json {
        let dump = FrameDump { title: params.title(), xs: &xs, frames: &frames };
        println!("{}", serde_json::to_string_pretty(&dump)?);
        return Ok(());
    }

    let stop = Arc::new(AtomicBool::new(false));
    {
        let stop = stop.clone();
        ctrlc::set_handler(move || stop.store(true, Ordering::SeqCst))
            .context("installing Ctrl-C handler")?;
    }

    let mut out = io::stdout();
    let _ = execute!(out, SetTitle(format!("curvelab: {}", params.title())));
    info!(frames = frames.len(), repeat = opts.repeat, "starting phase sweep");

    let envelope = props.envelope;
    let mut drawn = 0u16;
    let mut shown = 0usize;
    'sweep: loop {
        for frame in &frames {
            if stop.load(Ordering::SeqCst) {
                break 'sweep;
            }
            if drawn > 0 {
                execute!(out, MoveUp(drawn), Clear(ClearType::FromCursorDown))?;
            }
            let body = format!(
                "{}\n{}\nφ = {:.3} rad",
                params.title(),
                render_frame(&xs, frame, envelope, window),
                frame.phase
            );
            writeln!(out, "{body}")?;
            out.flush()?;
            drawn = u16::try_from(body.lines().count()).unwrap_or(u16::MAX);
            shown += 1;
            sleep(opts.interval);
        }
        if !opts.repeat {
            break;
        }
    }
    debug!(shown, interrupted = stop.load(Ordering::SeqCst), "animation finished");
    Ok(())
}
