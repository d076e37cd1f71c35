mod panel;
mod raster;
mod svg;

use std::cell::Cell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;

use hexa_engine::logging::{init_logging, LoggingConfig};
use hexa_engine::paint::{Color, ColorParseError};
use hexa_ui::prelude::*;

use crate::panel::Panel;

/// Renders a progress sequence of both hexagon widgets to PNG files.
#[derive(Debug, Parser)]
#[command(name = "hexa-studio", version, about)]
struct Args {
    /// Output directory (created if missing).
    #[arg(short, long, default_value = "hexa-out")]
    out: PathBuf,

    /// Edge length of each widget's square cell, in pixels.
    #[arg(long, default_value_t = 128)]
    size: u32,

    /// Number of progress steps between 0 and 100.
    #[arg(long, default_value_t = 12)]
    steps: u32,

    #[arg(long, value_parser = parse_color)]
    track_color: Option<Color>,

    #[arg(long, value_parser = parse_color)]
    progress_color: Option<Color>,

    /// Outline stroke width.
    #[arg(long)]
    line_width: Option<f32>,

    #[arg(long, value_parser = parse_color, default_value = "#1e1e24")]
    background: Color,

    /// Keep the intermediate SVG next to every PNG.
    #[arg(long)]
    keep_svg: bool,

    /// Log filter in env_logger syntax (overrides RUST_LOG).
    #[arg(long)]
    log: Option<String>,
}

fn parse_color(s: &str) -> Result<Color, ColorParseError> {
    Color::from_hex(s)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(LoggingConfig { env_filter: args.log.clone(), ..Default::default() });

    fs::create_dir_all(&args.out)
        .with_context(|| format!("creating output directory {}", args.out.display()))?;

    // Host side of the redraw contract: widgets bump this, we repaint when > 0.
    let pending = Rc::new(Cell::new(0u32));
    let bump = |pending: &Rc<Cell<u32>>| {
        let pending = pending.clone();
        move || pending.set(pending.get() + 1)
    };

    let mut panel = Panel {
        ring: HexagonProgress::new().on_redraw(bump(&pending)),
        gauge: HexagonFill::new().on_redraw(bump(&pending)),
        cell: args.size.max(1) as f32,
        padding: (args.size / 8).max(2) as f32,
    };

    let style = ExternalStyle {
        track_color: args.track_color,
        progress_color: args.progress_color,
        line_width: args.line_width,
    };
    panel.ring.apply_external_style(style);
    panel.gauge.apply_external_style(style);

    let canvas = panel.canvas_size();
    let (width, height) = (canvas.x.ceil() as u32, canvas.y.ceil() as u32);
    let mut ui = UiScene::new();
    let steps = args.steps.max(1);

    for step in 0..=steps {
        let progress = 100.0 * step as f32 / steps as f32;
        panel.ring.set_progress(progress);
        panel.gauge.set_progress(progress);

        if pending.replace(0) == 0 {
            continue;
        }

        let list = ui.frame(&panel, Rect::from_origin_size(Vec2::zero(), canvas));
        let document = svg::to_svg(list, width, height, Some(args.background));

        let stem = format!("hexagon_{step:03}");
        if args.keep_svg {
            let svg_path = args.out.join(format!("{stem}.svg"));
            fs::write(&svg_path, &document)
                .with_context(|| format!("writing {}", svg_path.display()))?;
        }
        let png_path = args.out.join(format!("{stem}.png"));
        raster::write_png(&document, &png_path)?;
        log::info!("{progress:6.2}% -> {}", png_path.display());
    }

    Ok(())
}
