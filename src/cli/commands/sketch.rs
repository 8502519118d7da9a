use crate::cli::commands::{parse_point, sketch_target};
use crate::cli::parser::{Commands, SketchAction};
use crate::config::Config;
use crate::core::keys::SketchTarget;
use crate::core::sketch::{Canvas, SketchSurface};
use crate::db::log::sclog_quiet;
use crate::db::store::SeatStore;
use crate::errors::{AppError, AppResult};
use crate::export::ensure_writable;
use crate::ui::messages::{info, success};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sketch { action } = cmd {
        match action {
            SketchAction::Draw { seat, points } => draw(cfg, sketch_target(seat)?, points),
            SketchAction::Clear { seat } => clear(cfg, sketch_target(seat)?),
            SketchAction::Export { seat, file, force } => {
                export(cfg, sketch_target(seat)?, file, *force)
            }
        }
    } else {
        Ok(())
    }
}

/// One stroke: pointer down on the first point, a move per further point,
/// pointer up at the end.
fn draw(cfg: &Config, target: SketchTarget, points: &[String]) -> AppResult<()> {
    let points = points
        .iter()
        .map(|p| parse_point(p))
        .collect::<AppResult<Vec<_>>>()?;

    let mut store = SeatStore::open(cfg)?;
    let mut surface = SketchSurface::new(cfg.canvas_width, cfg.canvas_height, None);
    surface.load(&store, target)?;

    let Some((&(x0, y0), rest)) = points.split_first() else {
        return Ok(());
    };
    surface.pointer_down(x0, y0);
    if rest.is_empty() {
        // A dot: a zero-length segment.
        surface.pointer_move(&mut store, x0, y0)?;
    }
    for &(x, y) in rest {
        surface.pointer_move(&mut store, x, y)?;
    }
    surface.pointer_up(&mut store)?;

    sclog_quiet(
        store.conn(),
        "sketch",
        &target.to_string(),
        &format!("Stroke with {} points", points.len()),
    );
    success(format!(
        "Drew on {} ({} inked pixels).",
        target,
        surface.canvas().inked_pixels()
    ));
    Ok(())
}

fn clear(cfg: &Config, target: SketchTarget) -> AppResult<()> {
    let mut store = SeatStore::open(cfg)?;
    if store.remove_sketch(target)? {
        sclog_quiet(store.conn(), "sketch_clear", &target.to_string(), "Sketch cleared");
        success(format!("Cleared {}.", target));
    } else {
        info(format!("{} is already empty.", target));
    }
    Ok(())
}

fn export(cfg: &Config, target: SketchTarget, file: &str, force: bool) -> AppResult<()> {
    let store = SeatStore::open(cfg)?;
    let uri = store
        .load_sketch(target)?
        .ok_or_else(|| AppError::NoSketch(target.to_string()))?;

    let path = Path::new(file);
    ensure_writable(path, force)?;

    let mut canvas = Canvas::new(cfg.canvas_width, cfg.canvas_height);
    canvas.load_data_uri(&uri)?;
    canvas.save_png(path)?;
    success(format!("{} written to {}", target, path.display()));
    Ok(())
}
