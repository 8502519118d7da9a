//! Free-hand drawing surfaces.
//!
//! A [`Canvas`] is a plain RGBA bitmap that serializes to a PNG data URI.
//! A [`SketchSurface`] adds the pointer stroke state machine and persists
//! the whole bitmap to the store after every drawn segment.

use crate::core::keys::SketchTarget;
use crate::db::store::SeatStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use image::{ImageFormat, Rgba, RgbaImage, imageops};
use std::io::Cursor;
use std::path::Path;

pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

const INK: Rgba<u8> = Rgba([0x22, 0x22, 0x22, 0xff]);
const BLANK: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Pen diameter is 2 px with round caps.
const PEN_RADIUS: i32 = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(width.max(1), height.max(1), BLANK),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn clear(&mut self) {
        for p in self.image.pixels_mut() {
            *p = BLANK;
        }
    }

    pub fn is_blank(&self) -> bool {
        self.image.pixels().all(|p| p[3] == 0)
    }

    pub fn inked_pixels(&self) -> usize {
        self.image.pixels().filter(|p| p[3] != 0).count()
    }

    pub fn is_inked(&self, x: u32, y: u32) -> bool {
        x < self.width() && y < self.height() && self.image.get_pixel(x, y)[3] != 0
    }

    /// Stroke a line from `from` to `to`. The segment is clipped to the
    /// canvas (grown by the pen radius) before it is rasterized, so work is
    /// bounded by the canvas size whatever the coordinates.
    pub fn draw_segment(&mut self, from: (i32, i32), to: (i32, i32)) {
        let Some(((x0, y0), (x1, y1))) = self.clip_segment(from, to) else {
            return;
        };

        let (mut x, mut y) = (i64::from(x0), i64::from(y0));
        let (x1, y1) = (i64::from(x1), i64::from(y1));
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.stamp(x, y);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Liang–Barsky clip against `[-r, w-1+r] × [-r, h-1+r]`. `None` when
    /// the segment misses the canvas entirely.
    fn clip_segment(&self, from: (i32, i32), to: (i32, i32)) -> Option<((i32, i32), (i32, i32))> {
        let pad = f64::from(PEN_RADIUS);
        let (xmin, ymin) = (-pad, -pad);
        let xmax = f64::from(self.width()) - 1.0 + pad;
        let ymax = f64::from(self.height()) - 1.0 + pad;

        let (x0, y0) = (f64::from(from.0), f64::from(from.1));
        let (dx, dy) = (f64::from(to.0) - x0, f64::from(to.1) - y0);
        let (mut t0, mut t1) = (0.0_f64, 1.0_f64);

        for (p, q) in [
            (-dx, x0 - xmin),
            (dx, xmax - x0),
            (-dy, y0 - ymin),
            (dy, ymax - y0),
        ] {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
            } else if p < 0.0 {
                t0 = t0.max(q / p);
            } else {
                t1 = t1.min(q / p);
            }
        }
        if t0 > t1 {
            return None;
        }

        // Rounded clip points stay within a pixel of the box; `as` saturates.
        let at = |t: f64| ((x0 + t * dx).round() as i32, (y0 + t * dy).round() as i32);
        let start = if t0 == 0.0 { from } else { at(t0) };
        let end = if t1 == 1.0 { to } else { at(t1) };
        Some((start, end))
    }

    fn stamp(&mut self, cx: i64, cy: i64) {
        let r = i64::from(PEN_RADIUS);
        for oy in -r..=r {
            for ox in -r..=r {
                if ox * ox + oy * oy > r * r {
                    continue;
                }
                let (x, y) = (cx + ox, cy + oy);
                if x >= 0
                    && y >= 0
                    && x < i64::from(self.width())
                    && y < i64::from(self.height())
                {
                    self.image.put_pixel(x as u32, y as u32, INK);
                }
            }
        }
    }

    pub fn to_png(&self) -> AppResult<Vec<u8>> {
        let mut out = Cursor::new(Vec::new());
        self.image.write_to(&mut out, ImageFormat::Png)?;
        Ok(out.into_inner())
    }

    pub fn to_data_uri(&self) -> AppResult<String> {
        Ok(format!("{}{}", PNG_DATA_URI_PREFIX, STANDARD.encode(self.to_png()?)))
    }

    /// Replace the bitmap with a decoded data URI, anchored at the top-left
    /// corner. Parts of a larger image fall off the canvas.
    pub fn load_data_uri(&mut self, uri: &str) -> AppResult<()> {
        let decoded = decode_data_uri(uri)?;
        self.clear();
        imageops::replace(&mut self.image, &decoded, 0, 0);
        Ok(())
    }

    pub fn save_png(&self, path: &Path) -> AppResult<()> {
        self.image.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }
}

pub fn decode_data_uri(uri: &str) -> AppResult<RgbaImage> {
    let (header, payload) = uri
        .split_once(',')
        .ok_or_else(|| AppError::InvalidSketch("missing data URI header".into()))?;

    if !header.starts_with("data:image/") || !header.ends_with(";base64") {
        return Err(AppError::InvalidSketch(format!(
            "unsupported data URI header: {}",
            header
        )));
    }

    let bytes = STANDARD
        .decode(payload.trim())
        .map_err(|e| AppError::InvalidSketch(e.to_string()))?;
    Ok(image::load_from_memory(&bytes)?.to_rgba8())
}

/// A canvas plus the pointer state of the stroke in progress.
#[derive(Debug, Clone)]
pub struct SketchSurface {
    canvas: Canvas,
    target: Option<SketchTarget>,
    last: Option<(i32, i32)>,
}

impl SketchSurface {
    pub fn new(width: u32, height: u32, target: Option<SketchTarget>) -> Self {
        Self {
            canvas: Canvas::new(width, height),
            target,
            last: None,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn target(&self) -> Option<SketchTarget> {
        self.target
    }

    pub fn is_drawing(&self) -> bool {
        self.last.is_some()
    }

    /// Point the surface at another owner without touching the bitmap.
    /// Any stroke in progress ends here.
    pub fn retarget(&mut self, target: Option<SketchTarget>) {
        self.target = target;
        self.last = None;
    }

    /// Wipe the bitmap and reload it from `target`'s stored entry.
    pub fn load(&mut self, store: &SeatStore, target: SketchTarget) -> AppResult<()> {
        let stored = store.load_sketch(target)?;
        self.show(target, stored.as_deref());
        Ok(())
    }

    /// Retarget and show an already fetched entry. An entry that does not
    /// decode leaves the canvas blank.
    pub fn show(&mut self, target: SketchTarget, stored: Option<&str>) {
        self.retarget(Some(target));
        self.canvas.clear();

        if let Some(uri) = stored
            && let Err(e) = self.canvas.load_data_uri(uri)
        {
            warning(format!("Ignoring unreadable {}: {}", target, e));
            self.canvas.clear();
        }
    }

    pub fn pointer_down(&mut self, x: i32, y: i32) {
        self.last = Some((x, y));
    }

    /// Draw from the previous point and persist. Returns false when no
    /// stroke is active.
    pub fn pointer_move(&mut self, store: &mut SeatStore, x: i32, y: i32) -> AppResult<bool> {
        let Some(from) = self.last else {
            return Ok(false);
        };

        self.canvas.draw_segment(from, (x, y));
        self.last = Some((x, y));
        self.persist(store)?;
        Ok(true)
    }

    /// End the stroke and persist once more. Returns false when no stroke
    /// was active.
    pub fn pointer_up(&mut self, store: &mut SeatStore) -> AppResult<bool> {
        if self.last.take().is_none() {
            return Ok(false);
        }
        self.persist(store)?;
        Ok(true)
    }

    pub fn pointer_leave(&mut self, store: &mut SeatStore) -> AppResult<bool> {
        self.pointer_up(store)
    }

    /// Stored form of the bitmap; a blank canvas has no stored entry.
    pub fn snapshot(&self) -> AppResult<Option<String>> {
        if self.canvas.is_blank() {
            Ok(None)
        } else {
            self.canvas.to_data_uri().map(Some)
        }
    }

    /// Save the bitmap under the current target. Without a target the
    /// bitmap has no owner and nothing is written.
    pub fn persist(&self, store: &mut SeatStore) -> AppResult<bool> {
        let Some(target) = self.target else {
            return Ok(false);
        };
        match self.snapshot()? {
            Some(uri) => store.save_sketch(target, &uri)?,
            None => {
                store.remove_sketch(target)?;
            }
        }
        Ok(true)
    }

    /// Erase the bitmap and delete its stored entry.
    pub fn clear(&mut self, store: &mut SeatStore) -> AppResult<()> {
        self.wipe();
        self.persist(store)?;
        Ok(())
    }

    /// Erase the bitmap only.
    pub fn wipe(&mut self) {
        self.canvas.clear();
        self.last = None;
    }
}
