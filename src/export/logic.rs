use crate::core::grid::Grid;
use crate::core::keys::SketchTarget;
use crate::db::store::SeatStore;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{write_csv, write_json};
use crate::export::model::SeatExport;
use crate::export::{ExportFormat, notify_export_success};
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    pub fn rows(grid: &Grid, store: &SeatStore) -> AppResult<Vec<SeatExport>> {
        let mut out = Vec::with_capacity(grid.len());
        for seat in grid.seats() {
            let has_sketch = store
                .load_sketch(SketchTarget::Seat(seat.position))?
                .is_some();
            out.push(SeatExport::from_seat(seat, has_sketch));
        }
        Ok(out)
    }

    pub fn export(
        grid: &Grid,
        store: &SeatStore,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let rows = Self::rows(grid, store)?;
        match format {
            ExportFormat::Csv => write_csv(path, &rows)?,
            ExportFormat::Json => write_json(path, &rows)?,
        }

        notify_export_success(&format.as_str().to_uppercase(), path);
        Ok(())
    }
}
