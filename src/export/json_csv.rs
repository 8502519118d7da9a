use crate::errors::AppResult;
use crate::export::model::SeatExport;
use csv::Writer;
use std::fs;
use std::path::Path;

pub(crate) fn write_csv(path: &Path, rows: &[SeatExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub(crate) fn write_json(path: &Path, rows: &[SeatExport]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows)?;
    fs::write(path, json)?;
    Ok(())
}
