use std::path::Path;

use calamine::{
    open_workbook_auto, Data, ExcelDateTime, ExcelDateTimeType, Range, Reader, Sheets,
};
use tracing::debug;

use crate::domain::entities::cell::{CellValue, SerialDateTime};
use crate::domain::entities::workbook::{NamedSheet, SheetGrid};
use crate::error::{CoreError, CoreResult};

type FileSheets = Sheets<std::io::BufReader<std::fs::File>>;

pub fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::String(v) => CellValue::text(v.as_str()),
        Data::Float(v) => CellValue::Number(*v),
        Data::Int(v) => CellValue::Number(*v as f64),
        Data::Bool(v) => CellValue::Bool(*v),
        Data::DateTime(v) => date_cell(v),
        Data::DateTimeIso(v) => CellValue::from_iso(v).unwrap_or_else(|| CellValue::text(v.as_str())),
        Data::DurationIso(v) => CellValue::text(v.as_str()),
        Data::Error(v) => CellValue::Text(v.to_string()),
        Data::Empty => CellValue::Empty,
    }
}

/// The raw serial is kept so the cell is written back unchanged; 1904-system serials are
/// moved into the 1900 system the writer uses.
fn date_cell(value: &ExcelDateTime) -> CellValue {
    let serial = value.as_f64();
    if !serial.is_finite() {
        return CellValue::Number(serial);
    }
    let stamp = if uses_1904_system(value) {
        SerialDateTime::from_1904_serial(serial)
    } else {
        SerialDateTime::from_serial(serial)
    };
    CellValue::DateTime(stamp)
}

// calamine keeps the date-system flag private; rebuilding the 1900 variants exposes it.
fn uses_1904_system(value: &ExcelDateTime) -> bool {
    let serial = value.as_f64();
    [ExcelDateTimeType::DateTime, ExcelDateTimeType::TimeDelta]
        .into_iter()
        .all(|kind| *value != ExcelDateTime::new(serial, kind, false))
}

fn open(path: &Path) -> CoreResult<FileSheets> {
    if !path.exists() {
        return Err(CoreError::NotFound {
            path: path.to_path_buf(),
        });
    }
    open_workbook_auto(path).map_err(|err| CoreError::format(path, err))
}

fn range_to_grid(range: &Range<Data>) -> SheetGrid {
    let origin = range.start().unwrap_or((0, 0));
    let rows = range
        .rows()
        .map(|row| row.iter().map(cell_value).collect())
        .collect();
    SheetGrid { origin, rows }
}

fn read_range(workbook: &mut FileSheets, path: &Path, sheet: &str) -> CoreResult<SheetGrid> {
    let range = workbook
        .worksheet_range(sheet)
        .map_err(|err| CoreError::format(path, format!("failed to read sheet '{sheet}': {err}")))?;
    Ok(range_to_grid(&range))
}

pub fn list_sheet_names(path: &Path) -> CoreResult<Vec<String>> {
    let workbook = open(path)?;
    Ok(workbook.sheet_names().to_vec())
}

pub fn read_sheet_grid(path: &Path, sheet: &str) -> CoreResult<SheetGrid> {
    let mut workbook = open(path)?;
    if !workbook.sheet_names().iter().any(|name| name == sheet) {
        return Err(CoreError::SheetNotFound {
            path: path.to_path_buf(),
            sheet: sheet.to_string(),
        });
    }
    read_range(&mut workbook, path, sheet)
}

/// Reads every sheet in workbook order.
pub fn read_all_sheets(path: &Path) -> CoreResult<Vec<NamedSheet>> {
    let mut workbook = open(path)?;
    let names = workbook.sheet_names().to_vec();
    let mut sheets = Vec::with_capacity(names.len());
    for name in names {
        let grid = read_range(&mut workbook, path, &name)?;
        debug!(path = %path.display(), sheet = %name, rows = grid.rows.len(), "read sheet");
        sheets.push(NamedSheet::new(name, grid));
    }
    Ok(sheets)
}
