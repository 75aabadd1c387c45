use std::path::Path;

use crate::domain::entities::cell::CellValue;
use crate::domain::entities::workbook::{NamedSheet, SheetGrid};
use crate::error::{CoreError, CoreResult};

/// A csv file is a workbook with one sheet named after the file stem.
pub fn sheet_name(csv_path: &Path) -> String {
    csv_path
        .file_stem()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .unwrap_or("Sheet1")
        .to_string()
}

/// Reads every record as text; short records are padded to the widest one.
pub fn read_csv_grid(csv_path: &Path) -> CoreResult<SheetGrid> {
    if !csv_path.exists() {
        return Err(CoreError::NotFound {
            path: csv_path.to_path_buf(),
        });
    }
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(csv_path)
        .map_err(|err| CoreError::format(csv_path, err))?;

    let mut rows: Vec<Vec<CellValue>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|err| CoreError::format(csv_path, err))?;
        rows.push(record.iter().map(CellValue::text).collect());
    }
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    for row in &mut rows {
        row.resize(width, CellValue::Empty);
    }
    Ok(SheetGrid { origin: (0, 0), rows })
}

pub fn read_csv_sheet(csv_path: &Path) -> CoreResult<NamedSheet> {
    Ok(NamedSheet::new(sheet_name(csv_path), read_csv_grid(csv_path)?))
}
