use std::path::Path;

use tracing::{debug, info};

use crate::domain::entities::workbook::{NamedSheet, SheetGrid};
use crate::error::{CoreError, CoreResult};
use crate::infra::export::csv::grid_to_csv_bytes;
use crate::infra::export::xlsx::workbook_to_bytes;
use crate::infra::fs::atomic::atomic_write_bytes;
use crate::infra::import::{csv as csv_import, xlsx as xlsx_import};
use crate::usecase::ports::store::WorkbookStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkbookFormat {
    Xlsx,
    /// Read-only: xlsm, xlsb, xls, ods.
    Spreadsheet,
    Csv,
}

impl WorkbookFormat {
    pub fn from_path(path: &Path) -> CoreResult<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "xlsx" => Ok(WorkbookFormat::Xlsx),
            "xlsm" | "xlsb" | "xls" | "ods" => Ok(WorkbookFormat::Spreadsheet),
            "csv" => Ok(WorkbookFormat::Csv),
            _ => Err(CoreError::format(
                path,
                format!("unsupported file extension '{ext}'"),
            )),
        }
    }

    pub fn is_writable(self) -> bool {
        matches!(self, WorkbookFormat::Xlsx | WorkbookFormat::Csv)
    }
}

/// Workbook files on the local filesystem, dispatched by extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileWorkbookStore;

impl WorkbookStore for FileWorkbookStore {
    fn list_sheets(&self, path: &Path) -> CoreResult<Vec<String>> {
        match WorkbookFormat::from_path(path)? {
            WorkbookFormat::Csv => {
                if !path.exists() {
                    return Err(CoreError::NotFound {
                        path: path.to_path_buf(),
                    });
                }
                Ok(vec![csv_import::sheet_name(path)])
            }
            _ => xlsx_import::list_sheet_names(path),
        }
    }

    fn read_sheet(&self, path: &Path, sheet: &str) -> CoreResult<SheetGrid> {
        match WorkbookFormat::from_path(path)? {
            WorkbookFormat::Csv => {
                let grid = csv_import::read_csv_grid(path)?;
                if csv_import::sheet_name(path) != sheet {
                    return Err(CoreError::SheetNotFound {
                        path: path.to_path_buf(),
                        sheet: sheet.to_string(),
                    });
                }
                Ok(grid)
            }
            _ => xlsx_import::read_sheet_grid(path, sheet),
        }
    }

    fn read_workbook(&self, path: &Path) -> CoreResult<Vec<NamedSheet>> {
        match WorkbookFormat::from_path(path)? {
            WorkbookFormat::Csv => Ok(vec![csv_import::read_csv_sheet(path)?]),
            _ => xlsx_import::read_all_sheets(path),
        }
    }

    fn write_workbook(&self, path: &Path, sheets: &[NamedSheet]) -> CoreResult<()> {
        let format = WorkbookFormat::from_path(path)?;
        if !format.is_writable() {
            return Err(CoreError::format(
                path,
                "format is read-only; save as .xlsx instead",
            ));
        }

        let bytes = match format {
            WorkbookFormat::Csv => {
                let stem = csv_import::sheet_name(path);
                let [sheet] = sheets else {
                    return Err(CoreError::format(path, "a csv file holds exactly one sheet"));
                };
                if sheet.name != stem {
                    return Err(CoreError::format(
                        path,
                        format!("the csv sheet must be named '{stem}' after the file"),
                    ));
                }
                grid_to_csv_bytes(&sheet.grid).map_err(|err| CoreError::io(path, err))?
            }
            _ => workbook_to_bytes(sheets).map_err(|err| CoreError::format(path, err))?,
        };
        debug!(path = %path.display(), bytes = bytes.len(), "serialized workbook");

        atomic_write_bytes(path, &bytes).map_err(|err| CoreError::io(path, err))?;
        info!(path = %path.display(), sheets = sheets.len(), "replaced workbook file");
        Ok(())
    }
}
