use std::path::Path;

use crate::domain::entities::workbook::{NamedSheet, SheetGrid};
use crate::error::CoreResult;

/// Reads and writes whole workbook files.
///
/// Implementations must read from storage on every call and must replace the file atomically
/// in `write_workbook`: on error the previous file stays as it was.
pub trait WorkbookStore: Send + Sync {
    fn list_sheets(&self, path: &Path) -> CoreResult<Vec<String>>;
    fn read_sheet(&self, path: &Path, sheet: &str) -> CoreResult<SheetGrid>;
    fn read_workbook(&self, path: &Path) -> CoreResult<Vec<NamedSheet>>;
    fn write_workbook(&self, path: &Path, sheets: &[NamedSheet]) -> CoreResult<()>;
}
