//! Workbook editing core: load one sheet as an editable table, reshape it, and merge-save it
//! back without disturbing the other sheets of the file.

use std::path::Path;
use std::sync::Arc;

pub mod config;
pub mod domain;
pub mod error;
pub mod infra;
pub mod logging;
pub mod usecase;


pub use config::AppConfig;
pub use domain::entities::cell::{CellValue, SerialDateTime};
pub use domain::entities::edit::{CellKey, StagedEdits};
pub use domain::entities::table::{disambiguate_headers, Table};
pub use error::{CoreError, CoreResult, ErrorKind};
pub use infra::store::{FileWorkbookStore, WorkbookFormat};
pub use usecase::services::catalog_service::CatalogService;
pub use usecase::services::save_service::SaveService;
pub use usecase::services::sheet_service::SheetService;

fn file_store() -> Arc<FileWorkbookStore> {
    Arc::new(FileWorkbookStore)
}

pub fn list_sheets(path: &Path) -> CoreResult<Vec<String>> {
    SheetService::new(file_store()).list_sheets(path)
}

pub fn load_sheet(path: &Path, sheet: &str) -> CoreResult<Table> {
    SheetService::new(file_store()).load_sheet(path, sheet)
}

pub fn merge_save(path: &Path, sheet: &str, table: &Table) -> CoreResult<()> {
    SaveService::new(file_store()).merge_save(path, sheet, table)
}

pub fn create_workbook(path: &Path, sheets: &[(&str, Table)]) -> CoreResult<()> {
    SaveService::new(file_store()).create_workbook(path, sheets)
}

pub fn add_sheet(path: &Path, name: &str) -> CoreResult<()> {
    CatalogService::new(file_store()).add_sheet(path, name)
}

pub fn delete_sheet(path: &Path, name: &str) -> CoreResult<()> {
    CatalogService::new(file_store()).delete_sheet(path, name)
}

pub fn rename_sheet(path: &Path, from: &str, to: &str) -> CoreResult<()> {
    CatalogService::new(file_store()).rename_sheet(path, from, to)
}
