use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::table::Table;
use crate::error::CoreResult;
use crate::usecase::ports::store::WorkbookStore;

pub struct SheetService {
    store: Arc<dyn WorkbookStore>,
}

impl SheetService {
    pub fn new(store: Arc<dyn WorkbookStore>) -> Self {
        Self { store }
    }

    pub fn list_sheets(&self, path: &Path) -> CoreResult<Vec<String>> {
        self.store.list_sheets(path)
    }

    /// Loads one sheet as a table; an empty sheet gives a table with no columns and no rows.
    pub fn load_sheet(&self, path: &Path, sheet: &str) -> CoreResult<Table> {
        let grid = self.store.read_sheet(path, sheet)?;
        let table = grid.to_table();
        debug!(
            path = %path.display(),
            sheet,
            columns = table.column_count(),
            rows = table.row_count(),
            "loaded sheet"
        );
        Ok(table)
    }
}
