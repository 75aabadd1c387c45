use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::table::Table;
use crate::domain::entities::workbook::{
    same_sheet_name, sheet_position, validate_sheet_name, NamedSheet, SheetGrid,
};
use crate::error::{CoreError, CoreResult};
use crate::usecase::ports::store::WorkbookStore;

pub struct SaveService {
    store: Arc<dyn WorkbookStore>,
}

impl SaveService {
    pub fn new(store: Arc<dyn WorkbookStore>) -> Self {
        Self { store }
    }

    /// Replaces (or appends) `target` with `table` and rewrites the workbook; every other
    /// sheet is written back exactly as it was read.
    pub fn merge_save(&self, path: &Path, target: &str, table: &Table) -> CoreResult<()> {
        self.rewrite(path, |sheets| {
            match sheet_position(sheets, target) {
                // The stored spelling wins when the match is case-insensitive.
                Some(idx) => sheets[idx].grid = SheetGrid::from(table),
                None => {
                    validate_sheet_name(target)?;
                    sheets.push(NamedSheet::from_table(target, table));
                }
            }
            Ok(())
        })?;
        info!(
            path = %path.display(),
            sheet = target,
            columns = table.column_count(),
            rows = table.row_count(),
            "merge-saved sheet"
        );
        Ok(())
    }

    /// Writes a brand-new workbook; refuses to overwrite an existing file.
    pub fn create_workbook(&self, path: &Path, sheets: &[(&str, Table)]) -> CoreResult<()> {
        if path.exists() {
            return Err(CoreError::AlreadyExists {
                path: path.to_path_buf(),
            });
        }
        if sheets.is_empty() {
            return Err(CoreError::format(path, "a workbook needs at least one sheet"));
        }
        let mut named: Vec<NamedSheet> = Vec::with_capacity(sheets.len());
        for (name, table) in sheets {
            validate_sheet_name(name)?;
            if named.iter().any(|sheet| same_sheet_name(&sheet.name, name)) {
                return Err(CoreError::DuplicateName {
                    name: name.to_string(),
                });
            }
            named.push(NamedSheet::from_table(*name, table));
        }
        self.store.write_workbook(path, &named)?;
        info!(path = %path.display(), sheets = named.len(), "created workbook");
        Ok(())
    }

    /// Reads every sheet fresh, lets `edit` reshape the list, then writes the result.
    ///
    /// `edit` runs before anything touches the file, so its errors leave storage unchanged.
    pub(crate) fn rewrite<F>(&self, path: &Path, edit: F) -> CoreResult<()>
    where
        F: FnOnce(&mut Vec<NamedSheet>) -> CoreResult<()>,
    {
        if !path.exists() {
            return Err(CoreError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let mut sheets = self.store.read_workbook(path)?;
        if let Err(err) = edit(&mut sheets) {
            warn!(path = %path.display(), error = %err, "rejected workbook change");
            return Err(err);
        }
        if sheets.is_empty() {
            return Err(CoreError::format(path, "a workbook needs at least one sheet"));
        }
        self.store.write_workbook(path, &sheets)
    }
}
