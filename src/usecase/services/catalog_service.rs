use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::domain::entities::table::Table;
use crate::domain::entities::workbook::{
    same_sheet_name, sheet_position, validate_sheet_name, NamedSheet,
};
use crate::error::{CoreError, CoreResult};
use crate::usecase::ports::store::WorkbookStore;
use crate::usecase::services::save_service::SaveService;

/// Workbook-level sheet management built on merge-save.
pub struct CatalogService {
    saver: SaveService,
}

impl CatalogService {
    pub fn new(store: Arc<dyn WorkbookStore>) -> Self {
        Self {
            saver: SaveService::new(store),
        }
    }

    pub fn add_sheet(&self, path: &Path, name: &str) -> CoreResult<()> {
        validate_sheet_name(name)?;
        self.saver.rewrite(path, |sheets| {
            if sheet_position(sheets, name).is_some() {
                return Err(CoreError::DuplicateName {
                    name: name.to_string(),
                });
            }
            sheets.push(NamedSheet::from_table(name, &Table::empty()));
            Ok(())
        })?;
        info!(path = %path.display(), sheet = name, "added sheet");
        Ok(())
    }

    pub fn delete_sheet(&self, path: &Path, name: &str) -> CoreResult<()> {
        self.saver.rewrite(path, |sheets| {
            let idx = sheet_position(sheets, name).ok_or_else(|| CoreError::SheetNotFound {
                path: path.to_path_buf(),
                sheet: name.to_string(),
            })?;
            if sheets.len() == 1 {
                return Err(CoreError::LastSheet {
                    sheet: name.to_string(),
                });
            }
            sheets.remove(idx);
            Ok(())
        })?;
        info!(path = %path.display(), sheet = name, "deleted sheet");
        Ok(())
    }

    /// Renames in place; the sheet keeps its position and contents.
    pub fn rename_sheet(&self, path: &Path, from: &str, to: &str) -> CoreResult<()> {
        validate_sheet_name(to)?;
        self.saver.rewrite(path, |sheets| {
            let idx = sheet_position(sheets, from).ok_or_else(|| CoreError::SheetNotFound {
                path: path.to_path_buf(),
                sheet: from.to_string(),
            })?;
            let clash = sheets
                .iter()
                .enumerate()
                .any(|(pos, sheet)| pos != idx && same_sheet_name(&sheet.name, to));
            if clash {
                return Err(CoreError::DuplicateName {
                    name: to.to_string(),
                });
            }
            sheets[idx].name = to.to_string();
            Ok(())
        })?;
        info!(path = %path.display(), from, to, "renamed sheet");
        Ok(())
    }
}
