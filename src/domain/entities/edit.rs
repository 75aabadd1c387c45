use std::collections::{BTreeSet, HashMap};

use crate::domain::entities::cell::CellValue;

/// Addresses a cell by position and by the column name it had when the edit was staged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellKey {
    pub row_idx: usize,
    pub col_idx: usize,
    pub column: String,
}

/// Cell-level edits collected by a grid view before they are folded into a table.
#[derive(Debug, Clone, Default)]
pub struct StagedEdits {
    pub staged_cells: HashMap<CellKey, CellValue>,
    pub deleted_rows: BTreeSet<usize>,
    pub added_rows: Vec<Vec<CellValue>>,
}

impl StagedEdits {
    pub fn is_empty(&self) -> bool {
        self.staged_cells.is_empty() && self.deleted_rows.is_empty() && self.added_rows.is_empty()
    }

    pub fn stage_cell(
        &mut self,
        row_idx: usize,
        col_idx: usize,
        column: impl Into<String>,
        value: impl Into<CellValue>,
    ) {
        self.staged_cells.insert(
            CellKey {
                row_idx,
                col_idx,
                column: column.into(),
            },
            value.into(),
        );
    }
}
