use crate::domain::entities::cell::CellValue;
use crate::domain::entities::table::Table;
use crate::error::{CoreError, CoreResult};

const MAX_SHEET_NAME_CHARS: usize = 31;
const FORBIDDEN_SHEET_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// A sheet's cells exactly as stored: `origin` is the (row, col) of the first used cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SheetGrid {
    pub origin: (u32, u32),
    pub rows: Vec<Vec<CellValue>>,
}

impl SheetGrid {
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|row| row.iter().all(CellValue::is_empty))
    }

    /// Interprets the grid with its first row as the header.
    ///
    /// Blank columns left of the used range become unnamed columns, so a table saved at A1
    /// with an unnamed first column reloads at the same width.
    pub fn to_table(&self) -> Table {
        let lead = self.origin.1 as usize;
        if lead == 0 || self.is_empty() {
            return Table::from_header_and_rows(&self.rows);
        }
        let padded: Vec<Vec<CellValue>> = self
            .rows
            .iter()
            .map(|row| {
                let mut cells = vec![CellValue::Empty; lead];
                cells.extend(row.iter().cloned());
                cells
            })
            .collect();
        Table::from_header_and_rows(&padded)
    }
}

impl From<&Table> for SheetGrid {
    fn from(table: &Table) -> Self {
        SheetGrid {
            origin: (0, 0),
            rows: table.to_grid(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NamedSheet {
    pub name: String,
    pub grid: SheetGrid,
}

impl NamedSheet {
    pub fn new(name: impl Into<String>, grid: SheetGrid) -> Self {
        Self {
            name: name.into(),
            grid,
        }
    }

    pub fn from_table(name: impl Into<String>, table: &Table) -> Self {
        Self::new(name, SheetGrid::from(table))
    }
}

/// Sheet names compare case-insensitively, as spreadsheet applications do.
pub fn same_sheet_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

pub fn sheet_position(sheets: &[NamedSheet], name: &str) -> Option<usize> {
    sheets
        .iter()
        .position(|sheet| sheet.name == name)
        .or_else(|| sheets.iter().position(|sheet| same_sheet_name(&sheet.name, name)))
}

pub fn validate_sheet_name(name: &str) -> CoreResult<()> {
    let reason = if name.trim().is_empty() {
        Some("name must not be blank")
    } else if name.chars().count() > MAX_SHEET_NAME_CHARS {
        Some("name must be at most 31 characters")
    } else if name.contains(FORBIDDEN_SHEET_CHARS) {
        Some("name must not contain any of [ ] : * ? / \\")
    } else if name.starts_with('\'') || name.ends_with('\'') {
        Some("name must not start or end with an apostrophe")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(CoreError::InvalidSheetName {
            name: name.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}
