use std::collections::{HashMap, HashSet};

use crate::domain::entities::cell::CellValue;
use crate::domain::entities::edit::{CellKey, StagedEdits};
use crate::error::{CoreError, CoreResult};

/// The editable view of one sheet: named columns and rows of equal width.
///
/// Every structural operation borrows the table and returns a new one, so a failed edit
/// leaves the caller's value as it was.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> CoreResult<Self> {
        let expected = columns.len();
        if let Some((row, found)) = rows
            .iter()
            .enumerate()
            .map(|(idx, row)| (idx, row.len()))
            .find(|(_, len)| *len != expected)
        {
            return Err(CoreError::RowWidth {
                row,
                expected,
                found,
            });
        }
        Ok(Self { columns, rows })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a table from a raw grid whose first row is the header.
    ///
    /// Rows shorter than the header are padded with empty cells; the header is widened to the
    /// longest row so no data is dropped.
    pub fn from_header_and_rows(grid: &[Vec<CellValue>]) -> Self {
        let Some((header, body)) = grid.split_first() else {
            return Self::empty();
        };
        let width = grid.iter().map(Vec::len).max().unwrap_or(0);
        let raw_names: Vec<String> = (0..width)
            .map(|idx| header.get(idx).map(CellValue::to_string).unwrap_or_default())
            .collect();
        let rows = body
            .iter()
            .map(|row| {
                let mut row = row.clone();
                row.resize(width, CellValue::Empty);
                row
            })
            .collect();
        Self {
            columns: disambiguate_headers(&raw_names),
            rows,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn cell(&self, row: usize, column: &str) -> Option<&CellValue> {
        let col = self.column_index(column)?;
        self.rows.get(row).and_then(|r| r.get(col))
    }

    pub fn add_column(&self, name: &str) -> CoreResult<Self> {
        if self.column_index(name).is_some() {
            return Err(CoreError::DuplicateName {
                name: name.to_string(),
            });
        }
        let mut next = self.clone();
        next.columns.push(name.to_string());
        for row in &mut next.rows {
            row.push(CellValue::Empty);
        }
        Ok(next)
    }

    pub fn remove_columns<I, S>(&self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: HashSet<String> = names
            .into_iter()
            .map(|name| name.as_ref().to_string())
            .collect();
        let keep: Vec<bool> = self
            .columns
            .iter()
            .map(|column| !names.contains(column))
            .collect();

        let columns = self
            .columns
            .iter()
            .zip(&keep)
            .filter(|(_, keep)| **keep)
            .map(|(column, _)| column.clone())
            .collect();
        let rows = self
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&keep)
                    .filter(|(_, keep)| **keep)
                    .map(|(cell, _)| cell.clone())
                    .collect()
            })
            .collect();
        Self { columns, rows }
    }

    pub fn rename_column(&self, from: &str, to: &str) -> CoreResult<Self> {
        let idx = self
            .column_index(from)
            .ok_or_else(|| CoreError::ColumnNotFound {
                name: from.to_string(),
            })?;
        if from == to {
            return Ok(self.clone());
        }
        if self.column_index(to).is_some() {
            return Err(CoreError::DuplicateName {
                name: to.to_string(),
            });
        }
        let mut next = self.clone();
        next.columns[idx] = to.to_string();
        Ok(next)
    }

    pub fn add_row(&self) -> Self {
        let mut next = self.clone();
        next.rows.push(vec![CellValue::Empty; self.columns.len()]);
        next
    }

    pub fn remove_row(&self, index: usize) -> CoreResult<Self> {
        if index >= self.rows.len() {
            return Err(CoreError::IndexOutOfRange {
                index,
                len: self.rows.len(),
            });
        }
        let mut next = self.clone();
        next.rows.remove(index);
        Ok(next)
    }

    /// Demotes the current header into the first data row and names the columns
    /// `Column 1..Column N`, counting only positions that had a non-empty name.
    ///
    /// Positions whose original name was empty keep an empty name. This replaces the header
    /// for good; callers should only run it on an explicit user request.
    pub fn promote_header_row(&self) -> Self {
        let header_row: Vec<CellValue> = self
            .columns
            .iter()
            .map(|name| CellValue::text(name.as_str()))
            .collect();

        let mut counter = 0;
        let columns = self
            .columns
            .iter()
            .map(|name| {
                if name.is_empty() {
                    String::new()
                } else {
                    counter += 1;
                    format!("Column {counter}")
                }
            })
            .collect();

        let mut rows = Vec::with_capacity(self.rows.len() + 1);
        rows.push(header_row);
        rows.extend(self.rows.iter().cloned());
        Self { columns, rows }
    }

    /// Folds staged cell edits, deletions and additions into a new table.
    pub fn apply_edits(&self, edits: &StagedEdits) -> Self {
        let width = self.columns.len();
        let mut rows = Vec::with_capacity(self.rows.len() + edits.added_rows.len());
        for (row_idx, row) in self.rows.iter().enumerate() {
            if edits.deleted_rows.contains(&row_idx) {
                continue;
            }
            let mut next_row = row.clone();
            for (col_idx, header) in self.columns.iter().enumerate() {
                if let Some(value) = edits.staged_cells.get(&CellKey {
                    row_idx,
                    col_idx,
                    column: header.clone(),
                }) {
                    next_row[col_idx] = value.clone();
                }
            }
            rows.push(next_row);
        }
        for row in &edits.added_rows {
            let mut row = row.clone();
            row.resize(width, CellValue::Empty);
            rows.push(row);
        }
        Self {
            columns: self.columns.clone(),
            rows,
        }
    }

    /// Header row followed by the data rows, as written to a sheet.
    pub fn to_grid(&self) -> Vec<Vec<CellValue>> {
        if self.columns.is_empty() && self.rows.is_empty() {
            return Vec::new();
        }
        let mut grid = Vec::with_capacity(self.rows.len() + 1);
        grid.push(
            self.columns
                .iter()
                .map(|name| CellValue::text(name.as_str()))
                .collect(),
        );
        grid.extend(self.rows.iter().cloned());
        grid
    }
}

/// Keeps the first occurrence of a name and suffixes the k-th repeat with `" (k)"`.
///
/// If a suffixed name is already taken, k keeps growing until the name is free. Empty names
/// mark unnamed columns and are left as they are.
pub fn disambiguate_headers(raw: &[String]) -> Vec<String> {
    let mut taken: HashSet<String> = HashSet::new();
    let mut repeats: HashMap<&str, usize> = HashMap::new();
    let mut names = Vec::with_capacity(raw.len());

    for name in raw {
        if name.is_empty() || taken.insert(name.clone()) {
            names.push(name.clone());
            continue;
        }
        let count = repeats.entry(name.as_str()).or_insert(0);
        let candidate = loop {
            *count += 1;
            let candidate = format!("{name} ({count})");
            if !taken.contains(&candidate) {
                break candidate;
            }
        };
        taken.insert(candidate.clone());
        names.push(candidate);
    }
    names
}
