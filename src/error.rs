use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by workbook reads, table edits and saves.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("sheet '{sheet}' not found in {}", path.display())]
    SheetNotFound { path: PathBuf, sheet: String },

    #[error("unrecognized workbook {}: {message}", path.display())]
    Format { path: PathBuf, message: String },

    #[error("name '{name}' is already in use")]
    DuplicateName { name: String },

    #[error("column '{name}' not found")]
    ColumnNotFound { name: String },

    #[error("cannot delete sheet '{sheet}': a workbook needs at least one sheet")]
    LastSheet { sheet: String },

    #[error("row index {index} out of range for {len} rows")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("invalid sheet name '{name}': {reason}")]
    InvalidSheetName { name: String, reason: &'static str },

    #[error("row {row} has {found} cells, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("file already exists: {}", path.display())]
    AlreadyExists { path: PathBuf },

    #[error("{} is {size} bytes, limit is {limit}", path.display())]
    TooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Coarse classification a front end can branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    FileNotFound,
    Format,
    DuplicateName,
    LastSheet,
    IndexOutOfRange,
    InvalidInput,
    Io,
}

impl CoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::NotFound { .. } | CoreError::SheetNotFound { .. } => ErrorKind::FileNotFound,
            CoreError::Format { .. } => ErrorKind::Format,
            CoreError::DuplicateName { .. } => ErrorKind::DuplicateName,
            CoreError::LastSheet { .. } => ErrorKind::LastSheet,
            CoreError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            CoreError::ColumnNotFound { .. }
            | CoreError::InvalidSheetName { .. }
            | CoreError::RowWidth { .. }
            | CoreError::AlreadyExists { .. }
            | CoreError::TooLarge { .. } => ErrorKind::InvalidInput,
            CoreError::Io { .. } => ErrorKind::Io,
        }
    }

    pub(crate) fn format(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        CoreError::Format {
            path: path.into(),
            message: message.to_string(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CoreError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
