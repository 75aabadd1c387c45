use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

const PDF_EXTENSIONS: &[&str] = &["pdf"];
const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xls", "csv"];

/// First-level folders under a root and the second-level folders inside each of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderTree {
    pub first_level: Vec<String>,
    pub second_level: BTreeMap<String, Vec<String>>,
}

fn sorted_entries(folder: &Path, keep: impl Fn(&Path) -> bool) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in
        fs::read_dir(folder).with_context(|| format!("failed to read folder: {}", folder.display()))?
    {
        let entry =
            entry.with_context(|| format!("failed to read entry in: {}", folder.display()))?;
        let path = entry.path();
        if keep(&path) {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

fn subfolders(folder: &Path) -> Result<Vec<String>> {
    sorted_entries(folder, Path::is_dir)
}

/// A missing root yields an empty tree.
pub fn scan_folders(root: &Path) -> Result<FolderTree> {
    if !root.exists() {
        return Ok(FolderTree::default());
    }
    let first_level = subfolders(root)?;
    let mut second_level = BTreeMap::new();
    for folder in &first_level {
        second_level.insert(folder.clone(), subfolders(&root.join(folder))?);
    }
    debug!(root = %root.display(), folders = first_level.len(), "scanned folders");
    Ok(FolderTree {
        first_level,
        second_level,
    })
}

/// The deepest selected folder: second level, else first level, else the root.
pub fn resolve_folder(root: &Path, first: Option<&str>, second: Option<&str>) -> PathBuf {
    match (first, second) {
        (Some(first), Some(second)) => root.join(first).join(second),
        (Some(first), None) => root.join(first),
        _ => root.to_path_buf(),
    }
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| extensions.iter().any(|want| ext.eq_ignore_ascii_case(want)))
            .unwrap_or(false)
}

pub fn list_pdfs(folder: &Path) -> Result<Vec<String>> {
    sorted_entries(folder, |path| has_extension(path, PDF_EXTENSIONS))
}

pub fn list_workbooks(folder: &Path) -> Result<Vec<String>> {
    sorted_entries(folder, |path| has_extension(path, WORKBOOK_EXTENSIONS))
}
