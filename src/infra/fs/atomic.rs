//! Atomic file replacement: write a sibling temp file, sync it, then rename it over the target.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

fn parent_dir_or_dot(path: &Path) -> &Path {
    // `Path::parent` is `Some("")` for bare file names like `book.xlsx`.
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

/// Replaces `dest` with whatever `write_fn` writes into a temp file next to it.
///
/// If `write_fn` or any later step fails, `dest` is left untouched and the temp file is removed.
pub fn atomic_write<F>(dest: &Path, write_fn: F) -> io::Result<()>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let dir = parent_dir_or_dot(dest);
    let mut tmp = NamedTempFile::new_in(dir)?;
    write_fn(tmp.as_file_mut())?;

    tmp.as_file_mut().flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(dest).map_err(|err| err.error)?;

    // Best-effort: the file is already in place even if the directory sync fails.
    let _ = sync_dir(dir);
    Ok(())
}

pub fn atomic_write_bytes(dest: &Path, bytes: &[u8]) -> io::Result<()> {
    atomic_write(dest, |file| file.write_all(bytes))
}

fn sync_dir(dir: &Path) -> io::Result<()> {
    File::open(dir)?.sync_all()
}
