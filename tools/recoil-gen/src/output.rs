//! Crash-safe header writes

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{RecoilError, Result};

/// Replace `path` with `contents` via a sibling temp file and rename.
///
/// Readers see either the previous file or the complete new one. The parent
/// directory must already exist.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let tmp_path = tmp_path_for(path);

    write_then_rename(&tmp_path, path, contents).map_err(|source| {
        let _ = fs::remove_file(&tmp_path);
        RecoilError::OutputWriteFailure {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn write_then_rename(tmp_path: &Path, path: &Path, contents: &str) -> io::Result<()> {
    {
        let mut f = fs::File::create(tmp_path)?;
        f.write_all(contents.as_bytes())?;
        f.sync_all()?;
    }

    // Replaces an existing destination on every platform.
    fs::rename(tmp_path, path)
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}
