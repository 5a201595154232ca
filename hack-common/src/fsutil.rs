//! Directory-mode file discovery for the VM translator's multi-file inputs.

use crate::error::{HackError, Result};
use std::path::{Path, PathBuf};

/// Lists every `*.vm` file directly inside `dir` (non-recursive), sorted lexicographically by file
/// name for deterministic output. The original tool relied on OS directory-listing order; this
/// implementation sorts explicitly so translating the same directory twice always concatenates the
/// files in the same sequence.
pub fn list_vm_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| HackError::io(dir.display().to_string(), e))?;

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| HackError::io(dir.display().to_string(), e))?;
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("vm") {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Strips a file's exact extension suffix (e.g. `.vm`, `.asm`), unlike a Python-style `rstrip` that
/// would trim any trailing characters found in the suffix. `ma.vm` correctly becomes `ma`, not ``.
#[must_use]
pub fn strip_suffix_exact(name: &str, suffix: &str) -> String {
    name.strip_suffix(suffix).unwrap_or(name).to_string()
}
