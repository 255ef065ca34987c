//! Argument-parsing glue shared by `main.rs`: path normalization and the
//! overwrite confirmation prompt. Grounded on
//! `original_source/src/file.hpp::normalize` and the overwrite-check in
//! `compress.hpp::compressFile`/`decompress.hpp::decompressFile`.

use crate::Error;
use std::path::{Component, Path, PathBuf};

/// Resolves `path` to an absolute, lexically-normalized path without
/// requiring it to exist on disk — so a not-yet-created output file can
/// still be validated. Mirrors `file.hpp::normalize`'s
/// `absolute().lexically_normal()`: make absolute against the current
/// directory, then collapse `.`/`..` components without touching the
/// filesystem (no symlink resolution).
pub fn normalize_path(path: &Path) -> Result<PathBuf, Error> {
    let absolute = std::path::absolute(path)
        .map_err(|_| Error::PathInvalid(path.display().to_string()))?;
    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::ParentDir => {
                if !normalized.pop() {
                    return Err(Error::PathInvalid(path.display().to_string()));
                }
            }
            Component::CurDir => {}
            other => normalized.push(other),
        }
    }
    Ok(normalized)
}

/// Derives the default output path for a `c`/`d` run when no output path
/// was given: `<input>.lzip` for compress; for expand, `<input>` with a
/// trailing `.lzip` suffix stripped if present (unchanged otherwise).
pub fn default_output_path(input: &Path, compressing: bool) -> PathBuf {
    if compressing {
        let mut out = input.as_os_str().to_owned();
        out.push(".lzip");
        PathBuf::from(out)
    } else {
        let name = input.as_os_str().to_string_lossy();
        match name.strip_suffix(".lzip") {
            Some(stripped) => PathBuf::from(stripped),
            None => input.to_path_buf(),
        }
    }
}

/// Prompts on stdin for confirmation before overwriting `path`. Returns
/// `Ok(())` to proceed, `Err(Error::UserCancelled)` otherwise. Only "y" or
/// "Y" proceed, matching the original's `cin >> input` check.
pub fn confirm_overwrite(path: &Path) -> Result<(), Error> {
    if !path.exists() {
        return Ok(());
    }
    eprint!("{} already exists, overwrite? [y/N] ", path.display());
    use std::io::Write;
    std::io::stderr().flush().ok();
    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .map_err(Error::OpenFailed)?;
    let answer = line.trim();
    if answer == "y" || answer == "Y" {
        Ok(())
    } else {
        Err(Error::UserCancelled)
    }
}
