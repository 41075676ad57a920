//! Root path resolution
//!
//! The override layer may express `test.root` as a plain path or as a
//! `file://` URL relative to the configuration file. Either form resolves to
//! an absolute, lexically normalized path so the external engine receives a
//! location-independent value regardless of working directory. Resolution is
//! purely lexical: the path does not have to exist.

use std::path::{Component, Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathError {
    #[error("base directory is not absolute: {0}")]
    RelativeBase(PathBuf),

    #[error("file URL has a non-local host: {0}")]
    NonLocalHost(String),

    #[error("malformed percent-escape in file URL: {0}")]
    BadEscape(String),
}

/// Resolve a root path or `file://` URL against the directory containing the
/// configuration file.
pub fn resolve_root(raw: &str, config_dir: &Path) -> Result<PathBuf, PathError> {
    if !config_dir.is_absolute() {
        return Err(PathError::RelativeBase(config_dir.to_path_buf()));
    }

    let candidate = match raw.strip_prefix("file://") {
        Some(rest) => PathBuf::from(file_url_path(rest)?),
        None => PathBuf::from(raw),
    };

    let joined =
        if candidate.is_absolute() { candidate } else { config_dir.join(candidate) };

    Ok(normalize(&joined))
}

/// Split the host from a `file://` URL remainder and percent-decode the path.
fn file_url_path(rest: &str) -> Result<String, PathError> {
    let (host, path) = match rest.find('/') {
        Some(idx) => (&rest[..idx], &rest[idx..]),
        None => (rest, "/"),
    };
    if !host.is_empty() && host != "localhost" {
        return Err(PathError::NonLocalHost(host.to_string()));
    }
    percent_decode(path)
}

fn percent_decode(input: &str) -> Result<String, PathError> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = bytes
                .get(i + 1..i + 3)
                .and_then(|pair| std::str::from_utf8(pair).ok())
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| PathError::BadEscape(input.to_string()))?;
            out.push(hex);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).map_err(|_| PathError::BadEscape(input.to_string()))
}

/// Fold `.` and `..` segments without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // Segments climbing past the root are dropped.
                let _ = out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
