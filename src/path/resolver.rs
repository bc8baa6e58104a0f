//! Logical to absolute path resolution

use std::fmt;
use std::path::{MAIN_SEPARATOR, MAIN_SEPARATOR_STR, Path};

use crate::error::InvalidPathError;
use crate::path::validation::{is_separator, validate_segments};
use crate::platform::StorageRoot;

/// Canonical absolute path inside the storage root
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedPath(String);

impl ResolvedPath {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<Path> for ResolvedPath {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl AsRef<str> for ResolvedPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Resolve `logical_path` against `root`.
///
/// The result is `root`, exactly one separator, then the logical path's
/// segments. A logical path that already starts with the root is resolved
/// from the remainder, so resolving a resolved path never double-prefixes.
pub fn resolve(root: &StorageRoot, logical_path: &str) -> Result<ResolvedPath, InvalidPathError> {
    let relative = strip_root(root.as_str(), logical_path);
    let segments = validate_segments(relative)?;

    let root = root.as_str();
    let mut resolved =
        String::with_capacity(root.len() + relative.len() + MAIN_SEPARATOR.len_utf8());
    resolved.push_str(root);
    if !root.ends_with(is_separator) {
        resolved.push(MAIN_SEPARATOR);
    }
    resolved.push_str(&segments.join(MAIN_SEPARATOR_STR));

    Ok(ResolvedPath(resolved))
}

fn strip_root<'a>(root: &str, logical_path: &'a str) -> &'a str {
    match logical_path.strip_prefix(root) {
        Some(rest) if rest.starts_with(is_separator) => rest,
        _ => logical_path,
    }
}
