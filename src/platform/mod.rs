//! Platform file-system integration
//!
//! The host platform supplies a single value: the absolute path of the
//! application's private document directory.

use std::path::{MAIN_SEPARATOR_STR, Path};

use crate::error::InvalidPathError;
use crate::path::is_separator;

/// Source of the private document directory
pub trait DocumentDirectory {
    /// Absolute path of the private document directory
    fn document_directory_path(&self) -> &str;
}

/// Validated private storage root
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageRoot(String);

impl StorageRoot {
    /// Validate an absolute root directory.
    ///
    /// Trailing separators are dropped unless the root is the filesystem root.
    /// Empty, `.` and `..` segments inside the root are rejected so resolved
    /// paths stay canonical.
    pub fn new(root: impl Into<String>) -> Result<Self, InvalidPathError> {
        let mut root = root.into();
        if root.is_empty() {
            return Err(InvalidPathError::InvalidRoot("empty root".into()));
        }
        if root.contains('\0') {
            return Err(InvalidPathError::InvalidRoot(root.escape_default().to_string()));
        }
        if !Path::new(&root).is_absolute() {
            return Err(InvalidPathError::InvalidRoot(root));
        }

        let trimmed_len = root.trim_end_matches(is_separator).len();
        if trimmed_len == 0 {
            return Ok(Self(MAIN_SEPARATOR_STR.into()));
        }
        if Path::new(&root[..trimmed_len]).is_absolute() {
            root.truncate(trimmed_len);
        }

        if !is_canonical_root(root.trim_end_matches(is_separator)) {
            return Err(InvalidPathError::InvalidRoot(root));
        }

        Ok(Self(root))
    }

    /// Read the root from the platform
    pub fn from_platform<P: DocumentDirectory + ?Sized>(
        platform: &P,
    ) -> Result<Self, InvalidPathError> {
        Self::new(platform.document_directory_path())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

// UNC roots on Windows keep their leading separators
fn is_canonical_root(root: &str) -> bool {
    let body = if cfg!(windows) {
        root.trim_start_matches(is_separator)
    } else {
        root.strip_prefix('/').unwrap_or(root)
    };
    body.is_empty()
        || !body
            .split(is_separator)
            .any(|segment| matches!(segment, "" | "." | ".."))
}

impl DocumentDirectory for StorageRoot {
    fn document_directory_path(&self) -> &str {
        &self.0
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    struct FixedPlatform(&'static str);

    impl DocumentDirectory for FixedPlatform {
        fn document_directory_path(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn accepts_absolute_roots() {
        assert_eq!(StorageRoot::new("/app/docs").unwrap().as_str(), "/app/docs");
    }

    #[test]
    fn trims_trailing_separators() {
        assert_eq!(StorageRoot::new("/app/docs//").unwrap().as_str(), "/app/docs");
        assert_eq!(StorageRoot::new("/").unwrap().as_str(), "/");
    }

    #[test]
    fn rejects_empty_and_relative_roots() {
        assert!(matches!(StorageRoot::new(""), Err(InvalidPathError::InvalidRoot(_))));
        assert!(matches!(
            StorageRoot::new("app/docs"),
            Err(InvalidPathError::InvalidRoot(_))
        ));
    }

    #[test]
    fn separator_only_root_collapses() {
        let root = StorageRoot::new("//").unwrap();
        assert_eq!(root.as_str(), "/");
        assert_eq!(
            crate::path::resolve(&root, "x").unwrap().as_str(),
            "/x"
        );
    }

    #[test]
    fn rejects_non_canonical_roots() {
        for root in ["/app//docs", "/app/../etc", "/app/./docs", "//app", "/app/docs/.."] {
            assert!(
                matches!(StorageRoot::new(root), Err(InvalidPathError::InvalidRoot(_))),
                "{root} should be rejected"
            );
        }
    }

    #[test]
    fn root_is_its_own_document_directory() {
        let root = StorageRoot::new("/app/docs").unwrap();
        assert_eq!(StorageRoot::from_platform(&root).unwrap(), root);
    }

    #[test]
    fn reads_root_from_platform() {
        let root = StorageRoot::from_platform(&FixedPlatform("/data/user/0/app/files")).unwrap();
        assert_eq!(root.as_path(), Path::new("/data/user/0/app/files"));
    }
}
