//! Path validation
//!
//! Splits logical paths into segments and rejects anything that could
//! escape the storage root or alias another logical path.

use crate::error::InvalidPathError;

/// Characters that cannot appear inside a segment on this platform
#[cfg(windows)]
const RESERVED_CHARS: &[char] = &[':', '<', '>', '"', '|', '?', '*'];
#[cfg(not(windows))]
const RESERVED_CHARS: &[char] = &[];

/// Whether `c` separates path segments on this platform
pub fn is_separator(c: char) -> bool {
    c == '/' || (cfg!(windows) && c == '\\')
}

/// Validate a logical path and return its segments.
///
/// Leading separators are ignored. Every remaining segment must be a plain
/// name: no `..`, no `.`, no empty segment from a doubled or trailing
/// separator, no NUL byte and no platform-reserved characters.
pub fn validate_segments(logical_path: &str) -> Result<Vec<&str>, InvalidPathError> {
    let trimmed = logical_path.trim_start_matches(is_separator);
    if trimmed.is_empty() {
        return Err(InvalidPathError::Empty);
    }

    if trimmed.contains('\0') {
        return Err(InvalidPathError::Unrepresentable(
            logical_path.escape_default().to_string(),
        ));
    }

    let segments: Vec<&str> = trimmed.split(is_separator).collect();

    if segments.iter().any(|segment| *segment == "..") {
        return Err(InvalidPathError::Traversal(logical_path.into()));
    }

    for segment in &segments {
        match *segment {
            "" | "." => return Err(InvalidPathError::NonCanonical(logical_path.into())),
            s if s.contains(RESERVED_CHARS) => {
                return Err(InvalidPathError::Unrepresentable(logical_path.into()));
            }
            _ => {}
        }
    }

    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_nested_paths() {
        assert_eq!(
            validate_segments("users/2024/mydb.flexon").unwrap(),
            vec!["users", "2024", "mydb.flexon"]
        );
    }

    #[test]
    fn ignores_leading_separators() {
        assert_eq!(validate_segments("//mydb.flexon").unwrap(), vec!["mydb.flexon"]);
    }

    #[test]
    fn rejects_empty_and_separator_only() {
        assert_eq!(validate_segments(""), Err(InvalidPathError::Empty));
        assert_eq!(validate_segments("/"), Err(InvalidPathError::Empty));
    }

    #[test]
    fn rejects_traversal_anywhere() {
        for path in ["..", "../etc/passwd", "a/../../b", "a/.."] {
            assert!(
                matches!(validate_segments(path), Err(InvalidPathError::Traversal(_))),
                "{path} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_non_canonical_segments() {
        for path in ["a//b", "./a", "a/./b", "a/"] {
            assert!(
                matches!(validate_segments(path), Err(InvalidPathError::NonCanonical(_))),
                "{path} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_nul_bytes() {
        assert!(matches!(
            validate_segments("my\0db"),
            Err(InvalidPathError::Unrepresentable(_))
        ));
    }

    #[test]
    fn dots_inside_names_are_fine() {
        assert!(validate_segments("...hidden/db..v2.flexon").is_ok());
    }
}
