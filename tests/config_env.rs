#![cfg(unix)]

// Environment variables are process-wide, so every step that touches
// FLEXONDB_DOCUMENT_ROOT lives in this one test binary and one test.

use std::fs;

use flexondb_mobile::ClientConfig;

const ROOT_VAR: &str = "FLEXONDB_DOCUMENT_ROOT";

#[test]
fn test_load_file_then_env_override() {
    let dir = tempfile::tempdir().unwrap();
    // SAFETY: no other test in this binary reads or writes the environment
    unsafe { std::env::remove_var(ROOT_VAR) };

    // Nothing configured at all
    assert!(ClientConfig::load_from(dir.path()).is_err());

    // Working-directory file
    fs::write(
        dir.path().join("config.toml"),
        "document_root = \"/from/file\"\n",
    )
    .unwrap();
    let config = ClientConfig::load_from(dir.path()).unwrap();
    assert_eq!(config.document_root, "/from/file");

    // Packaged file wins over the working-directory file
    fs::create_dir(dir.path().join("flexondb")).unwrap();
    fs::write(
        dir.path().join("flexondb/config.toml"),
        "document_root = \"/from/package\"\n",
    )
    .unwrap();
    let config = ClientConfig::load_from(dir.path()).unwrap();
    assert_eq!(config.document_root, "/from/package");

    // Environment wins over both files
    unsafe { std::env::set_var(ROOT_VAR, "/from/env") };
    let config = ClientConfig::load_from(dir.path()).unwrap();
    assert_eq!(config.document_root, "/from/env");
    assert_eq!(config.storage_root().unwrap().as_str(), "/from/env");

    // Environment alone is enough
    let empty = tempfile::tempdir().unwrap();
    let config = ClientConfig::load_from(empty.path()).unwrap();
    assert_eq!(config.document_root, "/from/env");

    // A relative override is still validated
    unsafe { std::env::set_var(ROOT_VAR, "relative/docs") };
    let err = ClientConfig::load_from(empty.path()).unwrap_err();
    assert!(err.to_string().contains("must be absolute"));

    unsafe { std::env::remove_var(ROOT_VAR) };
}
