use super::*;
use tempfile::TempDir;

/// Write a manifest plus migration files into a temp base directory
fn fixture(manifest: &str, files: &[(&str, &str)]) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(MANIFEST_FILENAME), manifest).unwrap();
    let dir = temp.path().join(MIGRATIONS_DIR);
    fs::create_dir(&dir).unwrap();
    for (name, content) in files {
        fs::write(dir.join(name), content).unwrap();
    }
    temp
}

#[test]
fn test_catalog_order_and_ordinals() {
    let temp = fixture(
        "001_init.sql\n002_add_users.sql\n",
        &[("001_init.sql", "select 1;"), ("002_add_users.sql", "select 2;")],
    );

    let catalog = load_catalog(temp.path()).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog[0].name, "001_init.sql");
    assert_eq!(catalog[0].ordinal, 0);
    assert_eq!(catalog[1].name, "002_add_users.sql");
    assert_eq!(catalog[1].ordinal, 1);
}

#[test]
fn test_blank_and_comment_lines_ignored() {
    let temp = fixture(
        "# schema migrations\n\n001_init.sql\n\n# more\n002_add_users.sql\n",
        &[("001_init.sql", "select 1;"), ("002_add_users.sql", "select 2;")],
    );

    let catalog = load_catalog(temp.path()).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog[1].ordinal, 1);
}

#[test]
fn test_pending_entries_carry_filepath_and_md5() {
    let temp = fixture("001_init.sql\n", &[("001_init.sql", "select 1;")]);

    let catalog = load_catalog(temp.path()).unwrap();
    let entry = &catalog[0];
    assert!(entry.filepath.as_ref().unwrap().ends_with("migrations/001_init.sql"));
    assert_eq!(entry.md5, md5_hex("select 1;"));
    assert!(entry.created.is_none());
    assert!(entry.production);
}

#[test]
fn test_missing_manifest() {
    let temp = TempDir::new().unwrap();
    let err = load_catalog(temp.path()).unwrap_err();
    assert!(matches!(err, CoreError::ManifestNotFound { .. }));
}

#[test]
fn test_missing_migration_file_names_entry_and_path() {
    let temp = fixture("001_init.sql\nmissing.sql\n", &[("001_init.sql", "select 1;")]);

    let err = load_catalog(temp.path()).unwrap_err();
    match err {
        CoreError::MissingMigrationFile { name, path } => {
            assert_eq!(name, "missing.sql");
            assert!(path.ends_with("migrations/missing.sql"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_duplicate_name_rejected() {
    let temp = fixture(
        "001_init.sql\n001_init.sql\n",
        &[("001_init.sql", "select 1;")],
    );

    let err = load_catalog(temp.path()).unwrap_err();
    assert!(matches!(err, CoreError::DuplicateMigration { name } if name == "001_init.sql"));
}

#[test]
fn test_empty_manifest_yields_empty_catalog() {
    let temp = fixture("# nothing yet\n", &[]);
    let catalog = load_catalog(temp.path()).unwrap();
    assert!(catalog.is_empty());
}
