use super::*;
use tempfile::TempDir;

fn base_args() -> GlobalArgs {
    GlobalArgs {
        verbose: false,
        base_dir: ".".to_string(),
        config: None,
        environment: "development".to_string(),
        host: None,
        port: None,
        dbname: None,
        user: None,
        password: None,
        options: Vec::new(),
    }
}

#[test]
fn test_flags_only() {
    let mut args = base_args();
    args.dbname = Some("app".to_string());
    args.host = Some("localhost".to_string());

    let params = resolve_params(&args).unwrap();
    assert_eq!(params.dbname.as_deref(), Some("app"));
    assert_eq!(params.host.as_deref(), Some("localhost"));
}

#[test]
fn test_flags_override_env_file() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("database.yml");
    std::fs::write(
        &config,
        "test:\n  database: from_file\n  host: filehost\n  port: 5432\n",
    )
    .unwrap();

    let mut args = base_args();
    args.config = Some(config.display().to_string());
    args.environment = "test".to_string();
    args.dbname = Some("from_flag".to_string());
    args.options = vec![("application_name".to_string(), "pgm".to_string())];

    let params = resolve_params(&args).unwrap();
    assert_eq!(params.dbname.as_deref(), Some("from_flag"));
    assert_eq!(params.host.as_deref(), Some("filehost"));
    assert_eq!(params.port, Some(5432));
    assert_eq!(
        params.extra,
        vec![("application_name".to_string(), "pgm".to_string())]
    );
}

#[test]
fn test_missing_dbname_rejected() {
    let mut args = base_args();
    args.host = Some("localhost".to_string());

    let err = resolve_params(&args).unwrap_err();
    assert!(err.to_string().contains("no database name"));
}
