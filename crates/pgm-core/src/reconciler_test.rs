use super::*;
use chrono::Utc;
use std::path::PathBuf;

fn declared(name: &str, ordinal: i32) -> Migration {
    Migration::pending(
        name,
        ordinal,
        PathBuf::from(format!("migrations/{name}")),
        format!("md5-{name}"),
    )
}

fn applied(name: &str, ordinal: i32) -> Migration {
    Migration::applied(name, ordinal, format!("md5-{name}"), Utc::now(), true)
}

#[test]
fn test_empty_history_everything_pending() {
    let catalog = vec![declared("a.sql", 0), declared("b.sql", 1)];
    let result = pending(&catalog, &[]).unwrap();
    assert_eq!(result.len(), 2);
    assert_eq!(result[0].name, "a.sql");
}

#[test]
fn test_prefix_history_returns_suffix() {
    let catalog = vec![declared("a.sql", 0), declared("b.sql", 1), declared("c.sql", 2)];
    let history = vec![applied("a.sql", 0)];

    let result = pending(&catalog, &history).unwrap();
    assert_eq!(result.len(), 2);
    assert_eq!(result[0].name, "b.sql");
    assert_eq!(result[1].name, "c.sql");
}

#[test]
fn test_full_history_nothing_pending() {
    let catalog = vec![declared("a.sql", 0), declared("b.sql", 1)];
    let history = vec![applied("a.sql", 0), applied("b.sql", 1)];

    assert!(pending(&catalog, &history).unwrap().is_empty());
}

#[test]
fn test_history_longer_than_catalog() {
    let catalog = vec![declared("a.sql", 0)];
    let history = vec![applied("a.sql", 0), applied("b.sql", 1)];

    let err = pending(&catalog, &history).unwrap_err();
    assert!(matches!(
        err,
        CoreError::HistoryLongerThanCatalog { history: 2, catalog: 1 }
    ));
}

#[test]
fn test_divergence_reported_at_first_mismatch() {
    // history [A, B], catalog [A, C] -> divergence at index 1
    let catalog = vec![declared("a.sql", 0), declared("c.sql", 1)];
    let history = vec![applied("a.sql", 0), applied("b.sql", 1)];

    let err = pending(&catalog, &history).unwrap_err();
    match err {
        CoreError::DivergentHistory { index, expected, found } => {
            assert_eq!(index, 1);
            assert_eq!(expected, "c.sql");
            assert_eq!(found, "b.sql");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_divergence_at_index_zero() {
    let catalog = vec![declared("x.sql", 0)];
    let history = vec![applied("y.sql", 0)];

    let err = pending(&catalog, &history).unwrap_err();
    assert!(matches!(err, CoreError::DivergentHistory { index: 0, .. }));
}
