// Failure paths: every error propagates and no output file is produced

use std::fs;

use leaderboard_export_lib::config::ExportConfig;
use leaderboard_export_lib::error::AppError;
use leaderboard_export_lib::run_export;
use rusqlite::Connection;
use tempfile::{tempdir, TempDir};

const FULL_SCHEMA: &str = r#"
    CREATE TABLE leaderboard (user_id TEXT, total_score NUMERIC);
    CREATE TABLE purchases (user_id TEXT, store TEXT, brand TEXT, product_name TEXT);
    CREATE TABLE store_emissions (name TEXT, sustainability_score NUMERIC);
    CREATE TABLE brand_emissions (name TEXT, sustainability_score NUMERIC);
"#;

fn setup_database(ddl_and_data: &str) -> (TempDir, ExportConfig) {
    let dir = tempdir().expect("temp dir");
    let db_path = dir.path().join("sustainability.db");

    let conn = Connection::open(&db_path).expect("open source db");
    conn.execute_batch(ddl_and_data).expect("seed");
    drop(conn);

    let config = ExportConfig::default()
        .with_database_path(db_path)
        .with_output_path(dir.path().join("leaderboard.json"));

    (dir, config)
}

#[test]
fn missing_output_directory_fails_before_writing() {
    let (dir, config) = setup_database(FULL_SCHEMA);
    let missing_dir = dir.path().join("public").join("data");
    let config = config.with_output_path(missing_dir.join("leaderboard.json"));

    let result = run_export(&config);

    assert!(matches!(result, Err(AppError::OutputDirectoryMissing { .. })));
    assert!(!missing_dir.exists());
}

#[test]
fn missing_database_file_fails_without_creating_it() {
    let dir = tempdir().expect("temp dir");
    let db_path = dir.path().join("nowhere.db");
    let output_path = dir.path().join("leaderboard.json");
    let config = ExportConfig::default()
        .with_database_path(&db_path)
        .with_output_path(&output_path);

    let result = run_export(&config);

    assert!(matches!(result, Err(AppError::Database { .. })));
    assert!(!db_path.exists());
    assert!(!output_path.exists());
}

#[test]
fn missing_table_fails_and_leaves_previous_output() {
    let (_dir, config) = setup_database(
        r#"
        CREATE TABLE leaderboard (user_id TEXT, total_score NUMERIC);
        CREATE TABLE purchases (user_id TEXT, store TEXT, brand TEXT, product_name TEXT);
        CREATE TABLE store_emissions (name TEXT, sustainability_score NUMERIC);
        "#,
    );
    fs::write(&config.output_path, "previous export").expect("previous output");

    let result = run_export(&config);

    match result {
        Err(AppError::MissingTable { table }) => assert_eq!(table, "brand_emissions"),
        other => panic!("unexpected result: {other:?}"),
    }
    let content = fs::read_to_string(&config.output_path).expect("read output");
    assert_eq!(content, "previous export");
}

#[test]
fn text_in_score_column_is_a_data_shape_error() {
    let (_dir, config) = setup_database(&format!(
        "{FULL_SCHEMA}
        INSERT INTO purchases VALUES ('user_001', 'S', 'B', 'Soap');
        INSERT INTO store_emissions VALUES ('S', 'very green');
        "
    ));

    let result = run_export(&config);

    assert!(matches!(result, Err(AppError::InvalidValue { .. })));
    assert!(!config.output_path.exists());
}

#[test]
fn null_product_name_is_a_data_shape_error() {
    let (_dir, config) = setup_database(&format!(
        "{FULL_SCHEMA}
        INSERT INTO purchases VALUES ('user_001', 'S', 'B', NULL);
        "
    ));

    let result = run_export(&config);

    match result {
        Err(AppError::InvalidValue { column, .. }) => assert_eq!(column, "product_name"),
        other => panic!("unexpected result: {other:?}"),
    }
}
