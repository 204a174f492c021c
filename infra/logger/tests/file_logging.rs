use folio_logger::{LevelFilter, Logger};
use tempfile::TempDir;

#[test]
fn file_layer_writes_into_the_log_directory() {
    let temp = TempDir::new().unwrap();

    let logger = Logger::builder()
        .name("integration-file")
        .console(false)
        .level(LevelFilter::INFO)
        .file(temp.path())
        .init()
        .expect("logger should initialize");

    assert!(logger.guard().is_some(), "file logging must hold a worker guard");

    tracing::info!("file logging smoke line");
    drop(logger); // flush the non-blocking writer

    let wrote_log = std::fs::read_dir(temp.path())
        .unwrap()
        .flatten()
        .any(|e| e.file_name().to_string_lossy().starts_with("integration-file"));
    assert!(wrote_log, "a rotated log file should exist after logging");
}
