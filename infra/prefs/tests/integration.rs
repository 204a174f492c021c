use folio_prefs::{Prefs, PrefsError};
use tempfile::TempDir;

#[tokio::test]
async fn put_get_roundtrip() {
    let temp = TempDir::new().unwrap();
    let prefs = Prefs::builder().root(temp.path()).connect().await.unwrap();

    prefs.put("language", "de").await.unwrap();
    assert_eq!(prefs.get("language").await.unwrap().as_deref(), Some("de"));

    // Overwrite replaces, never appends.
    prefs.put("language", "en").await.unwrap();
    assert_eq!(prefs.get("language").await.unwrap().as_deref(), Some("en"));
}

#[tokio::test]
async fn missing_key_reads_as_none() {
    let temp = TempDir::new().unwrap();
    let prefs = Prefs::builder().root(temp.path()).connect().await.unwrap();

    assert_eq!(prefs.get("language").await.unwrap(), None);
}

#[tokio::test]
async fn malformed_keys_are_rejected() {
    let temp = TempDir::new().unwrap();
    let prefs = Prefs::builder().root(temp.path()).connect().await.unwrap();

    for key in ["", "../escape", "UPPER", "with space", "a/b"] {
        let err = prefs.put(key, "x").await.unwrap_err();
        assert!(matches!(err, PrefsError::InvalidKey { .. }), "{key:?} must be rejected");
    }
}

#[tokio::test]
async fn non_utf8_entry_reports_corrupt() {
    let temp = TempDir::new().unwrap();
    let prefs = Prefs::builder().root(temp.path()).connect().await.unwrap();

    std::fs::write(prefs.root().join("language"), [0xff, 0xfe, 0x00]).unwrap();

    let err = prefs.get("language").await.unwrap_err();
    assert!(matches!(err, PrefsError::Corrupt { .. }));
}

#[tokio::test]
async fn remove_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let prefs = Prefs::builder().root(temp.path()).connect().await.unwrap();

    prefs.put("language", "de").await.unwrap();
    prefs.remove("language").await.unwrap();
    assert_eq!(prefs.get("language").await.unwrap(), None);

    // Removing again is fine.
    prefs.remove("language").await.unwrap();
}

#[tokio::test]
async fn connect_without_create_requires_existing_root() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("does-not-exist");

    let err = Prefs::builder().root(&missing).create(false).connect().await.unwrap_err();
    assert!(matches!(err, PrefsError::Io { .. }));
}

#[tokio::test]
async fn connect_purges_stale_temp_files() {
    let temp = TempDir::new().unwrap();

    // Simulate a crash: a temp file old enough to be considered abandoned.
    let stale = temp.path().join("language.foliotmp.1.1");
    std::fs::write(&stale, "de").unwrap();
    let old = std::time::SystemTime::now() - std::time::Duration::from_secs(3600);
    let file = std::fs::File::options().write(true).open(&stale).unwrap();
    file.set_modified(old).unwrap();
    drop(file);

    let prefs = Prefs::builder().root(temp.path()).connect().await.unwrap();
    assert!(!stale.exists(), "stale temp file must be swept at connect");

    // Real entries survive the sweep.
    prefs.put("language", "en").await.unwrap();
    assert_eq!(prefs.get("language").await.unwrap().as_deref(), Some("en"));
}
