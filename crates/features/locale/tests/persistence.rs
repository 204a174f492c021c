use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use folio_locale::{
    BackendError, Hydration, LANGUAGE_KEY, Language, LocaleStore, PreferenceBackend,
};
use folio_prefs::Prefs;
use futures::future::BoxFuture;
use tokio::sync::Notify;

async fn prefs_in(dir: &tempfile::TempDir) -> Prefs {
    Prefs::builder().root(dir.path()).connect().await.expect("prefs root")
}

/// Polls the backend until the persisted value appears; `set` saves in a
/// detached task, so the write is not ordered with the caller.
async fn wait_for_saved(prefs: &Prefs, expected: &str) {
    for _ in 0..200 {
        if let Ok(Some(value)) = prefs.get(LANGUAGE_KEY).await {
            assert_eq!(value, expected);
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("language preference was never persisted");
}

#[tokio::test(flavor = "multi_thread")]
async fn set_persists_and_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocaleStore::new(prefs_in(&dir).await);
    store.set(Language::De);
    wait_for_saved(&prefs_in(&dir).await, "de").await;

    // A fresh store over the same root picks the choice up on hydration.
    let restarted = LocaleStore::new(prefs_in(&dir).await);
    assert_eq!(restarted.current(), Language::En);
    restarted.hydrate().await;
    assert_eq!(restarted.current(), Language::De);
    assert_eq!(restarted.phase(), Hydration::Loaded);
}

#[tokio::test(flavor = "multi_thread")]
async fn unrecognized_stored_values_keep_default() {
    for corrupt in ["fr", "", "null", "EN", "klingon"] {
        let dir = tempfile::tempdir().unwrap();
        let prefs = prefs_in(&dir).await;
        prefs.put(LANGUAGE_KEY, corrupt).await.unwrap();

        let store = LocaleStore::new(prefs);
        assert_eq!(store.hydrate().await, Language::En, "{corrupt:?} must not hydrate");
        assert_eq!(store.current(), Language::En);
        assert_eq!(store.phase(), Hydration::Loaded);
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_entry_keeps_default() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocaleStore::new(prefs_in(&dir).await);
    store.hydrate().await;
    assert_eq!(store.current(), Language::En);
    assert_eq!(store.phase(), Hydration::Loaded);
}

/// Backend whose load blocks until released, to order hydration after an
/// explicit switch.
struct GatedBackend {
    gate: Arc<Notify>,
    stored: String,
    loads: Arc<AtomicUsize>,
}

impl PreferenceBackend for GatedBackend {
    fn load(&self, _key: &str) -> BoxFuture<'_, Result<Option<String>, BackendError>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Box::pin(async move {
            self.gate.notified().await;
            Ok(Some(self.stored.clone()))
        })
    }

    fn save(&self, _key: &str, _value: String) -> BoxFuture<'_, Result<(), BackendError>> {
        Box::pin(async move { Ok(()) })
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn explicit_switch_wins_over_late_hydration() {
    let gate = Arc::new(Notify::new());
    let store = LocaleStore::new(GatedBackend {
        gate: Arc::clone(&gate),
        stored: "en".to_owned(),
        loads: Arc::default(),
    });

    let hydrating = tokio::spawn({
        let store = store.clone();
        async move { store.hydrate().await }
    });
    tokio::time::sleep(Duration::from_millis(20)).await;

    // User switches while the stored value is still in flight.
    store.set(Language::De);
    gate.notify_one();
    hydrating.await.unwrap();

    assert_eq!(store.current(), Language::De);
    assert_eq!(store.phase(), Hydration::Loaded);
}

#[tokio::test(flavor = "multi_thread")]
async fn hydrate_touches_backend_once() {
    let gate = Arc::new(Notify::new());
    gate.notify_one();
    let loads = Arc::new(AtomicUsize::new(0));
    let backend = GatedBackend {
        gate: Arc::clone(&gate),
        stored: "de".to_owned(),
        loads: Arc::clone(&loads),
    };
    let store = LocaleStore::new(backend);

    store.hydrate().await;
    store.hydrate().await;
    store.hydrate().await;
    assert_eq!(store.current(), Language::De);
    assert_eq!(loads.load(Ordering::SeqCst), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn subscriber_observes_hydration_switch() {
    let dir = tempfile::tempdir().unwrap();
    let prefs = prefs_in(&dir).await;
    prefs.put(LANGUAGE_KEY, "de").await.unwrap();

    let store = LocaleStore::new(prefs);
    let mut rx = store.subscribe();
    store.hydrate().await;
    assert!(rx.has_changed().unwrap());
    assert_eq!(*rx.borrow_and_update(), Language::De);
}
