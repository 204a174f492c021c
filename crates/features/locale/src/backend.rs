//! Storage seam for the language preference.
//!
//! The store only needs "load a string, save a string" semantics, so the
//! backend is a small object-safe trait. Production uses the preference
//! engine; tests and detached stores use the in-memory variant.

use futures::future::BoxFuture;
use parking_lot::Mutex;
use std::borrow::Cow;
use std::collections::HashMap;

/// The key the language preference is persisted under.
pub const LANGUAGE_KEY: &str = "language";

/// Failure reported by a preference backend.
///
/// The store never propagates these to callers; they are logged and the
/// in-memory state stays authoritative.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct BackendError {
    message: Cow<'static, str>,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl BackendError {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self { message: message.into(), source: None }
    }

    pub fn with_source(
        message: impl Into<Cow<'static, str>>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self { message: message.into(), source: Some(Box::new(source)) }
    }
}

impl From<folio_prefs::PrefsError> for BackendError {
    fn from(err: folio_prefs::PrefsError) -> Self {
        Self::with_source("preference engine", err)
    }
}

/// Where the language preference lives between sessions.
pub trait PreferenceBackend: Send + Sync + 'static {
    /// Loads the raw value stored under `key`, `None` if never written.
    fn load(&self, key: &str) -> BoxFuture<'_, Result<Option<String>, BackendError>>;

    /// Persists `value` under `key`.
    fn save(&self, key: &str, value: String) -> BoxFuture<'_, Result<(), BackendError>>;
}

impl PreferenceBackend for folio_prefs::Prefs {
    fn load(&self, key: &str) -> BoxFuture<'_, Result<Option<String>, BackendError>> {
        let key = key.to_owned();
        Box::pin(async move { Ok(self.get(&key).await?) })
    }

    fn save(&self, key: &str, value: String) -> BoxFuture<'_, Result<(), BackendError>> {
        let key = key.to_owned();
        Box::pin(async move {
            self.put(&key, &value).await?;
            Ok(())
        })
    }
}

/// Process-local backend; nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceBackend for MemoryBackend {
    fn load(&self, key: &str) -> BoxFuture<'_, Result<Option<String>, BackendError>> {
        let value = self.entries.lock().get(key).cloned();
        Box::pin(async move { Ok(value) })
    }

    fn save(&self, key: &str, value: String) -> BoxFuture<'_, Result<(), BackendError>> {
        self.entries.lock().insert(key.to_owned(), value);
        Box::pin(async move { Ok(()) })
    }
}
