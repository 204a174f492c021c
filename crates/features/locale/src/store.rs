//! The language preference store.
//!
//! Two-phase lifecycle: the store starts at the default language so the
//! first render never blocks on I/O, then [`LocaleStore::hydrate`] applies
//! the persisted preference once it has been read. A language the user
//! picked explicitly always wins over whatever hydration loads afterwards.

use crate::backend::{LANGUAGE_KEY, MemoryBackend, PreferenceBackend};
use folio_domain::Language;
use folio_domain::content::TranslationBundle;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tracing::{debug, warn};

/// Where the store is in its startup lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hydration {
    /// The persisted preference has not been applied yet; the store reports
    /// the default language.
    Pending,
    /// The persisted preference (or its absence) has been resolved.
    Loaded,
}

struct StoreInner {
    backend: Box<dyn PreferenceBackend>,
    language: watch::Sender<Language>,
    hydrated: AtomicBool,
    /// Set once the user picks a language by hand; hydration must not
    /// override it.
    explicit: AtomicBool,
    /// Runtime captured at construction so `set` can persist from contexts
    /// without an ambient runtime (UI event handlers).
    handle: Option<Handle>,
}

impl std::fmt::Debug for StoreInner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreInner")
            .field("language", &*self.language.borrow())
            .field("hydrated", &self.hydrated.load(Ordering::Acquire))
            .field("explicit", &self.explicit.load(Ordering::Acquire))
            .finish_non_exhaustive()
    }
}

/// A thread-safe handle to the language preference.
///
/// Internally reference-counted; clone freely across tasks and components.
#[derive(Debug, Clone)]
pub struct LocaleStore {
    inner: Arc<StoreInner>,
}

impl LocaleStore {
    /// Creates a store over the given backend, starting at the default
    /// language with hydration pending.
    #[must_use]
    pub fn new(backend: impl PreferenceBackend) -> Self {
        let (language, _) = watch::channel(Language::default());
        Self {
            inner: Arc::new(StoreInner {
                backend: Box::new(backend),
                language,
                hydrated: AtomicBool::new(false),
                explicit: AtomicBool::new(false),
                handle: Handle::try_current().ok(),
            }),
        }
    }

    /// A store with no persistence at all. Toggling works for the session;
    /// nothing survives a restart.
    #[must_use]
    pub fn detached() -> Self {
        Self::new(MemoryBackend::new())
    }

    /// The currently active language.
    #[must_use]
    pub fn current(&self) -> Language {
        *self.inner.language.borrow()
    }

    /// The full copy set for the currently active language.
    ///
    /// The bundle is a static singleton for one language, so a caller
    /// holding the reference can never observe a mid-read language switch.
    #[must_use]
    pub fn translations(&self) -> &'static TranslationBundle {
        folio_content::bundle(self.current())
    }

    /// Watches the active language. The receiver immediately holds the
    /// current value and is notified on every change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Language> {
        self.inner.language.subscribe()
    }

    /// Whether the persisted preference has been applied yet.
    #[must_use]
    pub fn phase(&self) -> Hydration {
        if self.inner.hydrated.load(Ordering::Acquire) {
            Hydration::Loaded
        } else {
            Hydration::Pending
        }
    }

    /// Switches to `language` and persists the choice.
    ///
    /// Setting the already-active language is a no-op: subscribers are not
    /// notified and nothing is written. Persistence is fire-and-forget; a
    /// failed write is logged and the in-memory state stays authoritative.
    pub fn set(&self, language: Language) {
        self.inner.explicit.store(true, Ordering::Release);
        let changed = self.inner.language.send_if_modified(|active| {
            if *active == language {
                false
            } else {
                *active = language;
                true
            }
        });
        if changed {
            debug!(language = language.code(), "Language switched");
            self.spawn_save(language);
        }
    }

    /// Flips between the two languages.
    pub fn toggle(&self) {
        self.set(self.current().other());
    }

    /// Applies the persisted preference and returns the resulting language.
    ///
    /// Safe to call more than once; only the first call touches the backend.
    /// A missing or unrecognized stored value leaves the default language in
    /// place. If the user already switched languages by hand, the loaded
    /// value is discarded.
    pub async fn hydrate(&self) -> Language {
        if self.inner.hydrated.swap(true, Ordering::AcqRel) {
            return self.current();
        }
        let loaded = match self.inner.backend.load(LANGUAGE_KEY).await {
            Ok(Some(raw)) => match Language::from_code(&raw) {
                Some(language) => Some(language),
                None => {
                    warn!(raw, "Unrecognized persisted language, keeping default");
                    None
                },
            },
            Ok(None) => None,
            Err(err) => {
                warn!(error = %err, "Failed to load language preference");
                None
            },
        };
        if let Some(language) = loaded {
            if self.inner.explicit.load(Ordering::Acquire) {
                debug!("Explicit choice made before hydration finished, keeping it");
            } else {
                self.inner.language.send_if_modified(|active| {
                    if *active == language {
                        false
                    } else {
                        *active = language;
                        true
                    }
                });
                debug!(language = language.code(), "Language preference hydrated");
            }
        }
        self.current()
    }

    fn spawn_save(&self, language: Language) {
        let handle = match &self.inner.handle {
            Some(handle) => handle.clone(),
            None => match Handle::try_current() {
                Ok(handle) => handle,
                Err(_) => {
                    warn!("No async runtime available, language choice not persisted");
                    return;
                },
            },
        };
        let inner = Arc::clone(&self.inner);
        handle.spawn(async move {
            if let Err(err) =
                inner.backend.save(LANGUAGE_KEY, language.code().to_owned()).await
            {
                warn!(error = %err, "Failed to persist language preference");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_pending_at_default() {
        let store = LocaleStore::detached();
        assert_eq!(store.current(), Language::En);
        assert_eq!(store.phase(), Hydration::Pending);
    }

    #[test]
    fn translations_follow_current_language() {
        let store = LocaleStore::detached();
        assert_eq!(store.translations().language, Language::En);
        store.set(Language::De);
        assert_eq!(store.translations().language, Language::De);
    }

    #[test]
    fn toggle_is_an_involution() {
        let store = LocaleStore::detached();
        let before = store.current();
        store.toggle();
        assert_ne!(store.current(), before);
        store.toggle();
        assert_eq!(store.current(), before);
    }

    #[test]
    fn redundant_set_does_not_notify() {
        let store = LocaleStore::detached();
        let mut rx = store.subscribe();
        rx.mark_unchanged();
        store.set(Language::En);
        assert!(!rx.has_changed().unwrap());
        store.set(Language::De);
        assert!(rx.has_changed().unwrap());
    }
}
