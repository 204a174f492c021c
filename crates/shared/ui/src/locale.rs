//! Bridges the [`LocaleStore`] into the component tree.
//!
//! The store lives outside the UI (the app shell builds it before launch
//! and injects it as a root context). [`LocaleProvider`] wraps it in a
//! signal so components re-render on language switches, and kicks off
//! hydration as soon as the tree mounts.

use dioxus::prelude::*;
use folio_domain::Language;
use folio_domain::content::TranslationBundle;
use folio_locale::LocaleStore;
use tracing::debug;

/// Language state as seen by components.
#[derive(Debug, Clone)]
pub struct Locale {
    store: LocaleStore,
    language: Signal<Language>,
}

impl Locale {
    /// The active language for this render.
    #[must_use]
    pub fn language(&self) -> Language {
        (self.language)()
    }

    /// The copy set for the active language.
    #[must_use]
    pub fn bundle(&self) -> &'static TranslationBundle {
        folio_content::bundle(self.language())
    }

    pub fn set(&self, language: Language) {
        self.store.set(language);
    }

    pub fn toggle(&self) {
        self.store.toggle();
    }
}

/// The locale of the enclosing [`LocaleProvider`].
#[must_use]
pub fn use_locale() -> Locale {
    use_context::<Locale>()
}

/// Owns the language signal for the subtree below it.
///
/// Picks up a [`LocaleStore`] injected at launch; a tree rendered without
/// one (component previews, tests) gets a detached in-memory store instead
/// of a panic.
#[component]
pub fn LocaleProvider(children: Element) -> Element {
    let store = use_hook(|| {
        try_consume_context::<LocaleStore>().unwrap_or_else(|| {
            debug!("No locale store injected, running detached");
            LocaleStore::detached()
        })
    });
    let mut language = use_signal(|| store.current());
    use_context_provider(|| Locale { store: store.clone(), language });

    // Hydrate once, then forward every store change into the signal. The
    // future is cancelled with the provider, closing the subscription.
    use_future(move || {
        let store = store.clone();
        async move {
            store.hydrate().await;
            let mut rx = store.subscribe();
            language.set(*rx.borrow_and_update());
            while rx.changed().await.is_ok() {
                let switched = *rx.borrow_and_update();
                language.set(switched);
            }
        }
    });

    rsx! {
        {children}
    }
}
