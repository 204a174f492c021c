//! Locale feature slice: the persisted language preference.
//!
//! The [`LocaleStore`] owns the active [`Language`], serves the matching
//! translation bundle, and persists switches through a pluggable
//! [`PreferenceBackend`]. Startup is two-phase: render at the default
//! language immediately, then [`LocaleStore::hydrate`] the stored choice.

mod backend;
mod store;

pub use backend::{BackendError, LANGUAGE_KEY, MemoryBackend, PreferenceBackend};
pub use store::{Hydration, LocaleStore};

pub use folio_domain::Language;
