//! Facade crate for Folio features and shared modules.
//! Re-exports domain primitives and the feature slices behind one import.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `folio` with the desired feature flags (`client` for the UI layer).
//! - Build a [`locale::LocaleStore`] in the shell and inject it at launch.

pub use folio_domain as domain;
pub use folio_logger as logger;
pub use folio_prefs as prefs;

#[cfg(feature = "client")]
pub use folio_ui as ui;

/// Feature registry for runtime introspection.
pub mod features {
    pub use folio_content as content;
    pub use folio_locale as locale;
    pub use folio_motion as motion;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "locale",
        "content",
        "motion",
        #[cfg(feature = "client")]
        "client",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

pub use features::{content, locale, motion};
