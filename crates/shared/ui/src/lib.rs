//! Renderer-agnostic site components.
//!
//! Everything here renders against the locale context established by
//! [`LocaleProvider`]; the desktop shell injects the real store before
//! launch, tests and previews fall back to a detached one.

mod app;
pub mod components;
mod locale;

pub use app::{App, Navigator, View, use_navigator};
pub use locale::{Locale, LocaleProvider, use_locale};
