//! Content feature slice: the bilingual copy set and the article registry.
//!
//! All copy is compiled into the binary as `'static` data. Both languages
//! fill the same struct types, so a string present in one language and
//! missing in the other is a compile error, not a runtime fallback.

mod articles;
mod copy;
mod dates;

pub use articles::{ARTICLES, article_by_slug};
pub use dates::format_article_date;

use folio_domain::Language;
use folio_domain::content::TranslationBundle;

/// The full copy set for one language.
///
/// Bundles are static singletons; a returned reference can never observe a
/// language switch mid-read.
#[must_use]
pub const fn bundle(language: Language) -> &'static TranslationBundle {
    match language {
        Language::En => &copy::EN,
        Language::De => &copy::DE,
    }
}
