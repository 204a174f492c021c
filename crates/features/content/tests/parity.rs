use std::collections::HashSet;

use folio_content::{ARTICLES, article_by_slug, bundle, format_article_date};
use folio_domain::Language;
use strum::IntoEnumIterator;

#[test]
fn bundle_matches_requested_language() {
    for language in Language::iter() {
        assert_eq!(bundle(language).language, language);
    }
}

#[test]
fn bundles_are_distinct_statics() {
    assert!(!std::ptr::eq(bundle(Language::En), bundle(Language::De)));
}

#[test]
fn slugs_are_unique_and_lowercase() {
    let mut seen = HashSet::new();
    for article in ARTICLES {
        assert!(seen.insert(article.slug), "duplicate slug {}", article.slug);
        assert_eq!(article.slug, article.slug.to_lowercase());
        assert!(!article.slug.contains(' '));
    }
}

#[test]
fn every_slug_resolves() {
    for article in ARTICLES {
        let found = article_by_slug(article.slug).expect("registered slug must resolve");
        assert!(std::ptr::eq(found, article));
    }
    assert!(article_by_slug("no-such-article").is_none());
}

#[test]
fn articles_sorted_newest_first() {
    for pair in ARTICLES.windows(2) {
        assert!(pair[0].date >= pair[1].date, "{} before {}", pair[0].date, pair[1].date);
    }
}

#[test]
fn both_languages_carry_full_text() {
    for article in ARTICLES {
        for language in Language::iter() {
            let text = article.text(language);
            assert!(!text.title.is_empty());
            assert!(!text.excerpt.is_empty());
            assert!(!text.read_time.is_empty());
            assert!(!text.tags.is_empty());
            assert!(!text.sections.is_empty());
            for section in text.sections {
                assert!(!section.paragraphs.is_empty());
            }
        }
    }
}

#[test]
fn registry_dates_render_in_both_languages() {
    for article in ARTICLES {
        for language in Language::iter() {
            let rendered = format_article_date(article.date, language);
            // A date that fails to parse is passed through verbatim.
            assert_ne!(rendered, article.date, "unparseable date on {}", article.slug);
        }
    }
}
