use crate::app::{View, use_navigator};
use crate::components::DescentChart;
use crate::locale::use_locale;
use dioxus::prelude::*;
use folio_content::{article_by_slug, format_article_date};
use folio_domain::content::ArticleEmbed;

/// One article, rendered in the active language.
///
/// An unknown slug (stale navigation state) falls back to the index
/// instead of rendering an error page.
#[component]
pub fn ArticlePage(slug: &'static str) -> Element {
    let locale = use_locale();
    let navigator = use_navigator();
    let language = locale.language();
    let writing = &locale.bundle().writing;

    let Some(article) = article_by_slug(slug) else {
        navigator.go(View::Home);
        return rsx! {};
    };
    let text = article.text(language);

    rsx! {
        article { class: "article-page",
            button {
                class: "article-back",
                onclick: move |_| navigator.go(View::Home),
                {writing.back}
            }
            div { class: "article-meta",
                span { class: "article-date", {format_article_date(article.date, language)} }
                span { class: "article-read-time", {text.read_time} }
            }
            h1 { {text.title} }
            ul { class: "tag-row",
                for tag in text.tags {
                    li { key: "{tag}", class: "tag", {*tag} }
                }
            }
            if article.embed == Some(ArticleEmbed::DescentChart) {
                DescentChart {}
            }
            for (index, block) in text.sections.iter().enumerate() {
                section { key: "{index}", class: "article-section",
                    if let Some(heading) = block.heading {
                        h2 { {heading} }
                    }
                    for (p_index, paragraph) in block.paragraphs.iter().enumerate() {
                        p { key: "{p_index}", {*paragraph} }
                    }
                }
            }
        }
    }
}
