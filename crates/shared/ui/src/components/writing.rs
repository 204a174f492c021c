use crate::app::{View, use_navigator};
use crate::locale::use_locale;
use dioxus::prelude::*;
use folio_content::{ARTICLES, format_article_date};

/// The engineering-log index. Entries come from the article registry, so
/// both languages always list the same articles in the same order.
#[component]
pub fn Writing() -> Element {
    let locale = use_locale();
    let navigator = use_navigator();
    let language = locale.language();
    let copy = &locale.bundle().writing;

    rsx! {
        section { class: "section writing", id: "writing",
            p { class: "section-label", {copy.label} }
            h2 { class: "section-title", {copy.title} }
            ul { class: "article-list",
                for article in ARTICLES {
                    li { key: "{article.slug}",
                        button {
                            class: "article-entry",
                            onclick: move |_| navigator.go(View::Article(article.slug)),
                            div { class: "article-meta",
                                span { class: "article-date",
                                    {format_article_date(article.date, language)}
                                }
                                span { class: "article-read-time",
                                    {article.text(language).read_time}
                                }
                            }
                            h3 { {article.text(language).title} }
                            p { class: "article-excerpt", {article.text(language).excerpt} }
                            ul { class: "tag-row",
                                for tag in article.text(language).tags {
                                    li { key: "{tag}", class: "tag", {*tag} }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
