use crate::app::{Navigator, View, use_navigator};
use crate::locale::use_locale;
use dioxus::prelude::*;
use folio_domain::Language;

#[component]
pub fn Navbar() -> Element {
    let locale = use_locale();
    let navigator = use_navigator();
    let copy = locale.bundle();

    rsx! {
        header { class: "navbar",
            button {
                class: "navbar-brand",
                onclick: move |_| navigator.go(View::Home),
                "Folio"
            }
            nav { class: "navbar-links",
                NavLink { navigator, label: copy.skills.label, anchor: "#skills" }
                NavLink { navigator, label: copy.writing.label, anchor: "#writing" }
            }
            LanguageSwitcher {}
        }
    }
}

/// Jumps to a home-page section; from an article it switches back to the
/// home view first so the anchor has something to land on.
#[component]
fn NavLink(navigator: Navigator, label: &'static str, anchor: &'static str) -> Element {
    rsx! {
        a {
            class: "navbar-link",
            href: anchor,
            onclick: move |_| navigator.go(View::Home),
            {label}
        }
    }
}

/// Two-state toggle between the site languages. The active language is
/// highlighted; clicking the other one switches and persists.
#[component]
pub fn LanguageSwitcher() -> Element {
    let locale = use_locale();
    let active = locale.language();

    rsx! {
        div { class: "lang-switch",
            for language in [Language::En, Language::De] {
                button {
                    key: "{language.code()}",
                    class: if language == active { "lang-option active" } else { "lang-option" },
                    onclick: {
                        let locale = locale.clone();
                        move |_| locale.set(language)
                    },
                    {language.code().to_uppercase()}
                }
            }
        }
    }
}
