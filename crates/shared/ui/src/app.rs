//! Root component and in-app navigation.
//!
//! The site is a single window with two views: the home page and one
//! article at a time. Navigation is a plain signal, no URL router.

use crate::components::{ArticlePage, Footer, HomePage, Navbar};
use crate::locale::LocaleProvider;
use dioxus::prelude::*;

const STYLE: &str = include_str!("../assets/folio.css");

/// What the main column is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    /// One article, by registry slug.
    Article(&'static str),
}

/// Switches the main view. Cheap to copy into event handlers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Navigator {
    view: Signal<View>,
}

impl Navigator {
    #[must_use]
    pub fn current(&self) -> View {
        (self.view)()
    }

    pub fn go(&self, view: View) {
        let mut signal = self.view;
        signal.set(view);
    }
}

/// The navigator of the enclosing [`App`].
#[must_use]
pub fn use_navigator() -> Navigator {
    use_context::<Navigator>()
}

/// Application root: styles, locale, navigation, page chrome.
#[component]
pub fn App() -> Element {
    rsx! {
        document::Style { {STYLE} }
        LocaleProvider {
            Shell {}
        }
    }
}

#[component]
fn Shell() -> Element {
    let view = use_signal(|| View::Home);
    use_context_provider(|| Navigator { view });

    rsx! {
        div { class: "site",
            Navbar {}
            main {
                {match view() {
                    View::Home => rsx! {
                        HomePage {}
                    },
                    View::Article(slug) => rsx! {
                        ArticlePage { slug }
                    },
                }}
            }
            Footer {}
        }
    }
}
