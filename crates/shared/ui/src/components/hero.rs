use crate::locale::use_locale;
use dioxus::prelude::*;

#[component]
pub fn Hero() -> Element {
    let locale = use_locale();
    let copy = &locale.bundle().hero;

    rsx! {
        section { class: "hero", id: "hero",
            p { class: "hero-subtitle", {copy.subtitle} }
            h1 { class: "hero-headline",
                span { {copy.headline1} }
                span { class: "accent", {copy.headline2} }
            }
            p { class: "hero-description", {copy.description} }
            div { class: "hero-actions",
                a { class: "button primary", href: "mailto:hello@example.com", {copy.cta} }
                a { class: "button ghost", href: "#projects", {copy.view_work} }
            }
            p { class: "hero-scroll", {copy.scroll} }
        }
    }
}
