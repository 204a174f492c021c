use crate::locale::use_locale;
use dioxus::prelude::*;

#[component]
pub fn Philosophy() -> Element {
    let locale = use_locale();
    let copy = &locale.bundle().philosophy;

    rsx! {
        section { class: "section philosophy", id: "philosophy",
            p { class: "section-label", {copy.label} }
            h2 { class: "section-title", {copy.title} }
            div { class: "philosophy-body",
                for (index, paragraph) in copy.paragraphs.iter().enumerate() {
                    p { key: "{index}", {*paragraph} }
                }
            }
            a { class: "button ghost", href: "#writing", {copy.cta} }
        }
    }
}
