use crate::locale::use_locale;
use dioxus::prelude::*;

#[component]
pub fn Skills() -> Element {
    let locale = use_locale();
    let copy = &locale.bundle().skills;

    rsx! {
        section { class: "section skills", id: "skills",
            p { class: "section-label", {copy.label} }
            h2 { class: "section-title", {copy.title} }
            div { class: "card-grid",
                for category in copy.categories {
                    article { key: "{category.title}", class: "card",
                        h3 { {category.title} }
                        p { {category.description} }
                        ul { class: "tag-row",
                            for tag in category.tags {
                                li { key: "{tag}", class: "tag", {*tag} }
                            }
                        }
                    }
                }
            }
        }
    }
}
