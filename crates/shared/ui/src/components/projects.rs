use crate::locale::use_locale;
use dioxus::prelude::*;

#[component]
pub fn Projects() -> Element {
    let locale = use_locale();
    let copy = &locale.bundle().projects;

    rsx! {
        section { class: "section projects", id: "projects",
            p { class: "section-label", {copy.label} }
            h2 { class: "section-title", {copy.title} }
            div { class: "card-grid",
                for project in copy.items {
                    article { key: "{project.title}", class: "card",
                        h3 { {project.title} }
                        p { {project.description} }
                        ul { class: "tag-row",
                            for tag in project.tags {
                                li { key: "{tag}", class: "tag", {*tag} }
                            }
                        }
                        if let Some(link) = project.link {
                            a { class: "card-link", href: link, target: "_blank", {link} }
                        }
                    }
                }
            }
        }
    }
}
