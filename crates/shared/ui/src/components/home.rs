use crate::components::{Hero, Philosophy, Projects, Skills, Writing};
use dioxus::prelude::*;

/// The single-page home view: hero, skills, projects, writing, principles.
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Hero {}
        Skills {}
        Projects {}
        Writing {}
        Philosophy {}
    }
}
