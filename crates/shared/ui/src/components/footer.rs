use crate::locale::use_locale;
use chrono::Datelike;
use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    let locale = use_locale();
    let copy = &locale.bundle().footer;
    let year = chrono::Local::now().year();

    rsx! {
        footer { class: "footer",
            p { {format!("© {year} · {}", copy.copyright)} }
        }
    }
}
