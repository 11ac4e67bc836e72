use dioxus::prelude::*;

#[component]
pub fn LoadingView() -> Element {
    rsx! {
        div { class: "loading-page",
            div { class: "loading-card",
                div { class: "loading-card__gardener", "🧑‍🌾" }
                h2 { class: "loading-card__title", "Preparing your plot..." }
                p { class: "loading-card__note", "One moment, we're picking out the questions..." }
            }
        }
    }
}
