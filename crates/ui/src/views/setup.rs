use dioxus::prelude::*;

use garden_core::model::FlowerType;
use services::QUESTION_DECK_SIZE;

#[component]
pub fn SetupView(
    selected: FlowerType,
    on_select: EventHandler<FlowerType>,
    on_start: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "setup-page",
            h1 { class: "setup-page__title", "🌿 Ethics Garden 🌸" }
            p { class: "setup-page__subtitle", "A research ethics quiz game" }
            section { class: "setup-card",
                h2 { class: "setup-card__heading", "Choose your seed" }
                div { class: "seed-grid",
                    for kind in FlowerType::ALL {
                        SeedCard {
                            key: "{kind.name()}",
                            kind,
                            selected: kind == selected,
                            on_select,
                        }
                    }
                }
                div { class: "mission",
                    h3 { class: "mission__heading", "Your mission:" }
                    ul { class: "mission__list",
                        li { "🎯 Answer {QUESTION_DECK_SIZE} questions correctly" }
                        li { "🌱 1 point = 1 flower" }
                        li { "✨ Grow the most beautiful garden!" }
                    }
                }
                button {
                    class: "btn btn-primary setup-card__start",
                    onclick: move |_| on_start.call(()),
                    "Start planting! 🚀"
                }
            }
        }
    }
}

#[component]
fn SeedCard(kind: FlowerType, selected: bool, on_select: EventHandler<FlowerType>) -> Element {
    let class = if selected {
        "seed-card seed-card--selected"
    } else {
        "seed-card"
    };
    rsx! {
        button { class: "{class}", onclick: move |_| on_select.call(kind),
            span { class: "seed-card__emoji", "{kind.emoji()}" }
            span { class: "seed-card__name", "{kind.name()}" }
            span { class: "seed-card__blurb", "{kind.description()}" }
            if selected {
                span { class: "seed-card__check", "✓" }
            }
        }
    }
}
