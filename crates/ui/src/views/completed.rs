use dioxus::prelude::*;

use garden_core::model::QuizSession;

use crate::views::GardenPlot;

fn trophy_for(score: u32) -> &'static str {
    if score > 10 {
        "🏆"
    } else if score > 5 {
        "🎖️"
    } else {
        "🌱"
    }
}

#[component]
pub fn CompletedView(session: QuizSession, on_reset: EventHandler<()>) -> Element {
    let score = session.score();
    let total = session.total_questions();
    rsx! {
        div { class: "completed-page",
            div { class: "completed-card",
                h1 { class: "completed-card__title", "🎉 Congratulations!" }
                h2 { class: "completed-card__subtitle", "You grew a beautiful ethics garden" }
                div { class: "completed-card__score",
                    div { class: "score",
                        span { class: "score__label", "Final score" }
                        span { class: "score__value", "{score}" }
                        span { class: "score__total", "/ {total}" }
                    }
                    span { class: "score__trophy", "{trophy_for(score)}" }
                }
                GardenPlot {
                    flowers: session.planted_flowers().to_vec(),
                    pending_flower: None,
                    planting: false,
                }
                button {
                    class: "btn btn-primary completed-card__again",
                    onclick: move |_| on_reset.call(()),
                    "Play again 🔄"
                }
            }
        }
    }
}
