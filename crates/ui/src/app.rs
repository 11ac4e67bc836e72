use std::time::Duration;

use dioxus::prelude::*;

use garden_core::model::{FlowerId, FlowerType, Phase, QuizSession};

use crate::context::AppContext;
use crate::views::{CompletedView, LoadingView, PlayingView, SetupView, ViewError};

/// Cosmetic pause between a correct answer and the flower's reveal. The
/// flower is already recorded in the session; this only gates its rendering.
const PLANTING_DELAY: Duration = Duration::from_millis(500);

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let mut session = use_signal(QuizSession::default);
    let mut error = use_signal(|| None::<ViewError>);
    let mut pending_flower = use_signal(|| None::<FlowerId>);
    let mut planting = use_signal(|| false);

    let on_select = use_callback(move |kind: FlowerType| {
        session.write().select_flower(kind);
    });

    let garden_for_start = ctx.garden();
    let on_start = use_callback(move |()| {
        // Loading is entered synchronously, so a second start is rejected
        // before the fetch task even spawns.
        if session.write().begin_loading().is_err() {
            return;
        }
        let garden = garden_for_start.clone();
        spawn(async move {
            let questions = garden.load_questions().await;
            let accepted = session.write().begin_playing(questions);
            if accepted.is_err() {
                error.set(Some(ViewError::NoQuestions));
            }
        });
    });

    let garden_for_answer = ctx.garden();
    let on_answer = use_callback(move |option_index: usize| {
        // Repeat answers on an already-answered question are no-ops.
        let outcome = session.with_mut(|s| garden_for_answer.answer(s, option_index));
        if let Ok(outcome) = outcome
            && let Some(flower) = outcome.planted
        {
            pending_flower.set(Some(flower.id()));
            planting.set(true);
            spawn(async move {
                tokio::time::sleep(PLANTING_DELAY).await;
                pending_flower.set(None);
            });
        }
    });

    let garden_for_advance = ctx.garden();
    let on_advance = use_callback(move |()| {
        if session.with_mut(|s| garden_for_advance.advance(s)).is_ok() {
            planting.set(false);
            pending_flower.set(None);
        }
    });

    let on_reset = use_callback(move |()| {
        if session.write().reset().is_ok() {
            planting.set(false);
            pending_flower.set(None);
            error.set(None);
        }
    });

    let on_error_back = use_callback(move |()| {
        // The deck never arrived; hand back a fresh session with the same
        // seed choice so the player can retry from setup.
        let flower = session.peek().selected_flower();
        session.set(QuizSession::new(flower));
        error.set(None);
    });

    let current = session.read().clone();

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Ethics Garden" }

        div { class: "garden-app",
            if let Some(err) = *error.read() {
                div { class: "error-panel",
                    h2 { "Something went wrong" }
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_error_back.call(()),
                        "Back to start"
                    }
                }
            } else {
                match current.phase() {
                    Phase::Setup => rsx! {
                        SetupView {
                            selected: current.selected_flower(),
                            on_select,
                            on_start,
                        }
                    },
                    Phase::Loading => rsx! {
                        LoadingView {}
                    },
                    Phase::Playing => rsx! {
                        PlayingView {
                            session: current.clone(),
                            planting: planting(),
                            pending_flower: pending_flower(),
                            on_answer,
                            on_advance,
                        }
                    },
                    Phase::Completed => rsx! {
                        CompletedView { session: current.clone(), on_reset }
                    },
                }
            }
        }
    }
}
