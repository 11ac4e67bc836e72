use dioxus::prelude::*;

use garden_core::model::{Feedback, FlowerId, QuizSession};

use crate::views::GardenPlot;

const OPTION_LETTERS: [&str; 4] = ["A", "B", "C", "D"];

/// How one answer option should be drawn once feedback is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OptionState {
    Neutral,
    Correct,
    ChosenWrong,
    Dimmed,
}

fn option_state(feedback: Option<&Feedback>, correct_index: usize, index: usize) -> OptionState {
    let Some(feedback) = feedback else {
        return OptionState::Neutral;
    };
    if index == correct_index {
        OptionState::Correct
    } else if index == feedback.selected_option && !feedback.is_correct {
        OptionState::ChosenWrong
    } else {
        OptionState::Dimmed
    }
}

#[component]
pub fn PlayingView(
    session: QuizSession,
    planting: bool,
    pending_flower: Option<FlowerId>,
    on_answer: EventHandler<usize>,
    on_advance: EventHandler<()>,
) -> Element {
    let Some(question) = session.current_question() else {
        return rsx! {
            p { class: "error", "No question to show." }
        };
    };
    let feedback = session.feedback();
    let total = session.total_questions();
    let number = session.current_index() + 1;
    let is_last = number == total;
    let answered = feedback.is_some();
    let correct_index = question.correct_answer_index();

    rsx! {
        div { class: "playing-page",
            header { class: "status-bar",
                div { class: "status-bar__planted",
                    span { class: "status-bar__emoji", "{session.selected_flower().emoji()}" }
                    span { class: "status-bar__count", "{session.planted_flowers().len()}" }
                }
                div { class: "status-bar__progress", "Question {number} / {total}" }
            }

            GardenPlot {
                flowers: session.planted_flowers().to_vec(),
                pending_flower,
                planting,
            }

            section { class: "question-card",
                h2 { class: "question-card__text", "{question.text()}" }
                div { class: "question-card__options",
                    for (index, option) in question.options().iter().enumerate() {
                        OptionButton {
                            key: "{number}-{index}",
                            index,
                            label: option.clone(),
                            state: option_state(feedback, correct_index, index),
                            disabled: answered,
                            on_answer,
                        }
                    }
                }
                if let Some(feedback) = feedback {
                    FeedbackPanel {
                        feedback: feedback.clone(),
                        explanation: question.explanation().to_string(),
                        is_last,
                        on_advance,
                    }
                }
            }
        }
    }
}

#[component]
fn OptionButton(
    index: usize,
    label: String,
    state: OptionState,
    disabled: bool,
    on_answer: EventHandler<usize>,
) -> Element {
    let letter = OPTION_LETTERS.get(index).copied().unwrap_or("?");
    let class = match state {
        OptionState::Neutral => "option",
        OptionState::Correct => "option option--correct",
        OptionState::ChosenWrong => "option option--chosen-wrong",
        OptionState::Dimmed => "option option--dimmed",
    };
    rsx! {
        button {
            class: "{class}",
            disabled,
            onclick: move |_| on_answer.call(index),
            span { class: "option__letter", "{letter}" }
            span { class: "option__label", "{label}" }
        }
    }
}

#[component]
fn FeedbackPanel(
    feedback: Feedback,
    explanation: String,
    is_last: bool,
    on_advance: EventHandler<()>,
) -> Element {
    let (class, emoji, title) = if feedback.is_correct {
        ("feedback feedback--correct", "🌟", "Well done!")
    } else {
        ("feedback feedback--wrong", "😅", "Not this time")
    };
    let next_label = if is_last {
        "See your results 🏆"
    } else {
        "Next question ➡️"
    };
    rsx! {
        div { class: "{class}",
            div { class: "feedback__emoji", "{emoji}" }
            div { class: "feedback__body",
                h3 { class: "feedback__title", "{title}" }
                p { class: "feedback__message", "{feedback.message}" }
                if !explanation.is_empty() {
                    p { class: "feedback__explanation",
                        span { class: "feedback__hint", "💡 " }
                        "{explanation}"
                    }
                }
            }
            button {
                class: "btn btn-primary feedback__next",
                onclick: move |_| on_advance.call(()),
                "{next_label}"
            }
        }
    }
}
