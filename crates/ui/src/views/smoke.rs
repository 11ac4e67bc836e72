use std::sync::Arc;

use dioxus::prelude::*;

use garden_core::model::{
    FlowerType, PlantingSpot, Question, QuestionId, QuizSession,
};
use garden_core::time::{fixed_clock, fixed_now};
use services::{GardenService, QuizContentService};

use super::{CompletedView, GardenPlot, PlayingView, SetupView};
use crate::app::App;
use crate::context::{UiApp, build_app_context};

//
// ─── HARNESS ───────────────────────────────────────────────────────────────────
//

fn question(id: u32, correct: usize) -> Question {
    Question::new(
        QuestionId::new(id),
        format!("What is question {id} about?"),
        vec![
            format!("q{id} alpha"),
            format!("q{id} bravo"),
            format!("q{id} charlie"),
            format!("q{id} delta"),
        ],
        correct,
        "a short explanation",
    )
    .unwrap()
}

fn playing_session(correct_indices: &[usize]) -> QuizSession {
    let mut session = QuizSession::new(FlowerType::Tulip);
    session.begin_loading().unwrap();
    let deck = correct_indices
        .iter()
        .enumerate()
        .map(|(i, &correct)| question(i as u32 + 1, correct))
        .collect();
    session.begin_playing(deck).unwrap();
    session
}

fn spot() -> PlantingSpot {
    PlantingSpot::new(42.0, 50.0).unwrap()
}

#[derive(Props, Clone)]
struct SessionProps {
    session: QuizSession,
}

impl PartialEq for SessionProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn PlayingHarness(props: SessionProps) -> Element {
    rsx! {
        PlayingView {
            session: props.session.clone(),
            planting: false,
            pending_flower: None,
            on_answer: move |_| {},
            on_advance: move |_| {},
        }
    }
}

#[component]
fn CompletedHarness(props: SessionProps) -> Element {
    rsx! {
        CompletedView { session: props.session.clone(), on_reset: move |_| {} }
    }
}

#[component]
fn SetupHarness() -> Element {
    rsx! {
        SetupView {
            selected: FlowerType::Daisy,
            on_select: move |_| {},
            on_start: move |_| {},
        }
    }
}

#[derive(Props, Clone)]
struct GardenProps {
    session: QuizSession,
    pending_last: bool,
}

impl PartialEq for GardenProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn GardenHarness(props: GardenProps) -> Element {
    let flowers = props.session.planted_flowers().to_vec();
    let pending = props
        .pending_last
        .then(|| flowers.last().map(|f| f.id()))
        .flatten();
    rsx! {
        GardenPlot { flowers, pending_flower: pending, planting: props.pending_last }
    }
}

struct TestApp {
    garden: Arc<GardenService>,
}

impl UiApp for TestApp {
    fn garden(&self) -> Arc<GardenService> {
        Arc::clone(&self.garden)
    }
}

#[component]
fn AppHarness() -> Element {
    let app: Arc<dyn UiApp> = Arc::new(TestApp {
        garden: Arc::new(GardenService::new(
            fixed_clock(),
            QuizContentService::new(None),
        )),
    });
    use_context_provider(|| build_app_context(&app));
    rsx! {
        App {}
    }
}

fn render_dom(mut dom: VirtualDom) -> String {
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[tokio::test(flavor = "current_thread")]
async fn setup_view_lists_all_seeds() {
    let html = render_dom(VirtualDom::new(SetupHarness));
    for kind in FlowerType::ALL {
        assert!(html.contains(kind.name()), "missing {} in {html}", kind.name());
    }
    assert!(html.contains("Ethics Garden"));
    assert!(html.contains("Start planting"));
}

#[tokio::test(flavor = "current_thread")]
async fn setup_view_marks_selected_seed() {
    let html = render_dom(VirtualDom::new(SetupHarness));
    assert!(html.contains("seed-card--selected"), "no selected seed in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn playing_view_renders_question_and_options() {
    let session = playing_session(&[0, 1]);
    let html = render_dom(VirtualDom::new_with_props(
        PlayingHarness,
        SessionProps { session },
    ));
    assert!(html.contains("What is question 1 about?"));
    for label in ["q1 alpha", "q1 bravo", "q1 charlie", "q1 delta"] {
        assert!(html.contains(label), "missing {label} in {html}");
    }
    assert!(html.contains("Question 1 / 2"));
}

#[tokio::test(flavor = "current_thread")]
async fn playing_view_styles_wrong_choice_after_feedback() {
    let mut session = playing_session(&[2]);
    session.answer_current(0, spot(), fixed_now()).unwrap();

    let html = render_dom(VirtualDom::new_with_props(
        PlayingHarness,
        SessionProps { session },
    ));
    assert!(html.contains("option--correct"));
    assert!(html.contains("option--chosen-wrong"));
    assert!(
        html.contains("The correct answer is: q1 charlie"),
        "feedback should quote the correct option: {html}"
    );
    assert!(html.contains("a short explanation"));
}

#[tokio::test(flavor = "current_thread")]
async fn playing_view_offers_results_on_last_question() {
    let mut session = playing_session(&[0]);
    session.answer_current(0, spot(), fixed_now()).unwrap();

    let html = render_dom(VirtualDom::new_with_props(
        PlayingHarness,
        SessionProps { session },
    ));
    assert!(html.contains("See your results"), "missing results cta in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn completed_view_shows_final_score_and_garden() {
    let mut session = playing_session(&[0, 0]);
    session.answer_current(0, spot(), fixed_now()).unwrap();
    session.advance().unwrap();
    session.answer_current(1, spot(), fixed_now()).unwrap();
    session.advance().unwrap();
    assert!(session.is_complete());

    let html = render_dom(VirtualDom::new_with_props(
        CompletedHarness,
        SessionProps { session },
    ));
    assert!(html.contains("Final score"));
    assert!(html.contains("Play again"));
    assert!(html.contains("🌷"), "planted tulip missing in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn garden_plot_positions_flowers_from_their_spot() {
    let mut session = playing_session(&[0]);
    session.answer_current(0, spot(), fixed_now()).unwrap();

    let html = render_dom(VirtualDom::new_with_props(
        GardenHarness,
        GardenProps {
            session,
            pending_last: false,
        },
    ));
    // spot() is (42, 50): left from x, bottom = 5 + 0.4 * y.
    assert!(html.contains("left: 42%"), "missing position in {html}");
    assert!(html.contains("bottom: 25%"), "missing depth in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn garden_plot_holds_back_pending_flower() {
    let mut session = playing_session(&[0]);
    session.answer_current(0, spot(), fixed_now()).unwrap();

    let html = render_dom(VirtualDom::new_with_props(
        GardenHarness,
        GardenProps {
            session,
            pending_last: true,
        },
    ));
    assert!(!html.contains("flower__head"), "pending flower rendered in {html}");
    assert!(html.contains("garden-plot__gardener"), "gardener missing in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn app_smoke_starts_in_setup() {
    let html = render_dom(VirtualDom::new(AppHarness));
    assert!(html.contains("Ethics Garden"));
    assert!(html.contains("Choose your seed"));
}
