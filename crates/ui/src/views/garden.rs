use dioxus::prelude::*;

use garden_core::model::{FlowerId, PlantedFlower};

/// The garden visualization: a layered backdrop with one sprite per planted
/// flower. A flower whose id matches `pending_flower` is held back, which is
/// how the planting delay is rendered without touching session data.
#[component]
pub fn GardenPlot(
    flowers: Vec<PlantedFlower>,
    pending_flower: Option<FlowerId>,
    planting: bool,
) -> Element {
    rsx! {
        div { class: "garden-plot",
            div { class: "garden-plot__sky" }
            div { class: "garden-plot__sun" }
            div { class: "garden-plot__cloud garden-plot__cloud--left", "☁️" }
            div { class: "garden-plot__cloud garden-plot__cloud--right", "☁️" }
            div { class: "garden-plot__hill garden-plot__hill--back" }
            div { class: "garden-plot__hill garden-plot__hill--front" }
            div { class: "garden-plot__ground" }
            div { class: "garden-plot__flowers",
                for flower in flowers.iter().filter(|f| Some(f.id()) != pending_flower) {
                    FlowerSprite { key: "{flower.id()}", flower: *flower }
                }
            }
            if planting {
                div { class: "garden-plot__gardener",
                    span { class: "garden-plot__gardener-emoji", "🧑‍🌾" }
                    span { class: "garden-plot__gardener-bubble", "Great job!" }
                }
            }
        }
    }
}

#[component]
fn FlowerSprite(flower: PlantedFlower) -> Element {
    // Depth from y: flowers lower in the plot sit closer to the viewer,
    // so they render lower, larger, and in front.
    let bottom = 5.0 + flower.y() * 0.4;
    let scale = 0.6 + flower.y() * 0.008;
    let depth = flower.y() as i32;
    rsx! {
        div {
            class: "flower",
            style: "left: {flower.x()}%; bottom: {bottom}%; z-index: {depth}; transform: scale({scale});",
            span { class: "flower__head", "{flower.kind().emoji()}" }
            span { class: "flower__stem" }
        }
    }
}
