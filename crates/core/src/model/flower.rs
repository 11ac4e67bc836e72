use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::FlowerId;

/// Planting coordinates stay away from the plot edges.
pub const SPOT_MIN: f32 = 10.0;
pub const SPOT_MAX: f32 = 90.0;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum FlowerError {
    #[error("planting position ({x}, {y}) is outside [{SPOT_MIN}, {SPOT_MAX}]")]
    SpotOutOfRange { x: f32, y: f32 },
}

//
// ─── FLOWER TYPE ───────────────────────────────────────────────────────────────
//

/// Cosmetic seed choice. Affects only rendering, never scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowerType {
    Rose,
    Sunflower,
    Tulip,
    Daisy,
}

impl FlowerType {
    /// All selectable flower types, in picker order.
    pub const ALL: [FlowerType; 4] = [
        FlowerType::Rose,
        FlowerType::Sunflower,
        FlowerType::Tulip,
        FlowerType::Daisy,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            FlowerType::Rose => "Rose",
            FlowerType::Sunflower => "Sunflower",
            FlowerType::Tulip => "Tulip",
            FlowerType::Daisy => "Daisy",
        }
    }

    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            FlowerType::Rose => "🌹",
            FlowerType::Sunflower => "🌻",
            FlowerType::Tulip => "🌷",
            FlowerType::Daisy => "🌼",
        }
    }

    /// Short blurb for the seed picker.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            FlowerType::Rose => "Classic and elegant",
            FlowerType::Sunflower => "Bright and cheerful",
            FlowerType::Tulip => "Graceful and colorful",
            FlowerType::Daisy => "Simple and friendly",
        }
    }
}

//
// ─── PLANTING SPOT ─────────────────────────────────────────────────────────────
//

/// A position inside the garden plot, as percentages of its width/height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlantingSpot {
    x: f32,
    y: f32,
}

impl PlantingSpot {
    /// Validates a spot against the plot bounds.
    ///
    /// # Errors
    ///
    /// Returns `FlowerError::SpotOutOfRange` when either coordinate falls
    /// outside `[SPOT_MIN, SPOT_MAX]`.
    pub fn new(x: f32, y: f32) -> Result<Self, FlowerError> {
        let in_range = |v: f32| (SPOT_MIN..=SPOT_MAX).contains(&v);
        if !in_range(x) || !in_range(y) {
            return Err(FlowerError::SpotOutOfRange { x, y });
        }
        Ok(Self { x, y })
    }

    /// Clamps arbitrary coordinates into the plot bounds. Samplers use this
    /// so drawing a spot can never fail.
    #[must_use]
    pub fn clamped(x: f32, y: f32) -> Self {
        Self {
            x: x.clamp(SPOT_MIN, SPOT_MAX),
            y: y.clamp(SPOT_MIN, SPOT_MAX),
        }
    }

    #[must_use]
    pub fn x(&self) -> f32 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f32 {
        self.y
    }
}

//
// ─── PLANTED FLOWER ────────────────────────────────────────────────────────────
//

/// A flower planted for one correct answer. Never mutated or removed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlantedFlower {
    id: FlowerId,
    kind: FlowerType,
    spot: PlantingSpot,
}

impl PlantedFlower {
    #[must_use]
    pub fn new(id: FlowerId, kind: FlowerType, spot: PlantingSpot) -> Self {
        Self { id, kind, spot }
    }

    #[must_use]
    pub fn id(&self) -> FlowerId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> FlowerType {
        self.kind
    }

    #[must_use]
    pub fn x(&self) -> f32 {
        self.spot.x()
    }

    #[must_use]
    pub fn y(&self) -> f32 {
        self.spot.y()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
