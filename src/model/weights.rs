use thiserror::Error;

/// Default weighting: intelligence prioritized, strength and endurance
/// equal, spice tolerance least.
pub const DEFAULT_WEIGHTS: AttributeWeights = AttributeWeights {
    intelligence: 0.35,
    strength: 0.25,
    endurance: 0.25,
    spicy_food_tolerance: 0.15,
};

const SUM_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Error, PartialEq)]
pub enum WeightsError {
    #[error("attribute weights must sum to 1.0, got {sum}")]
    BadSum { sum: f64 },
    #[error("attribute weights must be finite")]
    NotFinite,
}

/// Per-attribute multipliers applied to the deviation from the team
/// average. Invariant: components are finite and sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttributeWeights {
    pub intelligence: f64,
    pub strength: f64,
    pub endurance: f64,
    pub spicy_food_tolerance: f64,
}

impl AttributeWeights {
    pub fn new(
        intelligence: f64,
        strength: f64,
        endurance: f64,
        spicy_food_tolerance: f64,
    ) -> Result<Self, WeightsError> {
        let weights = Self {
            intelligence,
            strength,
            endurance,
            spicy_food_tolerance,
        };
        if !weights.sum().is_finite() {
            return Err(WeightsError::NotFinite);
        }
        let sum = weights.sum();
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(WeightsError::BadSum { sum });
        }
        Ok(weights)
    }

    pub fn sum(&self) -> f64 {
        self.intelligence + self.strength + self.endurance + self.spicy_food_tolerance
    }
}

impl Default for AttributeWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}
