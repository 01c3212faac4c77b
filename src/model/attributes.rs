use serde::{Deserialize, Serialize};

/// The four traits every roster entry carries. A fixed-shape struct on
/// purpose: an entry missing an attribute is rejected while the roster is
/// parsed, so scoring never has to look up an attribute that might be
/// absent. Values are unbounded; negative and zero are valid.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeSet {
    pub intelligence: f64,
    pub strength: f64,
    pub endurance: f64,
    pub spicy_food_tolerance: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub attributes: AttributeSet,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Applicant {
    pub name: String,
    pub attributes: AttributeSet,
}

/// Arithmetic mean of each attribute across the current team. Computed
/// once per run; meaningless for an empty team, so construction goes
/// through `pipeline::averages`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AverageAttributeSet {
    pub intelligence: f64,
    pub strength: f64,
    pub endurance: f64,
    pub spicy_food_tolerance: f64,
}

/// One output row: applicant name plus the normalized score in [0, 1],
/// rounded to 2 decimal places. Rows keep the input applicant order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredApplicant {
    pub name: String,
    pub score: f64,
}
