use thiserror::Error;

use crate::model::attributes::{AverageAttributeSet, TeamMember};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AveragesError {
    #[error("cannot average attributes of an empty team (division by zero)")]
    EmptyTeam,
}

/// Arithmetic mean of each attribute across the team. Attributes are
/// independent; the team size is the common divisor. An empty team is an
/// explicit error, never a zeroed average.
pub fn team_attribute_averages(
    team: &[TeamMember],
) -> Result<AverageAttributeSet, AveragesError> {
    if team.is_empty() {
        return Err(AveragesError::EmptyTeam);
    }

    let mut sum_intelligence = 0.0;
    let mut sum_strength = 0.0;
    let mut sum_endurance = 0.0;
    let mut sum_spicy_food_tolerance = 0.0;
    for member in team {
        sum_intelligence += member.attributes.intelligence;
        sum_strength += member.attributes.strength;
        sum_endurance += member.attributes.endurance;
        sum_spicy_food_tolerance += member.attributes.spicy_food_tolerance;
    }

    let n = team.len() as f64;
    Ok(AverageAttributeSet {
        intelligence: sum_intelligence / n,
        strength: sum_strength / n,
        endurance: sum_endurance / n,
        spicy_food_tolerance: sum_spicy_food_tolerance / n,
    })
}
