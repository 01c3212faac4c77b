use thiserror::Error;

use crate::model::attributes::{
    Applicant, AttributeSet, AverageAttributeSet, ScoredApplicant,
};
use crate::model::weights::AttributeWeights;

#[derive(Debug, Error, PartialEq)]
pub enum ScoreError {
    #[error("no applicants to score")]
    NoApplicants,
    #[error(
        "all {count} applicants share the raw score {raw}; min-max normalization has a zero denominator"
    )]
    DegenerateScoreRange { count: usize, raw: f64 },
}

/// Weighted sum of the applicant's per-attribute deviations from the team
/// averages. Above-average attributes contribute positively, below-average
/// negatively; the result is unclamped and may be negative.
pub fn raw_score(
    attributes: &AttributeSet,
    averages: &AverageAttributeSet,
    weights: &AttributeWeights,
) -> f64 {
    weights.intelligence * (attributes.intelligence - averages.intelligence)
        + weights.strength * (attributes.strength - averages.strength)
        + weights.endurance * (attributes.endurance - averages.endurance)
        + weights.spicy_food_tolerance
            * (attributes.spicy_food_tolerance - averages.spicy_food_tolerance)
}

/// Scores every applicant against the team averages, then min-max
/// normalizes the batch into [0, 1]. The lowest raw score maps to exactly
/// 0.0 and the highest to exactly 1.0; rank order is preserved. Each score
/// is rounded to 2 decimal places. Output order is input order.
///
/// A batch where every raw score is identical has no usable range and
/// fails with `ScoreError::DegenerateScoreRange` rather than producing
/// NaN.
pub fn score_applicants(
    applicants: &[Applicant],
    averages: &AverageAttributeSet,
    weights: &AttributeWeights,
) -> Result<Vec<ScoredApplicant>, ScoreError> {
    if applicants.is_empty() {
        return Err(ScoreError::NoApplicants);
    }

    let raw: Vec<f64> = applicants
        .iter()
        .map(|a| raw_score(&a.attributes, averages, weights))
        .collect();

    let min = raw.iter().copied().fold(f64::INFINITY, f64::min);
    let max = raw.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    if span == 0.0 {
        return Err(ScoreError::DegenerateScoreRange {
            count: applicants.len(),
            raw: min,
        });
    }

    let scored = applicants
        .iter()
        .zip(&raw)
        .map(|(applicant, &score)| ScoredApplicant {
            name: applicant.name.clone(),
            score: round2((score - min) / span),
        })
        .collect();
    Ok(scored)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
