use serde::Serialize;

use crate::model::attributes::ScoredApplicant;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScoredReport<'a> {
    scored_applicants: &'a [ScoredApplicant],
}

/// Pretty-printed `{"scoredApplicants": [{"name", "score"}, ...]}` with
/// rows in applicant input order.
pub fn render_scored_json(scored: &[ScoredApplicant]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&ScoredReport {
        scored_applicants: scored,
    })
}
