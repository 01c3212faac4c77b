use std::fmt::Write;

use crate::model::attributes::ScoredApplicant;

/// Ranked table, highest score first. Ties keep applicant input order.
pub fn render_ranked_table(scored: &[ScoredApplicant]) -> String {
    let mut ranked: Vec<&ScoredApplicant> = scored.iter().collect();
    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut out = String::new();
    let _ = writeln!(out, "{:>4}  {:>5}  name", "rank", "score");
    for (i, row) in ranked.iter().enumerate() {
        let _ = writeln!(out, "{:>4}  {:>5.2}  {}", i + 1, row.score, row.name);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(name: &str, score: f64) -> ScoredApplicant {
        ScoredApplicant {
            name: name.to_string(),
            score,
        }
    }

    #[test]
    fn test_table_ranked_by_score_desc() {
        let rows = vec![scored("C", 0.0), scored("A", 1.0), scored("B", 0.5)];
        let table = render_ranked_table(&rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].ends_with("A"));
        assert!(lines[2].ends_with("B"));
        assert!(lines[3].ends_with("C"));
        assert!(lines[1].contains("1.00"));
        assert!(lines[3].contains("0.00"));
    }

    #[test]
    fn test_ties_keep_input_order() {
        let rows = vec![scored("first", 0.5), scored("second", 0.5)];
        let table = render_ranked_table(&rows);
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[1].ends_with("first"));
        assert!(lines[2].ends_with("second"));
    }
}
