pub mod json;
pub mod text;

use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use thiserror::Error;

use crate::model::attributes::ScoredApplicant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Write the scoredApplicants JSON artifact only
    Json,
    /// Also print a ranked table to stdout
    Text,
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Writes the scoredApplicants JSON artifact to `out_path`. The JSON
/// contract is the single output file for every format;
/// `ReportFormat::Text` additionally prints a ranked table to stdout.
/// Nothing is written if rendering fails.
pub fn write_report(
    scored: &[ScoredApplicant],
    out_path: &Path,
    format: ReportFormat,
) -> Result<(), ReportError> {
    let body = json::render_scored_json(scored)?;
    fs::write(out_path, body).map_err(|source| ReportError::Io {
        path: out_path.to_path_buf(),
        source,
    })?;
    tracing::info!(
        "wrote {} scored applicants to {}",
        scored.len(),
        out_path.display()
    );
    if format == ReportFormat::Text {
        print!("{}", text::render_ranked_table(scored));
    }
    Ok(())
}
