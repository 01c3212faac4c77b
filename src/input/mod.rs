use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::model::attributes::{Applicant, TeamMember};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read roster {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid roster JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("roster {} has an empty \"{section}\" list", path.display())]
    EmptySection {
        path: PathBuf,
        section: &'static str,
    },
}

/// One run's input snapshot: the current team and the applicant batch,
/// both in file order.
#[derive(Debug, Deserialize)]
pub struct Roster {
    pub team: Vec<TeamMember>,
    pub applicants: Vec<Applicant>,
}

/// Reads and validates a roster file. Both lists must be non-empty: an
/// empty team has no averages and an empty applicant batch has no score
/// range, so neither can produce output downstream.
pub fn load_roster(path: &Path) -> Result<Roster, InputError> {
    let text = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let roster: Roster = serde_json::from_str(&text).map_err(|source| InputError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if roster.team.is_empty() {
        return Err(InputError::EmptySection {
            path: path.to_path_buf(),
            section: "team",
        });
    }
    if roster.applicants.is_empty() {
        return Err(InputError::EmptySection {
            path: path.to_path_buf(),
            section: "applicants",
        });
    }

    tracing::info!(
        "loaded roster {}: {} team members, {} applicants",
        path.display(),
        roster.team.len(),
        roster.applicants.len()
    );
    for member in &roster.team {
        tracing::debug!("team member: {}", member.name);
    }
    for applicant in &roster.applicants {
        tracing::debug!("applicant: {}", applicant.name);
    }

    Ok(roster)
}
