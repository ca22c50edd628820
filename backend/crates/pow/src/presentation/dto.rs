//! Report DTOs (Data Transfer Objects)

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Solution;

/// One solved search, as printed or emitted as JSON
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionReport {
    pub difficulty: usize,
    pub nonce: String,
    pub digest: String,
    pub elapsed_secs: f64,
    pub attempts: u64,
    pub found_at: DateTime<Utc>,
}

impl From<&Solution> for SolutionReport {
    fn from(solution: &Solution) -> Self {
        Self {
            difficulty: solution.difficulty.leading_zeros(),
            nonce: solution.nonce.to_text(),
            digest: solution.digest.to_string(),
            elapsed_secs: solution.elapsed.as_secs_f64(),
            attempts: solution.attempts,
            found_at: solution.found_at,
        }
    }
}

impl fmt::Display for SolutionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} leading zeros:", self.difficulty)?;
        writeln!(f, "Nonce: {}", self.nonce)?;
        writeln!(f, "Digest: {}", self.digest)?;
        writeln!(f, "Attempts: {}", self.attempts)?;
        write!(f, "Elapsed: {:.4} s", self.elapsed_secs)
    }
}
