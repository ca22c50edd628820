//! Search-then-sign pipeline
//!
//! Runs one search per configured difficulty, then signs and verifies the
//! preimage of the selected solution.

use std::fmt;

use kernel::error::app_error::{AppError, AppResult, OptionExt};
use pow::{Difficulty, Label, PowConfig, Solution, SolutionReport, spawn_search};
use serde::Serialize;
use signing::{SignatureReport, SignatureService, SigningSession};

use crate::config::{DemoConfig, OutputFormat};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoReport {
    pub label: String,
    pub solutions: Vec<SolutionReport>,
    /// `label ∥ nonce` of the solution that was signed
    pub signed_payload: String,
    pub signature: SignatureReport,
}

impl fmt::Display for DemoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for solution in &self.solutions {
            writeln!(f, "{solution}")?;
            writeln!(f)?;
        }
        writeln!(f, "Signed payload: {}", self.signed_payload)?;
        write!(f, "{}", self.signature)
    }
}

impl DemoReport {
    pub fn render(&self, format: OutputFormat) -> AppResult<String> {
        match format {
            OutputFormat::Text => Ok(self.to_string()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

pub async fn run(config: &DemoConfig) -> AppResult<DemoReport> {
    let label = Label::from(config.label.as_str());

    let mut solutions = Vec::with_capacity(config.difficulties.len());
    for &difficulty in &config.difficulties {
        solutions.push(search(&label, difficulty, &config.pow).await?);
    }

    let chosen = solutions
        .get(config.sign_index)
        .ok_or_config("POW_SIGN_INDEX is out of range")?;
    let payload = chosen.payload(&label).into_bytes();
    let signed_payload = String::from_utf8_lossy(&payload).into_owned();

    let service = SignatureService::new(config.signature.clone())?;
    let verified = tokio::task::spawn_blocking(move || {
        SigningSession::new(service)
            .generate_keys()?
            .sign(payload)?
            .verify()
    })
    .await
    .map_err(|e| AppError::internal(format!("Signing task failed: {e}")))??;

    if !verified.is_valid() {
        tracing::error!("Fresh signature failed verification against its own key");
    }

    Ok(DemoReport {
        label: config.label.clone(),
        solutions: solutions.iter().map(SolutionReport::from).collect(),
        signed_payload,
        signature: SignatureReport::from_verified(&verified)?,
    })
}

/// One search on the blocking pool; Ctrl-C cancels it
async fn search(label: &Label, difficulty: Difficulty, config: &PowConfig) -> AppResult<Solution> {
    let handle = spawn_search(label.clone(), difficulty, config.clone());
    let cancel = handle.cancel_flag();
    let join = handle.join();
    tokio::pin!(join);

    tokio::select! {
        result = &mut join => Ok(result?),
        _ = tokio::signal::ctrl_c() => {
            tracing::warn!(difficulty = %difficulty, "Interrupted, cancelling search");
            cancel.cancel();
            Ok(join.await?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::error::kind::ErrorKind;
    use pow::domain::services::verify_solution;
    use pow::Nonce;
    use signing::SignatureConfig;

    fn derrick(difficulties: &[usize]) -> DemoConfig {
        DemoConfig {
            label: "Derrick".to_string(),
            difficulties: difficulties
                .iter()
                .map(|&k| Difficulty::new(k).unwrap())
                .collect(),
            sign_index: 0,
            output: OutputFormat::Text,
            pow: PowConfig::quiet(),
            signature: SignatureConfig::default(),
        }
    }

    #[tokio::test]
    async fn test_difficulty_four_signs_and_verifies() {
        let report = run(&derrick(&[4])).await.unwrap();

        assert_eq!(report.solutions.len(), 1);
        let solution = &report.solutions[0];
        assert!(solution.digest.starts_with("0000"));
        assert_eq!(report.signed_payload, format!("Derrick{}", solution.nonce));

        let nonce: Nonce = solution.nonce.parse().unwrap();
        assert!(verify_solution(
            &Label::from("Derrick"),
            &nonce,
            Difficulty::new(4).unwrap()
        ));

        assert_eq!(report.signature.key_bits, 2048);
        assert!(report.signature.verified);
    }

    #[tokio::test]
    async fn test_signs_the_selected_solution() {
        let mut config = derrick(&[1, 2]);
        config.sign_index = 1;
        let report = run(&config).await.unwrap();

        let levels: Vec<usize> = report.solutions.iter().map(|s| s.difficulty).collect();
        assert_eq!(levels, vec![1, 2]);
        assert!(report.signed_payload.ends_with(&report.solutions[1].nonce));
        assert!(report.signature.verified);

        let rendered = report.render(OutputFormat::Json).unwrap();
        let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(json["label"], "Derrick");
        assert_eq!(json["solutions"][1]["difficulty"], 2);
        assert_eq!(json["signature"]["verified"], true);

        let text = report.render(OutputFormat::Text).unwrap();
        assert!(text.contains("1 leading zeros:"));
        assert!(text.contains("Verified: true"));
    }

    #[tokio::test]
    async fn test_empty_label_is_searchable() {
        let mut config = derrick(&[1]);
        config.label = String::new();
        let report = run(&config).await.unwrap();
        assert_eq!(report.signed_payload, report.solutions[0].nonce);
        assert!(report.signature.verified);
    }

    #[tokio::test]
    async fn test_sign_index_past_solutions_is_config_error() {
        let mut config = derrick(&[0]);
        config.sign_index = 1;
        let err = run(&config).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
        assert!(err.message().contains("POW_SIGN_INDEX"));
    }
}
