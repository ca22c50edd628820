//! Driver Configuration
//!
//! Read from the environment (after `.env` is loaded by `main`).

use std::env::{self, VarError};

use kernel::error::{
    app_error::{AppError, AppResult, ResultExt},
    kind::ErrorKind,
};
use pow::{Difficulty, PowConfig};
use signing::SignatureConfig;

/// How the final report is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Label prefixed to every nonce
    pub label: String,
    /// Searches to run, in order
    pub difficulties: Vec<Difficulty>,
    /// Index into `difficulties` whose solution gets signed
    pub sign_index: usize,
    pub output: OutputFormat,
    pub pow: PowConfig,
    pub signature: SignatureConfig,
}

impl DemoConfig {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key))
    }

    /// Build from any `env::var`-shaped lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Result<String, VarError>) -> AppResult<Self> {
        let var = |key: &str| read_var(&lookup, key);

        let label = var("POW_LABEL")?.unwrap_or_else(|| "Derrick".to_string());

        let difficulties = match var("POW_DIFFICULTIES")? {
            Some(raw) => parse_difficulties(&raw)?,
            None => vec![Difficulty::new(4)?, Difficulty::new(5)?],
        };
        if difficulties.is_empty() {
            return Err(AppError::config("POW_DIFFICULTIES must list at least one level"));
        }

        let sign_index = match var("POW_SIGN_INDEX")? {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_app_err(ErrorKind::Config, "POW_SIGN_INDEX must be a non-negative integer")?,
            None => 0,
        };
        if sign_index >= difficulties.len() {
            return Err(AppError::config(format!(
                "POW_SIGN_INDEX {sign_index} is out of range for {} difficulties",
                difficulties.len()
            )));
        }

        let output = match var("POW_OUTPUT")?.as_deref().map(str::trim) {
            None | Some("text") => OutputFormat::Text,
            Some("json") => OutputFormat::Json,
            Some(other) => {
                return Err(AppError::config(format!("Unknown POW_OUTPUT '{other}'"))
                    .with_hint("Use 'text' or 'json'"));
            }
        };

        let mut pow = PowConfig::default();
        if let Some(raw) = var("POW_PROGRESS_INTERVAL")? {
            let interval = raw
                .trim()
                .parse::<u64>()
                .map_app_err(ErrorKind::Config, "POW_PROGRESS_INTERVAL must be an integer")?;
            pow = pow.with_progress_interval(interval);
        }

        let mut signature = SignatureConfig::default();
        if let Some(raw) = var("RSA_KEY_BITS")? {
            let bits = raw
                .trim()
                .parse::<usize>()
                .map_app_err(ErrorKind::Config, "RSA_KEY_BITS must be an integer")?;
            signature = signature.with_key_bits(bits);
        }
        signature.validate()?;

        Ok(Self {
            label,
            difficulties,
            sign_index,
            output,
            pow,
            signature,
        })
    }
}

/// Unset is `None`; a value that isn't valid UTF-8 is an error, not a default
fn read_var(
    lookup: &impl Fn(&str) -> Result<String, VarError>,
    key: &str,
) -> AppResult<Option<String>> {
    match lookup(key) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(e @ VarError::NotUnicode(_)) => {
            Err(AppError::config(format!("{key} is not valid UTF-8")).with_source(e))
        }
    }
}

fn parse_difficulties(raw: &str) -> AppResult<Vec<Difficulty>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| -> AppResult<Difficulty> {
            let zeros = s
                .parse::<usize>()
                .map_app_err(ErrorKind::Config, "POW_DIFFICULTIES must be comma-separated integers")?;
            Ok(Difficulty::new(zeros)?)
        })
        .collect()
}
