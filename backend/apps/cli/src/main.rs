//! PoW Demo Entry Point
//!
//! Searches for nonces at each configured difficulty, then signs the chosen
//! preimage with a fresh RSA key and verifies it.
//! Uses `anyhow` only at the top level; everything below returns
//! `kernel::error::AppError`, whose kind picks the exit code.

mod config;
mod pipeline;

use std::process::ExitCode;

use kernel::error::app_error::AppError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::DemoConfig;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pow_demo=info,pow=info,signing=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match DemoConfig::from_env() {
        Ok(config) => config,
        Err(e) => return Ok(fail(e)),
    };

    tracing::info!(
        label = %config.label,
        difficulties = ?config.difficulties,
        sign_index = config.sign_index,
        key_bits = config.signature.key_bits,
        "Starting"
    );

    let report = match pipeline::run(&config).await {
        Ok(report) => report,
        Err(e) => return Ok(fail(e)),
    };

    match report.render(config.output) {
        Ok(rendered) => println!("{rendered}"),
        Err(e) => return Ok(fail(e)),
    }

    Ok(if report.signature.verified {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn fail(error: AppError) -> ExitCode {
    if error.is_internal() {
        tracing::error!(error = ?error, "Pipeline failed");
    }
    eprintln!("error: {error}");
    ExitCode::from(error.exit_code())
}
