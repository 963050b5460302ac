use std::path::Path;

use anyhow::{bail, Context};
use tracing::info;

use cc_core::ports::CurrentUserPort;
use cc_core::config::AppConfig;
use cc_core::onboarding::{AdvanceOutcome, ErrorMap, FormState, OnboardingRecord, SubmissionState};

use super::verification::report_verification;
use super::CommandOutcome;
use crate::bootstrap::wiring::build_onboarding;

/// Read an onboarding record from a TOML file (camelCase keys).
pub fn load_record(path: &Path) -> anyhow::Result<OnboardingRecord> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read record file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse record file: {}", path.display()))
}

pub fn validate(path: &Path) -> anyhow::Result<CommandOutcome> {
    let record = load_record(path)?;
    let mut form = FormState::with_record(record);

    let counter = form.record().description_counter();
    if counter.is_over_limit() {
        println!("Note: description is {counter}");
    }

    if form.validate_basic_info() {
        println!("Record is valid.");
        Ok(CommandOutcome::Success)
    } else {
        print_errors(form.errors());
        Ok(CommandOutcome::Failure)
    }
}

pub async fn submit(
    config: &AppConfig,
    path: &Path,
    skip_verification: bool,
) -> anyhow::Result<CommandOutcome> {
    let record = load_record(path)?;
    let publisher = format!(
        "{} ({})",
        record.identity().display_name(),
        record.dialable_phone()
    );
    let deps = build_onboarding(config, record)?;
    let orchestrator = &deps.orchestrator;

    if let AdvanceOutcome::Blocked { errors } = orchestrator.advance().await {
        print_errors(&errors);
        return Ok(CommandOutcome::Failure);
    }

    let verification_required = match orchestrator.submit().await? {
        SubmissionState::Submitted {
            verification_required,
        } => verification_required,
        SubmissionState::Failed { message, .. } => {
            println!("Submission failed: {message}");
            return Ok(CommandOutcome::Failure);
        }
        other => bail!("Submission ended in unexpected state {other:?}"),
    };

    match deps.current_user.current_user() {
        Some(current) => println!(
            "Publisher account created for {publisher} (id {}).",
            current.user.id
        ),
        None => println!("Publisher account created for {publisher}."),
    }

    if !verification_required {
        println!("No website provided, nothing to verify.");
        return Ok(CommandOutcome::Success);
    }

    let token = orchestrator.verification_token().await;
    let state = if skip_verification {
        orchestrator.skip_verification().await?
    } else {
        info!(token = %token, "verifying website after submission");
        orchestrator.verify().await?
    };
    Ok(report_verification(&state, &token))
}

fn print_errors(errors: &ErrorMap) {
    println!("The record has {} problem(s):", errors.len());
    for (field, error) in errors.iter() {
        println!("  {}: {error}", field.key());
    }
}
