use std::path::Path;

use anyhow::Context;
use tracing::info;

use cc_core::config::AppConfig;
use cc_core::verification::{
    dns_txt_record, meta_tag_snippet, VerificationState, VerificationTarget, VerificationToken,
};
use cc_infra::DnsRecordFile;

use super::CommandOutcome;
use crate::bootstrap::wiring::build_website_check;

pub fn token() -> CommandOutcome {
    println!("{}", VerificationToken::generate());
    CommandOutcome::Success
}

pub async fn snippets(token: &str, out_dir: Option<&Path>) -> anyhow::Result<CommandOutcome> {
    let token = parse_token(token)?;
    print!("{}", render_snippets(&token));

    if let Some(dir) = out_dir {
        let path = DnsRecordFile::in_dir(dir).write(&token).await?;
        println!("DNS TXT record written to {}", path.display());
    }
    Ok(CommandOutcome::Success)
}

pub async fn verify(config: &AppConfig, website: &str, token: &str) -> anyhow::Result<CommandOutcome> {
    let token = parse_token(token)?;
    let target = VerificationTarget::from_website(website)
        .with_context(|| format!("Cannot verify website {website:?}"))?;
    let check = build_website_check(config)?;

    info!(domain = target.domain(), "verifying website ownership");
    let state = check.verify(&target, &token).await;
    Ok(report_verification(&state, &token))
}

pub(crate) fn parse_token(raw: &str) -> anyhow::Result<VerificationToken> {
    let trimmed = raw.trim();
    anyhow::ensure!(!trimmed.is_empty(), "Verification token must not be empty");
    Ok(VerificationToken::from(trimmed))
}

pub(crate) fn render_snippets(token: &VerificationToken) -> String {
    format!(
        "Meta tag (place inside <head> of your home page):\n  {}\n\nDNS TXT record:\n  {}\n",
        meta_tag_snippet(token),
        dns_txt_record(token)
    )
}

/// Print the outcome of a verification attempt and map it to an outcome.
pub(crate) fn report_verification(
    state: &VerificationState,
    token: &VerificationToken,
) -> CommandOutcome {
    if let Some(notice) = state.notice() {
        println!("{notice}");
    }
    if state.is_verified() || state.skipped {
        return CommandOutcome::Success;
    }
    println!();
    print!("{}", render_snippets(token));
    CommandOutcome::Failure
}
