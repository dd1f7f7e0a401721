//! Verify command — verification pass only, no mutation.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::manifest::Manifest;
use crate::output::OutputContext;
use crate::provision;

/// Machine-readable summary emitted in `--json` mode.
#[derive(Debug, Serialize)]
pub struct VerifySummary {
    /// Agents whose existing auth handler was verified.
    pub verified: Vec<&'static str>,
}

/// Run the verification pass on its own.
///
/// # Errors
///
/// Returns an error only if the JSON summary cannot be serialized.
pub fn run(ctx: &OutputContext, manifest: &Manifest, json: bool) -> Result<()> {
    let verified = provision::verify_existing(ctx, manifest);

    if json {
        let summary = VerifySummary { verified };
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("JSON serialization")?
        );
        return Ok(());
    }

    ctx.line(&format!(
        "{} agents verified with existing auth",
        verified.len()
    ));
    Ok(())
}
