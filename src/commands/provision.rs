//! Provision command — preflight plus the provisioning pass.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::manifest::Manifest;
use crate::output::OutputContext;
use crate::provision;

/// Machine-readable summary emitted in `--json` mode.
#[derive(Debug, Serialize)]
pub struct ProvisionSummary {
    /// Agents newly configured in this run.
    pub configured: Vec<&'static str>,
}

/// Run the provisioning pass on its own.
///
/// # Errors
///
/// Returns an error when the preflight fails (missing auth template).
pub fn run(ctx: &OutputContext, manifest: &Manifest, json: bool) -> Result<()> {
    provision::preflight(ctx, manifest)?;

    let configured = provision::setup_new(ctx, manifest);

    if json {
        let summary = ProvisionSummary { configured };
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("JSON serialization")?
        );
        return Ok(());
    }

    ctx.line(&format!(
        "{} agents configured with new auth",
        configured.len()
    ));
    Ok(())
}
