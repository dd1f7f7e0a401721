//! `oap-setup` default command — preflight, verify, provision, summary.

use anyhow::{Context, Result};
use owo_colors::OwoColorize as _;
use serde::Serialize;

use crate::manifest::Manifest;
use crate::output::OutputContext;
use crate::provision;

/// Machine-readable summary emitted in `--json` mode.
#[derive(Debug, Serialize)]
pub struct SetupSummary {
    /// Always `"complete"` — the fatal preflight exits before any summary.
    pub status: &'static str,
    /// Agents whose existing auth handler was verified.
    pub verified: Vec<&'static str>,
    /// Agents newly configured in this run.
    pub configured: Vec<&'static str>,
    /// Sum of both lists.
    pub total: usize,
}

/// Run the full pipeline.
///
/// # Errors
///
/// Returns an error only when the preflight fails (missing auth template) —
/// that halts the run before any repository processing. Per-repository
/// failures only degrade the summary counts.
pub fn run(ctx: &OutputContext, manifest: &Manifest, json: bool) -> Result<()> {
    ctx.header("Open Agent Platform - Agent Setup");

    provision::preflight(ctx, manifest)?;

    let verified = provision::verify_existing(ctx, manifest);
    let configured = provision::setup_new(ctx, manifest);

    if json {
        let summary = SetupSummary {
            status: "complete",
            total: verified.len() + configured.len(),
            verified,
            configured,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("JSON serialization")?
        );
        return Ok(());
    }

    print_summary(ctx, &verified, &configured);
    Ok(())
}

/// Counts plus the fixed follow-up instructions. Pure presentation.
fn print_summary(ctx: &OutputContext, verified: &[&str], configured: &[&str]) {
    ctx.header("Setup complete");
    ctx.line(&format!(
        "- {} agents verified with existing auth",
        verified.len()
    ));
    ctx.line(&format!(
        "- {} agents configured with new auth",
        configured.len()
    ));
    ctx.line(&format!(
        "- Total agents ready: {}",
        verified.len() + configured.len()
    ));

    if ctx.quiet {
        return;
    }

    println!();
    println!("  {}", "Next steps:".style(ctx.styles.bold));
    println!();
    println!("  1. Configure Supabase in each agent's .env file:");
    println!();
    println!("       SUPABASE_URL=\"https://gctunhsuwpaxeatwlmuv.supabase.co\"");
    println!("       SUPABASE_KEY=\"<your-service-role-key>\"");
    println!();
    println!("  2. Add other required API keys to each .env:");
    println!("       - OPENAI_API_KEY, ANTHROPIC_API_KEY, or OLLAMA_API_KEY");
    println!("       - TAVILY_API_KEY (for search agents)");
    println!("       - GEMINI_API_KEY (for multi-modal researcher)");
    println!();
    println!("  3. Start all agents:");
    println!();
    println!("       python launch_all_agents.py");
    println!();
    println!("  4. Access Open Agent Platform:");
    println!();
    println!("       http://localhost:3003");
    println!();
    println!("  For detailed information, see:");
    println!("  - LANGGRAPH_AGENTS_REGISTRY.md");
    println!("  - QUICK_START_GUIDE.md");
    println!();
}
