//! Pass orchestration: preflight, verification, provisioning.
//!
//! The two passes run strictly in order and accumulate only the name lists
//! used by the summary. A repository that fails any check is skipped or
//! reported, never retried.

pub mod steps;

use std::path::Path;

use anyhow::Result;
use thiserror::Error;

use crate::manifest::{AGENTS_NEEDING_AUTH, AGENTS_WITH_AUTH, AgentTarget, Manifest};
use crate::output::OutputContext;
use self::steps::EnvOutcome;

/// Fatal precondition failures. Everything else is recoverable and only
/// degrades the summary counts.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error(
        "Auth template not found at {}.\nEnsure the oap-langgraph-tools-agent repository exists.",
        .0.display()
    )]
    TemplateMissing(std::path::PathBuf),
}

/// Verify the canonical auth template exists before any repository is
/// touched.
///
/// # Errors
///
/// Returns [`SetupError::TemplateMissing`] if the template is absent; this
/// is the single fatal error of the whole run.
pub fn preflight(ctx: &OutputContext, manifest: &Manifest) -> Result<()> {
    let template = manifest.auth_template();
    if !template.exists() {
        return Err(SetupError::TemplateMissing(template).into());
    }
    ctx.success("Auth template found");
    Ok(())
}

/// Check the repository directory exists, reporting either way. A missing
/// repository skips every subsequent step for it.
fn repository_exists(ctx: &OutputContext, name: &str, path: &Path) -> bool {
    if path.exists() {
        ctx.success(&format!("Found: {name}"));
        true
    } else {
        ctx.error(&format!("Repository not found: {name} at {}", path.display()));
        false
    }
}

/// Verification pass over agents presumed already configured.
///
/// No mutation occurs. A missing auth handler is a warning and excludes the
/// agent from the verified list; the run continues.
pub fn verify_existing(ctx: &OutputContext, manifest: &Manifest) -> Vec<&'static str> {
    ctx.header("Verifying agents with existing auth");
    let mut verified = Vec::new();

    for agent in AGENTS_WITH_AUTH {
        let repo = manifest.repo_path(agent.name);
        if !repository_exists(ctx, agent.name, &repo) {
            continue;
        }
        if repo.join(agent.auth_path).exists() {
            ctx.success(&format!("{} - auth handler verified", agent.name));
            verified.push(agent.name);
        } else {
            ctx.warn(&format!(
                "{} - auth handler missing at {}",
                agent.name, agent.auth_path
            ));
        }
    }

    verified
}

/// Provisioning pass over agents that need auth wired in.
///
/// All three steps are attempted for visibility even when an earlier one
/// fails; overall success is the conjunction. An incomplete repository may
/// be left partially modified — that is reported, not rolled back.
pub fn setup_new(ctx: &OutputContext, manifest: &Manifest) -> Vec<&'static str> {
    ctx.header("Setting up agents without auth");
    let template = manifest.auth_template();
    let mut complete = Vec::new();

    for target in AGENTS_NEEDING_AUTH {
        ctx.line(&format!("Setting up: {}", target.name));
        let repo = manifest.repo_path(target.name);
        if !repository_exists(ctx, target.name, &repo) {
            continue;
        }

        let copied = run_copy(ctx, &template, &repo, target);
        let patched = run_patch(ctx, &repo, target);
        let env_done = run_env(ctx, &repo, target);

        if copied && patched && env_done {
            ctx.success(&format!("{} setup complete", target.name));
            complete.push(target.name);
        } else {
            ctx.error(&format!("{} setup incomplete", target.name));
        }
    }

    complete
}

fn run_copy(ctx: &OutputContext, template: &Path, repo: &Path, target: &AgentTarget) -> bool {
    match steps::copy_auth_handler(template, repo, target) {
        Ok(marker) => {
            if let Some(marker) = marker
                && let Ok(rel) = marker.strip_prefix(repo)
            {
                ctx.success(&format!("Created {}", rel.display()));
            }
            ctx.success(&format!("Copied auth handler to {}", target.name));
            true
        }
        Err(e) => {
            ctx.error(&format!(
                "Failed to copy auth handler to {}: {e:#}",
                target.name
            ));
            false
        }
    }
}

fn run_patch(ctx: &OutputContext, repo: &Path, target: &AgentTarget) -> bool {
    match steps::patch_config(repo, target) {
        Ok(()) => {
            ctx.success(&format!(
                "Updated {}/{} with auth config",
                target.name, target.config_file
            ));
            true
        }
        Err(e) => {
            ctx.error(&format!(
                "Failed to update {} for {}: {e:#}",
                target.config_file, target.name
            ));
            false
        }
    }
}

fn run_env(ctx: &OutputContext, repo: &Path, target: &AgentTarget) -> bool {
    match steps::append_supabase_env(repo) {
        Ok(EnvOutcome::Appended(file)) => {
            ctx.success(&format!("Added Supabase config to {}/{file}", target.name));
            true
        }
        Ok(EnvOutcome::AlreadyPresent(file)) => {
            ctx.warn(&format!("Supabase config already exists in {file}"));
            true
        }
        Err(e) => {
            ctx.error(&format!(
                "Failed to add Supabase config to {}: {e:#}",
                target.name
            ));
            false
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
