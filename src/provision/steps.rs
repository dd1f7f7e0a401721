//! The three per-repository mutation steps.
//!
//! Each step is independent. A failure is returned to the caller, reported
//! with the repository name, and never aborts the run. Partial mutation
//! (handler copied but config patch failed) is left in place and the
//! repository is reported as incomplete — there is no rollback.

use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::manifest::{AgentTarget, SUPABASE_ENV_TEMPLATE, SUPABASE_MARKER};

/// Package marker file created alongside the copied handler.
const PACKAGE_MARKER: &str = "__init__.py";

/// Build the auth reference written into the config document.
///
/// Backslashes are normalized to forward slashes so the reference is stable
/// across platforms; the trailing `:auth` names the callback symbol inside
/// the module.
#[must_use]
pub fn auth_reference(auth_dest: &str) -> String {
    format!("./{}:auth", auth_dest.replace('\\', "/"))
}

/// Copy the auth handler template into the repository.
///
/// Creates intermediate directories as needed, creates an empty package
/// marker next to the destination if absent, then copies the template bytes
/// verbatim, overwriting any existing file. Returns the marker path when one
/// was created, so the caller can report it.
///
/// # Errors
///
/// Returns an error if directory creation, the marker write, or the copy
/// fails (missing template, permissions, I/O).
pub fn copy_auth_handler(
    template: &Path,
    repo: &Path,
    target: &AgentTarget,
) -> Result<Option<PathBuf>> {
    let dest = repo.join(target.auth_dest);
    let parent = dest
        .parent()
        .ok_or_else(|| anyhow::anyhow!("auth destination has no parent directory"))?;
    std::fs::create_dir_all(parent)
        .with_context(|| format!("creating directory {}", parent.display()))?;

    let marker = parent.join(PACKAGE_MARKER);
    let created = if marker.exists() {
        None
    } else {
        std::fs::write(&marker, b"")
            .with_context(|| format!("creating package marker {}", marker.display()))?;
        Some(marker)
    };

    std::fs::copy(template, &dest)
        .with_context(|| format!("copying {} to {}", template.display(), dest.display()))?;
    Ok(created)
}

/// Patch the repository's config document with the auth reference.
///
/// The document is parsed as JSON, the top-level `auth` key is set or
/// overwritten to `{"path": "./<dest>:auth"}`, and the whole document is
/// rewritten with 2-space indentation. All other keys pass through
/// unchanged.
///
/// # Errors
///
/// Returns an error if the file is missing, not valid JSON, not a top-level
/// object, or cannot be written back.
pub fn patch_config(repo: &Path, target: &AgentTarget) -> Result<()> {
    let path = repo.join(target.config_file);
    let content =
        std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
    let mut config: serde_json::Value =
        serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
    let map = config
        .as_object_mut()
        .ok_or_else(|| anyhow::anyhow!("{} is not a JSON object", path.display()))?;
    map.insert(
        "auth".to_string(),
        serde_json::json!({ "path": auth_reference(target.auth_dest) }),
    );
    let out = serde_json::to_string_pretty(&config)
        .with_context(|| format!("serializing {}", path.display()))?;
    std::fs::write(&path, out).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Outcome of the env-template append step.
#[derive(Debug)]
pub enum EnvOutcome {
    /// Template appended to the named file (created if absent).
    Appended(String),
    /// Marker already present in the named file; nothing written.
    AlreadyPresent(String),
}

/// Append the Supabase env block to the repository's env file.
///
/// Checks both `.env` and `.env.example` for the `SUPABASE_URL` marker
/// first; if either contains it the step is a no-op. Otherwise the block is
/// appended to `.env.example` when that file exists, else to `.env`
/// (creating it).
///
/// # Errors
///
/// Returns an error if an existing env file cannot be read or the target
/// cannot be opened or written.
pub fn append_supabase_env(repo: &Path) -> Result<EnvOutcome> {
    let env_file = repo.join(".env");
    let env_example = repo.join(".env.example");

    for file in [&env_file, &env_example] {
        if file.exists() {
            let content = std::fs::read_to_string(file)
                .with_context(|| format!("reading {}", file.display()))?;
            if content.contains(SUPABASE_MARKER) {
                return Ok(EnvOutcome::AlreadyPresent(file_name(file)));
            }
        }
    }

    let dest = if env_example.exists() {
        env_example
    } else {
        env_file
    };
    let mut f = std::fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(&dest)
        .with_context(|| format!("opening {}", dest.display()))?;
    f.write_all(SUPABASE_ENV_TEMPLATE.as_bytes())
        .with_context(|| format!("writing {}", dest.display()))?;
    Ok(EnvOutcome::Appended(file_name(&dest)))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
