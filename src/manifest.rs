//! Compiled-in agent lists, template text, and base-path resolution.
//!
//! Everything the run needs is fixed at process start: the repository lists,
//! the auth template location, and the env block text. The only knob is the
//! base repositories directory, overridable via `OAP_REPOS_DIR`.

use std::path::{Path, PathBuf};

use anyhow::Result;

/// Env var overriding the base repositories directory.
pub const REPOS_DIR_ENV: &str = "OAP_REPOS_DIR";

/// Canonical auth handler template, relative to the base directory.
pub const AUTH_TEMPLATE_REL: &str = "oap-langgraph-tools-agent/tools_agent/security/auth.py";

/// Substring checked in env files to guard against duplicate appends.
pub const SUPABASE_MARKER: &str = "SUPABASE_URL";

/// Supabase configuration block appended to agent env files.
pub const SUPABASE_ENV_TEMPLATE: &str = "\n\
# Supabase Authentication (required for OAP integration)\n\
SUPABASE_URL=\"https://gctunhsuwpaxeatwlmuv.supabase.co\"\n\
SUPABASE_KEY=\"your-supabase-service-role-key-here\"\n";

/// An agent repository that still needs the auth handler wired in.
#[derive(Debug, Clone, Copy)]
pub struct AgentTarget {
    /// Repository directory name under the base directory.
    pub name: &'static str,
    /// Destination of the auth handler, relative to the repository root.
    pub auth_dest: &'static str,
    /// Declarative config file that receives the auth reference.
    pub config_file: &'static str,
}

/// An agent repository expected to already carry an auth handler.
#[derive(Debug, Clone, Copy)]
pub struct VerifiedAgent {
    /// Repository directory name under the base directory.
    pub name: &'static str,
    /// Expected auth handler location, relative to the repository root.
    pub auth_path: &'static str,
}

/// Agents that need auth added.
pub const AGENTS_NEEDING_AUTH: &[AgentTarget] = &[
    AgentTarget {
        name: "multi-modal-researcher",
        auth_dest: "security/auth.py",
        config_file: "langgraph.json",
    },
    AgentTarget {
        name: "langgraph-app-example",
        auth_dest: "src/security/auth.py",
        config_file: "langgraph.json",
    },
];

/// Agents whose existing auth handler is only verified, never mutated.
pub const AGENTS_WITH_AUTH: &[VerifiedAgent] = &[
    VerifiedAgent {
        name: "oap-langgraph-tools-agent",
        auth_path: "tools_agent/security/auth.py",
    },
    VerifiedAgent {
        name: "oap-agent-supervisor",
        auth_path: "oap_supervisor/security/auth.py",
    },
    VerifiedAgent {
        name: "open_deep_research",
        auth_path: "src/security/auth.py",
    },
];

/// Fixed paths resolved against the base repositories directory.
pub struct Manifest {
    repos_dir: PathBuf,
}

impl Manifest {
    /// Resolve the base directory from `OAP_REPOS_DIR`, falling back to
    /// `~/oap/repos`.
    ///
    /// # Errors
    ///
    /// Returns an error if neither the env var nor the home directory is
    /// available.
    pub fn from_env() -> Result<Self> {
        let override_dir = std::env::var_os(REPOS_DIR_ENV).filter(|v| !v.is_empty());
        Self::resolve(override_dir.map(PathBuf::from))
    }

    /// Resolve the base directory from an optional override.
    ///
    /// # Errors
    ///
    /// Returns an error if no override is given and the home directory cannot
    /// be determined.
    pub fn resolve(override_dir: Option<PathBuf>) -> Result<Self> {
        match override_dir {
            Some(dir) => Ok(Self::with_repos_dir(dir)),
            None => {
                let home = dirs::home_dir()
                    .ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
                Ok(Self::with_repos_dir(home.join("oap").join("repos")))
            }
        }
    }

    /// Construct a manifest rooted at an explicit directory.
    #[must_use]
    pub fn with_repos_dir(repos_dir: PathBuf) -> Self {
        Self { repos_dir }
    }

    /// The base directory containing one subdirectory per agent repository.
    #[must_use]
    pub fn repos_dir(&self) -> &Path {
        &self.repos_dir
    }

    /// Absolute path of the canonical auth handler template.
    #[must_use]
    pub fn auth_template(&self) -> PathBuf {
        self.repos_dir.join(AUTH_TEMPLATE_REL)
    }

    /// Absolute path of a named agent repository.
    #[must_use]
    pub fn repo_path(&self, name: &str) -> PathBuf {
        self.repos_dir.join(name)
    }
}
