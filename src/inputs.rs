//! Action input resolution
//!
//! The CI runner surfaces action inputs as `INPUT_<NAME>` environment
//! variables. Inputs are read exactly once at process entry and passed by
//! value into the pipeline stages; nothing downstream performs ambient
//! environment lookups.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::StatsDiffError;

/// Required input: path to the base build's stats manifest.
pub const BASE_PATH: &str = "base_path";
/// Required input: path to the PR build's stats manifest.
pub const PR_PATH: &str = "pr_path";
/// Optional input: regex source for assets to exclude from both sides.
pub const EXCLUDED_ASSETS: &str = "excluded_assets";

/// Configuration values read from the action environment
#[derive(Debug, Clone)]
pub struct ActionInputs {
    /// Base manifest path as supplied (resolved later against the cwd)
    pub base_path: String,
    /// PR manifest path as supplied
    pub pr_path: String,
    /// Exclusion pattern source; empty input is treated as absent
    pub excluded_assets: Option<String>,
}

impl ActionInputs {
    /// Read inputs from the process environment.
    pub fn from_env() -> Result<Self, StatsDiffError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read inputs through an injected lookup.
    ///
    /// Unit tests use this to avoid mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, StatsDiffError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_path = required_input(&lookup, BASE_PATH)?;
        let pr_path = required_input(&lookup, PR_PATH)?;
        let excluded_assets = optional_input(&lookup, EXCLUDED_ASSETS);

        Ok(Self {
            base_path,
            pr_path,
            excluded_assets,
        })
    }

    /// Resolve both manifest paths against the given working directory.
    ///
    /// Absolute inputs pass through unchanged; relative inputs are joined
    /// onto `cwd`.
    pub fn resolve_paths(&self, cwd: &Path) -> (PathBuf, PathBuf) {
        (cwd.join(&self.base_path), cwd.join(&self.pr_path))
    }
}

/// Environment variable name for an action input
fn env_key(name: &str) -> String {
    format!("INPUT_{}", name.to_uppercase())
}

fn required_input<F>(lookup: &F, name: &str) -> Result<String, StatsDiffError>
where
    F: Fn(&str) -> Option<String>,
{
    match optional_input(lookup, name) {
        Some(value) => Ok(value),
        None => Err(StatsDiffError::MissingInput {
            name: name.to_string(),
        }),
    }
}

fn optional_input<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(&env_key(name))
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
