//! GitHub Actions output publication
//!
//! Named outputs are appended to the file `GITHUB_OUTPUT` points at, using
//! heredoc blocks so multiline values (the markdown table) survive intact.
//! When the variable is unset the legacy `::set-output` workflow command is
//! written to stdout instead, with the escaping that command requires.

use std::path::PathBuf;
use uuid::Uuid;

use crate::error::StatsDiffError;
use crate::infra::{FileSystem, RealFileSystem};

/// Publishes key/value outputs to the CI runner
pub struct ActionOutputs {
    output_file: Option<PathBuf>,
}

impl ActionOutputs {
    /// Build from the process environment (`GITHUB_OUTPUT`).
    pub fn from_env() -> Self {
        let output_file = std::env::var_os("GITHUB_OUTPUT")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self { output_file }
    }

    /// Build with an explicit output file (or none, forcing the legacy
    /// workflow-command fallback).
    pub fn new(output_file: Option<PathBuf>) -> Self {
        Self { output_file }
    }

    /// Publish one named output value.
    pub fn set(&self, name: &str, value: &str) -> Result<(), StatsDiffError> {
        self.set_with_fs(name, value, &RealFileSystem)
    }

    /// Publish with a custom filesystem implementation
    pub fn set_with_fs<FS: FileSystem>(
        &self,
        name: &str,
        value: &str,
        fs: &FS,
    ) -> Result<(), StatsDiffError> {
        match &self.output_file {
            Some(path) => {
                let block = heredoc_block(name, value);
                fs.append(path, block)
                    .map_err(|source| StatsDiffError::OutputWrite {
                        name: name.to_string(),
                        source,
                    })?;
                log::debug!("published output '{}' to {}", name, path.display());
                Ok(())
            }
            None => {
                // Legacy runners parse workflow commands from stdout
                println!(
                    "::set-output name={}::{}",
                    escape_property(name),
                    escape_data(value)
                );
                Ok(())
            }
        }
    }

    /// Mark the run as failed with the given reason.
    ///
    /// Emits the `::error::` workflow command; the caller is responsible
    /// for exiting non-zero afterwards.
    pub fn mark_failed(&self, message: &str) {
        println!("::error::{}", escape_data(message));
    }
}

/// Render a `GITHUB_OUTPUT` heredoc block for one output.
///
/// The delimiter embeds a fresh UUID; regenerated in the (practically
/// impossible) case the value already contains it.
fn heredoc_block(name: &str, value: &str) -> String {
    let mut delimiter = format!("ghadelimiter_{}", Uuid::new_v4());
    while name.contains(&delimiter) || value.contains(&delimiter) {
        delimiter = format!("ghadelimiter_{}", Uuid::new_v4());
    }
    format!("{}<<{}\n{}\n{}\n", name, delimiter, value, delimiter)
}

/// Escape an output value for the `::set-output` command
fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape an output name for the `::set-output` command
fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}
