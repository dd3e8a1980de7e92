//! Typed error taxonomy for the stats-diff pipeline
//!
//! Every failure here is fatal and non-retryable: the run terminates at the
//! first error, and the top-level wrapper is the single catch point that
//! publishes the failure outputs. Errors carry:
//! - Actionable messages identifying the misconfigured side or input
//! - Suggested fixes where one exists
//! - Proper exit codes for CI/CD

use std::path::PathBuf;
use thiserror::Error;

use crate::manifest::Side;

/// Errors raised by the stats-diff pipeline
#[derive(Error, Debug)]
pub enum StatsDiffError {
    /// A required action input was not supplied
    #[error("Required input not supplied: {name}")]
    MissingInput {
        /// Input name as declared by the action contract
        name: String,
    },

    /// A manifest file could not be read
    #[error("Failed to read {side} manifest: {path}")]
    ManifestRead {
        /// Which build the manifest belongs to
        side: Side,
        /// Resolved manifest path
        path: PathBuf,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// A manifest file is not valid JSON
    #[error("Failed to parse {side} manifest: {path}")]
    ManifestParse {
        /// Which build the manifest belongs to
        side: Side,
        /// Resolved manifest path
        path: PathBuf,
        #[source]
        /// JSON error source
        source: serde_json::Error,
    },

    /// A manifest parsed but exposes no usable asset list
    #[error("{side} path is not correct. Current input: {path}")]
    InvalidManifest {
        /// Which build the manifest belongs to
        side: Side,
        /// Resolved manifest path
        path: PathBuf,
    },

    /// The exclusion pattern is not a valid regular expression
    #[error("Invalid exclusion pattern: '{pattern}'")]
    InvalidPattern {
        /// Pattern source as supplied
        pattern: String,
        #[source]
        /// Regex compiler error
        source: regex::Error,
    },

    /// The diff computation produced no usable result
    #[error("Something went wrong with stats conversion, probably files are corrupted.")]
    StatsConversion,

    /// Publishing a CI output failed
    #[error("Failed to publish output '{name}'")]
    OutputWrite {
        /// Output name being published
        name: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },
}

impl StatsDiffError {
    /// Get actionable suggestion for resolving this error, if one exists.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::MissingInput { name } => Some(format!(
                "Set the '{}' input in the workflow step (exposed as INPUT_{})",
                name,
                name.to_uppercase()
            )),
            Self::ManifestRead { path, .. } => Some(format!(
                "Ensure the stats file exists at {} and the build step ran before this action",
                path.display()
            )),
            Self::ManifestParse { .. } => Some(
                "Generate the manifest with 'webpack --json > stats.json' so it is valid JSON"
                    .to_string(),
            ),
            Self::InvalidManifest { side, .. } => Some(format!(
                "The {} manifest must contain a non-empty top-level 'assets' array",
                side
            )),
            Self::InvalidPattern { .. } => {
                Some("Check the 'excluded_assets' input for regex syntax errors".to_string())
            }
            Self::StatsConversion => {
                Some("Regenerate both stats files; at least one is empty or corrupted".to_string())
            }
            Self::OutputWrite { .. } => {
                Some("Check that GITHUB_OUTPUT points to a writable file".to_string())
            }
        }
    }

    /// Get appropriate exit code for this error.
    ///
    /// Returns Unix-style exit codes based on the error type, following
    /// sysexits.h conventions.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingInput { .. } => 64,    // EX_USAGE
            Self::ManifestRead { .. } => 66,    // EX_NOINPUT
            Self::ManifestParse { .. } => 65,   // EX_DATAERR
            Self::InvalidManifest { .. } => 65, // EX_DATAERR
            Self::InvalidPattern { .. } => 64,  // EX_USAGE
            Self::StatsConversion => 65,        // EX_DATAERR
            Self::OutputWrite { .. } => 74,     // EX_IOERR
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with suggestions
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        // Main error message
        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        // Error chain (caused by)
        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        if let Some(sd_error) = error.downcast_ref::<StatsDiffError>() {
            if let Some(suggestion) = sd_error.suggestion() {
                output.push_str(&format!(
                    "\n{} {}\n",
                    style("help:").cyan().bold(),
                    suggestion
                ));
            }
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        if let Some(sd_error) = error.downcast_ref::<StatsDiffError>() {
            sd_error.exit_code()
        } else {
            1 // Generic error
        }
    }
}
