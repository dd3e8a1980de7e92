#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! bundle-stats-diff library
//!
//! This library provides the core functionality for comparing two webpack
//! build-stats manifests and publishing a per-asset size report to a CI
//! runner. It can be used programmatically in addition to the CLI interface.
//!
//! # Basic Example
//!
//! Diffing two asset lists and rendering the markdown report:
//!
//! ```
//! use bundle_stats_diff::diff::diff_assets;
//! use bundle_stats_diff::manifest::Asset;
//! use bundle_stats_diff::report::render_report;
//!
//! let base = vec![Asset { name: "main.js".to_string(), size: 1000 }];
//! let pr = vec![
//!     Asset { name: "main.js".to_string(), size: 1200 },
//!     Asset { name: "runtime.js".to_string(), size: 300 },
//! ];
//!
//! let stats = diff_assets(&base, &pr);
//! assert_eq!(stats.bigger.len(), 1);
//! assert_eq!(stats.added.len(), 1);
//!
//! let report = render_report(&stats).unwrap();
//! assert!(report.contains("| main.js | 1.17 KB | 1000 B | 200 B |"));
//! ```
//!
//! # Advanced Example: Exclusion Patterns
//!
//! Dropping source maps before the diff:
//!
//! ```
//! use bundle_stats_diff::manifest::{filter_assets, Asset, ExcludeFilter};
//!
//! let assets = vec![
//!     Asset { name: "main.js".to_string(), size: 1000 },
//!     Asset { name: "main.js.map".to_string(), size: 4000 },
//! ];
//!
//! let filter = ExcludeFilter::new(r"\.map$").unwrap();
//! let kept = filter_assets(assets, Some(&filter));
//! assert_eq!(kept.len(), 1);
//! assert_eq!(kept[0].name, "main.js");
//! ```

/// CI/CD output publication
pub mod cicd;
/// Command handlers for CLI operations
pub mod cmd;
/// Categorized size diff between two builds
pub mod diff;
/// Typed error taxonomy with suggestions and exit codes
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Infrastructure traits for filesystem access
pub mod infra;
/// Action input resolution
pub mod inputs;
/// Manifest loading and asset filtering
pub mod manifest;
/// Markdown report generation
pub mod report;
