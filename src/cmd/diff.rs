//! Diff command implementation
//!
//! Handles the `bundle-stats-diff diff` command: a local comparison of two
//! stats manifests with a console summary, for developers iterating on
//! bundle size outside CI.

use anyhow::Result;
use console::style;
use std::env;

use crate::diff::{diff_assets, StatsDiff};
use crate::error::StatsDiffError;
use crate::fmt::{format_bytes, format_signed_bytes, CHART};
use crate::manifest::{filter_assets, load_manifest, ExcludeFilter, Side};
use crate::report::render_report;

/// Compare two stats manifests and print the size report
///
/// # Errors
///
/// Returns an error if:
/// - Either manifest cannot be read or parsed
/// - Either manifest lacks a usable `assets` list
/// - The exclusion pattern is not a valid regex
pub fn cmd_diff(base: &str, pr: &str, exclude: Option<&str>, json_output: bool) -> Result<()> {
    let cwd = env::current_dir()?;
    let base_path = cwd.join(base);
    let pr_path = cwd.join(pr);

    let filter = ExcludeFilter::from_input(exclude)?;
    let base_assets = filter_assets(load_manifest(&base_path, Side::Base)?, filter.as_ref());
    let pr_assets = filter_assets(load_manifest(&pr_path, Side::Pr)?, filter.as_ref());

    let stats = diff_assets(&base_assets, &pr_assets);
    if stats.total.is_none() {
        return Err(StatsDiffError::StatsConversion.into());
    }

    // JSON output for scripting
    if json_output {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    let message = render_report(&stats)?;

    println!(
        "{} {} Bundle Comparison",
        CHART,
        style("bundle-stats-diff").bold()
    );
    println!();
    present_summary(&stats);
    println!();
    println!("{}", message);

    Ok(())
}

/// Present per-category counts and the aggregate delta
fn present_summary(stats: &StatsDiff) {
    println!(
        "   {} added, {} removed, {} bigger, {} smaller, {} unchanged",
        stats.added.len(),
        stats.removed.len(),
        stats.bigger.len(),
        stats.smaller.len(),
        stats.same_size.len()
    );

    if let Some(total) = &stats.total {
        let delta = format_signed_bytes(total.diff);
        let delta = if total.diff > 0 {
            style(delta).red()
        } else if total.diff < 0 {
            style(delta).green()
        } else {
            style(delta).dim()
        };

        if total.old_size > 0 {
            let percent = total.diff as f64 / total.old_size as f64 * 100.0;
            println!(
                "   Total: {} -> {} ({}, {:+.1}%)",
                format_bytes(total.old_size),
                format_bytes(total.new_size),
                delta,
                percent
            );
        } else {
            println!(
                "   Total: {} -> {} ({})",
                format_bytes(total.old_size),
                format_bytes(total.new_size),
                delta
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_stats(dir: &TempDir, name: &str, contents: &str) -> String {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_diff_with_missing_base_manifest_fails() {
        let temp = TempDir::new().unwrap();
        let pr = write_stats(
            &temp,
            "pr.json",
            r#"{"assets": [{"name": "a.js", "size": 1}]}"#,
        );
        let missing = temp.path().join("missing.json");

        let result = cmd_diff(missing.to_str().unwrap(), &pr, None, false);

        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Base manifest"));
    }

    #[test]
    fn test_diff_with_invalid_pr_manifest_names_pr_side() {
        let temp = TempDir::new().unwrap();
        let base = write_stats(
            &temp,
            "base.json",
            r#"{"assets": [{"name": "a.js", "size": 1}]}"#,
        );
        let pr = write_stats(&temp, "pr.json", "{}");

        let result = cmd_diff(&base, &pr, None, false);

        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.starts_with("PR path is not correct."));
        assert!(err_msg.contains("pr.json"));
    }

    #[test]
    fn test_diff_with_bad_exclusion_pattern_fails_before_loading() {
        let temp = TempDir::new().unwrap();
        let base = write_stats(
            &temp,
            "base.json",
            r#"{"assets": [{"name": "a.js", "size": 1}]}"#,
        );

        let result = cmd_diff(&base, &base, Some("[unclosed"), false);

        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StatsDiffError>(),
            Some(StatsDiffError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_diff_with_everything_excluded_is_a_stats_conversion_error() {
        let temp = TempDir::new().unwrap();
        let base = write_stats(
            &temp,
            "base.json",
            r#"{"assets": [{"name": "a.js", "size": 1}]}"#,
        );
        let pr = write_stats(
            &temp,
            "pr.json",
            r#"{"assets": [{"name": "b.js", "size": 2}]}"#,
        );

        let result = cmd_diff(&base, &pr, Some(r"\.js$"), false);

        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StatsDiffError>(),
            Some(StatsDiffError::StatsConversion)
        ));
    }

    #[test]
    fn test_diff_succeeds_on_valid_manifests() {
        let temp = TempDir::new().unwrap();
        let base = write_stats(
            &temp,
            "base.json",
            r#"{"assets": [{"name": "a.js", "size": 1000}]}"#,
        );
        let pr = write_stats(
            &temp,
            "pr.json",
            r#"{"assets": [{"name": "a.js", "size": 1200}]}"#,
        );

        assert!(cmd_diff(&base, &pr, None, false).is_ok());
        assert!(cmd_diff(&base, &pr, None, true).is_ok());
    }
}
