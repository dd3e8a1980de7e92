//! Test fixture helpers for creating stats manifests
//!
//! Provides utilities for writing realistic webpack stats files and for
//! parsing the GITHUB_OUTPUT file format back into key/value pairs.

#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write a stats manifest with the given (name, size) assets.
///
/// The manifest carries the extra top-level fields a real webpack stats
/// dump has, so tests exercise the "unknown fields ignored" path.
pub fn write_manifest(dir: &TempDir, file_name: &str, assets: &[(&str, u64)]) -> PathBuf {
    let assets: Vec<serde_json::Value> = assets
        .iter()
        .map(|(name, size)| {
            serde_json::json!({
                "name": name,
                "size": size,
                "chunks": [0],
                "emitted": true
            })
        })
        .collect();

    let manifest = serde_json::json!({
        "hash": "f1e2d3c4b5a6",
        "version": "5.90.0",
        "time": 1234,
        "assets": assets
    });

    write_raw(dir, file_name, &manifest.to_string())
}

/// Write arbitrary manifest contents (for malformed-input tests).
pub fn write_raw(dir: &TempDir, file_name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(file_name);
    fs::write(&path, contents).expect("failed to write fixture manifest");
    path
}

/// Parse a GITHUB_OUTPUT file into name -> value pairs.
///
/// Understands the heredoc block format the action writes:
/// `name<<delimiter ... delimiter`.
pub fn parse_outputs(contents: &str) -> HashMap<String, String> {
    let mut outputs = HashMap::new();
    let mut lines = contents.lines();

    while let Some(line) = lines.next() {
        if let Some((name, delimiter)) = line.split_once("<<") {
            let mut value_lines = Vec::new();
            for value_line in lines.by_ref() {
                if value_line == delimiter {
                    break;
                }
                value_lines.push(value_line);
            }
            outputs.insert(name.to_string(), value_lines.join("\n"));
        }
    }

    outputs
}
