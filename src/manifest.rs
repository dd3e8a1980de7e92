//! Typed manifest loading and asset filtering
//!
//! Parses webpack build-stats manifests into typed asset lists and applies
//! the optional exclusion pattern. Loading validates the `assets` field up
//! front so downstream stages never see a half-usable manifest.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::StatsDiffError;
use crate::infra::{FileSystem, RealFileSystem};

/// Which build a manifest belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The "before" build the PR is compared against
    Base,
    /// The "after" build produced by the PR
    Pr,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Base => write!(f, "Base"),
            Side::Pr => write!(f, "PR"),
        }
    }
}

/// One named build output artifact with a byte size
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// File path/name, unique within one manifest's asset list
    pub name: String,
    /// Size in bytes
    pub size: u64,
}

/// Webpack stats shape: only `assets` matters, everything else is ignored.
#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    assets: Option<Vec<Asset>>,
}

/// Load a manifest and extract its asset list.
///
/// Fails with a configuration error naming the side and resolved path when
/// the `assets` field is absent, null, or empty. Read and parse failures
/// propagate with their source error attached.
pub fn load_manifest(path: &Path, side: Side) -> Result<Vec<Asset>, StatsDiffError> {
    load_manifest_with_fs(path, side, &RealFileSystem)
}

/// Load a manifest with a custom filesystem implementation
pub fn load_manifest_with_fs<FS: FileSystem>(
    path: &Path,
    side: Side,
    fs: &FS,
) -> Result<Vec<Asset>, StatsDiffError> {
    let contents = fs
        .read_to_string(path)
        .map_err(|source| StatsDiffError::ManifestRead {
            side,
            path: path.to_path_buf(),
            source,
        })?;

    let manifest: Manifest =
        serde_json::from_str(&contents).map_err(|source| StatsDiffError::ManifestParse {
            side,
            path: path.to_path_buf(),
            source,
        })?;

    match manifest.assets {
        Some(assets) if !assets.is_empty() => Ok(assets),
        _ => Err(StatsDiffError::InvalidManifest {
            side,
            path: path.to_path_buf(),
        }),
    }
}

/// Compiled exclusion pattern for dropping assets by name
#[derive(Debug, Clone)]
pub struct ExcludeFilter {
    regex: Regex,
}

impl ExcludeFilter {
    /// Compile a user-supplied regex source into a filter.
    ///
    /// Compilation failure is a typed error so callers can distinguish
    /// "bad pattern" from "no match".
    pub fn new(pattern: &str) -> Result<Self, StatsDiffError> {
        let regex = Regex::new(pattern).map_err(|source| StatsDiffError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { regex })
    }

    /// Compile an optional pattern; `None` stays `None`.
    pub fn from_input(pattern: Option<&str>) -> Result<Option<Self>, StatsDiffError> {
        pattern.map(Self::new).transpose()
    }

    /// Whether an asset name matches the exclusion pattern
    pub fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

/// Remove every asset whose name matches the filter.
///
/// Identity when no filter is supplied. Applied to each side independently.
pub fn filter_assets(assets: Vec<Asset>, filter: Option<&ExcludeFilter>) -> Vec<Asset> {
    match filter {
        Some(filter) => assets
            .into_iter()
            .filter(|asset| !filter.is_match(&asset.name))
            .collect(),
        None => assets,
    }
}
