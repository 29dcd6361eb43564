//! Runtime configuration for the CLI tools.
//!
//! A JSON file names the input image, optional detector parameter overrides,
//! and the artifacts to write. Every detector field falls back to its
//! default, so a minimal config is just `{"input": "capture.png"}`.
use crate::detector::DetectorParams;
use crate::error::DetectError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Artifact paths; anything left unset is not written.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub json_out: Option<PathBuf>,
    pub csv_out: Option<PathBuf>,
    pub txt_out: Option<PathBuf>,
    /// RGB copy of the input with bounding boxes, centroids, orientation rays.
    pub annotated_out: Option<PathBuf>,
    /// Label map rendered to grayscale.
    pub label_map_out: Option<PathBuf>,
    /// Cleaned binary mask.
    pub mask_out: Option<PathBuf>,
}

/// Full runtime configuration for one detection run.
#[derive(Clone, Debug, Deserialize)]
pub struct RuntimeConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub detector: DetectorParams,
    #[serde(default)]
    pub output: OutputConfig,
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, DetectError> {
    let contents = fs::read_to_string(path).map_err(|source| DetectError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| DetectError::Json {
        path: path.to_path_buf(),
        source,
    })
}
