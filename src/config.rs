//! Runtime configuration for the scanning binaries.

use crate::error::ScanError;
use crate::labels::DEFAULT_TRACK_LETTERS;
use crate::sampler::SamplerParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Destinations of the three output streams plus optional debug artifacts.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Verbatim extracted document text.
    pub text_out: PathBuf,
    /// One line per class: six dot-separated lesson counts.
    pub counts_out: PathBuf,
    /// One line per class: six dot-separated start-time tokens.
    pub starts_out: PathBuf,
    /// When set, every sampled cell crop is dumped under this directory.
    pub debug_dir: Option<PathBuf>,
    /// When set, the full batch report is written here as JSON.
    pub json_report: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            text_out: PathBuf::from("timetable_text.txt"),
            counts_out: PathBuf::from("lesson_counts.txt"),
            starts_out: PathBuf::from("start_times.txt"),
            debug_dir: None,
            json_report: None,
        }
    }
}

/// Top-level configuration of one scan run.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Directory of rasterized pages, one image per class; file names must
    /// sort into document order.
    pub pages_dir: Option<PathBuf>,
    /// Full document text produced by the external extraction step.
    pub text_path: Option<PathBuf>,
    /// Source PDF; replaces `pages_dir`/`text_path` when the crate is built
    /// with the `pdf` feature.
    pub pdf_path: Option<PathBuf>,
    /// Rasterization resolution for `pdf_path`.
    pub render_dpi: f32,
    pub output: OutputConfig,
    pub sampler: SamplerParams,
    /// Track letters of the class-label pattern.
    pub track_letters: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            pages_dir: None,
            text_path: None,
            pdf_path: None,
            render_dpi: 100.0,
            output: OutputConfig::default(),
            sampler: SamplerParams::default(),
            track_letters: DEFAULT_TRACK_LETTERS.to_string(),
        }
    }
}

/// Load a [`RuntimeConfig`] from a JSON file.
pub fn load_config(path: &Path) -> Result<RuntimeConfig, ScanError> {
    let contents = fs::read_to_string(path).map_err(|source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: RuntimeConfig =
        serde_json::from_str(&contents).map_err(|source| ScanError::Config {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(config)
}
