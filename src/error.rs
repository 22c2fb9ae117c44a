//! Error type shared across the scanning pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by configuration loading, page io and the batch scan.
///
/// Cell sampling itself never fails (any pixel buffer yields some ink
/// density); heuristic contradictions are reported per class through
/// [`crate::diagnostics::ClassOutcome`] rather than aborting the batch.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to decode image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("failed to encode image {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("failed to parse config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to serialize {}: {source}", .path.display())]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid track letters {letters:?}: {source}")]
    LabelPattern {
        letters: String,
        source: regex::Error,
    },

    /// Label/page mismatch. Misattributing a schedule to the wrong class is
    /// worse than stopping, so the pairing is never guessed or shifted.
    #[error("recovered {labels} class labels for {pages} rasterized pages; refusing to guess the pairing")]
    LabelAlignment { labels: usize, pages: usize },

    #[error("failed to write {stream} stream: {source}")]
    Stream {
        stream: &'static str,
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("grayscale buffer of {len} bytes does not match {width}x{height}")]
    BufferShape {
        len: usize,
        width: usize,
        height: usize,
    },

    #[cfg(feature = "pdf")]
    #[error("failed to process {}: {source}", .path.display())]
    Pdf {
        path: PathBuf,
        source: pdfium_render::prelude::PdfiumError,
    },
}
