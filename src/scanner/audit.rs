//! Debug persistence of sampled cell crops.

use crate::error::ScanError;
use crate::image::io::save_grayscale_u8;
use crate::image::GrayImageU8;
use crate::types::HourClass;
use log::warn;
use std::fs;
use std::path::PathBuf;

/// Dumps every sampled cell crop into `lesson/` and `empty/` buckets.
///
/// Purely for calibration audits. Dump failures are logged and swallowed;
/// they never influence classification or the batch outcome.
pub struct CellAudit {
    root: PathBuf,
}

impl CellAudit {
    /// Create the bucket directories under `root`, clearing previous dumps.
    pub fn create(root: impl Into<PathBuf>) -> Result<Self, ScanError> {
        let root = root.into();
        // stale dumps from an earlier calibration run would be misleading
        let _ = fs::remove_dir_all(&root);
        for bucket in ["lesson", "empty"] {
            let dir = root.join(bucket);
            fs::create_dir_all(&dir).map_err(|source| ScanError::CreateDir {
                path: dir.clone(),
                source,
            })?;
        }
        Ok(Self { root })
    }

    /// Persist one sampled crop under its classification bucket.
    pub fn record(
        &self,
        crop: &GrayImageU8,
        class: HourClass,
        page: usize,
        day: usize,
        hour: usize,
    ) {
        if crop.width() == 0 || crop.height() == 0 {
            return;
        }
        let bucket = match class {
            HourClass::Lesson => "lesson",
            HourClass::Empty => "empty",
        };
        let path = self
            .root
            .join(bucket)
            .join(format!("page{page}_day{day}_hour{hour}.png"));
        if let Err(err) = save_grayscale_u8(crop, &path) {
            warn!("cell audit dump failed: {err}");
        }
    }
}
