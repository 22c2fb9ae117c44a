//! Calibration parameters for cell sampling.
//!
//! Cell geometry, trim margins and both ink thresholds are tuned to one
//! specific document layout and print scan. Keeping them here, overridable
//! from the runtime configuration, lets the same scan logic be recalibrated
//! without touching the algorithm. The defaults carry the reference
//! calibration of the source document at 100 DPI.

use serde::Deserialize;

/// Fixed grid geometry of one rasterized timetable page.
///
/// The page carries one weekday per column and one hour per row. Margins
/// locate the Monday/first-hour corner of the grid; trim bands exclude the
/// printed cell separators from sampling, since the margins and cell size
/// are not accurate to the pixel and the separator lines would otherwise be
/// counted as ink.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct PageLayout {
    /// Horizontal offset of the grid origin, in pixels.
    pub margin_left: u32,
    /// Vertical offset of the grid origin, in pixels.
    pub margin_top: u32,
    pub cell_width: u32,
    pub cell_height: u32,
    /// Right-hand band of each cell excluded from sampling.
    pub trim_width: u32,
    /// Bottom band of each cell excluded from sampling.
    pub trim_height: u32,
    /// Weekday columns on the page, Monday first.
    pub weekdays: usize,
    /// Hour rows per weekday column.
    pub day_hours: usize,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            margin_left: 85,
            margin_top: 145,
            cell_width: 112,
            cell_height: 110,
            trim_width: 20,
            trim_height: 40,
            weekdays: 6,
            day_hours: 8,
        }
    }
}

/// Layout plus the two classification thresholds.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SamplerParams {
    pub layout: PageLayout,
    /// Binarization cutoff: luma strictly below this value counts as ink.
    pub ink_luma_threshold: u8,
    /// Ink counts strictly above this value classify the cell as a lesson.
    pub lesson_ink_threshold: u32,
}

impl Default for SamplerParams {
    fn default() -> Self {
        Self {
            layout: PageLayout::default(),
            ink_luma_threshold: 128,
            lesson_ink_threshold: 50,
        }
    }
}
