//! Ink-density sampling of timetable grid cells.
//!
//! Given a rasterized page and a (weekday, hour) grid coordinate, the
//! sampler crops the corresponding cell region minus its trim bands,
//! binarizes it with a fixed luma cutoff and counts the ink pixels. A cell
//! whose ink count exceeds the lesson threshold is classified as a lesson
//! hour, anything else as an empty hour.
//!
//! Sampling never fails: regions falling outside the page contribute no
//! ink, so an undersized page simply reads as empty cells.

mod params;

pub use params::{PageLayout, SamplerParams};

use crate::image::{GrayImageU8, ImageU8, ImageView};
use crate::types::HourClass;

/// Pixel rectangle of one sampled cell after trim, clamped to the page.
///
/// Half-open on the right and bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRect {
    pub left: usize,
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
}

impl CellRect {
    #[inline]
    pub fn width(&self) -> usize {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.bottom - self.top
    }
}

/// Ink count and classification of one sampled cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellSample {
    pub ink: u32,
    pub class: HourClass,
}

/// Samples (weekday, hour) cells of rasterized pages.
pub struct CellSampler {
    params: SamplerParams,
}

impl CellSampler {
    pub fn new(params: SamplerParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &SamplerParams {
        &self.params
    }

    /// Crop rectangle of the cell at column `day`, row `hour`, clamped to
    /// the page bounds.
    pub fn cell_rect(&self, page: &ImageU8<'_>, day: usize, hour: usize) -> CellRect {
        let layout = &self.params.layout;
        let left = (layout.margin_left + day as u32 * layout.cell_width) as usize;
        let top = (layout.margin_top + hour as u32 * layout.cell_height) as usize;
        let right = left + layout.cell_width.saturating_sub(layout.trim_width) as usize;
        let bottom = top + layout.cell_height.saturating_sub(layout.trim_height) as usize;

        let right = right.min(page.width());
        let bottom = bottom.min(page.height());
        CellRect {
            left: left.min(right),
            top: top.min(bottom),
            right,
            bottom,
        }
    }

    /// Count ink pixels in one cell and classify it.
    pub fn sample(&self, page: &ImageU8<'_>, day: usize, hour: usize) -> CellSample {
        let rect = self.cell_rect(page, day, hour);
        let mut ink = 0u32;
        for y in rect.top..rect.bottom {
            let row = &page.row(y)[rect.left..rect.right];
            for &luma in row {
                if luma < self.params.ink_luma_threshold {
                    ink += 1;
                }
            }
        }
        let class = if ink > self.params.lesson_ink_threshold {
            HourClass::Lesson
        } else {
            HourClass::Empty
        };
        CellSample { ink, class }
    }

    /// Copy the sampled cell region out of the page.
    ///
    /// Only used for audit dumps; classification never depends on it.
    pub fn crop(&self, page: &ImageU8<'_>, day: usize, hour: usize) -> GrayImageU8 {
        let rect = self.cell_rect(page, day, hour);
        let mut data = Vec::with_capacity(rect.width() * rect.height());
        for y in rect.top..rect.bottom {
            data.extend_from_slice(&page.row(y)[rect.left..rect.right]);
        }
        GrayImageU8::new(rect.width(), rect.height(), data)
    }
}
