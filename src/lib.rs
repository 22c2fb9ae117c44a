#![doc = include_str!("../README.md")]

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod labels;
pub mod sampler;
pub mod scanner;
pub mod schedule;
pub mod types;
pub mod writer;

#[cfg(feature = "pdf")]
pub mod raster;

// --- High-level re-exports -------------------------------------------------

pub use crate::diagnostics::{AnomalyRecord, BatchReport, ClassOutcome};
pub use crate::error::ScanError;
pub use crate::sampler::{CellSampler, PageLayout, SamplerParams};
pub use crate::scanner::{CellAudit, TimetableScanner};
pub use crate::schedule::DayDeriver;
pub use crate::types::{ClassSchedule, DaySchedule, HourClass, LunchBreak};

/// Small prelude for quick experiments.
///
/// ```no_run
/// use timetable_grid::prelude::*;
///
/// let (w, h) = (800usize, 1100usize);
/// let gray = vec![255u8; w * h];
/// let page = ImageU8 { w, h, stride: w, data: &gray };
///
/// let scanner = TimetableScanner::new(SamplerParams::default());
/// let days = scanner.scan_page(&page).expect("blank page has no contradictions");
/// println!("monday lessons: {}", days[0].lessons);
/// ```
pub mod prelude {
    pub use crate::image::ImageU8;
    pub use crate::{BatchReport, DaySchedule, HourClass, LunchBreak};
    pub use crate::{PageLayout, SamplerParams, TimetableScanner};
}
