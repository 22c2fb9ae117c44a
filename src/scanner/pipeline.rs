use super::audit::CellAudit;
use crate::diagnostics::{AnomalyRecord, BatchReport, ClassOutcome};
use crate::error::ScanError;
use crate::image::{GrayImageU8, ImageU8};
use crate::sampler::{CellSampler, SamplerParams};
use crate::schedule::{Contradiction, DayDeriver};
use crate::types::{ClassSchedule, DaySchedule};
use log::debug;
use rayon::prelude::*;

/// Contradiction located within one page scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DayContradiction {
    /// Weekday index, 0 = Monday.
    pub day: usize,
    /// Hour index at which the lesson resumed.
    pub hour: usize,
}

/// Scans rasterized timetable pages into per-class schedules.
pub struct TimetableScanner {
    sampler: CellSampler,
}

impl TimetableScanner {
    pub fn new(params: SamplerParams) -> Self {
        Self {
            sampler: CellSampler::new(params),
        }
    }

    pub fn sampler(&self) -> &CellSampler {
        &self.sampler
    }

    /// Derive one weekday of one page, hours strictly left-to-right.
    pub fn scan_day(&self, page: &ImageU8<'_>, day: usize) -> Result<DaySchedule, Contradiction> {
        self.scan_day_impl(page, day, None)
    }

    fn scan_day_impl(
        &self,
        page: &ImageU8<'_>,
        day: usize,
        audit: Option<(&CellAudit, usize)>,
    ) -> Result<DaySchedule, Contradiction> {
        let mut deriver = DayDeriver::new();
        for hour in 0..self.sampler.params().layout.day_hours {
            let sample = self.sampler.sample(page, day, hour);
            debug!(
                "day {day} hour {hour}: ink={} class={:?}",
                sample.ink, sample.class
            );
            if let Some((audit, page_index)) = audit {
                let crop = self.sampler.crop(page, day, hour);
                audit.record(&crop, sample.class, page_index, day, hour);
            }
            deriver.push(sample.class)?;
        }
        Ok(deriver.finish())
    }

    /// Derive all weekdays of one page, Monday first.
    pub fn scan_page(&self, page: &ImageU8<'_>) -> Result<Vec<DaySchedule>, DayContradiction> {
        self.scan_page_impl(page, None)
    }

    fn scan_page_impl(
        &self,
        page: &ImageU8<'_>,
        audit: Option<(&CellAudit, usize)>,
    ) -> Result<Vec<DaySchedule>, DayContradiction> {
        (0..self.sampler.params().layout.weekdays)
            .map(|day| {
                self.scan_day_impl(page, day, audit)
                    .map_err(|contradiction| DayContradiction {
                        day,
                        hour: contradiction.hour,
                    })
            })
            .collect()
    }

    /// Scan a whole document: one page and one label per class.
    ///
    /// The label/page pairing is checked before any day is processed. Pages
    /// are scanned in parallel (they share no state); a contradiction flags
    /// its class only and the remaining classes complete normally.
    pub fn scan_document(
        &self,
        pages: &[GrayImageU8],
        labels: &[String],
        audit: Option<&CellAudit>,
    ) -> Result<BatchReport, ScanError> {
        if labels.len() != pages.len() {
            return Err(ScanError::LabelAlignment {
                labels: labels.len(),
                pages: pages.len(),
            });
        }

        let outcomes = pages
            .par_iter()
            .zip(labels.par_iter())
            .enumerate()
            .map(|(page_index, (page, label))| {
                let view = page.as_view();
                match self.scan_page_impl(&view, audit.map(|a| (a, page_index))) {
                    Ok(days) => ClassOutcome::Ok {
                        schedule: ClassSchedule {
                            label: label.clone(),
                            days,
                        },
                    },
                    Err(contradiction) => {
                        debug!(
                            "page {page_index} ({label}): contradiction at day {} hour {}",
                            contradiction.day, contradiction.hour
                        );
                        ClassOutcome::NeedsReview {
                            anomaly: AnomalyRecord {
                                label: label.clone(),
                                day: contradiction.day,
                                hour: contradiction.hour,
                            },
                        }
                    }
                }
            })
            .collect();

        Ok(BatchReport { outcomes })
    }
}
