//! Typed per-class outcomes and the aggregate batch report.
//!
//! A heuristic contradiction flags one class for manual review; it never
//! aborts the batch or affects other classes. The report keeps outcomes in
//! page order and serializes to JSON for offline inspection.

use crate::types::ClassSchedule;
use serde::Serialize;
use std::fmt;

/// One classification sequence the heuristic could not interpret.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AnomalyRecord {
    pub label: String,
    /// Weekday index, 0 = Monday.
    pub day: usize,
    /// Hour index (0-based) at which a lesson resumed after the run ended.
    pub hour: usize,
}

impl fmt::Display for AnomalyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "class {} needs manual check: lesson resumes at hour {} of weekday {} after the lesson run already ended",
            self.label, self.hour, self.day
        )
    }
}

/// Result of scanning one class page.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ClassOutcome {
    Ok { schedule: ClassSchedule },
    NeedsReview { anomaly: AnomalyRecord },
}

impl ClassOutcome {
    pub fn label(&self) -> &str {
        match self {
            ClassOutcome::Ok { schedule } => &schedule.label,
            ClassOutcome::NeedsReview { anomaly } => &anomaly.label,
        }
    }
}

/// Per-class outcomes of one document scan, in page order.
#[derive(Clone, Debug, Serialize)]
pub struct BatchReport {
    pub outcomes: Vec<ClassOutcome>,
}

impl BatchReport {
    /// Derived schedules of the classes that scanned cleanly, page order.
    pub fn schedules(&self) -> impl Iterator<Item = &ClassSchedule> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            ClassOutcome::Ok { schedule } => Some(schedule),
            ClassOutcome::NeedsReview { .. } => None,
        })
    }

    /// Classes flagged for manual review, page order.
    pub fn anomalies(&self) -> impl Iterator<Item = &AnomalyRecord> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            ClassOutcome::Ok { .. } => None,
            ClassOutcome::NeedsReview { anomaly } => Some(anomaly),
        })
    }

    pub fn flagged_count(&self) -> usize {
        self.anomalies().count()
    }

    pub fn is_clean(&self) -> bool {
        self.flagged_count() == 0
    }
}
