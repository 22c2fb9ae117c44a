//! Per-day schedule derivation from hourly cell classifications.
//!
//! Overview
//! - One [`DayDeriver`] consumes the ordered classifications of a single
//!   weekday, strictly left-to-right: the scan is order-dependent because
//!   gap detection and the lunch correction both rely on what came before.
//! - The heuristic assumes each day holds one contiguous lesson run. Empty
//!   hours before the run are counted as the day's late start; an empty
//!   fifth or sixth hour inside the run is presumed to be the lunch break;
//!   the first empty hour after the run is recorded as the end of the day.
//! - A lesson cell appearing after the run already ended is a contradiction
//!   the heuristic cannot interpret; the deriver reports it instead of
//!   guessing, and the caller flags the class for manual review.
//! - An end-of-day correction withdraws the lunch marker when no lesson
//!   ever resumes after the presumed break: the day simply ended there.
//!
//! There is deliberately no representation for a second lesson block
//! preceded by a genuine non-lunch gap; such timetables surface as
//! contradictions.

mod deriver;

pub use deriver::{Contradiction, DayDeriver};

/// Hour index presumed to be the lunch break when empty (fifth hour).
pub const LUNCH_FIFTH_HOUR: usize = 4;
/// Hour index presumed to be the lunch break when empty (sixth hour).
pub const LUNCH_SIXTH_HOUR: usize = 5;
