//! Page and batch orchestration.
//!
//! One page carries one class; weekdays are columns, hours are rows. Within
//! a page the day/hour scan is strictly sequential because the derivation
//! state machine is order-dependent. Pages are independent of each other
//! and scanned in parallel; outcomes keep page order.

mod audit;
mod pipeline;

pub use audit::CellAudit;
pub use pipeline::{DayContradiction, TimetableScanner};
