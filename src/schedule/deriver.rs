use super::{LUNCH_FIFTH_HOUR, LUNCH_SIXTH_HOUR};
use crate::types::{DaySchedule, HourClass, LunchBreak};

/// Whether the day's lesson run has ended, and at which hour the first gap
/// after it was seen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GapState {
    NoGapYet,
    GapAt(usize),
}

/// A lesson cell reappeared after the day's lesson run had already ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Contradiction {
    /// Hour index (0-based) at which the lesson resumed.
    pub hour: usize,
}

/// Left-to-right state machine deriving one weekday's schedule.
///
/// Feed up to eight hourly classifications with [`push`](Self::push), then
/// take the derived triple with [`finish`](Self::finish). State is per day;
/// a fresh deriver is needed for the next weekday.
#[derive(Clone, Debug)]
pub struct DayDeriver {
    hour: usize,
    lessons: u32,
    empty_initial: u32,
    gap: GapState,
    lunch: LunchBreak,
}

impl Default for DayDeriver {
    fn default() -> Self {
        Self::new()
    }
}

impl DayDeriver {
    pub fn new() -> Self {
        Self {
            hour: 0,
            lessons: 0,
            empty_initial: 0,
            gap: GapState::NoGapYet,
            lunch: LunchBreak::None,
        }
    }

    /// Consume the classification of the next hour.
    ///
    /// Returns the contradiction when a lesson resumes after the run ended;
    /// the deriver is not usable for this day afterwards.
    pub fn push(&mut self, class: HourClass) -> Result<(), Contradiction> {
        let hour = self.hour;
        self.hour += 1;

        match (class, self.gap) {
            (HourClass::Lesson, GapState::NoGapYet) => self.lessons += 1,
            (HourClass::Lesson, GapState::GapAt(_)) => return Err(Contradiction { hour }),
            (HourClass::Empty, _) => {
                if self.lessons == 0 {
                    self.empty_initial += 1;
                } else if self.gap == GapState::NoGapYet {
                    if hour == LUNCH_FIFTH_HOUR {
                        self.lunch = LunchBreak::FifthHour;
                    } else if hour == LUNCH_SIXTH_HOUR {
                        self.lunch = LunchBreak::SixthHour;
                    } else {
                        self.gap = GapState::GapAt(hour);
                    }
                }
                // a later empty hour after the first recorded gap: no change
            }
        }

        // The recorded gap sits right after the presumed lunch hour and no
        // lesson ever resumed: that was the end of the school day, not a
        // lunch break.
        let day_ended = match (self.gap, self.lunch) {
            (GapState::GapAt(gap), LunchBreak::FifthHour) => gap == LUNCH_FIFTH_HOUR + 1,
            (GapState::GapAt(gap), LunchBreak::SixthHour) => gap == LUNCH_SIXTH_HOUR + 1,
            _ => false,
        };
        if day_ended {
            self.lunch = LunchBreak::None;
        }

        Ok(())
    }

    /// Derived triple for the day.
    pub fn finish(self) -> DaySchedule {
        DaySchedule {
            lessons: self.lessons,
            empty_initial: self.empty_initial,
            lunch: self.lunch,
        }
    }
}
