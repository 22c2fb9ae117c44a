use serde::Serialize;

/// Classification of one sampled hour cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum HourClass {
    Lesson,
    Empty,
}

impl HourClass {
    #[inline]
    pub fn is_lesson(self) -> bool {
        matches!(self, HourClass::Lesson)
    }
}

/// Whether the lone gap inside a day's lesson run falls on the fifth or
/// sixth hour, or neither.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum LunchBreak {
    #[default]
    None,
    FifthHour,
    SixthHour,
}

impl LunchBreak {
    /// Output token used in the start-times stream.
    pub fn token(self) -> &'static str {
        match self {
            LunchBreak::None => "",
            LunchBreak::FifthHour => "q",
            LunchBreak::SixthHour => "w",
        }
    }
}

/// Derived schedule of one weekday for one class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DaySchedule {
    /// Length of the day's contiguous lesson run.
    pub lessons: u32,
    /// Empty hours strictly before the first lesson.
    pub empty_initial: u32,
    pub lunch: LunchBreak,
}

impl DaySchedule {
    /// Start-time token: the lunch marker alone when the day starts on the
    /// first hour, otherwise the empty-hour count followed by the marker.
    pub fn start_token(&self) -> String {
        if self.empty_initial == 0 && self.lunch != LunchBreak::None {
            self.lunch.token().to_string()
        } else {
            format!("{}{}", self.empty_initial, self.lunch.token())
        }
    }
}

/// One class label with its six derived weekday schedules, Monday first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClassSchedule {
    pub label: String,
    pub days: Vec<DaySchedule>,
}

impl ClassSchedule {
    /// Dot-separated lesson counts, one token per weekday.
    pub fn counts_line(&self) -> String {
        self.days
            .iter()
            .map(|day| day.lessons.to_string())
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Dot-separated start-time tokens, one token per weekday.
    pub fn starts_line(&self) -> String {
        self.days
            .iter()
            .map(DaySchedule::start_token)
            .collect::<Vec<_>>()
            .join(".")
    }
}
