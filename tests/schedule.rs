//! Derivation properties over the full space of single-run days.

use timetable_grid::{DayDeriver, DaySchedule, HourClass, LunchBreak};

const DAY_HOURS: usize = 8;

fn derive(sequence: &[HourClass]) -> Result<DaySchedule, usize> {
    let mut deriver = DayDeriver::new();
    for &class in sequence {
        deriver.push(class).map_err(|c| c.hour)?;
    }
    Ok(deriver.finish())
}

/// Day with `start` empty hours, then `len` lessons, then empty hours.
fn single_run(start: usize, len: usize) -> Vec<HourClass> {
    (0..DAY_HOURS)
        .map(|hour| {
            if hour >= start && hour < start + len {
                HourClass::Lesson
            } else {
                HourClass::Empty
            }
        })
        .collect()
}

#[test]
fn single_run_days_never_contradict() {
    for start in 0..DAY_HOURS {
        for len in 0..=DAY_HOURS - start {
            let day = derive(&single_run(start, len))
                .unwrap_or_else(|hour| panic!("start={start} len={len}: contradiction at {hour}"));
            assert_eq!(day.lessons, len as u32, "start={start} len={len}");
        }
    }
}

#[test]
fn empty_initial_hours_count_cells_before_the_run() {
    for start in 0..DAY_HOURS {
        for len in 1..=DAY_HOURS - start {
            let day = derive(&single_run(start, len)).unwrap();
            assert_eq!(day.empty_initial, start as u32, "start={start} len={len}");
        }
    }
    // with no lesson at all, every hour counts as initial
    let day = derive(&single_run(0, 0)).unwrap();
    assert_eq!(day.empty_initial, DAY_HOURS as u32);
}

#[test]
fn no_lunch_marker_survives_when_nothing_resumes() {
    // whatever hour the tail gap starts at, a day that just ends has no
    // lunch break
    for start in 0..DAY_HOURS {
        for len in 0..=DAY_HOURS - start {
            let day = derive(&single_run(start, len)).unwrap();
            assert_eq!(
                day.lunch,
                LunchBreak::None,
                "start={start} len={len} must not report a lunch break"
            );
        }
    }
}

#[test]
fn lunch_markers_require_a_resumed_run() {
    const L: HourClass = HourClass::Lesson;
    const E: HourClass = HourClass::Empty;

    // hole on the fifth hour, lessons resume
    let day = derive(&[L, L, L, L, E, L, L, E]).unwrap();
    assert_eq!(day.lunch, LunchBreak::FifthHour);
    assert_eq!(day.lessons, 6);
    assert_eq!(day.start_token(), "q");

    // hole on the sixth hour, lessons resume
    let day = derive(&[E, E, L, L, L, E, L, L]).unwrap();
    assert_eq!(day.lunch, LunchBreak::SixthHour);
    assert_eq!(day.lessons, 5);
    assert_eq!(day.empty_initial, 2);
    assert_eq!(day.start_token(), "2w");
}

#[test]
fn resumed_lesson_after_a_recorded_gap_contradicts() {
    const L: HourClass = HourClass::Lesson;
    const E: HourClass = HourClass::Empty;

    assert_eq!(derive(&[L, L, E, E, L, E, E, E]), Err(4));
    // gap recorded on the tail of a late-start day
    assert_eq!(derive(&[E, L, E, E, E, E, E, L]), Err(7));
}

#[test]
fn lunch_hole_does_not_arm_the_contradiction() {
    const L: HourClass = HourClass::Lesson;
    const E: HourClass = HourClass::Empty;

    // resuming right after a fifth-hour hole is the expected shape, not an
    // anomaly
    let day = derive(&[L, L, L, L, E, L, L, L]).unwrap();
    assert_eq!(day.lessons, 7);
    assert_eq!(day.lunch, LunchBreak::FifthHour);
}
