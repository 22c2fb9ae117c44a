mod common;

use common::synthetic_page::{render_page, test_params};
use timetable_grid::labels::LabelMatcher;
use timetable_grid::writer::ScheduleWriter;
use timetable_grid::{ClassOutcome, ScanError, TimetableScanner};

const L: bool = true;
const E: bool = false;

/// Six ordinary weekdays: five lessons from the first hour.
fn plain_week() -> Vec<&'static [bool]> {
    vec![&[L, L, L, L, L, E, E, E]; 6]
}

#[test]
fn document_scan_produces_the_three_streams() {
    let _ = env_logger::builder().is_test(true).try_init();
    let params = test_params();

    // class 1TA: plain week; class 2IB: late starts with a sixth-hour lunch
    // on Monday
    let page_a = render_page(&params, &plain_week());
    let mut week_b: Vec<&'static [bool]> = vec![&[E, E, L, L, L, L, E, E]; 6];
    week_b[0] = &[E, E, L, L, L, E, L, L];
    let page_b = render_page(&params, &week_b);

    let pages = vec![page_a, page_b];
    let text = "Weekly timetable\npage one: 1TA\npage two: 2IB\n";
    let labels = LabelMatcher::from_track_letters("TIME")
        .unwrap()
        .extract(text);
    assert_eq!(labels, vec!["1TA", "2IB"]);

    let scanner = TimetableScanner::new(params);
    let report = scanner.scan_document(&pages, &labels, None).unwrap();
    assert!(report.is_clean());

    let mut writer = ScheduleWriter::new(Vec::new(), Vec::new(), Vec::new());
    writer.write_document_text(text).unwrap();
    writer.write_report(&report).unwrap();

    let schedules: Vec<_> = report.schedules().collect();
    assert_eq!(schedules[0].counts_line(), "5.5.5.5.5.5");
    assert_eq!(schedules[0].starts_line(), "0.0.0.0.0.0");
    assert_eq!(schedules[1].counts_line(), "5.4.4.4.4.4");
    assert_eq!(schedules[1].starts_line(), "2w.2.2.2.2.2");
}

#[test]
fn an_uninterpretable_page_flags_only_its_class() {
    let params = test_params();

    let page_a = render_page(&params, &plain_week());
    // lessons resume on Wednesday after the day already ended at hour 2
    let mut week_bad: Vec<&'static [bool]> = vec![&[L, L, L, L, L, E, E, E]; 6];
    week_bad[2] = &[L, L, E, E, L, E, E, E];
    let page_bad = render_page(&params, &week_bad);
    let page_c = render_page(&params, &plain_week());

    let pages = vec![page_a, page_bad, page_c];
    let labels = vec!["1TA".to_string(), "2IB".to_string(), "3MC".to_string()];

    let scanner = TimetableScanner::new(params);
    let report = scanner.scan_document(&pages, &labels, None).unwrap();

    assert_eq!(report.outcomes.len(), 3);
    assert_eq!(report.flagged_count(), 1);
    let anomaly = report.anomalies().next().unwrap();
    assert_eq!(anomaly.label, "2IB");
    assert_eq!(anomaly.day, 2);
    assert_eq!(anomaly.hour, 4);
    assert!(anomaly.to_string().contains("2IB"));

    // page order survives the flagged class
    let labels_out: Vec<_> = report
        .outcomes
        .iter()
        .map(|outcome| outcome.label())
        .collect();
    assert_eq!(labels_out, vec!["1TA", "2IB", "3MC"]);
    assert!(matches!(report.outcomes[1], ClassOutcome::NeedsReview { .. }));

    // flagged classes get no output lines
    let mut writer = ScheduleWriter::new(Vec::new(), Vec::new(), Vec::new());
    writer.write_report(&report).unwrap();
    let lines: Vec<_> = report.schedules().map(|s| s.counts_line()).collect();
    assert_eq!(lines.len(), 2);
}

#[test]
fn label_page_mismatch_fails_before_any_day_is_processed() {
    let params = test_params();
    let pages = vec![
        render_page(&params, &plain_week()),
        render_page(&params, &plain_week()),
    ];
    let labels = vec!["1TA".to_string()];

    let scanner = TimetableScanner::new(params);
    let err = scanner.scan_document(&pages, &labels, None).unwrap_err();
    assert!(matches!(
        err,
        ScanError::LabelAlignment { labels: 1, pages: 2 }
    ));
}

#[test]
fn audit_dumps_land_in_classification_buckets() {
    let params = test_params();
    let pages = vec![render_page(&params, &plain_week())];
    let labels = vec!["1TA".to_string()];

    let audit_dir = std::env::temp_dir().join(format!("timetable-grid-audit-{}", std::process::id()));
    let audit = timetable_grid::CellAudit::create(&audit_dir).unwrap();

    let scanner = TimetableScanner::new(params);
    let report = scanner.scan_document(&pages, &labels, Some(&audit)).unwrap();
    assert!(report.is_clean());

    let count_files = |bucket: &str| {
        std::fs::read_dir(audit_dir.join(bucket))
            .map(|entries| entries.count())
            .unwrap_or(0)
    };
    // 6 weekdays x 5 lesson hours, the rest empty
    assert_eq!(count_files("lesson"), 30);
    assert_eq!(count_files("empty"), 18);

    let _ = std::fs::remove_dir_all(&audit_dir);
}

#[test]
fn separator_lines_alone_never_classify_as_lessons() {
    let params = test_params();
    // nothing painted but the grid separators
    let page = render_page(&params, &[]);
    let scanner = TimetableScanner::new(params);
    let days = scanner.scan_page(&page.as_view()).unwrap();
    assert!(days.iter().all(|day| day.lessons == 0));
    assert!(days.iter().all(|day| day.empty_initial == 8));
}
