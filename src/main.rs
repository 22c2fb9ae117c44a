use timetable_grid::image::ImageU8;
use timetable_grid::{SamplerParams, TimetableScanner};

fn main() {
    // Demo stub: scans a blank synthetic page and prints the derived week
    let w = 800usize;
    let h = 1100usize;
    let gray = vec![255u8; w * h];
    let page = ImageU8 {
        w,
        h,
        stride: w,
        data: &gray,
    };

    let scanner = TimetableScanner::new(SamplerParams::default());
    match scanner.scan_page(&page) {
        Ok(days) => {
            for (day, derived) in days.iter().enumerate() {
                println!(
                    "day {day}: lessons={} start={}",
                    derived.lessons,
                    derived.start_token()
                );
            }
        }
        Err(contradiction) => println!(
            "needs manual check: day {} hour {}",
            contradiction.day, contradiction.hour
        ),
    }
}
