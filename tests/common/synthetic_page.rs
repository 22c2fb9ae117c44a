use timetable_grid::image::GrayImageU8;
use timetable_grid::sampler::{PageLayout, SamplerParams};

/// Compact calibration for synthetic pages; same structure as the reference
/// layout, smaller cells.
pub fn test_params() -> SamplerParams {
    SamplerParams {
        layout: PageLayout {
            margin_left: 10,
            margin_top: 12,
            cell_width: 30,
            cell_height: 28,
            trim_width: 6,
            trim_height: 8,
            weekdays: 6,
            day_hours: 8,
        },
        ink_luma_threshold: 128,
        lesson_ink_threshold: 50,
    }
}

/// Paints a synthetic timetable page: white background, separator lines
/// inside every cell's trim band, and a solid ink block in each lesson cell.
///
/// `lessons[day][hour]` selects the lesson cells; rows beyond the given
/// slices stay empty.
pub fn render_page(params: &SamplerParams, lessons: &[&[bool]]) -> GrayImageU8 {
    let layout = &params.layout;
    let width = (layout.margin_left + layout.weekdays as u32 * layout.cell_width + 20) as usize;
    let height = (layout.margin_top + layout.day_hours as u32 * layout.cell_height + 20) as usize;
    let mut data = vec![255u8; width * height];

    // separator lines live in the trimmed band of each cell; sampling must
    // never see them
    for day in 0..layout.weekdays as u32 {
        let x = (layout.margin_left + (day + 1) * layout.cell_width - layout.trim_width / 2) as usize;
        for y in 0..height {
            data[y * width + x] = 0;
        }
    }
    for hour in 0..layout.day_hours as u32 {
        let y = (layout.margin_top + (hour + 1) * layout.cell_height - layout.trim_height / 2) as usize;
        for x in 0..width {
            data[y * width + x] = 0;
        }
    }

    for (day, hours) in lessons.iter().enumerate() {
        for (hour, &lesson) in hours.iter().enumerate() {
            if !lesson {
                continue;
            }
            fill_lesson_cell(params, &mut data, width, day, hour);
        }
    }

    GrayImageU8::new(width, height, data)
}

/// Solid ink block at the center of the sampled (post-trim) cell region,
/// comfortably above the lesson threshold.
fn fill_lesson_cell(params: &SamplerParams, data: &mut [u8], width: usize, day: usize, hour: usize) {
    let layout = &params.layout;
    let left = (layout.margin_left + day as u32 * layout.cell_width) as usize;
    let top = (layout.margin_top + hour as u32 * layout.cell_height) as usize;
    let sampled_w = (layout.cell_width - layout.trim_width) as usize;
    let sampled_h = (layout.cell_height - layout.trim_height) as usize;

    let block = 12usize;
    let x0 = left + (sampled_w - block) / 2;
    let y0 = top + (sampled_h - block) / 2;
    for y in y0..y0 + block {
        for x in x0..x0 + block {
            data[y * width + x] = 0;
        }
    }
}
