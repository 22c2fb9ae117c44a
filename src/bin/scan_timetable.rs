use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

use timetable_grid::config::{load_config, RuntimeConfig};
use timetable_grid::error::ScanError;
use timetable_grid::image::io::{load_page_images, write_json_file};
use timetable_grid::image::GrayImageU8;
use timetable_grid::labels::LabelMatcher;
use timetable_grid::scanner::CellAudit;
use timetable_grid::writer::open_output_files;
use timetable_grid::TimetableScanner;

fn main() {
    env_logger::init();
    let config_path = match parse_cli() {
        Ok(path) => path,
        Err(usage) => {
            eprintln!("{usage}");
            process::exit(2);
        }
    };
    match run(&config_path) {
        Ok(flagged) if flagged > 0 => process::exit(1),
        Ok(_) => {}
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    }
}

fn parse_cli() -> Result<PathBuf, String> {
    let program = env::args().next().unwrap_or_else(|| "scan_timetable".to_string());
    let args: Vec<String> = env::args().skip(1).collect();
    match args.as_slice() {
        [config] if config != "-h" && config != "--help" => Ok(PathBuf::from(config)),
        _ => Err(format!("Usage: {program} <config.json>")),
    }
}

fn run(config_path: &std::path::Path) -> Result<usize, ScanError> {
    let config = load_config(config_path)?;
    let (pages, text) = acquire_inputs(&config)?;

    let matcher = LabelMatcher::from_track_letters(&config.track_letters)?;
    let labels = matcher.extract(&text);

    let audit = config
        .output
        .debug_dir
        .as_ref()
        .map(CellAudit::create)
        .transpose()?;

    let scanner = TimetableScanner::new(config.sampler.clone());
    let report = scanner.scan_document(&pages, &labels, audit.as_ref())?;

    let mut writer = open_output_files(&config.output)?;
    writer.write_document_text(&text)?;
    writer.write_report(&report)?;
    writer.finish()?;

    if let Some(path) = &config.output.json_report {
        write_json_file(path, &report)?;
    }

    for anomaly in report.anomalies() {
        eprintln!("{anomaly}");
    }
    println!(
        "Scan completed: {} classes, {} flagged for manual check",
        report.outcomes.len(),
        report.flagged_count()
    );
    Ok(report.flagged_count())
}

#[cfg(feature = "pdf")]
fn acquire_inputs(config: &RuntimeConfig) -> Result<(Vec<GrayImageU8>, String), ScanError> {
    if let Some(pdf_path) = &config.pdf_path {
        let document = timetable_grid::raster::rasterize_document(pdf_path, config.render_dpi)?;
        return Ok((document.pages, document.text));
    }
    load_prepared_inputs(config)
}

#[cfg(not(feature = "pdf"))]
fn acquire_inputs(config: &RuntimeConfig) -> Result<(Vec<GrayImageU8>, String), ScanError> {
    if config.pdf_path.is_some() {
        return Err(ScanError::InvalidConfig(
            "pdf_path requires a build with the `pdf` feature".to_string(),
        ));
    }
    load_prepared_inputs(config)
}

/// Pages and text prepared by the external rasterization/extraction steps.
fn load_prepared_inputs(config: &RuntimeConfig) -> Result<(Vec<GrayImageU8>, String), ScanError> {
    let pages_dir = config.pages_dir.as_ref().ok_or_else(|| {
        ScanError::InvalidConfig("pages_dir is required without pdf_path".to_string())
    })?;
    let text_path = config.text_path.as_ref().ok_or_else(|| {
        ScanError::InvalidConfig("text_path is required without pdf_path".to_string())
    })?;

    let pages = load_page_images(pages_dir)?;
    let text = fs::read_to_string(text_path).map_err(|source| ScanError::Read {
        path: text_path.clone(),
        source,
    })?;
    Ok((pages, text))
}
