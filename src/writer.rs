//! Output streams for derived schedules.
//!
//! Three append-only streams, written in page-then-day order: the verbatim
//! document text, one line of lesson counts per class and one line of
//! start-time tokens per class. The handles are owned by the writer, opened
//! once and flushed by [`ScheduleWriter::finish`]; nothing is left dangling
//! on the anomaly path because flagged classes simply get no lines.

use crate::config::OutputConfig;
use crate::diagnostics::BatchReport;
use crate::error::ScanError;
use crate::types::ClassSchedule;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serializes derived schedules to three output streams.
pub struct ScheduleWriter<W: Write> {
    text: W,
    counts: W,
    starts: W,
}

impl<W: Write> ScheduleWriter<W> {
    pub fn new(text: W, counts: W, starts: W) -> Self {
        Self {
            text,
            counts,
            starts,
        }
    }

    /// Pass the extracted document text through unmodified.
    pub fn write_document_text(&mut self, text: &str) -> Result<(), ScanError> {
        self.text
            .write_all(text.as_bytes())
            .map_err(|source| ScanError::Stream {
                stream: "text",
                source,
            })
    }

    /// Append one class: a lesson-count line and a start-time line.
    pub fn write_class(&mut self, schedule: &ClassSchedule) -> Result<(), ScanError> {
        writeln!(self.counts, "{}", schedule.counts_line()).map_err(|source| ScanError::Stream {
            stream: "counts",
            source,
        })?;
        writeln!(self.starts, "{}", schedule.starts_line()).map_err(|source| ScanError::Stream {
            stream: "starts",
            source,
        })
    }

    /// Append every cleanly scanned class of the report, page order.
    pub fn write_report(&mut self, report: &BatchReport) -> Result<(), ScanError> {
        for schedule in report.schedules() {
            self.write_class(schedule)?;
        }
        Ok(())
    }

    /// Flush all three streams.
    pub fn finish(mut self) -> Result<(), ScanError> {
        for (stream, handle) in [
            ("text", &mut self.text),
            ("counts", &mut self.counts),
            ("starts", &mut self.starts),
        ] {
            handle
                .flush()
                .map_err(|source| ScanError::Stream { stream, source })?;
        }
        Ok(())
    }
}

/// Open the three output files named by the configuration.
pub fn open_output_files(
    output: &OutputConfig,
) -> Result<ScheduleWriter<BufWriter<File>>, ScanError> {
    let open = |path: &Path| {
        File::create(path)
            .map(BufWriter::new)
            .map_err(|source| ScanError::Write {
                path: path.to_path_buf(),
                source,
            })
    };
    Ok(ScheduleWriter::new(
        open(&output.text_out)?,
        open(&output.counts_out)?,
        open(&output.starts_out)?,
    ))
}
