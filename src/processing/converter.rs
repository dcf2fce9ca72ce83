//! Batch conversion of an input folder into the output folder

use crate::config::ConversionConfig;
use crate::error::{ConversorError, Result};
use crate::input::reader::DataLines;
use crate::input::scanner::scan_input_dir;
use crate::output::report::{FileReport, RunReport};
use crate::output::writer::{ensure_output_dir, write_converted};
use crate::processing::record::convert_line;
use log::{debug, info};
use std::path::Path;

/// Converts every eligible file of a folder, stopping at the first error.
///
/// Files converted before a failure keep their output. The failing file and
/// every file after it produce nothing.
pub struct BatchConverter {
    options: ConversionConfig,
}

impl Default for BatchConverter {
    fn default() -> Self {
        Self::new(ConversionConfig::default())
    }
}

impl BatchConverter {
    pub fn new(options: ConversionConfig) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ConversionConfig {
        &self.options
    }

    /// Convert all CSV files directly inside `input_dir` into `output_dir`.
    pub fn convert_folder(&self, input_dir: &Path, output_dir: &Path) -> Result<RunReport> {
        let sources = scan_input_dir(input_dir, &self.options.extension)?;
        ensure_output_dir(output_dir)?;

        info!(
            "Converting {} file(s) from {} into {}",
            sources.len(),
            input_dir.display(),
            output_dir.display()
        );

        let mut report = RunReport::new(input_dir.to_path_buf(), output_dir.to_path_buf());
        for source in &sources {
            let file_report = self.process_file(&source.path, output_dir)?;
            report.files.push(file_report);
        }
        report.finish();

        info!(
            "Converted {} row(s), wrote {} file(s) in {}ms",
            report.total_rows(),
            report.files_written(),
            report.elapsed_ms
        );
        Ok(report)
    }

    /// Convert one file into a same-named file inside `output_dir`.
    ///
    /// Nothing is written when the file has no data lines.
    pub fn process_file(&self, file: &Path, output_dir: &Path) -> Result<FileReport> {
        let file_name = file
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| ConversorError::Read {
                path: file.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "file name is not valid UTF-8",
                ),
            })?
            .to_string();

        debug!("Processing {}", file.display());

        let mut lines = DataLines::open(file, &self.options.header_prefix)?;
        let mut converted = Vec::new();
        for line in lines.by_ref() {
            let line = line?;
            let output = convert_line(&line.content).map_err(|e| e.at(&file_name, line.number))?;
            converted.push(output);
        }
        let headers_skipped = lines.headers_skipped();
        drop(lines);

        let output_path = if converted.is_empty() {
            debug!("{} has no data rows, skipping output", file_name);
            None
        } else {
            let path = write_converted(
                output_dir,
                &file_name,
                &self.options.output_header,
                &converted,
            )?;
            info!("Wrote {} row(s) to {}", converted.len(), path.display());
            Some(path)
        };

        Ok(FileReport {
            file_name,
            rows_converted: converted.len(),
            headers_skipped,
            output_path,
        })
    }
}
