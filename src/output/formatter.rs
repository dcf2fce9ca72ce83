//! Rendering of run reports for the console and as JSON

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::RunReport;
use colored::{Color, Colorize};

pub trait ReportFormatter {
    fn format_report(&self, report: &RunReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

pub struct ConsoleFormatter {
    use_colors: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{} {}\n", "█".color(Color::Blue).bold(), title.color(Color::Blue).bold())
        } else {
            format!("\n█ {}\n", title)
        }
    }
}

impl ReportFormatter for ConsoleFormatter {
    fn format_report(&self, report: &RunReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("CSV CONVERSION SUMMARY"));
        output.push_str(&format!(
            "Started: {} | Processing time: {}ms\n",
            report.started_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.elapsed_ms
        ));
        output.push_str(&format!("Input:  {}\n", report.input_dir.display()));
        output.push_str(&format!("Output: {}\n\n", report.output_dir.display()));

        if report.files.is_empty() {
            output.push_str(&self.colorize("No CSV files found.\n", Color::Yellow));
            return Ok(output);
        }

        for file in &report.files {
            match &file.output_path {
                Some(path) => output.push_str(&format!(
                    "  {} {} -> {} ({} rows)\n",
                    self.colorize("✔", Color::Green),
                    file.file_name,
                    path.display(),
                    file.rows_converted
                )),
                None => output.push_str(&format!(
                    "  {} {} (no data rows, nothing written)\n",
                    self.colorize("–", Color::Yellow),
                    file.file_name
                )),
            }
        }

        output.push_str(&format!(
            "\n{} file(s) written, {} skipped, {} row(s) converted\n",
            self.colorize(&report.files_written().to_string(), Color::Green),
            report.files_skipped(),
            report.total_rows()
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_report(&self, report: &RunReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl ReportGenerator {
    pub fn new(use_colors: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors),
            json_formatter: JsonFormatter::new(true),
        }
    }

    pub fn generate_report(&self, report: &RunReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new(true)
    }
}
