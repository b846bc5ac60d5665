use crate::core::SearchResults;
use anyhow::Context;
use colored::*;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Terminal,
    Json,
}

pub trait OutputWriter {
    fn write_results(&mut self, results: &SearchResults) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_results(&mut self, results: &SearchResults) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(results)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_results(&mut self, results: &SearchResults) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "\nMatched functions for signature: {}",
            results.pattern.bold()
        )?;

        if results.matches.is_empty() {
            writeln!(self.writer, "  {}", "no matches".dimmed())?;
        }
        for record in &results.matches {
            writeln!(
                self.writer,
                "  {}  {}  {}",
                format!("{}:{}", record.file.display(), record.line).cyan(),
                record.name.green().bold(),
                record.signature
            )?;
        }

        writeln!(
            self.writer,
            "\n{} match(es) across {} file(s)",
            results.matches.len(),
            results.files_searched
        )?;

        if !results.failures.is_empty() {
            writeln!(
                self.writer,
                "\n{}",
                format!("{} file(s) could not be searched:", results.failures.len()).yellow()
            )?;
            for failure in &results.failures {
                writeln!(
                    self.writer,
                    "  {}: {}",
                    failure.file.display(),
                    failure.message
                )?;
            }
        }

        Ok(())
    }
}

pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file {}", path.display()))?;
            Ok(match format {
                OutputFormat::Json => Box::new(JsonWriter::new(file)),
                OutputFormat::Terminal => Box::new(TerminalWriter::new(file)),
            })
        }
        None => Ok(match format {
            OutputFormat::Json => Box::new(JsonWriter::new(io::stdout())),
            OutputFormat::Terminal => Box::new(TerminalWriter::new(io::stdout())),
        }),
    }
}
