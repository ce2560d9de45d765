//! Strict processing strategy
//!
//! Decodes every segment of the input file and stops at the first segment
//! that cannot be read or decoded. Tags are collected before anything is
//! written, so a failed run leaves the output untouched.

use crate::core::TagFactory;
use crate::io::csv_format::write_tags_csv;
use crate::io::segment_reader::SegmentReader;
use crate::strategy::{decode_segment, ProcessSummary, ProcessingConfig, ProcessingStrategy};
use crate::types::{Tag, TagError};
use std::io::Write;
use std::path::Path;

/// Strict processing strategy
///
/// # Examples
///
/// ```no_run
/// use mt940_tags::strategy::{ProcessingConfig, ProcessingStrategy, StrictStrategy};
/// use std::path::Path;
/// use std::io;
///
/// let strategy = StrictStrategy::new(ProcessingConfig::default());
/// let mut output = io::stdout();
///
/// if let Err(e) = strategy.process(Path::new("segments.csv"), &mut output) {
///     eprintln!("Fatal error: {}", e);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct StrictStrategy {
    factory: TagFactory,
    config: ProcessingConfig,
}

impl StrictStrategy {
    pub fn new(config: ProcessingConfig) -> Self {
        Self {
            factory: TagFactory::new(),
            config,
        }
    }
}

impl ProcessingStrategy for StrictStrategy {
    fn process(
        &self,
        input_path: &Path,
        output: &mut dyn Write,
    ) -> Result<ProcessSummary, TagError> {
        let reader = SegmentReader::new(input_path)?;
        let mut summary = ProcessSummary::default();
        let mut tags: Vec<Tag> = Vec::new();

        for result in reader {
            let segment = match result {
                Ok(segment) => segment,
                Err(TagError::CsvError {
                    line: Some(line),
                    message,
                }) => {
                    return Err(TagError::segment_failed(
                        line,
                        TagError::CsvError {
                            line: Some(line),
                            message,
                        },
                    ))
                }
                Err(e) => return Err(e),
            };

            let tag = decode_segment(&self.factory, &segment)
                .map_err(|e| TagError::segment_failed(segment.line, e))?;

            summary.decoded += 1;
            if self.config.accepts(&tag) {
                tags.push(tag);
            }
        }

        write_tags_csv(&tags, output)?;
        summary.written = tags.len();

        tracing::info!(
            decoded = summary.decoded,
            written = summary.written,
            "segment file processed"
        );

        Ok(summary)
    }
}
