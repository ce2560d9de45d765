//! Lenient processing strategy
//!
//! Decodes every segment of the input file and writes the tags that decoded.
//! A segment that cannot be read or decoded is logged at warn level and
//! skipped; processing then continues with the next segment.
//!
//! Only fatal errors stop the run: the input file cannot be opened, its
//! header row is unreadable, or the output cannot be written.

use crate::core::TagFactory;
use crate::io::csv_format::write_tags_csv;
use crate::io::segment_reader::SegmentReader;
use crate::strategy::{decode_segment, ProcessSummary, ProcessingConfig, ProcessingStrategy};
use crate::types::{Tag, TagError};
use std::io::Write;
use std::path::Path;

/// Lenient processing strategy
///
/// # Examples
///
/// ```no_run
/// use mt940_tags::strategy::{LenientStrategy, ProcessingConfig, ProcessingStrategy};
/// use std::path::Path;
/// use std::io;
///
/// let strategy = LenientStrategy::new(ProcessingConfig::default());
/// let mut output = io::stdout();
///
/// match strategy.process(Path::new("segments.csv"), &mut output) {
///     Ok(summary) => eprintln!("{} tags written, {} skipped", summary.written, summary.skipped),
///     Err(e) => eprintln!("Fatal error: {}", e),
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct LenientStrategy {
    factory: TagFactory,
    config: ProcessingConfig,
}

impl LenientStrategy {
    pub fn new(config: ProcessingConfig) -> Self {
        Self {
            factory: TagFactory::new(),
            config,
        }
    }
}

impl ProcessingStrategy for LenientStrategy {
    fn process(
        &self,
        input_path: &Path,
        output: &mut dyn Write,
    ) -> Result<ProcessSummary, TagError> {
        let reader = SegmentReader::new(input_path)?;
        let mut summary = ProcessSummary::default();
        let mut tags: Vec<Tag> = Vec::new();

        for result in reader {
            let decoded = result.and_then(|segment| {
                decode_segment(&self.factory, &segment)
                    .map_err(|e| TagError::segment_failed(segment.line, e))
            });

            match decoded {
                Ok(tag) => {
                    summary.decoded += 1;
                    if self.config.accepts(&tag) {
                        tags.push(tag);
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "skipping segment");
                    summary.skipped += 1;
                }
            }
        }

        write_tags_csv(&tags, output)?;
        summary.written = tags.len();

        tracing::info!(
            decoded = summary.decoded,
            written = summary.written,
            skipped = summary.skipped,
            "segment file processed"
        );

        Ok(summary)
    }
}
