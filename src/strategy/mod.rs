//! Processing strategy module for segment files
//!
//! This module defines the Strategy pattern for the batch pipeline: read a
//! segment file, decode every segment through the [`TagFactory`], write the
//! decoded tags. The strategies differ only in what happens to a segment
//! that fails to decode.
//!
//! [`TagFactory`]: crate::core::TagFactory

use crate::cli::DecodeMode;
use crate::core::TagFactory;
use crate::io::segment_reader::Segment;
use crate::types::{Tag, TagError, TagKind};
use std::io::Write;
use std::path::Path;

pub mod lenient;
pub mod strict;

pub use lenient::LenientStrategy;
pub use strict::StrictStrategy;

/// Options shared by every strategy
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessingConfig {
    /// Only these kinds are written; `None` writes every decoded tag
    pub kinds: Option<Vec<TagKind>>,
}

impl ProcessingConfig {
    /// Whether a decoded tag passes the kind filter
    pub fn accepts(&self, tag: &Tag) -> bool {
        self.kinds
            .as_ref()
            .map_or(true, |kinds| kinds.contains(&tag.kind()))
    }
}

/// Counts reported after a segment file has been processed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessSummary {
    /// Segments that decoded into a tag
    pub decoded: usize,
    /// Decoded tags that passed the kind filter and were written
    pub written: usize,
    /// Segments that were skipped because they failed to read or decode
    pub skipped: usize,
}

/// Processing strategy trait for the segment pipeline
pub trait ProcessingStrategy: Send + Sync {
    /// Decode the segments of `input_path` and write the tags to `output`
    ///
    /// # Errors
    ///
    /// Returns an error if the input file cannot be opened, if output cannot
    /// be written, or, depending on the strategy, if a segment fails to
    /// decode.
    fn process(&self, input_path: &Path, output: &mut dyn Write)
        -> Result<ProcessSummary, TagError>;
}

/// Decode one segment row through the factory
pub(crate) fn decode_segment(factory: &TagFactory, segment: &Segment) -> Result<Tag, TagError> {
    let record = &segment.record;
    factory.create_tag(&record.tag, record.sub_id.as_deref(), &record.value)
}

/// Create a processing strategy for the selected decode mode
pub fn create_strategy(mode: DecodeMode, config: ProcessingConfig) -> Box<dyn ProcessingStrategy> {
    match mode {
        DecodeMode::Strict => Box::new(StrictStrategy::new(config)),
        DecodeMode::Lenient => Box::new(LenientStrategy::new(config)),
    }
}
