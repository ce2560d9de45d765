//! I/O module
//!
//! Handles the segment CSV input and the decoded tag CSV output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (segment records, output rows, output serialization)
//! - `segment_reader` - Streaming segment reader with iterator interface

pub mod csv_format;
pub mod segment_reader;

pub use csv_format::{write_tags_csv, SegmentRecord, TagRow, TAG_ROW_HEADER};
pub use segment_reader::{Segment, SegmentReader};
