//! Streaming CSV reader over a segment file
//!
//! Provides an iterator over the segments handed over by document
//! segmentation, one `tag,sub_id,value` row at a time.
//!
//! # Iterator Interface
//!
//! SegmentReader implements the Iterator trait, yielding
//! `Result<Segment, TagError>` for each CSV row:
//!
//! ```no_run
//! use mt940_tags::io::SegmentReader;
//! use std::path::Path;
//!
//! let reader = SegmentReader::new(Path::new("segments.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(segment) => println!("line {}: tag {}", segment.line, segment.record.tag),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, unreadable header) are returned from `new()`
//! - Malformed rows are yielded as Err variants and iteration continues
//! - I/O errors while reading end the iteration after being yielded once
//!
//! Values are never trimmed: leading and trailing spaces and embedded
//! newlines are part of the tag content.

use crate::io::csv_format::SegmentRecord;
use crate::types::TagError;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// One row of the segment file together with the line it starts on
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub line: u64,
    pub record: SegmentRecord,
}

/// Streaming reader over segment rows
#[derive(Debug)]
pub struct SegmentReader<R = File> {
    reader: csv::Reader<R>,
    headers: StringRecord,
    done: bool,
}

impl SegmentReader<File> {
    /// Open a segment file
    ///
    /// # Returns
    ///
    /// * `Ok(SegmentReader)` if the file opened and its header row was read
    /// * `Err(TagError::FileNotFound)` if there is no file at `path`
    /// * `Err(TagError)` for any other I/O or CSV failure
    pub fn new(path: &Path) -> Result<Self, TagError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => TagError::file_not_found(&path.display().to_string()),
            _ => TagError::IoError {
                message: format!("Failed to open file '{}': {}", path.display(), e),
            },
        })?;

        Self::from_reader(file)
    }
}

impl<R: Read> SegmentReader<R> {
    /// Read segments from any byte source
    pub fn from_reader(source: R) -> Result<Self, TagError> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::Headers)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(source);

        let headers = reader.headers()?.clone();

        Ok(Self {
            reader,
            headers,
            done: false,
        })
    }
}

impl<R: Read> Iterator for SegmentReader<R> {
    type Item = Result<Segment, TagError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut row = StringRecord::new();
        match self.reader.read_record(&mut row) {
            Ok(false) => {
                self.done = true;
                None
            }
            Ok(true) => {
                let line = row.position().map(|pos| pos.line()).unwrap_or_default();
                Some(
                    row.deserialize::<SegmentRecord>(Some(&self.headers))
                        .map(|record| Segment { line, record })
                        .map_err(|e| TagError::CsvError {
                            line: Some(line),
                            message: e.to_string(),
                        }),
                )
            }
            Err(e) => {
                if e.is_io_error() {
                    self.done = true;
                }
                Some(Err(e.into()))
            }
        }
    }
}
