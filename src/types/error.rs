//! Error types for the MT940 tag decoder
//!
//! This module defines all error types that can occur while decoding tags
//! and while running the batch pipeline over a segment file.
//!
//! # Error Categories
//!
//! - **Tag Errors**: Unknown tag identifier, content that does not match the tag's shape
//! - **File I/O Errors**: File not found, permission denied, etc.
//! - **CSV Errors**: Malformed segment file rows
//! - **Segment Errors**: A tag error tied to the line of the segment file it came from

use thiserror::Error;

/// Main error type for the tag decoder
///
/// Each variant carries enough context (tag identifier, raw value, line number)
/// to diagnose the failing segment without re-reading the input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TagError {
    /// Tag identifier is not one of the known identifiers
    ///
    /// Always surfaced to the caller; the segment yields no tag.
    #[error("Unknown tag: {tag}")]
    UnknownTag {
        /// The identifier that was not recognised
        tag: String,
    },

    /// Tag identifier is known but its content does not match the expected shape
    ///
    /// Decoding is all-or-nothing: no partially filled tag is produced.
    #[error("Cannot parse tag {tag} ('{value}'): {reason}")]
    ParseError {
        /// Identifier of the tag being decoded
        tag: String,
        /// Raw content that was rejected
        value: String,
        /// Which part of the content was off-shape
        reason: String,
    },

    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// Segment file row could not be read
    #[error("CSV error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    CsvError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the CSV error
        message: String,
    },

    /// A segment failed to decode in strict mode
    #[error("Segment at line {line}: {source}")]
    SegmentFailed {
        /// Line of the segment file holding the failing segment
        line: u64,
        /// The underlying decoding error
        source: Box<TagError>,
    },
}

impl From<std::io::Error> for TagError {
    fn from(error: std::io::Error) -> Self {
        TagError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for TagError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        TagError::CsvError {
            line,
            message: error.to_string(),
        }
    }
}

impl TagError {
    /// Create an UnknownTag error
    pub fn unknown_tag(tag: &str) -> Self {
        TagError::UnknownTag {
            tag: tag.to_string(),
        }
    }

    /// Create a ParseError
    pub fn parse_error(tag: &str, value: &str, reason: impl Into<String>) -> Self {
        TagError::ParseError {
            tag: tag.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        TagError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Wrap a decoding error with the line of the segment it came from
    pub fn segment_failed(line: u64, source: TagError) -> Self {
        TagError::SegmentFailed {
            line,
            source: Box::new(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::unknown_tag(
        TagError::UnknownTag { tag: "XX".to_string() },
        "Unknown tag: XX"
    )]
    #[case::parse_error(
        TagError::ParseError {
            tag: "28".to_string(),
            value: "Some data".to_string(),
            reason: "expected <number>[/<sequence>]".to_string(),
        },
        "Cannot parse tag 28 ('Some data'): expected <number>[/<sequence>]"
    )]
    #[case::file_not_found(
        TagError::FileNotFound { path: "segments.csv".to_string() },
        "File not found: segments.csv"
    )]
    #[case::io_error(
        TagError::IoError { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::csv_error_with_line(
        TagError::CsvError { line: Some(7), message: "unequal lengths".to_string() },
        "CSV error at line 7: unequal lengths"
    )]
    #[case::csv_error_without_line(
        TagError::CsvError { line: None, message: "unequal lengths".to_string() },
        "CSV error: unequal lengths"
    )]
    #[case::segment_failed(
        TagError::segment_failed(3, TagError::unknown_tag("99")),
        "Segment at line 3: Unknown tag: 99"
    )]
    fn test_error_display(#[case] error: TagError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::unknown_tag(
        TagError::unknown_tag("XX"),
        TagError::UnknownTag { tag: "XX".to_string() }
    )]
    #[case::parse_error(
        TagError::parse_error("60", "C16", "too short"),
        TagError::ParseError { tag: "60".to_string(), value: "C16".to_string(), reason: "too short".to_string() }
    )]
    #[case::file_not_found(
        TagError::file_not_found("missing.csv"),
        TagError::FileNotFound { path: "missing.csv".to_string() }
    )]
    fn test_helper_functions(#[case] result: TagError, #[case] expected: TagError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: TagError = io_error.into();
        assert!(matches!(error, TagError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }

    #[test]
    fn test_parse_error_mentions_cannot_parse() {
        let error = TagError::parse_error("28", "Some data", "bad shape");
        assert!(error.to_string().starts_with("Cannot parse"));
    }
}
