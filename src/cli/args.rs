use crate::strategy::ProcessingConfig;
use crate::types::{TagError, TagKind};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Decode MT940 tag segments into a flat CSV of typed fields
#[derive(Parser, Debug)]
#[command(name = "mt940-tags")]
#[command(about = "Decode MT940 tag segments into typed fields", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing `tag,sub_id,value` segment rows
    #[arg(value_name = "INPUT", help = "Path to the input segment CSV file")]
    pub input_file: PathBuf,

    /// What to do with a segment that fails to decode
    #[arg(
        long = "mode",
        value_name = "MODE",
        default_value = "lenient",
        help = "Decode mode: 'lenient' skips bad segments, 'strict' stops at the first one"
    )]
    pub mode: DecodeMode,

    /// Tag identifiers to keep in the output
    #[arg(
        long = "kinds",
        value_name = "IDS",
        value_delimiter = ',',
        value_parser = parse_tag_kind,
        help = "Comma-separated tag identifiers to output, e.g. 60,61,62 (default: all)"
    )]
    pub kinds: Vec<TagKind>,
}

/// Available decode modes for the segment pipeline
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DecodeMode {
    Strict,
    Lenient,
}

fn parse_tag_kind(value: &str) -> Result<TagKind, String> {
    value.parse().map_err(|e: TagError| e.to_string())
}

impl CliArgs {
    /// Create a ProcessingConfig from CLI arguments
    ///
    /// An empty `--kinds` list means no filter.
    pub fn to_processing_config(&self) -> ProcessingConfig {
        ProcessingConfig {
            kinds: (!self.kinds.is_empty()).then(|| self.kinds.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::default_mode(&["program", "input.csv"], DecodeMode::Lenient)]
    #[case::explicit_strict(&["program", "--mode", "strict", "input.csv"], DecodeMode::Strict)]
    #[case::explicit_lenient(&["program", "--mode", "lenient", "input.csv"], DecodeMode::Lenient)]
    fn test_mode_parsing(#[case] args: &[&str], #[case] expected: DecodeMode) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.mode, expected);
    }

    #[rstest]
    #[case::no_filter(&["program", "input.csv"], None)]
    #[case::single_kind(&["program", "--kinds", "86", "input.csv"], Some(vec![TagKind::TransactionDetails]))]
    #[case::balances(
        &["program", "--kinds", "60,62", "input.csv"],
        Some(vec![TagKind::OpeningBalance, TagKind::ClosingBalance])
    )]
    #[case::non_swift(&["program", "--kinds", "NS", "input.csv"], Some(vec![TagKind::NonSwift]))]
    fn test_processing_config(#[case] args: &[&str], #[case] expected: Option<Vec<TagKind>>) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.to_processing_config().kinds, expected);
    }

    #[rstest]
    #[case::missing_input(&["program"])]
    #[case::invalid_mode(&["program", "--mode", "fast", "input.csv"])]
    #[case::unknown_kind(&["program", "--kinds", "99", "input.csv"])]
    #[case::lowercase_kind(&["program", "--kinds", "ns", "input.csv"])]
    fn test_invalid_arguments(#[case] args: &[&str]) {
        assert!(CliArgs::try_parse_from(args).is_err());
    }

    #[test]
    fn test_input_file_path() {
        let parsed = CliArgs::try_parse_from(["program", "data/segments.csv"]).unwrap();
        assert_eq!(parsed.input_file, PathBuf::from("data/segments.csv"));
    }
}
