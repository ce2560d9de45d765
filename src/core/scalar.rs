//! Decoding rules for the single-value tags (20, 21, 25, 28, 86, NS)
//!
//! All but the statement number copy the content verbatim.

use crate::core::traits::{DecodeError, TagVariant};
use crate::types::{
    AccountIdentification, NonSwift, RelatedReference, StatementNumber, TagKind,
    TransactionDetails, TransactionReferenceNumber,
};
use regex::Regex;
use std::sync::LazyLock;

macro_rules! verbatim_variant {
    ($variant:ident, $field:ident) => {
        impl TagVariant for $variant {
            const KIND: TagKind = TagKind::$variant;

            fn decode(_sub_id: Option<&str>, raw: &str) -> Result<Self, DecodeError> {
                Ok($variant {
                    $field: raw.to_string(),
                })
            }
        }
    };
}

verbatim_variant!(TransactionReferenceNumber, transaction_reference);
verbatim_variant!(RelatedReference, related_reference);
verbatim_variant!(AccountIdentification, account_identification);
verbatim_variant!(TransactionDetails, transaction_details);
verbatim_variant!(NonSwift, non_swift);

static STATEMENT_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<number>[0-9]{1,5})(?:/(?P<sequence>[0-9]{1,5}))?$")
        .expect("statement number pattern is valid")
});

impl TagVariant for StatementNumber {
    const KIND: TagKind = TagKind::StatementNumber;

    /// `<number>[/<sequence>]`, each part 1 to 5 digits
    fn decode(_sub_id: Option<&str>, raw: &str) -> Result<Self, DecodeError> {
        let captures = STATEMENT_NUMBER
            .captures(raw)
            .ok_or_else(|| DecodeError::new("expected <number>[/<sequence>] of up to 5 digits each"))?;

        Ok(StatementNumber {
            statement_number: captures["number"].to_string(),
            sequence_number: captures.name("sequence").map(|m| m.as_str().to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_verbatim_variants_keep_content() {
        let raw = "  REF/with spaces\nand a second line ";

        assert_eq!(
            TransactionReferenceNumber::decode(None, raw).unwrap().transaction_reference,
            raw
        );
        assert_eq!(RelatedReference::decode(None, raw).unwrap().related_reference, raw);
        assert_eq!(
            AccountIdentification::decode(None, raw).unwrap().account_identification,
            raw
        );
        assert_eq!(TransactionDetails::decode(None, raw).unwrap().transaction_details, raw);
        assert_eq!(NonSwift::decode(None, raw).unwrap().non_swift, raw);
    }

    #[test]
    fn test_verbatim_variant_accepts_empty_content() {
        assert_eq!(NonSwift::decode(None, "").unwrap().non_swift, "");
    }

    #[rstest]
    #[case::with_sequence("998/1", "998", Some("1"))]
    #[case::without_sequence("00001", "00001", None)]
    #[case::padded_sequence("00001/001", "00001", Some("001"))]
    fn test_statement_number(
        #[case] raw: &str,
        #[case] number: &str,
        #[case] sequence: Option<&str>,
    ) {
        let fields = StatementNumber::decode(Some("C"), raw).unwrap();
        assert_eq!(fields.statement_number, number);
        assert_eq!(fields.sequence_number.as_deref(), sequence);
    }

    #[rstest]
    #[case::free_text("Some data")]
    #[case::empty("")]
    #[case::empty_number("/1")]
    #[case::trailing_slash("998/")]
    #[case::two_slashes("998/1/2")]
    #[case::letters("99A/1")]
    #[case::too_long("123456/1")]
    #[case::trailing_newline("998/1\n")]
    fn test_statement_number_rejects(#[case] raw: &str) {
        assert!(StatementNumber::decode(None, raw).is_err());
    }
}
