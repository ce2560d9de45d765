//! Tag factory
//!
//! Selects the decoding rule for a tag identifier and runs it. The set of
//! identifiers is closed ([`TagKind`]); anything else is rejected before any
//! decoding happens.

use crate::core::traits::{DecodeError, TagVariant};
use crate::types::{
    AccountIdentification, ClosingAvailableBalance, ClosingBalance, ForwardAvailableBalance,
    NonSwift, OpeningBalance, RelatedReference, StatementLine, StatementNumber, Tag, TagError,
    TagFields, TagKind, TransactionDetails, TransactionReferenceNumber,
};

/// Stateless dispatcher from tag identifier to decoding rule
///
/// Holds no per-call state, so a single factory can be shared freely
/// between threads.
///
/// # Examples
///
/// ```
/// use mt940_tags::core::TagFactory;
/// use mt940_tags::types::TagFields;
///
/// let factory = TagFactory::new();
/// let tag = factory.create_tag("28", Some("C"), "998/1").unwrap();
///
/// match tag.fields() {
///     TagFields::StatementNumber(fields) => {
///         assert_eq!(fields.statement_number, "998");
///         assert_eq!(fields.sequence_number.as_deref(), Some("1"));
///     }
///     other => panic!("unexpected fields: {:?}", other),
/// }
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TagFactory;

impl TagFactory {
    pub fn new() -> Self {
        TagFactory
    }

    /// Decode one segment into a tag
    ///
    /// # Arguments
    ///
    /// * `identifier` - Tag identifier, matched exactly (`"61"`, `"NS"`, ...)
    /// * `sub_id` - Optional sub-identifier letter, kept on the tag as given
    /// * `raw_value` - Content with the `:identifier:` marker already stripped
    ///
    /// # Errors
    ///
    /// * `TagError::UnknownTag` if the identifier is not a known tag
    /// * `TagError::ParseError` if the content does not match the tag's shape
    pub fn create_tag(
        &self,
        identifier: &str,
        sub_id: Option<&str>,
        raw_value: &str,
    ) -> Result<Tag, TagError> {
        let kind: TagKind = identifier.parse()?;

        let decoded = match kind {
            TagKind::TransactionReferenceNumber => {
                decode_as::<TransactionReferenceNumber>(sub_id, raw_value)
            }
            TagKind::RelatedReference => decode_as::<RelatedReference>(sub_id, raw_value),
            TagKind::AccountIdentification => {
                decode_as::<AccountIdentification>(sub_id, raw_value)
            }
            TagKind::StatementNumber => decode_as::<StatementNumber>(sub_id, raw_value),
            TagKind::OpeningBalance => decode_as::<OpeningBalance>(sub_id, raw_value),
            TagKind::StatementLine => decode_as::<StatementLine>(sub_id, raw_value),
            TagKind::ClosingBalance => decode_as::<ClosingBalance>(sub_id, raw_value),
            TagKind::ClosingAvailableBalance => {
                decode_as::<ClosingAvailableBalance>(sub_id, raw_value)
            }
            TagKind::ForwardAvailableBalance => {
                decode_as::<ForwardAvailableBalance>(sub_id, raw_value)
            }
            TagKind::TransactionDetails => decode_as::<TransactionDetails>(sub_id, raw_value),
            TagKind::NonSwift => decode_as::<NonSwift>(sub_id, raw_value),
        };

        decoded
            .map(|fields| Tag::new(sub_id, fields))
            .map_err(|e| TagError::parse_error(identifier, raw_value, e.reason))
    }
}

fn decode_as<V: TagVariant>(
    sub_id: Option<&str>,
    raw_value: &str,
) -> Result<TagFields, DecodeError> {
    match V::decode(sub_id, raw_value) {
        Ok(fields) => {
            tracing::trace!(tag = V::KIND.id(), sub_id, "decoded {}", V::KIND.name());
            Ok(fields.into())
        }
        Err(e) => {
            tracing::debug!(
                tag = V::KIND.id(),
                value = raw_value,
                reason = %e,
                "rejected tag content"
            );
            Err(e)
        }
    }
}

/// Decode one segment with a default [`TagFactory`]
pub fn create_tag(
    identifier: &str,
    sub_id: Option<&str>,
    raw_value: &str,
) -> Result<Tag, TagError> {
    TagFactory::new().create_tag(identifier, sub_id, raw_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BalanceTag, DebitCredit};
    use chrono::NaiveDate;
    use rstest::rstest;
    use rust_decimal::Decimal;

    #[rstest]
    #[case::transaction_reference("20", "REFERENCE", TagKind::TransactionReferenceNumber)]
    #[case::related_reference("21", "REFERENCE", TagKind::RelatedReference)]
    #[case::account("25", "123456789", TagKind::AccountIdentification)]
    #[case::statement_number("28", "998/1", TagKind::StatementNumber)]
    #[case::opening_balance("60", "C160507EUR123,89", TagKind::OpeningBalance)]
    #[case::statement_line("61", "1605070507D123,89NTRFNONREF", TagKind::StatementLine)]
    #[case::closing_balance("62", "C160507EUR123,89", TagKind::ClosingBalance)]
    #[case::closing_available("64", "C160507EUR123,89", TagKind::ClosingAvailableBalance)]
    #[case::forward_available("65", "C160507EUR123,89", TagKind::ForwardAvailableBalance)]
    #[case::details("86", "Some text here", TagKind::TransactionDetails)]
    #[case::non_swift("NS", "XYZ", TagKind::NonSwift)]
    fn test_create_known_tags(#[case] id: &str, #[case] raw: &str, #[case] kind: TagKind) {
        let tag = TagFactory::new().create_tag(id, None, raw).unwrap();

        assert_eq!(tag.kind(), kind);
        assert_eq!(tag.id(), id);
        assert_eq!(tag.sub_id(), None);
    }

    #[test]
    fn test_create_balance_tag() {
        let tag = create_tag("60", Some("F"), "C160507EUR123,89").unwrap();

        assert_eq!(tag.sub_id(), Some("F"));
        match tag.fields() {
            TagFields::OpeningBalance(balance) => {
                assert_eq!(balance.mark, DebitCredit::Credit);
                assert_eq!(balance.date, NaiveDate::from_ymd_opt(2016, 5, 7).unwrap());
                assert_eq!(balance.currency, "EUR");
                assert_eq!(balance.balance().amount, Decimal::new(12389, 2));
            }
            other => panic!("expected opening balance, got {:?}", other),
        }
    }

    #[rstest]
    #[case::unknown("XX")]
    #[case::lowercase("ns")]
    #[case::combined_sub_id("28C")]
    #[case::empty("")]
    fn test_unknown_tag(#[case] id: &str) {
        let result = create_tag(id, None, "Some data");
        assert_eq!(result, Err(TagError::unknown_tag(id)));
    }

    #[test]
    fn test_unknown_tag_message() {
        let error = create_tag("XX", None, "Some data").unwrap_err();
        assert!(error.to_string().contains("Unknown tag"));
    }

    #[rstest]
    #[case::statement_number("28", "Some data")]
    #[case::opening_balance("60", "Some data")]
    #[case::statement_line("61", "Some data")]
    #[case::closing_balance("62", "C160507EUR")]
    #[case::closing_available("64", "C161307EUR1,00")]
    #[case::forward_available("65", "Z160507EUR1,00")]
    fn test_parse_error_carries_context(#[case] id: &str, #[case] raw: &str) {
        let error = create_tag(id, None, raw).unwrap_err();

        match &error {
            TagError::ParseError { tag, value, .. } => {
                assert_eq!(tag, id);
                assert_eq!(value, raw);
            }
            other => panic!("expected parse error, got {:?}", other),
        }
        assert!(error.to_string().contains("Cannot parse"));
    }

    #[test]
    fn test_sub_id_does_not_change_decoding() {
        let with = create_tag("28", Some("C"), "998/1").unwrap();
        let without = create_tag("28", None, "998/1").unwrap();

        assert_eq!(with.fields(), without.fields());
        assert_eq!(with.sub_id(), Some("C"));
    }

    #[test]
    fn test_factory_is_shareable_between_threads() {
        let factory = TagFactory::new();

        let handles: Vec<_> = (0..4)
            .map(|i| {
                std::thread::spawn(move || {
                    let raw = format!("C16050{}EUR1,00", i + 1);
                    factory.create_tag("62", None, &raw).map(|t| t.kind())
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), Ok(TagKind::ClosingBalance));
        }
    }
}
