//! Tag identity and the decoded tag value
//!
//! [`TagKind`] is the closed set of identifiers the decoder understands.
//! [`TagFields`] is the matching sum type of field sets, and [`Tag`] ties a
//! decoded field set to the sub-identifier it was read with.

use super::error::TagError;
use super::fields::{
    AccountIdentification, BalanceFields, BalanceTag, ClosingAvailableBalance, ClosingBalance,
    ForwardAvailableBalance, NonSwift, OpeningBalance, RelatedReference, StatementLine,
    StatementNumber, TransactionDetails, TransactionReferenceNumber,
};
use std::fmt;
use std::str::FromStr;

/// Known tag identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// `20`
    TransactionReferenceNumber,
    /// `21`
    RelatedReference,
    /// `25`
    AccountIdentification,
    /// `28`
    StatementNumber,
    /// `60`
    OpeningBalance,
    /// `61`
    StatementLine,
    /// `62`
    ClosingBalance,
    /// `64`
    ClosingAvailableBalance,
    /// `65`
    ForwardAvailableBalance,
    /// `86`
    TransactionDetails,
    /// `NS`
    NonSwift,
}

impl TagKind {
    /// Every known kind, in identifier order
    pub const ALL: [TagKind; 11] = [
        TagKind::TransactionReferenceNumber,
        TagKind::RelatedReference,
        TagKind::AccountIdentification,
        TagKind::StatementNumber,
        TagKind::OpeningBalance,
        TagKind::StatementLine,
        TagKind::ClosingBalance,
        TagKind::ClosingAvailableBalance,
        TagKind::ForwardAvailableBalance,
        TagKind::TransactionDetails,
        TagKind::NonSwift,
    ];

    /// Identifier as it appears between the colons of a tag marker
    pub fn id(self) -> &'static str {
        match self {
            TagKind::TransactionReferenceNumber => "20",
            TagKind::RelatedReference => "21",
            TagKind::AccountIdentification => "25",
            TagKind::StatementNumber => "28",
            TagKind::OpeningBalance => "60",
            TagKind::StatementLine => "61",
            TagKind::ClosingBalance => "62",
            TagKind::ClosingAvailableBalance => "64",
            TagKind::ForwardAvailableBalance => "65",
            TagKind::TransactionDetails => "86",
            TagKind::NonSwift => "NS",
        }
    }

    /// Human-readable name of the tag
    pub fn name(self) -> &'static str {
        match self {
            TagKind::TransactionReferenceNumber => "TransactionReferenceNumber",
            TagKind::RelatedReference => "RelatedReference",
            TagKind::AccountIdentification => "AccountIdentification",
            TagKind::StatementNumber => "StatementNumber",
            TagKind::OpeningBalance => "OpeningBalance",
            TagKind::StatementLine => "StatementLine",
            TagKind::ClosingBalance => "ClosingBalance",
            TagKind::ClosingAvailableBalance => "ClosingAvailableBalance",
            TagKind::ForwardAvailableBalance => "ForwardAvailableBalance",
            TagKind::TransactionDetails => "TransactionDetails",
            TagKind::NonSwift => "NonSwift",
        }
    }

    /// Whether the kind uses the shared balance shape
    pub fn is_balance(self) -> bool {
        matches!(
            self,
            TagKind::OpeningBalance
                | TagKind::ClosingBalance
                | TagKind::ClosingAvailableBalance
                | TagKind::ForwardAvailableBalance
        )
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for TagKind {
    type Err = TagError;

    /// Exact, case-sensitive match against the known identifiers
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TagKind::ALL
            .into_iter()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| TagError::unknown_tag(s))
    }
}

/// Decoded fields, one variant per tag kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagFields {
    TransactionReferenceNumber(TransactionReferenceNumber),
    RelatedReference(RelatedReference),
    AccountIdentification(AccountIdentification),
    StatementNumber(StatementNumber),
    OpeningBalance(OpeningBalance),
    StatementLine(StatementLine),
    ClosingBalance(ClosingBalance),
    ClosingAvailableBalance(ClosingAvailableBalance),
    ForwardAvailableBalance(ForwardAvailableBalance),
    TransactionDetails(TransactionDetails),
    NonSwift(NonSwift),
}

impl TagFields {
    /// Kind of tag these fields belong to
    pub fn kind(&self) -> TagKind {
        match self {
            TagFields::TransactionReferenceNumber(_) => TagKind::TransactionReferenceNumber,
            TagFields::RelatedReference(_) => TagKind::RelatedReference,
            TagFields::AccountIdentification(_) => TagKind::AccountIdentification,
            TagFields::StatementNumber(_) => TagKind::StatementNumber,
            TagFields::OpeningBalance(_) => TagKind::OpeningBalance,
            TagFields::StatementLine(_) => TagKind::StatementLine,
            TagFields::ClosingBalance(_) => TagKind::ClosingBalance,
            TagFields::ClosingAvailableBalance(_) => TagKind::ClosingAvailableBalance,
            TagFields::ForwardAvailableBalance(_) => TagKind::ForwardAvailableBalance,
            TagFields::TransactionDetails(_) => TagKind::TransactionDetails,
            TagFields::NonSwift(_) => TagKind::NonSwift,
        }
    }

    /// The balance shape, for the four balance kinds
    pub fn balance(&self) -> Option<&BalanceFields> {
        match self {
            TagFields::OpeningBalance(b) => Some(b.balance()),
            TagFields::ClosingBalance(b) => Some(b.balance()),
            TagFields::ClosingAvailableBalance(b) => Some(b.balance()),
            TagFields::ForwardAvailableBalance(b) => Some(b.balance()),
            _ => None,
        }
    }

    /// The statement line, for tag 61
    pub fn statement_line(&self) -> Option<&StatementLine> {
        match self {
            TagFields::StatementLine(line) => Some(line),
            _ => None,
        }
    }
}

macro_rules! fields_from {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for TagFields {
                fn from(fields: $variant) -> Self {
                    TagFields::$variant(fields)
                }
            }
        )*
    };
}

fields_from!(
    TransactionReferenceNumber,
    RelatedReference,
    AccountIdentification,
    StatementNumber,
    OpeningBalance,
    StatementLine,
    ClosingBalance,
    ClosingAvailableBalance,
    ForwardAvailableBalance,
    TransactionDetails,
    NonSwift,
);

/// One decoded tag
///
/// Tags are produced by [`crate::core::TagFactory`] only; the fields are
/// private and exposed read-only, so a tag is never observable half-built.
///
/// ```compile_fail
/// use mt940_tags::types::{NonSwift, Tag, TagFields};
///
/// let tag = Tag {
///     sub_id: None,
///     fields: TagFields::NonSwift(NonSwift { non_swift: "XYZ".to_string() }),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    sub_id: Option<String>,
    fields: TagFields,
}

impl Tag {
    pub(crate) fn new(sub_id: Option<&str>, fields: TagFields) -> Self {
        Tag {
            sub_id: sub_id.map(str::to_string),
            fields,
        }
    }

    pub fn kind(&self) -> TagKind {
        self.fields.kind()
    }

    /// Identifier of the tag, e.g. `"61"`
    pub fn id(&self) -> &'static str {
        self.kind().id()
    }

    /// Sub-identifier letter (the `F` in `60F`), if the segment had one
    pub fn sub_id(&self) -> Option<&str> {
        self.sub_id.as_deref()
    }

    pub fn fields(&self) -> &TagFields {
        &self.fields
    }

    pub fn into_fields(self) -> TagFields {
        self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::reference("20", TagKind::TransactionReferenceNumber)]
    #[case::related("21", TagKind::RelatedReference)]
    #[case::account("25", TagKind::AccountIdentification)]
    #[case::statement_number("28", TagKind::StatementNumber)]
    #[case::opening("60", TagKind::OpeningBalance)]
    #[case::statement_line("61", TagKind::StatementLine)]
    #[case::closing("62", TagKind::ClosingBalance)]
    #[case::closing_available("64", TagKind::ClosingAvailableBalance)]
    #[case::forward_available("65", TagKind::ForwardAvailableBalance)]
    #[case::details("86", TagKind::TransactionDetails)]
    #[case::non_swift("NS", TagKind::NonSwift)]
    fn test_kind_from_id(#[case] id: &str, #[case] expected: TagKind) {
        let kind: TagKind = id.parse().unwrap();
        assert_eq!(kind, expected);
        assert_eq!(kind.id(), id);
        assert_eq!(kind.to_string(), id);
    }

    #[rstest]
    #[case::unknown("XX")]
    #[case::lowercase("ns")]
    #[case::with_sub_id("60F")]
    #[case::padded(" 20")]
    #[case::empty("")]
    fn test_kind_from_unknown_id(#[case] id: &str) {
        let result = id.parse::<TagKind>();
        assert_eq!(result, Err(TagError::unknown_tag(id)));
    }

    #[test]
    fn test_balance_kinds() {
        let balances: Vec<_> = TagKind::ALL.into_iter().filter(|k| k.is_balance()).collect();
        assert_eq!(
            balances,
            vec![
                TagKind::OpeningBalance,
                TagKind::ClosingBalance,
                TagKind::ClosingAvailableBalance,
                TagKind::ForwardAvailableBalance,
            ]
        );
    }

    #[test]
    fn test_tag_accessors() {
        let tag = Tag::new(
            Some("C"),
            TagFields::StatementNumber(StatementNumber {
                statement_number: "998".to_string(),
                sequence_number: Some("1".to_string()),
            }),
        );

        assert_eq!(tag.kind(), TagKind::StatementNumber);
        assert_eq!(tag.id(), "28");
        assert_eq!(tag.sub_id(), Some("C"));
        assert!(tag.fields().balance().is_none());
        assert!(tag.fields().statement_line().is_none());
    }

    #[test]
    fn test_into_fields_hands_over_the_decoded_fields() {
        let fields = TagFields::NonSwift(NonSwift {
            non_swift: "XYZ".to_string(),
        });
        let tag = Tag::new(None, fields.clone());

        assert_eq!(tag.into_fields(), fields);
    }
}
