//! CSV format handling for segment input and decoded tag output
//!
//! This module centralizes all CSV format concerns, providing:
//! - SegmentRecord structure for deserialization of the segment file
//! - TagRow, the flat output shape of a decoded tag
//! - Decoded tag output serialization
//!
//! All functions except the writer are pure (no I/O) for easy testing.

use crate::types::{BalanceFields, BalanceTag, Tag, TagError, TagFields};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// One segment as handed over by document segmentation
///
/// Matches the input CSV format with columns: tag, sub_id, value.
/// An empty `sub_id` cell means the segment had no sub-identifier.
/// `value` is kept verbatim and may span several lines when quoted.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SegmentRecord {
    pub tag: String,
    #[serde(default)]
    pub sub_id: Option<String>,
    pub value: String,
}

/// Columns of the decoded tag output, in order
pub const TAG_ROW_HEADER: [&str; 16] = [
    "tag",
    "sub_id",
    "kind",
    "mark",
    "date",
    "entry_date",
    "currency",
    "amount",
    "funds_code",
    "reversal",
    "transaction_type",
    "reference",
    "bank_reference",
    "statement_number",
    "sequence_number",
    "text",
];

/// Flat output row for one decoded tag
///
/// Columns a tag kind does not have are left empty. Scalar tags put their
/// value in `text`; statement lines put their extra details there.
#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct TagRow {
    pub tag: String,
    pub sub_id: Option<String>,
    pub kind: String,
    pub mark: Option<String>,
    pub date: Option<String>,
    pub entry_date: Option<String>,
    pub currency: Option<String>,
    pub amount: Option<String>,
    pub funds_code: Option<String>,
    pub reversal: Option<bool>,
    pub transaction_type: Option<String>,
    pub reference: Option<String>,
    pub bank_reference: Option<String>,
    pub statement_number: Option<String>,
    pub sequence_number: Option<String>,
    pub text: Option<String>,
}

const DATE_FORMAT: &str = "%Y-%m-%d";

impl TagRow {
    fn with_balance(mut self, balance: &BalanceFields) -> Self {
        self.mark = Some(balance.mark.to_string());
        self.date = Some(balance.date.format(DATE_FORMAT).to_string());
        self.currency = Some(balance.currency.clone());
        self.amount = Some(balance.amount.to_string());
        self
    }

    fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }
}

impl From<&Tag> for TagRow {
    fn from(tag: &Tag) -> Self {
        let row = TagRow {
            tag: tag.id().to_string(),
            sub_id: tag.sub_id().map(str::to_string),
            kind: tag.kind().name().to_string(),
            ..TagRow::default()
        };

        match tag.fields() {
            TagFields::TransactionReferenceNumber(f) => row.with_text(&f.transaction_reference),
            TagFields::RelatedReference(f) => row.with_text(&f.related_reference),
            TagFields::AccountIdentification(f) => row.with_text(&f.account_identification),
            TagFields::TransactionDetails(f) => row.with_text(&f.transaction_details),
            TagFields::NonSwift(f) => row.with_text(&f.non_swift),
            TagFields::StatementNumber(f) => TagRow {
                statement_number: Some(f.statement_number.clone()),
                sequence_number: f.sequence_number.clone(),
                ..row
            },
            TagFields::OpeningBalance(b) => row.with_balance(b.balance()),
            TagFields::ClosingBalance(b) => row.with_balance(b.balance()),
            TagFields::ClosingAvailableBalance(b) => row.with_balance(b.balance()),
            TagFields::ForwardAvailableBalance(b) => row.with_balance(b.balance()),
            TagFields::StatementLine(line) => TagRow {
                mark: Some(line.mark.to_string()),
                date: Some(line.date.format(DATE_FORMAT).to_string()),
                entry_date: Some(line.entry_date.format(DATE_FORMAT).to_string()),
                amount: Some(line.amount.to_string()),
                funds_code: line.funds_code.map(String::from),
                reversal: Some(line.is_reversal),
                transaction_type: Some(line.transaction_type.clone()),
                reference: Some(line.reference.clone()),
                bank_reference: line.bank_reference.clone(),
                text: line.extra_details.clone(),
                ..row
            },
        }
    }
}

/// Write decoded tags to CSV format
///
/// Writes the header row followed by one row per tag, in the order given.
///
/// # Arguments
///
/// * `tags` - Slice of decoded tags to write
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(TagError)` if a write error occurred
pub fn write_tags_csv(tags: &[Tag], output: &mut dyn Write) -> Result<(), TagError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(output);

    writer.write_record(TAG_ROW_HEADER)?;

    for tag in tags {
        writer.serialize(TagRow::from(tag))?;
    }

    writer.flush()?;

    Ok(())
}
