//! Decoding rule for tag 61 (Statement Line)
//!
//! Content shape, in order:
//!
//! ```text
//! YYMMDD [MMDD] (D|C|RD|RC) [funds code] amount Nxxx reference [//bank reference] [\nextra details]
//! ```
//!
//! For example `1605070507D123,89NTRFNONREF//B4E07XM00J000023`.
//!
//! # Sign
//!
//! The amount is a magnitude. `D` makes it negative and `C` positive; a
//! leading `R` marks a reversal, which flips that natural sign once more:
//!
//! | segment | amount |
//! |---------|--------|
//! | `D`     | `-X`   |
//! | `C`     | `+X`   |
//! | `RD`    | `+X`   |
//! | `RC`    | `-X`   |
//!
//! # Entry date
//!
//! The optional `MMDD` entry date carries no year. It takes the value date's
//! year, or the year before when its month is later than the value date's
//! month (the booking happened before New Year, the value date after).

use crate::core::primitives::{infer_entry_date, parse_amount, parse_date};
use crate::core::traits::{DecodeError, TagVariant};
use crate::types::{DebitCredit, StatementLine, TagKind};
use regex::Regex;
use std::sync::LazyLock;

static STATEMENT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?P<date>[0-9]{6})",
        r"(?P<entry>[0-9]{4})?",
        r"(?P<reversal>R)?(?P<mark>[CD])",
        r"(?P<funds>[A-Z])?",
        r"(?P<amount>[0-9]+,[0-9]*)",
        r"(?P<type>N[A-Z0-9]{3})",
        r"(?P<rest>(?s:.*))$",
    ))
    .expect("statement line pattern is valid")
});

impl TagVariant for StatementLine {
    const KIND: TagKind = TagKind::StatementLine;

    fn decode(_sub_id: Option<&str>, raw: &str) -> Result<Self, DecodeError> {
        let captures = STATEMENT_LINE.captures(raw).ok_or_else(|| {
            DecodeError::new(
                "expected <YYMMDD>[MMDD]<D|C|RD|RC>[funds code]<amount>N<type><reference>",
            )
        })?;

        let date = parse_date(&captures["date"])?;
        let entry_date = match captures.name("entry") {
            Some(mmdd) => infer_entry_date(date, mmdd.as_str())?,
            None => date,
        };

        let is_reversal = captures.name("reversal").is_some();
        let mark = captures["mark"]
            .parse::<DebitCredit>()
            .map_err(DecodeError::new)?;
        let funds_code = captures
            .name("funds")
            .and_then(|m| m.as_str().chars().next());

        let effective = if is_reversal { mark.reversed() } else { mark };
        let amount = effective.sign(parse_amount(&captures["amount"])?);

        let (reference, bank_reference, extra_details) = split_references(&captures["rest"])?;

        Ok(StatementLine {
            date,
            entry_date,
            amount,
            mark,
            funds_code,
            is_reversal,
            transaction_type: captures["type"].to_string(),
            reference,
            bank_reference,
            extra_details,
        })
    }
}

/// Split the tail after the transaction type into its reference parts
///
/// The first line holds `reference[//bank reference]`; anything after the
/// first newline is kept verbatim as extra details. Without `//` the whole
/// first line is the reference.
fn split_references(
    rest: &str,
) -> Result<(String, Option<String>, Option<String>), DecodeError> {
    let (first_line, extra_details) = match rest.split_once('\n') {
        Some((line, extra)) => (line, Some(extra.to_string())),
        None => (rest, None),
    };
    let first_line = first_line.strip_suffix('\r').unwrap_or(first_line);

    let (reference, bank_reference) = match first_line.split_once("//") {
        Some((reference, bank)) => (reference, Some(bank).filter(|b| !b.is_empty())),
        None => (first_line, None),
    };

    if reference.is_empty() {
        return Err(DecodeError::new("missing reference after transaction type"));
    }

    Ok((
        reference.to_string(),
        bank_reference.map(str::to_string),
        extra_details,
    ))
}
