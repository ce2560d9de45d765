//! Shared decoding rule for the balance tags (60, 62, 64, 65)
//!
//! Content shape: `<C|D><YYMMDD><CCY><amount>`, e.g. `C160507EUR123,89`.
//! The four balance tags differ only in identifier, never in field shape.

use crate::core::primitives::{parse_amount, parse_date};
use crate::core::traits::{DecodeError, TagVariant};
use crate::types::fields::sealed::FromBalance;
use crate::types::{
    BalanceFields, ClosingAvailableBalance, ClosingBalance, DebitCredit, ForwardAvailableBalance,
    OpeningBalance, TagKind,
};
use regex::Regex;
use std::sync::LazyLock;

static BALANCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<mark>[CD])(?P<date>[0-9]{6})(?P<currency>[A-Z]{3})(?P<amount>[0-9]+,[0-9]*)$",
    )
    .expect("balance pattern is valid")
});

/// Decode the content of any balance tag
pub fn decode_balance(raw: &str) -> Result<BalanceFields, DecodeError> {
    let captures = BALANCE.captures(raw).ok_or_else(|| {
        DecodeError::new("expected <C|D><YYMMDD><currency><amount>, e.g. C160507EUR123,89")
    })?;

    let mark = captures["mark"]
        .parse::<DebitCredit>()
        .map_err(DecodeError::new)?;
    let date = parse_date(&captures["date"])?;
    let amount = parse_amount(&captures["amount"])?;

    Ok(BalanceFields {
        mark,
        date,
        currency: captures["currency"].to_string(),
        amount,
    })
}

macro_rules! balance_rule {
    ($($variant:ident),* $(,)?) => {
        $(
            impl TagVariant for $variant {
                const KIND: TagKind = TagKind::$variant;

                fn decode(_sub_id: Option<&str>, raw: &str) -> Result<Self, DecodeError> {
                    decode_balance(raw).map($variant::from_balance)
                }
            }
        )*
    };
}

balance_rule!(
    OpeningBalance,
    ClosingBalance,
    ClosingAvailableBalance,
    ForwardAvailableBalance,
);
