//! Decoded field sets, one shape per tag variant
//!
//! These are plain records produced by the decoders in [`crate::core`].
//! A [`crate::types::Tag`] owns exactly one of them and only hands out
//! shared references, so fields never change after decoding.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Debit/credit indicator on a balance or a statement line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DebitCredit {
    /// `D`
    Debit,
    /// `C`
    Credit,
}

impl DebitCredit {
    /// The single-letter code as it appears in the tag content
    pub fn as_char(self) -> char {
        match self {
            DebitCredit::Debit => 'D',
            DebitCredit::Credit => 'C',
        }
    }

    /// The opposite mark, as applied by a reversal
    pub fn reversed(self) -> Self {
        match self {
            DebitCredit::Debit => DebitCredit::Credit,
            DebitCredit::Credit => DebitCredit::Debit,
        }
    }

    /// Apply the natural sign of the mark to a magnitude
    ///
    /// Debits are negative, credits positive. Zero is returned unchanged so
    /// that a debit of zero never turns into a negative zero.
    pub fn sign(self, magnitude: Decimal) -> Decimal {
        match self {
            DebitCredit::Debit if !magnitude.is_zero() => -magnitude,
            _ => magnitude,
        }
    }
}

impl fmt::Display for DebitCredit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for DebitCredit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "D" => Ok(DebitCredit::Debit),
            "C" => Ok(DebitCredit::Credit),
            _ => Err(format!("invalid debit/credit mark '{}'", s)),
        }
    }
}

/// Tag 20: Transaction Reference Number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionReferenceNumber {
    pub transaction_reference: String,
}

/// Tag 21: Related Reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedReference {
    pub related_reference: String,
}

/// Tag 25: Account Identification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountIdentification {
    pub account_identification: String,
}

/// Tag 28: Statement Number / Sequence Number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementNumber {
    pub statement_number: String,
    /// Absent when the content has no `/<sequence>` part
    pub sequence_number: Option<String>,
}

/// Tag NS: bank-specific non-SWIFT content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonSwift {
    pub non_swift: String,
}

/// Tag 86: Information to Account Owner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDetails {
    pub transaction_details: String,
}

/// Shared shape of the four balance tags (60, 62, 64, 65)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceFields {
    /// Debit/credit mark, stored as decoded
    pub mark: DebitCredit,

    /// Balance date; the two-digit year is read as 20YY
    pub date: NaiveDate,

    /// Three-letter currency code
    pub currency: String,

    /// Non-negative amount; the mark carries the direction
    pub amount: Decimal,
}

impl BalanceFields {
    /// Amount with the mark applied: debit balances come out negative
    pub fn signed_amount(&self) -> Decimal {
        self.mark.sign(self.amount)
    }
}

pub(crate) mod sealed {
    use super::BalanceFields;

    /// Construction hook for balance variants, reachable only inside the crate
    pub trait FromBalance {
        fn from_balance(fields: BalanceFields) -> Self;
    }
}

/// Contract shared by the balance tags
///
/// A balance tag is only ever one of the four concrete variants; the shared
/// shape is reachable through this trait but cannot be built on its own.
///
/// ```compile_fail
/// use mt940_tags::types::{BalanceFields, DebitCredit, OpeningBalance};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let fields = BalanceFields {
///     mark: DebitCredit::Credit,
///     date: NaiveDate::from_ymd_opt(2016, 5, 7).unwrap(),
///     currency: "EUR".to_string(),
///     amount: Decimal::new(12389, 2),
/// };
/// // The inner value is private: balance tags only come out of the decoder.
/// let tag = OpeningBalance(fields);
/// ```
pub trait BalanceTag: sealed::FromBalance {
    /// The decoded balance
    fn balance(&self) -> &BalanceFields;
}

macro_rules! balance_variant {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name(BalanceFields);

        impl BalanceTag for $name {
            fn balance(&self) -> &BalanceFields {
                &self.0
            }
        }

        impl sealed::FromBalance for $name {
            fn from_balance(fields: BalanceFields) -> Self {
                $name(fields)
            }
        }

        impl std::ops::Deref for $name {
            type Target = BalanceFields;

            fn deref(&self) -> &BalanceFields {
                &self.0
            }
        }
    };
}

balance_variant!(
    /// Tag 60: Opening Balance
    OpeningBalance
);
balance_variant!(
    /// Tag 62: Closing Balance (booked funds)
    ClosingBalance
);
balance_variant!(
    /// Tag 64: Closing Available Balance
    ClosingAvailableBalance
);
balance_variant!(
    /// Tag 65: Forward Available Balance
    ForwardAvailableBalance
);

/// Tag 61: Statement Line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementLine {
    /// Value date
    pub date: NaiveDate,

    /// Entry (booking) date; equals `date` when the content has no entry date
    pub entry_date: NaiveDate,

    /// Signed amount: the mark's natural sign, flipped once more for reversals
    pub amount: Decimal,

    /// The non-`R` letter of the sign segment
    pub mark: DebitCredit,

    /// Optional funds code letter following the sign segment, as decoded
    pub funds_code: Option<char>,

    /// True when the sign segment starts with `R`
    pub is_reversal: bool,

    /// Four characters starting with `N`, e.g. `NTRF`
    pub transaction_type: String,

    /// Reference for the account owner
    pub reference: String,

    /// Reference of the account servicing institution (after `//`)
    pub bank_reference: Option<String>,

    /// Everything after the first newline
    pub extra_details: Option<String>,
}

impl StatementLine {
    /// Whether the line moves money into the account once reversal is applied
    pub fn is_credit(&self) -> bool {
        self.amount > Decimal::ZERO
    }
}
