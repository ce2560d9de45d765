//! Primitive decoders shared by the balance and statement-line rules
//!
//! All functions are pure and validate their own input, so they are safe to
//! call on slices that did not come out of a pattern match.

use crate::core::traits::DecodeError;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use std::str::FromStr;

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn two_digits(s: &str) -> u32 {
    // Callers have checked the slice is ASCII digits.
    s.bytes().fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}

/// Decode a `YYMMDD` date; the year is always taken as 20YY
pub fn parse_date(yymmdd: &str) -> Result<NaiveDate, DecodeError> {
    if yymmdd.len() != 6 || !all_digits(yymmdd) {
        return Err(DecodeError::new(format!(
            "date '{}' is not in YYMMDD form",
            yymmdd
        )));
    }

    let year = 2000 + two_digits(&yymmdd[0..2]) as i32;
    let month = two_digits(&yymmdd[2..4]);
    let day = two_digits(&yymmdd[4..6]);

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| DecodeError::new(format!("date '{}' is not a calendar date", yymmdd)))
}

/// Decode an `MMDD` entry date relative to the value date it belongs to
///
/// An entry month later in the year than the value date's month means the
/// entry was booked in the previous year (statement in January, entry on
/// 30 December).
pub fn infer_entry_date(value_date: NaiveDate, mmdd: &str) -> Result<NaiveDate, DecodeError> {
    if mmdd.len() != 4 || !all_digits(mmdd) {
        return Err(DecodeError::new(format!(
            "entry date '{}' is not in MMDD form",
            mmdd
        )));
    }

    let month = two_digits(&mmdd[0..2]);
    let day = two_digits(&mmdd[2..4]);
    let year = if month > value_date.month() {
        value_date.year() - 1
    } else {
        value_date.year()
    };

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        DecodeError::new(format!(
            "entry date '{}' is not a calendar date in {}",
            mmdd, year
        ))
    })
}

/// Widest amount field, comma included
pub const MAX_AMOUNT_LEN: usize = 15;

/// Decode an amount written with a decimal comma, e.g. `123,89` or `100,`
///
/// Only digits and exactly one comma are accepted, at most
/// [`MAX_AMOUNT_LEN`] characters; the result is never negative and keeps
/// every written digit.
pub fn parse_amount(amount: &str) -> Result<Decimal, DecodeError> {
    let malformed = || DecodeError::new(format!("amount '{}' is malformed", amount));

    if amount.len() > MAX_AMOUNT_LEN {
        return Err(DecodeError::new(format!(
            "amount '{}' is longer than {} characters",
            amount, MAX_AMOUNT_LEN
        )));
    }

    let (whole, fraction) = amount.split_once(',').ok_or_else(malformed)?;
    if !all_digits(whole) || !(fraction.is_empty() || all_digits(fraction)) {
        return Err(malformed());
    }

    let normalized = if fraction.is_empty() {
        whole.to_string()
    } else {
        format!("{}.{}", whole, fraction)
    };

    Decimal::from_str(&normalized)
        .map_err(|e| DecodeError::new(format!("amount '{}' is out of range: {}", amount, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case::regular("160507", date(2016, 5, 7))]
    #[case::new_year("210101", date(2021, 1, 1))]
    #[case::leap_day("200229", date(2020, 2, 29))]
    #[case::high_year("991231", date(2099, 12, 31))]
    fn test_parse_date(#[case] input: &str, #[case] expected: NaiveDate) {
        assert_eq!(parse_date(input).unwrap(), expected);
    }

    #[rstest]
    #[case::too_short("16050")]
    #[case::too_long("1605070")]
    #[case::letters("16O507")]
    #[case::signed("+60507")]
    #[case::month_thirteen("161307")]
    #[case::day_zero("160500")]
    #[case::not_leap("210229")]
    fn test_parse_date_rejects(#[case] input: &str) {
        assert!(parse_date(input).is_err());
    }

    #[rstest]
    #[case::same_day(date(2016, 5, 7), "0507", date(2016, 5, 7))]
    #[case::earlier_same_year(date(2016, 5, 7), "0430", date(2016, 4, 30))]
    #[case::previous_year(date(2021, 1, 1), "1230", date(2020, 12, 30))]
    #[case::later_day_same_month(date(2016, 5, 7), "0509", date(2016, 5, 9))]
    fn test_infer_entry_date(
        #[case] value_date: NaiveDate,
        #[case] mmdd: &str,
        #[case] expected: NaiveDate,
    ) {
        assert_eq!(infer_entry_date(value_date, mmdd).unwrap(), expected);
    }

    #[rstest]
    #[case::letters(date(2016, 5, 7), "05O7")]
    #[case::short(date(2016, 5, 7), "057")]
    #[case::impossible(date(2016, 5, 7), "0231")]
    #[case::leap_day_in_inferred_year(date(2022, 1, 5), "0229")]
    fn test_infer_entry_date_rejects(#[case] value_date: NaiveDate, #[case] mmdd: &str) {
        assert!(infer_entry_date(value_date, mmdd).is_err());
    }

    #[rstest]
    #[case::cents("123,89", Decimal::new(12389, 2))]
    #[case::leading_zeros("000000001001,69", Decimal::new(100169, 2))]
    #[case::no_fraction("100,", Decimal::new(100, 0))]
    #[case::zero("0,00", Decimal::ZERO)]
    #[case::one_digit_fraction("5,5", Decimal::new(55, 1))]
    #[case::full_width("123456789012,45", Decimal::new(12345678901245, 2))]
    #[case::full_width_fraction("1,2345678901234", Decimal::new(12345678901234, 13))]
    fn test_parse_amount(#[case] input: &str, #[case] expected: Decimal) {
        assert_eq!(parse_amount(input).unwrap(), expected);
    }

    #[rstest]
    #[case::dot_separator("123.89")]
    #[case::no_separator("12389")]
    #[case::thousands("1.234,56")]
    #[case::two_commas("1,234,56")]
    #[case::negative("-123,89")]
    #[case::empty_whole(",89")]
    #[case::empty("")]
    #[case::spaces("12 3,89")]
    #[case::too_precise("1,123456789012345678901234567891234")]
    #[case::too_wide("1234567890123,45")]
    fn test_parse_amount_rejects(#[case] input: &str) {
        assert!(parse_amount(input).is_err());
    }
}
