//! Types module
//!
//! Contains the data structures shared across the crate:
//! - `tag`: Tag identity (`TagKind`), the decoded sum type (`TagFields`) and `Tag`
//! - `fields`: One field set per tag variant, plus the shared balance shape
//! - `error`: Error types for decoding and the batch pipeline

pub mod error;
pub mod fields;
pub mod tag;

pub use error::TagError;
pub use fields::{
    AccountIdentification, BalanceFields, BalanceTag, ClosingAvailableBalance, ClosingBalance,
    DebitCredit, ForwardAvailableBalance, NonSwift, OpeningBalance, RelatedReference,
    StatementLine, StatementNumber, TransactionDetails, TransactionReferenceNumber,
};
pub use tag::{Tag, TagFields, TagKind};
