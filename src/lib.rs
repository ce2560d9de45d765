//! MT940 Tag Decoder Library
//! # Overview
//!
//! This library decodes the tags of an MT940 bank statement into typed
//! field sets. Document segmentation happens upstream: every segment arrives
//! as an identifier, an optional sub-identifier letter and the raw content
//! with the `:identifier:` marker already stripped.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (TagKind, Tag, field sets, TagError)
//! - [`core`] - Decoding components:
//!   - [`core::factory`] - Identifier dispatch
//!   - [`core::balance`] - Shared balance rule for tags 60, 62, 64 and 65
//!   - [`core::statement_line`] - Statement line rule for tag 61
//!   - [`core::scalar`] - Single-value tags
//! - [`io`] - Segment CSV input and decoded tag CSV output
//! - [`strategy`] - Lenient and strict batch pipelines
//! - [`cli`] - CLI arguments parsing
//!
//! # Supported Tags
//!
//! | Identifier | Kind |
//! |---|---|
//! | `20` | Transaction reference number |
//! | `21` | Related reference |
//! | `25` | Account identification |
//! | `28` | Statement number and optional sequence number |
//! | `60` | Opening balance |
//! | `61` | Statement line |
//! | `62` | Closing balance |
//! | `64` | Closing available balance |
//! | `65` | Forward available balance |
//! | `86` | Transaction details |
//! | `NS` | Non-SWIFT free text |
//!
//! # Example
//!
//! ```
//! use mt940_tags::{create_tag, BalanceTag, TagFields};
//!
//! let tag = create_tag("62", Some("F"), "C160507EUR123,89").unwrap();
//! match tag.fields() {
//!     TagFields::ClosingBalance(balance) => {
//!         assert_eq!(balance.balance().currency, "EUR");
//!     }
//!     other => panic!("unexpected fields: {:?}", other),
//! }
//! ```

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use core::{create_tag, decode_balance, TagFactory};
pub use io::write_tags_csv;
pub use types::{
    BalanceFields, BalanceTag, DebitCredit, StatementLine, Tag, TagError, TagFields, TagKind,
};
