//! Core decoding module
//!
//! This module contains the tag decoding components:
//! - `traits` - The contract every tag decoding rule implements
//! - `primitives` - Date, entry date and amount decoders
//! - `scalar` - Single-value tags (20, 21, 25, 28, 86, NS)
//! - `balance` - Shared balance rule (60, 62, 64, 65)
//! - `statement_line` - Statement line rule (61)
//! - `factory` - Identifier dispatch

pub mod balance;
pub mod factory;
pub mod primitives;
pub mod scalar;
pub mod statement_line;
pub mod traits;

pub use balance::decode_balance;
pub use factory::{create_tag, TagFactory};
pub use traits::{DecodeError, TagVariant};
