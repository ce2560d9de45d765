//! Core traits for the tag variant family
//!
//! Every tag identifier has one decoding rule. This module defines the
//! contract those rules implement so the factory can treat them uniformly.

use crate::types::{TagFields, TagKind};
use thiserror::Error;

/// Why a decoder rejected the content of a tag
///
/// Decoders only know the content they were given; the factory attaches the
/// tag identifier and raw value when it lifts this into
/// [`crate::types::TagError::ParseError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct DecodeError {
    pub reason: String,
}

impl DecodeError {
    pub fn new(reason: impl Into<String>) -> Self {
        DecodeError {
            reason: reason.into(),
        }
    }
}

/// Decoding rule for one tag identifier
///
/// Implementors are the per-variant field sets; a successful decode yields a
/// fully populated value, a failed one yields nothing.
pub trait TagVariant: Sized + Into<TagFields> {
    /// The identifier this rule decodes
    const KIND: TagKind;

    /// Decode the raw content of a tag
    ///
    /// # Arguments
    ///
    /// * `sub_id` - Optional sub-identifier letter (the `F` in `60F`)
    /// * `raw` - Content with the leading `:identifier:` marker already stripped
    fn decode(sub_id: Option<&str>, raw: &str) -> Result<Self, DecodeError>;
}
