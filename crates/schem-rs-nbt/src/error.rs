//! NBT error types.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NbtError {
    #[error("unexpected end of data: need {needed} bytes, have {remaining}")]
    OutOfBounds { needed: usize, remaining: usize },

    #[error("unknown tag type: {0}")]
    UnknownTag(u8),

    #[error("malformed NBT: {0}")]
    Format(String),

    #[error("nesting too deep (limit: {limit})")]
    NestingTooDeep { limit: usize },
}
