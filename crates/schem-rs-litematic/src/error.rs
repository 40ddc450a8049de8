//! Schematic conversion errors.

use schem_rs_nbt::NbtError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchematicError {
    #[error("NBT decode error: {0}")]
    Nbt(#[from] NbtError),

    #[error("invalid schematic: {0}")]
    Format(String),
}
