//! Errors surfaced by the converter binary.

use schem_rs_litematic::SchematicError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Config {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("{0}")]
    Schematic(#[from] SchematicError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
