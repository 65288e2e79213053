use std::path::PathBuf;
use thiserror::Error;

use crate::codec::CodecError;

#[derive(Debug, Error)]
pub enum ConfileError {
    #[error("No encoder configured — call .encoder() or .json() on the builder")]
    NoEncoder,

    #[error("No decoder configured — call .decoder() or .json() on the builder")]
    NoDecoder,

    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to encode config value: {source}")]
    Encode { source: CodecError },

    #[error("Failed to decode {path}: {source}")]
    Decode { path: PathBuf, source: CodecError },
}
