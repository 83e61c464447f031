use std::result;

use read_fonts::ReadError;

/// Error types for font-axes.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to parse font: {0}")]
    Parse(#[from] ReadError),

    #[error("not a variable font (no fvar table)")]
    NotVariableFont,

    #[error("{0} containers are not supported, decompress to TTF/OTF first")]
    Compressed(&'static str),
}

pub type Result<T> = result::Result<T, Error>;
