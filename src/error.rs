use thiserror::Error;

/// Why a single `Err1:` payload could not be turned back into text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("empty token in payload")]
    EmptyToken,

    #[error("token {token:?} is not a base-16 number")]
    InvalidHex { token: String },

    #[error("token {token:?} decodes to {code_point:#x}, which is not a valid character")]
    InvalidCodePoint { token: String, code_point: u32 },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to decode line {line}")]
    Decode { line: usize, source: DecodeError },
}

pub type Result<T> = std::result::Result<T, Error>;
