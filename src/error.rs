use thiserror::Error;


/// Everything that can go wrong while compressing or decompressing.
#[derive(Debug, Error)]
pub enum HufferError {

    /// There are no symbols to build a tree from
    #[error("empty input: no symbols to build a tree from")]
    EmptyInput,

    /// The container header is malformed
    #[error("invalid format: {0}")]
    InvalidFormat (#[from] FormatError),

    /// The payload ended in the middle of a code
    #[error("corrupt payload: {pending_bits} trailing bits at bit {position} match no code")]
    CorruptPayload { position: usize, pending_bits: usize },

    /// A symbol has no code in the table used to encode it
    #[error("symbol with code point {code_point} has no code")]
    UnknownSymbol { code_point: u64 },

    #[error("I/O error: {0}")]
    Io (#[from] std::io::Error),

}


/// Details of an `InvalidFormat` error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {

    #[error("bad magic value {found}")]
    BadMagic { found: u64 },

    #[error("unexpected end of data while reading {field}")]
    UnexpectedEof { field: &'static str },

    #[error("variable-length integer does not fit in 64 bits")]
    VliOverflow,

    #[error("code point {code_point} is not a valid symbol")]
    InvalidSymbol { code_point: u64 },

    #[error("symbol with code point {code_point} has a zero frequency")]
    ZeroFrequency { code_point: u64 },

    #[error("symbol with code point {code_point} appears twice in the header")]
    DuplicateSymbol { code_point: u64 },

    #[error("payload needs {expected} bytes but only {actual} are present")]
    TruncatedPayload { expected: usize, actual: usize },

}


pub type Result<T> = std::result::Result<T, HufferError>;
