pub type DesResult<T> = Result<T, DesError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DesError {
    #[error("DES key must be 64 bits, got {0}")]
    InvalidKeyLength(usize),

    #[error("DES key fails the per-byte odd parity check")]
    InvalidKeyParity,

    #[error("DES block must be 64 bits, got {0}")]
    InvalidBlockLength(usize),

    #[error("Invalid hex format: {0}")]
    InvalidHexFormat(String),

    #[error("Expected {expected} bits, got {actual}")]
    InvalidBitLength { expected: usize, actual: usize },

    #[error("Bytes cannot be decoded as {0}")]
    DecodingFailure(&'static str),

    #[error("Character {0:?} cannot be encoded as {1}")]
    UnencodableCharacter(char, &'static str),
}
