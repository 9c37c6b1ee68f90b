use thiserror::Error;

pub type Result<T> = ::std::result::Result<T, FormatSpecError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatSpecError {
    #[error("Invalid width in format spec: {0}")]
    InvalidWidth(String),
    #[error("Missing precision after '.' in format spec")]
    MissingPrecision,
    #[error("Invalid precision in format spec: {0}")]
    InvalidPrecision(String),
    #[error("Unknown format type '{0}'")]
    UnknownType(char),
    #[error("Unexpected trailing characters in format spec: {0}")]
    TrailingCharacters(String),
}
