use thiserror::Error;

/// Error decoding a resource record from presentation format
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordSyntaxError {
    #[error("record has no {0} field")]
    MissingField(&'static str),
    #[error("unexpected trailing data {0:?}")]
    TrailingData(String),
    #[error("type {0:?} is invalid")]
    InvalidType(String),
    #[error("class {0:?} is invalid")]
    InvalidClass(String),
    #[error("ttl {0:?} is invalid")]
    InvalidTtl(String),
    #[error("{0:?} is not a valid address")]
    InvalidAddress(String),
    #[error("{0:?} is not a valid number")]
    InvalidNumber(String),
    #[error("label in domain name {0:?} is empty or longer than 63 bytes")]
    InvalidLabel(String),
    #[error("domain name {0:?} is longer than 255 bytes")]
    NameTooLong(String),
    #[error("character string is not terminated")]
    UnterminatedString,
}
