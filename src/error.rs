//! Error types shared by the search and the bots

use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("could not parse '{token}' as {expected}")]
    Parse { token: String, expected: &'static str },

    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("no move available")]
    NoMoveAvailable,

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
