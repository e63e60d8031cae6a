use thiserror::Error;

use crate::matcher::MatchError;

mod capture;
mod dispatch;
mod interface;
mod printer;

pub(crate) use capture::*;
pub use dispatch::*;
pub(crate) use interface::*;
pub(crate) use printer::*;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Parse error: {0}")]
pub(crate) struct ParseError(pub(crate) String);

impl From<MatchError> for ParseError {
    fn from(error: MatchError) -> Self {
        ParseError(error.to_string())
    }
}

impl From<CaptureError> for ParseError {
    fn from(error: CaptureError) -> Self {
        ParseError(error.to_string())
    }
}

impl From<sum_five_core::Error> for ParseError {
    fn from(error: sum_five_core::Error) -> Self {
        ParseError(format!("{error}."))
    }
}
