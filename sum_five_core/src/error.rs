use thiserror::Error;

/// The errors raised by the reducers and the number parser.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// The number of values does not match the arity of the operation.
    #[error("{function} requires exactly {expected} values")]
    Arity {
        /// The reducer that rejected the values (ex: `sum_five`).
        function: &'static str,
        /// The required count, spelled out (ex: `five`).
        expected: &'static str,
        /// The count that was actually provided.
        provided: usize,
    },

    /// A token could not be interpreted as a number.
    /// The token is kept verbatim (un-trimmed).
    #[error("Could not parse '{token}' as a number")]
    Parse {
        /// The offending token.
        token: String,
    },

    /// The input collection itself was absent.
    #[error("a collection of values is required")]
    InvalidArgument,
}

/// An operation name which is neither `sum` nor `multiply`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown operation '{0}'")]
pub struct UnknownOperation(pub String);
