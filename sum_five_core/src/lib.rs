//! Core module for `sum_five`.
//! See [documentation root](../sum_five/index.html) for the command line program.
//!
//! Two fixed-arity reducers are provided: [`sum_five`] and [`multiply_six`].
//! Both are thin wrappers over [`Operation::reduce`], which checks the arity before folding the values.
//! Numeric text may be converted beforehand via [`parse_numbers`].
#![deny(missing_docs)]
mod error;
mod model;
mod parse;
mod reducer;

pub use error::*;
pub use model::*;
pub use parse::parse_numbers;
pub use reducer::{multiply_six, sum_five};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
