//! `sum_five` sums exactly five numbers, or multiplies exactly six, from the command line.
//!
//! The arithmetic lives in [`sum_five_core`], which is re-exported here in full.
//! It may be used directly, without going through the command line:
//! ```
//! use sum_five::{multiply_six, parse_numbers, sum_five};
//!
//! assert_eq!(sum_five(&[1, 2, 3, 4, 5]).unwrap(), 15.0);
//! assert_eq!(multiply_six(&[-1, 2, -3, 4, -5, -6]).unwrap(), 720.0);
//!
//! let numbers = parse_numbers(Some(["1.5", " 2.5 ", "3.5", "4.5", "5.5"])).unwrap();
//! assert_eq!(sum_five(&numbers).unwrap(), 17.5);
//! ```
//!
//! # Cli
//! ```console
//! $ sum_five -h
//! usage: sum_five [-h] [--operation OPERATION] N [...]
//!
//! Perform mathematical operations on numbers.
//!
//! positional arguments:
//!  N [...]                 Numeric values to process.
//!
//! options:
//!  -h, --help              Show this help message and exit.
//!  --operation OPERATION   {multiply, sum} Operation to perform (default: sum).
//!    multiply              Multiply exactly 6 numbers.
//!    sum                   Sum exactly 5 numbers.
//!
//! $ sum_five 1 2 3 4 5
//! 15.0
//!
//! $ sum_five --operation multiply -1 2 -3 4 -5 -6
//! 720.0
//!
//! $ sum_five --op multiply 1 2 3 4 5 6
//! 720.0
//!
//! $ sum_five --operation sum 1 2 3 4
//! Parse error: sum operation requires exactly 5 numbers
//! --operation sum 1 2 3 4
//!                       ^
//!
//! $ sum_five 1 2 blah 4 5
//! Parse error: invalid float value: 'blah'.
//! 1 2 blah 4 5
//!     ^
//! ```
//!
//! # Cli Semantics
//! * `--operation` takes precisely one value, either as `--operation VALUE` or `--operation=VALUE`.
//! When repeated, the last value wins; when omitted, the numbers are summed.
//! * Long options may be abbreviated to any unique prefix (ex: `--op multiply`).
//! * Every other token is a number, including negative numbers such as `-1` or `-2.5e3`.
//! * After `--`, every token is a number.
//! * Numbers are converted independently; the first token that does not convert is reported.
//! * The count of numbers must match the operation exactly: 5 for `sum`, 6 for `multiply`.
//!
//! Successful invocations print the result and exit with `0`.
//! `-h`/`--help` prints the help message and exits with `0`.
//! All other invocations print the error and exit with `1`.
//!
//! # Features
//! * `tracing_debug`: Emit `tracing` debug events while matching, capturing, and reducing.
#![deny(missing_docs)]
mod constant;
mod matcher;
mod parser;

pub use parser::{format_number, CommandLine};
pub use sum_five_core::*;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
