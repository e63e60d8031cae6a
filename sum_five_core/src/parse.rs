use std::str::FromStr;

use crate::error::Error;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Convert textual tokens into `f64` values, preserving their order.
///
/// Each token is trimmed before conversion, so `" 1.5 "` is accepted.
/// Parsing stops at the first token that cannot convert; the error names that token exactly as it was given.
/// A `None` input stands for an absent collection and is rejected with [`Error::InvalidArgument`].
///
/// ### Example
/// ```
/// use sum_five_core::{parse_numbers, Error};
///
/// assert_eq!(parse_numbers(Some(["1", "-2.5", "1e2"])), Ok(vec![1.0, -2.5, 100.0]));
/// assert_eq!(
///     parse_numbers(Some(["1", "two", "three"])),
///     Err(Error::Parse { token: "two".to_string() })
/// );
/// assert_eq!(parse_numbers(None::<Vec<&str>>), Err(Error::InvalidArgument));
/// ```
pub fn parse_numbers<I, S>(raw_values: Option<I>) -> Result<Vec<f64>, Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let raw_values = raw_values.ok_or(Error::InvalidArgument)?;
    let mut numbers = Vec::default();

    for item in raw_values {
        let token = item.as_ref();
        let number = f64::from_str(token.trim()).map_err(|_| {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Token '{token}' failed conversion after {} numbers.", numbers.len());
            }

            Error::Parse {
                token: token.to_string(),
            }
        })?;
        numbers.push(number);
    }

    Ok(numbers)
}
