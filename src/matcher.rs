use std::str::FromStr;
use thiserror::Error;

use crate::constant::*;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A token value, paired with its offset into the concatenated (space-less) input tokens.
pub(crate) type OffsetValue = (usize, String);

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum MatchError {
    #[error("unknown option '{0}'.")]
    InvalidOption(String),

    #[error("option '--{0}' expects a value.")]
    MissingValue(String),

    #[error("option '--{0}' does not take a value.")]
    UnexpectedValue(String),

    #[error("too few values provided for '{name}' (provided={provided}, expected at least {expected}).")]
    TooFewValues {
        name: String,
        provided: usize,
        expected: usize,
    },
}

/// The outcome of aligning the input tokens against the Cli parameters.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Matched {
    Help,
    Parameters {
        operation: Option<OffsetValue>,
        numbers: Vec<OffsetValue>,
    },
}

#[derive(Debug, Default)]
pub(crate) struct TokenMatcher {
    fed: usize,
    help: bool,
    options_closed: bool,
    awaiting: Option<String>,
    operation: Option<OffsetValue>,
    numbers: Vec<OffsetValue>,
}

impl TokenMatcher {
    pub(crate) fn feed(&mut self, token: &str) -> Result<(), MatchError> {
        // 1. An option waiting on its value, such as:
        //  --operation ..
        // 2. The terminator '--', or a negative number such as '-1.5'.
        //    Both of these are matched as arguments (the terminator switches all subsequent tokens to arguments).
        // 3. Find a 'long' flag, such as:
        //  --operation
        //  --operation=..
        // 4. Find 'short' flag(s), such as:
        //  -h
        // 5. Match against an argument.
        let result = if self.options_closed {
            self.match_argument(token)
        } else if let Some(option_name) = self.awaiting.take() {
            self.match_value(option_name, token)
        } else if token == OPTIONS_TERMINATOR {
            self.options_closed = true;
            Ok(())
        } else if is_negative_number(token) {
            self.match_argument(token)
        } else if let Some(token) = token.strip_prefix("--") {
            self.match_option(split_equals_delimiter(token))
        } else if token.len() > 1 && token.starts_with('-') {
            self.match_option_short(split_equals_delimiter(&token[1..]))
        } else {
            self.match_argument(token)
        };

        self.fed += token.len();
        result
    }

    fn match_argument(&mut self, token: &str) -> Result<(), MatchError> {
        self.numbers.push((self.fed, token.to_string()));
        Ok(())
    }

    fn match_value(&mut self, option_name: String, token: &str) -> Result<(), MatchError> {
        if token.len() > 1 && token.starts_with('-') && !is_negative_number(token) {
            return Err(MatchError::MissingValue(option_name));
        }

        self.operation.replace((self.fed, token.to_string()));
        Ok(())
    }

    fn match_option(
        &mut self,
        (option_prefix, single_argument): (&str, Option<&str>),
    ) -> Result<(), MatchError> {
        let option_name = match expand_long_option(option_prefix) {
            Some(option_name) => option_name,
            None => return Err(MatchError::InvalidOption(format!("--{option_prefix}"))),
        };

        if option_name == HELP_NAME {
            if single_argument.is_some() {
                return Err(MatchError::UnexpectedValue(option_name.to_string()));
            }

            self.help = true;
        } else {
            // A repeated option overwrites the earlier value.
            match single_argument {
                Some(value) => {
                    // The 3 comes from the option specifier '--' and argument specifier '='.
                    self.operation
                        .replace((self.fed + option_prefix.len() + 3, value.to_string()));
                }
                None => {
                    self.awaiting.replace(option_name.to_string());
                }
            };
        }

        Ok(())
    }

    fn match_option_short(
        &mut self,
        (short_option_names, single_argument): (&str, Option<&str>),
    ) -> Result<(), MatchError> {
        for single in short_option_names.chars() {
            if single == HELP_SHORT {
                self.help = true;
            } else {
                return Err(MatchError::InvalidOption(format!("-{single}")));
            }
        }

        if single_argument.is_some() {
            return Err(MatchError::UnexpectedValue(HELP_NAME.to_string()));
        }

        Ok(())
    }

    pub(crate) fn close(self) -> Result<Matched, (usize, MatchError)> {
        let TokenMatcher {
            fed,
            help,
            awaiting,
            operation,
            numbers,
            ..
        } = self;

        if help {
            return Ok(Matched::Help);
        }

        if let Some(option_name) = awaiting {
            return Err((fed, MatchError::MissingValue(option_name)));
        }

        if numbers.is_empty() {
            return Err((
                fed,
                MatchError::TooFewValues {
                    name: NUMBERS_NAME.to_string(),
                    provided: 0,
                    expected: 1,
                },
            ));
        }

        Ok(Matched::Parameters { operation, numbers })
    }
}

/// Align every token, failing on the first one that does not fit.
/// The error is paired with the offset of the offending token.
pub(crate) fn match_tokens(tokens: &[&str]) -> Result<Matched, (usize, MatchError)> {
    let mut token_matcher = TokenMatcher::default();

    for token in tokens {
        let offset = token_matcher.fed;
        token_matcher.feed(token).map_err(|error| (offset, error))?;
    }

    #[cfg(feature = "tracing_debug")]
    {
        debug!("TokenMatcher fed {} tokens: {token_matcher:?}.", tokens.len());
    }

    token_matcher.close()
}

// Long options may be abbreviated to any prefix that names exactly one of them.
fn expand_long_option(prefix: &str) -> Option<&'static str> {
    let mut candidates = [HELP_NAME, OPERATION_NAME]
        .into_iter()
        .filter(|option_name| option_name.starts_with(prefix));

    match (candidates.next(), candidates.next()) {
        (Some(option_name), None) => Some(option_name),
        _ => None,
    }
}

fn is_negative_number(token: &str) -> bool {
    token.starts_with('-') && f64::from_str(token).is_ok()
}

fn split_equals_delimiter(token: &str) -> (&str, Option<&str>) {
    match token.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (token, None),
    }
}
