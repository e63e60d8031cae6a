use std::str::FromStr;
use sum_five_core::Operation;
use thiserror::Error;

use crate::constant::*;
use crate::matcher::OffsetValue;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum CaptureError {
    #[error("invalid choice '{token}' for '--{name}' (choose from {choices}).")]
    InvalidChoice {
        name: &'static str,
        token: String,
        choices: String,
    },

    #[error("invalid float value: '{0}'.")]
    InvalidFloat(String),

    #[error("{operation} operation requires exactly {arity} numbers")]
    Arity { operation: Operation, arity: usize },
}

/// The operation and numbers captured from the Cli, before they are reduced.
#[derive(Debug, PartialEq)]
pub(crate) struct Invocation {
    pub(crate) operation: Operation,
    pub(crate) numbers: Vec<f64>,
}

/// Capture the matched tokens into their types.
///
/// Each number token is converted independently; the first failure aborts the capture.
/// The arity of the operation is verified afterwards, so the reducer never receives the wrong count.
pub(crate) fn capture(
    operation: Option<OffsetValue>,
    numbers: Vec<OffsetValue>,
    end_offset: usize,
) -> Result<Invocation, (usize, CaptureError)> {
    let operation = match operation {
        Some((offset, token)) => {
            Operation::from_str(&token).map_err(|_| (offset, invalid_choice(token)))?
        }
        None => Operation::default(),
    };

    let mut values = Vec::with_capacity(numbers.len());

    for (offset, token) in &numbers {
        match f64::from_str(token.trim()) {
            Ok(value) => values.push(value),
            Err(_) => return Err((*offset, CaptureError::InvalidFloat(token.clone()))),
        };
    }

    if numbers.len() != operation.arity() {
        // Point at the first surplus number, or past the end when there are too few.
        let offset = match numbers.get(operation.arity()) {
            Some((offset, _)) => *offset,
            None => end_offset,
        };
        return Err((
            offset,
            CaptureError::Arity {
                operation,
                arity: operation.arity(),
            },
        ));
    }

    Ok(Invocation {
        operation,
        numbers: values,
    })
}

fn invalid_choice(token: String) -> CaptureError {
    CaptureError::InvalidChoice {
        name: OPERATION_NAME,
        token,
        choices: Operation::ALL
            .iter()
            .map(|operation| format!("'{operation}'"))
            .collect::<Vec<String>>()
            .join(", "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn offset_values(tokens: &[&str]) -> Vec<OffsetValue> {
        let mut offset = 0;
        tokens
            .iter()
            .map(|token| {
                let value = (offset, token.to_string());
                offset += token.len();
                value
            })
            .collect()
    }

    #[rstest]
    #[case(None, vec!["1", "2", "3", "4", "5"], Operation::Sum, vec![1.0, 2.0, 3.0, 4.0, 5.0])]
    #[case(Some("sum"), vec!["-1", "-2", "-3", "-4", "-5"], Operation::Sum, vec![-1.0, -2.0, -3.0, -4.0, -5.0])]
    #[case(Some("multiply"), vec!["1", "2", "3", "4", "5", "6"], Operation::Multiply, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])]
    #[case(Some("multiply"), vec!["1e1", ".5", "2.", "1", "1", "1"], Operation::Multiply, vec![10.0, 0.5, 2.0, 1.0, 1.0, 1.0])]
    fn capture_valid(
        #[case] operation: Option<&str>,
        #[case] numbers: Vec<&str>,
        #[case] expected_operation: Operation,
        #[case] expected_numbers: Vec<f64>,
    ) {
        // Execute
        let invocation = capture(
            operation.map(|o| (0, o.to_string())),
            offset_values(&numbers),
            0,
        )
        .unwrap();

        // Verify
        assert_eq!(
            invocation,
            Invocation {
                operation: expected_operation,
                numbers: expected_numbers,
            }
        );
    }

    #[test]
    fn capture_invalid_choice() {
        // Execute
        let (offset, error) = capture(
            Some((11, "divide".to_string())),
            offset_values(&["1", "2", "3", "4", "5"]),
            0,
        )
        .unwrap_err();

        // Verify
        assert_eq!(offset, 11);
        assert_eq!(
            error.to_string(),
            "invalid choice 'divide' for '--operation' (choose from 'multiply', 'sum')."
        );
    }

    #[test]
    fn capture_invalid_float() {
        // Execute
        let (offset, error) = capture(
            None,
            offset_values(&["1", "2", "not_a_number", "bad", "5"]),
            0,
        )
        .unwrap_err();

        // Verify
        assert_eq!(offset, 2);
        assert_eq!(error, CaptureError::InvalidFloat("not_a_number".to_string()));
        assert_eq!(error.to_string(), "invalid float value: 'not_a_number'.");
    }

    #[rstest]
    #[case(None, vec!["1", "2", "3", "4"], 4, "sum operation requires exactly 5 numbers")]
    #[case(Some("sum"), vec!["1", "2", "3", "4", "5", "6"], 5, "sum operation requires exactly 5 numbers")]
    #[case(Some("multiply"), vec!["1", "2", "3", "4", "5"], 5, "multiply operation requires exactly 6 numbers")]
    #[case(Some("multiply"), vec!["1", "2", "3", "4", "5", "6", "7"], 6, "multiply operation requires exactly 6 numbers")]
    fn capture_arity(
        #[case] operation: Option<&str>,
        #[case] numbers: Vec<&str>,
        #[case] expected_offset: usize,
        #[case] message: &str,
    ) {
        // Setup
        let end_offset: usize = numbers.iter().map(|n| n.len()).sum();

        // Execute
        let (offset, error) = capture(
            operation.map(|o| (0, o.to_string())),
            offset_values(&numbers),
            end_offset,
        )
        .unwrap_err();

        // Verify
        assert_eq!(offset, expected_offset);
        assert_eq!(error.to_string(), message);
    }

    #[test]
    fn capture_conversion_before_arity() {
        let (offset, error) = capture(None, offset_values(&["1", "x"]), 2).unwrap_err();
        assert_eq!(offset, 1);
        assert_matches!(error, CaptureError::InvalidFloat(token) if token == "x");
    }
}
