use std::str::FromStr;

use crate::error::UnknownOperation;

/// The reduction to apply, along with its fixed arity.
///
/// `FromStr` inverts `Display`, so the same names are used for parsing and for documenting the choices.
///
/// ### Example
/// ```
/// use sum_five_core::Operation;
/// use std::str::FromStr;
///
/// let operation = Operation::from_str("multiply").unwrap();
/// assert_eq!(operation, Operation::Multiply);
/// assert_eq!(operation.arity(), 6);
/// assert_eq!(operation.to_string(), "multiply");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Add precisely five values.
    #[default]
    Sum,
    /// Multiply precisely six values.
    Multiply,
}

impl Operation {
    /// Every operation, ordered by name.
    pub const ALL: [Operation; 2] = [Operation::Multiply, Operation::Sum];

    /// The exact number of values this operation reduces.
    pub fn arity(&self) -> usize {
        match self {
            Operation::Sum => 5,
            Operation::Multiply => 6,
        }
    }

    /// The arity, spelled out.
    pub fn arity_word(&self) -> &'static str {
        match self {
            Operation::Sum => "five",
            Operation::Multiply => "six",
        }
    }

    /// The starting value of the reduction.
    pub fn identity(&self) -> f64 {
        match self {
            Operation::Sum => 0.0,
            Operation::Multiply => 1.0,
        }
    }

    /// Fold a single value into the accumulator.
    pub fn combine(&self, accumulator: f64, value: f64) -> f64 {
        match self {
            Operation::Sum => accumulator + value,
            Operation::Multiply => accumulator * value,
        }
    }

    /// The name of the reducer function backing this operation.
    pub fn function_name(&self) -> &'static str {
        match self {
            Operation::Sum => "sum_five",
            Operation::Multiply => "multiply_six",
        }
    }

    /// A short description of the operation.
    pub fn description(&self) -> &'static str {
        match self {
            Operation::Sum => "Sum exactly 5 numbers.",
            Operation::Multiply => "Multiply exactly 6 numbers.",
        }
    }
}

/// A primitive number which the reducers accept, converted with `as f64`.
///
/// Integers wider than 52 bits round to the nearest representable `f64`.
pub trait Numeric: Copy {
    /// The value as an `f64`.
    fn as_f64(self) -> f64;
}

macro_rules! numeric {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                fn as_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

numeric!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Sum => write!(f, "sum"),
            Operation::Multiply => write!(f, "multiply"),
        }
    }
}

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "sum" => Ok(Operation::Sum),
            "multiply" => Ok(Operation::Multiply),
            _ => Err(UnknownOperation(value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Operation::Sum, 5, 0.0)]
    #[case(Operation::Multiply, 6, 1.0)]
    fn arity_identity(#[case] operation: Operation, #[case] arity: usize, #[case] identity: f64) {
        assert_eq!(operation.arity(), arity);
        assert_eq!(operation.identity(), identity);
    }

    #[test]
    fn numeric_widths() {
        assert_eq!((-3i8).as_f64(), -3.0);
        assert_eq!(u16::MAX.as_f64(), 65535.0);
        assert_eq!(i64::MIN.as_f64(), -9223372036854775808.0);
        assert_eq!(7usize.as_f64(), 7.0);
        assert_eq!(0.5f32.as_f64(), 0.5);
        assert_eq!((1u64 << 53).as_f64(), 9007199254740992.0);
    }

    #[test]
    fn default_sum() {
        assert_eq!(Operation::default(), Operation::Sum);
    }

    #[test]
    fn from_str_inverts_display() {
        for operation in Operation::ALL {
            assert_eq!(
                Operation::from_str(&operation.to_string()).unwrap(),
                operation
            );
        }
    }

    #[rstest]
    #[case("divide")]
    #[case("Sum")]
    #[case("")]
    #[case(" sum")]
    fn from_str_unknown(#[case] value: &str) {
        assert_eq!(
            Operation::from_str(value),
            Err(UnknownOperation(value.to_string()))
        );
    }
}
