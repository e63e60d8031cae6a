use crate::error::Error;
use crate::model::{Numeric, Operation};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

impl Operation {
    /// Reduce precisely [`Operation::arity`] values into a single `f64`.
    ///
    /// The values are folded left to right, starting from [`Operation::identity`].
    /// Any other number of values is rejected with [`Error::Arity`] before anything is computed.
    ///
    /// ### Example
    /// ```
    /// use sum_five_core::{Error, Operation};
    ///
    /// assert_eq!(Operation::Sum.reduce(&[1, 2, 3, 4, 5]), Ok(15.0));
    /// assert_eq!(
    ///     Operation::Multiply.reduce(&[1.0, 2.0]),
    ///     Err(Error::Arity { function: "multiply_six", expected: "six", provided: 2 })
    /// );
    /// ```
    pub fn reduce<T>(&self, values: &[T]) -> Result<f64, Error>
    where
        T: Numeric,
    {
        if values.len() != self.arity() {
            #[cfg(feature = "tracing_debug")]
            {
                debug!(
                    "Operation {} rejected {} values (expected {}).",
                    self,
                    values.len(),
                    self.arity()
                );
            }

            return Err(Error::Arity {
                function: self.function_name(),
                expected: self.arity_word(),
                provided: values.len(),
            });
        }

        let result = values
            .iter()
            .fold(self.identity(), |accumulator, value| {
                self.combine(accumulator, value.as_f64())
            });

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Operation {} reduced to {result}.", self);
        }

        Ok(result)
    }
}

/// Return the sum of exactly five values.
///
/// ### Example
/// ```
/// use sum_five_core::sum_five;
///
/// assert_eq!(sum_five(&[1, 2, 3, 4, 5]).unwrap(), 15.0);
/// assert_eq!(sum_five(&[1u64, 2, 3, 4, 5]).unwrap(), 15.0);
/// assert!(sum_five(&[1, 2, 3, 4]).is_err());
/// ```
pub fn sum_five<T>(values: &[T]) -> Result<f64, Error>
where
    T: Numeric,
{
    Operation::Sum.reduce(values)
}

/// Return the product of exactly six values.
///
/// ### Example
/// ```
/// use sum_five_core::multiply_six;
///
/// assert_eq!(multiply_six(&[1, 2, 3, 4, 5, 6]).unwrap(), 720.0);
/// assert!(multiply_six(&[1, 2, 3, 4, 5]).is_err());
/// ```
pub fn multiply_six<T>(values: &[T]) -> Result<f64, Error>
where
    T: Numeric,
{
    Operation::Multiply.reduce(values)
}
