//! Errors raised by expression evaluation and differentiation.

/// Failure of [`Expr::evaluate`](crate::Expr::evaluate) or
/// [`Expr::partial_derivative`](crate::Expr::partial_derivative).
///
/// Numeric domain problems (division by zero, `asin` outside
/// `[-1, 1]`, `sqrt` of a negative, `atan2(0, 0)`) are not errors: they
/// come back as infinity or NaN, as native float arithmetic does.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// The input slice is too short for the highest variable index the
    /// expression reads.
    #[error("expression reads {required} input(s) but only {actual} were supplied")]
    InputTooShort {
        /// `max_variable_index + 1`.
        required: usize,
        /// Length of the slice that was passed in.
        actual: usize,
    },
}
