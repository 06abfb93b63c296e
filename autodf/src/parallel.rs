//! Parallel batch evaluation using Rayon.
//!
//! An [`Expr`] is immutable once built, so one tree can be read from many
//! threads at once. These helpers fan a single expression out over a
//! batch of input points.
//!
//! Enable with the `parallel` feature:
//! ```toml
//! autodf = { version = "0.1", features = ["parallel"] }
//! ```
//!
//! ```
//! use autodf::parallel::evaluate_batch;
//! use autodf::Expr;
//!
//! let x = Expr::<f64>::variable(0);
//! let f = &x * &x;
//! let points = vec![vec![1.0], vec![2.0], vec![3.0]];
//!
//! assert_eq!(evaluate_batch(&f, &points).unwrap(), vec![1.0, 4.0, 9.0]);
//! ```

use log::debug;
use num_traits::Float;
use rayon::prelude::*;

use crate::error::EvalError;
use crate::expr::Expr;

/// Evaluate `expr` at every point, in parallel.
///
/// Results are in the order of `points`. If any point is too short the
/// whole batch fails with an [`EvalError::InputTooShort`] for one of the
/// offending points.
pub fn evaluate_batch<T, P>(expr: &Expr<T>, points: &[P]) -> Result<Vec<T>, EvalError>
where
    T: Float + Send + Sync,
    P: AsRef<[T]> + Sync,
{
    debug!("evaluating batch of {} point(s)", points.len());
    points
        .par_iter()
        .map(|p| expr.evaluate(p.as_ref()))
        .collect()
}

/// Partial derivative with respect to `wrt` at every point, in parallel.
pub fn partial_derivative_batch<T, P>(
    expr: &Expr<T>,
    wrt: usize,
    points: &[P],
) -> Result<Vec<T>, EvalError>
where
    T: Float + Send + Sync,
    P: AsRef<[T]> + Sync,
{
    debug!(
        "differentiating batch of {} point(s) w.r.t. input {}",
        points.len(),
        wrt
    );
    points
        .par_iter()
        .map(|p| expr.partial_derivative(wrt, p.as_ref()))
        .collect()
}

/// Full gradient at every point, in parallel.
///
/// ```
/// use autodf::parallel::gradient_batch;
/// use autodf::Expr;
///
/// let x = Expr::<f64>::variable(0);
/// let y = Expr::<f64>::variable(1);
/// let f = &x * &y;
///
/// let grads = gradient_batch(&f, &[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// assert_eq!(grads, vec![vec![2.0, 1.0], vec![4.0, 3.0]]);
/// ```
pub fn gradient_batch<T, P>(expr: &Expr<T>, points: &[P]) -> Result<Vec<Vec<T>>, EvalError>
where
    T: Float + Send + Sync,
    P: AsRef<[T]> + Sync,
{
    debug!("computing gradients for batch of {} point(s)", points.len());
    points
        .par_iter()
        .map(|p| expr.gradient(p.as_ref()))
        .collect()
}
