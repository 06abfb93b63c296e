#![deny(missing_docs)]
//! Expression trees with exact forward-mode partial derivatives.
//!
//! This crate builds scalar arithmetic expressions over numbered input
//! variables, evaluates them at an input vector, and computes the exact
//! partial derivative with respect to any one input by forward-mode
//! chain-rule propagation: each node's value and tangent are carried
//! together in one walk, using the closed-form rule for that node. No
//! finite differences are involved.
//!
//! - [`Expr`]: an immutable expression tree; [`Node`] is its closed set
//!   of node kinds
//! - [`functions`]: combinators (`sin`, `cos`, `asin`, `sqrt`, `atan2`,
//!   `if_positive`, ...) that build new trees from existing ones
//! - [`ops`]: `+ - * /` and unary `-` on expressions and scalars
//! - [`Dual`]: the value/tangent pair carried up the tree during
//!   differentiation
//! - `parallel` (feature `parallel`): batch evaluation over many input
//!   points with Rayon
//!
//! # Evaluating and differentiating
//!
//! ```
//! use autodf::Expr;
//!
//! let x = Expr::<f64>::variable(0);
//! let y = Expr::<f64>::variable(1);
//!
//! // f(x, y) = (x - 1)(x + 1) + (y - 1)(y + 1)
//! let f = (&x - 1.0) * (&x + 1.0) + (&y - 1.0) * (&y + 1.0);
//!
//! assert_eq!(f.evaluate(&[1.0, 0.0]).unwrap(), -1.0);
//! assert_eq!(f.partial_derivative(0, &[1.0, 0.0]).unwrap(), 2.0);
//! assert_eq!(f.partial_derivative(1, &[1.0, 0.0]).unwrap(), 0.0);
//! ```
//!
//! # Transcendentals and branches
//!
//! ```
//! use autodf::functions::{if_positive, sin};
//! use autodf::Expr;
//!
//! let x = Expr::<f64>::variable(0);
//! let f = if_positive(&x, sin(&x), 0.0);
//!
//! assert_eq!(f.evaluate(&[0.0]).unwrap(), 0.0);
//! assert_eq!(f.partial_derivative(0, &[1e-9]).unwrap(), (1e-9_f64).cos());
//! ```
//!
//! # Input length
//!
//! Every expression knows the highest variable index it reads. Passing a
//! shorter input slice is an error, reported before anything is
//! evaluated:
//!
//! ```
//! use autodf::{EvalError, Expr};
//!
//! let z = Expr::<f64>::variable(2);
//! assert_eq!(
//!     z.evaluate(&[1.0, 2.0]),
//!     Err(EvalError::InputTooShort { required: 3, actual: 2 })
//! );
//! ```

pub mod dual;
pub mod error;
pub mod expr;
pub mod functions;
pub mod ops;

#[cfg(feature = "parallel")]
pub mod parallel;

#[cfg(test)]
mod proptests;

pub use dual::Dual;
pub use error::EvalError;
pub use expr::{Expr, Node};
pub use functions::{asin, atan2, cos, if_positive, select_positive, sin, sqrt};
