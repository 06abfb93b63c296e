//! Combinators that build composite expressions.
//!
//! Every combinator takes its operands as `impl Into<Expr<T>>`, so an
//! [`Expr`], a borrowed `&Expr` (cloned) or a bare scalar (wrapped in a
//! [`Node::Constant`]) can be passed. The result is always a fresh node
//! of the matching kind that owns its operands; nothing is folded or
//! rewritten.
//!
//! ```
//! use autodf::functions::{atan2, if_positive, sin, sqrt};
//! use autodf::Expr;
//!
//! let x = Expr::<f64>::variable(0);
//! let y = Expr::<f64>::variable(1);
//!
//! let r = sqrt(x.clone() * x.clone() + y.clone() * y.clone());
//! let theta = atan2(&y, &x);
//! let f = if_positive(&x, r, sin(theta));
//!
//! assert_eq!(f.evaluate(&[3.0, 4.0]).unwrap(), 5.0);
//! assert_eq!(f.partial_derivative(0, &[3.0, 4.0]).unwrap(), 0.6);
//! ```

use num_traits::Float;

use crate::expr::{Expr, Node};

fn boxed<T>(e: impl Into<Expr<T>>) -> Box<Expr<T>> {
    Box::new(e.into())
}

/// `a + b`
pub fn add<T: Float>(a: impl Into<Expr<T>>, b: impl Into<Expr<T>>) -> Expr<T> {
    Node::Sum(boxed(a), boxed(b)).into()
}

/// `a - b`
pub fn sub<T: Float>(a: impl Into<Expr<T>>, b: impl Into<Expr<T>>) -> Expr<T> {
    Node::Sub(boxed(a), boxed(b)).into()
}

/// `a * b`
pub fn mul<T: Float>(a: impl Into<Expr<T>>, b: impl Into<Expr<T>>) -> Expr<T> {
    Node::Mul(boxed(a), boxed(b)).into()
}

/// `a / b`. A zero denominator is not checked.
pub fn div<T: Float>(a: impl Into<Expr<T>>, b: impl Into<Expr<T>>) -> Expr<T> {
    Node::Div(boxed(a), boxed(b)).into()
}

/// `-x`, built as `0 - x`.
///
/// ```
/// use autodf::functions::neg;
/// use autodf::{Expr, Node};
///
/// let f = neg(Expr::<f64>::variable(0));
/// assert!(matches!(f.node(), Node::Sub(..)));
/// assert_eq!(f.evaluate(&[2.5]).unwrap(), -2.5);
/// assert_eq!(f.partial_derivative(0, &[2.5]).unwrap(), -1.0);
/// ```
pub fn neg<T: Float>(x: impl Into<Expr<T>>) -> Expr<T> {
    sub(T::zero(), x)
}

/// `sin(x)`
pub fn sin<T: Float>(x: impl Into<Expr<T>>) -> Expr<T> {
    Node::Sin(boxed(x)).into()
}

/// `cos(x)`
pub fn cos<T: Float>(x: impl Into<Expr<T>>) -> Expr<T> {
    Node::Cos(boxed(x)).into()
}

/// `asin(x)`; NaN outside `[-1, 1]`.
pub fn asin<T: Float>(x: impl Into<Expr<T>>) -> Expr<T> {
    Node::Asin(boxed(x)).into()
}

/// `sqrt(x)`; NaN for negative `x`.
pub fn sqrt<T: Float>(x: impl Into<Expr<T>>) -> Expr<T> {
    Node::Sqrt(boxed(x)).into()
}

/// Two-argument arctangent `atan2(y, x)`.
///
/// ```
/// use autodf::functions::atan2;
/// use autodf::Expr;
///
/// let f = atan2(Expr::<f64>::variable(0), Expr::<f64>::variable(1));
/// assert_eq!(f.gradient(&[1.0, 1.0]).unwrap(), vec![0.5, -0.5]);
/// ```
pub fn atan2<T: Float>(y: impl Into<Expr<T>>, x: impl Into<Expr<T>>) -> Expr<T> {
    Node::Atan2(boxed(y), boxed(x)).into()
}

/// Branch on the sign of `cond`: `then` if `cond > 0`, else `otherwise`.
///
/// The derivative is the derivative of whichever branch is selected at
/// the given inputs. The jump across `cond == 0` is not differentiated.
///
/// ```
/// use autodf::functions::if_positive;
/// use autodf::Expr;
///
/// let x = Expr::<f64>::variable(0);
/// // ReLU
/// let relu = if_positive(&x, &x, 0.0);
///
/// assert_eq!(relu.evaluate(&[2.0]).unwrap(), 2.0);
/// assert_eq!(relu.evaluate(&[-2.0]).unwrap(), 0.0);
/// assert_eq!(relu.partial_derivative(0, &[2.0]).unwrap(), 1.0);
/// assert_eq!(relu.partial_derivative(0, &[-2.0]).unwrap(), 0.0);
/// ```
pub fn if_positive<T: Float>(
    cond: impl Into<Expr<T>>,
    then: impl Into<Expr<T>>,
    otherwise: impl Into<Expr<T>>,
) -> Expr<T> {
    Node::IfPositive {
        cond: boxed(cond),
        then: boxed(then),
        otherwise: boxed(otherwise),
    }
    .into()
}

/// Scalar form of [`if_positive`], for when every operand is already a
/// number. Carries no derivative.
///
/// ```
/// use autodf::functions::select_positive;
///
/// assert_eq!(select_positive(1.0, 2.0, 3.0), 2.0);
/// assert_eq!(select_positive(0.0, 2.0, 3.0), 3.0);
/// ```
pub fn select_positive<T: Float>(cond: T, then: T, otherwise: T) -> T {
    if cond > T::zero() {
        then
    } else {
        otherwise
    }
}

impl<T: Float> Expr<T> {
    /// `sin(self)`
    pub fn sin(self) -> Self {
        sin(self)
    }

    /// `cos(self)`
    pub fn cos(self) -> Self {
        cos(self)
    }

    /// `asin(self)`
    pub fn asin(self) -> Self {
        asin(self)
    }

    /// `sqrt(self)`
    pub fn sqrt(self) -> Self {
        sqrt(self)
    }

    /// `atan2(self, x)`, with `self` as the `y` operand.
    pub fn atan2(self, x: impl Into<Expr<T>>) -> Self {
        atan2(self, x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combinators_build_matching_nodes() {
        let x = Expr::<f64>::variable(0);
        assert!(matches!(add(&x, 1.0).node(), Node::Sum(..)));
        assert!(matches!(sub(&x, 1.0).node(), Node::Sub(..)));
        assert!(matches!(mul(&x, 1.0).node(), Node::Mul(..)));
        assert!(matches!(div(&x, 1.0).node(), Node::Div(..)));
        assert!(matches!(sin(&x).node(), Node::Sin(..)));
        assert!(matches!(cos(&x).node(), Node::Cos(..)));
        assert!(matches!(asin(&x).node(), Node::Asin(..)));
        assert!(matches!(sqrt(&x).node(), Node::Sqrt(..)));
        assert!(matches!(atan2(&x, 1.0).node(), Node::Atan2(..)));
        assert!(matches!(
            if_positive(&x, 1.0, 2.0).node(),
            Node::IfPositive { .. }
        ));
    }

    #[test]
    fn literals_are_wrapped_as_constants() {
        let f: Expr<f64> = add(2.0, 3.0);
        match f.node() {
            Node::Sum(a, b) => {
                assert_eq!(a.node(), &Node::Constant(2.0));
                assert_eq!(b.node(), &Node::Constant(3.0));
            }
            other => panic!("expected a sum, got {other:?}"),
        }
        assert!(f.is_constant());
        assert_eq!(f.evaluate(&[]).unwrap(), 5.0);
    }

    #[test]
    fn neg_is_zero_minus() {
        let f = neg(Expr::<f64>::variable(3));
        match f.node() {
            Node::Sub(a, b) => {
                assert_eq!(a.node(), &Node::Constant(0.0));
                assert_eq!(b.node(), &Node::Variable(3));
            }
            other => panic!("expected a difference, got {other:?}"),
        }
        assert_eq!(f.max_variable_index(), Some(3));
    }

    #[test]
    fn method_forms_match_free_functions() {
        let x = Expr::<f64>::variable(0);
        assert_eq!(x.clone().sin(), sin(&x));
        assert_eq!(x.clone().cos(), cos(&x));
        assert_eq!(x.clone().asin(), asin(&x));
        assert_eq!(x.clone().sqrt(), sqrt(&x));
        assert_eq!(x.clone().atan2(2.0), atan2(&x, 2.0));
    }

    #[test]
    fn composition_leaves_operands_intact() {
        let x = Expr::<f64>::variable(0);
        let before = x.clone();
        let _ = add(&x, &x);
        assert_eq!(x, before);
    }

    #[test]
    fn cos_derivative_is_negative_sine() {
        let f = cos(Expr::<f64>::variable(0));
        let at = std::f64::consts::FRAC_PI_2;
        assert!((f.partial_derivative(0, &[at]).unwrap() + 1.0).abs() < 1e-12);
    }

    #[test]
    fn sqrt_derivative() {
        let f = sqrt(Expr::<f64>::variable(0));
        assert_eq!(f.evaluate(&[9.0]).unwrap(), 3.0);
        assert_eq!(f.partial_derivative(0, &[4.0]).unwrap(), 0.25);
        assert!(f.partial_derivative(0, &[-4.0]).unwrap().is_nan());
    }

    #[test]
    fn if_positive_ignores_condition_gradient() {
        // cond depends on y, branches do not
        let x = Expr::<f64>::variable(0);
        let y = Expr::<f64>::variable(1);
        let f = if_positive(&y, &x, mul(&x, 2.0));
        assert_eq!(f.partial_derivative(1, &[1.0, 5.0]).unwrap(), 0.0);
        assert_eq!(f.partial_derivative(0, &[1.0, 5.0]).unwrap(), 1.0);
        assert_eq!(f.partial_derivative(0, &[1.0, -5.0]).unwrap(), 2.0);
    }

    #[test]
    fn select_positive_nan_takes_otherwise() {
        assert_eq!(select_positive(f64::NAN, 1.0, 2.0), 2.0);
        assert_eq!(select_positive(-1.0, 1.0, 2.0), 2.0);
    }
}
