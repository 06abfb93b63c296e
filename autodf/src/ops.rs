//! Operator overloads for [`Expr`].
//!
//! `+ - * /` accept anything convertible into an `Expr<T>` on the right
//! (another expression, a borrowed expression, or a scalar), and work on
//! owned or borrowed left operands. Borrowed operands are cloned into
//! the new tree. `f32` and `f64` can also appear on the left.
//!
//! ```
//! use autodf::Expr;
//!
//! let x = Expr::<f64>::variable(0);
//! let f = 3.0 * &x * &x - 2.0 / &x + 1.0;
//!
//! assert_eq!(f.evaluate(&[2.0]).unwrap(), 12.0);
//! assert_eq!(f.partial_derivative(0, &[2.0]).unwrap(), 12.5); // 6x + 2/x²
//! ```

use num_traits::Float;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::expr::Expr;
use crate::functions;

macro_rules! impl_binary_op {
    ($Op:ident, $method:ident) => {
        impl<T: Float, R: Into<Expr<T>>> $Op<R> for Expr<T> {
            type Output = Expr<T>;

            fn $method(self, rhs: R) -> Expr<T> {
                functions::$method(self, rhs)
            }
        }

        impl<T: Float, R: Into<Expr<T>>> $Op<R> for &Expr<T> {
            type Output = Expr<T>;

            fn $method(self, rhs: R) -> Expr<T> {
                functions::$method(self, rhs)
            }
        }
    };
}

impl_binary_op!(Add, add);
impl_binary_op!(Sub, sub);
impl_binary_op!(Mul, mul);
impl_binary_op!(Div, div);

/// `-x` is `0 - x`; there is no separate negation node.
impl<T: Float> Neg for Expr<T> {
    type Output = Expr<T>;

    fn neg(self) -> Expr<T> {
        functions::neg(self)
    }
}

impl<T: Float> Neg for &Expr<T> {
    type Output = Expr<T>;

    fn neg(self) -> Expr<T> {
        functions::neg(self)
    }
}

// A blanket `impl<T> Add<Expr<T>> for T` is rejected by coherence, so the
// scalar-on-the-left forms are spelled out per float type.
macro_rules! impl_scalar_lhs {
    ($t:ty => $( $Op:ident :: $method:ident ),+) => {
        $(
            impl $Op<Expr<$t>> for $t {
                type Output = Expr<$t>;

                fn $method(self, rhs: Expr<$t>) -> Expr<$t> {
                    functions::$method(self, rhs)
                }
            }

            impl $Op<&Expr<$t>> for $t {
                type Output = Expr<$t>;

                fn $method(self, rhs: &Expr<$t>) -> Expr<$t> {
                    functions::$method(self, rhs)
                }
            }
        )+
    };
}

impl_scalar_lhs!(f32 => Add::add, Sub::sub, Mul::mul, Div::div);
impl_scalar_lhs!(f64 => Add::add, Sub::sub, Mul::mul, Div::div);
