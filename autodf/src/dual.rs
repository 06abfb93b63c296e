//! Value/tangent pairs carried by forward-mode chain-rule propagation.
//!
//! A `Dual` holds a node's value and the derivative of that value with
//! respect to one chosen input. It is written here as `a + a′·ε` with
//! `ε² = 0`, which is just notation for the per-node closed-form rules.
//! [`Expr::partial_derivative`](crate::Expr::partial_derivative) walks
//! an expression tree once in dual arithmetic: the queried variable is
//! seeded with `a′ = 1`, every other leaf with `a′ = 0`, and each node
//! combines its children's pairs with the rule for its operator.
//!
//! - `(a + a′ε) + (b + b′ε) = (a+b) + (a′+b′)ε`
//! - `(a + a′ε) - (b + b′ε) = (a-b) + (a′-b′)ε`
//! - `(a + a′ε) * (b + b′ε) = ab + (a′b + b′a)ε`
//! - `(a + a′ε) / (b + b′ε) = a/b + ((a′b - b′a) / b²)ε`
//!
//! # Example
//!
//! ```
//! use autodf::Dual;
//!
//! // f(x) = x² + 2x at x = 3
//! let x = Dual::variable(3.0);
//! let f = x * x + Dual::constant(2.0) * x;
//!
//! assert_eq!(f.value, 15.0);
//! assert_eq!(f.deriv, 8.0);
//! ```

use num_traits::{Float, One, Zero};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A value together with its derivative along one input direction.
///
/// # Examples
///
/// ```
/// use autodf::Dual;
///
/// // f(x) = (x + 1) * (x + 2) at x = 3
/// let x = Dual::variable(3.0);
/// let f = (x + Dual::constant(1.0)) * (x + Dual::constant(2.0));
///
/// assert_eq!(f.value, 20.0);
/// assert_eq!(f.deriv, 9.0); // f'(x) = 2x + 3
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dual<T> {
    /// The primal value
    pub value: T,
    /// The derivative (tangent)
    pub deriv: T,
}

impl<T> Dual<T> {
    /// Create a dual number with explicit value and derivative.
    ///
    /// ```
    /// use autodf::Dual;
    ///
    /// let d = Dual::new(3.0, 1.0);
    /// assert_eq!((d.value, d.deriv), (3.0, 1.0));
    /// ```
    pub fn new(value: T, deriv: T) -> Self {
        Dual { value, deriv }
    }

    /// A value that does not depend on the differentiation variable.
    pub fn constant(value: T) -> Self
    where
        T: Zero,
    {
        Dual {
            value,
            deriv: T::zero(),
        }
    }

    /// The differentiation variable itself (`dx/dx = 1`).
    pub fn variable(value: T) -> Self
    where
        T: One,
    {
        Dual {
            value,
            deriv: T::one(),
        }
    }
}

impl<T: Float> Dual<T> {
    /// Sine: `d/dx(sin f) = f′·cos f`.
    ///
    /// ```
    /// use autodf::Dual;
    ///
    /// let f = Dual::variable(0.0_f64).sin();
    /// assert_eq!(f.value, 0.0);
    /// assert_eq!(f.deriv, 1.0);
    /// ```
    pub fn sin(self) -> Self {
        Dual {
            value: self.value.sin(),
            deriv: self.deriv * self.value.cos(),
        }
    }

    /// Cosine: `d/dx(cos f) = -f′·sin f`.
    pub fn cos(self) -> Self {
        Dual {
            value: self.value.cos(),
            deriv: -self.deriv * self.value.sin(),
        }
    }

    /// Arcsine: `d/dx(asin f) = f′ / √(1 - f²)`.
    ///
    /// Outside `[-1, 1]` both components are NaN.
    ///
    /// ```
    /// use autodf::Dual;
    ///
    /// let f = Dual::variable(0.0_f64).asin();
    /// assert_eq!(f.value, 0.0);
    /// assert_eq!(f.deriv, 1.0);
    /// ```
    pub fn asin(self) -> Self {
        Dual {
            value: self.value.asin(),
            deriv: self.deriv / (T::one() - self.value * self.value).sqrt(),
        }
    }

    /// Square root: `d/dx(√f) = 0.5·f′ / √f`.
    ///
    /// ```
    /// use autodf::Dual;
    ///
    /// let f = Dual::variable(4.0_f64).sqrt();
    /// assert_eq!(f.value, 2.0);
    /// assert_eq!(f.deriv, 0.25);
    /// ```
    pub fn sqrt(self) -> Self {
        let root = self.value.sqrt();
        let half = T::one() / (T::one() + T::one());
        Dual {
            value: root,
            deriv: half * self.deriv / root,
        }
    }

    /// Two-argument arctangent of `self` (the `y` operand) and `x`.
    ///
    /// With `n = y² + x²` the derivative is `(x·y′ - y·x′) / n`, which is
    /// NaN at the origin.
    ///
    /// ```
    /// use autodf::Dual;
    ///
    /// // d/dy atan2(y, 1) at y = 0 is 1
    /// let y = Dual::variable(0.0_f64);
    /// let f = y.atan2(Dual::constant(1.0));
    /// assert_eq!(f.value, 0.0);
    /// assert_eq!(f.deriv, 1.0);
    /// ```
    pub fn atan2(self, x: Self) -> Self {
        let n = self.value * self.value + x.value * x.value;
        Dual {
            value: self.value.atan2(x.value),
            deriv: (x.value * self.deriv - self.value * x.deriv) / n,
        }
    }
}

impl<T> Add for Dual<T>
where
    T: Add<Output = T>,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Dual {
            value: self.value + rhs.value,
            deriv: self.deriv + rhs.deriv,
        }
    }
}

impl<T> Sub for Dual<T>
where
    T: Sub<Output = T>,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Dual {
            value: self.value - rhs.value,
            deriv: self.deriv - rhs.deriv,
        }
    }
}

/// Product rule: `(fg)′ = f′g + g′f`.
impl<T> Mul for Dual<T>
where
    T: Mul<Output = T> + Add<Output = T> + Copy,
{
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Dual {
            value: self.value * rhs.value,
            deriv: self.deriv * rhs.value + rhs.deriv * self.value,
        }
    }
}

/// Quotient rule: `(f/g)′ = (f′g - g′f) / g²`.
///
/// A zero denominator is not trapped; the result is whatever the float
/// type produces (infinity or NaN).
///
/// ```
/// use autodf::Dual;
///
/// // f(x) = x / 2 at x = 6
/// let f = Dual::variable(6.0) / Dual::constant(2.0);
/// assert_eq!(f.value, 3.0);
/// assert_eq!(f.deriv, 0.5);
/// ```
impl<T> Div for Dual<T>
where
    T: Div<Output = T> + Mul<Output = T> + Sub<Output = T> + Copy,
{
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Dual {
            value: self.value / rhs.value,
            deriv: (self.deriv * rhs.value - rhs.deriv * self.value) / (rhs.value * rhs.value),
        }
    }
}

impl<T> Neg for Dual<T>
where
    T: Neg<Output = T>,
{
    type Output = Self;

    fn neg(self) -> Self {
        Dual {
            value: -self.value,
            deriv: -self.deriv,
        }
    }
}
