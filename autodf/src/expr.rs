//! Expression trees over numbered input variables.
//!
//! An [`Expr<T>`] is an immutable tree of [`Node<T>`]s. Leaves are
//! literal constants or variables identified by an index into the input
//! slice; interior nodes own their operands. Every tree can be
//!
//! - **evaluated** at an input vector ([`Expr::evaluate`]), and
//! - **differentiated** exactly with respect to any one input
//!   ([`Expr::partial_derivative`]) by forward-mode propagation of
//!   [`Dual`] numbers from the leaves to the root.
//!
//! Trees are built with the operators in [`crate::ops`] and the
//! combinators in [`crate::functions`]; composition never edits an
//! existing tree, it moves (or clones) the operands into a new one.
//!
//! # Example
//!
//! ```
//! use autodf::Expr;
//!
//! let x = Expr::<f64>::variable(0);
//! let y = Expr::<f64>::variable(1);
//!
//! // f(x, y) = x² + x·y
//! let f = x.clone() * x.clone() + x * y;
//!
//! assert_eq!(f.evaluate(&[3.0, 4.0]).unwrap(), 21.0);
//! assert_eq!(f.partial_derivative(0, &[3.0, 4.0]).unwrap(), 10.0); // 2x + y
//! assert_eq!(f.partial_derivative(1, &[3.0, 4.0]).unwrap(), 3.0);  // x
//! ```

use log::{debug, trace};
use num_traits::Float;

use crate::dual::Dual;
use crate::error::EvalError;

/// One node of an expression tree.
///
/// The set of node kinds is closed. Unary negation has no variant of
/// its own: `-x` is built as `Sub(Constant(0), x)`.
#[derive(Debug, Clone, PartialEq)]
pub enum Node<T> {
    /// A literal value.
    Constant(T),
    /// The input at this index.
    Variable(usize),
    /// `a + b`
    Sum(Box<Expr<T>>, Box<Expr<T>>),
    /// `a - b`
    Sub(Box<Expr<T>>, Box<Expr<T>>),
    /// `a * b`
    Mul(Box<Expr<T>>, Box<Expr<T>>),
    /// `a / b`
    Div(Box<Expr<T>>, Box<Expr<T>>),
    /// `sin(x)`
    Sin(Box<Expr<T>>),
    /// `cos(x)`
    Cos(Box<Expr<T>>),
    /// `asin(x)`
    Asin(Box<Expr<T>>),
    /// `sqrt(x)`
    Sqrt(Box<Expr<T>>),
    /// `atan2(y, x)`
    Atan2(Box<Expr<T>>, Box<Expr<T>>),
    /// `then` when `cond > 0`, otherwise `otherwise`.
    IfPositive {
        /// Selector; only its sign matters.
        cond: Box<Expr<T>>,
        /// Taken when `cond` is strictly positive.
        then: Box<Expr<T>>,
        /// Taken when `cond` is zero, negative or NaN.
        otherwise: Box<Expr<T>>,
    },
}

impl<T> Node<T> {
    /// Highest variable index referenced below this node.
    fn max_variable_index(&self) -> Option<usize> {
        match self {
            Node::Constant(_) => None,
            Node::Variable(id) => Some(*id),
            Node::Sum(a, b)
            | Node::Sub(a, b)
            | Node::Mul(a, b)
            | Node::Div(a, b)
            | Node::Atan2(a, b) => a.max_variable_index.max(b.max_variable_index),
            Node::Sin(x) | Node::Cos(x) | Node::Asin(x) | Node::Sqrt(x) => x.max_variable_index,
            Node::IfPositive {
                cond,
                then,
                otherwise,
            } => cond
                .max_variable_index
                .max(then.max_variable_index)
                .max(otherwise.max_variable_index),
        }
    }
}

/// An immutable scalar expression over numbered inputs.
///
/// `Expr` caches the highest variable index it reads, so the length of
/// an input slice is validated once at the root instead of at every
/// leaf.
///
/// Cloning an `Expr` deep-copies the tree. Reusing a subexpression in
/// several places (`x.clone() * x`) therefore gives each occurrence its
/// own copy; two [`Node::Variable`] leaves with the same index always
/// read the same input.
///
/// # Stack depth
///
/// Evaluation, differentiation, cloning, comparison and dropping all
/// recurse once per level of the tree. A long left fold such as
/// `(0..n).fold(e, |acc, t| acc + t)` has depth `n`, and depths in the
/// hundreds of thousands will overflow a default 2 MiB thread stack.
/// Balance long sums, or run on a thread with a larger stack.
///
/// # Examples
///
/// ```
/// use autodf::Expr;
///
/// let five = Expr::<f64>::constant(5.0);
/// assert_eq!(five.evaluate(&[]).unwrap(), 5.0);
/// assert_eq!(five.partial_derivative(0, &[1.0]).unwrap(), 0.0);
///
/// let x = Expr::<f64>::variable(0);
/// assert_eq!((x - five).evaluate(&[2.0]).unwrap(), -3.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expr<T> {
    node: Node<T>,
    max_variable_index: Option<usize>,
}

impl<T> From<Node<T>> for Expr<T> {
    fn from(node: Node<T>) -> Self {
        let max_variable_index = node.max_variable_index();
        Expr {
            node,
            max_variable_index,
        }
    }
}

impl<T: Float> From<T> for Expr<T> {
    fn from(value: T) -> Self {
        Expr::constant(value)
    }
}

impl<T: Clone> From<&Expr<T>> for Expr<T> {
    fn from(expr: &Expr<T>) -> Self {
        expr.clone()
    }
}

impl<T> Expr<T> {
    /// A literal leaf.
    pub fn constant(value: T) -> Self {
        Expr {
            node: Node::Constant(value),
            max_variable_index: None,
        }
    }

    /// A leaf reading `inputs[id]`.
    ///
    /// ```
    /// use autodf::Expr;
    ///
    /// let y = Expr::<f64>::variable(1);
    /// assert_eq!(y.max_variable_index(), Some(1));
    /// assert_eq!(y.evaluate(&[0.0, 11111.0]).unwrap(), 11111.0);
    /// ```
    pub fn variable(id: usize) -> Self {
        Expr {
            node: Node::Variable(id),
            max_variable_index: Some(id),
        }
    }

    /// The root node.
    pub fn node(&self) -> &Node<T> {
        &self.node
    }

    /// Highest variable index the tree reads, or `None` if it reads no
    /// variable at all.
    pub fn max_variable_index(&self) -> Option<usize> {
        self.max_variable_index
    }

    /// Minimum input length accepted by [`evaluate`](Self::evaluate)
    /// and [`partial_derivative`](Self::partial_derivative).
    pub fn required_inputs(&self) -> usize {
        self.max_variable_index.map_or(0, |id| id + 1)
    }

    /// True if the tree references no variable.
    pub fn is_constant(&self) -> bool {
        self.max_variable_index.is_none()
    }

    fn check_inputs(&self, actual: usize) -> Result<(), EvalError> {
        let required = self.required_inputs();
        if actual < required {
            debug!(
                "rejecting input of length {} for expression reading {} input(s)",
                actual, required
            );
            return Err(EvalError::InputTooShort { required, actual });
        }
        Ok(())
    }
}

impl<T: Float> Expr<T> {
    /// Evaluate the expression at `inputs`.
    ///
    /// Fails with [`EvalError::InputTooShort`] if
    /// `inputs.len() <= max_variable_index`; nothing is evaluated in
    /// that case. Numeric domain problems are not errors and surface as
    /// infinity or NaN.
    ///
    /// ```
    /// use autodf::{EvalError, Expr};
    ///
    /// let x = Expr::<f64>::variable(0);
    /// let y = Expr::<f64>::variable(1);
    /// assert_eq!((x.clone() + y.clone()).evaluate(&[3.0, 7.0]).unwrap(), 10.0);
    /// assert_eq!((x * y).evaluate(&[5.0, 5.0]).unwrap(), 25.0);
    ///
    /// let z = Expr::<f64>::variable(2);
    /// assert_eq!(
    ///     z.evaluate(&[1.0, 2.0]),
    ///     Err(EvalError::InputTooShort { required: 3, actual: 2 })
    /// );
    /// ```
    pub fn evaluate(&self, inputs: &[T]) -> Result<T, EvalError> {
        trace!("evaluating expression over {} input(s)", inputs.len());
        self.check_inputs(inputs.len())?;
        Ok(self.value(inputs))
    }

    /// Exact partial derivative with respect to input `wrt`, at `inputs`.
    ///
    /// Returns zero for any `wrt` the tree does not reference, including
    /// indices past the end of `inputs`. The input length precondition
    /// is the same as for [`evaluate`](Self::evaluate).
    ///
    /// ```
    /// use autodf::Expr;
    ///
    /// let x = Expr::<f64>::variable(0);
    /// let y = Expr::<f64>::variable(1);
    /// let f = (x.clone() - 1.0) * (x + 1.0) + (y.clone() - 1.0) * (y + 1.0);
    ///
    /// assert_eq!(f.partial_derivative(0, &[1.0, 0.0]).unwrap(), 2.0);
    /// assert_eq!(f.partial_derivative(1, &[1.0, 0.0]).unwrap(), 0.0);
    /// assert_eq!(f.partial_derivative(7, &[1.0, 0.0]).unwrap(), 0.0);
    /// ```
    pub fn partial_derivative(&self, wrt: usize, inputs: &[T]) -> Result<T, EvalError> {
        Ok(self.evaluate_with_partial(wrt, inputs)?.deriv)
    }

    /// Value and partial derivative with respect to `wrt`, from a single
    /// pass over the tree.
    ///
    /// ```
    /// use autodf::Expr;
    ///
    /// let x = Expr::<f64>::variable(0);
    /// let d = x.sin().evaluate_with_partial(0, &[0.0]).unwrap();
    /// assert_eq!(d.value, 0.0);
    /// assert_eq!(d.deriv, 1.0);
    /// ```
    pub fn evaluate_with_partial(&self, wrt: usize, inputs: &[T]) -> Result<Dual<T>, EvalError> {
        trace!(
            "differentiating expression w.r.t. input {} over {} input(s)",
            wrt,
            inputs.len()
        );
        self.check_inputs(inputs.len())?;
        Ok(self.tangent(wrt, inputs))
    }

    /// Partial derivatives with respect to every input slot.
    ///
    /// The result has one entry per element of `inputs`; slots the tree
    /// does not read get zero.
    ///
    /// ```
    /// use autodf::Expr;
    ///
    /// let x = Expr::<f64>::variable(0);
    /// let y = Expr::<f64>::variable(1);
    /// let f = x.clone() * x + y * 3.0;
    ///
    /// assert_eq!(f.gradient(&[2.0, 5.0, 9.0]).unwrap(), vec![4.0, 3.0, 0.0]);
    /// ```
    pub fn gradient(&self, inputs: &[T]) -> Result<Vec<T>, EvalError> {
        trace!("computing gradient over {} input(s)", inputs.len());
        self.check_inputs(inputs.len())?;
        Ok((0..inputs.len())
            .map(|wrt| self.tangent(wrt, inputs).deriv)
            .collect())
    }

    // Callers have checked `inputs.len() >= self.required_inputs()`, and
    // every subtree reads no higher index than its root.
    fn value(&self, inputs: &[T]) -> T {
        match &self.node {
            Node::Constant(v) => *v,
            Node::Variable(id) => inputs[*id],
            Node::Sum(a, b) => a.value(inputs) + b.value(inputs),
            Node::Sub(a, b) => a.value(inputs) - b.value(inputs),
            Node::Mul(a, b) => a.value(inputs) * b.value(inputs),
            Node::Div(a, b) => a.value(inputs) / b.value(inputs),
            Node::Sin(x) => x.value(inputs).sin(),
            Node::Cos(x) => x.value(inputs).cos(),
            Node::Asin(x) => x.value(inputs).asin(),
            Node::Sqrt(x) => x.value(inputs).sqrt(),
            Node::Atan2(y, x) => y.value(inputs).atan2(x.value(inputs)),
            Node::IfPositive {
                cond,
                then,
                otherwise,
            } => {
                if cond.value(inputs) > T::zero() {
                    then.value(inputs)
                } else {
                    otherwise.value(inputs)
                }
            }
        }
    }

    fn tangent(&self, wrt: usize, inputs: &[T]) -> Dual<T> {
        match &self.node {
            Node::Constant(v) => Dual::constant(*v),
            Node::Variable(id) if *id == wrt => Dual::variable(inputs[*id]),
            Node::Variable(id) => Dual::constant(inputs[*id]),
            Node::Sum(a, b) => a.tangent(wrt, inputs) + b.tangent(wrt, inputs),
            Node::Sub(a, b) => a.tangent(wrt, inputs) - b.tangent(wrt, inputs),
            Node::Mul(a, b) => a.tangent(wrt, inputs) * b.tangent(wrt, inputs),
            Node::Div(a, b) => a.tangent(wrt, inputs) / b.tangent(wrt, inputs),
            Node::Sin(x) => x.tangent(wrt, inputs).sin(),
            Node::Cos(x) => x.tangent(wrt, inputs).cos(),
            Node::Asin(x) => x.tangent(wrt, inputs).asin(),
            Node::Sqrt(x) => x.tangent(wrt, inputs).sqrt(),
            Node::Atan2(y, x) => y.tangent(wrt, inputs).atan2(x.tangent(wrt, inputs)),
            // The switching surface cond == 0 contributes nothing.
            Node::IfPositive {
                cond,
                then,
                otherwise,
            } => {
                if cond.value(inputs) > T::zero() {
                    then.tangent(wrt, inputs)
                } else {
                    otherwise.tangent(wrt, inputs)
                }
            }
        }
    }
}
