//! Property-based tests for evaluation and differentiation.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::functions::{cos, if_positive, sin};
    use crate::{EvalError, Expr};

    const VARS: usize = 3;

    // NaN compares unequal to itself; two NaNs count as the same result.
    fn same(a: f64, b: f64) -> bool {
        a == b || (a.is_nan() && b.is_nan())
    }

    fn scalar() -> impl Strategy<Value = f64> {
        -10.0f64..10.0f64
    }

    fn inputs() -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec(scalar(), VARS)
    }

    // Random trees over variables 0..VARS. Division and the
    // domain-restricted functions are left out so values stay finite
    // and the arithmetic identities below compare exactly.
    fn expr() -> impl Strategy<Value = Expr<f64>> {
        let leaf = prop_oneof![
            scalar().prop_map(Expr::<f64>::constant),
            (0..VARS).prop_map(Expr::<f64>::variable),
        ];
        leaf.prop_recursive(4, 32, 3, |inner| {
            prop_oneof![
                (inner.clone(), inner.clone()).prop_map(|(a, b)| a + b),
                (inner.clone(), inner.clone()).prop_map(|(a, b)| a - b),
                (inner.clone(), inner.clone()).prop_map(|(a, b)| a * b),
                inner.clone().prop_map(|x| sin(x)),
                inner.clone().prop_map(|x| cos(x)),
                inner.clone().prop_map(|x| -x),
                (inner.clone(), inner.clone(), inner)
                    .prop_map(|(c, a, b)| if_positive(c, a, b)),
            ]
        })
    }

    proptest! {
        #[test]
        fn constant_derivative_is_zero(c in scalar(), k in 0usize..8, v in inputs()) {
            let e = Expr::<f64>::constant(c);
            prop_assert_eq!(e.evaluate(&v).unwrap(), c);
            prop_assert_eq!(e.partial_derivative(k, &v).unwrap(), 0.0);
        }

        #[test]
        fn variable_derivative_is_kronecker(i in 0..VARS, j in 0usize..8, v in inputs()) {
            let e = Expr::<f64>::variable(i);
            let expected = if i == j { 1.0 } else { 0.0 };
            prop_assert_eq!(e.evaluate(&v).unwrap(), v[i]);
            prop_assert_eq!(e.partial_derivative(j, &v).unwrap(), expected);
        }

        #[test]
        fn sum_rule(a in expr(), b in expr(), k in 0..VARS, v in inputs()) {
            let (va, vb) = (a.evaluate(&v).unwrap(), b.evaluate(&v).unwrap());
            let (da, db) = (
                a.partial_derivative(k, &v).unwrap(),
                b.partial_derivative(k, &v).unwrap(),
            );
            let f = a + b;
            prop_assert!(same(f.evaluate(&v).unwrap(), va + vb));
            prop_assert!(same(f.partial_derivative(k, &v).unwrap(), da + db));
        }

        #[test]
        fn difference_rule(a in expr(), b in expr(), k in 0..VARS, v in inputs()) {
            let (va, vb) = (a.evaluate(&v).unwrap(), b.evaluate(&v).unwrap());
            let (da, db) = (
                a.partial_derivative(k, &v).unwrap(),
                b.partial_derivative(k, &v).unwrap(),
            );
            let f = a - b;
            prop_assert!(same(f.evaluate(&v).unwrap(), va - vb));
            prop_assert!(same(f.partial_derivative(k, &v).unwrap(), da - db));
        }

        #[test]
        fn product_rule(a in expr(), b in expr(), k in 0..VARS, v in inputs()) {
            let (va, vb) = (a.evaluate(&v).unwrap(), b.evaluate(&v).unwrap());
            let (da, db) = (
                a.partial_derivative(k, &v).unwrap(),
                b.partial_derivative(k, &v).unwrap(),
            );
            let f = a * b;
            prop_assert!(same(f.evaluate(&v).unwrap(), va * vb));
            prop_assert!(same(f.partial_derivative(k, &v).unwrap(), da * vb + db * va));
        }

        #[test]
        fn quotient_rule(a in expr(), b in expr(), k in 0..VARS, v in inputs()) {
            let (va, vb) = (a.evaluate(&v).unwrap(), b.evaluate(&v).unwrap());
            let (da, db) = (
                a.partial_derivative(k, &v).unwrap(),
                b.partial_derivative(k, &v).unwrap(),
            );
            let f = a / b;
            prop_assert!(same(f.evaluate(&v).unwrap(), va / vb));
            prop_assert!(same(
                f.partial_derivative(k, &v).unwrap(),
                (da * vb - db * va) / (vb * vb)
            ));
        }

        #[test]
        fn if_positive_selects_by_sign(
            c in expr(),
            a in expr(),
            b in expr(),
            k in 0..VARS,
            v in inputs(),
        ) {
            let positive = c.evaluate(&v).unwrap() > 0.0;
            let chosen = if positive { &a } else { &b };
            let (value, deriv) = (
                chosen.evaluate(&v).unwrap(),
                chosen.partial_derivative(k, &v).unwrap(),
            );
            let f = if_positive(c, a.clone(), b.clone());
            prop_assert!(same(f.evaluate(&v).unwrap(), value));
            prop_assert!(same(f.partial_derivative(k, &v).unwrap(), deriv));
        }

        #[test]
        fn single_pass_agrees_with_separate_calls(e in expr(), k in 0..VARS, v in inputs()) {
            let d = e.evaluate_with_partial(k, &v).unwrap();
            prop_assert!(same(d.value, e.evaluate(&v).unwrap()));
            prop_assert!(same(d.deriv, e.partial_derivative(k, &v).unwrap()));
        }

        #[test]
        fn gradient_collects_partials(e in expr(), v in inputs()) {
            let g = e.gradient(&v).unwrap();
            prop_assert_eq!(g.len(), v.len());
            for (k, gk) in g.iter().enumerate() {
                prop_assert!(same(*gk, e.partial_derivative(k, &v).unwrap()));
            }
        }

        #[test]
        fn unreferenced_index_has_zero_partial(e in expr(), v in inputs()) {
            prop_assert_eq!(e.partial_derivative(VARS + 5, &v).unwrap(), 0.0);
        }

        #[test]
        fn short_input_always_fails(e in expr(), v in inputs()) {
            if let Some(max) = e.max_variable_index() {
                let short = &v[..max];
                prop_assert_eq!(
                    e.evaluate(short),
                    Err(EvalError::InputTooShort { required: max + 1, actual: max })
                );
                prop_assert!(e.partial_derivative(0, short).is_err());
            } else {
                prop_assert!(e.evaluate(&[]).is_ok());
            }
        }
    }
}
