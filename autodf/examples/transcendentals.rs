//! Derivatives through sin, cos, asin, sqrt, atan2 and branches.
//!
//! Run with: `cargo run --example transcendentals`

use autodf::functions::{atan2, if_positive};
use autodf::{EvalError, Expr};

fn main() -> Result<(), EvalError> {
    println!("=== Expression Trees: Transcendental Functions ===\n");

    let x = Expr::<f64>::variable(0);
    let y = Expr::<f64>::variable(1);

    println!("Example 1: f(x) = sin(x) at x=0");
    let f = x.clone().sin();
    println!("  f(0) = {}", f.evaluate(&[0.0])?);
    println!("  f'(0) = {} (expected: 1.0)", f.partial_derivative(0, &[0.0])?);
    println!();

    println!("Example 2: f(x) = cos(x) at x=π");
    let f = x.clone().cos();
    let pi = [std::f64::consts::PI];
    println!("  f(π) = {}", f.evaluate(&pi)?);
    println!("  f'(π) = {} (expected: ~0.0)", f.partial_derivative(0, &pi)?);
    println!();

    println!("Example 3: f(x) = asin(x) at x=0.5");
    let f = x.clone().asin();
    println!("  f(0.5) = {}", f.evaluate(&[0.5])?);
    println!(
        "  f'(0.5) = {} (expected: 1/√0.75 ≈ 1.1547)",
        f.partial_derivative(0, &[0.5])?
    );
    println!("  f(2) = {} (outside the domain)", f.evaluate(&[2.0])?);
    println!();

    println!("Example 4: f(x) = √x at x=9");
    let f = x.clone().sqrt();
    println!("  f(9) = {}", f.evaluate(&[9.0])?);
    println!(
        "  f'(9) = {} (expected: 1/6 ≈ 0.1667)",
        f.partial_derivative(0, &[9.0])?
    );
    println!();

    println!("Example 5: polar angle θ = atan2(y, x) at (1, 1)");
    let theta = atan2(&y, &x);
    println!("  θ = {}", theta.evaluate(&[1.0, 1.0])?);
    println!(
        "  ∇θ = {:?} (expected: [-0.5, 0.5])",
        theta.gradient(&[1.0, 1.0])?
    );
    println!();

    println!("Example 6: f(x) = sin(x²) at x=√(π/2)");
    let f = (&x * &x).sin();
    let at = [(std::f64::consts::PI / 2.0).sqrt()];
    println!("  f(√(π/2)) = {}", f.evaluate(&at)?);
    println!("  f'(√(π/2)) = {}", f.partial_derivative(0, &at)?);
    println!("  (Chain rule: f'(x) = 2x·cos(x²))");
    println!();

    println!("Example 7: ReLU r(x) = x if x > 0 else 0");
    let relu = if_positive(&x, &x, 0.0);
    for v in [-2.0, 0.0, 2.0] {
        println!(
            "  r({}) = {}, r'({}) = {}",
            v,
            relu.evaluate(&[v])?,
            v,
            relu.partial_derivative(0, &[v])?
        );
    }

    Ok(())
}
