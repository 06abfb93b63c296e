//! Builds a few multivariable expressions once and differentiates them
//! at several points.
//!
//! Run with: `cargo run --example expression_gradient`

use autodf::{EvalError, Expr};

fn main() -> Result<(), EvalError> {
    println!("=== Expression Trees: Partial Derivatives ===\n");

    let x = Expr::<f64>::variable(0);
    let y = Expr::<f64>::variable(1);

    // Example 1: Difference of squares
    // f(x, y) = (x - 1)(x + 1) + (y - 1)(y + 1)
    println!("Example 1: f(x, y) = (x - 1)(x + 1) + (y - 1)(y + 1)");
    let f = (&x - 1.0) * (&x + 1.0) + (&y - 1.0) * (&y + 1.0);
    for point in [[1.0, 0.0], [-1.0, 0.0], [0.0, 1.0], [0.0, -1.0]] {
        println!(
            "  at {:?}: f = {}, ∂f/∂x = {}, ∂f/∂y = {}",
            point,
            f.evaluate(&point)?,
            f.partial_derivative(0, &point)?,
            f.partial_derivative(1, &point)?
        );
    }
    println!();

    // Example 2: Rosenbrock function
    // f(x, y) = (1 - x)² + 100(y - x²)²
    println!("Example 2: Rosenbrock f(x, y) = (1-x)² + 100(y-x²)²");
    let term1 = 1.0 - &x;
    let term2 = &y - &x * &x;
    let rosenbrock = &term1 * &term1 + 100.0 * &term2 * &term2;
    println!("  At minimum (1, 1):");
    println!("    f = {}", rosenbrock.evaluate(&[1.0, 1.0])?);
    println!("    ∇f = {:?}", rosenbrock.gradient(&[1.0, 1.0])?);
    println!("  At (0, 0):");
    println!("    f = {}", rosenbrock.evaluate(&[0.0, 0.0])?);
    println!("    ∇f = {:?} (expected: [-2, 0])", rosenbrock.gradient(&[0.0, 0.0])?);
    println!();

    // Example 3: Euclidean norm
    // f(x, y, z) = √(x² + y² + z²) at (3, 4, 0)
    println!("Example 3: Euclidean norm √(x² + y² + z²) at (3, 4, 0)");
    let z = Expr::<f64>::variable(2);
    let norm = (&x * &x + &y * &y + &z * &z).sqrt();
    println!("  ‖(3, 4, 0)‖ = {}", norm.evaluate(&[3.0, 4.0, 0.0])?);
    println!(
        "  ∇f = {:?} (expected: [0.6, 0.8, 0])",
        norm.gradient(&[3.0, 4.0, 0.0])?
    );
    println!();

    // Example 4: Ratio
    // f(x, y) = x / (x + y) at (3, 1)
    println!("Example 4: Ratio f(x, y) = x/(x+y) at (3, 1)");
    let ratio = &x / (&x + &y);
    println!("  f(3, 1) = {}", ratio.evaluate(&[3.0, 1.0])?);
    println!(
        "  ∂f/∂x = {} (expected: y/(x+y)² = 0.0625)",
        ratio.partial_derivative(0, &[3.0, 1.0])?
    );
    println!(
        "  ∂f/∂y = {} (expected: -x/(x+y)² = -0.1875)",
        ratio.partial_derivative(1, &[3.0, 1.0])?
    );
    println!();

    // Example 5: Too few inputs
    println!("Example 5: evaluating the norm with only two inputs");
    match norm.evaluate(&[3.0, 4.0]) {
        Ok(v) => println!("  unexpected value {}", v),
        Err(e) => println!("  error: {}", e),
    }

    Ok(())
}
