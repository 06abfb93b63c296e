//! Evaluates one expression over a grid of points on the Rayon pool.
//!
//! Run with: `cargo run --example parallel_batch --features parallel`

use autodf::parallel::{evaluate_batch, gradient_batch};
use autodf::{EvalError, Expr};

fn main() -> Result<(), EvalError> {
    let x = Expr::<f64>::variable(0);
    let y = Expr::<f64>::variable(1);

    // f(x, y) = sin(x)·y + x²
    let f = x.clone().sin() * &y + &x * &x;

    let points: Vec<[f64; 2]> = (0..8)
        .flat_map(|i| (0..8).map(move |j| [i as f64 * 0.25, j as f64 * 0.25]))
        .collect();

    let values = evaluate_batch(&f, &points)?;
    let grads = gradient_batch(&f, &points)?;

    for ((p, v), g) in points.iter().zip(&values).zip(&grads).take(5) {
        println!("f({:?}) = {:.6}, ∇f = [{:.6}, {:.6}]", p, v, g[0], g[1]);
    }
    println!("... {} points total", points.len());

    Ok(())
}
