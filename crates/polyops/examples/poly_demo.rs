//! Polynomial arithmetic walkthrough.
//!
//! Run with: cargo run --example poly_demo

use polyops::prelude::*;

// Helper to create polynomials over f64
fn poly(coeffs: &[f64]) -> Polynomial<f64> {
    Polynomial::from_coeffs(coeffs.len() - 1, coeffs).expect("slice length matches degree")
}

fn main() {
    println!("Polynomial Operations");
    println!("=====================\n");

    arithmetic();
    scaling_and_evaluation();
    indexing();
}

fn arithmetic() {
    let p1 = poly(&[2.0, 1.0]); // x + 2
    let p2 = poly(&[1.0, 3.0]); // 3x + 1

    println!("P1(x) = {p1}");
    println!("P2(x) = {p2}");
    println!("P1(x) + P2(x) = {}", &p1 + &p2);
    println!("P1(x) - P2(x) = {}", &p1 - &p2);
    println!("P1(x) * P2(x) = {}\n", &p1 * &p2);
}

fn scaling_and_evaluation() {
    let p = poly(&[3.0, -1.0, 2.0]); // 2x^2 - x + 3

    println!("P(x) = {p}");
    println!("3 * P(x) = {}", 3.0 * &p);
    println!("P(x) * 3 = {}", &p * 3.0);
    println!("P(2) = {}\n", p.eval(&2.0));
}

fn indexing() {
    let mut p = poly(&[3.0, -1.0, 2.0]);

    println!("P(x) = {p}");
    println!("P[1] = {} (highest power)", p.get(1).unwrap());
    println!("P[3] = {} (constant term)", p.get(3).unwrap());

    *p.get_mut(2).unwrap() = 5.0;
    println!("after P[2] = 5: P(x) = {p}");

    match p.get(7) {
        Ok(c) => println!("P[7] = {c}"),
        Err(e) => println!("P[7] -> error: {e}"),
    }
}
