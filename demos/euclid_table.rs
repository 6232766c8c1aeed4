//! Prints every euclidean rhythm the generator produces, one line per (fill, steps).
//!
//! Usage:
//!   cargo run --example euclid_table
//!   cargo run --example euclid_table -- 8

use er_engine::is_step_active;
use er_ir::MAX_STEPS;
use std::env;

fn main() {
    let only: Option<u8> = env::args().nth(1).and_then(|a| a.parse().ok());

    for steps in 1..=MAX_STEPS {
        if only.is_some_and(|s| s != steps) {
            continue;
        }
        for fill in 0..=steps {
            let rhythm: String = (0..steps)
                .map(|p| if is_step_active(fill, steps, p) { 'x' } else { '.' })
                .collect();
            println!("E({:>2},{:>2})  {}", fill, steps, rhythm);
        }
    }
}
