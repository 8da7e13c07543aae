//! Keystroke walkthrough - run with: cargo run --example chaining

use pocket_calc::engine::Calculator;
use pocket_calc::types::Symbol;

fn main() {
    let keys = "3+4*2=";
    let mut calc = Calculator::new();

    println!("Pressing: {}", keys);
    println!();

    for c in keys.chars() {
        if let Some(symbol) = Symbol::from_char(c) {
            calc.press(symbol);
            println!("  [{}] -> {}", c, calc.display());
        }
    }

    println!();
    println!("Left-to-right, no precedence: (3 + 4) * 2 = {}", calc.display());
}
