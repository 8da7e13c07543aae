//! Feed keys from the command line and print both readout formats.
//! Run with: cargo run --example readout "0.1+0.2="

use std::env;

use pocket_calc::engine::Calculator;
use pocket_calc::report::format_readout;
use pocket_calc::types::{OutputFormat, Symbol};

fn main() {
    let args: Vec<String> = env::args().collect();

    let keys = if args.len() > 1 {
        args[1].clone()
    } else {
        "0.1+0.2=".to_string()
    };

    let mut calc = Calculator::new();
    for c in keys.chars() {
        if let Some(symbol) = Symbol::from_char(c) {
            calc.press(symbol);
        }
    }

    println!("Keys: {}", keys);
    println!();
    print!("{}", format_readout(&calc.readout(), OutputFormat::Human));
    println!();
    println!("{}", format_readout(&calc.readout(), OutputFormat::Json));
}
