//! pocket-calc CLI
//!
//! Four-function pocket calculator for the terminal.

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use pocket_calc::engine::Calculator;
use pocket_calc::report::format_readout;
use pocket_calc::tui;
use pocket_calc::types::{OutputFormat, Symbol};

#[derive(Parser)]
#[command(name = "pocket-calc")]
#[command(about = "Four-function pocket calculator for the terminal")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive calculator (the default)
    Tui {
        /// Skip the intro screen
        #[arg(long)]
        no_intro: bool,
    },

    /// Press a sequence of keys and print the final readout
    Keys {
        /// Keys to press, e.g. "3+4*2="
        input: String,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        None => cmd_tui(false),
        Some(Commands::Tui { no_intro }) => cmd_tui(no_intro),
        Some(Commands::Keys { input, format }) => cmd_keys(&input, format.into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_tui(no_intro: bool) -> Result<(), String> {
    tui::run(!no_intro).map_err(|e| e.to_string())
}

/// Press each recognized character of `input` in order.
///
/// Unrecognized characters are ignored, so whitespace between keys is free.
fn cmd_keys(input: &str, format: OutputFormat) -> Result<(), String> {
    let mut calc = Calculator::new();

    for c in input.chars() {
        if let Some(symbol) = Symbol::from_char(c) {
            calc.press(symbol);
        }
    }

    print!("{}", format_readout(&calc.readout(), format));

    Ok(())
}
