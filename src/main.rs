use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use word_shiftr::scramble;

/// word-shiftr - word-alternating Caesar scrambler
///
/// Scrambles a message by shifting even-indexed words forward and
/// odd-indexed words backward through the alphabet.
#[derive(Parser)]
#[command(name = "word-shiftr")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scramble a message with a secret key
    Scramble {
        /// Message to scramble (prompted for when omitted)
        message: Option<String>,

        /// Secret shift key (prompted for when omitted)
        #[arg(long, short, allow_negative_numbers = true)]
        key: Option<i64>,
    },

    /// Show version information
    Version,
}

fn handle_scramble(message: Option<String>, key: Option<i64>) -> Result<()> {
    let message = match message {
        Some(m) => m,
        None => prompt_line("Enter a message to scramble: ")?,
    };

    let key = match key {
        Some(k) => k,
        None => {
            let raw = prompt_line("Enter the secret number (key): ")?;
            raw.trim()
                .parse::<i64>()
                .with_context(|| format!("Failed to parse key {:?} as an integer", raw.trim()))?
        }
    };

    println!("Scrambled Message: {}", scramble(&message, key));

    Ok(())
}

/// Prompt on stdout and read one line from stdin.
///
/// Only the trailing newline is stripped: leading and trailing spaces in
/// the message are part of the input.
fn prompt_line(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scramble { message, key } => handle_scramble(message, key),
        Commands::Version => {
            println!("word-shiftr {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
