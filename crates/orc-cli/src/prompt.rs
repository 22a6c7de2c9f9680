//! Plain stdin prompts

use anyhow::{bail, Context, Result};
use std::io::{self, BufRead, Write};

/// Prompt for a single line of input.
pub fn line(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;

    Ok(input.trim().to_string())
}

/// Prompt for a sensitive value without echoing it to the terminal.
pub fn secret(message: &str) -> Result<String> {
    let term = console::Term::stdout();
    term.write_str(message)?;

    let value = term.read_secure_line()?;
    Ok(value.trim().to_string())
}

/// Numbered selection from a list of options. Returns the index of
/// the chosen option.
pub fn select(message: &str, options: &[String]) -> Result<usize> {
    if options.is_empty() {
        bail!("nothing to select from");
    }

    println!("{}", message);
    for (i, option) in options.iter().enumerate() {
        println!("  {}) {}", i + 1, option);
    }

    let choice = line(&format!("Select [1-{}]: ", options.len()))?;
    let index: usize = choice
        .parse()
        .with_context(|| format!("'{}' is not a number", choice))?;

    if index == 0 || index > options.len() {
        bail!("selection out of range: {}", index);
    }

    Ok(index - 1)
}
