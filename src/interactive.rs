//! Interactive lookup prompt over a built concordance.

use crate::index::Concordance;
use crate::output;
use anyhow::Result;
use std::io::{self, Write};

/// Run the lookup prompt until a blank line or EOF.
///
/// Misses are reported and the prompt continues; only I/O failures on the
/// terminal itself abort the loop.
pub fn run(concordance: &Concordance) -> Result<()> {
    println!("Enter a word to look it up in the concordance.");
    println!("Enter a blank line to exit.");

    let stdin = io::stdin();
    let mut input = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;

        input.clear();
        if stdin.read_line(&mut input)? == 0 {
            // EOF
            println!();
            break;
        }
        let word = input.trim();
        if word.is_empty() {
            break;
        }

        match concordance.lookup(word) {
            Ok(result) => output::print_lookup(&result)?,
            Err(missing) => output::print_not_found(&missing.word)?,
        }
    }

    println!("Exiting...");
    Ok(())
}
