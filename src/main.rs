mod index;
mod interactive;
mod output;
mod utils;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use index::Concordance;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "concord")]
#[command(about = "Terminal-first concordance builder for plain-text files")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// File to build a concordance from (when no subcommand is given)
    file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Look words up without entering the interactive prompt
    Lookup {
        /// File to build a concordance from
        file: PathBuf,

        /// Words to look up
        #[arg(required = true)]
        words: Vec<String>,

        /// Emit results as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the most frequent words
    Top {
        /// File to build a concordance from
        file: PathBuf,

        /// Number of words to list (0 = all)
        #[arg(short = 'n', long, default_value_t = 10)]
        limit: usize,

        /// Emit results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show concordance statistics
    Stats {
        /// File to build a concordance from
        file: PathBuf,

        /// Emit results as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Lookup { file, words, json }) => {
            let concordance = Concordance::from_path(&file)?;
            let mut hits = 0usize;
            for word in &words {
                match concordance.lookup(word) {
                    Ok(result) => {
                        if json {
                            println!("{}", serde_json::to_string(&result)?);
                        } else {
                            output::print_lookup(&result)?;
                        }
                        hits += 1;
                    }
                    Err(missing) => {
                        if json {
                            eprintln!("{}", missing);
                        } else {
                            output::print_not_found(&missing.word)?;
                        }
                    }
                }
            }
            if hits == 0 {
                bail!("no words found");
            }
        }
        Some(Commands::Top { file, limit, json }) => {
            let concordance = Concordance::from_path(&file)?;
            let ranked = concordance.top_words(limit);
            if json {
                println!("{}", serde_json::to_string_pretty(&ranked)?);
            } else {
                output::print_top(&ranked)?;
            }
        }
        Some(Commands::Stats { file, json }) => {
            index::stats::show_stats(&file, json)?;
        }
        None => {
            let Some(file) = cli.file else {
                bail!("no input file given (see --help)");
            };
            let concordance = Concordance::from_path(&file)?;
            interactive::run(&concordance)?;
        }
    }

    Ok(())
}
