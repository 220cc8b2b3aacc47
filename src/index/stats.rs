use crate::index::build::Concordance;
use anyhow::Result;
use std::path::Path;

/// Display summary statistics for the concordance of a file
pub fn show_stats(path: &Path, json: bool) -> Result<()> {
    let concordance = Concordance::from_path(path)?;
    let summary = concordance.summary();

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Concordance Statistics");
    println!("======================");
    println!();
    println!("Source file:      {}", path.display());
    println!("Lines read:       {}", summary.lines);
    println!("Tokens indexed:   {}", summary.total_tokens);
    println!("Distinct words:   {}", summary.distinct_words);

    let top = concordance.top_words(10);
    if !top.is_empty() {
        println!();
        println!("Most frequent words:");
        for (word, count) in &top {
            println!("  {:15} {}", word, count);
        }
    }

    Ok(())
}
