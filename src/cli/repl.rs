use crate::domain::entities::document::ScoredResult;
use crate::SemSearch;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Line-oriented query loop. Blank input re-prompts, `quit`/`exit`
/// (case-insensitive) or end-of-input terminates, anything else is run as a
/// search query. Provider failures are printed and the loop continues.
pub async fn run(
    app: &SemSearch,
    top_k: usize,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = tokio::io::stdin();
    let mut lines = BufReader::new(stdin).lines();

    loop {
        print!("query> ");
        std::io::stdout().flush()?;

        let line = match lines.next_line().await? {
            Some(line) => line,
            None => break,
        };
        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        if query.eq_ignore_ascii_case("quit") || query.eq_ignore_ascii_case("exit") {
            break;
        }

        match app.query(query, top_k).await {
            Ok(results) => print_results(&results, json)?,
            Err(e) => eprintln!("Error: {e}"),
        }
    }

    Ok(())
}

fn print_results(results: &[ScoredResult], json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No results.");
        return Ok(());
    }
    for (rank, result) in results.iter().enumerate() {
        println!(
            "{:>2}. [{:.4}] {}",
            rank + 1,
            result.score,
            result.document.text
        );
    }
    Ok(())
}
