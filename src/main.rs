use clap::Parser;
use semsearch::cli::commands::Cli;
use semsearch::cli::repl;
use semsearch::SemSearch;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let app = match SemSearch::from_env() {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if !cli.docs.is_empty() {
        match app.ingest_batch(cli.docs.clone()).await {
            Ok(docs) => eprintln!("Ingested {} documents", docs.len()),
            Err(e) => {
                eprintln!("Error ingesting documents: {e}");
                std::process::exit(1);
            }
        }
    }

    if let Err(e) = repl::run(&app, cli.top_k, cli.json).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
