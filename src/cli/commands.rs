use clap::Parser;

#[derive(Parser)]
#[command(
    name = "semsearch",
    about = "In-memory semantic search over embedding vectors"
)]
pub struct Cli {
    /// Document to ingest before the prompt loop starts (repeatable)
    #[arg(long = "doc", value_name = "TEXT")]
    pub docs: Vec<String>,

    /// Number of results per query
    #[arg(long, default_value = "5")]
    pub top_k: usize,

    /// Print results as JSON instead of formatted text
    #[arg(long)]
    pub json: bool,
}
