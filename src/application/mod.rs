pub mod ingest;
pub mod query;
