use clap::{Parser, Subcommand, ValueHint};
use std::path::PathBuf;

#[derive(Parser)]
#[command(about, version, name = "biofed")]
/// Collects protein and reaction data from UniProt and Rhea with federated SPARQL queries
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Query UniProt, following catalyzed reactions into Rhea if needed
    Uniprot(QueryArgs),
    /// Query Rhea
    Rhea(QueryArgs),
}

#[derive(clap::Args)]
pub struct QueryArgs {
    /// JSON file with the selected columns, the filters and optional endpoint overrides
    #[arg(value_hint = ValueHint::FilePath)]
    pub config: PathBuf,
    /// Print the generated SPARQL query to stdout
    #[arg(short = 'q', long)]
    pub print_query: bool,
    /// Execute the query and write its results to this file
    ///
    /// Only CSV files are supported, the path must end with `.csv`.
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub out_path: Option<PathBuf>,
}
