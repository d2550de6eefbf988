#![allow(clippy::print_stdout)]
use crate::cli::{Args, Command, QueryArgs};
use crate::config::{load_config, RequestConfig};
use crate::execute::execute;
use crate::output::validate_output_path;
use anyhow::Context;
use biofed::planner::RepositoryQuery;
use biofed::repositories::rhea::RheaQuery;
use biofed::repositories::uniprot::UniprotQuery;
use clap::Parser;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufWriter;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod execute;
mod output;

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("biofed=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match Args::parse().command {
        Command::Uniprot(args) => run::<UniprotQuery>(args).await,
        Command::Rhea(args) => run::<RheaQuery>(args).await,
    }
}

async fn run<Q>(args: QueryArgs) -> anyhow::Result<()>
where
    Q: RepositoryQuery + DeserializeOwned,
{
    if let Some(out_path) = &args.out_path {
        validate_output_path(out_path)?;
    }
    let config: RequestConfig<Q> = load_config(&args.config)?;
    let planner = biofed::planner_with_options(config.options);
    let query = planner
        .plan(&config.query)
        .context("Could not build the query")?;

    if args.print_query {
        println!("{query}");
    }

    let Some(out_path) = args.out_path else {
        if !args.print_query {
            warn!("Neither --print-query nor --out-path is set, nothing to do");
        }
        return Ok(());
    };
    let endpoint = planner.options().endpoints.get(config.query.repository());
    info!(endpoint, "Executing the query");
    let table = execute(&reqwest::Client::new(), endpoint, &query).await?;

    let file = File::create(&out_path)
        .with_context(|| format!("Could not create the file {}", out_path.display()))?;
    table.write_csv(BufWriter::new(file))?;
    info!(rows = table.len(), path = %out_path.display(), "Results written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use assert_cmd::Command;
    use assert_fs::prelude::*;
    use assert_fs::NamedTempFile;
    use clap::CommandFactory;
    use predicates::prelude::*;

    fn cli_command() -> Command {
        let mut command = Command::new(env!("CARGO"));
        command.arg("run").arg("--bin").arg("biofed");
        command.arg("--");
        command
    }

    fn config_file(content: &str) -> Result<NamedTempFile> {
        let file = NamedTempFile::new("request.json")?;
        file.write_str(content)?;
        Ok(file)
    }

    #[test]
    fn cli_help() {
        cli_command()
            .assert()
            .failure()
            .stderr(predicate::str::contains("Usage"));
    }

    #[test]
    fn cli_print_uniprot_query() -> Result<()> {
        let config = config_file(
            r#"{
                "dataSelector": { "columns": ["Protein"] },
                "dataFilter": { "reviewed": true }
            }"#,
        )?;
        cli_command()
            .arg("uniprot")
            .arg(config.path())
            .arg("--print-query")
            .assert()
            .success()
            .stdout(
                "PREFIX up: <http://purl.uniprot.org/core/>\n\
                 PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>\n\
                 PREFIX rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#>\n\
                 PREFIX skos: <http://www.w3.org/2004/02/skos/core#>\n\
                 PREFIX chebi: <http://purl.obolibrary.org/obo/chebi/>\n\
                 PREFIX rh: <http://rdf.rhea-db.org/>\n\
                 SELECT DISTINCT ?protein\n\
                 WHERE {\n    \
                     {\n        \
                         ?protein a up:Protein .\n        \
                         ?protein up:reviewed true .\n    \
                     }\n\
                 }\n",
            );
        Ok(())
    }

    #[test]
    fn cli_endpoint_override_is_used_for_services() -> Result<()> {
        let config = config_file(
            r#"{
                "dataSelector": { "columns": ["ProteinId", "Chebi"] },
                "endpoints": { "rhea": "http://localhost:7878/rhea" }
            }"#,
        )?;
        cli_command()
            .arg("uniprot")
            .arg(config.path())
            .arg("-q")
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "SERVICE <http://localhost:7878/rhea> {",
            ));
        Ok(())
    }

    #[test]
    fn cli_config_disables_distinct() -> Result<()> {
        let config = config_file(
            r#"{
                "dataSelector": { "columns": ["Protein"] },
                "distinct": false
            }"#,
        )?;
        cli_command()
            .arg("uniprot")
            .arg(config.path())
            .arg("-q")
            .assert()
            .success()
            .stdout(predicate::str::contains("SELECT ?protein\n"));
        Ok(())
    }

    #[test]
    fn cli_rejects_misspelled_filter_key() -> Result<()> {
        let config = config_file(
            r#"{
                "dataSelector": { "columns": ["Protein"] },
                "dataFilters": { "taxa": ["9606"] }
            }"#,
        )?;
        cli_command()
            .arg("uniprot")
            .arg(config.path())
            .arg("-q")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown keys 'dataFilters'"))
            .stdout("");
        Ok(())
    }

    #[test]
    fn cli_print_rhea_query() -> Result<()> {
        let config = config_file(
            r#"{
                "dataSelector": { "columns": ["ReactionId", "Smiles"] },
                "dataFilter": { "reactions": ["10000"] }
            }"#,
        )?;
        cli_command()
            .arg("rhea")
            .arg(config.path())
            .arg("--print-query")
            .assert()
            .success()
            .stdout(predicate::str::contains("SELECT DISTINCT ?reaction_id ?smiles"))
            .stdout(predicate::str::contains("<http://rdf.rhea-db.org/10000>"))
            .stdout(predicate::str::contains("SERVICE").not());
        Ok(())
    }

    #[test]
    fn cli_rejects_spreadsheet_output() -> Result<()> {
        let config = config_file(r#"{ "dataSelector": { "columns": ["Protein"] } }"#)?;
        cli_command()
            .arg("uniprot")
            .arg(config.path())
            .arg("--out-path")
            .arg("proteins.xlsx")
            .assert()
            .failure()
            .stderr(predicate::str::contains(".csv"));
        Ok(())
    }

    #[test]
    fn cli_rejects_unknown_column() -> Result<()> {
        let config = config_file(r#"{ "dataSelector": { "columns": ["Mass"] } }"#)?;
        cli_command()
            .arg("uniprot")
            .arg(config.path())
            .arg("-q")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid config file"));
        Ok(())
    }

    #[test]
    fn cli_rejects_invalid_endpoint() -> Result<()> {
        let config = config_file(
            r#"{
                "dataSelector": { "columns": ["Protein"] },
                "endpoints": { "uniprot": "not an iri" }
            }"#,
        )?;
        cli_command()
            .arg("uniprot")
            .arg(config.path())
            .arg("-q")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid endpoint"));
        Ok(())
    }

    #[test]
    fn cli_missing_config() {
        cli_command()
            .arg("rhea")
            .arg("does-not-exist.json")
            .arg("-q")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Could not open the config file"));
    }

    #[test]
    fn clap_debug() {
        Args::command().debug_assert()
    }
}
