use crate::output::ResultTable;
use anyhow::Context;
use biofed::sparql::SelectQuery;
use reqwest::header::ACCEPT;

/// Sends `query` to the SPARQL endpoint `endpoint` and reads back the CSV results.
pub async fn execute(
    client: &reqwest::Client,
    endpoint: &str,
    query: &SelectQuery,
) -> anyhow::Result<ResultTable> {
    let text = query.to_string();
    let response = client
        .get(endpoint)
        .query(&[("query", text.as_str()), ("format", "csv")])
        .header(ACCEPT, "text/csv")
        .send()
        .await
        .with_context(|| format!("Could not send the query to '{endpoint}'"))?
        .error_for_status()
        .with_context(|| format!("The endpoint '{endpoint}' rejected the query"))?;
    let body = response
        .bytes()
        .await
        .with_context(|| format!("Could not read the response of '{endpoint}'"))?;
    tracing::debug!(bytes = body.len(), "Received results");

    let table = ResultTable::from_csv(&body)?;
    table.check_columns(&query.projected_names())?;
    Ok(table)
}
