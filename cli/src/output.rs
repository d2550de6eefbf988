use anyhow::{bail, Context};
use std::ffi::OsStr;
use std::io::Write;
use std::path::Path;

/// Tabular query results. Columns are named after the projected variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ResultTable {
    /// Parses SPARQL CSV results. The header row carries the variable names.
    pub fn from_csv(data: &[u8]) -> anyhow::Result<Self> {
        let mut reader = csv::Reader::from_reader(data);
        let columns = reader
            .headers()
            .context("The results have no header row")?
            .iter()
            .map(str::to_owned)
            .collect();
        let rows = reader
            .records()
            .map(|record| Ok(record?.iter().map(str::to_owned).collect()))
            .collect::<anyhow::Result<_>>()
            .context("Invalid CSV results")?;
        Ok(Self { columns, rows })
    }

    /// Fails unless the columns are exactly `expected`. A query without projected variables
    /// accepts any columns.
    pub fn check_columns(&self, expected: &[&str]) -> anyhow::Result<()> {
        if !expected.is_empty() && self.columns != expected {
            bail!(
                "Expected the columns {} but the endpoint returned {}",
                expected.join(", "),
                self.columns.join(", ")
            )
        }
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn write_csv(&self, writer: impl Write) -> anyhow::Result<()> {
        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(&self.columns)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Only CSV output is supported.
pub fn validate_output_path(path: &Path) -> anyhow::Result<()> {
    match path.extension().and_then(OsStr::to_str) {
        Some(extension) if extension.eq_ignore_ascii_case("csv") => Ok(()),
        Some(extension) if extension.eq_ignore_ascii_case("xlsx") => bail!(
            "Spreadsheet output is not supported, write {} as a .csv file instead",
            path.display()
        ),
        _ => bail!(
            "The output path {} must have the csv extension",
            path.display()
        ),
    }
}
