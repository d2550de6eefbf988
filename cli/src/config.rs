use anyhow::{bail, Context};
use biofed::planner::PlannerOptions;
use itertools::Itertools;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// The content of a configuration file: a request plus the planner options (`distinct`,
/// `endpoints`) next to it.
#[derive(Debug, Deserialize)]
pub struct RequestConfig<Q> {
    #[serde(flatten)]
    pub query: Q,
    #[serde(flatten)]
    pub options: PlannerOptions,
    /// Keys claimed by neither the request nor the options.
    #[serde(flatten)]
    unknown: BTreeMap<String, serde_json::Value>,
}

impl<Q: DeserializeOwned> RequestConfig<Q> {
    pub fn from_reader(reader: impl Read) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_reader(reader)?;
        if !config.unknown.is_empty() {
            bail!(
                "Unknown keys {}",
                config.unknown.keys().map(|key| format!("'{key}'")).join(", ")
            )
        }
        Ok(config)
    }
}

pub fn load_config<Q: DeserializeOwned>(path: &Path) -> anyhow::Result<RequestConfig<Q>> {
    let file = File::open(path)
        .with_context(|| format!("Could not open the config file {}", path.display()))?;
    RequestConfig::from_reader(BufReader::new(file))
        .with_context(|| format!("Invalid config file {}", path.display()))
}
