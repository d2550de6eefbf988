use crate::EndpointError;
use biofed_model::Repository;
use oxiri::Iri;
use serde::Deserialize;
use std::collections::BTreeMap;

/// The SPARQL endpoint of every repository.
///
/// Starts with the public endpoints. Overrides must be absolute IRIs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "BTreeMap<Repository, String>")]
pub struct Endpoints {
    urls: BTreeMap<Repository, String>,
}

impl Endpoints {
    /// The endpoint of `repository`.
    pub fn get(&self, repository: Repository) -> &str {
        self.urls
            .get(&repository)
            .map_or(repository.default_endpoint(), String::as_str)
    }

    /// Overrides the endpoint of `repository`.
    pub fn set(
        &mut self,
        repository: Repository,
        url: impl Into<String>,
    ) -> Result<(), EndpointError> {
        let url = url.into();
        if let Err(error) = Iri::parse(url.as_str()) {
            return Err(EndpointError {
                repository,
                iri: url,
                error,
            });
        }
        self.urls.insert(repository, url);
        Ok(())
    }

    /// Returns these endpoints with the endpoint of `repository` overridden.
    pub fn with(
        mut self,
        repository: Repository,
        url: impl Into<String>,
    ) -> Result<Self, EndpointError> {
        self.set(repository, url)?;
        Ok(self)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            urls: Repository::ALL
                .iter()
                .map(|repository| (*repository, repository.default_endpoint().to_owned()))
                .collect(),
        }
    }
}

impl TryFrom<BTreeMap<Repository, String>> for Endpoints {
    type Error = EndpointError;

    fn try_from(overrides: BTreeMap<Repository, String>) -> Result<Self, Self::Error> {
        let mut endpoints = Self::default();
        for (repository, url) in overrides {
            endpoints.set(repository, url)?;
        }
        Ok(endpoints)
    }
}

/// Options of a [`QueryPlanner`](crate::QueryPlanner).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlannerOptions {
    /// Whether the query eliminates duplicate rows.
    pub distinct: bool,
    pub endpoints: Endpoints,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            distinct: true,
            endpoints: Endpoints::default(),
        }
    }
}
