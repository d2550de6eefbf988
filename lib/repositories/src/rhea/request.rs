use super::filters::reaction_filter;
use crate::{non_empty, DataSelector};
use biofed_model::{Entity, Repository, RheaEntity};
use biofed_planner::{Recipe, RepositoryQuery};
use serde::Deserialize;

/// A column of a Rhea result table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum RheaFeature {
    Reaction,
    ReactionId,
    /// The curated order of the side within its reaction.
    ReactionSide,
    /// The compound taking part in a reaction side.
    ReactionParticipant,
    Chebi,
    Smiles,
}

impl RheaFeature {
    /// The entity bound to the column.
    pub fn entity(self) -> Entity {
        match self {
            RheaFeature::Reaction => RheaEntity::Reaction,
            RheaFeature::ReactionId => RheaEntity::ReactionId,
            RheaFeature::ReactionSide => RheaEntity::ReactionSideOrder,
            RheaFeature::ReactionParticipant => RheaEntity::Compound,
            RheaFeature::Chebi => RheaEntity::Chebi,
            RheaFeature::Smiles => RheaEntity::Smiles,
        }
        .into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RheaFilter {
    pub reactions: Option<Vec<String>>,
}

/// A request for reaction data.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RheaQuery {
    pub data_selector: DataSelector<RheaFeature>,
    #[serde(default)]
    pub data_filter: RheaFilter,
}

impl RheaQuery {
    pub fn new(columns: Vec<RheaFeature>) -> Self {
        Self {
            data_selector: DataSelector { columns },
            data_filter: RheaFilter::default(),
        }
    }

    #[must_use]
    pub fn with_filter(mut self, filter: RheaFilter) -> Self {
        self.data_filter = filter;
        self
    }
}

impl RepositoryQuery for RheaQuery {
    fn repository(&self) -> Repository {
        Repository::Rhea
    }

    fn root_entity(&self) -> Entity {
        RheaEntity::Start.into()
    }

    fn projected_entities(&self) -> Vec<Entity> {
        self.data_selector
            .columns
            .iter()
            .map(|feature| feature.entity())
            .collect()
    }

    fn filter_recipes(&self) -> Vec<Recipe> {
        non_empty("reactions", self.data_filter.reactions.as_deref())
            .map(reaction_filter)
            .into_iter()
            .collect()
    }
}
