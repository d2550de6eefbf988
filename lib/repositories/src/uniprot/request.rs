use super::filters::{pfam_filter, reviewed_filter, supfam_filter, taxa_filter};
use crate::rhea::reaction_filter;
use crate::{non_empty, DataSelector};
use biofed_model::{Entity, Repository, RheaEntity, UniprotEntity};
use biofed_planner::{Recipe, RepositoryQuery};
use serde::Deserialize;

/// A column of a UniProt result table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum UniprotFeature {
    Protein,
    ProteinId,
    /// The full recommended name.
    Name,
    /// The full submitted name, if any.
    SubmittedName,
    Sequence,
    /// The scientific name of the organism.
    Organism,
    Kingdom,
    Superkingdom,
    Pfam,
    Supfam,
    /// A reaction catalyzed by the protein, resolved through Rhea.
    Reaction,
    /// A ChEBI compound taking part in a catalyzed reaction.
    Chebi,
}

impl UniprotFeature {
    /// The entity bound to the column.
    pub fn entity(self) -> Entity {
        match self {
            UniprotFeature::Protein => UniprotEntity::Protein.into(),
            UniprotFeature::ProteinId => UniprotEntity::ProteinId.into(),
            UniprotFeature::Name => UniprotEntity::FullName.into(),
            UniprotFeature::SubmittedName => UniprotEntity::SubmittedName.into(),
            UniprotFeature::Sequence => UniprotEntity::Sequence.into(),
            UniprotFeature::Organism => UniprotEntity::OrganismName.into(),
            UniprotFeature::Kingdom => UniprotEntity::KingdomName.into(),
            UniprotFeature::Superkingdom => UniprotEntity::SuperkingdomName.into(),
            UniprotFeature::Pfam => UniprotEntity::Pfam.into(),
            UniprotFeature::Supfam => UniprotEntity::Supfam.into(),
            UniprotFeature::Reaction => RheaEntity::Reaction.into(),
            UniprotFeature::Chebi => RheaEntity::Chebi.into(),
        }
    }
}

/// Restrictions of a UniProt request. Absent fields do not restrict anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UniprotFilter {
    pub pfams: Option<Vec<String>>,
    pub supfams: Option<Vec<String>>,
    pub taxa: Option<Vec<String>>,
    pub reviewed: Option<bool>,
    /// Rhea reaction ids, e.g. `10000`.
    pub reactions: Option<Vec<String>>,
}

/// A request for protein data.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniprotQuery {
    pub data_selector: DataSelector<UniprotFeature>,
    #[serde(default)]
    pub data_filter: UniprotFilter,
}

impl UniprotQuery {
    pub fn new(columns: Vec<UniprotFeature>) -> Self {
        Self {
            data_selector: DataSelector { columns },
            data_filter: UniprotFilter::default(),
        }
    }

    #[must_use]
    pub fn with_filter(mut self, filter: UniprotFilter) -> Self {
        self.data_filter = filter;
        self
    }
}

impl RepositoryQuery for UniprotQuery {
    fn repository(&self) -> Repository {
        Repository::Uniprot
    }

    fn root_entity(&self) -> Entity {
        UniprotEntity::Start.into()
    }

    fn projected_entities(&self) -> Vec<Entity> {
        self.data_selector
            .columns
            .iter()
            .map(|feature| feature.entity())
            .collect()
    }

    fn filter_recipes(&self) -> Vec<Recipe> {
        let filter = &self.data_filter;
        let mut recipes = Vec::new();
        if let Some(pfams) = non_empty("pfams", filter.pfams.as_deref()) {
            recipes.push(pfam_filter(pfams));
        }
        if let Some(reviewed) = filter.reviewed {
            recipes.push(reviewed_filter(reviewed));
        }
        if let Some(taxa) = non_empty("taxa", filter.taxa.as_deref()) {
            recipes.push(taxa_filter(taxa));
        }
        if let Some(supfams) = non_empty("supfams", filter.supfams.as_deref()) {
            recipes.push(supfam_filter(supfams));
        }
        if let Some(reactions) = non_empty("reactions", filter.reactions.as_deref()) {
            recipes.push(reaction_filter(reactions));
        }
        recipes
    }
}
