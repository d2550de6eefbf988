use crate::recipes::{instance_of, iri_suffix};
use biofed_model::{vocab, Repository, RheaEntity};
use biofed_planner::RepositoryGraph;

const RHEA: Repository = Repository::Rhea;

/// The Rhea schema.
pub fn graph() -> RepositoryGraph {
    let mut graph = RepositoryGraph::new(RHEA);
    graph
        .add_entities(RheaEntity::ALL.iter().copied())
        .add_recipe(
            RheaEntity::Start,
            RheaEntity::Reaction,
            instance_of(RHEA, RheaEntity::Reaction, "rdfs:subClassOf", "rh:Reaction"),
        )
        .add_recipe(
            RheaEntity::Reaction,
            RheaEntity::ReactionId,
            iri_suffix(
                RHEA,
                RheaEntity::Reaction,
                RheaEntity::ReactionId,
                vocab::rhea::REACTION,
            ),
        )
        .add_triple(RheaEntity::Reaction, "rh:side", RheaEntity::ReactionSide)
        .add_triple(
            RheaEntity::ReactionSide,
            "rh:curatedOrder",
            RheaEntity::ReactionSideOrder,
        )
        .add_triple(RheaEntity::ReactionSide, "rh:contains", RheaEntity::Participant)
        .add_triple(RheaEntity::Participant, "rh:compound", RheaEntity::Compound)
        .add_triple(
            RheaEntity::Compound,
            "(rh:reactivePart?/rh:chebi)|rh:underlyingChebi",
            RheaEntity::Chebi,
        )
        .add_triple(RheaEntity::Chebi, "chebi:smiles", RheaEntity::Smiles);
    graph
}
