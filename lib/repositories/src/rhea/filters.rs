use crate::recipes::inline_iris;
use biofed_model::{vocab, Repository, RheaEntity};
use biofed_planner::Recipe;

/// Keeps the reactions with the Rhea ids `reactions`, e.g. `10000`.
///
/// The recipe belongs to Rhea. In UniProt queries it is therefore evaluated by the Rhea
/// endpoint, after UniProt has bound the catalyzed reactions.
pub fn reaction_filter(reactions: &[String]) -> Recipe {
    inline_iris(
        Repository::Rhea,
        RheaEntity::Reaction,
        vocab::rhea::REACTION,
        reactions,
    )
}
