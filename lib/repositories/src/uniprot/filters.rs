use crate::recipes::inline_iris;
use biofed_model::{vocab, Repository, UniprotEntity};
use biofed_planner::Recipe;
use biofed_sparql::Triple;

/// Keeps proteins with a Pfam cross reference to one of `pfams`, e.g. `PF00042`.
pub fn pfam_filter(pfams: &[String]) -> Recipe {
    inline_iris(
        Repository::Uniprot,
        UniprotEntity::PfamFiltering,
        vocab::uniprot::PFAM,
        pfams,
    )
}

/// Keeps proteins with a SUPFAM cross reference to one of `supfams`, e.g. `SSF46458`.
pub fn supfam_filter(supfams: &[String]) -> Recipe {
    inline_iris(
        Repository::Uniprot,
        UniprotEntity::Supfam,
        vocab::uniprot::SUPFAM,
        supfams,
    )
}

/// Keeps proteins of organisms below one of the taxa `taxa`, given as NCBI taxonomy ids.
pub fn taxa_filter(taxa: &[String]) -> Recipe {
    inline_iris(
        Repository::Uniprot,
        UniprotEntity::TaxonFiltering,
        vocab::uniprot::TAXONOMY,
        taxa,
    )
}

/// Keeps either the reviewed (Swiss-Prot) or the unreviewed (TrEMBL) entries.
pub fn reviewed_filter(reviewed: bool) -> Recipe {
    let value = if reviewed { "true" } else { "false" };
    Recipe::new(
        Repository::Uniprot,
        vec![UniprotEntity::Protein.into()],
        move |mapping| {
            Ok(Triple::new(mapping.variable(UniprotEntity::Protein)?, "up:reviewed", value).into())
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use biofed_model::Entity;
    use biofed_planner::VariableMapping;

    #[test]
    fn reviewed_filter_is_a_triple() {
        let recipe = reviewed_filter(false);
        assert_eq!(
            recipe.required_entities(),
            [Entity::Uniprot(UniprotEntity::Protein)]
        );
        let mapping =
            VariableMapping::try_new(recipe.required_entities().iter().copied()).unwrap();
        assert_eq!(
            recipe.build(&mapping).unwrap().to_string(),
            "?protein up:reviewed false ."
        );
    }

    #[test]
    fn pfam_filter_restricts_the_filtering_reference() {
        let recipe = pfam_filter(&["PF00042".to_owned()]);
        assert_eq!(recipe.repository(), Repository::Uniprot);
        assert_eq!(
            recipe.required_entities(),
            [Entity::Uniprot(UniprotEntity::PfamFiltering)]
        );
    }
}
