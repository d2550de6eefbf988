use crate::recipes::{instance_of, iri_suffix};
use biofed_model::{vocab, Entity, Repository, RheaEntity, UniprotEntity};
use biofed_planner::{Recipe, RepositoryGraph};
use biofed_sparql::{GraphPattern, GroupPattern, Triple};

const UNIPROT: Repository = Repository::Uniprot;

/// The UniProt schema.
///
/// Besides the UniProt entities, the graph contains [`RheaEntity::Reaction`], reached over the
/// catalyzed reaction of a catalytic activity. It links UniProt queries to the Rhea schema.
pub fn graph() -> RepositoryGraph {
    let mut graph = RepositoryGraph::new(UNIPROT);
    graph
        .add_entities(UniprotEntity::ALL.iter().copied())
        .add_entity(RheaEntity::Reaction)
        .add_recipe(
            UniprotEntity::Start,
            UniprotEntity::Protein,
            instance_of(UNIPROT, UniprotEntity::Protein, "a", "up:Protein"),
        )
        .add_recipe(
            UniprotEntity::Protein,
            UniprotEntity::ProteinId,
            iri_suffix(
                UNIPROT,
                UniprotEntity::Protein,
                UniprotEntity::ProteinId,
                vocab::uniprot::PROTEIN,
            ),
        )
        .add_recipe(
            UniprotEntity::Protein,
            UniprotEntity::FullName,
            recommended_name(),
        )
        .add_recipe(
            UniprotEntity::Protein,
            UniprotEntity::SubmittedName,
            optional_triple(
                UniprotEntity::Protein,
                "up:submittedName/up:fullName",
                UniprotEntity::SubmittedName,
            ),
        )
        .add_recipe(
            UniprotEntity::Protein,
            UniprotEntity::SequenceObject,
            sequence_object(),
        )
        .add_triple(
            UniprotEntity::SequenceObject,
            "rdf:value",
            UniprotEntity::Sequence,
        )
        .add_triple(UniprotEntity::Protein, "up:organism", UniprotEntity::Organism)
        .add_triple(
            UniprotEntity::Organism,
            "up:scientificName",
            UniprotEntity::OrganismName,
        )
        .add_triple(
            UniprotEntity::Organism,
            "^skos:narrowerTransitive+",
            UniprotEntity::TaxonFiltering,
        )
        .add_recipe(
            UniprotEntity::Organism,
            UniprotEntity::KingdomName,
            ranked_ancestor_name(
                UniprotEntity::Kingdom,
                vocab::uniprot::KINGDOM_RANK,
                UniprotEntity::KingdomName,
            ),
        )
        .add_recipe(
            UniprotEntity::Organism,
            UniprotEntity::SuperkingdomName,
            ranked_ancestor_name(
                UniprotEntity::Superkingdom,
                vocab::uniprot::SUPERKINGDOM_RANK,
                UniprotEntity::SuperkingdomName,
            ),
        )
        .add_recipe(
            UniprotEntity::Protein,
            UniprotEntity::Pfam,
            cross_reference(UniprotEntity::Pfam, vocab::uniprot::PFAM_DATABASE),
        )
        .add_recipe(
            UniprotEntity::Protein,
            UniprotEntity::PfamFiltering,
            cross_reference(UniprotEntity::PfamFiltering, vocab::uniprot::PFAM_DATABASE),
        )
        .add_recipe(
            UniprotEntity::Protein,
            UniprotEntity::Supfam,
            cross_reference(UniprotEntity::Supfam, vocab::uniprot::SUPFAM_DATABASE),
        )
        .add_triple(
            UniprotEntity::Protein,
            "up:annotation/up:catalyticActivity",
            UniprotEntity::CatalyticActivity,
        )
        .add_triple(
            UniprotEntity::CatalyticActivity,
            "up:catalyzedReaction",
            RheaEntity::Reaction,
        );
    graph
}

fn optional_triple(
    source: UniprotEntity,
    predicate: &'static str,
    target: UniprotEntity,
) -> Recipe {
    Recipe::new(UNIPROT, vec![source.into(), target.into()], move |mapping| {
        Ok(GraphPattern::optional(Triple::new(
            mapping.variable(source)?,
            predicate,
            mapping.variable(target)?,
        )))
    })
}

/// The optional full recommended name. Unreviewed entries often only carry a submitted name.
fn recommended_name() -> Recipe {
    Recipe::new(
        UNIPROT,
        vec![
            UniprotEntity::Protein.into(),
            UniprotEntity::RecommendedName.into(),
            UniprotEntity::FullName.into(),
        ],
        |mapping| {
            let recommended_name = mapping.variable(UniprotEntity::RecommendedName)?;
            Ok(GraphPattern::optional(GroupPattern::new(vec![
                Triple::new(
                    mapping.variable(UniprotEntity::Protein)?,
                    "up:recommendedName",
                    recommended_name,
                )
                .into(),
                Triple::new(
                    recommended_name,
                    "up:fullName",
                    mapping.variable(UniprotEntity::FullName)?,
                )
                .into(),
            ])))
        },
    )
}

/// The canonical sequence of the protein, isoforms are excluded.
fn sequence_object() -> Recipe {
    Recipe::new(
        UNIPROT,
        vec![
            UniprotEntity::Protein.into(),
            UniprotEntity::SequenceObject.into(),
        ],
        |mapping| {
            let sequence = mapping.variable(UniprotEntity::SequenceObject)?;
            Ok(GroupPattern::new(vec![
                Triple::new(
                    mapping.variable(UniprotEntity::Protein)?,
                    "up:sequence",
                    sequence,
                )
                .into(),
                Triple::new(sequence, "a", "up:Simple_Sequence").into(),
            ])
            .into())
        },
    )
}

/// A `rdfs:seeAlso` cross reference of the protein into `database`.
fn cross_reference(target: UniprotEntity, database: &'static str) -> Recipe {
    let database = vocab::iri(database, "");
    Recipe::new(
        UNIPROT,
        vec![UniprotEntity::Protein.into(), target.into()],
        move |mapping| {
            let target = mapping.variable(target)?;
            Ok(GroupPattern::new(vec![
                Triple::new(mapping.variable(UniprotEntity::Protein)?, "rdfs:seeAlso", target)
                    .into(),
                Triple::new(target, "up:database", database.as_str()).into(),
            ])
            .into())
        },
    )
}

/// The optional name of the ancestor taxon of the organism with the given `rank`.
fn ranked_ancestor_name(
    ancestor: UniprotEntity,
    rank: &'static str,
    name: UniprotEntity,
) -> Recipe {
    let rank = vocab::iri(rank, "");
    let required: Vec<Entity> = vec![
        UniprotEntity::Organism.into(),
        ancestor.into(),
        name.into(),
    ];
    Recipe::new(UNIPROT, required, move |mapping| {
        let ancestor = mapping.variable(ancestor)?;
        Ok(GraphPattern::optional(GroupPattern::new(vec![
            Triple::new(
                mapping.variable(UniprotEntity::Organism)?,
                "rdfs:subClassOf",
                ancestor,
            )
            .into(),
            Triple::new(ancestor, "up:rank", rank.as_str()).into(),
            Triple::new(ancestor, "up:scientificName", mapping.variable(name)?).into(),
        ])))
    })
}
