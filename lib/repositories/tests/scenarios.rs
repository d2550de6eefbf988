use biofed_model::{Entity, Repository, RheaEntity, UniprotEntity};
use biofed_planner::{KnowledgeGraph, PlanError, QueryPlanner, RepositoryQuery};
use biofed_repositories::rhea::{RheaFeature, RheaFilter, RheaQuery};
use biofed_repositories::uniprot::{self, UniprotFeature, UniprotFilter, UniprotQuery};
use biofed_repositories::build_knowledge_graph;
use biofed_sparql::SelectQuery;
use std::sync::Arc;

fn planner() -> QueryPlanner {
    QueryPlanner::new(Arc::new(build_knowledge_graph()))
}

/// The query without its prefix declarations.
fn body(query: &SelectQuery) -> String {
    query.render()[query.prefixes.len()..].join("\n")
}

fn ids(values: &[&str]) -> Option<Vec<String>> {
    Some(values.iter().map(ToString::to_string).collect())
}

#[test]
fn names_and_sequences_stay_in_uniprot() {
    let query = planner()
        .plan(&UniprotQuery::new(vec![
            UniprotFeature::Name,
            UniprotFeature::Sequence,
        ]))
        .unwrap();
    insta::assert_snapshot!(query, @r"
    PREFIX up: <http://purl.uniprot.org/core/>
    PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>
    PREFIX rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#>
    PREFIX skos: <http://www.w3.org/2004/02/skos/core#>
    PREFIX chebi: <http://purl.obolibrary.org/obo/chebi/>
    PREFIX rh: <http://rdf.rhea-db.org/>
    SELECT DISTINCT ?full_name ?sequence
    WHERE {
        {
            ?protein a up:Protein .
            OPTIONAL {
                ?protein up:recommendedName ?recommended_name .
                ?recommended_name up:fullName ?full_name .
            }
            {
                ?protein up:sequence ?sequence_object .
                ?sequence_object a up:Simple_Sequence .
            }
            ?sequence_object rdf:value ?sequence .
        }
    }
    ");
}

#[test]
fn names_are_optional() {
    let query = planner()
        .plan(&UniprotQuery::new(vec![
            UniprotFeature::Name,
            UniprotFeature::SubmittedName,
        ]))
        .unwrap();
    insta::assert_snapshot!(body(&query), @r"
    SELECT DISTINCT ?full_name ?submitted_name
    WHERE {
        {
            ?protein a up:Protein .
            OPTIONAL {
                ?protein up:recommendedName ?recommended_name .
                ?recommended_name up:fullName ?full_name .
            }
            OPTIONAL {
                ?protein up:submittedName/up:fullName ?submitted_name .
            }
        }
    }
    ");
}

#[test]
fn reaction_filter_is_sent_to_rhea() {
    let query = UniprotQuery::new(vec![UniprotFeature::Protein, UniprotFeature::Reaction])
        .with_filter(UniprotFilter {
            reactions: ids(&["10000", "10004"]),
            ..UniprotFilter::default()
        });
    let query = planner().plan(&query).unwrap();
    insta::assert_snapshot!(body(&query), @r"
    SELECT DISTINCT ?protein ?reaction
    WHERE {
        {
            ?protein a up:Protein .
            ?protein up:annotation/up:catalyticActivity ?catalytic_activity .
            ?catalytic_activity up:catalyzedReaction ?reaction .
        }
        SERVICE <https://sparql.rhea-db.org/sparql> {
            VALUES ?reaction {
                <http://rdf.rhea-db.org/10000>
                <http://rdf.rhea-db.org/10004>
            }
        }
    }
    ");
}

#[test]
fn taxa_are_inlined_in_input_order() {
    let query = UniprotQuery::new(vec![UniprotFeature::Protein, UniprotFeature::Organism])
        .with_filter(UniprotFilter {
            taxa: ids(&["9606", "10090"]),
            reviewed: Some(true),
            ..UniprotFilter::default()
        });
    let query = planner().plan(&query).unwrap();
    insta::assert_snapshot!(body(&query), @r"
    SELECT DISTINCT ?protein ?organism_name
    WHERE {
        {
            ?protein a up:Protein .
            ?protein up:organism ?organism .
            ?organism up:scientificName ?organism_name .
            ?organism ^skos:narrowerTransitive+ ?taxon_filtering .
            ?protein up:reviewed true .
            VALUES ?taxon_filtering {
                <http://purl.uniprot.org/taxonomy/9606>
                <http://purl.uniprot.org/taxonomy/10090>
            }
        }
    }
    ");
}

#[test]
fn empty_selection_is_vacuous() {
    let query: UniprotQuery =
        serde_json::from_str(r#"{ "dataSelector": { "columns": [] } }"#).unwrap();
    let query = planner().plan(&query).unwrap();
    assert!(query.variables.is_empty());
    assert!(query.pattern.is_empty());
    insta::assert_snapshot!(body(&query), @r"
    SELECT DISTINCT *
    WHERE {
    }
    ");
}

#[test]
fn optional_ranks_and_cross_references() {
    let query = UniprotQuery::new(vec![
        UniprotFeature::ProteinId,
        UniprotFeature::Kingdom,
        UniprotFeature::Pfam,
    ])
    .with_filter(UniprotFilter {
        pfams: ids(&["PF00042"]),
        ..UniprotFilter::default()
    });
    let query = planner().plan(&query).unwrap();
    insta::assert_snapshot!(body(&query), @r"
    SELECT DISTINCT ?protein_id ?kingdom_name ?pfam
    WHERE {
        {
            ?protein a up:Protein .
            BIND((substr(str(?protein), 33)) AS ?protein_id)
            ?protein up:organism ?organism .
            {
                ?protein rdfs:seeAlso ?pfam .
                ?pfam up:database <http://purl.uniprot.org/database/Pfam> .
            }
            {
                ?protein rdfs:seeAlso ?pfam_filtering .
                ?pfam_filtering up:database <http://purl.uniprot.org/database/Pfam> .
            }
            OPTIONAL {
                ?organism rdfs:subClassOf ?kingdom .
                ?kingdom up:rank <http://purl.uniprot.org/core/Kingdom> .
                ?kingdom up:scientificName ?kingdom_name .
            }
            VALUES ?pfam_filtering {
                <http://purl.uniprot.org/pfam/PF00042>
            }
        }
    }
    ");
}

#[test]
fn compounds_of_catalyzed_reactions_are_federated() {
    let request = UniprotQuery::new(vec![UniprotFeature::ProteinId, UniprotFeature::Chebi]);
    let planner = planner();
    let query = planner.plan(&request).unwrap();
    insta::assert_snapshot!(body(&query), @r"
    SELECT DISTINCT ?protein_id ?chebi
    WHERE {
        {
            ?protein a up:Protein .
            BIND((substr(str(?protein), 33)) AS ?protein_id)
            ?protein up:annotation/up:catalyticActivity ?catalytic_activity .
            ?catalytic_activity up:catalyzedReaction ?reaction .
        }
        SERVICE <https://sparql.rhea-db.org/sparql> {
            ?reaction rh:side ?reaction_side .
            ?reaction_side rh:contains ?participant .
            ?participant rh:compound ?compound .
            ?compound (rh:reactivePart?/rh:chebi)|rh:underlyingChebi ?chebi .
        }
    }
    ");

    let plan = planner
        .resolve(
            request.repository(),
            request.root_entity(),
            &request.projected_entities(),
            request.filter_recipes(),
        )
        .unwrap();
    for group in plan.groups() {
        assert!(group
            .recipes()
            .all(|recipe| recipe.repository() == group.repository()));
    }
    assert_eq!(
        plan.repositories(),
        [Repository::Uniprot, Repository::Rhea]
    );
}

#[test]
fn rhea_request_stays_in_rhea() {
    let query = RheaQuery::new(vec![
        RheaFeature::ReactionId,
        RheaFeature::ReactionSide,
        RheaFeature::Smiles,
    ])
    .with_filter(RheaFilter {
        reactions: ids(&["10000"]),
    });
    let query = planner().plan(&query).unwrap();
    insta::assert_snapshot!(body(&query), @r"
    SELECT DISTINCT ?reaction_id ?reaction_side_order ?smiles
    WHERE {
        {
            ?reaction rdfs:subClassOf rh:Reaction .
            BIND((substr(str(?reaction), 24)) AS ?reaction_id)
            ?reaction rh:side ?reaction_side .
            ?reaction_side rh:curatedOrder ?reaction_side_order .
            ?reaction_side rh:contains ?participant .
            ?participant rh:compound ?compound .
            ?compound (rh:reactivePart?/rh:chebi)|rh:underlyingChebi ?chebi .
            ?chebi chebi:smiles ?smiles .
            VALUES ?reaction {
                <http://rdf.rhea-db.org/10000>
            }
        }
    }
    ");
}

#[test]
fn repeated_planning_is_byte_identical() {
    let request = UniprotQuery::new(vec![
        UniprotFeature::Chebi,
        UniprotFeature::Superkingdom,
        UniprotFeature::SubmittedName,
        UniprotFeature::Supfam,
    ])
    .with_filter(UniprotFilter {
        supfams: ids(&["SSF46458"]),
        reactions: ids(&["10000"]),
        ..UniprotFilter::default()
    });
    let first = planner().plan(&request).unwrap().to_string();
    for _ in 0..5 {
        assert_eq!(planner().plan(&request).unwrap().to_string(), first);
    }
}

#[test]
fn entity_of_a_missing_repository_is_unreachable() {
    let planner = QueryPlanner::new(Arc::new(KnowledgeGraph::compose([uniprot::graph()])));
    let result = planner.plan(&UniprotQuery::new(vec![
        UniprotFeature::Protein,
        UniprotFeature::Chebi,
    ]));
    assert!(matches!(
        result,
        Err(PlanError::UnreachableEntity {
            entity: Entity::Rhea(RheaEntity::Chebi),
            root: Entity::Uniprot(UniprotEntity::Start),
        })
    ));
}
