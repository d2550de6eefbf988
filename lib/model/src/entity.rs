use crate::Repository;
use std::fmt::{Display, Formatter};

/// Declares a repository-scoped entity enum together with its stable names.
macro_rules! entities {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident => $text:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $($(#[$variant_meta])* $variant,)+
        }

        impl $name {
            /// All entities in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// The stable name of the entity. It doubles as the SPARQL variable name.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

entities! {
    /// The schema concepts of the UniProt knowledge base.
    UniprotEntity {
        /// The anchor every UniProt query starts from.
        Start => "start",
        Protein => "protein",
        ProteinId => "protein_id",
        RecommendedName => "recommended_name",
        FullName => "full_name",
        SubmittedName => "submitted_name",
        SequenceObject => "sequence_object",
        Sequence => "sequence",
        Organism => "organism",
        OrganismName => "organism_name",
        /// A taxon somewhere above the organism in the taxonomy.
        TaxonFiltering => "taxon_filtering",
        Kingdom => "kingdom",
        KingdomName => "kingdom_name",
        Superkingdom => "superkingdom",
        SuperkingdomName => "superkingdom_name",
        Pfam => "pfam",
        /// A Pfam cross reference that only exists to be restricted by a filter.
        PfamFiltering => "pfam_filtering",
        Supfam => "supfam",
        CatalyticActivity => "catalytic_activity",
    }
}

entities! {
    /// The schema concepts of the Rhea knowledge base.
    RheaEntity {
        /// The anchor every Rhea query starts from.
        Start => "start",
        /// A reaction. UniProt links to it from catalytic activities.
        Reaction => "reaction",
        ReactionId => "reaction_id",
        ReactionSide => "reaction_side",
        ReactionSideOrder => "reaction_side_order",
        Participant => "participant",
        Compound => "compound",
        Chebi => "chebi",
        Smiles => "smiles",
    }
}

/// An entity of any repository.
///
/// Entities of different repositories never compare equal, even if their names do. The
/// knowledge graph shares a node between repositories only when both refer to the very same
/// entity, e.g. [`RheaEntity::Reaction`] that also appears in the UniProt graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Entity {
    Uniprot(UniprotEntity),
    Rhea(RheaEntity),
}

impl Entity {
    /// The repository that defines this entity.
    pub fn repository(self) -> Repository {
        match self {
            Entity::Uniprot(_) => Repository::Uniprot,
            Entity::Rhea(_) => Repository::Rhea,
        }
    }

    /// The stable name of the entity.
    pub fn as_str(self) -> &'static str {
        match self {
            Entity::Uniprot(entity) => entity.as_str(),
            Entity::Rhea(entity) => entity.as_str(),
        }
    }

    /// All entities of all repositories.
    pub fn all() -> impl Iterator<Item = Entity> {
        UniprotEntity::ALL
            .iter()
            .copied()
            .map(Entity::Uniprot)
            .chain(RheaEntity::ALL.iter().copied().map(Entity::Rhea))
    }
}

impl Display for Entity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.repository(), self.as_str())
    }
}

impl From<UniprotEntity> for Entity {
    fn from(entity: UniprotEntity) -> Self {
        Entity::Uniprot(entity)
    }
}

impl From<RheaEntity> for Entity {
    fn from(entity: RheaEntity) -> Self {
        Entity::Rhea(entity)
    }
}
