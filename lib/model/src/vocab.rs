//! IRIs used by the generated queries.

/// The prefix declarations every generated query starts with, as `(name, namespace)` pairs.
pub const PREFIXES: [(&str, &str); 6] = [
    ("up", "http://purl.uniprot.org/core/"),
    ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ("skos", "http://www.w3.org/2004/02/skos/core#"),
    ("chebi", "http://purl.obolibrary.org/obo/chebi/"),
    ("rh", "http://rdf.rhea-db.org/"),
];

pub mod uniprot {
    /// Namespace of UniProt protein entries.
    pub const PROTEIN: &str = "http://purl.uniprot.org/uniprot/";
    /// Namespace of the UniProt taxonomy.
    pub const TAXONOMY: &str = "http://purl.uniprot.org/taxonomy/";
    /// Namespace of Pfam families as cross-referenced by UniProt.
    pub const PFAM: &str = "http://purl.uniprot.org/pfam/";
    /// Namespace of SUPFAM superfamilies as cross-referenced by UniProt.
    pub const SUPFAM: &str = "http://purl.uniprot.org/supfam/";
    /// The Pfam database resource.
    pub const PFAM_DATABASE: &str = "http://purl.uniprot.org/database/Pfam";
    /// The SUPFAM database resource.
    pub const SUPFAM_DATABASE: &str = "http://purl.uniprot.org/database/SUPFAM";
    /// The kingdom taxonomic rank.
    pub const KINGDOM_RANK: &str = "http://purl.uniprot.org/core/Kingdom";
    /// The superkingdom taxonomic rank.
    pub const SUPERKINGDOM_RANK: &str = "http://purl.uniprot.org/core/Superkingdom";
}

pub mod rhea {
    /// Namespace of Rhea reactions.
    pub const REACTION: &str = "http://rdf.rhea-db.org/";
}

/// Wraps `namespace` followed by `local` into an IRI reference, e.g. `<http://...>`.
pub fn iri(namespace: &str, local: &str) -> String {
    format!("<{namespace}{local}>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iri_reference() {
        assert_eq!(
            iri(uniprot::TAXONOMY, "9606"),
            "<http://purl.uniprot.org/taxonomy/9606>"
        );
    }

    #[test]
    fn protein_namespace_length_matches_id_offset() {
        // The protein id bind relies on the accession starting at character 33.
        assert_eq!(uniprot::PROTEIN.len(), 32);
        assert_eq!(rhea::REACTION.len(), 23);
    }
}
