//! Well-known vocabularies.
//!
//! Each vocabulary module exposes its [`Namespace`](crate::Namespace) as `NAMESPACE`, the prefix
//! it is conventionally bound to as `PREFIX`, and constants for the terms this crate (and its
//! users) commonly need. Terms which are not listed can always be created with
//! [`Namespace::term`](crate::Namespace::term).

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident, $prefix:literal, $ns:literal {
            $($(#[$term_meta:meta])* $term:ident = $local:literal),* $(,)?
        }
    ) => {
        $(#[$meta])*
        pub mod $name {
            #[allow(unused_imports)]
            use crate::{NamedNode, Namespace};

            /// The conventional prefix for this vocabulary.
            pub const PREFIX: &str = $prefix;

            /// The namespace of this vocabulary.
            pub const NAMESPACE: Namespace = Namespace::from_static($ns);

            $(
                $(#[$term_meta])*
                pub const $term: NamedNode = NamedNode::from_static(concat!($ns, $local));
            )*
        }
    };
}

vocabulary! {
    /// The RDF core vocabulary.
    rdf, "rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#" {
        TYPE = "type",
        STATEMENT = "Statement",
        SUBJECT = "subject",
        PREDICATE = "predicate",
        OBJECT = "object",
        LANG_STRING = "langString",
        PROPERTY = "Property",
    }
}

vocabulary! {
    /// RDF Schema.
    rdfs, "rdfs", "http://www.w3.org/2000/01/rdf-schema#" {
        LABEL = "label",
        COMMENT = "comment",
        SEE_ALSO = "seeAlso",
        CLASS = "Class",
        SUB_CLASS_OF = "subClassOf",
        IS_DEFINED_BY = "isDefinedBy",
    }
}

vocabulary! {
    /// XML Schema datatypes.
    xsd, "xsd", "http://www.w3.org/2001/XMLSchema#" {
        STRING = "string",
        BOOLEAN = "boolean",
        INTEGER = "integer",
        DECIMAL = "decimal",
        DOUBLE = "double",
        FLOAT = "float",
        DATE = "date",
        DATE_TIME = "dateTime",
        ANY_URI = "anyURI",
    }
}

vocabulary! {
    /// The Web Ontology Language.
    owl, "owl", "http://www.w3.org/2002/07/owl#" {
        CLASS = "Class",
        SAME_AS = "sameAs",
        EQUIVALENT_CLASS = "equivalentClass",
    }
}

vocabulary! {
    /// Simple Knowledge Organization System.
    skos, "skos", "http://www.w3.org/2004/02/skos/core#" {
        EXACT_MATCH = "exactMatch",
        CLOSE_MATCH = "closeMatch",
        BROAD_MATCH = "broadMatch",
        NARROW_MATCH = "narrowMatch",
        RELATED_MATCH = "relatedMatch",
        PREF_LABEL = "prefLabel",
        ALT_LABEL = "altLabel",
    }
}

vocabulary! {
    /// Dublin Core metadata terms.
    dcterms, "dcterms", "http://purl.org/dc/terms/" {
        CONTRIBUTOR = "contributor",
        CREATOR = "creator",
        TITLE = "title",
        DESCRIPTION = "description",
        LICENSE = "license",
        CREATED = "created",
    }
}

vocabulary! {
    /// Friend of a Friend.
    foaf, "foaf", "http://xmlns.com/foaf/0.1/" {
        PERSON = "Person",
        ORGANIZATION = "Organization",
        NAME = "name",
        MEMBER = "member",
        HOMEPAGE = "homepage",
    }
}

vocabulary! {
    /// Schema.org.
    schema, "schema", "https://schema.org/" {
        PERSON = "Person",
        ORGANIZATION = "Organization",
        NAME = "name",
        AFFILIATION = "affiliation",
        IDENTIFIER = "identifier",
    }
}

vocabulary! {
    /// The Simple Standard for Sharing Ontological Mappings.
    sssom, "sssom", "https://w3id.org/sssom/" {
        MAPPING = "Mapping",
        MAPPING_SET = "MappingSet",
        MAPPING_JUSTIFICATION = "mapping_justification",
        CONFIDENCE = "confidence",
    }
}

vocabulary! {
    /// The semantic mapping vocabulary, whose terms justify SSSOM mappings.
    semapv, "semapv", "https://w3id.org/semapv/vocab/" {
        MANUAL_MAPPING_CURATION = "ManualMappingCuration",
        LEXICAL_MATCHING = "LexicalMatching",
        UNSPECIFIED_MATCHING = "UnspecifiedMatching",
    }
}

vocabulary! {
    /// ORCID researcher identifiers.
    orcid, "orcid", "https://orcid.org/" {}
}

/// Vocabularies used to describe semantic mappings.
///
/// These are not bound by default, but [`MappingSet`](crate::mapping::MappingSet) binds them.
pub const MAPPING_PREFIXES: &[(&str, crate::Namespace)] = &[
    (sssom::PREFIX, sssom::NAMESPACE),
    (semapv::PREFIX, semapv::NAMESPACE),
    (orcid::PREFIX, orcid::NAMESPACE),
];

/// All general-purpose vocabularies in this module, as `(prefix, namespace)` pairs.
///
/// These are bound by default in every new [`Graph`](crate::Graph).
pub const DEFAULT_PREFIXES: &[(&str, crate::Namespace)] = &[
    (rdf::PREFIX, rdf::NAMESPACE),
    (rdfs::PREFIX, rdfs::NAMESPACE),
    (xsd::PREFIX, xsd::NAMESPACE),
    (owl::PREFIX, owl::NAMESPACE),
    (skos::PREFIX, skos::NAMESPACE),
    (dcterms::PREFIX, dcterms::NAMESPACE),
    (foaf::PREFIX, foaf::NAMESPACE),
    (schema::PREFIX, schema::NAMESPACE),
];
