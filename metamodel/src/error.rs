//! Errors reported while building and serializing RDF graphs.

use snafu::Snafu;

/// Errors reported by the metamodel.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// A string which was supposed to be an absolute IRI is not one.
    #[snafu(display("invalid IRI {:?}: {}", iri, reason))]
    InvalidIri { iri: String, reason: &'static str },

    /// A blank node label contains characters which cannot be serialized.
    #[snafu(display("invalid blank node label {:?}", label))]
    InvalidBlankNode { label: String },

    /// A language tag is not of the form `en` or `en-US`.
    #[snafu(display("invalid language tag {:?}", tag))]
    InvalidLanguageTag { tag: String },

    /// A prefix cannot be written as a Turtle prefix name.
    #[snafu(display("invalid prefix {:?}", prefix))]
    InvalidPrefix { prefix: String },

    /// The predicate slot of a statement resolved to a blank node.
    #[snafu(display("predicate of a statement must be an IRI, got blank node {}", node))]
    BlankPredicate { node: String },

    /// A compact URI uses a prefix which is not in the prefix map.
    #[snafu(display("unknown prefix {:?} in CURIE {:?}", prefix, curie))]
    UnknownPrefix { prefix: String, curie: String },

    /// A compact URI has no `:` separating prefix and local name.
    #[snafu(display("malformed CURIE {:?}", curie))]
    MalformedCurie { curie: String },

    /// Writing serialized output failed.
    #[snafu(display("I/O error: {}", source))]
    Io { source: std::io::Error },

    /// Reading a JSON document failed.
    #[snafu(display("JSON error: {}", source))]
    Json { source: serde_json::Error },
}

/// Result type alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;
