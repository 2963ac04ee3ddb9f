//! Semantic mappings between entities in different vocabularies.
//!
//! A [`SemanticMapping`] states that a subject entity relates to an object entity through some
//! mapping predicate (usually one of the `skos` matching properties), and records who made that
//! claim and why. In a graph, the mapping is both the plain triple `(subject, predicate, object)`
//! and an `rdf:Statement` reifying it, which carries the provenance.
//!
//! Mappings are usually exchanged as [`MappingSet`] documents, in which entities are written as
//! compact URIs resolved with a [`Converter`].

use crate::error::Result;
use crate::term::{BlankNode, NamedNode, Node};
use crate::vocab::{dcterms, rdfs, sssom};
use crate::{Identify, Model};

mod converter;
mod set;
mod test_runner;

pub use converter::Converter;
pub use set::{MappingRecord, MappingSet};

/// An entity in some vocabulary, optionally with a human-readable label.
#[derive(Clone, Debug, PartialEq, Eq, Model)]
pub struct Entity {
    pub iri: NamedNode,
    #[rdf(predicate = rdfs::LABEL)]
    pub label: Option<String>,
}

impl Entity {
    pub fn new(iri: NamedNode) -> Self {
        Self { iri, label: None }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl From<NamedNode> for Entity {
    fn from(iri: NamedNode) -> Self {
        Self::new(iri)
    }
}

impl Identify for Entity {
    fn node(&self) -> Result<Node> {
        Ok(self.iri.clone().into())
    }
}

/// A claim that two entities are related, with its provenance.
#[derive(Clone, Debug, Model)]
#[rdf(triple)]
pub struct SemanticMapping {
    /// The IRI of the mapping itself. Mappings without one get a fresh blank node.
    pub id: Option<NamedNode>,
    #[rdf(is_subject)]
    pub subject: Entity,
    #[rdf(is_predicate)]
    pub predicate: Entity,
    #[rdf(is_object)]
    pub object: Entity,
    /// Why the mapping holds, usually a `semapv` term like `semapv:ManualMappingCuration`.
    #[rdf(predicate = sssom::MAPPING_JUSTIFICATION)]
    pub justification: NamedNode,
    /// The people who made the mapping, usually ORCIDs.
    #[rdf(predicate = dcterms::CONTRIBUTOR)]
    pub authors: Vec<NamedNode>,
    #[rdf(predicate = sssom::CONFIDENCE)]
    pub confidence: Option<f64>,
}

impl Identify for SemanticMapping {
    fn node(&self) -> Result<Node> {
        Ok(match &self.id {
            Some(id) => id.clone().into(),
            None => BlankNode::fresh().into(),
        })
    }
}
