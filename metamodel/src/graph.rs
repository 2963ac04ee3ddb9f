//! An in-memory RDF graph.

use crate::error::{IoSnafu, Result};
use crate::namespace::{Namespace, PrefixMap};
use crate::serialize::{self, Format};
use crate::term::{NamedNode, Node, Term, Triple};
use snafu::ResultExt;
use std::collections::BTreeSet;
use std::io::Write;

/// A set of triples, along with the prefix bindings used to serialize them.
///
/// Triples are kept sorted, so iteration and serialization are deterministic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    triples: BTreeSet<Triple>,
    prefixes: PrefixMap,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// An empty graph with the [default prefixes](crate::vocab::DEFAULT_PREFIXES) bound.
    pub fn new() -> Self {
        Self::with_prefixes(PrefixMap::defaults())
    }

    /// An empty graph with the given prefix bindings.
    pub fn with_prefixes(prefixes: PrefixMap) -> Self {
        Self {
            triples: Default::default(),
            prefixes,
        }
    }

    /// Add a triple.
    ///
    /// Returns `false` if the triple was already in the graph.
    pub fn insert(&mut self, triple: Triple) -> bool {
        tracing::trace!("{triple}");
        self.triples.insert(triple)
    }

    /// Remove a triple, returning whether it was present.
    pub fn remove(&mut self, triple: &Triple) -> bool {
        self.triples.remove(triple)
    }

    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// All triples, sorted by subject, predicate, then object.
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Triples matching a pattern, where `None` matches anything.
    ///
    /// The pattern is copied, so the iterator only borrows the graph.
    pub fn triples<'a>(
        &'a self,
        subject: Option<&Node>,
        predicate: Option<&NamedNode>,
        object: Option<&Term>,
    ) -> impl Iterator<Item = &'a Triple> + 'a {
        let subject = subject.cloned();
        let predicate = predicate.cloned();
        let object = object.cloned();
        self.triples.iter().filter(move |t| {
            subject.as_ref().map_or(true, |s| &t.subject == s)
                && predicate.as_ref().map_or(true, |p| &t.predicate == p)
                && object.as_ref().map_or(true, |o| &t.object == o)
        })
    }

    /// Objects of triples with the given subject and predicate.
    pub fn objects<'a>(
        &'a self,
        subject: &Node,
        predicate: &NamedNode,
    ) -> impl Iterator<Item = &'a Term> + 'a {
        self.triples(Some(subject), Some(predicate), None)
            .map(|t| &t.object)
    }

    /// Subjects of triples with the given predicate and object.
    pub fn subjects<'a>(
        &'a self,
        predicate: &NamedNode,
        object: &Term,
    ) -> impl Iterator<Item = &'a Node> + 'a {
        self.triples(None, Some(predicate), Some(object))
            .map(|t| &t.subject)
    }

    /// Bind a prefix for use in serialization.
    pub fn bind(&mut self, prefix: impl Into<String>, namespace: Namespace) -> Result<()> {
        self.prefixes.bind(prefix, namespace)
    }

    /// The prefixes bound in this graph.
    pub fn prefixes(&self) -> &PrefixMap {
        &self.prefixes
    }

    /// Add all triples and prefix bindings from `other` into this graph.
    ///
    /// Bindings from `other` replace bindings for the same prefix in `self`.
    pub fn merge(&mut self, other: Graph) {
        self.prefixes.extend(&other.prefixes);
        self.triples.extend(other.triples);
    }

    /// Serialize this graph in the given format.
    pub fn serialize(&self, format: Format) -> String {
        serialize::to_string(self, format)
    }

    /// Serialize this graph as Turtle.
    pub fn to_turtle(&self) -> String {
        self.serialize(Format::Turtle)
    }

    /// Serialize this graph as N-Triples.
    pub fn to_ntriples(&self) -> String {
        self.serialize(Format::NTriples)
    }

    /// Serialize this graph to `out`.
    pub fn write_to(&self, mut out: impl Write, format: Format) -> Result<()> {
        out.write_all(self.serialize(format).as_bytes())
            .context(IoSnafu)?;
        out.flush().context(IoSnafu)
    }
}

impl Extend<Triple> for Graph {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        for triple in iter {
            self.insert(triple);
        }
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = std::collections::btree_set::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

impl IntoIterator for Graph {
    type Item = Triple;
    type IntoIter = std::collections::btree_set::IntoIter<Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.into_iter()
    }
}
