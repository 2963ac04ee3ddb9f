//! Namespaces and prefix bindings.

use crate::error::{InvalidPrefixSnafu, MalformedCurieSnafu, Result, UnknownPrefixSnafu};
use crate::term::{validate_iri, NamedNode};
use crate::vocab::DEFAULT_PREFIXES;
use derive_more::Display;
use snafu::{ensure, OptionExt};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// A common IRI prefix shared by the terms of a vocabulary.
#[derive(Clone, Debug, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display(fmt = "{}", iri)]
pub struct Namespace {
    iri: Cow<'static, str>,
}

impl Namespace {
    /// A namespace with the given base IRI.
    pub fn new(iri: impl Into<String>) -> Result<Self> {
        let iri = iri.into();
        validate_iri(&iri)?;
        Ok(Self { iri: iri.into() })
    }

    /// A namespace for a base IRI known at compile time.
    pub const fn from_static(iri: &'static str) -> Self {
        Self {
            iri: Cow::Borrowed(iri),
        }
    }

    /// The base IRI of this namespace.
    pub fn as_str(&self) -> &str {
        &self.iri
    }

    /// The term `local` in this namespace.
    ///
    /// Fails if the concatenation is not a valid IRI, e.g. because `local` contains whitespace.
    pub fn term(&self, local: impl AsRef<str>) -> Result<NamedNode> {
        NamedNode::new(format!("{}{}", self.iri, local.as_ref()))
    }
}

/// A set of bindings from prefix names to namespaces.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrefixMap {
    bindings: BTreeMap<String, Namespace>,
}

impl PrefixMap {
    /// An empty prefix map.
    pub fn new() -> Self {
        Self::default()
    }

    /// A prefix map with the conventional prefixes of the [well-known vocabularies](crate::vocab).
    pub fn defaults() -> Self {
        Self {
            bindings: DEFAULT_PREFIXES
                .iter()
                .map(|(prefix, ns)| (prefix.to_string(), ns.clone()))
                .collect(),
        }
    }

    /// Bind `prefix` to `namespace`, replacing any existing binding for `prefix`.
    pub fn bind(&mut self, prefix: impl Into<String>, namespace: Namespace) -> Result<()> {
        let prefix = prefix.into();
        ensure!(valid_prefix(&prefix), InvalidPrefixSnafu { prefix });
        tracing::trace!("binding prefix {prefix}: to {namespace}");
        self.bindings.insert(prefix, namespace);
        Ok(())
    }

    /// The namespace bound to `prefix`.
    pub fn get(&self, prefix: &str) -> Option<&Namespace> {
        self.bindings.get(prefix)
    }

    /// All bindings, sorted by prefix.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Namespace)> {
        self.bindings.iter().map(|(p, ns)| (p.as_str(), ns))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Add all bindings from `other`, which take precedence over existing ones.
    pub fn extend(&mut self, other: &PrefixMap) {
        for (prefix, namespace) in &other.bindings {
            self.bindings.insert(prefix.clone(), namespace.clone());
        }
    }

    /// Split `iri` into a bound prefix and a local name.
    ///
    /// If several namespaces match, the longest wins. Only splits whose local part can be
    /// written as a Turtle local name are considered.
    pub fn shorten<'a>(&'a self, iri: &'a str) -> Option<(&'a str, &'a str)> {
        self.bindings
            .iter()
            .filter_map(|(prefix, ns)| {
                let local = iri.strip_prefix(ns.as_str())?;
                valid_local_name(local).then_some((prefix.as_str(), ns.as_str().len(), local))
            })
            .max_by_key(|(_, len, _)| *len)
            .map(|(prefix, _, local)| (prefix, local))
    }

    /// Expand a compact URI like `orcid:0000-0003-4423-4370`.
    pub fn expand(&self, curie: &str) -> Result<NamedNode> {
        let (prefix, local) = curie
            .split_once(':')
            .context(MalformedCurieSnafu { curie })?;
        let namespace = self
            .get(prefix)
            .context(UnknownPrefixSnafu { prefix, curie })?;
        namespace.term(local)
    }

    /// Compress `node` into a compact URI, if some binding covers it.
    pub fn compress(&self, node: &NamedNode) -> Option<String> {
        self.shorten(node.as_str())
            .map(|(prefix, local)| format!("{prefix}:{local}"))
    }
}

impl<'a> IntoIterator for &'a PrefixMap {
    type Item = (&'a str, &'a Namespace);
    type IntoIter = Box<dyn Iterator<Item = Self::Item> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

/// Is `prefix` a valid Turtle `PN_PREFIX` (or empty)?
fn valid_prefix(prefix: &str) -> bool {
    let mut chars = prefix.chars();
    match chars.next() {
        None => true,
        Some(first) => {
            first.is_ascii_alphabetic()
                && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
                && !prefix.ends_with('.')
        }
    }
}

/// Is `local` a Turtle `PN_LOCAL` which needs no escaping?
fn valid_local_name(local: &str) -> bool {
    let mut chars = local.chars();
    match chars.next() {
        None => true,
        Some(first) => {
            (first.is_ascii_alphanumeric() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
                && !local.ends_with('.')
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Error;

    const ORCID: Namespace = Namespace::from_static("https://orcid.org/");

    #[test]
    fn test_term() {
        assert_eq!(
            ORCID.term("0000-0003-4423-4370").unwrap(),
            NamedNode::from_static("https://orcid.org/0000-0003-4423-4370")
        );
        assert!(ORCID.term("not a local name").is_err());
        assert!(Namespace::new("orcid").is_err());
    }

    #[test]
    fn test_bind() {
        let mut map = PrefixMap::new();
        map.bind("orcid", ORCID).unwrap();
        map.bind("", Namespace::from_static("https://example.org/"))
            .unwrap();
        assert!(matches!(
            map.bind("1bad", ORCID),
            Err(Error::InvalidPrefix { .. })
        ));
        assert!(map.bind("bad.", ORCID).is_err());
        assert_eq!(map.len(), 2);

        // Rebinding replaces.
        map.bind("orcid", Namespace::from_static("http://orcid.org/"))
            .unwrap();
        assert_eq!(map.get("orcid").unwrap().as_str(), "http://orcid.org/");
    }

    #[test]
    fn test_shorten_longest_match() {
        let mut map = PrefixMap::new();
        map.bind("obo", Namespace::from_static("http://purl.obolibrary.org/obo/"))
            .unwrap();
        map.bind(
            "CHEBI",
            Namespace::from_static("http://purl.obolibrary.org/obo/CHEBI_"),
        )
        .unwrap();
        assert_eq!(
            map.shorten("http://purl.obolibrary.org/obo/CHEBI_10001"),
            Some(("CHEBI", "10001"))
        );
        assert_eq!(
            map.shorten("http://purl.obolibrary.org/obo/GO_0008150"),
            Some(("obo", "GO_0008150"))
        );
        // Local names which would need escaping are not shortened.
        assert_eq!(map.shorten("http://purl.obolibrary.org/obo/a/b"), None);
        assert_eq!(map.shorten("http://purl.obolibrary.org/obo/x."), None);
        assert_eq!(map.shorten("https://example.org/x"), None);
    }

    #[test]
    fn test_defaults() {
        let map = PrefixMap::defaults();
        assert_eq!(map.len(), DEFAULT_PREFIXES.len());
        assert_eq!(
            map.compress(&crate::vocab::rdfs::LABEL).as_deref(),
            Some("rdfs:label")
        );
    }

    #[test]
    fn test_expand_compress() {
        let mut map = PrefixMap::new();
        map.bind("orcid", ORCID).unwrap();
        let node = map.expand("orcid:0000-0003-4423-4370").unwrap();
        assert_eq!(node.as_str(), "https://orcid.org/0000-0003-4423-4370");
        assert_eq!(
            map.compress(&node).as_deref(),
            Some("orcid:0000-0003-4423-4370")
        );
        assert!(matches!(
            map.expand("ror:05qj6w324"),
            Err(Error::UnknownPrefix { .. })
        ));
        assert!(matches!(
            map.expand("no-colon"),
            Err(Error::MalformedCurie { .. })
        ));
    }
}
