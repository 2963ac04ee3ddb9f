//! Conversion between compact URIs and IRIs.

use crate::error::Result;
use crate::namespace::{Namespace, PrefixMap};
use crate::term::NamedNode;
use crate::vocab::MAPPING_PREFIXES;

/// Expands compact URIs (CURIEs) like `CHEBI:10001` into IRIs, and back.
///
/// A new converter knows the well-known vocabularies and the vocabularies used to describe
/// mappings. Further prefixes, typically from the `curie_map` of a mapping set, are added with
/// [`bind`](Self::bind).
#[derive(Clone, Debug)]
pub struct Converter {
    prefixes: PrefixMap,
}

impl Default for Converter {
    fn default() -> Self {
        let mut prefixes = PrefixMap::defaults();
        for (prefix, namespace) in MAPPING_PREFIXES {
            // These are statically known to be valid.
            let _ = prefixes.bind(*prefix, namespace.clone());
        }
        Self { prefixes }
    }
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `prefix` to `namespace`, replacing any existing binding for `prefix`.
    pub fn bind(&mut self, prefix: impl Into<String>, namespace: Namespace) -> Result<()> {
        self.prefixes.bind(prefix, namespace)
    }

    /// Resolve a reference to an entity.
    ///
    /// References containing `://` are taken to be full IRIs already. Anything else must be a
    /// CURIE with a bound prefix.
    pub fn expand(&self, reference: &str) -> Result<NamedNode> {
        if reference.contains("://") {
            NamedNode::new(reference)
        } else {
            self.prefixes.expand(reference)
        }
    }

    /// Resolve a reference which defaults to a term of `namespace`.
    ///
    /// Bare local names, like `0000-0003-4423-4370` for an ORCID, are terms of `namespace`.
    /// Anything containing a `:` is resolved like [`expand`](Self::expand), so full IRIs and CURIEs
    /// with other prefixes keep their meaning.
    pub fn expand_in(&self, reference: &str, namespace: &Namespace) -> Result<NamedNode> {
        if reference.contains(':') {
            self.expand(reference)
        } else {
            namespace.term(reference)
        }
    }

    /// Compress an IRI into a CURIE, if some bound prefix covers it.
    pub fn compress(&self, node: &NamedNode) -> Option<String> {
        self.prefixes.compress(node)
    }

    pub fn prefixes(&self) -> &PrefixMap {
        &self.prefixes
    }
}
