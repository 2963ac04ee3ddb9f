//! Mapping set documents.

use super::{Converter, Entity, SemanticMapping};
use crate::error::{JsonSnafu, Result};
use crate::graph::Graph;
use crate::namespace::Namespace;
use crate::vocab::{orcid, semapv};
use crate::Model;
use serde::{Deserialize, Serialize};
use snafu::ResultExt;
use std::collections::BTreeMap;
use std::io::Read;

/// A collection of mappings, together with the prefixes used to abbreviate their entities.
///
/// In JSON:
/// ```json
/// {
///     "curie_map": { "CHEBI": "http://purl.obolibrary.org/obo/CHEBI_" },
///     "mappings": [
///         {
///             "subject_id": "CHEBI:10001",
///             "predicate_id": "skos:exactMatch",
///             "object_id": "http://id.nlm.nih.gov/mesh/C067604",
///             "mapping_justification": "semapv:ManualMappingCuration"
///         }
///     ]
/// }
/// ```
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct MappingSet {
    #[serde(default)]
    pub curie_map: BTreeMap<String, String>,
    #[serde(default)]
    pub mappings: Vec<MappingRecord>,
}

/// A single mapping, with entities given as CURIEs or IRIs.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MappingRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapping_id: Option<String>,
    pub subject_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_label: Option<String>,
    pub predicate_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicate_label: Option<String>,
    pub object_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_label: Option<String>,
    /// A `semapv` term, as a CURIE, an IRI or a bare local name.
    pub mapping_justification: String,
    /// Author identifiers, as CURIEs, IRIs or bare ORCIDs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub author_id: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl MappingSet {
    /// Read a mapping set from a JSON document.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        serde_json::from_reader(reader).context(JsonSnafu)
    }

    /// A converter which knows the prefixes of this mapping set.
    pub fn converter(&self) -> Result<Converter> {
        let mut converter = Converter::new();
        for (prefix, namespace) in &self.curie_map {
            converter.bind(prefix.clone(), Namespace::new(namespace.clone())?)?;
        }
        Ok(converter)
    }

    /// Resolve all mappings in this set.
    pub fn semantic_mappings(&self) -> Result<Vec<SemanticMapping>> {
        let converter = self.converter()?;
        self.mappings
            .iter()
            .map(|record| record.resolve(&converter))
            .collect()
    }

    /// A graph containing all mappings in this set.
    ///
    /// The graph binds every prefix known to the converter, so the entities are abbreviated the
    /// same way in Turtle output as in the mapping set.
    pub fn to_graph(&self) -> Result<Graph> {
        let converter = self.converter()?;
        let mut graph = Graph::with_prefixes(converter.prefixes().clone());
        for record in &self.mappings {
            record.resolve(&converter)?.add_to_graph(&mut graph)?;
        }
        tracing::info!(
            "added {} mappings ({} triples)",
            self.mappings.len(),
            graph.len()
        );
        Ok(graph)
    }
}

impl MappingRecord {
    /// Expand the references in this record into a [`SemanticMapping`].
    pub fn resolve(&self, converter: &Converter) -> Result<SemanticMapping> {
        let entity = |id: &str, label: &Option<String>| -> Result<Entity> {
            Ok(Entity {
                iri: converter.expand(id)?,
                label: label.clone(),
            })
        };
        Ok(SemanticMapping {
            id: self
                .mapping_id
                .as_deref()
                .map(|id| converter.expand(id))
                .transpose()?,
            subject: entity(&self.subject_id, &self.subject_label)?,
            predicate: entity(&self.predicate_id, &self.predicate_label)?,
            object: entity(&self.object_id, &self.object_label)?,
            justification: converter
                .expand_in(&self.mapping_justification, &semapv::NAMESPACE)?,
            authors: self
                .author_id
                .iter()
                .map(|id| converter.expand_in(id, &orcid::NAMESPACE))
                .collect::<Result<_>>()?,
            confidence: self.confidence,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::vocab::{dcterms, skos, sssom};
    use crate::{Error, NamedNode, Triple};

    const DOCUMENT: &str = r#"{
        "curie_map": {
            "CHEBI": "http://purl.obolibrary.org/obo/CHEBI_",
            "mesh": "http://id.nlm.nih.gov/mesh/"
        },
        "mappings": [
            {
                "mapping_id": "https://example.org/mappings/1",
                "subject_id": "CHEBI:10001",
                "subject_label": "Visnadin",
                "predicate_id": "skos:exactMatch",
                "object_id": "mesh:C067604",
                "object_label": "visnadin",
                "mapping_justification": "semapv:ManualMappingCuration",
                "author_id": ["orcid:0000-0003-4423-4370"]
            }
        ]
    }"#;

    #[test]
    fn test_resolve() {
        let set = MappingSet::from_reader(DOCUMENT.as_bytes()).unwrap();
        let mappings = set.semantic_mappings().unwrap();
        assert_eq!(mappings.len(), 1);
        let mapping = &mappings[0];
        assert_eq!(
            mapping.subject.iri.as_str(),
            "http://purl.obolibrary.org/obo/CHEBI_10001"
        );
        assert_eq!(mapping.predicate, Entity::new(skos::EXACT_MATCH));
        assert_eq!(mapping.object.label.as_deref(), Some("visnadin"));
        assert_eq!(mapping.justification, semapv::MANUAL_MAPPING_CURATION);
        assert_eq!(
            mapping.authors,
            [NamedNode::from_static("https://orcid.org/0000-0003-4423-4370")]
        );
    }

    #[test]
    fn test_to_graph() {
        let set = MappingSet::from_reader(DOCUMENT.as_bytes()).unwrap();
        let graph = set.to_graph().unwrap();
        let id = NamedNode::from_static("https://example.org/mappings/1");
        assert!(graph.contains(&Triple::new(
            id.clone(),
            dcterms::CONTRIBUTOR,
            NamedNode::from_static("https://orcid.org/0000-0003-4423-4370"),
        )));
        assert!(graph.contains(&Triple::new(
            id,
            sssom::MAPPING_JUSTIFICATION,
            NamedNode::from_static("https://w3id.org/semapv/vocab/ManualMappingCuration"),
        )));

        let turtle = graph.to_turtle();
        assert!(turtle.contains("@prefix CHEBI: <http://purl.obolibrary.org/obo/CHEBI_> ."));
        assert!(turtle.contains("CHEBI:10001 rdfs:label \"Visnadin\" ;\n    skos:exactMatch mesh:C067604 ."));
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            MappingSet::from_reader("{".as_bytes()),
            Err(Error::Json { .. })
        ));

        let set = MappingSet {
            curie_map: [("bad prefix".to_string(), "https://example.org/".to_string())].into(),
            mappings: vec![],
        };
        assert!(matches!(set.to_graph(), Err(Error::InvalidPrefix { .. })));

        let mut set = MappingSet::from_reader(DOCUMENT.as_bytes()).unwrap();
        set.mappings[0].object_id = "unknown:1".into();
        assert!(matches!(
            set.to_graph(),
            Err(Error::UnknownPrefix { .. })
        ));
    }

    #[test]
    fn test_references_outside_default_namespace() {
        let mut set = MappingSet::from_reader(DOCUMENT.as_bytes()).unwrap();
        set.curie_map.insert(
            "wikidata".into(),
            "https://www.wikidata.org/wiki/".into(),
        );
        let record = &mut set.mappings[0];
        record.mapping_justification =
            "https://w3id.org/semapv/vocab/ManualMappingCuration".into();
        record.author_id = vec![
            "https://orcid.org/0000-0003-4423-4370".into(),
            "wikidata:Q1".into(),
            "0000-0001-9439-5346".into(),
        ];

        let mappings = set.semantic_mappings().unwrap();
        let mapping = &mappings[0];
        assert_eq!(mapping.justification, semapv::MANUAL_MAPPING_CURATION);
        assert_eq!(
            mapping.authors,
            [
                NamedNode::from_static("https://orcid.org/0000-0003-4423-4370"),
                NamedNode::from_static("https://www.wikidata.org/wiki/Q1"),
                NamedNode::from_static("https://orcid.org/0000-0001-9439-5346"),
            ]
        );

        set.mappings[0].author_id = vec!["unbound:1".into()];
        assert!(matches!(
            set.semantic_mappings(),
            Err(Error::UnknownPrefix { .. })
        ));
    }
}
