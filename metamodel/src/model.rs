//! Records which can be serialized to RDF.
//!
//! A [`Model`] is a record which knows how to add itself to a [`Graph`]. Models are usually
//! not implemented by hand but derived with [`#[derive(Model)]`](macro@crate::Model). The derive
//! supports three kinds of models:
//! * A _typed instance_ (`#[rdf(rdf_type = ...)]`) is a node with an `rdf:type` and one triple
//!   per value of each annotated field.
//! * An _untyped instance_ (no struct-level attribute) is the same, minus the `rdf:type`.
//! * A _triple model_ (`#[rdf(triple)]`) holds a subject, a predicate and an object. It adds
//!   the triple itself to the graph, as well as a reification of that triple as an
//!   `rdf:Statement` on its own node. Its other annotated fields describe the statement.
//!
//! In every case, only annotated fields are serialized. Each model also needs an
//! [`Identify`] implementation telling it which node represents it in the graph.

use crate::error::{BlankPredicateSnafu, Result};
use crate::graph::Graph;
use crate::serialize::Format;
use crate::term::{BlankNode, NamedNode, Node, Triple};
use crate::vocab::rdf;

/// A record which can be added to an RDF graph.
pub trait Model {
    /// Add this record to `graph`, returning the node representing it.
    fn add_to_graph(&self, graph: &mut Graph) -> Result<Node>;

    /// A new graph containing just this record.
    fn to_graph(&self) -> Result<Graph> {
        let mut graph = Graph::new();
        self.add_to_graph(&mut graph)?;
        Ok(graph)
    }

    /// Serialize this record in the given format.
    fn serialize(&self, format: Format) -> Result<String> {
        Ok(self.to_graph()?.serialize(format))
    }

    /// Serialize this record as Turtle.
    fn to_turtle(&self) -> Result<String> {
        self.serialize(Format::Turtle)
    }
}

/// A record with a node identifying it in a graph.
pub trait Identify {
    /// The node representing this record.
    ///
    /// This is usually built from a field of the record, e.g. an ORCID for a person, and may
    /// fail if the field does not form a valid IRI.
    fn node(&self) -> Result<Node>;
}

/// A record whose instances all share an RDF class.
pub trait Typed {
    /// The class of all instances, emitted as their `rdf:type`.
    const RDF_TYPE: NamedNode;
}

impl Model for NamedNode {
    fn add_to_graph(&self, _graph: &mut Graph) -> Result<Node> {
        Ok(self.clone().into())
    }
}

impl Model for BlankNode {
    fn add_to_graph(&self, _graph: &mut Graph) -> Result<Node> {
        Ok(self.clone().into())
    }
}

impl Model for Node {
    fn add_to_graph(&self, _graph: &mut Graph) -> Result<Node> {
        Ok(self.clone())
    }
}

impl<T: Model + ?Sized> Model for &T {
    fn add_to_graph(&self, graph: &mut Graph) -> Result<Node> {
        (**self).add_to_graph(graph)
    }
}

impl<T: Model + ?Sized> Model for Box<T> {
    fn add_to_graph(&self, graph: &mut Graph) -> Result<Node> {
        (**self).add_to_graph(graph)
    }
}

/// Get the node for a record, logging which record is being added.
pub fn identify<T: Identify + ?Sized>(model: &T, name: &str) -> Result<Node> {
    let node = model.node()?;
    tracing::debug!("adding {name} {node}");
    Ok(node)
}

/// Declare `node` to be an instance of `class`.
pub fn add_type(graph: &mut Graph, node: &Node, class: NamedNode) {
    graph.insert(Triple::new(node.clone(), rdf::TYPE, class));
}

/// Add the triple `(subject, predicate, object)` and a reification of it on `statement`.
///
/// The reification consists of
/// ```text
/// statement rdf:type rdf:Statement ;
///     rdf:subject subject ;
///     rdf:predicate predicate ;
///     rdf:object object .
/// ```
///
/// Fails if `predicate` is a blank node, since predicates must be IRIs.
pub fn reify(
    graph: &mut Graph,
    statement: &Node,
    subject: Node,
    predicate: Node,
    object: Node,
) -> Result<()> {
    let Node::Named(predicate) = predicate else {
        return BlankPredicateSnafu {
            node: predicate.to_string(),
        }
        .fail();
    };
    graph.insert(Triple::new(
        subject.clone(),
        predicate.clone(),
        object.clone(),
    ));
    graph.insert(Triple::new(statement.clone(), rdf::TYPE, rdf::STATEMENT));
    graph.insert(Triple::new(statement.clone(), rdf::SUBJECT, subject));
    graph.insert(Triple::new(statement.clone(), rdf::PREDICATE, predicate));
    graph.insert(Triple::new(statement.clone(), rdf::OBJECT, object));
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::vocab::{dcterms, foaf, rdfs, schema, skos};
    use crate::{Error, Literal, Model, Namespace, Term};
    use std::collections::BTreeSet;

    const ORCID: Namespace = Namespace::from_static("https://orcid.org/");
    const ROR: Namespace = Namespace::from_static("https://ror.org/");
    const SEMAPV: Namespace = Namespace::from_static("https://w3id.org/semapv/vocab/");
    const WIKIDATA: Namespace = Namespace::from_static("https://www.wikidata.org/wiki/");
    const HAS_WIKIDATA: NamedNode = NamedNode::from_static("https://example.org/hasWikidata");
    const HAS_JUSTIFICATION: NamedNode =
        NamedNode::from_static("https://w3id.org/sssom/mapping_justification");
    const TEST_URI: NamedNode = NamedNode::from_static("https://example.org/testuri");

    const CHARLIE_ORCID: &str = "0000-0003-4423-4370";
    const CHARLIE_NAME: &str = "Charles Tapley Hoyt";
    const CHARLIE_WD: &str = "Q47475003";
    const NFDI_ROR: &str = "05qj6w324";
    const NFDI_NAME: &str = "NFDI";

    /// An organization.
    #[derive(Clone, Debug, Model)]
    #[rdf(rdf_type = schema::ORGANIZATION)]
    struct Organization {
        ror: String,
        #[rdf(predicate = rdfs::LABEL)]
        name: String,
    }

    impl Identify for Organization {
        fn node(&self) -> Result<Node> {
            Ok(ROR.term(&self.ror)?.into())
        }
    }

    /// A person.
    #[derive(Clone, Debug, Model)]
    #[rdf(rdf_type = schema::PERSON)]
    struct Person {
        orcid: String,
        #[rdf(predicate = rdfs::LABEL)]
        name: String,
        #[rdf(predicate = HAS_WIKIDATA, namespace = WIKIDATA)]
        wikidata: String,
        #[rdf(predicate = foaf::MEMBER)]
        affiliations: Vec<Organization>,
    }

    impl Identify for Person {
        fn node(&self) -> Result<Node> {
            Ok(ORCID.term(&self.orcid)?.into())
        }
    }

    fn charlie() -> Person {
        Person {
            orcid: CHARLIE_ORCID.into(),
            name: CHARLIE_NAME.into(),
            wikidata: CHARLIE_WD.into(),
            affiliations: vec![],
        }
    }

    /// A simple entity, without a type.
    #[derive(Clone, Debug, Model)]
    struct Entity {
        uri: String,
        #[rdf(predicate = rdfs::LABEL)]
        name: Option<String>,
    }

    impl Identify for Entity {
        fn node(&self) -> Result<Node> {
            Ok(NamedNode::new(&self.uri)?.into())
        }
    }

    /// A mapping between two entities, with a fixed node.
    #[derive(Clone, Debug, Model)]
    #[rdf(triple)]
    struct SemanticMapping {
        #[rdf(is_subject)]
        s: Entity,
        #[rdf(is_predicate)]
        p: Entity,
        #[rdf(is_object)]
        o: Entity,
        #[rdf(predicate = HAS_JUSTIFICATION, namespace = SEMAPV)]
        justification: String,
        #[rdf(predicate = dcterms::CONTRIBUTOR, namespace = ORCID)]
        author: String,
    }

    impl Identify for SemanticMapping {
        fn node(&self) -> Result<Node> {
            Ok(TEST_URI.into())
        }
    }

    /// A triple model which gets a fresh blank node every time it is added.
    #[derive(Clone, Debug, Model)]
    #[rdf(triple, blank)]
    struct Anonymous {
        #[rdf(is_subject)]
        s: NamedNode,
        #[rdf(is_predicate)]
        p: Node,
        #[rdf(is_object)]
        o: NamedNode,
    }

    fn orcid(id: &str) -> Node {
        ORCID.term(id).unwrap().into()
    }

    fn ror(id: &str) -> Node {
        ROR.term(id).unwrap().into()
    }

    fn assert_triples(expected: impl IntoIterator<Item = Triple>, graph: &Graph) {
        assert_eq!(
            expected.into_iter().collect::<BTreeSet<_>>(),
            graph.iter().cloned().collect::<BTreeSet<_>>()
        );
    }

    #[test]
    fn test_simple() {
        let graph = charlie().to_graph().unwrap();
        assert_triples(
            [
                Triple::new(orcid(CHARLIE_ORCID), rdf::TYPE, schema::PERSON),
                Triple::new(orcid(CHARLIE_ORCID), rdfs::LABEL, Literal::from(CHARLIE_NAME)),
                Triple::new(
                    orcid(CHARLIE_ORCID),
                    HAS_WIKIDATA,
                    WIKIDATA.term(CHARLIE_WD).unwrap(),
                ),
            ],
            &graph,
        );
    }

    #[test]
    fn test_uri() {
        #[derive(Model)]
        #[rdf(rdf_type = schema::PERSON)]
        struct WithLink {
            orcid: String,
            #[rdf(predicate = rdfs::SEE_ALSO)]
            attribute: NamedNode,
        }

        impl Identify for WithLink {
            fn node(&self) -> Result<Node> {
                Ok(ORCID.term(&self.orcid)?.into())
            }
        }

        let value = "https://example.org/1";
        let person = WithLink {
            orcid: CHARLIE_ORCID.into(),
            attribute: NamedNode::new(value).unwrap(),
        };
        assert_triples(
            [
                Triple::new(orcid(CHARLIE_ORCID), rdf::TYPE, schema::PERSON),
                Triple::new(
                    orcid(CHARLIE_ORCID),
                    rdfs::SEE_ALSO,
                    NamedNode::new(value).unwrap(),
                ),
            ],
            &person.to_graph().unwrap(),
        );
    }

    #[test]
    fn test_nested() {
        let person = Person {
            affiliations: vec![Organization {
                ror: NFDI_ROR.into(),
                name: NFDI_NAME.into(),
            }],
            ..charlie()
        };
        assert_triples(
            [
                Triple::new(orcid(CHARLIE_ORCID), rdf::TYPE, schema::PERSON),
                Triple::new(orcid(CHARLIE_ORCID), rdfs::LABEL, Literal::from(CHARLIE_NAME)),
                Triple::new(
                    orcid(CHARLIE_ORCID),
                    HAS_WIKIDATA,
                    WIKIDATA.term(CHARLIE_WD).unwrap(),
                ),
                Triple::new(ror(NFDI_ROR), rdf::TYPE, schema::ORGANIZATION),
                Triple::new(ror(NFDI_ROR), rdfs::LABEL, Literal::from(NFDI_NAME)),
                Triple::new(orcid(CHARLIE_ORCID), foaf::MEMBER, ror(NFDI_ROR)),
            ],
            &person.to_graph().unwrap(),
        );
    }

    #[test]
    fn test_triple() {
        let s_uri = NamedNode::from_static("https://purl.obolibrary.org/obo/CHEBI_10001");
        let o_uri = NamedNode::from_static("http://id.nlm.nih.gov/mesh/C067604");
        let mapping = SemanticMapping {
            s: Entity {
                uri: s_uri.as_str().into(),
                name: Some("Visnadin".into()),
            },
            p: Entity {
                uri: skos::EXACT_MATCH.as_str().into(),
                name: None,
            },
            o: Entity {
                uri: o_uri.as_str().into(),
                name: Some("visnadin".into()),
            },
            justification: "ManualMappingCuration".into(),
            author: CHARLIE_ORCID.into(),
        };
        assert_triples(
            [
                Triple::new(s_uri.clone(), rdfs::LABEL, Literal::from("Visnadin")),
                Triple::new(o_uri.clone(), rdfs::LABEL, Literal::from("visnadin")),
                Triple::new(s_uri.clone(), skos::EXACT_MATCH, o_uri.clone()),
                Triple::new(TEST_URI, rdf::TYPE, rdf::STATEMENT),
                Triple::new(TEST_URI, rdf::SUBJECT, s_uri),
                Triple::new(TEST_URI, rdf::PREDICATE, skos::EXACT_MATCH),
                Triple::new(TEST_URI, rdf::OBJECT, o_uri),
                Triple::new(
                    TEST_URI,
                    HAS_JUSTIFICATION,
                    SEMAPV.term("ManualMappingCuration").unwrap(),
                ),
                Triple::new(TEST_URI, dcterms::CONTRIBUTOR, orcid(CHARLIE_ORCID)),
            ],
            &mapping.to_graph().unwrap(),
        );
    }

    #[test]
    fn test_blank_statement_nodes() {
        let statement = Anonymous {
            s: ORCID.term(CHARLIE_ORCID).unwrap(),
            p: foaf::MEMBER.into(),
            o: ROR.term(NFDI_ROR).unwrap(),
        };
        let mut graph = Graph::new();
        let first = statement.add_to_graph(&mut graph).unwrap();
        let second = statement.add_to_graph(&mut graph).unwrap();
        assert!(first.is_blank());
        assert!(second.is_blank());
        assert_ne!(first, second);

        // The triple itself is shared, each statement node gets its own reification.
        let statement_type = Term::from(rdf::STATEMENT);
        assert_eq!(graph.subjects(&rdf::TYPE, &statement_type).count(), 2);
        assert_eq!(graph.triples(None, Some(&foaf::MEMBER), None).count(), 1);
        assert_eq!(graph.len(), 9);
    }

    #[test]
    fn test_blank_predicate() {
        let statement = Anonymous {
            s: ORCID.term(CHARLIE_ORCID).unwrap(),
            p: BlankNode::fresh().into(),
            o: ROR.term(NFDI_ROR).unwrap(),
        };
        assert!(matches!(
            statement.to_graph(),
            Err(Error::BlankPredicate { .. })
        ));
    }

    #[test]
    fn test_invalid_node() {
        let person = Person {
            orcid: "not an orcid".into(),
            ..charlie()
        };
        assert!(matches!(
            person.to_graph(),
            Err(Error::InvalidIri { .. })
        ));

        let person = Person {
            wikidata: "Q 1".into(),
            ..charlie()
        };
        assert!(matches!(
            person.to_graph(),
            Err(Error::InvalidIri { .. })
        ));
    }

    #[test]
    fn test_untyped_without_fields() {
        let entity = Entity {
            uri: skos::EXACT_MATCH.as_str().into(),
            name: None,
        };
        let mut graph = Graph::new();
        assert_eq!(
            entity.add_to_graph(&mut graph).unwrap(),
            Node::from(skos::EXACT_MATCH)
        );
        assert!(graph.is_empty());
    }

    #[test]
    fn test_typed() {
        assert_eq!(Person::RDF_TYPE, schema::PERSON);
        assert_eq!(Organization::RDF_TYPE, schema::ORGANIZATION);
    }

    #[test]
    fn test_to_turtle() {
        let person = Person {
            affiliations: vec![Organization {
                ror: NFDI_ROR.into(),
                name: NFDI_NAME.into(),
            }],
            ..charlie()
        };
        assert_eq!(
            person.to_turtle().unwrap(),
            "\
@prefix foaf: <http://xmlns.com/foaf/0.1/> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix schema: <https://schema.org/> .

<https://orcid.org/0000-0003-4423-4370> a schema:Person ;
    rdfs:label \"Charles Tapley Hoyt\" ;
    foaf:member <https://ror.org/05qj6w324> ;
    <https://example.org/hasWikidata> <https://www.wikidata.org/wiki/Q47475003> .

<https://ror.org/05qj6w324> a schema:Organization ;
    rdfs:label \"NFDI\" .
"
        );
    }
}
