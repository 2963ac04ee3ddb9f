//! Turtle output.
//!
//! The output groups triples by subject, puts `rdf:type` (written `a`) first, and abbreviates
//! IRIs with the graph's prefix bindings wherever the local name allows it. Only prefixes which
//! are actually used are declared.

use crate::graph::Graph;
use crate::namespace::PrefixMap;
use crate::term::{escape, Literal, NamedNode, Node, Term};
use crate::vocab::{rdf, xsd};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write;

pub(super) fn write(graph: &Graph) -> String {
    let mut writer = Writer {
        prefixes: graph.prefixes(),
        used: Default::default(),
    };

    // Group objects by subject, then by predicate.
    let mut subjects: BTreeMap<&Node, BTreeMap<(bool, &NamedNode), Vec<&Term>>> =
        Default::default();
    for triple in graph {
        subjects
            .entry(&triple.subject)
            .or_default()
            // Sort `rdf:type` before all other predicates.
            .entry((triple.predicate != rdf::TYPE, &triple.predicate))
            .or_default()
            .push(&triple.object);
    }

    let blocks = subjects
        .into_iter()
        .map(|(subject, predicates)| {
            let subject = writer.node(subject);
            let predicates = predicates
                .into_iter()
                .map(|((_, predicate), objects)| {
                    let predicate = if *predicate == rdf::TYPE {
                        "a".to_string()
                    } else {
                        writer.named(predicate)
                    };
                    let objects = objects
                        .into_iter()
                        .map(|object| writer.term(object))
                        .collect::<Vec<_>>()
                        .join(", ");
                    format!("{predicate} {objects}")
                })
                .collect::<Vec<_>>()
                .join(" ;\n    ");
            format!("{subject} {predicates} .\n")
        })
        .collect::<Vec<_>>();

    let mut out = String::new();
    for prefix in &writer.used {
        if let Some(namespace) = writer.prefixes.get(prefix) {
            // Writing to a `String` cannot fail.
            let _ = writeln!(out, "@prefix {prefix}: <{namespace}> .");
        }
    }
    if !writer.used.is_empty() && !blocks.is_empty() {
        out.push('\n');
    }
    out.push_str(&blocks.join("\n"));
    out
}

struct Writer<'a> {
    prefixes: &'a PrefixMap,
    used: BTreeSet<String>,
}

impl<'a> Writer<'a> {
    fn named(&mut self, node: &NamedNode) -> String {
        match self.prefixes.shorten(node.as_str()) {
            Some((prefix, local)) => {
                self.used.insert(prefix.to_string());
                format!("{prefix}:{local}")
            }
            None => node.to_string(),
        }
    }

    fn node(&mut self, node: &Node) -> String {
        match node {
            Node::Named(node) => self.named(node),
            Node::Blank(node) => node.to_string(),
        }
    }

    fn term(&mut self, term: &Term) -> String {
        match term {
            Term::Named(node) => self.named(node),
            Term::Blank(node) => node.to_string(),
            Term::Literal(lit) => self.literal(lit),
        }
    }

    fn literal(&mut self, lit: &Literal) -> String {
        let value = lit.value();
        if let Some(language) = lit.language() {
            return format!("\"{}\"@{language}", escape(value));
        }
        let datatype = lit.datatype();
        if *datatype == xsd::STRING {
            format!("\"{}\"", escape(value))
        } else if (*datatype == xsd::INTEGER && is_integer(value))
            || (*datatype == xsd::DECIMAL && is_decimal(value))
            || (*datatype == xsd::BOOLEAN && matches!(value, "true" | "false"))
        {
            value.to_string()
        } else {
            format!("\"{}\"^^{}", escape(value), self.named(datatype))
        }
    }
}

fn unsigned(s: &str) -> &str {
    s.strip_prefix(['+', '-']).unwrap_or(s)
}

fn is_integer(s: &str) -> bool {
    let digits = unsigned(s);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

fn is_decimal(s: &str) -> bool {
    let Some((int, frac)) = unsigned(s).split_once('.') else {
        return false;
    };
    !frac.is_empty()
        && int.chars().all(|c| c.is_ascii_digit())
        && frac.chars().all(|c| c.is_ascii_digit())
}
