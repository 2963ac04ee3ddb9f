//! Serialize annotated Rust records as RDF.
//!
//! Records are described with [`#[derive(Model)]`](macro@Model): annotated fields become
//! triples, nested records become linked nodes, and statement-shaped records are reified as
//! `rdf:Statement`s. The resulting [`Graph`] can be written as Turtle or N-Triples.
//!
//! The [`mapping`] module uses this machinery for semantic mappings between entities in
//! different vocabularies, as in the Simple Standard for Sharing Ontological Mappings.

// Generated code refers to this crate as `metamodel`, even inside the crate itself.
extern crate self as metamodel;

pub mod error;
pub mod graph;
pub mod mapping;
pub mod model;
pub mod namespace;
pub mod serialize;
pub mod term;
pub mod value;
pub mod vocab;

pub use error::{Error, Result};
pub use graph::Graph;
pub use metamodel_derive::Model;
pub use model::{Identify, Model, Typed};
pub use namespace::{Namespace, PrefixMap};
pub use serialize::Format;
pub use term::{BlankNode, Literal, NamedNode, Node, Term, Triple};
pub use value::{NamespacedValue, Value};

use tracing_subscriber::EnvFilter;

/// Install a global subscriber logging to stderr.
///
/// The filter is taken from `RUST_LOG`, defaulting to `info`. Calling this more than once is
/// harmless; only the first subscriber is installed.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
