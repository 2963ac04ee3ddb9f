//! Derive macros for the `metamodel` crate.

use proc_macro::TokenStream;
use proc_macro2::Span;
use proc_macro_crate::{crate_name, FoundCrate};
use quote::quote;
use syn::{parse_macro_input, Ident};

mod helpers;
mod model;

/// Derive an implementation of `Model`, and related traits, for a struct.
///
/// The derived `Model` implementation adds one triple to the graph for each value of each
/// annotated field of the struct, with the node of the struct as subject. Fields without an
/// `#[rdf(...)]` attribute are ignored, so a struct can carry data which only serves to identify
/// it (such as an ORCID or a ROR ID) without that data appearing in the graph.
///
/// Specifically, the following items are generated:
/// * An implementation of `Model`. The node representing the struct comes from its `Identify`
///   implementation, which must be provided by hand unless the struct is marked
///   [`blank`](#struct-attributes).
/// * An implementation of `Value`, so that the struct can itself be used as a field of another
///   model. The nested model is added to the graph and linked to its parent by the parent's
///   predicate.
/// * If the struct has an [`rdf_type`](#struct-attributes), an implementation of `Typed`. Every
///   instance is then declared to have that type.
/// * If the struct is [`blank`](#struct-attributes), an implementation of `Identify` which
///   assigns a fresh blank node to the struct each time it is added to a graph.
///
/// A struct marked [`triple`](#struct-attributes) models a statement: it must have exactly one
/// field of each of [`is_subject`](#field-attributes), [`is_predicate`](#field-attributes), and
/// [`is_object`](#field-attributes). Each of these is added to the graph as a model, the
/// resulting triple is added, and the node of the struct is made into an `rdf:Statement` which
/// reifies that triple. The remaining annotated fields then describe the statement.
///
/// The values of the `rdf_type`, `predicate` and `namespace` arguments are arbitrary Rust
/// expressions, evaluated each time the struct is added to a graph. `rdf_type` must be a constant
/// expression of type `NamedNode`, since it also initializes `Typed::RDF_TYPE`.
///
/// # Examples
///
/// ```ignore
/// use metamodel::{vocab::{rdfs, schema}, Identify, Model, Namespace, Node, Result};
///
/// const ORCID: Namespace = Namespace::from_static("https://orcid.org/");
///
/// #[derive(Model)]
/// #[rdf(rdf_type = schema::PERSON)]
/// struct Person {
///     orcid: String,
///     #[rdf(predicate = rdfs::LABEL)]
///     name: String,
/// }
///
/// impl Identify for Person {
///     fn node(&self) -> Result<Node> {
///         Ok(ORCID.term(&self.orcid)?.into())
///     }
/// }
/// ```
///
/// ## Generated code.
///
/// ```ignore
/// impl metamodel::Model for Person {
///     fn add_to_graph(&self, graph: &mut metamodel::Graph) -> metamodel::Result<metamodel::Node> {
///         let node = metamodel::model::identify(self, "Person")?;
///         metamodel::model::add_type(graph, &node, <Self as metamodel::Typed>::RDF_TYPE);
///         metamodel::Value::add_object(&self.name, graph, &node, &(rdfs::LABEL))?;
///         Ok(node)
///     }
/// }
///
/// impl metamodel::Value for Person {
///     // Add `self`, then link `subject` to it.
/// }
///
/// impl metamodel::Typed for Person {
///     const RDF_TYPE: metamodel::NamedNode = schema::PERSON;
/// }
/// ```
///
/// # Struct attributes
///
/// | Attribute     | Description                                             | Arg     | Required |
/// |---------------|---------------------------------------------------------|---------|----------|
/// | rdf_type      | The class of every instance of this struct.             | expr    | no       |
/// | triple        | This struct models a reified statement.                 | n/a     | no       |
/// | blank         | Identify each instance by a fresh blank node.           | n/a     | no       |
///
/// # Field attributes
///
/// | Attribute     | Description                                             | Arg    | Required |
/// |---------------|---------------------------------------------------------|--------|----------|
/// | predicate     | Serialize this field, relating it to the struct through the given predicate. | expr | no |
/// | namespace     | Treat the value of this field as a local name in the given namespace. Requires `predicate`. | expr | no |
/// | is_subject    | The subject of the statement modeled by a `triple` struct. | n/a | for triples |
/// | is_predicate  | The predicate of the statement modeled by a `triple` struct. | n/a | for triples |
/// | is_object     | The object of the statement modeled by a `triple` struct. | n/a | for triples |
#[proc_macro_derive(Model, attributes(rdf))]
pub fn model(input: TokenStream) -> TokenStream {
    model::derive(parse_macro_input!(input)).into()
}

/// The path of the `metamodel` crate in the scope invoking a procedural macro.
///
/// The crate refers to itself as `metamodel` (via `extern crate self`), so the same path works in
/// the crate's own tests and binaries.
fn metamodel_path() -> proc_macro2::TokenStream {
    match crate_name("metamodel") {
        Ok(FoundCrate::Name(name)) => {
            let ident = Ident::new(&name, Span::call_site());
            quote!(#ident)
        }
        Ok(FoundCrate::Itself) | Err(_) => quote!(metamodel),
    }
}
