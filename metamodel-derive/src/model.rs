//! Derive macro for the `Model` trait.

use crate::{helpers::AttrParser, metamodel_path};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DataStruct, DeriveInput, Expr, Field, Fields, Ident};

const STRUCT_ATTRS: &[&str] = &["rdf_type", "triple", "blank"];
const FIELD_ATTRS: &[&str] = &[
    "predicate",
    "namespace",
    "is_subject",
    "is_predicate",
    "is_object",
];
const SLOTS: [&str; 3] = ["is_subject", "is_predicate", "is_object"];

/// Derive a `Model` instance for a struct.
pub fn derive(
    DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    }: DeriveInput,
) -> TokenStream {
    if !generics.params.is_empty() {
        panic!("Model cannot be derived on generic types");
    }
    match data {
        Data::Struct(s) => generate_struct(s, ident, attrs),
        _ => panic!("Model can only be derived for structs"),
    }
}

fn generate_struct(s: DataStruct, name: Ident, attrs: Vec<Attribute>) -> TokenStream {
    let metamodel = metamodel_path();
    let p = AttrParser::new("rdf");
    p.check(&attrs, STRUCT_ATTRS);

    let Fields::Named(fields) = s.fields else {
        panic!("Model fields must be named");
    };
    let fields = fields.named.into_iter().collect::<Vec<_>>();
    for f in &fields {
        p.check(&f.attrs, FIELD_ATTRS);
    }

    let rdf_type: Option<Expr> = p.get_arg(&attrs, "rdf_type");
    let is_triple = p.has_bool(&attrs, "triple");
    let is_blank = p.has_bool(&attrs, "blank");
    let label = name.to_string();

    // Declare the type of the node, if there is one.
    let add_type = rdf_type.as_ref().map(|_| {
        quote! {
            #metamodel::model::add_type(graph, &node, <Self as #metamodel::Typed>::RDF_TYPE);
        }
    });

    // For statements, add the subject, predicate and object and reify the resulting triple on our
    // own node.
    let add_statement = if is_triple {
        let [subject, predicate, object] = SLOTS.map(|slot| find_slot(&p, &fields, slot));
        quote! {
            let subject = #metamodel::Model::add_to_graph(&self.#subject, graph)?;
            let predicate = #metamodel::Model::add_to_graph(&self.#predicate, graph)?;
            let object = #metamodel::Model::add_to_graph(&self.#object, graph)?;
            #metamodel::model::reify(graph, &node, subject, predicate, object)?;
        }
    } else {
        for f in &fields {
            if let Some(slot) = SLOTS.iter().find(|slot| p.has_bool(&f.attrs, slot)) {
                panic!(
                    "field {} is marked {slot}, but {name} is not a triple model",
                    field_name(f)
                );
            }
        }
        quote!()
    };

    let add_fields = fields.iter().filter_map(|f| generate_field(&p, &metamodel, f));

    let typed = rdf_type.map(|rdf_type| {
        quote! {
            impl #metamodel::Typed for #name {
                const RDF_TYPE: #metamodel::NamedNode = #rdf_type;
            }
        }
    });

    let identify = is_blank.then(|| {
        quote! {
            impl #metamodel::Identify for #name {
                fn node(&self) -> #metamodel::Result<#metamodel::Node> {
                    Ok(#metamodel::BlankNode::fresh().into())
                }
            }
        }
    });

    quote! {
        impl #metamodel::Model for #name {
            #[allow(unused_variables)]
            fn add_to_graph(
                &self,
                graph: &mut #metamodel::Graph,
            ) -> #metamodel::Result<#metamodel::Node> {
                let node = #metamodel::model::identify(self, #label)?;
                #add_type
                #add_statement
                #(#add_fields)*
                Ok(node)
            }
        }

        impl #metamodel::Value for #name {
            fn add_object(
                &self,
                graph: &mut #metamodel::Graph,
                subject: &#metamodel::Node,
                predicate: &#metamodel::NamedNode,
            ) -> #metamodel::Result<()> {
                let object = #metamodel::Model::add_to_graph(self, graph)?;
                graph.insert(#metamodel::Triple::new(
                    subject.clone(),
                    predicate.clone(),
                    object,
                ));
                Ok(())
            }
        }

        #typed
        #identify
    }
}

/// Generate the statement adding the values of an annotated field to the graph.
fn generate_field(p: &AttrParser, metamodel: &TokenStream, f: &Field) -> Option<TokenStream> {
    let name = f.ident.as_ref()?;
    let predicate: Option<Expr> = p.get_arg(&f.attrs, "predicate");
    let namespace: Option<Expr> = p.get_arg(&f.attrs, "namespace");
    match (predicate, namespace) {
        (Some(predicate), Some(namespace)) => Some(quote! {
            #metamodel::NamespacedValue::add_object_in(
                &self.#name,
                graph,
                &node,
                &(#predicate),
                &(#namespace),
            )?;
        }),
        (Some(predicate), None) => Some(quote! {
            #metamodel::Value::add_object(&self.#name, graph, &node, &(#predicate))?;
        }),
        (None, Some(_)) => panic!("field {name} has a namespace but no predicate"),
        (None, None) => None,
    }
}

/// Find the unique field filling one of the subject, predicate or object slots of a statement.
fn find_slot<'a>(p: &AttrParser, fields: &'a [Field], slot: &str) -> &'a Ident {
    let mut matches = fields.iter().filter(|f| p.has_bool(&f.attrs, slot));
    let Some(f) = matches.next() else {
        panic!("triple model must have a field marked {slot}");
    };
    if let Some(other) = matches.next() {
        panic!(
            "fields {} and {} are both marked {slot}",
            field_name(f),
            field_name(other)
        );
    }
    if p.has_bool(&f.attrs, "predicate") {
        panic!("field {} is marked {slot} and cannot also have a predicate", field_name(f));
    }
    if let Some(other) = SLOTS
        .iter()
        .find(|other| **other != slot && p.has_bool(&f.attrs, other))
    {
        panic!("field {} cannot be marked both {slot} and {other}", field_name(f));
    }
    // Named fields always have an ident.
    f.ident.as_ref().unwrap()
}

fn field_name(f: &Field) -> String {
    f.ident
        .as_ref()
        .map(|ident| ident.to_string())
        .unwrap_or_default()
}
