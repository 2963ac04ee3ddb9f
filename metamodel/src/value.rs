//! Conversion of field values into the objects of triples.
//!
//! Every serialized field of a [`Model`](crate::Model) is annotated with a predicate. At
//! runtime, the field value is handed to one of the traits in this module along with the node
//! of the model and the predicate, and the value decides which triples to add:
//! * [`Value`] is used for fields annotated with just a predicate. Scalars become literals,
//!   nodes are used as-is, nested models are added recursively and linked, and collections add
//!   one triple per element.
//! * [`NamespacedValue`] is used for fields annotated with a predicate and a namespace. The
//!   value is the local name of a term in that namespace.
//!
//! Both traits treat `None` as "no triples" and apply the same predicate to every element of a
//! collection.

use crate::error::Result;
use crate::graph::Graph;
use crate::namespace::Namespace;
use crate::term::{BlankNode, Literal, NamedNode, Node, Term, Triple};
use std::collections::BTreeSet;

/// A field value which can be the object of a triple.
pub trait Value {
    /// Add triples relating `subject` to this value through `predicate`.
    fn add_object(&self, graph: &mut Graph, subject: &Node, predicate: &NamedNode)
        -> Result<()>;
}

/// Values which are a single term.
macro_rules! term_value {
    ($($t:ty),+) => {
        $(
            impl Value for $t {
                fn add_object(
                    &self,
                    graph: &mut Graph,
                    subject: &Node,
                    predicate: &NamedNode,
                ) -> Result<()> {
                    graph.insert(Triple::new(
                        subject.clone(),
                        predicate.clone(),
                        Term::from(self.clone()),
                    ));
                    Ok(())
                }
            }
        )+
    }
}

term_value!(NamedNode, BlankNode, Node, Term, Literal);

/// Values which are converted to literals.
macro_rules! literal_value {
    ($($t:ty),+) => {
        $(
            impl Value for $t {
                fn add_object(
                    &self,
                    graph: &mut Graph,
                    subject: &Node,
                    predicate: &NamedNode,
                ) -> Result<()> {
                    graph.insert(Triple::new(
                        subject.clone(),
                        predicate.clone(),
                        Literal::from(self.clone()),
                    ));
                    Ok(())
                }
            }
        )+
    }
}

literal_value!(
    String, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

impl Value for str {
    fn add_object(&self, graph: &mut Graph, subject: &Node, predicate: &NamedNode) -> Result<()> {
        graph.insert(Triple::new(
            subject.clone(),
            predicate.clone(),
            Literal::from(self),
        ));
        Ok(())
    }
}

impl<T: Value + ?Sized> Value for &T {
    fn add_object(&self, graph: &mut Graph, subject: &Node, predicate: &NamedNode) -> Result<()> {
        Value::add_object(&**self, graph, subject, predicate)
    }
}

impl<T: Value + ?Sized> Value for Box<T> {
    fn add_object(&self, graph: &mut Graph, subject: &Node, predicate: &NamedNode) -> Result<()> {
        Value::add_object(&**self, graph, subject, predicate)
    }
}

impl<T: Value> Value for Option<T> {
    fn add_object(&self, graph: &mut Graph, subject: &Node, predicate: &NamedNode) -> Result<()> {
        match self {
            Some(value) => Value::add_object(value, graph, subject, predicate),
            None => Ok(()),
        }
    }
}

impl<T: Value> Value for [T] {
    fn add_object(&self, graph: &mut Graph, subject: &Node, predicate: &NamedNode) -> Result<()> {
        for value in self {
            Value::add_object(value, graph, subject, predicate)?;
        }
        Ok(())
    }
}

impl<T: Value> Value for Vec<T> {
    fn add_object(&self, graph: &mut Graph, subject: &Node, predicate: &NamedNode) -> Result<()> {
        Value::add_object(self.as_slice(), graph, subject, predicate)
    }
}

impl<T: Value> Value for BTreeSet<T> {
    fn add_object(&self, graph: &mut Graph, subject: &Node, predicate: &NamedNode) -> Result<()> {
        for value in self {
            Value::add_object(value, graph, subject, predicate)?;
        }
        Ok(())
    }
}

/// A field value which is the local name of a term in some namespace.
pub trait NamespacedValue {
    /// Add triples relating `subject` to the term named by this value in `namespace`.
    fn add_object_in(
        &self,
        graph: &mut Graph,
        subject: &Node,
        predicate: &NamedNode,
        namespace: &Namespace,
    ) -> Result<()>;
}

impl NamespacedValue for str {
    fn add_object_in(
        &self,
        graph: &mut Graph,
        subject: &Node,
        predicate: &NamedNode,
        namespace: &Namespace,
    ) -> Result<()> {
        graph.insert(Triple::new(
            subject.clone(),
            predicate.clone(),
            namespace.term(self)?,
        ));
        Ok(())
    }
}

impl NamespacedValue for String {
    fn add_object_in(
        &self,
        graph: &mut Graph,
        subject: &Node,
        predicate: &NamedNode,
        namespace: &Namespace,
    ) -> Result<()> {
        NamespacedValue::add_object_in(self.as_str(), graph, subject, predicate, namespace)
    }
}

impl<T: NamespacedValue + ?Sized> NamespacedValue for &T {
    fn add_object_in(
        &self,
        graph: &mut Graph,
        subject: &Node,
        predicate: &NamedNode,
        namespace: &Namespace,
    ) -> Result<()> {
        NamespacedValue::add_object_in(&**self, graph, subject, predicate, namespace)
    }
}

impl<T: NamespacedValue> NamespacedValue for Option<T> {
    fn add_object_in(
        &self,
        graph: &mut Graph,
        subject: &Node,
        predicate: &NamedNode,
        namespace: &Namespace,
    ) -> Result<()> {
        match self {
            Some(value) => {
                NamespacedValue::add_object_in(value, graph, subject, predicate, namespace)
            }
            None => Ok(()),
        }
    }
}

impl<T: NamespacedValue> NamespacedValue for [T] {
    fn add_object_in(
        &self,
        graph: &mut Graph,
        subject: &Node,
        predicate: &NamedNode,
        namespace: &Namespace,
    ) -> Result<()> {
        for value in self {
            NamespacedValue::add_object_in(value, graph, subject, predicate, namespace)?;
        }
        Ok(())
    }
}

impl<T: NamespacedValue> NamespacedValue for Vec<T> {
    fn add_object_in(
        &self,
        graph: &mut Graph,
        subject: &Node,
        predicate: &NamedNode,
        namespace: &Namespace,
    ) -> Result<()> {
        NamespacedValue::add_object_in(self.as_slice(), graph, subject, predicate, namespace)
    }
}
