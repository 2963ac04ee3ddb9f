//! The terms RDF graphs are made of.
//!
//! A graph is a set of [`Triple`]s. Each triple relates a _subject_ ([`Node`]) to an _object_
//! ([`Term`]) through a _predicate_, which is always a [`NamedNode`]:
//! * a [`NamedNode`] is an absolute IRI identifying a resource globally;
//! * a [`BlankNode`] is a resource which has no global identifier, only a label which is unique
//!   within one serialization;
//! * a [`Literal`] is a value like a string or a number, tagged with a datatype IRI and, for
//!   language-tagged strings, a language.
//!
//! The [`Display`](std::fmt::Display) implementations of all terms produce their N-Triples
//! syntax.

use crate::error::{
    InvalidBlankNodeSnafu, InvalidIriSnafu, InvalidLanguageTagSnafu, Result,
};
use crate::vocab::{rdf, xsd};
use derive_more::{Display, From};
use snafu::ensure;
use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};

/// Characters which may never appear in an IRI.
const FORBIDDEN_IRI_CHARS: &[char] = &['<', '>', '"', '{', '}', '|', '^', '`', '\\'];

/// A resource identified by an absolute IRI.
#[derive(Clone, Debug, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display(fmt = "<{}>", iri)]
pub struct NamedNode {
    iri: Cow<'static, str>,
}

impl NamedNode {
    /// Parse an absolute IRI.
    pub fn new(iri: impl Into<String>) -> Result<Self> {
        let iri = iri.into();
        validate_iri(&iri)?;
        Ok(Self { iri: iri.into() })
    }

    /// A named node for an IRI known at compile time.
    ///
    /// The IRI is not validated, so this should only be used for well-known constants, like
    /// those in [`vocab`](crate::vocab).
    pub const fn from_static(iri: &'static str) -> Self {
        Self {
            iri: Cow::Borrowed(iri),
        }
    }

    /// The IRI of this node.
    pub fn as_str(&self) -> &str {
        &self.iri
    }
}

impl AsRef<str> for NamedNode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for NamedNode {
    type Error = crate::Error;

    fn try_from(iri: String) -> Result<Self> {
        Self::new(iri)
    }
}

impl TryFrom<&str> for NamedNode {
    type Error = crate::Error;

    fn try_from(iri: &str) -> Result<Self> {
        Self::new(iri)
    }
}

pub(crate) fn validate_iri(iri: &str) -> Result<()> {
    let Some((scheme, _)) = iri.split_once(':') else {
        return InvalidIriSnafu {
            iri,
            reason: "missing scheme",
        }
        .fail();
    };
    let mut scheme_chars = scheme.chars();
    ensure!(
        scheme_chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic())
            && scheme_chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')),
        InvalidIriSnafu {
            iri,
            reason: "invalid scheme",
        }
    );
    ensure!(
        !iri.chars()
            .any(|c| c.is_whitespace() || c.is_control() || FORBIDDEN_IRI_CHARS.contains(&c)),
        InvalidIriSnafu {
            iri,
            reason: "forbidden character",
        }
    );
    Ok(())
}

/// Prefix of the labels handed out by [`BlankNode::fresh`], reserved so that user labels can
/// never collide with them.
const FRESH_PREFIX: &str = "genid";

/// A resource without a global identifier.
#[derive(Clone, Debug, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display(fmt = "_:{}", label)]
pub struct BlankNode {
    label: String,
}

impl BlankNode {
    /// A blank node with the given label.
    ///
    /// Labels starting with `genid` are reserved for [`fresh`](Self::fresh) nodes.
    pub fn new(label: impl Into<String>) -> Result<Self> {
        let label = label.into();
        ensure!(
            !label.is_empty()
                && !label.starts_with('-')
                && !label.starts_with(FRESH_PREFIX)
                && label
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-')),
            InvalidBlankNodeSnafu { label }
        );
        Ok(Self { label })
    }

    /// A blank node with a label that has not been handed out before by this process.
    pub fn fresh() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        let id = NEXT.fetch_add(1, Ordering::Relaxed);
        Self {
            label: format!("{FRESH_PREFIX}{id}"),
        }
    }

    /// The label of this node.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Default for BlankNode {
    fn default() -> Self {
        Self::fresh()
    }
}

/// A value, such as a string or a number.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    value: String,
    datatype: NamedNode,
    language: Option<String>,
}

impl Literal {
    /// A plain `xsd:string` literal.
    pub fn string(value: impl Into<String>) -> Self {
        Self::typed(value, xsd::STRING)
    }

    /// A literal with an explicit datatype.
    ///
    /// The lexical form is not checked against the datatype.
    pub fn typed(value: impl Into<String>, datatype: NamedNode) -> Self {
        Self {
            value: value.into(),
            datatype,
            language: None,
        }
    }

    /// A language-tagged string, like `"chat"@fr`.
    ///
    /// The tag is normalized to lowercase.
    pub fn lang(value: impl Into<String>, language: impl AsRef<str>) -> Result<Self> {
        let language = language.as_ref();
        ensure!(
            valid_language_tag(language),
            InvalidLanguageTagSnafu { tag: language }
        );
        Ok(Self {
            value: value.into(),
            datatype: rdf::LANG_STRING,
            language: Some(language.to_ascii_lowercase()),
        })
    }

    /// The lexical form of this literal.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The datatype IRI of this literal.
    pub fn datatype(&self) -> &NamedNode {
        &self.datatype
    }

    /// The language tag, if this is a language-tagged string.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

fn valid_language_tag(tag: &str) -> bool {
    let mut parts = tag.split('-');
    let Some(primary) = parts.next() else {
        return false;
    };
    (1..=8).contains(&primary.len())
        && primary.chars().all(|c| c.is_ascii_alphabetic())
        && parts.all(|sub| (1..=8).contains(&sub.len()) && sub.chars().all(|c| c.is_ascii_alphanumeric()))
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "\"{}\"", escape(&self.value))?;
        if let Some(language) = &self.language {
            write!(f, "@{language}")
        } else if self.datatype != xsd::STRING {
            write!(f, "^^{}", self.datatype)
        } else {
            Ok(())
        }
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Self::string(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::string(value)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Self::typed(value.to_string(), xsd::BOOLEAN)
    }
}

macro_rules! integer_literal {
    ($($t:ty),+) => {
        $(
            impl From<$t> for Literal {
                fn from(value: $t) -> Self {
                    Self::typed(value.to_string(), xsd::INTEGER)
                }
            }
        )+
    }
}

integer_literal!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! double_literal {
    ($($t:ty),+) => {
        $(
            impl From<$t> for Literal {
                fn from(value: $t) -> Self {
                    let lexical = if value.is_nan() {
                        "NaN".to_string()
                    } else if value.is_infinite() {
                        if value > 0.0 { "INF" } else { "-INF" }.to_string()
                    } else {
                        format!("{value:?}")
                    };
                    Self::typed(lexical, xsd::DOUBLE)
                }
            }
        )+
    }
}

double_literal!(f32, f64);

/// Escape a string for use inside a double-quoted Turtle or N-Triples literal.
pub(crate) fn escape(s: &str) -> Cow<'_, str> {
    if !s.chars().any(|c| c == '"' || c == '\\' || c.is_control()) {
        return Cow::Borrowed(s);
    }
    let mut escaped = String::with_capacity(s.len() + 2);
    for c in s.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_control() => escaped.push_str(&format!("\\u{:04X}", c as u32)),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// A term which can appear as the subject of a triple.
#[derive(Clone, Debug, Display, From, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Node {
    Named(NamedNode),
    Blank(BlankNode),
}

impl Node {
    /// The IRI of this node, if it is not blank.
    pub fn as_named(&self) -> Option<&NamedNode> {
        match self {
            Self::Named(node) => Some(node),
            Self::Blank(_) => None,
        }
    }

    /// Is this a blank node?
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank(_))
    }
}

/// A term which can appear as the object of a triple.
#[derive(Clone, Debug, Display, From, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Term {
    Named(NamedNode),
    Blank(BlankNode),
    Literal(Literal),
}

impl From<Node> for Term {
    fn from(node: Node) -> Self {
        match node {
            Node::Named(node) => Self::Named(node),
            Node::Blank(node) => Self::Blank(node),
        }
    }
}

impl Term {
    /// This term as a subject, unless it is a literal.
    pub fn as_node(&self) -> Option<Node> {
        match self {
            Self::Named(node) => Some(node.clone().into()),
            Self::Blank(node) => Some(node.clone().into()),
            Self::Literal(_) => None,
        }
    }

    /// The literal value of this term, if it is one.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Self::Literal(lit) => Some(lit),
            _ => None,
        }
    }
}

/// A statement relating a subject to an object through a predicate.
#[derive(Clone, Debug, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display(fmt = "{} {} {} .", subject, predicate, object)]
pub struct Triple {
    pub subject: Node,
    pub predicate: NamedNode,
    pub object: Term,
}

impl Triple {
    /// Create a triple.
    pub fn new(
        subject: impl Into<Node>,
        predicate: impl Into<NamedNode>,
        object: impl Into<Term>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}
