//! Serialization of graphs into RDF text formats.

use crate::error::{Error, IoSnafu, Result};
use crate::graph::Graph;
use crate::namespace::Namespace;
use clap::Args;
use snafu::ResultExt;
use std::fs::File;
use std::io::{stdout, BufWriter};
use std::path::PathBuf;
use strum::{Display, EnumIter, EnumString};

mod ntriples;
mod turtle;

/// A text format for RDF graphs.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Format {
    /// Terse RDF Triple Language.
    #[default]
    #[strum(to_string = "turtle", serialize = "ttl")]
    Turtle,
    /// One triple per line, with every IRI written out in full.
    #[strum(to_string = "ntriples", serialize = "nt")]
    NTriples,
}

impl Format {
    /// The conventional file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Turtle => "ttl",
            Self::NTriples => "nt",
        }
    }
}

pub(crate) fn to_string(graph: &Graph, format: Format) -> String {
    match format {
        Format::Turtle => turtle::write(graph),
        Format::NTriples => ntriples::write(graph),
    }
}

/// Options controlling how and where a graph is written.
#[derive(Clone, Debug, Default, Args)]
pub struct Options {
    /// The output format (turtle or ntriples).
    #[clap(short, long, env = "METAMODEL_FORMAT", default_value = "turtle")]
    pub format: Format,

    /// Write output to FILE instead of stdout.
    #[clap(short, long, env = "METAMODEL_OUT", name = "FILE")]
    pub out: Option<PathBuf>,

    /// Additional prefix bindings for the output, as PREFIX=NAMESPACE.
    #[clap(
        short,
        long = "prefix",
        env = "METAMODEL_PREFIX",
        value_delimiter = ',',
        value_parser = parse_binding,
    )]
    pub prefixes: Vec<(String, Namespace)>,
}

impl Options {
    /// Bind the extra prefixes in `graph`.
    pub fn apply(&self, graph: &mut Graph) -> Result<()> {
        for (prefix, namespace) in &self.prefixes {
            graph.bind(prefix.clone(), namespace.clone())?;
        }
        Ok(())
    }

    /// Bind the extra prefixes in `graph` and write it to the configured destination.
    pub fn emit(&self, graph: &mut Graph) -> Result<()> {
        self.apply(graph)?;
        match &self.out {
            Some(path) => {
                tracing::info!(
                    "writing {} triples to {} as {}",
                    graph.len(),
                    path.display(),
                    self.format
                );
                let file = File::create(path).context(IoSnafu)?;
                graph.write_to(BufWriter::new(file), self.format)
            }
            None => graph.write_to(stdout().lock(), self.format),
        }
    }
}

/// Parse a `PREFIX=NAMESPACE` binding.
pub fn parse_binding(s: &str) -> Result<(String, Namespace)> {
    let (prefix, namespace) = s.split_once('=').ok_or_else(|| Error::InvalidPrefix {
        prefix: s.to_string(),
    })?;
    Ok((prefix.trim().to_string(), Namespace::new(namespace.trim())?))
}
