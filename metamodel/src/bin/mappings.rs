use anyhow::Context;
use clap::Parser;
use metamodel::{init_logging, mapping::MappingSet, serialize};
use std::fs::File;
use std::io::{stdin, Read};
use std::path::{Path, PathBuf};

/// Convert semantic mapping sets to RDF.
#[derive(Parser)]
enum Command {
    /// Write the mappings in a mapping set as an RDF graph.
    Convert {
        /// The mapping set to read, as JSON. Reads stdin if not given.
        #[clap(env = "METAMODEL_INPUT", name = "INPUT")]
        input: Option<PathBuf>,

        #[clap(flatten)]
        output: serialize::Options,
    },
    /// Expand compact URIs into full IRIs.
    Expand {
        /// Resolve prefixes using the curie_map of the mapping set in FILE.
        #[clap(short = 'm', long, env = "METAMODEL_CURIE_MAP", name = "FILE")]
        curie_map: Option<PathBuf>,

        /// The CURIEs to expand.
        #[clap(required = true)]
        curies: Vec<String>,
    },
}

fn main() -> Result<(), anyhow::Error> {
    init_logging();

    match Command::parse() {
        Command::Convert { input, output } => {
            let set = read_mapping_set(input.as_deref())?;
            tracing::info!("read {} mappings", set.mappings.len());
            let mut graph = set.to_graph()?;
            output.emit(&mut graph)?;
        }
        Command::Expand { curie_map, curies } => {
            let set = match curie_map {
                Some(path) => read_mapping_set(Some(&path))?,
                None => MappingSet::default(),
            };
            let converter = set.converter()?;
            for curie in curies {
                println!("{}", converter.expand(&curie)?.as_str());
            }
        }
    }

    Ok(())
}

fn read_mapping_set(path: Option<&Path>) -> Result<MappingSet, anyhow::Error> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open {}", path.display()))?;
            Ok(MappingSet::from_reader(file)?)
        }
        None => {
            let mut json = String::new();
            stdin().read_to_string(&mut json)?;
            Ok(MappingSet::from_reader(json.as_bytes())?)
        }
    }
}
