//! N-Triples output.

use crate::graph::Graph;

pub(super) fn write(graph: &Graph) -> String {
    graph.iter().map(|triple| format!("{triple}\n")).collect()
}
