// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use netgraph_common::{Arc, Directedness, Node, SimpleGraph};

/// Node values of the seven node path scenario; arc `i` (node `i` to node
/// `i + 1`) costs the value of node `i`.
pub const SEVEN_NODE_VALUES: [i64; 7] = [0, 0, 15, 10, 11, 3, 8];

/// Graph with `nodes` nodes and the given `(u, v, directedness)` arcs, which
/// receive handles in list order.
pub fn build_graph(
    nodes: usize,
    arcs: &[(usize, usize, Directedness)],
) -> (SimpleGraph, Vec<Node>, Vec<Arc>) {
    let mut graph = SimpleGraph::with_capacity(nodes, arcs.len());
    let n = graph.add_nodes(nodes);
    let a = arcs
        .iter()
        .map(|&(u, v, d)| graph.add_arc(n[u], n[v], d).expect("arc endpoints in range"))
        .collect();
    (graph, n, a)
}

/// Directed path 0 -> 1 -> ... -> nodes - 1.
pub fn build_directed_path(nodes: usize) -> (SimpleGraph, Vec<Node>, Vec<Arc>) {
    let arcs: Vec<_> = (1..nodes)
        .map(|i| (i - 1, i, Directedness::Directed))
        .collect();
    build_graph(nodes, &arcs)
}

/// Cost function reading `costs[arc]` for arcs created by [`build_graph`].
pub fn cost_fn<C: Copy>(costs: &[C]) -> impl Fn(Arc) -> C + Copy + '_ {
    move |arc| costs[arc.as_u64() as usize]
}

pub fn seven_node_path() -> (SimpleGraph, Vec<Node>, impl Fn(Arc) -> i64 + Copy) {
    let (graph, nodes, _) = build_directed_path(SEVEN_NODE_VALUES.len());
    (graph, nodes, |arc: Arc| SEVEN_NODE_VALUES[arc.as_u64() as usize])
}
