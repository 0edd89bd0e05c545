// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Read-only graph capability consumed by the algorithms.
//!
//! Algorithms never mutate a graph. Any structure exposing node/arc
//! enumeration, endpoints and filtered adjacency can be searched, whether it
//! is a stored graph or a view over one.

use crate::core::id::{Arc, Node};

/// Which arcs to enumerate around a node (or globally).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ArcFilter {
    /// Every arc.
    #[default]
    All,
    /// Undirected edges only.
    Edge,
    /// Arcs leaving the node, plus incident edges.
    Forward,
    /// Arcs entering the node, plus incident edges.
    Backward,
}

pub trait Graph {
    /// All nodes.
    fn nodes(&self) -> impl Iterator<Item = Node> + '_;

    /// All arcs. Only `All` and `Edge` restrict the global enumeration;
    /// `Forward` and `Backward` behave like `All`.
    fn arcs(&self, filter: ArcFilter) -> impl Iterator<Item = Arc> + '_;

    /// Arcs incident to `node` selected by `filter`. Each arc appears once,
    /// loops included.
    fn node_arcs(&self, node: Node, filter: ArcFilter) -> impl Iterator<Item = Arc> + '_;

    /// First endpoint (the tail of a directed arc).
    fn u(&self, arc: Arc) -> Node;

    /// Second endpoint (the head of a directed arc).
    fn v(&self, arc: Arc) -> Node;

    /// Whether the arc is an undirected edge.
    fn is_edge(&self, arc: Arc) -> bool;

    fn node_count(&self) -> usize;

    fn arc_count(&self, filter: ArcFilter) -> usize {
        self.arcs(filter).count()
    }

    fn has_node(&self, node: Node) -> bool;

    fn has_arc(&self, arc: Arc) -> bool;

    /// The endpoint of `arc` that is not `node` (or `node` itself for loops).
    fn other(&self, arc: Arc, node: Node) -> Node {
        let u = self.u(arc);
        if u == node { self.v(arc) } else { u }
    }
}
