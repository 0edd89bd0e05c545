// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Simple adjacency list graph.
//!
//! A minimal mixed graph (directed arcs and undirected edges) providing:
//! - O(1) node and arc lookup
//! - O(degree) filtered adjacency iteration
//! - Dense handles assigned in insertion order

use crate::core::id::{Arc, Node};
use crate::graph::capability::{ArcFilter, Graph};

/// Whether a new arc is directed or an undirected edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Directedness {
    Directed,
    Undirected,
}

/// Arc entry stored in the arc table.
#[derive(Clone, Copy, Debug)]
pub struct ArcEntry {
    pub u: Node,
    pub v: Node,
    pub directed: bool,
}

/// Mixed graph with per-node adjacency lists.
///
/// Directed arcs are kept in outgoing/incoming lists, undirected edges in a
/// separate incident list so that filtered adjacency never has to inspect
/// the arc table.
#[derive(Debug, Default, Clone)]
pub struct SimpleGraph {
    /// Arc table indexed by arc id
    arcs: Vec<ArcEntry>,
    /// Directed arcs leaving each node
    outgoing: Vec<Vec<Arc>>,
    /// Directed arcs entering each node
    incoming: Vec<Vec<Arc>>,
    /// Undirected edges incident to each node
    edges: Vec<Vec<Arc>>,
    edge_count: usize,
}

impl SimpleGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new graph with pre-allocated capacity.
    pub fn with_capacity(nodes: usize, arcs: usize) -> Self {
        Self {
            arcs: Vec::with_capacity(arcs),
            outgoing: Vec::with_capacity(nodes),
            incoming: Vec::with_capacity(nodes),
            edges: Vec::with_capacity(nodes),
            edge_count: 0,
        }
    }

    /// Adds a node and returns its handle.
    pub fn add_node(&mut self) -> Node {
        let node = Node::new(self.outgoing.len() as u64);
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        self.edges.push(Vec::new());
        node
    }

    /// Adds `count` nodes and returns their handles in order.
    pub fn add_nodes(&mut self, count: usize) -> Vec<Node> {
        (0..count).map(|_| self.add_node()).collect()
    }

    /// Adds an arc between two existing nodes.
    ///
    /// Returns `None` if either endpoint does not belong to the graph.
    pub fn add_arc(&mut self, u: Node, v: Node, directedness: Directedness) -> Option<Arc> {
        let (ui, vi) = (self.index(u)?, self.index(v)?);
        let arc = Arc::new(self.arcs.len() as u64);
        let directed = directedness == Directedness::Directed;
        self.arcs.push(ArcEntry { u, v, directed });

        if directed {
            self.outgoing[ui].push(arc);
            self.incoming[vi].push(arc);
        } else {
            self.edges[ui].push(arc);
            if ui != vi {
                self.edges[vi].push(arc);
            }
            self.edge_count += 1;
        }
        Some(arc)
    }

    /// Returns the arc entry in O(1) time.
    pub fn arc(&self, arc: Arc) -> Option<&ArcEntry> {
        self.arcs.get(usize::try_from(arc.as_u64()).ok()?)
    }

    /// Clears the graph, removing all nodes and arcs.
    pub fn clear(&mut self) {
        self.arcs.clear();
        self.outgoing.clear();
        self.incoming.clear();
        self.edges.clear();
        self.edge_count = 0;
    }

    #[inline]
    fn index(&self, node: Node) -> Option<usize> {
        let i = usize::try_from(node.as_u64()).ok()?;
        (i < self.outgoing.len()).then_some(i)
    }
}

static NO_ARCS: [Arc; 0] = [];

impl Graph for SimpleGraph {
    fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        (0..self.outgoing.len() as u64).map(Node::new)
    }

    fn arcs(&self, filter: ArcFilter) -> impl Iterator<Item = Arc> + '_ {
        let edges_only = filter == ArcFilter::Edge;
        self.arcs
            .iter()
            .enumerate()
            .filter(move |(_, entry)| !edges_only || !entry.directed)
            .map(|(i, _)| Arc::new(i as u64))
    }

    fn node_arcs(&self, node: Node, filter: ArcFilter) -> impl Iterator<Item = Arc> + '_ {
        let (out, inc, edg): (&[Arc], &[Arc], &[Arc]) = match self.index(node) {
            Some(i) => (
                self.outgoing[i].as_slice(),
                self.incoming[i].as_slice(),
                self.edges[i].as_slice(),
            ),
            None => (&NO_ARCS[..], &NO_ARCS[..], &NO_ARCS[..]),
        };
        let (out, inc) = match filter {
            ArcFilter::All => (out, inc),
            ArcFilter::Edge => (&NO_ARCS[..], &NO_ARCS[..]),
            ArcFilter::Forward => (out, &NO_ARCS[..]),
            ArcFilter::Backward => (&NO_ARCS[..], inc),
        };
        // With both lists selected a directed loop would show up twice.
        let skip_loops = filter == ArcFilter::All;
        out.iter()
            .copied()
            .chain(inc.iter().copied().filter(move |&a| {
                !skip_loops || self.arcs[a.as_u64() as usize].u != node
            }))
            .chain(edg.iter().copied())
    }

    fn u(&self, arc: Arc) -> Node {
        self.arc(arc).map_or(Node::INVALID, |e| e.u)
    }

    fn v(&self, arc: Arc) -> Node {
        self.arc(arc).map_or(Node::INVALID, |e| e.v)
    }

    fn is_edge(&self, arc: Arc) -> bool {
        self.arc(arc).is_some_and(|e| !e.directed)
    }

    fn node_count(&self) -> usize {
        self.outgoing.len()
    }

    fn arc_count(&self, filter: ArcFilter) -> usize {
        match filter {
            ArcFilter::Edge => self.edge_count,
            _ => self.arcs.len(),
        }
    }

    fn has_node(&self, node: Node) -> bool {
        self.index(node).is_some()
    }

    fn has_arc(&self, arc: Arc) -> bool {
        self.arc(arc).is_some()
    }
}
