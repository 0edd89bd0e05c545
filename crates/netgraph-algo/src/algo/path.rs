// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Path representation for traversal and shortest path results.

use fxhash::FxHashMap;
use netgraph_common::{AlgoError, Arc, Graph, Node, Numeric, Result};
use std::collections::VecDeque;

/// An ordered sequence of arcs from a first node to a last node.
///
/// Arcs may be walked against their orientation (searches in backward or
/// undirected mode produce such paths). No node occurs twice except that the
/// last node may equal the first, in which case the path is a cycle and can
/// no longer be extended.
#[derive(Debug, Clone, Default)]
pub struct Path {
    /// Walked nodes, first to last (a cycle repeats its first node at the end)
    nodes: VecDeque<Node>,
    /// Arcs between consecutive entries of `nodes`
    arcs: VecDeque<Arc>,
    next_arc: FxHashMap<Node, Arc>,
    prev_arc: FxHashMap<Node, Arc>,
}

impl Path {
    /// The empty path: no nodes, no arcs.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A path consisting of one node and no arcs.
    pub fn single(node: Node) -> Self {
        let mut path = Self::default();
        path.nodes.push_back(node);
        path
    }

    pub fn first_node(&self) -> Option<Node> {
        self.nodes.front().copied()
    }

    pub fn last_node(&self) -> Option<Node> {
        self.nodes.back().copied()
    }

    /// Arcs in walking order.
    pub fn arcs(&self) -> impl Iterator<Item = Arc> + '_ {
        self.arcs.iter().copied()
    }

    /// Nodes in walking order; a cycle yields its first node again at the end.
    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.nodes.iter().copied()
    }

    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    /// Number of distinct nodes.
    pub fn node_count(&self) -> usize {
        if self.is_cycle() {
            self.arcs.len()
        } else {
            self.nodes.len()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// True if the first node equals the last and there is at least one arc.
    pub fn is_cycle(&self) -> bool {
        !self.arcs.is_empty() && self.nodes.front() == self.nodes.back()
    }

    pub fn contains_node(&self, node: Node) -> bool {
        self.nodes.front() == Some(&node) || self.prev_arc.contains_key(&node)
    }

    /// Arc leaving `node` along the path.
    pub fn next_arc(&self, node: Node) -> Option<Arc> {
        self.next_arc.get(&node).copied()
    }

    /// Arc entering `node` along the path.
    pub fn prev_arc(&self, node: Node) -> Option<Arc> {
        self.prev_arc.get(&node).copied()
    }

    /// Appends `arc`, which must be incident to the last node.
    pub fn add_last<G: Graph>(&mut self, graph: &G, arc: Arc) -> Result<()> {
        let last = self.extensible_end(self.last_node())?;
        let next = Self::far_end(graph, arc, last)?;
        self.check_new_node(next, self.first_node())?;

        self.next_arc.insert(last, arc);
        self.prev_arc.insert(next, arc);
        self.arcs.push_back(arc);
        self.nodes.push_back(next);
        Ok(())
    }

    /// Prepends `arc`, which must be incident to the first node.
    pub fn add_first<G: Graph>(&mut self, graph: &G, arc: Arc) -> Result<()> {
        let first = self.extensible_end(self.first_node())?;
        let prev = Self::far_end(graph, arc, first)?;
        self.check_new_node(prev, self.last_node())?;

        self.prev_arc.insert(first, arc);
        self.next_arc.insert(prev, arc);
        self.arcs.push_front(arc);
        self.nodes.push_front(prev);
        Ok(())
    }

    /// Reverses the walking direction.
    pub fn reverse(&mut self) {
        self.nodes.make_contiguous().reverse();
        self.arcs.make_contiguous().reverse();
        std::mem::swap(&mut self.next_arc, &mut self.prev_arc);
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.arcs.clear();
        self.next_arc.clear();
        self.prev_arc.clear();
    }

    /// Sum of arc costs.
    pub fn cost<C: Numeric>(&self, cost: impl Fn(Arc) -> C) -> C {
        self.arcs().fold(C::zero(), |acc, a| acc.plus(cost(a)))
    }

    /// Largest arc cost, or zero for a path without arcs.
    pub fn max_cost<C: Numeric>(&self, cost: impl Fn(Arc) -> C) -> C {
        self.arcs().fold(C::zero(), |acc, a| acc.max_of(cost(a)))
    }

    fn extensible_end(&self, end: Option<Node>) -> Result<Node> {
        let end = end.ok_or_else(|| AlgoError::InvalidPath {
            reason: "cannot extend an empty path".to_string(),
        })?;
        if self.is_cycle() {
            return Err(AlgoError::InvalidPath {
                reason: "cannot extend a closed cycle".to_string(),
            });
        }
        Ok(end)
    }

    fn far_end<G: Graph>(graph: &G, arc: Arc, end: Node) -> Result<Node> {
        if graph.u(arc) != end && graph.v(arc) != end {
            return Err(AlgoError::InvalidPath {
                reason: format!("arc {} is not incident to {}", arc, end),
            });
        }
        Ok(graph.other(arc, end))
    }

    /// `node` may only already be on the path if it is the opposite end.
    fn check_new_node(&self, node: Node, opposite_end: Option<Node>) -> Result<()> {
        if self.contains_node(node) && Some(node) != opposite_end {
            return Err(AlgoError::InvalidPath {
                reason: format!("node {} is already on the path", node),
            });
        }
        Ok(())
    }
}
