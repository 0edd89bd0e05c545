// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Dijkstra's Shortest Path Algorithm.
//!
//! Label-setting search over forward arcs (directed arcs from U to V,
//! undirected edges both ways). The search is resumable: every `run_*` call
//! continues from the state the previous call left behind.

use crate::algo::path::Path;
use crate::algo::priority_queue::PriorityQueue;
use fxhash::FxHashMap;
use log::trace;
use netgraph_common::{AlgoError, Arc, ArcFilter, Graph, Node, Numeric, Result};
use num_traits::Zero;

/// Cost of traversing an arc in a given direction.
///
/// Any `Fn(Arc) -> C` closure is an arc weight that ignores the direction.
pub trait ArcWeight {
    type Cost: Numeric;

    /// Cost of walking `arc` from `from` to `to`.
    fn weight(&self, arc: Arc, from: Node, to: Node) -> Self::Cost;
}

impl<F, C> ArcWeight for F
where
    F: Fn(Arc) -> C,
    C: Numeric,
{
    type Cost = C;

    #[inline]
    fn weight(&self, arc: Arc, _from: Node, _to: Node) -> C {
        self(arc)
    }
}

/// How arc costs aggregate along a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DijkstraMode {
    /// Path cost is the sum of arc costs. Costs must be non-negative.
    #[default]
    Sum,
    /// Path cost is the largest arc cost. Any sign is allowed.
    Maximum,
}

pub struct Dijkstra<'g, G, W: ArcWeight> {
    graph: &'g G,
    weight: W,
    mode: DijkstraMode,
    /// Reached but not yet fixed nodes, keyed by tentative distance
    queue: PriorityQueue<Node, W::Cost>,
    /// Final distances of fixed nodes
    distance: FxHashMap<Node, W::Cost>,
    /// Arc through which each non-source node was last improved
    parent: FxHashMap<Node, Arc>,
    /// Fixed nodes in settlement order
    order: Vec<Node>,
}

impl<'g, G: Graph, W: ArcWeight> Dijkstra<'g, G, W> {
    /// Sum-mode search using `weight` for arc costs.
    pub fn new(graph: &'g G, weight: W) -> Self {
        Self::with_mode(graph, weight, DijkstraMode::Sum)
    }

    pub fn with_mode(graph: &'g G, weight: W, mode: DijkstraMode) -> Self {
        Self {
            graph,
            weight,
            mode,
            queue: PriorityQueue::new(),
            distance: FxHashMap::default(),
            parent: FxHashMap::default(),
            order: Vec::new(),
        }
    }

    pub fn mode(&self) -> DijkstraMode {
        self.mode
    }

    pub fn graph(&self) -> &'g G {
        self.graph
    }

    pub(crate) fn arc_weight(&self) -> &W {
        &self.weight
    }

    /// Adds a source at distance zero.
    pub fn add_source(&mut self, node: Node) -> Result<()> {
        self.add_source_with_distance(node, W::Cost::zero())
    }

    /// Adds a source with an initial distance.
    ///
    /// A node that is already reached keeps the smaller of its current and
    /// the given distance; lowering it makes the node a source again.
    pub fn add_source_with_distance(&mut self, node: Node, distance: W::Cost) -> Result<()> {
        if !self.graph.has_node(node) {
            return Err(AlgoError::UnknownNode { node });
        }
        if self.fixed(node) {
            return Err(AlgoError::SourceAlreadyFixed { node });
        }
        let improves = self
            .queue
            .priority(&node)
            .is_none_or(|current| distance < current);
        if improves {
            self.queue.set(node, distance);
            self.parent.remove(&node);
        }
        Ok(())
    }

    /// Fixes the closest reached node and relaxes its forward arcs.
    ///
    /// Returns the fixed node, or `None` if nothing is left to fix.
    pub fn step(&mut self) -> Option<Node> {
        let (node, dist) = self.queue.pop()?;
        self.distance.insert(node, dist);
        self.order.push(node);
        trace!("Dijkstra: fixed {} at {:?}", node, dist);

        for arc in self.graph.node_arcs(node, ArcFilter::Forward) {
            let next = self.graph.other(arc, node);
            if self.distance.contains_key(&next) {
                continue;
            }
            let cost = self.weight.weight(arc, node, next);
            let candidate = match self.mode {
                DijkstraMode::Sum => dist.plus(cost),
                DijkstraMode::Maximum => dist.max_of(cost),
            };
            if candidate.is_infinite() {
                continue;
            }
            let improves = self
                .queue
                .priority(&next)
                .is_none_or(|current| candidate < current);
            if improves {
                self.queue.set(next, candidate);
                self.parent.insert(next, arc);
            }
        }

        Some(node)
    }

    /// Runs until every reachable node is fixed.
    pub fn run(&mut self) {
        while self.step().is_some() {}
    }

    /// Runs until `target` is fixed; `None` if it is unreachable.
    pub fn run_until_fixed(&mut self, target: Node) -> Option<Node> {
        self.run_until_fixed_where(|node| node == target)
    }

    /// Runs until a node satisfying `is_target` is fixed and returns it.
    ///
    /// Nodes fixed by earlier calls are checked first, in settlement order.
    pub fn run_until_fixed_where(&mut self, mut is_target: impl FnMut(Node) -> bool) -> Option<Node> {
        if let Some(&found) = self.order.iter().find(|&&node| is_target(node)) {
            return Some(found);
        }
        loop {
            let node = self.step()?;
            if is_target(node) {
                return Some(node);
            }
        }
    }

    /// Whether the distance of `node` is final.
    pub fn fixed(&self, node: Node) -> bool {
        self.distance.contains_key(&node)
    }

    /// Whether `node` has a (tentative or final) distance.
    pub fn reached(&self, node: Node) -> bool {
        self.fixed(node) || self.queue.contains(&node)
    }

    /// Final distance of a fixed node, infinity otherwise.
    pub fn get_distance(&self, node: Node) -> W::Cost {
        self.distance
            .get(&node)
            .copied()
            .unwrap_or_else(W::Cost::infinity)
    }

    /// Shortest path from a source to a fixed `node`.
    pub fn get_path(&self, node: Node) -> Option<Path> {
        if !self.fixed(node) {
            return None;
        }
        let mut path = Path::single(node);
        let mut current = node;
        while let Some(arc) = self.parent_arc(current) {
            path.add_first(self.graph, arc).ok()?;
            current = self.graph.other(arc, current);
        }
        Some(path)
    }

    pub fn parent_arc(&self, node: Node) -> Option<Arc> {
        self.parent.get(&node).copied()
    }

    /// Fixed nodes in the order they were fixed.
    pub fn fixed_nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.order.iter().copied()
    }
}
