// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Depth-first and breadth-first traversal over any [`Graph`].
//!
//! Both engines are iterative and never recurse, so traversal depth is not
//! bounded by the call stack.

use crate::algo::path::Path;
use fxhash::{FxHashMap, FxHashSet};
use netgraph_common::{AlgoError, Arc, ArcFilter, Graph, Node, Result};

/// Which arcs count as leading away from a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Direction {
    /// Every arc is traversable both ways.
    #[default]
    Undirected,
    /// Directed arcs are followed from U to V; edges both ways.
    Forward,
    /// Directed arcs are followed from V to U; edges both ways.
    Backward,
}

impl Direction {
    pub(crate) fn arc_filter(self) -> ArcFilter {
        match self {
            Direction::Undirected => ArcFilter::All,
            Direction::Forward => ArcFilter::Forward,
            Direction::Backward => ArcFilter::Backward,
        }
    }
}

/// How a depth-first run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DfsOutcome {
    /// Every node reachable from the roots was entered and exited.
    Completed,
    /// A hook returned `false`.
    Stopped,
}

/// Depth-first search driven by enter/exit hooks.
///
/// # Example
///
/// ```ignore
/// let mut order = Vec::new();
/// Dfs::new(&graph, Direction::Forward).run(
///     [root],
///     |node, _arc| { order.push(node); true },
///     |_node, _arc| true,
/// );
/// ```
pub struct Dfs<'g, G> {
    graph: &'g G,
    direction: Direction,
}

impl<'g, G: Graph> Dfs<'g, G> {
    pub fn new(graph: &'g G, direction: Direction) -> Self {
        Self { graph, direction }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Visits everything reachable from `roots`, in root order.
    ///
    /// `on_enter(node, arc)` fires when a node is first discovered, with the
    /// arc it was reached through (`None` for roots). `on_exit(node, arc)`
    /// fires once all of the node's descendants are done. Roots that are
    /// unknown to the graph or already visited are skipped. When either hook
    /// returns `false` the whole run stops at once.
    pub fn run<I, E, X>(&self, roots: I, mut on_enter: E, mut on_exit: X) -> DfsOutcome
    where
        I: IntoIterator<Item = Node>,
        E: FnMut(Node, Option<Arc>) -> bool,
        X: FnMut(Node, Option<Arc>) -> bool,
    {
        let filter = self.direction.arc_filter();
        let mut visited = FxHashSet::default();

        for root in roots {
            if !self.graph.has_node(root) || !visited.insert(root) {
                continue;
            }
            if !on_enter(root, None) {
                return DfsOutcome::Stopped;
            }

            let mut stack = vec![(root, None, self.graph.node_arcs(root, filter))];
            while let Some((node, _, arcs)) = stack.last_mut() {
                let node = *node;
                match arcs.next() {
                    Some(arc) => {
                        let next = self.graph.other(arc, node);
                        if visited.insert(next) {
                            if !on_enter(next, Some(arc)) {
                                return DfsOutcome::Stopped;
                            }
                            stack.push((next, Some(arc), self.graph.node_arcs(next, filter)));
                        }
                    }
                    None => {
                        if let Some((node, via, _)) = stack.pop()
                            && !on_exit(node, via)
                        {
                            return DfsOutcome::Stopped;
                        }
                    }
                }
            }
        }

        DfsOutcome::Completed
    }
}

/// Resumable breadth-first search.
///
/// Nodes are reached in non-decreasing hop distance from the source set.
/// The reach order doubles as the FIFO queue, so repeated `run_until_*`
/// calls continue exactly where the previous one stopped.
pub struct Bfs<'g, G> {
    graph: &'g G,
    direction: Direction,
    /// Hop distance of every reached node
    level: FxHashMap<Node, usize>,
    /// Arc through which each non-source node was reached
    parent: FxHashMap<Node, Arc>,
    /// Reached nodes in reach order
    order: Vec<Node>,
    /// Next entry of `order` to expand
    head: usize,
}

impl<'g, G: Graph> Bfs<'g, G> {
    pub fn new(graph: &'g G, direction: Direction) -> Self {
        Self {
            graph,
            direction,
            level: FxHashMap::default(),
            parent: FxHashMap::default(),
            order: Vec::new(),
            head: 0,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Adds a source at level 0. Already reached nodes are left untouched.
    pub fn add_source(&mut self, node: Node) -> Result<()> {
        if !self.graph.has_node(node) {
            return Err(AlgoError::UnknownNode { node });
        }
        if !self.level.contains_key(&node) {
            self.level.insert(node, 0);
            self.order.push(node);
        }
        Ok(())
    }

    /// Expands the next queued node and returns it with its level.
    pub fn step(&mut self) -> Option<(Node, usize)> {
        let node = *self.order.get(self.head)?;
        self.head += 1;
        let level = self.level.get(&node).copied().unwrap_or(0);

        for arc in self.graph.node_arcs(node, self.direction.arc_filter()) {
            let next = self.graph.other(arc, node);
            if !self.level.contains_key(&next) {
                self.level.insert(next, level + 1);
                self.parent.insert(next, arc);
                self.order.push(next);
            }
        }

        Some((node, level))
    }

    /// Runs until every reachable node has been expanded.
    pub fn run(&mut self) {
        while self.step().is_some() {}
    }

    /// Runs until `target` is reached; `None` if it is unreachable.
    pub fn run_until_reached(&mut self, target: Node) -> Option<Node> {
        self.run_until_reached_where(|node| node == target)
    }

    /// Runs until a node satisfying `is_target` is reached and returns the
    /// first such node in reach order, or `None` once the frontier is empty.
    pub fn run_until_reached_where(&mut self, mut is_target: impl FnMut(Node) -> bool) -> Option<Node> {
        if let Some(&found) = self.order.iter().find(|&&node| is_target(node)) {
            return Some(found);
        }
        while self.head < self.order.len() {
            let seen = self.order.len();
            self.step();
            if let Some(&found) = self.order[seen..].iter().find(|&&node| is_target(node)) {
                return Some(found);
            }
        }
        None
    }

    pub fn reached(&self, node: Node) -> bool {
        self.level.contains_key(&node)
    }

    /// Hop distance from the nearest source, if reached.
    pub fn level(&self, node: Node) -> Option<usize> {
        self.level.get(&node).copied()
    }

    /// Arc through which `node` was reached; `None` for sources and
    /// unreached nodes.
    pub fn parent_arc(&self, node: Node) -> Option<Arc> {
        self.parent.get(&node).copied()
    }

    /// Reached nodes in reach order.
    pub fn reached_nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.order.iter().copied()
    }

    /// Shortest (hop count) path from a source to `node`, if reached.
    pub fn get_path(&self, node: Node) -> Option<Path> {
        if !self.reached(node) {
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
}

impl<G: Graph> Iterator for Bfs<'_, G> {
    type Item = (Node, usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.step()
    }
}
