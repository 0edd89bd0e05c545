// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Bellman-Ford Algorithm.
//!
//! Computes shortest paths from a set of sources when arc costs may be
//! negative, and extracts a negative cycle when one is reachable.
//!
//! Relaxation is queue driven: a node's arcs are only re-examined after its
//! distance improved. Every improvement records the arc count of the path
//! that produced it; a count reaching `|V|` means some path repeats a node,
//! which can only happen through a negative cycle in the predecessor graph.

use crate::algo::algorithms::dijkstra::ArcWeight;
use crate::algo::path::Path;
use fxhash::{FxHashMap, FxHashSet};
use log::{debug, warn};
use netgraph_common::{AlgoError, Arc, ArcFilter, Graph, Node, Numeric, Result};
use std::collections::VecDeque;

pub struct BellmanFord<'g, G, C> {
    graph: &'g G,
    distance: FxHashMap<Node, C>,
    parent: FxHashMap<Node, Arc>,
    /// Reached nodes in first-reach order
    order: Vec<Node>,
}

impl<'g, G: Graph, C: Numeric> BellmanFord<'g, G, C> {
    /// Runs to completion from `sources` (each at distance zero).
    ///
    /// Relaxes forward arcs only, so undirected edges are walked both ways and
    /// a negative-cost edge is a negative cycle of two arcs.
    pub fn new<W>(graph: &'g G, weight: W, sources: impl IntoIterator<Item = Node>) -> Result<Self>
    where
        W: ArcWeight<Cost = C>,
    {
        let mut search = Self {
            graph,
            distance: FxHashMap::default(),
            parent: FxHashMap::default(),
            order: Vec::new(),
        };

        let node_count = graph.node_count();
        let mut arc_count: FxHashMap<Node, usize> = FxHashMap::default();
        let mut queue = VecDeque::new();
        let mut queued = FxHashSet::default();

        for source in sources {
            if !graph.has_node(source) {
                return Err(AlgoError::UnknownNode { node: source });
            }
            if search.distance.contains_key(&source) {
                continue;
            }
            search.distance.insert(source, C::zero());
            search.order.push(source);
            arc_count.insert(source, 0);
            queued.insert(source);
            queue.push_back(source);
        }

        let mut relaxations = 0usize;
        while let Some(node) = queue.pop_front() {
            queued.remove(&node);
            let Some(&dist) = search.distance.get(&node) else {
                continue;
            };
            let count = arc_count.get(&node).copied().unwrap_or(0);

            for arc in graph.node_arcs(node, ArcFilter::Forward) {
                let next = graph.other(arc, node);
                let candidate = dist.plus(weight.weight(arc, node, next));
                if candidate.is_infinite() {
                    continue;
                }
                let improves = search
                    .distance
                    .get(&next)
                    .is_none_or(|&current| candidate < current);
                if !improves {
                    continue;
                }

                relaxations += 1;
                if search.distance.insert(next, candidate).is_none() {
                    search.order.push(next);
                }
                search.parent.insert(next, arc);
                arc_count.insert(next, count + 1);

                if count + 1 >= node_count
                    && let Some(cycle) = search.find_cycle(next)
                {
                    warn!(
                        "Bellman-Ford: negative cycle of {} arcs after {} relaxations",
                        cycle.len(),
                        relaxations
                    );
                    return Err(AlgoError::NegativeCycle { arcs: cycle });
                }

                if queued.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        debug!(
            "Bellman-Ford: {} relaxations, {} nodes reached",
            relaxations,
            search.order.len()
        );
        Ok(search)
    }

    /// Looks for a cycle in the predecessor graph above `start`, returning
    /// its arcs in walking order.
    fn find_cycle(&self, start: Node) -> Option<Vec<Arc>> {
        let limit = self.graph.node_count();

        // Far enough up the parent chain to be on the cycle, if there is one.
        let mut node = start;
        for _ in 0..limit {
            let arc = self.parent_arc(node)?;
            node = self.graph.other(arc, node);
        }

        let anchor = node;
        let mut arcs = Vec::new();
        loop {
            let arc = self.parent_arc(node)?;
            arcs.push(arc);
            node = self.graph.other(arc, node);
            if node == anchor {
                break;
            }
            if arcs.len() > limit {
                return None;
            }
        }
        arcs.reverse();
        Some(arcs)
    }

    /// Shortest distance from the sources, infinity if unreached.
    pub fn get_distance(&self, node: Node) -> C {
        self.distance
            .get(&node)
            .copied()
            .unwrap_or_else(C::infinity)
    }

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

    pub fn reached(&self, node: Node) -> bool {
        self.distance.contains_key(&node)
    }

    pub fn parent_arc(&self, node: Node) -> Option<Arc> {
        self.parent.get(&node).copied()
    }

    pub fn reached_nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.order.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::test_utils::{build_graph, cost_fn};
    use netgraph_common::Directedness::{Directed, Undirected};

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_bellman_ford_negative_arc() {
        init();
        // 0 -> 1 (4), 0 -> 2 (5), 2 -> 1 (-3), 1 -> 3 (1)
        let (g, n, a) = build_graph(
            4,
            &[(0, 1, Directed), (0, 2, Directed), (2, 1, Directed), (1, 3, Directed)],
        );
        let bf = BellmanFord::new(&g, cost_fn(&[4i64, 5, -3, 1]), [n[0]]).unwrap();

        assert_eq!(bf.get_distance(n[0]), 0);
        assert_eq!(bf.get_distance(n[1]), 2);
        assert_eq!(bf.get_distance(n[3]), 3);
        assert_eq!(bf.parent_arc(n[1]), Some(a[2]));

        let path = bf.get_path(n[3]).unwrap();
        assert_eq!(path.arcs().collect::<Vec<_>>(), vec![a[1], a[2], a[3]]);
        assert_eq!(bf.reached_nodes().count(), 4);
    }

    #[test]
    fn test_bellman_ford_negative_cycle() {
        init();
        // 0 -> 1 (1), 1 -> 2 (-2), 2 -> 1 (1)
        let (g, n, a) = build_graph(3, &[(0, 1, Directed), (1, 2, Directed), (2, 1, Directed)]);
        let result = BellmanFord::new(&g, cost_fn(&[1i64, -2, 1]), [n[0]]);

        let Err(AlgoError::NegativeCycle { arcs }) = result else {
            panic!("expected a negative cycle");
        };
        let mut sorted = arcs.clone();
        sorted.sort();
        assert_eq!(sorted, vec![a[1], a[2]]);

        // The arcs chain head to tail
        let mut path = Path::single(g.u(arcs[0]));
        for &arc in &arcs {
            path.add_last(&g, arc).unwrap();
        }
        assert!(path.is_cycle());
    }

    #[test]
    fn test_bellman_ford_negative_edge_is_cycle() {
        init();
        let (g, n, a) = build_graph(3, &[(0, 1, Directed), (1, 2, Undirected)]);
        let result = BellmanFord::new(&g, cost_fn(&[1i64, -1]), [n[0]]);
        assert!(matches!(
            result,
            Err(AlgoError::NegativeCycle { ref arcs }) if arcs.iter().all(|&arc| arc == a[1])
        ));
    }

    #[test]
    fn test_bellman_ford_negative_loop() {
        let (g, n, a) = build_graph(2, &[(0, 1, Directed), (1, 1, Directed)]);
        let result = BellmanFord::new(&g, cost_fn(&[2.0f64, -0.5]), [n[0]]);
        assert_eq!(result.err(), Some(AlgoError::NegativeCycle { arcs: vec![a[1]] }));
    }

    #[test]
    fn test_bellman_ford_unreachable_cycle_is_ignored() {
        // Negative cycle 2 <-> 3 not reachable from 0
        let (g, n, _) = build_graph(4, &[(0, 1, Directed), (2, 3, Directed), (3, 2, Directed)]);
        let bf = BellmanFord::new(&g, cost_fn(&[1i64, -5, 1]), [n[0]]).unwrap();
        assert_eq!(bf.get_distance(n[1]), 1);
        assert!(!bf.reached(n[2]));
        assert!(bf.get_distance(n[2]).is_infinite());
        assert!(bf.get_path(n[3]).is_none());
    }

    #[test]
    fn test_bellman_ford_multiple_and_unknown_sources() {
        let (g, n, _) = build_graph(3, &[(0, 2, Directed), (1, 2, Directed)]);
        let bf = BellmanFord::new(&g, cost_fn(&[7i64, -2]), [n[0], n[1], n[0]]).unwrap();
        assert_eq!(bf.get_distance(n[2]), -2);
        assert_eq!(bf.get_path(n[2]).unwrap().first_node(), Some(n[1]));

        assert_eq!(
            BellmanFord::new(&g, cost_fn(&[7i64, -2]), [Node::new(10)]).err(),
            Some(AlgoError::UnknownNode { node: Node::new(10) })
        );
    }

    #[test]
    fn test_bellman_ford_no_sources() {
        let (g, n, _) = build_graph(2, &[(0, 1, Directed)]);
        let bf = BellmanFord::new(&g, cost_fn(&[1i64]), []).unwrap();
        assert!(!bf.reached(n[0]));
        assert_eq!(bf.reached_nodes().count(), 0);
    }
}
