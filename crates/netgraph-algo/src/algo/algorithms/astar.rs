// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! A* Search Algorithm.
//!
//! A* is Dijkstra's algorithm in Sum mode over reduced arc costs
//! `cost(arc) - h(from) + h(to)`, where `h(n)` estimates the cost from `n` to
//! the nearest target. The heuristic must be consistent (every reduced cost
//! non-negative) and zero on targets.

use crate::algo::algorithms::dijkstra::{ArcWeight, Dijkstra};
use crate::algo::path::Path;
use netgraph_common::{AlgoError, Arc, Graph, Node, Numeric, Result};
use num_traits::Zero;

/// Arc weight shifted by the heuristic of both endpoints.
struct ReducedCost<W, H> {
    weight: W,
    heuristic: H,
}

impl<W, H> ArcWeight for ReducedCost<W, H>
where
    W: ArcWeight,
    H: Fn(Node) -> W::Cost,
{
    type Cost = W::Cost;

    #[inline]
    fn weight(&self, arc: Arc, from: Node, to: Node) -> W::Cost {
        self.weight
            .weight(arc, from, to)
            .plus((self.heuristic)(to))
            .minus((self.heuristic)(from))
    }
}

pub struct AStar<'g, G, W, H>
where
    W: ArcWeight,
    H: Fn(Node) -> W::Cost,
{
    search: Dijkstra<'g, G, ReducedCost<W, H>>,
}

impl<'g, G, W, H> AStar<'g, G, W, H>
where
    G: Graph,
    W: ArcWeight,
    H: Fn(Node) -> W::Cost,
{
    pub fn new(graph: &'g G, weight: W, heuristic: H) -> Self {
        Self {
            search: Dijkstra::new(graph, ReducedCost { weight, heuristic }),
        }
    }

    fn heuristic(&self, node: Node) -> W::Cost {
        (self.search.arc_weight().heuristic)(node)
    }

    /// Adds a source; its reduced distance starts at `h(node)`.
    pub fn add_source(&mut self, node: Node) -> Result<()> {
        let h = self.heuristic(node);
        self.search.add_source_with_distance(node, h)
    }

    /// Runs until `target` is fixed.
    pub fn run_until_reached(&mut self, target: Node) -> Result<Option<Node>> {
        self.run_until_reached_where(|node| node == target)
    }

    /// Runs until a node satisfying `is_target` is fixed.
    ///
    /// Fails with [`AlgoError::HeuristicNotZero`] if the heuristic of the
    /// returned node is nonzero, since its distance would then be unproven.
    pub fn run_until_reached_where(&mut self, is_target: impl FnMut(Node) -> bool) -> Result<Option<Node>> {
        let Some(node) = self.search.run_until_fixed_where(is_target) else {
            return Ok(None);
        };
        let h = self.heuristic(node);
        if !h.is_zero() {
            return Err(AlgoError::HeuristicNotZero {
                node,
                value: format!("{:?}", h),
            });
        }
        Ok(Some(node))
    }

    /// True distance of a fixed node, infinity otherwise.
    pub fn get_distance(&self, node: Node) -> W::Cost {
        if !self.search.fixed(node) {
            return W::Cost::infinity();
        }
        self.search.get_distance(node).minus(self.heuristic(node))
    }

    pub fn get_path(&self, node: Node) -> Option<Path> {
        self.search.get_path(node)
    }

    pub fn fixed(&self, node: Node) -> bool {
        self.search.fixed(node)
    }

    pub fn reached(&self, node: Node) -> bool {
        self.search.reached(node)
    }

    pub fn fixed_nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.search.fixed_nodes()
    }
}
