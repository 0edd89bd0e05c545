// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! # netgraph - Graph Algorithms Engine
//!
//! Shortest paths (Dijkstra, A*, Bellman-Ford), traversal (BFS, DFS) and
//! maximum flow (highest-label push-relabel) over any type implementing
//! the read-only [`Graph`] capability. [`SimpleGraph`] is the bundled
//! mixed adjacency-list graph.

pub use netgraph_algo::{
    AStar, ArcWeight, BellmanFord, Bfs, Dfs, DfsOutcome, Dijkstra, DijkstraMode, Direction,
    IdMap, IntegerPreflow, Path, Preflow, PreflowConfig, PriorityQueue,
};
pub use netgraph_common::{
    AlgoError, Arc, ArcFilter, Directedness, Graph, Node, Numeric, Result, SimpleGraph,
};

// Re-export crates
pub use netgraph_algo as algo_crate;
pub use netgraph_common as common;
