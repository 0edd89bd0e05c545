// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

pub mod algo;

pub use algo::algorithms::{
    AStar, ArcWeight, BellmanFord, Dijkstra, DijkstraMode, IntegerPreflow, Preflow, PreflowConfig,
};
pub use algo::{Bfs, Dfs, DfsOutcome, Direction, IdMap, Path, PriorityQueue};
