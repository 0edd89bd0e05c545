// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Shortest path and maximum flow algorithms.

mod dijkstra;
pub use dijkstra::{ArcWeight, Dijkstra, DijkstraMode};

mod astar;
pub use astar::AStar;

mod bellman_ford;
pub use bellman_ford::BellmanFord;

mod preflow;
pub use preflow::{IntegerPreflow, Preflow, PreflowConfig};
