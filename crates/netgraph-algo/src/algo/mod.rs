// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Graph Algorithm Engine
//!
//! Generic algorithms over any [`Graph`](netgraph_common::Graph): traversal,
//! single-source shortest paths and maximum flow. Searches are state
//! objects; resumable ones keep their queue between calls.
//!
//! # Example
//!
//! ```ignore
//! use netgraph_algo::Dijkstra;
//!
//! let mut dijkstra = Dijkstra::new(&graph, |arc| costs[&arc]);
//! dijkstra.add_source(start)?;
//! if let Some(goal) = dijkstra.run_until_fixed(goal) {
//!     let path = dijkstra.get_path(goal);
//! }
//! ```

mod id_map;
mod path;
mod priority_queue;
mod traversal;

pub mod algorithms;

pub use id_map::IdMap;
pub use path::Path;
pub use priority_queue::PriorityQueue;
pub use traversal::{Bfs, Dfs, DfsOutcome, Direction};

#[cfg(test)]
pub mod test_utils;
