// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use crate::core::id::{Arc, Node};
use thiserror::Error;

/// Errors reported by the algorithms.
///
/// Not-found results (an unreachable target, the path of an unsettled node)
/// are `Option::None`, not errors. Every variant leaves the reporting
/// instance in a consistent state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AlgoError {
    /// A node passed as source has already been fixed by this run.
    #[error("Node {node} is already fixed and cannot be added as a source")]
    SourceAlreadyFixed { node: Node },

    #[error("Node {node} does not belong to the graph")]
    UnknownNode { node: Node },

    /// A* returned a node on which the heuristic does not vanish.
    #[error("Heuristic is {value} on target {node}, expected zero")]
    HeuristicNotZero { node: Node, value: String },

    /// Bellman-Ford found a negative cycle reachable from the sources.
    #[error("Negative cycle of {} arcs reachable from the sources", arcs.len())]
    NegativeCycle { arcs: Vec<Arc> },

    #[error("Source and target are the same node {node}")]
    SourceIsTarget { node: Node },

    #[error("Arc {arc} has a negative capacity")]
    NegativeCapacity { arc: Arc },

    /// The target is reachable from the source through infinite capacities.
    #[error("Maximum flow is unbounded")]
    UnboundedFlow,

    /// The capacities add up past the largest finite value of their type, so
    /// flow and excess could not be tracked exactly.
    #[error("Total capacity overflows the capacity type")]
    CapacityOverflow,

    #[error("Invalid path operation: {reason}")]
    InvalidPath { reason: String },
}

pub type Result<T> = std::result::Result<T, AlgoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = AlgoError::SourceAlreadyFixed { node: Node::new(3) };
        assert_eq!(
            err.to_string(),
            "Node n3 is already fixed and cannot be added as a source"
        );

        let err = AlgoError::NegativeCycle {
            arcs: vec![Arc::new(0), Arc::new(1)],
        };
        assert_eq!(
            err.to_string(),
            "Negative cycle of 2 arcs reachable from the sources"
        );

        assert_eq!(
            AlgoError::CapacityOverflow.to_string(),
            "Total capacity overflows the capacity type"
        );
    }
}
