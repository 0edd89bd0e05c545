// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Identity mapping between opaque node handles and dense algorithm slots.
//!
//! Array-based algorithm state (heights, excesses, buckets) needs dense
//! indices 0..V. Graphs hand out opaque handles with no such guarantee; this
//! module maps between the two representations.

use fxhash::FxHashMap;
use netgraph_common::Node;

/// Bidirectional mapping between node handles and dense slots.
///
/// # Example
///
/// ```ignore
/// let mut id_map = IdMap::new();
/// id_map.insert(Node::new(100));  // slot 0
/// id_map.insert(Node::new(200));  // slot 1
///
/// assert_eq!(id_map.to_slot(Node::new(100)), Some(0));
/// assert_eq!(id_map.to_node(0), Some(Node::new(100)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct IdMap {
    /// Dense slot -> node
    slot_to_node: Vec<Node>,
    /// Node -> dense slot
    node_to_slot: FxHashMap<Node, u32>,
}

impl IdMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slot_to_node: Vec::with_capacity(capacity),
            node_to_slot: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Insert a node and return its slot.
    ///
    /// If the node already exists, returns the existing slot.
    pub fn insert(&mut self, node: Node) -> u32 {
        if let Some(&slot) = self.node_to_slot.get(&node) {
            return slot;
        }

        let slot = self.slot_to_node.len() as u32;
        self.slot_to_node.push(node);
        self.node_to_slot.insert(node, slot);
        slot
    }

    #[inline]
    pub fn to_slot(&self, node: Node) -> Option<u32> {
        self.node_to_slot.get(&node).copied()
    }

    #[inline]
    pub fn to_node(&self, slot: u32) -> Option<Node> {
        self.slot_to_node.get(slot as usize).copied()
    }

    /// Get the node for a slot (panics if out of bounds).
    #[inline]
    pub fn to_node_unchecked(&self, slot: u32) -> Node {
        self.slot_to_node[slot as usize]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slot_to_node.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slot_to_node.is_empty()
    }

    #[inline]
    pub fn contains(&self, node: Node) -> bool {
        self.node_to_slot.contains_key(&node)
    }

    /// Iterate over all (slot, node) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (u32, Node)> + '_ {
        self.slot_to_node
            .iter()
            .enumerate()
            .map(|(slot, &node)| (slot as u32, node))
    }
}

impl FromIterator<Node> for IdMap {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, upper) = iter.size_hint();
        let mut map = Self::with_capacity(upper.unwrap_or(lower));

        for node in iter {
            map.insert(node);
        }

        map
    }
}
