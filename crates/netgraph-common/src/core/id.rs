// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Raw value reserved for the "no node" / "no arc" sentinels.
const INVALID_RAW: u64 = u64::MAX;

/// Opaque node handle issued by a [`Graph`](crate::graph::capability::Graph).
///
/// Handles are only meaningful for the graph that issued them. Algorithms
/// compare and hash them but never create new ones.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Node(u64);

impl Node {
    /// The "no node" sentinel.
    pub const INVALID: Node = Node(INVALID_RAW);

    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn is_valid(&self) -> bool {
        self.0 != INVALID_RAW
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for Node {
    fn from(val: u64) -> Self {
        Self(val)
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "Node({})", self.0)
        } else {
            write!(f, "Node(INVALID)")
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "n{}", self.0)
        } else {
            write!(f, "n-")
        }
    }
}

impl FromStr for Node {
    type Err = anyhow::Error;

    /// Parses a Node from `"n<id>"` or a bare `"<id>"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the id part is not a `u64` or equals the
    /// reserved sentinel value.
    fn from_str(s: &str) -> Result<Self> {
        parse_handle(s, 'n').map(Self)
    }
}

/// Opaque arc handle issued by a [`Graph`](crate::graph::capability::Graph).
///
/// An arc is either directed (from `U` to `V`) or an undirected edge; the
/// graph decides which.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Arc(u64);

impl Arc {
    /// The "no arc" sentinel.
    pub const INVALID: Arc = Arc(INVALID_RAW);

    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn is_valid(&self) -> bool {
        self.0 != INVALID_RAW
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for Arc {
    fn from(val: u64) -> Self {
        Self(val)
    }
}

impl fmt::Debug for Arc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "Arc({})", self.0)
        } else {
            write!(f, "Arc(INVALID)")
        }
    }
}

impl fmt::Display for Arc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "a{}", self.0)
        } else {
            write!(f, "a-")
        }
    }
}

impl FromStr for Arc {
    type Err = anyhow::Error;

    /// Parses an Arc from `"a<id>"` or a bare `"<id>"`.
    fn from_str(s: &str) -> Result<Self> {
        parse_handle(s, 'a').map(Self)
    }
}

fn parse_handle(s: &str, prefix: char) -> Result<u64> {
    let digits = s.strip_prefix(prefix).unwrap_or(s);
    let id: u64 = digits
        .parse()
        .map_err(|e| anyhow!("Invalid handle '{}': {}", s, e))?;
    if id == INVALID_RAW {
        return Err(anyhow!("Handle '{}' uses the reserved sentinel value", s));
    }
    Ok(id)
}
