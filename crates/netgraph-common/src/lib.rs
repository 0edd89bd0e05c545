// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

pub mod api {
    pub mod error;
}

pub mod core {
    pub mod id;
    pub mod numeric;
}

pub mod graph {
    pub mod capability;
    pub mod simple_graph;
}

// Re-exports for convenience
pub use api::error::{AlgoError, Result};
pub use crate::core::id::{Arc, Node};
pub use crate::core::numeric::Numeric;
pub use graph::capability::{ArcFilter, Graph};
pub use graph::simple_graph::{Directedness, SimpleGraph};
