// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Push-Relabel Max Flow Algorithm.
//!
//! Highest-label preflow push with current-arc pointers, an optional gap
//! heuristic and an optional initial global relabel. Directed arcs carry
//! flow in `[0, cap]` from U to V. Undirected edges carry flow in
//! `[-cap, cap]`, where a negative value means V to U.

use crate::algo::id_map::IdMap;
use fxhash::FxHashMap;
use log::{debug, warn};
use netgraph_common::{AlgoError, Arc, ArcFilter, Graph, Node, Numeric, Result};
use num_traits::Signed;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreflowConfig {
    /// Lift nodes above an emptied height level straight out of the sink's
    /// reach.
    pub gap_heuristic: bool,
    /// Start from exact sink distances instead of all-zero heights.
    pub global_relabel: bool,
}

impl Default for PreflowConfig {
    fn default() -> Self {
        Self {
            gap_heuristic: true,
            global_relabel: true,
        }
    }
}

/// A non-loop arc with dense endpoints and its (possibly substituted)
/// capacity.
#[derive(Clone, Copy, Debug)]
struct ArcSlot<T> {
    arc: Arc,
    u: usize,
    v: usize,
    cap: T,
    edge: bool,
}

/// Maximum flow between two nodes, computed on construction.
///
/// Capacities must be a signed type since flow on an undirected edge is
/// negative when it runs from V to U. Unsigned capacities can be widened by
/// the capacity function, e.g. `|arc| caps[arc] as i64`.
pub struct Preflow<'g, G, T, F> {
    graph: &'g G,
    capacity: F,
    config: PreflowConfig,
    source: Node,
    target: Node,
    s: usize,
    t: usize,
    ids: IdMap,
    arcs: Vec<ArcSlot<T>>,
    arc_index: FxHashMap<Arc, usize>,
    /// Residual moves out of each node: (arc slot, along U to V)
    adj: Vec<Vec<(usize, bool)>>,
    flow: Vec<T>,
    excess: Vec<T>,
    height: Vec<usize>,
    current: Vec<usize>,
    /// Nodes per height, source excluded
    count: Vec<usize>,
    /// Active nodes per height; entries may be stale
    buckets: Vec<Vec<usize>>,
    highest: usize,
    source_side: Vec<bool>,
    pushes: usize,
    relabels: usize,
    gaps: usize,
}

/// Preflow over exact integer capacities.
pub type IntegerPreflow<'g, G, F> = Preflow<'g, G, i64, F>;

impl<'g, G, T, F> Preflow<'g, G, T, F>
where
    G: Graph,
    T: Numeric + Signed,
    F: Fn(Arc) -> T,
{
    pub fn new(graph: &'g G, capacity: F, source: Node, target: Node) -> Result<Self> {
        Self::with_config(graph, capacity, source, target, PreflowConfig::default())
    }

    /// Computes a maximum flow from `source` to `target`.
    ///
    /// Infinite capacities are accepted as long as no source to target path
    /// consists of infinite arcs only. Finite capacities whose sum does not
    /// fit in `T` are rejected with `CapacityOverflow`.
    pub fn with_config(
        graph: &'g G,
        capacity: F,
        source: Node,
        target: Node,
        config: PreflowConfig,
    ) -> Result<Self> {
        for node in [source, target] {
            if !graph.has_node(node) {
                return Err(AlgoError::UnknownNode { node });
            }
        }
        if source == target {
            return Err(AlgoError::SourceIsTarget { node: source });
        }

        let ids: IdMap = graph.nodes().collect();
        let s = ids
            .to_slot(source)
            .ok_or(AlgoError::UnknownNode { node: source })? as usize;
        let t = ids
            .to_slot(target)
            .ok_or(AlgoError::UnknownNode { node: target })? as usize;
        let n = ids.len();

        let mut arcs = Vec::new();
        let mut arc_index = FxHashMap::default();
        let mut adj = vec![Vec::new(); n];
        let mut finite_total = T::zero();
        for arc in graph.arcs(ArcFilter::All) {
            let cap = capacity(arc);
            if cap < T::zero() {
                return Err(AlgoError::NegativeCapacity { arc });
            }
            let (Some(u), Some(v)) = (ids.to_slot(graph.u(arc)), ids.to_slot(graph.v(arc))) else {
                continue;
            };
            if u == v {
                continue;
            }
            if !cap.is_infinite() {
                finite_total = finite_total.plus(cap);
            }
            let slot = arcs.len();
            arcs.push(ArcSlot {
                arc,
                u: u as usize,
                v: v as usize,
                cap,
                edge: graph.is_edge(arc),
            });
            arc_index.insert(arc, slot);
            adj[u as usize].push((slot, true));
            adj[v as usize].push((slot, false));
        }

        if infinite_path_exists(&arcs, &adj, s, t) {
            return Err(AlgoError::UnboundedFlow);
        }
        // Exceeds every cut made of finite arcs only
        let surrogate = finite_total.plus(T::one());
        let mut total = finite_total;
        for slot in arcs.iter_mut().filter(|slot| slot.cap.is_infinite()) {
            slot.cap = surrogate;
            total = total.plus(surrogate);
        }
        // Every flow value and excess is bounded by the total
        if total.is_infinite() {
            return Err(AlgoError::CapacityOverflow);
        }

        let slots = arcs.len();
        let mut preflow = Self {
            graph,
            capacity,
            config,
            source,
            target,
            s,
            t,
            ids,
            arcs,
            arc_index,
            adj,
            flow: vec![T::zero(); slots],
            excess: vec![T::zero(); n],
            height: vec![0; n],
            current: vec![0; n],
            count: vec![0; 2 * n + 2],
            buckets: vec![Vec::new(); 2 * n + 2],
            highest: 0,
            source_side: vec![false; n],
            pushes: 0,
            relabels: 0,
            gaps: 0,
        };
        preflow.run();
        preflow.mark_source_side();

        debug!(
            "Preflow: flow {:?} from {} to {} after {} pushes, {} relabels, {} gaps",
            preflow.flow_size(),
            source,
            target,
            preflow.pushes,
            preflow.relabels,
            preflow.gaps
        );
        Ok(preflow)
    }

    fn run(&mut self) {
        self.init_heights();

        let s = self.s;
        for i in 0..self.adj[s].len() {
            let (slot, forward) = self.adj[s][i];
            let residual = self.residual(slot, forward);
            if residual > T::zero() {
                self.push(s, slot, forward, residual, true);
            }
        }

        while let Some(node) = self.pop_active() {
            self.discharge(node);
        }
    }

    /// Exact sink distances in the empty residual graph when global relabel
    /// is on, all zero otherwise. The source sits at `n`.
    fn init_heights(&mut self) {
        let n = self.height.len();
        if self.config.global_relabel {
            self.height.fill(n);
            self.height[self.t] = 0;
            let mut queue = VecDeque::from([self.t]);
            while let Some(y) = queue.pop_front() {
                for i in 0..self.adj[y].len() {
                    let (slot, forward) = self.adj[y][i];
                    let x = self.head(slot, forward);
                    // The move x -> y runs the other way along the slot
                    if x != self.s
                        && self.height[x] == n
                        && x != self.t
                        && self.residual(slot, !forward) > T::zero()
                    {
                        self.height[x] = self.height[y] + 1;
                        queue.push_back(x);
                    }
                }
            }
        }
        self.height[self.s] = n;

        for x in (0..n).filter(|&x| x != self.s) {
            self.count[self.height[x]] += 1;
        }
    }

    fn discharge(&mut self, u: usize) {
        while self.excess[u] > T::zero() {
            if self.current[u] == self.adj[u].len() {
                if !self.relabel(u) {
                    warn!(
                        "Preflow: node {} keeps excess {:?} without residual arcs",
                        self.ids.to_node_unchecked(u as u32),
                        self.excess[u]
                    );
                    break;
                }
                continue;
            }

            let (slot, forward) = self.adj[u][self.current[u]];
            let w = self.head(slot, forward);
            let residual = self.residual(slot, forward);
            if residual > T::zero() && self.height[u] == self.height[w] + 1 {
                let excess = self.excess[u];
                if excess < residual {
                    self.push(u, slot, forward, excess, false);
                } else {
                    self.push(u, slot, forward, residual, true);
                }
            } else {
                self.current[u] += 1;
            }
        }
    }

    /// Moves `amount` from `from` along the slot. A saturating push sets the
    /// flow to the exact bound of that direction.
    fn push(&mut self, from: usize, slot: usize, forward: bool, amount: T, saturate: bool) {
        let to = self.head(slot, forward);
        let arc = self.arcs[slot];
        self.flow[slot] = match (saturate, forward) {
            (true, true) => arc.cap,
            (true, false) if arc.edge => -arc.cap,
            (true, false) => T::zero(),
            (false, true) => self.flow[slot].plus(amount),
            (false, false) => self.flow[slot].minus(amount),
        };

        let was_active = self.is_active(to);
        self.excess[from] = self.excess[from].minus(amount);
        self.excess[to] = self.excess[to].plus(amount);
        if !was_active && self.is_active(to) {
            self.activate(to);
        }
        self.pushes += 1;
    }

    /// Lifts `u` to one above its lowest residual neighbour. Returns false if
    /// `u` has no residual arc at all.
    fn relabel(&mut self, u: usize) -> bool {
        let lowest = (0..self.adj[u].len())
            .filter_map(|i| {
                let (slot, forward) = self.adj[u][i];
                (self.residual(slot, forward) > T::zero()).then(|| self.height[self.head(slot, forward)])
            })
            .min();
        let Some(lowest) = lowest else {
            return false;
        };

        let old = self.height[u];
        let new = lowest + 1;
        self.ensure_height(new);
        self.height[u] = new;
        self.current[u] = 0;
        self.count[old] -= 1;
        self.count[new] += 1;
        self.relabels += 1;

        let n = self.height.len();
        if self.config.gap_heuristic && old < n && self.count[old] == 0 {
            self.gap(old);
        }
        true
    }

    /// No node is left at `level`, so nodes strictly between `level` and `n`
    /// can no longer reach the sink.
    fn gap(&mut self, level: usize) {
        let n = self.height.len();
        self.ensure_height(n + 1);
        for x in 0..n {
            let h = self.height[x];
            if x == self.s || h <= level || h >= n {
                continue;
            }
            self.count[h] -= 1;
            self.count[n + 1] += 1;
            self.height[x] = n + 1;
            self.current[x] = 0;
            if self.is_active(x) {
                self.activate(x);
            }
        }
        self.gaps += 1;
    }

    fn activate(&mut self, x: usize) {
        let h = self.height[x];
        self.ensure_height(h);
        self.buckets[h].push(x);
        self.highest = self.highest.max(h);
    }

    fn pop_active(&mut self) -> Option<usize> {
        loop {
            match self.buckets[self.highest].pop() {
                Some(x) => {
                    if self.is_active(x) && self.height[x] == self.highest {
                        return Some(x);
                    }
                }
                None => {
                    if self.highest == 0 {
                        return None;
                    }
                    self.highest -= 1;
                }
            }
        }
    }

    fn ensure_height(&mut self, h: usize) {
        if h >= self.count.len() {
            self.count.resize(h + 1, 0);
            self.buckets.resize_with(h + 1, Vec::new);
        }
    }

    #[inline]
    fn is_active(&self, x: usize) -> bool {
        x != self.s && x != self.t && self.excess[x] > T::zero()
    }

    /// Endpoint reached by moving along the slot.
    #[inline]
    fn head(&self, slot: usize, forward: bool) -> usize {
        let arc = &self.arcs[slot];
        if forward { arc.v } else { arc.u }
    }

    #[inline]
    fn residual(&self, slot: usize, forward: bool) -> T {
        residual(&self.arcs[slot], self.flow[slot], forward)
    }

    fn mark_source_side(&mut self) {
        self.source_side.fill(false);
        self.source_side[self.s] = true;
        let mut queue = VecDeque::from([self.s]);
        while let Some(x) = queue.pop_front() {
            for i in 0..self.adj[x].len() {
                let (slot, forward) = self.adj[x][i];
                let y = self.head(slot, forward);
                if !self.source_side[y] && self.residual(slot, forward) > T::zero() {
                    self.source_side[y] = true;
                    queue.push_back(y);
                }
            }
        }
    }

    pub fn graph(&self) -> &'g G {
        self.graph
    }

    pub fn config(&self) -> PreflowConfig {
        self.config
    }

    /// Capacity of `arc` as given by the capacity function.
    pub fn capacity(&self, arc: Arc) -> T {
        (self.capacity)(arc)
    }

    pub fn source(&self) -> Node {
        self.source
    }

    pub fn target(&self) -> Node {
        self.target
    }

    /// Value of the maximum flow.
    pub fn flow_size(&self) -> T {
        self.excess[self.t]
    }

    /// Flow on `arc`; zero for loops and unknown arcs.
    pub fn flow(&self, arc: Arc) -> T {
        self.arc_index
            .get(&arc)
            .map_or_else(T::zero, |&slot| self.flow[slot])
    }

    /// Arcs carrying nonzero flow, in arc order.
    pub fn nonzero_arcs(&self) -> impl Iterator<Item = Arc> + '_ {
        self.arcs
            .iter()
            .zip(&self.flow)
            .filter(|(_, flow)| !flow.is_zero())
            .map(|(slot, _)| slot.arc)
    }

    /// Whether `node` is on the source side of the minimum cut.
    pub fn cut_side(&self, node: Node) -> bool {
        self.ids
            .to_slot(node)
            .is_some_and(|x| self.source_side[x as usize])
    }

    /// Nodes reachable from the source in the final residual graph.
    pub fn min_cut_nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.ids
            .iter()
            .filter(|&(x, _)| self.source_side[x as usize])
            .map(|(_, node)| node)
    }

    /// Arcs leaving the source side; their capacities add up to the flow.
    pub fn min_cut_arcs(&self) -> impl Iterator<Item = Arc> + '_ {
        self.arcs
            .iter()
            .filter(|slot| {
                let (u_in, v_in) = (self.source_side[slot.u], self.source_side[slot.v]);
                u_in != v_in && (u_in || slot.edge)
            })
            .map(|slot| slot.arc)
    }
}

#[inline]
fn residual<T: Numeric + Signed>(arc: &ArcSlot<T>, flow: T, forward: bool) -> T {
    if forward {
        arc.cap.minus(flow)
    } else if arc.edge {
        arc.cap.plus(flow)
    } else {
        flow
    }
}

/// Whether `t` is reachable from `s` through infinite capacities alone.
fn infinite_path_exists<T: Numeric + Signed>(
    arcs: &[ArcSlot<T>],
    adj: &[Vec<(usize, bool)>],
    s: usize,
    t: usize,
) -> bool {
    let mut seen = vec![false; adj.len()];
    seen[s] = true;
    let mut queue = VecDeque::from([s]);
    while let Some(x) = queue.pop_front() {
        for &(slot, forward) in &adj[x] {
            let arc = &arcs[slot];
            if !arc.cap.is_infinite() || (!forward && !arc.edge) {
                continue;
            }
            let y = if forward { arc.v } else { arc.u };
            if y == t {
                return true;
            }
            if !seen[y] {
                seen[y] = true;
                queue.push_back(y);
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::test_utils::{build_graph, cost_fn};
    use netgraph_common::Directedness::{Directed, Undirected};
    use netgraph_common::SimpleGraph;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    const ALL_CONFIGS: [PreflowConfig; 4] = [
        PreflowConfig { gap_heuristic: true, global_relabel: true },
        PreflowConfig { gap_heuristic: true, global_relabel: false },
        PreflowConfig { gap_heuristic: false, global_relabel: true },
        PreflowConfig { gap_heuristic: false, global_relabel: false },
    ];

    /// Six node network with maximum flow 23.
    fn textbook_network() -> (SimpleGraph, Vec<Node>, Vec<Arc>) {
        build_graph(
            6,
            &[
                (0, 1, Directed),
                (0, 2, Directed),
                (2, 1, Directed),
                (1, 3, Directed),
                (3, 2, Directed),
                (2, 4, Directed),
                (4, 3, Directed),
                (3, 5, Directed),
                (4, 5, Directed),
            ],
        )
    }

    const TEXTBOOK_CAPS: [i64; 9] = [16, 13, 4, 12, 9, 14, 7, 20, 4];

    fn assert_valid_flow<G: Graph, F: Fn(Arc) -> i64>(g: &G, flow: &Preflow<'_, G, i64, F>) {
        let mut balance: FxHashMap<Node, i64> = FxHashMap::default();
        for arc in g.arcs(ArcFilter::All) {
            let f = flow.flow(arc);
            let cap = flow.capacity(arc);
            if g.is_edge(arc) {
                assert!(f.abs() <= cap, "edge {} carries {} over {}", arc, f, cap);
            } else {
                assert!((0..=cap).contains(&f), "arc {} carries {} of {}", arc, f, cap);
            }
            *balance.entry(g.u(arc)).or_default() -= f;
            *balance.entry(g.v(arc)).or_default() += f;
        }
        for node in g.nodes() {
            let b = balance.get(&node).copied().unwrap_or(0);
            if node == flow.target() {
                assert_eq!(b, flow.flow_size());
            } else if node == flow.source() {
                assert_eq!(b, -flow.flow_size());
            } else {
                assert_eq!(b, 0, "node {} is unbalanced", node);
            }
        }
    }

    #[test]
    fn test_preflow_textbook_network() {
        init();
        let (g, n, a) = textbook_network();
        for config in ALL_CONFIGS {
            let flow = Preflow::with_config(&g, cost_fn(&TEXTBOOK_CAPS), n[0], n[5], config).unwrap();
            assert_eq!(flow.flow_size(), 23, "{:?}", config);
            assert_valid_flow(&g, &flow);

            let mut cut: Vec<_> = flow.min_cut_arcs().collect();
            cut.sort();
            assert_eq!(cut, vec![a[3], a[6], a[8]]);
            let cut_nodes: Vec<_> = flow.min_cut_nodes().collect();
            assert_eq!(cut_nodes, vec![n[0], n[1], n[2], n[4]]);
            assert!(flow.cut_side(n[0]));
            assert!(!flow.cut_side(n[5]));
        }
    }

    #[test]
    fn test_preflow_accessors() {
        let (g, n, a) = textbook_network();
        let flow = IntegerPreflow::new(&g, cost_fn(&TEXTBOOK_CAPS), n[0], n[5]).unwrap();
        assert_eq!(flow.source(), n[0]);
        assert_eq!(flow.target(), n[5]);
        assert_eq!(flow.capacity(a[0]), 16);
        assert_eq!(flow.config(), PreflowConfig::default());
        assert_eq!(flow.graph().node_count(), 6);
        assert!(flow.nonzero_arcs().all(|arc| flow.flow(arc) != 0));
        assert_eq!(flow.flow(Arc::new(99)), 0);
    }

    #[test]
    fn test_preflow_undirected_edges() {
        // s - a - t with a directed bypass s -> t; edges usable against storage order
        let (g, n, a) = build_graph(3, &[(1, 0, Undirected), (2, 1, Undirected), (0, 2, Directed)]);
        let flow = Preflow::new(&g, cost_fn(&[3i64, 2, 1]), n[0], n[2]).unwrap();
        assert_eq!(flow.flow_size(), 3);
        assert_eq!(flow.flow(a[0]), -2);
        assert_eq!(flow.flow(a[1]), -2);
        assert_valid_flow(&g, &flow);

        let mut cut: Vec<_> = flow.min_cut_arcs().collect();
        cut.sort();
        assert_eq!(cut, vec![a[1], a[2]]);
    }

    #[test]
    fn test_preflow_float_capacities() {
        let (g, n, a) = build_graph(4, &[(0, 1, Directed), (0, 2, Directed), (1, 3, Directed), (2, 3, Directed)]);
        let flow = Preflow::new(&g, cost_fn(&[0.1f64, 0.2, 0.3, 0.15]), n[0], n[3]).unwrap();
        assert!((flow.flow_size() - 0.25).abs() < 1e-12);
        // Saturated arcs hold their capacity exactly
        assert_eq!(flow.flow(a[0]), 0.1);
        assert_eq!(flow.flow(a[3]), 0.15);
        assert!(flow.flow(a[1]) <= 0.2);
    }

    #[test]
    fn test_preflow_disconnected_and_loops() {
        let (g, n, a) = build_graph(3, &[(0, 0, Directed), (0, 1, Directed), (2, 1, Directed)]);
        let flow = Preflow::new(&g, cost_fn(&[5i64, 5, 5]), n[0], n[2]).unwrap();
        assert_eq!(flow.flow_size(), 0);
        assert_eq!(flow.flow(a[0]), 0);
        assert_eq!(flow.nonzero_arcs().count(), 0);
        assert_eq!(flow.min_cut_arcs().count(), 0);
        assert!(flow.cut_side(n[1]));
    }

    #[test]
    fn test_preflow_infinite_capacity() {
        // s -> a infinite, a -> t (4), s -> t (1)
        let (g, n, a) = build_graph(3, &[(0, 1, Directed), (1, 2, Directed), (0, 2, Directed)]);
        let flow = Preflow::new(&g, cost_fn(&[f64::INFINITY, 4.0, 1.0]), n[0], n[2]).unwrap();
        assert_eq!(flow.flow_size(), 5.0);
        assert_eq!(flow.flow(a[0]), 4.0);
        assert!(flow.capacity(a[0]).is_infinite());

        let cut: Vec<_> = flow.min_cut_arcs().collect();
        assert_eq!(cut, vec![a[1], a[2]]);

        let ints = IntegerPreflow::new(&g, cost_fn(&[i64::MAX, 4, 1]), n[0], n[2]).unwrap();
        assert_eq!(ints.flow_size(), 5);
    }

    #[test]
    fn test_preflow_unbounded() {
        let (g, n, _) = build_graph(3, &[(0, 1, Undirected), (2, 1, Undirected)]);
        let result = Preflow::new(&g, cost_fn(&[f64::INFINITY, f64::INFINITY]), n[0], n[2]);
        assert_eq!(result.err(), Some(AlgoError::UnboundedFlow));

        // Pointing the wrong way is not a path
        let (g, n, _) = build_graph(2, &[(1, 0, Directed)]);
        let flow = Preflow::new(&g, cost_fn(&[i64::MAX]), n[0], n[1]).unwrap();
        assert_eq!(flow.flow_size(), 0);
    }

    #[test]
    fn test_preflow_errors() {
        let (g, n, a) = build_graph(2, &[(0, 1, Directed)]);
        assert_eq!(
            Preflow::new(&g, cost_fn(&[-1i64]), n[0], n[1]).err(),
            Some(AlgoError::NegativeCapacity { arc: a[0] })
        );
        assert_eq!(
            Preflow::new(&g, cost_fn(&[1i64]), n[0], n[0]).err(),
            Some(AlgoError::SourceIsTarget { node: n[0] })
        );
        assert_eq!(
            Preflow::new(&g, cost_fn(&[1i64]), n[0], Node::new(5)).err(),
            Some(AlgoError::UnknownNode { node: Node::new(5) })
        );
    }

    #[test]
    fn test_preflow_capacity_overflow() {
        // Two parallel s -> a arcs whose capacities sum past i64::MAX
        let (g, n, _) = build_graph(3, &[(0, 1, Directed), (0, 1, Directed), (1, 2, Directed)]);
        let half = i64::MAX / 2 + 1;
        assert_eq!(
            IntegerPreflow::new(&g, cost_fn(&[half, half, 1]), n[0], n[2]).err(),
            Some(AlgoError::CapacityOverflow)
        );

        // The infinite-capacity surrogate must fit as well
        let (g, n, _) = build_graph(3, &[(0, 1, Directed), (1, 2, Directed)]);
        assert_eq!(
            IntegerPreflow::new(&g, cost_fn(&[i64::MAX, i64::MAX - 1]), n[0], n[2]).err(),
            Some(AlgoError::CapacityOverflow)
        );
    }

    #[test]
    fn test_preflow_large_capacities_stay_exact() {
        let (g, n, _) = build_graph(3, &[(0, 1, Directed), (0, 1, Directed), (1, 2, Directed)]);
        let big = i64::MAX / 4;
        let costs = [big, big, 1];
        for config in ALL_CONFIGS {
            let flow = Preflow::with_config(&g, cost_fn(&costs), n[0], n[2], config).unwrap();
            assert_eq!(flow.flow_size(), 1);
            assert_valid_flow(&g, &flow);
        }
    }

    #[test]
    fn test_preflow_widened_unsigned_capacities() {
        let (g, n, _) = textbook_network();
        let caps: Vec<u32> = TEXTBOOK_CAPS.iter().map(|&c| c as u32).collect();
        let flow = IntegerPreflow::new(&g, |arc: Arc| i64::from(caps[arc.as_u64() as usize]), n[0], n[5]).unwrap();
        assert_eq!(flow.flow_size(), 23);
        assert_valid_flow(&g, &flow);
    }

    #[test]
    fn test_preflow_returns_excess_to_source() {
        // Source pushes 10 into a, but only 1 can continue to t
        let (g, n, _) = build_graph(3, &[(0, 1, Directed), (1, 2, Directed)]);
        for config in ALL_CONFIGS {
            let flow = Preflow::with_config(&g, cost_fn(&[10i64, 1]), n[0], n[2], config).unwrap();
            assert_eq!(flow.flow_size(), 1);
            assert_valid_flow(&g, &flow);
        }
    }
}
