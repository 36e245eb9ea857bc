//! Seeded random weighted digraphs as a [`StateSpace`], with a
//! Bellman-Ford reference oracle for path costs.

use std::ops::RangeInclusive;

use rand::Rng;
use wayfind_search::contract::{ActionStatePair, Cost, StateSpace, INFINITE_HEURISTIC};

/// A directed edge. `id` keeps parallel edges distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub id: usize,
    pub from: usize,
    pub to: usize,
    pub cost: Cost,
}

/// Nodes `0..n`, start node 0, an arbitrary goal set.
#[derive(Debug, Clone)]
pub struct RandomGraph {
    n: usize,
    edges: Vec<Edge>,
    /// Outgoing edge ids per node, in insertion order.
    out: Vec<Vec<usize>>,
    goals: Vec<bool>,
    heuristic: Option<Vec<Cost>>,
}

impl RandomGraph {
    /// `n` nodes (at least one), each ordered pair connected with
    /// probability `density`, costs uniform in `costs`, each non-start node
    /// a goal with probability `goal_density`.
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        n: usize,
        density: f64,
        costs: RangeInclusive<Cost>,
        goal_density: f64,
    ) -> Self {
        let n = n.max(1);
        let mut graph = Self {
            n,
            edges: Vec::new(),
            out: vec![Vec::new(); n],
            goals: vec![false; n],
            heuristic: None,
        };
        for from in 0..n {
            for to in 0..n {
                if from != to && rng.random_bool(density) {
                    let cost = rng.random_range(costs.clone());
                    graph.add_edge(from, to, cost);
                }
            }
        }
        for goal in graph.goals.iter_mut().skip(1) {
            *goal = rng.random_bool(goal_density);
        }
        graph
    }

    fn add_edge(&mut self, from: usize, to: usize, cost: Cost) {
        let id = self.edges.len();
        self.edges.push(Edge { id, from, to, cost });
        self.out[from].push(id);
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.n
    }

    /// Use the exact goal distance of every node as heuristic (infinite
    /// where no goal is reachable).
    #[must_use]
    pub fn with_exact_heuristic(mut self) -> Self {
        let h = self
            .distances_to_goal()
            .into_iter()
            .map(|d| d.unwrap_or(INFINITE_HEURISTIC))
            .collect();
        self.heuristic = Some(h);
        self
    }

    /// Shortest distance from the start node to every node.
    #[must_use]
    pub fn distances_from_start(&self) -> Vec<Option<Cost>> {
        let mut sources = vec![None; self.n];
        sources[0] = Some(0);
        self.bellman_ford(sources, |e| (e.from, e.to))
    }

    /// Shortest distance from every node to the nearest goal.
    #[must_use]
    pub fn distances_to_goal(&self) -> Vec<Option<Cost>> {
        let sources = self.goals.iter().map(|&g| g.then_some(0)).collect();
        self.bellman_ford(sources, |e| (e.to, e.from))
    }

    /// Cheapest start-to-goal path cost, `None` if no goal is reachable.
    #[must_use]
    pub fn optimal_cost(&self) -> Option<Cost> {
        self.distances_from_start()
            .into_iter()
            .zip(&self.goals)
            .filter(|&(_, &goal)| goal)
            .filter_map(|(d, _)| d)
            .min()
    }

    /// Number of nodes reachable from the start node (start included).
    #[must_use]
    pub fn reachable_count(&self) -> usize {
        self.distances_from_start().iter().flatten().count()
    }

    fn bellman_ford(
        &self,
        mut dist: Vec<Option<Cost>>,
        direction: impl Fn(&Edge) -> (usize, usize),
    ) -> Vec<Option<Cost>> {
        for _ in 0..self.n {
            let mut changed = false;
            for edge in &self.edges {
                let (u, v) = direction(edge);
                if let Some(du) = dist[u] {
                    let candidate = du + edge.cost;
                    if !matches!(dist[v], Some(dv) if dv <= candidate) {
                        dist[v] = Some(candidate);
                        changed = true;
                    }
                }
            }
            if !changed {
                break;
            }
        }
        dist
    }
}

impl StateSpace for RandomGraph {
    type State = usize;
    type Action = Edge;

    fn init(&self) -> usize {
        0
    }

    fn is_goal(&self, state: &usize) -> bool {
        self.goals[*state]
    }

    fn succ(&self, state: &usize) -> Vec<ActionStatePair<Edge, usize>> {
        self.out[*state]
            .iter()
            .map(|&id| ActionStatePair::new(self.edges[id], self.edges[id].to))
            .collect()
    }

    fn cost(&self, action: &Edge) -> Cost {
        action.cost
    }

    fn h(&self, state: &usize) -> Cost {
        self.heuristic.as_ref().map_or(0, |h| h[*state])
    }
}
