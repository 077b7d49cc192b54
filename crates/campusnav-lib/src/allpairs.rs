use std::collections::HashMap;

use crate::campus::LocationId;
use crate::error::{Error, Result};
use crate::graph::Graph;

/// All-pairs shortest distances computed with Floyd-Warshall.
///
/// Holds a dense V×V distance matrix and a next-hop matrix for path
/// reconstruction. O(V³) to build, so intended for campus-scale graphs
/// only — do not use on large networks. Building twice over an unchanged
/// graph yields identical matrices.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    order: Vec<LocationId>,
    index: HashMap<LocationId, usize>,
    dist: Vec<f64>,
    next: Vec<Option<usize>>,
}

impl DistanceMatrix {
    /// Run the triple-nested relaxation over every node pair.
    pub fn build(graph: &Graph) -> Self {
        let order = graph.nodes();
        let n = order.len();
        let index: HashMap<LocationId, usize> =
            order.iter().enumerate().map(|(i, &id)| (id, i)).collect();

        let mut dist = vec![f64::INFINITY; n * n];
        let mut next: Vec<Option<usize>> = vec![None; n * n];

        for i in 0..n {
            dist[i * n + i] = 0.0;
            next[i * n + i] = Some(i);
        }
        for (i, &id) in order.iter().enumerate() {
            for edge in graph.neighbours(id) {
                let j = index[&edge.to];
                if i == j {
                    // A self-loop never improves on the zero diagonal.
                    continue;
                }
                dist[i * n + j] = edge.weight;
                next[i * n + j] = Some(j);
            }
        }

        for k in 0..n {
            for i in 0..n {
                let through_k = dist[i * n + k];
                if through_k.is_infinite() {
                    continue;
                }
                for j in 0..n {
                    let candidate = through_k + dist[k * n + j];
                    if candidate < dist[i * n + j] {
                        dist[i * n + j] = candidate;
                        next[i * n + j] = next[i * n + k];
                    }
                }
            }
        }

        Self {
            order,
            index,
            dist,
            next,
        }
    }

    /// Number of nodes covered by the matrix.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn position(&self, id: LocationId) -> Result<usize> {
        self.index
            .get(&id)
            .copied()
            .ok_or(Error::UnknownLocationId { id })
    }

    /// Shortest distance between two locations; [`f64::INFINITY`] when
    /// unreachable. Ids outside the matrix are precondition violations.
    pub fn distance(&self, from: LocationId, to: LocationId) -> Result<f64> {
        let i = self.position(from)?;
        let j = self.position(to)?;
        Ok(self.dist[i * self.order.len() + j])
    }

    /// Reconstruct the shortest path by chasing next-hop pointers.
    /// Unreachable pairs yield an empty path.
    pub fn path(&self, from: LocationId, to: LocationId) -> Result<Vec<LocationId>> {
        let start = self.position(from)?;
        let end = self.position(to)?;
        Ok(self.walk(start, end))
    }

    fn walk(&self, start: usize, end: usize) -> Vec<LocationId> {
        let n = self.order.len();
        if self.next[start * n + end].is_none() {
            return Vec::new();
        }
        let mut path = vec![self.order[start]];
        let mut current = start;
        while current != end {
            match self.next[current * n + end] {
                Some(hop) => {
                    current = hop;
                    path.push(self.order[current]);
                }
                None => return Vec::new(),
            }
        }
        path
    }

    /// Enumerate the shortest path for every ordered reachable pair
    /// (i, j), i ≠ j — the precomputed routing table.
    pub fn all_paths(&self) -> Vec<Vec<LocationId>> {
        let n = self.order.len();
        let mut paths = Vec::new();
        for i in 0..n {
            for j in 0..n {
                if i != j && self.dist[i * n + j].is_finite() {
                    paths.push(self.walk(i, j));
                }
            }
        }
        paths
    }
}
