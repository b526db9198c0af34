//! 度统计

use crate::graph::{Graph, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 度统计快照
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegreeStats {
    pub vertices: usize,
    pub edges: usize,
    pub max_degree: usize,
    pub min_degree: usize,
    pub total_degree: usize,
    pub average_degree: f64,
}

impl Graph {
    /// 对每个顶点的度做折叠；空图直接返回 `base`
    pub fn degree_calc<F>(&self, combine: F, base: usize) -> usize
    where
        F: Fn(usize, usize) -> usize,
    {
        if self.is_empty() {
            return base;
        }
        self.adjacency()
            .fold(base, |acc, (_, neighbors)| combine(acc, neighbors.len()))
    }

    pub fn max_degree(&self) -> usize {
        self.degree_calc(usize::max, 0)
    }

    /// 最小度，空图为 0
    pub fn min_degree(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        self.degree_calc(usize::min, usize::MAX)
    }

    /// 度之和，简单无向图中总是偶数
    pub fn total_degree(&self) -> usize {
        self.degree_calc(|acc, d| acc + d, 0)
    }

    pub fn total_edges(&self) -> usize {
        self.total_degree() / 2
    }

    /// 平均度，空图为 0
    pub fn average_degree(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.total_degree() as f64 / self.size() as f64
    }

    /// 度恰好为 d 的顶点，按枚举顺序
    pub fn vertices_of_degree(&self, d: usize) -> Vec<VertexId> {
        self.adjacency()
            .filter(|(_, neighbors)| neighbors.len() == d)
            .map(|(v, _)| v)
            .collect()
    }

    /// 度分布：度 -> 顶点数
    pub fn degree_distribution(&self) -> BTreeMap<usize, usize> {
        let mut distribution = BTreeMap::new();
        for (_, neighbors) in self.adjacency() {
            *distribution.entry(neighbors.len()).or_insert(0) += 1;
        }
        distribution
    }

    pub fn degree_stats(&self) -> DegreeStats {
        DegreeStats {
            vertices: self.size(),
            edges: self.total_edges(),
            max_degree: self.max_degree(),
            min_degree: self.min_degree(),
            total_degree: self.total_degree(),
            average_degree: self.average_degree(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star(leaves: u64) -> Graph {
        let mut graph = Graph::new(100);
        for i in 1..=leaves {
            graph.add_edge(VertexId::new(0), VertexId::new(i));
        }
        graph
    }

    #[test]
    fn test_empty_graph_degrees() {
        let graph = Graph::default();
        assert_eq!(graph.average_degree(), 0.0);
        assert_eq!(graph.max_degree(), 0);
        assert_eq!(graph.min_degree(), 0);
        assert_eq!(graph.total_degree(), 0);
        assert_eq!(graph.degree_calc(|a, b| a + b, 17), 17);
    }

    #[test]
    fn test_star_degrees() {
        let graph = star(4);

        assert_eq!(graph.max_degree(), 4);
        assert_eq!(graph.min_degree(), 1);
        assert_eq!(graph.total_degree(), 8);
        assert_eq!(graph.total_edges(), 4);
        assert!((graph.average_degree() - 1.6).abs() < 1e-12);
    }

    #[test]
    fn test_vertices_of_degree() {
        let mut graph = star(3);
        graph.add_vertex(VertexId::new(9));

        assert_eq!(graph.vertices_of_degree(3), vec![VertexId::new(0)]);
        assert_eq!(graph.vertices_of_degree(1).len(), 3);
        assert_eq!(graph.vertices_of_degree(0), vec![VertexId::new(9)]);
        assert!(graph.vertices_of_degree(2).is_empty());
    }

    #[test]
    fn test_degree_distribution() {
        let graph = star(3);
        let distribution = graph.degree_distribution();

        assert_eq!(distribution.get(&1), Some(&3));
        assert_eq!(distribution.get(&3), Some(&1));
        assert_eq!(distribution.values().sum::<usize>(), graph.size());
    }

    #[test]
    fn test_degree_stats_snapshot() {
        let mut graph = Graph::default();
        graph.complete(4);
        let stats = graph.degree_stats();

        assert_eq!(stats.vertices, 4);
        assert_eq!(stats.edges, 6);
        assert_eq!(stats.max_degree, 3);
        assert_eq!(stats.min_degree, 3);
        assert_eq!(stats.total_degree % 2, 0);
        assert!((stats.average_degree - 3.0).abs() < 1e-12);
    }
}
