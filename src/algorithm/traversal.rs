//! 广度优先遍历
//!
//! 单源最短路径（按边数）和连通分量分解

use crate::graph::{Edge, Graph, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet, VecDeque};

/// 路径结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResult {
    /// 路径上的顶点序列，未找到时为空
    pub vertices: Vec<VertexId>,
    /// 是否找到目标
    pub found: bool,
}

impl PathResult {
    fn not_found() -> Self {
        Self {
            vertices: Vec::new(),
            found: false,
        }
    }

    /// 路径长度（边数）
    pub fn length(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }
}

/// 路径查找器
pub struct PathFinder<'a> {
    graph: &'a Graph,
}

impl<'a> PathFinder<'a> {
    /// 创建路径查找器
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// BFS 最短路径查找
    ///
    /// 目标出队时停止。`src == dest` 时第一次出队即结束，返回单顶点路径。
    /// 哨兵不是合法顶点，作为起点时直接返回未找到。
    pub fn bfs(&self, src: VertexId, dest: VertexId) -> PathResult {
        if src.is_sentinel() {
            return PathResult::not_found();
        }

        let mut visited = HashSet::new();
        let mut parents: HashMap<VertexId, VertexId> = HashMap::new();
        let mut queue = VecDeque::new();

        queue.push_back(src);
        visited.insert(src);
        parents.insert(src, VertexId::SENTINEL);

        let mut found = false;
        while let Some(current) = queue.pop_front() {
            if current == dest {
                found = true;
                break;
            }

            let Some(neighbors) = self.graph.neighbor_set(current) else {
                continue;
            };
            for &w in neighbors {
                if visited.insert(w) {
                    parents.insert(w, current);
                    queue.push_back(w);
                }
            }
        }

        if !found {
            return PathResult::not_found();
        }

        PathResult {
            vertices: Self::reconstruct_path(dest, &parents),
            found,
        }
    }

    /// 沿父指针从终点回溯到哨兵，再反转
    fn reconstruct_path(dest: VertexId, parents: &HashMap<VertexId, VertexId>) -> Vec<VertexId> {
        let mut path = vec![dest];
        let mut current = dest;

        while let Some(&parent) = parents.get(&current) {
            if parent.is_sentinel() {
                break;
            }
            path.push(parent);
            current = parent;
        }

        path.reverse();
        path
    }

    /// 连通分量分解
    ///
    /// 按枚举顺序对每个未访问顶点启动一次 BFS，记录树边 (父, 子)。
    /// 孤立顶点不产生条目。
    pub fn bfs_all(&self) -> Vec<Vec<Edge>> {
        if self.graph.is_empty() {
            return Vec::new();
        }

        let mut visited = HashSet::new();
        let mut components = Vec::new();

        for v in self.graph.vertices() {
            if visited.contains(&v) {
                continue;
            }
            let tree_edges = self.bfs_tree(v, &mut visited);
            if !tree_edges.is_empty() {
                components.push(tree_edges);
            }
        }

        components
    }

    /// 从 src 出发的 BFS 树边
    fn bfs_tree(&self, src: VertexId, visited: &mut HashSet<VertexId>) -> Vec<Edge> {
        let mut tree_edges = Vec::new();
        let mut queue = VecDeque::new();

        queue.push_back(src);
        visited.insert(src);

        while let Some(current) = queue.pop_front() {
            let Some(neighbors) = self.graph.neighbor_set(current) else {
                continue;
            };
            for &w in neighbors {
                if visited.insert(w) {
                    tree_edges.push(Edge(current, w));
                    queue.push_back(w);
                }
            }
        }

        tree_edges
    }

    /// 判断两点是否连通
    pub fn is_reachable(&self, start: VertexId, end: VertexId) -> bool {
        self.bfs(start, end).found
    }

    /// 所有连通分量的顶点集合（包括孤立顶点），按枚举顺序
    pub fn connected_components(&self) -> Vec<Vec<VertexId>> {
        let mut visited = HashSet::new();
        let mut components = Vec::new();

        for v in self.graph.vertices() {
            if visited.contains(&v) {
                continue;
            }
            let mut members = vec![v];
            members.extend(self.bfs_tree(v, &mut visited).into_iter().map(|e| e.1));
            components.push(members);
        }

        components
    }

    /// 图是否连通（空图视为连通）
    pub fn is_connected(&self) -> bool {
        self.connected_components().len() <= 1
    }
}

impl Graph {
    /// 创建绑定到当前图的路径查找器
    pub fn path_finder(&self) -> PathFinder<'_> {
        PathFinder::new(self)
    }

    /// BFS 最短路径，见 [`PathFinder::bfs`]
    pub fn bfs(&self, src: VertexId, dest: VertexId) -> PathResult {
        self.path_finder().bfs(src, dest)
    }

    /// 连通分量树边，见 [`PathFinder::bfs_all`]
    pub fn bfs_all(&self) -> Vec<Vec<Edge>> {
        self.path_finder().bfs_all()
    }
}
