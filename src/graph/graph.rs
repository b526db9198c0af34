//! 图数据结构
//!
//! 简单无向图：无自环、无重边，顶点数受容量上限约束。
//! 邻接表使用保序的 `IndexMap`/`IndexSet`，枚举顺序即插入顺序。

use super::diagnostics::{DiagnosticSink, GraphEvent, NoopSink, TracingSink};
use super::edge::Edge;
use super::vertex::VertexId;
use crate::error::{Error, Result};
use indexmap::{IndexMap, IndexSet};
use once_cell::sync::Lazy;
use std::fmt;
use std::sync::Arc;

/// 容量硬上限，限制内存占用
pub const MAX_CAPACITY: usize = 20_000;

/// 默认容量
pub const DEFAULT_CAPACITY: usize = 20;

/// 邻居集合
pub type NeighborSet = IndexSet<VertexId>;

static NO_NEIGHBORS: Lazy<NeighborSet> = Lazy::new(NeighborSet::new);

/// 无向图
#[derive(Clone)]
pub struct Graph {
    /// 邻接表
    adjacency: IndexMap<VertexId, NeighborSet>,
    /// 最大顶点数
    max_size: usize,
    /// 诊断输出
    sink: Arc<dyn DiagnosticSink>,
}

impl Graph {
    /// 创建空图，容量超过 [`MAX_CAPACITY`] 时截断
    pub fn new(max_size: usize) -> Self {
        Self::with_sink(max_size, Arc::new(NoopSink))
    }

    /// 创建空图，`verbose` 为真时通过 tracing 输出每次操作的结果
    pub fn with_verbose(max_size: usize, verbose: bool) -> Self {
        if verbose {
            Self::with_sink(max_size, Arc::new(TracingSink))
        } else {
            Self::new(max_size)
        }
    }

    /// 使用自定义诊断输出创建空图
    pub fn with_sink(max_size: usize, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            adjacency: IndexMap::new(),
            max_size: max_size.min(MAX_CAPACITY),
            sink,
        }
    }

    pub(crate) fn record(&self, event: GraphEvent) {
        self.sink.record(&event);
    }

    // ==================== 容量 ====================

    /// 获取容量
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// 设置容量（截断到 [`MAX_CAPACITY`]）。
    /// 已有顶点不会被删除，容量只约束后续插入。
    pub fn set_max_size(&mut self, n: usize) {
        self.max_size = n.min(MAX_CAPACITY);
    }

    // ==================== 查询 ====================

    /// 顶点数量
    pub fn size(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// 顶点是否存在
    pub fn exists(&self, v: VertexId) -> bool {
        let found = self.adjacency.contains_key(&v);
        self.record(GraphEvent::VertexLookup { vertex: v, found });
        found
    }

    /// 边是否存在（两个方向都成立）
    pub fn exists_edge(&self, a: VertexId, b: VertexId) -> bool {
        let found = self.has_edge(a, b);
        self.record(GraphEvent::EdgeLookup {
            edge: Edge(a, b),
            found,
        });
        found
    }

    fn has_edge(&self, a: VertexId, b: VertexId) -> bool {
        let forward = self.adjacency.get(&a).is_some_and(|n| n.contains(&b));
        let backward = self.adjacency.get(&b).is_some_and(|n| n.contains(&a));
        forward && backward
    }

    /// 获取邻居；顶点不存在时返回空集合
    pub fn neighbors(&self, v: VertexId) -> &NeighborSet {
        self.adjacency.get(&v).unwrap_or(&NO_NEIGHBORS)
    }

    /// 邻居集合的只读引用
    pub fn neighbor_set(&self, v: VertexId) -> Option<&NeighborSet> {
        self.adjacency.get(&v)
    }

    /// 顶点的度；顶点不存在时为 0
    pub fn degree(&self, v: VertexId) -> usize {
        self.adjacency.get(&v).map(|n| n.len()).unwrap_or(0)
    }

    /// 按枚举顺序遍历所有顶点
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency.keys().copied()
    }

    /// 遍历所有边，每条无向边只出现一次（较小 ID 在前）
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency.iter().flat_map(|(&v, neighbors)| {
            neighbors
                .iter()
                .filter(move |&&w| v < w)
                .map(move |&w| Edge(v, w))
        })
    }

    /// 按枚举顺序遍历 (顶点, 邻居集合)
    pub fn adjacency(&self) -> impl Iterator<Item = (VertexId, &NeighborSet)> + '_ {
        self.adjacency.iter().map(|(&v, n)| (v, n))
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点，失败时图保持不变
    pub fn add_vertex(&mut self, v: VertexId) -> bool {
        self.try_add_vertex(v).is_ok()
    }

    /// 添加顶点，返回失败原因
    pub fn try_add_vertex(&mut self, v: VertexId) -> Result<()> {
        let result = self.insert_vertex(v);
        match result {
            Ok(()) => self.record(GraphEvent::VertexAdded(v)),
            Err(_) => self.record(GraphEvent::VertexAddFailed(v)),
        }
        result
    }

    fn insert_vertex(&mut self, v: VertexId) -> Result<()> {
        if self.adjacency.len() >= self.max_size {
            return Err(Error::CapacityExceeded {
                capacity: self.max_size,
            });
        }
        if self.adjacency.contains_key(&v) {
            return Err(Error::VertexAlreadyExists(v));
        }
        if v.is_sentinel() {
            return Err(Error::SentinelVertex);
        }
        self.adjacency.insert(v, NeighborSet::new());
        Ok(())
    }

    /// 删除顶点及其所有关联边
    pub fn remove_vertex(&mut self, v: VertexId) -> bool {
        self.try_remove_vertex(v).is_ok()
    }

    /// 删除顶点，返回失败原因
    pub fn try_remove_vertex(&mut self, v: VertexId) -> Result<()> {
        let Some(neighbors) = self.adjacency.get(&v).cloned() else {
            self.record(GraphEvent::VertexRemoveFailed(v));
            return Err(Error::VertexNotFound(v));
        };

        // 对称性保证只有 v 的邻居会引用 v
        for w in neighbors {
            if let Some(set) = self.adjacency.get_mut(&w) {
                set.shift_remove(&v);
            }
        }
        self.adjacency.shift_remove(&v);

        self.record(GraphEvent::VertexRemoved(v));
        Ok(())
    }

    // ==================== 边操作 ====================

    /// 添加边，缺失的端点会先被插入。
    /// 插入端点会超出容量时整个操作失败，图保持不变。
    pub fn add_edge(&mut self, a: VertexId, b: VertexId) -> bool {
        self.try_add_edge(a, b).is_ok()
    }

    /// 添加边，返回失败原因
    pub fn try_add_edge(&mut self, a: VertexId, b: VertexId) -> Result<()> {
        let result = self.insert_edge(a, b);
        match result {
            Ok(()) => self.record(GraphEvent::EdgeAdded(Edge(a, b))),
            Err(_) => self.record(GraphEvent::EdgeAddFailed(Edge(a, b))),
        }
        result
    }

    fn insert_edge(&mut self, a: VertexId, b: VertexId) -> Result<()> {
        if Edge(a, b).is_loop() {
            return Err(Error::SelfLoop(a));
        }
        if a.is_sentinel() || b.is_sentinel() {
            return Err(Error::SentinelVertex);
        }

        let missing: Vec<VertexId> = [a, b]
            .into_iter()
            .filter(|v| !self.adjacency.contains_key(v))
            .collect();

        if !missing.is_empty() {
            if self.adjacency.len() + missing.len() > self.max_size {
                return Err(Error::CapacityExceeded {
                    capacity: self.max_size,
                });
            }
            for v in missing {
                self.adjacency.insert(v, NeighborSet::new());
                self.record(GraphEvent::VertexAdded(v));
            }
        }

        if let Some(set) = self.adjacency.get_mut(&a) {
            set.insert(b);
        }
        if let Some(set) = self.adjacency.get_mut(&b) {
            set.insert(a);
        }
        Ok(())
    }

    /// 删除边（两个方向同时删除）
    pub fn remove_edge(&mut self, a: VertexId, b: VertexId) -> bool {
        self.try_remove_edge(a, b).is_ok()
    }

    /// 删除边，返回失败原因
    pub fn try_remove_edge(&mut self, a: VertexId, b: VertexId) -> Result<()> {
        let edge = Edge(a, b);
        if !self.has_edge(a, b) {
            self.record(GraphEvent::EdgeRemoveFailed(edge));
            return Err(Error::EdgeNotFound(edge));
        }

        if let Some(set) = self.adjacency.get_mut(&a) {
            set.shift_remove(&b);
        }
        if let Some(set) = self.adjacency.get_mut(&b) {
            set.shift_remove(&a);
        }

        self.record(GraphEvent::EdgeRemoved(edge));
        Ok(())
    }

    /// 清空图，容量不变
    pub fn clear(&mut self) {
        self.adjacency.clear();
        self.record(GraphEvent::Cleared);
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("max_size", &self.max_size)
            .field("adjacency", &self.adjacency)
            .finish()
    }
}
