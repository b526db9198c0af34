//! 诊断输出
//!
//! 图在每次操作后向可注入的 [`DiagnosticSink`] 报告事件。
//! 诊断只是旁路通道，图的正确性不依赖于任何 sink 的行为。

use super::edge::Edge;
use super::vertex::VertexId;
use parking_lot::Mutex;
use serde::Serialize;

/// 图操作事件
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GraphEvent {
    VertexAdded(VertexId),
    VertexAddFailed(VertexId),
    VertexRemoved(VertexId),
    VertexRemoveFailed(VertexId),
    EdgeAdded(Edge),
    EdgeAddFailed(Edge),
    EdgeRemoved(Edge),
    EdgeRemoveFailed(Edge),
    /// 顶点查询
    VertexLookup { vertex: VertexId, found: bool },
    /// 边查询
    EdgeLookup { edge: Edge, found: bool },
    Cleared,
    /// 随机图生成完成
    Generated {
        vertices: usize,
        edges: usize,
        edge_probability: f64,
    },
}

/// 诊断事件接收方
pub trait DiagnosticSink: Send + Sync {
    fn record(&self, event: &GraphEvent);
}

/// 丢弃所有事件（默认）
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn record(&self, _event: &GraphEvent) {}
}

/// 通过 tracing 输出事件（verbose 模式）
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, event: &GraphEvent) {
        match event {
            GraphEvent::VertexAdded(v) => tracing::debug!(vertex = %v, "添加顶点"),
            GraphEvent::VertexAddFailed(v) => tracing::debug!(vertex = %v, "添加顶点失败"),
            GraphEvent::VertexRemoved(v) => tracing::debug!(vertex = %v, "删除顶点"),
            GraphEvent::VertexRemoveFailed(v) => tracing::debug!(vertex = %v, "删除顶点失败"),
            GraphEvent::EdgeAdded(e) => tracing::debug!(edge = %e, "添加边"),
            GraphEvent::EdgeAddFailed(e) => tracing::debug!(edge = %e, "添加边失败"),
            GraphEvent::EdgeRemoved(e) => tracing::debug!(edge = %e, "删除边"),
            GraphEvent::EdgeRemoveFailed(e) => tracing::debug!(edge = %e, "删除边失败"),
            GraphEvent::VertexLookup { vertex, found } => {
                tracing::trace!(vertex = %vertex, found, "查询顶点")
            }
            GraphEvent::EdgeLookup { edge, found } => {
                tracing::trace!(edge = %edge, found, "查询边")
            }
            GraphEvent::Cleared => tracing::debug!("清空图"),
            GraphEvent::Generated {
                vertices,
                edges,
                edge_probability,
            } => tracing::debug!(vertices, edges, edge_probability, "随机图生成完成"),
        }
    }
}

/// 记录所有事件，用于测试诊断输出
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<GraphEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// 获取已记录事件的副本
    pub fn events(&self) -> Vec<GraphEvent> {
        self.events.lock().clone()
    }

    /// 清除已记录事件
    pub fn reset(&self) {
        self.events.lock().clear();
    }
}

impl DiagnosticSink for RecordingSink {
    fn record(&self, event: &GraphEvent) {
        self.events.lock().push(event.clone());
    }
}
