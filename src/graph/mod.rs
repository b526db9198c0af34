//! 图核心模块
//!
//! 定义顶点、边、诊断输出和图的核心数据结构

mod diagnostics;
mod edge;
mod graph;
mod vertex;

pub use diagnostics::{DiagnosticSink, GraphEvent, NoopSink, RecordingSink, TracingSink};
pub use edge::Edge;
pub use graph::{Graph, NeighborSet, DEFAULT_CAPACITY, MAX_CAPACITY};
pub use vertex::VertexId;
