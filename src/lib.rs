//! ergraph - 有容量上限的简单无向图
//!
//! 支持：
//! - 顶点/边的动态增删，始终保持对称、无自环、无重边
//! - BFS 最短路径和连通分量分解
//! - Erdos-Renyi G(n, p) 随机图与完全图 K_n
//! - 度统计与批量随机图实验

pub mod algorithm;
pub mod cli;
pub mod config;
pub mod error;
pub mod experiment;
pub mod graph;
pub mod logging;

// 重导出常用类型
pub use algorithm::{DegreeStats, PathFinder, PathResult, Probability};
pub use config::{ExperimentConfig, Metric, ProbabilityConfig};
pub use error::{Error, Result};
pub use experiment::{Experiment, ExperimentPoint, ExperimentReport};
pub use graph::{DiagnosticSink, Edge, Graph, GraphEvent, VertexId, MAX_CAPACITY};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
