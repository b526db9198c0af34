//! 错误类型定义

use crate::graph::{Edge, VertexId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("图容量已满: 最多 {capacity} 个顶点")]
    CapacityExceeded { capacity: usize },

    #[error("顶点已存在: {0}")]
    VertexAlreadyExists(VertexId),

    #[error("顶点不存在: {0}")]
    VertexNotFound(VertexId),

    #[error("边不存在: {0}")]
    EdgeNotFound(Edge),

    #[error("不允许自环: {0}")]
    SelfLoop(VertexId),

    #[error("哨兵值不能作为顶点")]
    SentinelVertex,

    #[error("配置无效: {0}")]
    InvalidConfig(String),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    Serialization(String),

    #[error("CSV 导出错误: {0}")]
    Csv(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        Error::Csv(e.to_string())
    }
}
