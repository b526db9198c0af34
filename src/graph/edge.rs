//! 边定义
//!
//! 无向边是两个不同顶点之间的关系，不是独立存储的对象

use crate::graph::vertex::VertexId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 边 (a, b)，无序；在遍历结果中第一个端点是父节点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge(pub VertexId, pub VertexId);

impl Edge {
    /// 获取两个端点
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.0, self.1)
    }

    /// 是否为自环
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }
}

impl From<(u64, u64)> for Edge {
    fn from((a, b): (u64, u64)) -> Self {
        Self(VertexId(a), VertexId(b))
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_endpoints() {
        let e = Edge::from((5, 2));
        assert_eq!(e.endpoints(), (VertexId::new(5), VertexId::new(2)));
        assert!(!e.is_loop());
    }

    #[test]
    fn test_edge_display() {
        assert_eq!(Edge::from((1, 3)).to_string(), "[1,3]");
        assert!(Edge::from((4, 4)).is_loop());
    }
}
