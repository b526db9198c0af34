//! 顶点定义
//!
//! 顶点只是一个非负整数标识，保留一个哨兵值表示“无顶点”

use serde::{Deserialize, Serialize};
use std::fmt;

/// 顶点 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(pub u64);

impl VertexId {
    /// 哨兵值，遍历中作为“无父节点”标记，永远不能插入图中
    pub const SENTINEL: VertexId = VertexId(u64::MAX);

    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// 是否为哨兵值
    pub fn is_sentinel(&self) -> bool {
        *self == Self::SENTINEL
    }
}

impl From<u64> for VertexId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<usize> for VertexId {
    fn from(id: usize) -> Self {
        Self(id as u64)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_sentinel() {
            write!(f, "<none>")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel() {
        assert!(VertexId::SENTINEL.is_sentinel());
        assert!(!VertexId::new(0).is_sentinel());
        assert_eq!(VertexId::SENTINEL.to_string(), "<none>");
    }

    #[test]
    fn test_conversions() {
        assert_eq!(VertexId::from(7u64), VertexId::new(7));
        assert_eq!(VertexId::from(7usize).as_u64(), 7);
        assert_eq!(VertexId::new(42).to_string(), "42");
    }
}
