//! 图算法模块
//!
//! 包含广度优先遍历、随机图生成和度统计

mod degree;
mod generator;
mod traversal;

pub use degree::DegreeStats;
pub use generator::{Probability, ThresholdFn};
pub use traversal::{PathFinder, PathResult};
