//! 随机图生成
//!
//! Erdos-Renyi 模型 G(n, p)：每个候选顶点、每对顶点各做一次独立伯努利试验

use crate::graph::{Graph, GraphEvent, VertexId};
use rand::Rng;
use std::fmt;
use std::sync::Arc;

/// 阈值函数：顶点数 n -> 边概率
pub type ThresholdFn = Arc<dyn Fn(usize) -> f64 + Send + Sync>;

/// 边概率：固定值，或顶点数的函数。生成开始时解析一次。
#[derive(Clone)]
pub enum Probability {
    Constant(f64),
    Threshold(ThresholdFn),
}

impl Probability {
    pub fn constant(p: f64) -> Self {
        Probability::Constant(p)
    }

    pub fn threshold<F>(f: F) -> Self
    where
        F: Fn(usize) -> f64 + Send + Sync + 'static,
    {
        Probability::Threshold(Arc::new(f))
    }

    /// min(1, c/n)
    pub fn inverse(c: f64) -> Self {
        Self::threshold(move |n| (c / n as f64).min(1.0))
    }

    /// c·ln(n)/n，连通性阈值
    pub fn log_over_n(c: f64) -> Self {
        Self::threshold(move |n| {
            let n = n as f64;
            c * n.ln() / n
        })
    }

    /// c·ln(ln(n))/n
    pub fn log_log_over_n(c: f64) -> Self {
        Self::threshold(move |n| {
            let n = n as f64;
            c * n.ln().ln() / n
        })
    }

    /// 在 n 处求值得到标量概率
    pub fn resolve(&self, n: usize) -> f64 {
        match self {
            Probability::Constant(p) => *p,
            Probability::Threshold(f) => f(n),
        }
    }
}

impl From<f64> for Probability {
    fn from(p: f64) -> Self {
        Probability::Constant(p)
    }
}

impl fmt::Debug for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Probability::Constant(p) => f.debug_tuple("Constant").field(p).finish(),
            Probability::Threshold(_) => f.write_str("Threshold(<fn>)"),
        }
    }
}

/// 抽取 [0,1) 上的均匀随机数，严格满足 `p - draw > 0` 时纳入
fn include<R: Rng>(rng: &mut R, probability: f64) -> bool {
    let draw: f64 = rng.gen();
    probability - draw > 0.0
}

impl Graph {
    /// 按概率重新生成整张图
    ///
    /// 候选顶点为 `0..max_size`；`include_all` 或顶点概率为 1 时纳入全部顶点。
    /// 随后对已纳入顶点的每个无序对（按枚举顺序）做一次边试验。
    pub fn random_graph<R: Rng>(
        &mut self,
        rng: &mut R,
        vertex_probability: f64,
        edge_probability: f64,
        include_all: bool,
    ) {
        let vertex_probability = if include_all { 1.0 } else { vertex_probability };
        self.clear();

        let candidates = (0..self.max_size()).map(VertexId::from);
        if vertex_probability >= 1.0 {
            for v in candidates {
                self.add_vertex(v);
            }
        } else if vertex_probability > 0.0 {
            for v in candidates {
                if include(rng, vertex_probability) {
                    self.add_vertex(v);
                }
            }
        }

        // p <= 0 或 NaN 时任何试验都不会通过，跳过抽样
        if edge_probability > 0.0 {
            let included: Vec<VertexId> = self.vertices().collect();
            for (i, &a) in included.iter().enumerate() {
                for &b in &included[i + 1..] {
                    if include(rng, edge_probability) {
                        self.add_edge(a, b);
                    }
                }
            }
        }

        self.record(GraphEvent::Generated {
            vertices: self.size(),
            edges: self.total_edges(),
            edge_probability,
        });
    }

    /// G(n, p)：容量设为 n（截断），纳入全部 n 个顶点，边概率为 p
    pub fn erdos_renyi<R, P>(&mut self, rng: &mut R, n: usize, p: P)
    where
        R: Rng,
        P: Into<Probability>,
    {
        let edge_probability = p.into().resolve(n);
        self.set_max_size(n);
        self.clear();
        self.random_graph(rng, 1.0, edge_probability, false);
    }

    /// 完全图 K_n
    pub fn complete(&mut self, n: usize) {
        self.erdos_renyi(&mut rand::thread_rng(), n, 1.0);
    }
}
