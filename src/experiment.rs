//! 随机图实验
//!
//! 对一系列顶点数 n 重复生成 G(n, p)，采集指标并求平均

use crate::config::{ExperimentConfig, Metric};
use crate::error::Result;
use crate::graph::Graph;
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 单个 n 的采样结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentPoint {
    pub n: usize,
    pub samples: Vec<f64>,
    pub average: f64,
}

/// 实验报告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentReport {
    pub generated_at: DateTime<Utc>,
    pub config: ExperimentConfig,
    pub points: Vec<ExperimentPoint>,
}

impl ExperimentReport {
    /// (n, 平均值) 序列
    pub fn averages(&self) -> Vec<(usize, f64)> {
        self.points.iter().map(|p| (p.n, p.average)).collect()
    }

    /// 写出 `n,average` CSV，供绘图脚本使用
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(["n", "average"])?;
        for (n, average) in self.averages() {
            writer.write_record([n.to_string(), average.to_string()])?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// 算术平均，空序列为 0
pub fn average(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// 在图上计算指标
pub fn measure(graph: &Graph, metric: Metric) -> f64 {
    match metric {
        Metric::MaxDegree => graph.max_degree() as f64,
        Metric::AverageDegree => graph.average_degree(),
        Metric::TotalEdges => graph.total_edges() as f64,
        Metric::Components => graph.path_finder().connected_components().len() as f64,
        Metric::DegreeCount { degree } => graph.vertices_of_degree(degree).len() as f64,
        Metric::LogDegreeCount => {
            let degree = (graph.size() as f64).log2().sqrt().ceil() as usize;
            graph.vertices_of_degree(degree).len() as f64
        }
    }
}

/// 实验执行器
pub struct Experiment {
    config: ExperimentConfig,
}

impl Experiment {
    /// 创建实验，配置无效时报错
    pub fn new(config: ExperimentConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// 运行实验；配置了种子时结果可复现
    pub fn run(&self) -> ExperimentReport {
        match self.config.seed {
            Some(seed) => self.run_with_rng(&mut StdRng::seed_from_u64(seed)),
            None => self.run_with_rng(&mut StdRng::from_entropy()),
        }
    }

    pub fn run_with_rng<R: Rng>(&self, rng: &mut R) -> ExperimentReport {
        let probability = self.config.probability.to_probability();
        let metric = self.config.metric;
        let mut points = Vec::new();

        for n in self.config.sizes() {
            let samples: Vec<f64> = (0..self.config.trials)
                .map(|trial| {
                    let mut graph = Graph::new(0);
                    graph.erdos_renyi(rng, n, probability.clone());
                    let value = measure(&graph, metric);
                    tracing::debug!(n, trial, value, "试验完成");
                    value
                })
                .collect();

            let average = average(&samples);
            tracing::info!(n, average, metric = %metric.name(), "采样完成");
            points.push(ExperimentPoint {
                n,
                samples,
                average,
            });
        }

        ExperimentReport {
            generated_at: Utc::now(),
            config: self.config.clone(),
            points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProbabilityConfig;
    use tempfile::NamedTempFile;

    fn config(metric: Metric, probability: ProbabilityConfig) -> ExperimentConfig {
        ExperimentConfig {
            start: 0,
            end: 30,
            step: 10,
            trials: 2,
            probability,
            metric,
            seed: Some(11),
        }
    }

    #[test]
    fn test_average() {
        assert_eq!(average(&[]), 0.0);
        assert_eq!(average(&[1.0, 2.0, 3.0]), 2.0);
    }

    #[test]
    fn test_complete_graph_experiment() {
        let experiment = Experiment::new(config(
            Metric::TotalEdges,
            ProbabilityConfig::Constant { p: 1.0 },
        ))
        .unwrap();
        let report = experiment.run();

        assert_eq!(
            report.averages(),
            vec![(0, 0.0), (10, 45.0), (20, 190.0)]
        );
        assert!(report.points.iter().all(|p| p.samples.len() == 2));
    }

    #[test]
    fn test_empty_probability_experiment() {
        let experiment = Experiment::new(config(
            Metric::Components,
            ProbabilityConfig::Constant { p: 0.0 },
        ))
        .unwrap();
        let report = experiment.run();

        assert_eq!(report.averages(), vec![(0, 0.0), (10, 10.0), (20, 20.0)]);
    }

    #[test]
    fn test_seeded_experiment_is_reproducible() {
        let cfg = config(Metric::MaxDegree, ProbabilityConfig::Inverse { scale: 3.0 });
        let a = Experiment::new(cfg.clone()).unwrap().run();
        let b = Experiment::new(cfg).unwrap().run();
        assert_eq!(a.points, b.points);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut cfg = config(Metric::MaxDegree, ProbabilityConfig::Constant { p: 0.5 });
        cfg.step = 0;
        assert!(Experiment::new(cfg).is_err());
    }

    #[test]
    fn test_measure_log_degree_count() {
        // n = 16: ceil(sqrt(4)) = 2，环上每个顶点度为 2
        let mut graph = Graph::new(16);
        for i in 0..16u64 {
            graph.add_edge(i.into(), ((i + 1) % 16).into());
        }
        assert_eq!(measure(&graph, Metric::LogDegreeCount), 16.0);
        assert_eq!(measure(&graph, Metric::DegreeCount { degree: 3 }), 0.0);
        assert_eq!(measure(&Graph::new(0), Metric::LogDegreeCount), 0.0);
    }

    #[test]
    fn test_write_csv_and_json() {
        let report = Experiment::new(config(
            Metric::AverageDegree,
            ProbabilityConfig::Constant { p: 1.0 },
        ))
        .unwrap()
        .run();

        let file = NamedTempFile::new().unwrap();
        report.write_csv(file.path()).unwrap();
        let content = std::fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, vec!["n,average", "0,0", "10,9", "20,19"]);

        let json = report.to_json().unwrap();
        assert!(json.contains("\"average_degree\""));
        assert!(json.contains("\"points\""));
    }
}
