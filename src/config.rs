//! 实验配置
//!
//! 可由命令行参数构造，也可从 JSON 文件加载

use crate::algorithm::Probability;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 边概率配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProbabilityConfig {
    /// 固定概率
    Constant { p: f64 },
    /// min(1, scale/n)
    Inverse { scale: f64 },
    /// scale·ln(n)/n
    LogOverN { scale: f64 },
    /// scale·ln(ln(n))/n
    LogLogOverN { scale: f64 },
}

impl ProbabilityConfig {
    pub fn to_probability(&self) -> Probability {
        match *self {
            ProbabilityConfig::Constant { p } => Probability::constant(p),
            ProbabilityConfig::Inverse { scale } => Probability::inverse(scale),
            ProbabilityConfig::LogOverN { scale } => Probability::log_over_n(scale),
            ProbabilityConfig::LogLogOverN { scale } => Probability::log_log_over_n(scale),
        }
    }
}

/// 每次试验采集的指标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Metric {
    MaxDegree,
    AverageDegree,
    TotalEdges,
    /// 连通分量数（含孤立顶点）
    Components,
    /// 度恰好为 degree 的顶点数
    DegreeCount { degree: usize },
    /// 度恰好为 ceil(sqrt(log2 n)) 的顶点数
    LogDegreeCount,
}

impl Metric {
    /// 指标名称，用于表头和日志
    pub fn name(&self) -> String {
        match self {
            Metric::MaxDegree => "max_degree".to_string(),
            Metric::AverageDegree => "average_degree".to_string(),
            Metric::TotalEdges => "total_edges".to_string(),
            Metric::Components => "components".to_string(),
            Metric::DegreeCount { degree } => format!("degree_{}_count", degree),
            Metric::LogDegreeCount => "log_degree_count".to_string(),
        }
    }
}

/// 实验配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// 起始顶点数（包含）
    pub start: usize,
    /// 结束顶点数（不包含）
    pub end: usize,
    /// 步长
    pub step: usize,
    /// 每个 n 的试验次数
    pub trials: usize,
    pub probability: ProbabilityConfig,
    pub metric: Metric,
    /// 随机种子，未设置时使用系统熵
    pub seed: Option<u64>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            start: 0,
            end: 1000,
            step: 85,
            trials: 3,
            probability: ProbabilityConfig::Inverse { scale: 10.0 },
            metric: Metric::AverageDegree,
            seed: None,
        }
    }
}

impl ExperimentConfig {
    /// 从 JSON 文件加载，缺失字段使用默认值
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// 校验参数
    pub fn validate(&self) -> Result<()> {
        if self.step == 0 {
            return Err(Error::InvalidConfig("step 必须大于 0".to_string()));
        }
        if self.trials == 0 {
            return Err(Error::InvalidConfig("trials 必须大于 0".to_string()));
        }
        if self.start > self.end {
            return Err(Error::InvalidConfig(format!(
                "start ({}) 不能大于 end ({})",
                self.start, self.end
            )));
        }
        Ok(())
    }

    /// 需要采样的顶点数序列
    pub fn sizes(&self) -> impl Iterator<Item = usize> {
        (self.start..self.end).step_by(self.step.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = ExperimentConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(
            config.sizes().collect::<Vec<_>>(),
            vec![0, 85, 170, 255, 340, 425, 510, 595, 680, 765, 850, 935]
        );
    }

    #[test]
    fn test_validate() {
        let mut config = ExperimentConfig::default();
        config.step = 0;
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let mut config = ExperimentConfig::default();
        config.trials = 0;
        assert!(config.validate().is_err());

        let mut config = ExperimentConfig::default();
        config.start = 10;
        config.end = 5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{"start": 10, "end": 50, "step": 20, "probability": {{"kind": "log_over_n", "scale": 2.0}}, "metric": {{"kind": "degree_count", "degree": 3}}, "seed": 9}}"#
        )
        .unwrap();

        let config = ExperimentConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.start, 10);
        assert_eq!(config.trials, 3);
        assert_eq!(config.probability, ProbabilityConfig::LogOverN { scale: 2.0 });
        assert_eq!(config.metric, Metric::DegreeCount { degree: 3 });
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.sizes().collect::<Vec<_>>(), vec![10, 30]);
    }

    #[test]
    fn test_load_invalid_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"step": 0}}"#).unwrap();
        assert!(ExperimentConfig::from_json_file(file.path()).is_err());

        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not json").unwrap();
        assert!(matches!(
            ExperimentConfig::from_json_file(file.path()),
            Err(Error::Serialization(_))
        ));
    }

    #[test]
    fn test_probability_config() {
        let p = ProbabilityConfig::Constant { p: 0.25 }.to_probability();
        assert_eq!(p.resolve(10), 0.25);

        let p = ProbabilityConfig::Inverse { scale: 10.0 }.to_probability();
        assert_eq!(p.resolve(20), 0.5);
    }
}
