//! 结果打印器
//!
//! 提供表格和垂直格式的结果输出

use crate::algorithm::{DegreeStats, PathResult};
use crate::experiment::ExperimentReport;
use prettytable::{format, row, Cell, Row, Table};

/// 打印模式
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrintMode {
    /// 表格模式
    Table,
    /// 垂直模式
    Vertical,
}

/// 结果打印器
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    /// 打印通用结果
    pub fn print_result(&self, columns: &[String], rows: &[Vec<String>]) -> String {
        if columns.is_empty() || rows.is_empty() {
            return "Empty set\n".to_string();
        }

        let output = match self.mode {
            PrintMode::Table => self.format_table(columns, rows),
            PrintMode::Vertical => self.format_vertical(columns, rows),
        };

        format!("{}{} row(s)\n", output, rows.len())
    }

    /// 表格格式
    fn format_table(&self, columns: &[String], rows: &[Vec<String>]) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        let header: Vec<Cell> = columns.iter().map(|c| Cell::new(c)).collect();
        table.set_titles(Row::new(header));

        for row_data in rows {
            let cells: Vec<Cell> = row_data.iter().map(|v| Cell::new(v)).collect();
            table.add_row(Row::new(cells));
        }

        table.to_string()
    }

    /// 垂直格式：每行一段，列名右对齐
    fn format_vertical(&self, columns: &[String], rows: &[Vec<String>]) -> String {
        let width = columns.iter().map(|c| c.chars().count()).max().unwrap_or(0);
        let mut output = String::new();

        for (i, values) in rows.iter().enumerate() {
            output.push_str(&format!("-- [{}]\n", i + 1));
            for (col, value) in columns.iter().zip(values) {
                output.push_str(&format!("  {:>width$} = {}\n", col, value, width = width));
            }
        }

        output
    }

    /// 打印实验结果：每个 n 一行
    pub fn print_experiment(&self, report: &ExperimentReport) -> String {
        let columns = vec![
            "n".to_string(),
            format!("avg {}", report.config.metric.name()),
            "samples".to_string(),
        ];
        let rows: Vec<Vec<String>> = report
            .points
            .iter()
            .map(|p| {
                let samples: Vec<String> = p.samples.iter().map(|s| format!("{:.3}", s)).collect();
                vec![
                    p.n.to_string(),
                    format!("{:.4}", p.average),
                    samples.join(", "),
                ]
            })
            .collect();
        self.print_result(&columns, &rows)
    }

    /// 打印度统计
    pub fn print_degree_stats(&self, stats: &DegreeStats, components: usize) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Vertex Count", stats.vertices.to_string()]);
        table.add_row(row!["Edge Count", stats.edges.to_string()]);
        table.add_row(row!["Max Degree", stats.max_degree.to_string()]);
        table.add_row(row!["Min Degree", stats.min_degree.to_string()]);
        table.add_row(row!["Average Degree", format!("{:.4}", stats.average_degree)]);
        table.add_row(row!["Components", components.to_string()]);
        table.to_string()
    }

    /// 打印路径
    pub fn print_path(&self, path: &PathResult) -> String {
        if !path.found {
            return "未找到路径\n".to_string();
        }
        let hops: Vec<String> = path.vertices.iter().map(|v| v.to_string()).collect();
        format!("{}\n长度: {}\n", hops.join(" -> "), path.length())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ExperimentConfig, Metric, ProbabilityConfig};
    use crate::experiment::Experiment;
    use crate::graph::{Graph, VertexId};

    #[test]
    fn test_print_empty_result() {
        let printer = Printer::default();
        assert_eq!(printer.print_result(&[], &[]), "Empty set\n");
    }

    #[test]
    fn test_print_vertical() {
        let printer = Printer::new(PrintMode::Vertical);
        let output = printer.print_result(
            &["n".to_string(), "average".to_string()],
            &[vec!["10".to_string(), "2.5".to_string()]],
        );
        assert!(output.starts_with("-- [1]\n"));
        assert!(output.contains("        n = 10\n"));
        assert!(output.contains("  average = 2.5\n"));
        assert!(output.ends_with("1 row(s)\n"));
    }

    #[test]
    fn test_print_experiment() {
        let config = ExperimentConfig {
            start: 5,
            end: 6,
            step: 1,
            trials: 1,
            probability: ProbabilityConfig::Constant { p: 1.0 },
            metric: Metric::MaxDegree,
            seed: Some(1),
        };
        let report = Experiment::new(config).unwrap().run();
        let output = Printer::default().print_experiment(&report);

        assert!(output.contains("avg max_degree"));
        assert!(output.contains("4.0000"));
    }

    #[test]
    fn test_print_experiment_vertical() {
        let config = ExperimentConfig {
            start: 4,
            end: 6,
            step: 1,
            trials: 1,
            probability: ProbabilityConfig::Constant { p: 0.0 },
            metric: Metric::TotalEdges,
            seed: Some(2),
        };
        let report = Experiment::new(config).unwrap().run();
        let output = Printer::new(PrintMode::Vertical).print_experiment(&report);

        assert!(output.contains("-- [1]\n"));
        assert!(output.contains("-- [2]\n"));
        assert!(output.contains("avg total_edges = 0.0000"));
        assert!(output.ends_with("2 row(s)\n"));
    }

    #[test]
    fn test_print_path() {
        let mut graph = Graph::new(10);
        graph.add_edge(VertexId::new(0), VertexId::new(1));
        let printer = Printer::default();

        let found = printer.print_path(&graph.bfs(VertexId::new(0), VertexId::new(1)));
        assert!(found.starts_with("0 -> 1"));

        graph.add_vertex(VertexId::new(2));
        let missing = printer.print_path(&graph.bfs(VertexId::new(0), VertexId::new(2)));
        assert_eq!(missing, "未找到路径\n");
    }

    #[test]
    fn test_print_degree_stats() {
        let mut graph = Graph::default();
        graph.complete(3);
        let output = Printer::default().print_degree_stats(&graph.degree_stats(), 1);
        assert!(output.contains("Edge Count"));
        assert!(output.contains("Components"));
    }
}
