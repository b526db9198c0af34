//! ergraph 命令行工具
//!
//! 生成随机图、查询最短路径、批量运行 G(n, p) 实验

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use ergraph::cli::{PrintMode, Printer};
use ergraph::config::{ExperimentConfig, Metric, ProbabilityConfig};
use ergraph::experiment::Experiment;
use ergraph::graph::{Graph, VertexId};
use ergraph::logging;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ergraph")]
#[command(about = "ergraph 随机图工具", version)]
struct Args {
    /// 输出每次图操作的诊断日志
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 对一系列 n 重复生成 G(n, p) 并统计指标
    Experiment(ExperimentArgs),
    /// 生成一张 G(n, p) 并输出度统计
    Generate(GenerateArgs),
    /// 生成一张 G(n, p) 并查找最短路径
    Path(PathArgs),
}

#[derive(clap::Args, Debug)]
struct ExperimentArgs {
    /// JSON 配置文件，命令行参数覆盖文件中的值
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 起始顶点数（包含）
    #[arg(long)]
    start: Option<usize>,

    /// 结束顶点数（不包含）
    #[arg(long)]
    end: Option<usize>,

    /// 步长
    #[arg(long)]
    step: Option<usize>,

    /// 每个 n 的试验次数
    #[arg(long)]
    trials: Option<usize>,

    /// 固定边概率
    #[arg(short, long, conflicts_with = "threshold")]
    probability: Option<f64>,

    /// 阈值函数
    #[arg(long, value_enum)]
    threshold: Option<ThresholdKind>,

    /// 阈值函数系数
    #[arg(long, requires = "threshold")]
    scale: Option<f64>,

    /// 采集的指标
    #[arg(short, long, value_enum)]
    metric: Option<MetricKind>,

    /// degree-count 指标的目标度
    #[arg(long)]
    degree: Option<usize>,

    /// 随机种子
    #[arg(long)]
    seed: Option<u64>,

    /// 写出 n,average CSV
    #[arg(long)]
    csv: Option<PathBuf>,

    /// 以 JSON 输出报告
    #[arg(long)]
    json: bool,

    /// 按行纵向输出，适合样本较多时阅读
    #[arg(long, conflicts_with = "json")]
    vertical: bool,
}

#[derive(clap::Args, Debug)]
struct GenerateArgs {
    /// 顶点数
    #[arg(short, long, default_value = "100")]
    n: usize,

    /// 边概率
    #[arg(short, long, default_value = "0.05")]
    probability: f64,

    /// 随机种子
    #[arg(long)]
    seed: Option<u64>,

    /// 以 JSON 输出度统计
    #[arg(long)]
    json: bool,
}

#[derive(clap::Args, Debug)]
struct PathArgs {
    /// 顶点数
    #[arg(short, long, default_value = "100")]
    n: usize,

    /// 边概率
    #[arg(short, long, default_value = "0.05")]
    probability: f64,

    /// 起点
    #[arg(long)]
    from: u64,

    /// 终点
    #[arg(long)]
    to: u64,

    /// 随机种子
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThresholdKind {
    /// min(1, scale/n)
    Inverse,
    /// scale·ln(n)/n
    Log,
    /// scale·ln(ln(n))/n
    LogLog,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MetricKind {
    MaxDegree,
    AverageDegree,
    TotalEdges,
    Components,
    DegreeCount,
    LogDegreeCount,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init_logging(args.verbose)?;

    match args.command {
        Command::Experiment(experiment_args) => run_experiment(experiment_args),
        Command::Generate(generate_args) => run_generate(generate_args, args.verbose),
        Command::Path(path_args) => run_path(path_args, args.verbose),
    }
}

fn build_config(args: &ExperimentArgs) -> anyhow::Result<ExperimentConfig> {
    let mut config = match &args.config {
        Some(path) => ExperimentConfig::from_json_file(path)
            .with_context(|| format!("无法加载配置文件 {:?}", path))?,
        None => ExperimentConfig::default(),
    };

    if let Some(start) = args.start {
        config.start = start;
    }
    if let Some(end) = args.end {
        config.end = end;
    }
    if let Some(step) = args.step {
        config.step = step;
    }
    if let Some(trials) = args.trials {
        config.trials = trials;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }

    if let Some(p) = args.probability {
        config.probability = ProbabilityConfig::Constant { p };
    } else if let Some(kind) = args.threshold {
        let scale = args.scale.unwrap_or(1.0);
        config.probability = match kind {
            ThresholdKind::Inverse => ProbabilityConfig::Inverse { scale },
            ThresholdKind::Log => ProbabilityConfig::LogOverN { scale },
            ThresholdKind::LogLog => ProbabilityConfig::LogLogOverN { scale },
        };
    }

    if let Some(kind) = args.metric {
        config.metric = match kind {
            MetricKind::MaxDegree => Metric::MaxDegree,
            MetricKind::AverageDegree => Metric::AverageDegree,
            MetricKind::TotalEdges => Metric::TotalEdges,
            MetricKind::Components => Metric::Components,
            MetricKind::LogDegreeCount => Metric::LogDegreeCount,
            MetricKind::DegreeCount => match args.degree {
                Some(degree) => Metric::DegreeCount { degree },
                None => bail!("degree-count 指标需要 --degree"),
            },
        };
    }

    config.validate()?;
    Ok(config)
}

fn run_experiment(args: ExperimentArgs) -> anyhow::Result<()> {
    let config = build_config(&args)?;
    tracing::info!(?config, "开始实验");

    let report = Experiment::new(config)?.run();

    if let Some(path) = &args.csv {
        report
            .write_csv(path)
            .with_context(|| format!("无法写出 CSV {:?}", path))?;
        tracing::info!(path = ?path, "CSV 已写出");
    }

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        let mode = if args.vertical {
            PrintMode::Vertical
        } else {
            PrintMode::Table
        };
        println!("{}", "实验结果".bold());
        print!("{}", Printer::new(mode).print_experiment(&report));
    }
    Ok(())
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn generate(n: usize, probability: f64, seed: Option<u64>, verbose: bool) -> Graph {
    let mut graph = Graph::with_verbose(n, verbose);
    graph.erdos_renyi(&mut seeded_rng(seed), n, probability);
    graph
}

fn run_generate(args: GenerateArgs, verbose: bool) -> anyhow::Result<()> {
    let graph = generate(args.n, args.probability, args.seed, verbose);
    let stats = graph.degree_stats();
    let components = graph.path_finder().connected_components().len();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!(
            "{}",
            format!("G({}, {})", args.n, args.probability).bold()
        );
        print!("{}", Printer::default().print_degree_stats(&stats, components));
    }
    Ok(())
}

fn run_path(args: PathArgs, verbose: bool) -> anyhow::Result<()> {
    let graph = generate(args.n, args.probability, args.seed, verbose);
    let (from, to) = (VertexId::new(args.from), VertexId::new(args.to));

    for v in [from, to] {
        if !graph.exists(v) {
            bail!("顶点 {} 不在图中（顶点范围 0..{}）", v, graph.size());
        }
    }

    let path = graph.bfs(from, to);
    println!("{}", format!("{} -> {}", from, to).bold());
    print!("{}", Printer::default().print_path(&path));
    Ok(())
}
