//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `extract`: 单个测量点的参数提取
//! - `analyze`: 分析功能（嵌套子命令）
//!   - `temperature`: 单样品或批量温度分析
//!   - `jonker`: 固定温度下的样品系列分析
//! - `model`: 正向模型计算
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: extract, analyze, model

pub mod analyze;
pub mod extract;
pub mod model;

use clap::{Parser, Subcommand};

/// semitransport - 半导体输运函数分析工具
#[derive(Parser)]
#[command(name = "semitransport")]
#[command(author = "Maxwell Dylla")]
#[command(version)]
#[command(
    about = "Extract transport-function parameters from Seebeck and conductivity data",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Extract sigma_E0 (and effective mass) from a single measurement
    Extract(extract::ExtractArgs),

    /// Analyze measured samples (temperature dependence, Jonker series)
    Analyze(analyze::AnalyzeArgs),

    /// Evaluate a forward transport model over a chemical-potential grid
    Model(model::ModelArgs),
}
