//! # analyze 子命令 CLI 定义
//!
//! 分析功能统一入口，包含多个子命令：
//! - `temperature`: σ_E0（及有效质量）随温度的变化
//! - `jonker`: 固定温度下一组样品的 σ_E0
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/analyze/` 相应模块

use clap::{Args, Subcommand};
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────
// Analyze 主命令
// ─────────────────────────────────────────────────────────────

/// analyze 主命令参数
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    #[command(subcommand)]
    pub command: AnalyzeCommands,
}

/// analyze 子命令
#[derive(Subcommand, Debug)]
pub enum AnalyzeCommands {
    /// Extract sigma_E0 versus temperature for one sample or a whole directory
    Temperature(TemperatureArgs),

    /// Compare sigma_E0 across a sample series at a fixed temperature
    Jonker(JonkerArgs),
}

// ─────────────────────────────────────────────────────────────
// 温度分析子命令
// ─────────────────────────────────────────────────────────────

/// 温度分析子命令参数
#[derive(Args, Debug)]
pub struct TemperatureArgs {
    /// Directory with {name}_conductivity.csv / {name}_seebeck.csv files
    pub input: PathBuf,

    /// Analyze only this sample (default: every sample in the directory)
    #[arg(long)]
    pub sample: Option<String>,

    /// Number of interpolated temperatures inside the overlap window
    #[arg(short = 'p', long, default_value_t = 15)]
    pub points: usize,

    /// Energy exponent s of the transport function (scattering mechanism)
    #[arg(short = 's', long = "exponent", env = "SEMITRANSPORT_EXPONENT", default_value_t = 1.0)]
    pub exponent: f64,

    /// Carrier density (1/m^3); enables effective-mass extraction
    #[arg(short = 'n', long)]
    pub carrier_density: Option<f64>,

    /// Output CSV: file path (single sample) or directory (batch mode)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Iteration cap of each minimization
    #[arg(long, default_value_t = 1000)]
    pub max_iterations: usize,

    // ─────────────────────────────────────────────────────────────
    // 批量处理参数
    // ─────────────────────────────────────────────────────────────
    /// Number of parallel jobs (0 = auto, batch mode only)
    #[arg(short, long, env = "SEMITRANSPORT_JOBS", default_value_t = 0)]
    pub jobs: usize,

    /// Overwrite existing output files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}

// ─────────────────────────────────────────────────────────────
// Jonker 分析子命令
// ─────────────────────────────────────────────────────────────

/// Jonker 分析子命令参数
#[derive(Args, Debug)]
pub struct JonkerArgs {
    /// Directory with {name}_conductivity.csv / {name}_seebeck.csv files
    pub input: PathBuf,

    /// Temperature (K) at which every sample is compared
    #[arg(short, long)]
    pub temperature: f64,

    /// Energy exponent s of the transport function (scattering mechanism)
    #[arg(short = 's', long = "exponent", env = "SEMITRANSPORT_EXPONENT", default_value_t = 1.0)]
    pub exponent: f64,

    /// Write per-sample results to a CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
