//! # analyze 命令实现
//!
//! 分析功能统一入口，包含多个子命令：
//! - `temperature`: σ_E0（及有效质量）随温度的变化
//! - `jonker`: 固定温度下样品系列的 σ_E0
//!
//! ## 依赖关系
//! - 使用 `cli/analyze.rs` 定义的参数
//! - 子模块: temperature, jonker

pub mod jonker;
pub mod temperature;

use crate::cli::analyze::{AnalyzeArgs, AnalyzeCommands};
use crate::error::Result;

/// 执行 analyze 命令
pub fn execute(args: AnalyzeArgs) -> Result<()> {
    match args.command {
        AnalyzeCommands::Temperature(temperature_args) => temperature::execute(temperature_args),
        AnalyzeCommands::Jonker(jonker_args) => jonker::execute(jonker_args),
    }
}
