//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `models/`, `transport/`, `utils/`
//! - 子模块: extract, analyze, model

pub mod analyze;
pub mod extract;
pub mod model;

use crate::cli::Commands;
use crate::error::Result;
use crate::transport::{Extractor, MinimizerOptions};

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Extract(args) => extract::execute(args),
        Commands::Analyze(args) => analyze::execute(args),
        Commands::Model(args) => model::execute(args),
    }
}

/// 按迭代上限构造提取器
pub(crate) fn extractor_with_cap(max_iterations: usize) -> Extractor {
    Extractor::new(MinimizerOptions {
        max_iterations,
        ..MinimizerOptions::default()
    })
}

/// 格式化可能缺失的数值
pub(crate) fn format_optional(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) => format!("{:.*e}", precision, v),
        None => "n/a".to_string(),
    }
}
