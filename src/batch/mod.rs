//! # 批量处理模块
//!
//! 数据目录中多个样品的批量处理。
//!
//! ## 功能
//! - 按 glob 模式收集数据文件
//! - 逐样品并行分析
//! - 进度反馈与统计
//!
//! ## 依赖关系
//! - 被 `parsers/sample.rs`, `commands/analyze/` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use collector::FileCollector;
pub use runner::{BatchResult, BatchRunner, ProcessResult};
