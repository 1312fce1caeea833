//! # 数据模型模块
//!
//! 定义单个样品和样品系列的实验输运数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/` 和 `commands/` 使用
//! - 使用 `transport/` 进行参数提取
//! - 子模块: sample, series

pub mod sample;
pub mod series;

pub use sample::{temperature_analysis, InterpolatedData, Sample, TemperatureAnalysis};
pub use series::{JonkerSummary, SampleSeries};
