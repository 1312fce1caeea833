//! # semitransport 库
//!
//! 半导体输运函数模型与参数提取。`main.rs` 的命令行工具建立在这些模块之上。
//!
//! ## 模块
//! - `transport`: Fermi-Dirac 积分、输运模型、极小化、参数提取与导出
//! - `models`: 样品与样品系列
//! - `parsers`: 数据文件解析
//! - `batch`: 文件收集与并行批量处理
//! - `cli` / `commands`: 命令行定义与执行
//! - `utils`: 输出、进度条、插值
//! - `error`: 统一错误类型

pub mod batch;
pub mod cli;
pub mod commands;
pub mod error;
pub mod models;
pub mod parsers;
pub mod transport;
pub mod utils;

pub use error::{Result, TransportError};
pub use models::{JonkerSummary, Sample, SampleSeries, TemperatureAnalysis};
pub use transport::{
    extract_effective_mass, extract_transport_function, Extractor, MinimizerOptions,
};
