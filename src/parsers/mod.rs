//! # 解析器模块
//!
//! 读取实验数据文件和表格化输运函数。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `models/` 使用
//! - 使用 `models/` 数据模型
//! - 子模块: table, sample

pub mod sample;
pub mod table;

pub use sample::{discover_sample_names, load_sample, load_series};
pub use table::parse_table_file;
