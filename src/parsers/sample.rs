//! # 样品数据目录解析器
//!
//! 每个样品由两个文件组成：
//! - `{name}_conductivity.csv`（旧命名 `{name}_cond.csv`）
//! - `{name}_seebeck.csv`（旧命名 `{name}_seeb.csv`）
//!
//! 样品名取文件名中第一个下划线之前的部分；不含下划线的 csv 文件被忽略。
//!
//! ## 依赖关系
//! - 被 `models/sample.rs`, `models/series.rs`, `commands/analyze/` 使用
//! - 使用 `batch/collector.rs` 收集文件，`parsers/table.rs` 读取表格

use crate::batch::FileCollector;
use crate::error::{Result, TransportError};
use crate::models::Sample;
use crate::parsers::table::parse_table_file;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// 电导率文件后缀（按优先级）
const CONDUCTIVITY_SUFFIXES: [&str; 2] = ["conductivity", "cond"];

/// Seebeck 文件后缀（按优先级）
const SEEBECK_SUFFIXES: [&str; 2] = ["seebeck", "seeb"];

/// 扫描目录，返回排序后的样品名列表
pub fn discover_sample_names(dir: &Path) -> Result<Vec<String>> {
    let files = FileCollector::new(dir).with_pattern("*.csv")?.collect()?;

    let names: BTreeSet<String> = files
        .iter()
        .filter_map(|path| path.file_name().and_then(|n| n.to_str()))
        .filter_map(|name| name.split_once('_').map(|(prefix, _)| prefix.to_string()))
        .filter(|prefix| !prefix.is_empty())
        .collect();

    if names.is_empty() {
        return Err(TransportError::NoSamplesFound {
            path: dir.display().to_string(),
        });
    }

    Ok(names.into_iter().collect())
}

/// 按后缀优先级查找样品的某一物性文件
pub fn resolve_trace_path(dir: &Path, name: &str, suffixes: &[&str]) -> Result<PathBuf> {
    suffixes
        .iter()
        .map(|suffix| dir.join(format!("{}_{}.csv", name, suffix)))
        .find(|path| path.is_file())
        .ok_or_else(|| TransportError::FileNotFound {
            path: dir
                .join(format!("{}_{}.csv", name, suffixes.first().copied().unwrap_or("data")))
                .display()
                .to_string(),
        })
}

/// 读取单个样品
pub fn load_sample(name: &str, dir: &Path, carrier_density: Option<f64>) -> Result<Sample> {
    if !dir.is_dir() {
        return Err(TransportError::DirectoryNotFound {
            path: dir.display().to_string(),
        });
    }

    let conductivity_path = resolve_trace_path(dir, name, &CONDUCTIVITY_SUFFIXES)?;
    let seebeck_path = resolve_trace_path(dir, name, &SEEBECK_SUFFIXES)?;

    let conductivity = parse_table_file(&conductivity_path)?;
    let seebeck = parse_table_file(&seebeck_path)?;

    Sample::new(name, conductivity, seebeck, carrier_density)
}

/// 读取目录中的全部样品（按名称排序）
pub fn load_series(dir: &Path) -> Result<Vec<Sample>> {
    discover_sample_names(dir)?
        .iter()
        .map(|name| load_sample(name, dir, None))
        .collect()
}
