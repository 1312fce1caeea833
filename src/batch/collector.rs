//! # 文件收集器
//!
//! 在数据目录中按 glob 模式收集样品数据文件。
//!
//! ## 功能
//! - glob 模式匹配（逗号分隔的多模式）
//! - 结果按路径排序
//!
//! ## 依赖关系
//! - 被 `parsers/sample.rs` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 匹配文件名

use crate::error::{Result, TransportError};

use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    /// 数据目录
    input: PathBuf,
    /// 匹配模式列表
    patterns: Vec<Pattern>,
}

impl FileCollector {
    /// 创建新的文件收集器（默认匹配全部文件，只搜索目录本身）
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            patterns: Vec::new(),
        }
    }

    /// 设置匹配模式（逗号分隔的多模式）
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self> {
        self.patterns = pattern
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                Pattern::new(s).map_err(|e| {
                    TransportError::InvalidArgument(format!("Invalid glob pattern '{}': {}", s, e))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(self)
    }

    /// 收集所有匹配的文件
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        if !self.input.is_dir() {
            return Err(TransportError::DirectoryNotFound {
                path: self.input.display().to_string(),
            });
        }

        let mut files: Vec<PathBuf> = WalkDir::new(&self.input)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|entry| self.matches_patterns(entry.path()))
            .map(|e| e.path().to_path_buf())
            .collect();

        files.sort();
        Ok(files)
    }

    /// 检查文件名是否匹配任一模式
    fn matches_patterns(&self, path: &Path) -> bool {
        let filename = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return false,
        };

        self.patterns.is_empty() || self.patterns.iter().any(|p| p.matches(filename))
    }
}
