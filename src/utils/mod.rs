//! # 工具函数模块
//!
//! 提供美化输出、进度条、插值等工具。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `models/` 模块使用
//! - 子模块: output, progress, interp

pub mod interp;
pub mod output;
pub mod progress;
