//! # 统一错误处理模块
//!
//! 定义 semitransport 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// semitransport 统一错误类型
#[derive(Error, Debug)]
pub enum TransportError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {format} file: {path}\nReason: {reason}")]
    ParseError {
        format: String,
        path: String,
        reason: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 数据错误
    // ─────────────────────────────────────────────────────────────
    #[error("Sample '{sample}' has no {property} data")]
    EmptyTrace { sample: String, property: String },

    #[error(
        "Sample '{sample}': conductivity and Seebeck temperatures do not overlap \
         (window would be {min} K to {max} K)"
    )]
    NoTemperatureOverlap { sample: String, min: f64, max: f64 },

    #[error("Sample '{sample}': {temperature} K is outside the window {min} K to {max} K")]
    TemperatureOutsideWindow {
        sample: String,
        temperature: f64,
        min: f64,
        max: f64,
    },

    #[error("Length mismatch: {what} ({left} vs {right})")]
    LengthMismatch {
        what: String,
        left: usize,
        right: usize,
    },

    #[error("Jonker analysis needs at least one sample")]
    EmptySeries,

    #[error("No samples found in: {path}")]
    NoSamplesFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 模型 / 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid transport exponent s = {0} (must be finite and >= 0)")]
    InvalidExponent(f64),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, TransportError>;
