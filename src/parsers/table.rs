//! # 两列数值表格解析器
//!
//! 读取 (温度, 物性) 或 (能量, σ_E) 形式的两列数据文件。
//!
//! ## 格式
//! ```text
//! # 注释行与空行被忽略
//! T (K), sigma (S/m)      <- 可选表头（仅允许出现在第一行数据之前）
//! 300, 2.1e4
//! 350  1.9e4              <- 空白分隔同样接受
//! ```
//! 多于两列时只取前两列。
//!
//! ## 依赖关系
//! - 被 `parsers/sample.rs`, `commands/model.rs` 使用
//! - 使用 `csv` 读取记录，`regex` 规范化空白分隔行

use crate::error::{Result, TransportError};

use regex::Regex;
use std::fs;
use std::path::Path;

/// 读取两列数值表格文件
pub fn parse_table_file(path: &Path) -> Result<Vec<(f64, f64)>> {
    if !path.is_file() {
        return Err(TransportError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| TransportError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_table(&content, &path.display().to_string())
}

/// 从字符串解析两列数值表格
///
/// `source` 仅用于错误信息。
pub fn parse_table(content: &str, source: &str) -> Result<Vec<(f64, f64)>> {
    let normalized = normalize_delimiters(content);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(normalized.as_bytes());

    let mut points = Vec::new();
    let mut first_row = true;

    for record in reader.records() {
        let record = record?;
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }

        let line = record.position().map_or(0, |p| p.line());
        let parsed = match (record.get(0), record.get(1)) {
            (Some(x), Some(y)) => x.parse::<f64>().ok().zip(y.parse::<f64>().ok()),
            _ => None,
        };

        match parsed {
            Some(point) => points.push(point),
            // 表头
            None if first_row && record.len() >= 2 => {}
            None => {
                return Err(TransportError::ParseError {
                    format: "table".to_string(),
                    path: source.to_string(),
                    reason: format!(
                        "line {}: expected two numeric columns, got '{}'",
                        line,
                        record.iter().collect::<Vec<_>>().join(",")
                    ),
                });
            }
        }
        first_row = false;
    }

    Ok(points)
}

/// 不含逗号的行按空白切分，转换为逗号分隔
fn normalize_delimiters(content: &str) -> String {
    let whitespace = Regex::new(r"[ \t]+").unwrap();

    content
        .lines()
        .map(|line| {
            let trimmed = line.trim();
            if trimmed.starts_with('#') || trimmed.contains(',') {
                trimmed.to_string()
            } else {
                whitespace.replace_all(trimmed, ",").into_owned()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_separated() {
        let content = "100, 1.5e4\n200, 1.2e4\n300,1.0e4\n";
        let points = parse_table(content, "test").unwrap();
        assert_eq!(points, vec![(100.0, 1.5e4), (200.0, 1.2e4), (300.0, 1.0e4)]);
    }

    #[test]
    fn test_whitespace_comments_and_header() {
        let content = "\
# measured on heating
T (K), S (V/K)

300   1.2e-4
350\t1.4e-4
# end
";
        let points = parse_table(content, "test").unwrap();
        assert_eq!(points, vec![(300.0, 1.2e-4), (350.0, 1.4e-4)]);
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let points = parse_table("300, 1.0e4, 0.02\n400, 0.9e4, 0.03\n", "test").unwrap();
        assert_eq!(points, vec![(300.0, 1.0e4), (400.0, 0.9e4)]);
    }

    #[test]
    fn test_bad_rows_are_errors() {
        assert!(matches!(
            parse_table("300, 1.0e4\n400, abc\n", "test"),
            Err(TransportError::ParseError { .. })
        ));
        assert!(parse_table("300\n", "test").is_err());
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("semitransport_missing_table.csv");
        assert!(matches!(
            parse_table_file(&path),
            Err(TransportError::FileNotFound { .. })
        ));
    }
}
