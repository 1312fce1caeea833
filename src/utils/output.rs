//! # 美化输出工具
//!
//! 提供统一的终端输出样式。状态行使用固定标签：
//! `[OK]`, `[ERR]`, `[WARN]`, `[*]`, `[SKIP]`, `[DONE]`。
//! 错误写入 stderr，其余写入 stdout。
//!
//! ## 依赖关系
//! - 被所有 `commands/` 模块和 `main.rs` 使用
//! - 使用 `colored` crate

use colored::Colorize;

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印跳过消息
pub fn print_skip(msg: &str) {
    println!("{} {}", "[SKIP]".dimmed(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(60).dimmed());
}

/// 打印失败列表 (名称, 错误信息)，超过 `limit` 条时只打印前 `limit` 条
pub fn print_failures(failures: &[(String, String)], limit: usize) {
    if failures.is_empty() {
        return;
    }

    print_warning(&format!("{} failed:", failures.len()));
    for (name, err) in failures.iter().take(limit) {
        print_error(&format!("  {}: {}", name, err));
    }
    if failures.len() > limit {
        print_warning(&format!("  ... and {} more", failures.len() - limit));
    }
}
