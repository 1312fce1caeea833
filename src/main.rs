//! # semitransport - 半导体输运函数分析工具
//!
//! 由 Seebeck 系数与电导率测量值反解输运函数前因子 σ_E0 与有效质量，
//! 并提供幂律、球形能谷、圆柱能谷和数值输运函数的正向模型。
//!
//! ## 子命令
//! - `extract` - 单个测量点的参数提取
//! - `analyze` - 分析功能
//!   - `temperature` - σ_E0 随温度的变化（单样品 / 批量）
//!   - `jonker` - 固定温度下样品系列的 σ_E0
//! - `model` - 正向模型计算
//!
//! ## 依赖关系
//! ```text
//! main.rs -> lib.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (数据文件解析)
//!   │     ├── models/    (样品与样品系列)
//!   │     ├── transport/ (模型、极小化、提取、导出)
//!   │     └── batch/     (并行批量处理)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

use clap::Parser;
use semitransport::cli::Cli;
use semitransport::{commands, utils};

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
