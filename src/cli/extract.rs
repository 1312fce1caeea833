//! # extract 子命令 CLI 定义
//!
//! 由单个 (Seebeck, 电导率, 温度) 测量点提取 σ_E0，
//! 给定载流子浓度时同时提取有效质量。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/extract.rs`

use clap::Args;

/// extract 子命令参数
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Measured Seebeck coefficient (V/K); the sign is ignored
    #[arg(long, allow_hyphen_values = true)]
    pub seebeck: f64,

    /// Measured electrical conductivity (S/m)
    #[arg(long)]
    pub conductivity: f64,

    /// Measurement temperature (K)
    #[arg(short, long)]
    pub temperature: f64,

    /// Energy exponent s of the transport function (scattering mechanism)
    #[arg(short = 's', long = "exponent", env = "SEMITRANSPORT_EXPONENT", default_value_t = 1.0)]
    pub exponent: f64,

    /// Carrier density (1/m^3); enables effective-mass extraction
    #[arg(short = 'n', long)]
    pub carrier_density: Option<f64>,

    /// Iteration cap of each minimization
    #[arg(long, default_value_t = 1000)]
    pub max_iterations: usize,
}
