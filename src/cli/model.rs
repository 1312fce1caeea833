//! # model 子命令 CLI 定义
//!
//! 在约化化学势网格上计算正向模型的 Seebeck 系数、电导率与载流子浓度。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/model.rs`

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 模型几何
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum Geometry {
    /// Power-law transport function sigma_E0 * (E/kT)^s
    Powerlaw,
    /// Spherical (isotropic parabolic) pocket
    Sphere,
    /// Cylindrical (quasi-2D) pocket
    Cylinder,
    /// Tabulated transport function read from a file (energy eV, sigma_E S/m)
    Numeric,
}

impl std::fmt::Display for Geometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Geometry::Powerlaw => write!(f, "powerlaw"),
            Geometry::Sphere => write!(f, "sphere"),
            Geometry::Cylinder => write!(f, "cylinder"),
            Geometry::Numeric => write!(f, "numeric"),
        }
    }
}

/// model 子命令参数
#[derive(Args, Debug)]
pub struct ModelArgs {
    /// Band geometry of the model
    #[arg(short, long, value_enum, default_value = "powerlaw")]
    pub geometry: Geometry,

    /// Lower end of the reduced chemical potential grid
    #[arg(long, default_value_t = -5.0, allow_hyphen_values = true)]
    pub cp_min: f64,

    /// Upper end of the reduced chemical potential grid
    #[arg(long, default_value_t = 5.0, allow_hyphen_values = true)]
    pub cp_max: f64,

    /// Number of grid points
    #[arg(short, long, default_value_t = 11)]
    pub points: usize,

    /// Temperature (K)
    #[arg(short, long, default_value_t = 300.0)]
    pub temperature: f64,

    // ─────────────────────────────────────────────────────────────
    // powerlaw
    // ─────────────────────────────────────────────────────────────
    /// Energy exponent s (powerlaw)
    #[arg(short = 's', long = "exponent", env = "SEMITRANSPORT_EXPONENT", default_value_t = 1.0)]
    pub exponent: f64,

    /// Transport function prefactor sigma_E0 in S/m (powerlaw)
    #[arg(long, default_value_t = 1.0e4)]
    pub sigma_e0: f64,

    // ─────────────────────────────────────────────────────────────
    // sphere / cylinder
    // ─────────────────────────────────────────────────────────────
    /// Effective mass in units of the electron mass (sphere, cylinder)
    #[arg(short, long, default_value_t = 1.0)]
    pub mass: f64,

    /// Relaxation-time prefactor tau_0 in s (sphere, cylinder)
    #[arg(long, default_value_t = 1.0e-14)]
    pub tau: f64,

    /// Inverse length factor of the cylinder geometry in 1/m (cylinder)
    #[arg(long, default_value_t = 1.0e9)]
    pub inverse_length: f64,

    // ─────────────────────────────────────────────────────────────
    // numeric
    // ─────────────────────────────────────────────────────────────
    /// Two-column table of energy (eV) and sigma_E (S/m) (numeric)
    #[arg(long)]
    pub table: Option<PathBuf>,

    /// Write the grid to a CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
