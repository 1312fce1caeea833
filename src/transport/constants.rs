//! # 物理常数
//!
//! 模型函数使用的固定物理常数 (SI 单位)。
//!
//! ## 依赖关系
//! - 被 `transport/` 下所有模型函数使用
//! - 无外部模块依赖

/// 元电荷 (C)
pub const E: f64 = 1.60217662e-19;

/// Boltzmann 常数 (J/K)
pub const K_B: f64 = 1.38064852e-23;

/// 自由电子质量 (kg)
pub const M_E: f64 = 9.10938356e-31;

/// Planck 常数 (J s)
pub const H: f64 = 6.62607004e-34;

/// 约化 Planck 常数 (J s)
pub const HBAR: f64 = 1.054571800e-34;

/// 圆周率
pub const PI: f64 = std::f64::consts::PI;

/// k/e (V/K)，Seebeck 系数的自然单位
pub const K_OVER_E: f64 = K_B / E;
