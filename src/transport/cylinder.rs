//! # 圆柱形能谷模型
//!
//! 准二维（圆柱形 Fermi 面）能谷的态密度、载流子浓度、电导率和 Seebeck 系数。
//! `l` 为圆柱几何的倒长度因子 (1/m)，质量参数为绝对质量 (kg)。
//!
//! ## 依赖关系
//! - 被 `commands/model.rs` 使用
//! - 使用 `transport/fermi.rs`, `transport/constants.rs`

use crate::transport::constants::{E, HBAR, K_B, K_OVER_E, PI};
use crate::transport::fermi::fermi_dirac;

/// 态密度 (1/(J m^3))，与能量无关
pub fn dos(mass: f64, l: f64) -> f64 {
    l * mass / (4.0 * PI * PI * HBAR * HBAR)
}

/// 载流子浓度 (1/m^3)
pub fn carriers(cp: f64, temperature: f64, mass: f64, l: f64) -> Option<f64> {
    let prefactor = l * mass / 2.0 / (PI * PI) / (HBAR * HBAR) * K_B * temperature;
    fermi_dirac(0.0, cp).map(|f| f * prefactor)
}

/// 电导率 (S/m)，`tau_0` 为弛豫时间前因子 (s)
pub fn conductivity(cp: f64, temperature: f64, tau_0: f64, l: f64) -> Option<f64> {
    let prefactor = E * E * l / 2.0 / (PI * PI) / (HBAR * HBAR) * K_B * temperature * tau_0;
    fermi_dirac(0.0, cp).map(|f| f * prefactor)
}

/// Seebeck 系数 (V/K)，定义域错误时返回 `None`
pub fn try_seebeck(cp: f64) -> Option<f64> {
    let f1 = fermi_dirac(1.0, cp)?;
    let f0 = fermi_dirac(0.0, cp)?;
    let value = K_OVER_E * (2.0 * f1 / f0 - cp);
    value.is_finite().then_some(value)
}

/// Seebeck 系数 (V/K)
///
/// 定义域错误时返回 0，与 `sphere::seebeck` 相同：
/// 无效 cp 处的残差偏向 |S_measured|，极小化会离开该区域。
pub fn seebeck(cp: f64) -> f64 {
    try_seebeck(cp).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::constants::M_E;

    #[test]
    fn test_carriers_equal_dos_times_thermal_occupation() {
        // n = 2 · g · kT · F_0(cp)
        let mass = 0.5 * M_E;
        let l = 1.0e9;
        let temperature = 200.0;
        let cp = 1.2;
        let n = carriers(cp, temperature, mass, l).unwrap();
        let expected =
            2.0 * dos(mass, l) * K_B * temperature * fermi_dirac(0.0, cp).unwrap();
        assert!((n - expected).abs() / expected < 1e-12);
    }

    #[test]
    fn test_seebeck_domain_error_returns_zero() {
        assert_eq!(seebeck(-800.0), 0.0);
        assert!(try_seebeck(0.0).is_some());
    }

    #[test]
    fn test_degenerate_seebeck_is_small() {
        // 简并极限：S → (π²/3)(k/e)/cp
        let cp = 60.0;
        let expected = PI * PI / 3.0 * K_OVER_E / cp;
        assert!((seebeck(cp) - expected).abs() / expected < 1e-6);
    }
}
