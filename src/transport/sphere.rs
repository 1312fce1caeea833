//! # 球形能谷 (抛物带) 模型
//!
//! 单一各向同性抛物带的态密度、载流子浓度、电导率和 Seebeck 系数。
//! 散射指数隐含为 s = 1（形变势散射）。
//!
//! 质量参数均为绝对质量 (kg)，即 m* · m_e。
//!
//! ## 依赖关系
//! - 被 `transport/extract.rs`, `commands/model.rs` 使用
//! - 使用 `transport/fermi.rs`, `transport/constants.rs`

use crate::transport::constants::{E, H, HBAR, K_B, K_OVER_E, PI};
use crate::transport::fermi::fermi_dirac;

/// 态密度 (1/(J m^3))，`energy` 为相对带边的能量 (J)
pub fn dos(mass: f64, energy: f64) -> f64 {
    (2.0 * mass).powf(1.5) * energy.sqrt() / (2.0 * PI * PI * HBAR.powi(3))
}

/// 载流子浓度 (1/m^3)
pub fn carriers(cp: f64, temperature: f64, mass: f64) -> Option<f64> {
    let prefactor = 4.0 * PI * (2.0 * mass * K_B * temperature / (H * H)).powf(1.5);
    fermi_dirac(0.5, cp).map(|f| f * prefactor)
}

/// 电导率 (S/m)，`tau_0` 为弛豫时间前因子 (s)
pub fn conductivity(cp: f64, temperature: f64, tau_0: f64, mass: f64) -> Option<f64> {
    let prefactor = tau_0 * 8.0 * PI * mass.sqrt() * E * E * (2.0 * K_B * temperature).powf(1.5)
        / 3.0
        / H.powi(3);
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
/// 定义域错误时返回 0：这会把无效 cp 处的 Seebeck 残差偏向 |S_measured|，
/// 使外层极小化远离该区域而不是中断。
pub fn seebeck(cp: f64) -> f64 {
    try_seebeck(cp).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::constants::M_E;
    use crate::transport::powerlaw;

    #[test]
    fn test_seebeck_matches_powerlaw_s_one() {
        for &cp in &[-3.0, 0.0, 2.0, 8.0] {
            let pocket = seebeck(cp);
            let general = powerlaw::seebeck(cp, 1.0).unwrap();
            assert!((pocket - general).abs() < 1e-15, "cp = {}", cp);
        }
    }

    #[test]
    fn test_seebeck_domain_error_returns_zero() {
        assert!(try_seebeck(-800.0).is_none());
        assert_eq!(seebeck(-800.0), 0.0);
        assert_eq!(seebeck(f64::NAN), 0.0);
    }

    #[test]
    fn test_carriers_nondegenerate_limit() {
        // n → 2 (2π m k T / h²)^{3/2} e^cp
        let temperature = 300.0;
        let mass = M_E;
        let cp = -10.0;
        let n = carriers(cp, temperature, mass).unwrap();
        let nc = 2.0 * (2.0 * PI * mass * K_B * temperature / (H * H)).powf(1.5);
        assert!((n / (nc * cp.exp()) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_carriers_scale_with_mass() {
        let light = carriers(0.0, 300.0, M_E).unwrap();
        let heavy = carriers(0.0, 300.0, 4.0 * M_E).unwrap();
        assert!((heavy / light - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_dos_positive_above_band_edge() {
        assert!(dos(M_E, 1.0e-20) > 0.0);
        assert_eq!(dos(M_E, 0.0), 0.0);
    }

    #[test]
    fn test_conductivity_is_linear_in_tau() {
        let one = conductivity(1.0, 300.0, 1e-14, M_E).unwrap();
        let two = conductivity(1.0, 300.0, 2e-14, M_E).unwrap();
        assert!((two / one - 2.0).abs() < 1e-12);
    }
}
