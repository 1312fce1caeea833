//! # 幂律输运函数模型
//!
//! 假设输运函数为能量的幂律 σ_E(E) = σ_E0 · (E/kT)^s，
//! 由 Fermi-Dirac 积分给出电导率和 Seebeck 系数。
//! 模型参考: <https://www.nature.com/articles/nmat4784>
//!
//! ## 模型变量
//! - `cp`: 约化化学势 μ/kT（无量纲）
//! - `s`: 输运函数指数（无量纲），表征散射机制
//! - `sigma_e0`: 输运函数前因子（S/m）
//!
//! s = 0 时通用公式存在可去奇点，使用解析化简形式。
//! 返回 `None` 表示特殊函数定义域错误（如 s < 0 时 F_{s-1} 发散）。
//!
//! ## 依赖关系
//! - 被 `transport/extract.rs`, `commands/model.rs` 使用
//! - 使用 `transport/fermi.rs`

use crate::transport::constants::K_OVER_E;
use crate::transport::fermi::fermi_dirac;

/// 电导率 (S/m)
pub fn conductivity(cp: f64, s: f64, sigma_e0: f64) -> Option<f64> {
    if s == 0.0 {
        return Some(sigma_e0 / (1.0 + (-cp).exp()));
    }
    fermi_dirac(s - 1.0, cp).map(|f| sigma_e0 * s * f)
}

/// Seebeck 系数 (V/K)
pub fn seebeck(cp: f64, s: f64) -> Option<f64> {
    let value = if s == 0.0 {
        let f0 = fermi_dirac(0.0, cp)?;
        K_OVER_E * ((1.0 + (-cp).exp()) * f0 - cp)
    } else {
        let upper = fermi_dirac(s, cp)?;
        let lower = fermi_dirac(s - 1.0, cp)?;
        K_OVER_E * ((s + 1.0) * upper / s / lower - cp)
    };

    value.is_finite().then_some(value)
}

/// 在一组约化化学势上计算电导率
pub fn conductivity_curve(cps: &[f64], s: f64, sigma_e0: f64) -> Vec<Option<f64>> {
    cps.iter().map(|&cp| conductivity(cp, s, sigma_e0)).collect()
}

/// 在一组约化化学势上计算 Seebeck 系数
pub fn seebeck_curve(cps: &[f64], s: f64) -> Vec<Option<f64>> {
    cps.iter().map(|&cp| seebeck(cp, s)).collect()
}
