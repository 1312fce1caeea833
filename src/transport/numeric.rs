//! # 数值输运函数模型
//!
//! 对任意表格化的输运函数 σ_E(E) 以 Fermi-Dirac 权重做数值积分，
//! 得到给定化学势和温度下的电导率与 Seebeck 系数：
//!
//! ```text
//! σ  = ∫ σ_E (-∂f/∂E) dE
//! ν  = ∫ (k/e) σ_E (-∂f/∂E) (E - μ)/kT dE
//! S  = ν / σ
//! ```
//!
//! 能量与化学势单位为 eV，σ_E 单位为 S/m。积分使用梯形公式。
//!
//! ## 依赖关系
//! - 被 `commands/model.rs` 使用（表格由 `parsers/table.rs` 读取）
//! - 使用 `transport/constants.rs`

use crate::error::{Result, TransportError};
use crate::transport::constants::{E, K_B, K_OVER_E};

/// 表格化输运函数 σ_E(E)
#[derive(Debug, Clone)]
pub struct TransportTable {
    /// 能量网格 (eV)，升序
    energy: Vec<f64>,
    /// 输运函数 (S/m)
    sigma_e: Vec<f64>,
}

impl TransportTable {
    /// 从 (能量, σ_E) 点创建，自动按能量排序
    pub fn new(points: Vec<(f64, f64)>) -> Result<Self> {
        if points.len() < 2 {
            return Err(TransportError::InvalidArgument(format!(
                "transport table needs at least 2 points, got {}",
                points.len()
            )));
        }
        if points.iter().any(|(e, s)| !e.is_finite() || !s.is_finite()) {
            return Err(TransportError::InvalidArgument(
                "transport table contains non-finite values".to_string(),
            ));
        }

        let mut points = points;
        points.sort_by(|a, b| a.0.total_cmp(&b.0));
        let (energy, sigma_e) = points.into_iter().unzip();

        Ok(TransportTable { energy, sigma_e })
    }

    /// 表格点数
    pub fn len(&self) -> usize {
        self.energy.len()
    }

    /// 能量范围 (eV)
    pub fn energy_range(&self) -> (f64, f64) {
        (self.energy[0], self.energy[self.energy.len() - 1])
    }

    /// 电导率 (S/m)
    pub fn conductivity(&self, mu: f64, temperature: f64) -> f64 {
        let beta = thermal_beta(temperature);
        let integrand: Vec<f64> = self
            .energy
            .iter()
            .zip(&self.sigma_e)
            .map(|(&e, &s)| s * fermi_window(beta * (e - mu), beta))
            .collect();
        trapezoid(&self.energy, &integrand)
    }

    /// 温度梯度输运系数 ν (A/(m K))
    pub fn nu(&self, mu: f64, temperature: f64) -> f64 {
        let beta = thermal_beta(temperature);
        let integrand: Vec<f64> = self
            .energy
            .iter()
            .zip(&self.sigma_e)
            .map(|(&e, &s)| {
                let z = beta * (e - mu);
                K_OVER_E * s * fermi_window(z, beta) * z
            })
            .collect();
        trapezoid(&self.energy, &integrand)
    }

    /// Seebeck 系数 (V/K)，电导率为 0 时返回 `None`
    pub fn seebeck(&self, mu: f64, temperature: f64) -> Option<f64> {
        let sigma = self.conductivity(mu, temperature);
        let value = self.nu(mu, temperature) / sigma;
        (sigma != 0.0 && value.is_finite()).then_some(value)
    }
}

/// 1/kT (1/eV)
fn thermal_beta(temperature: f64) -> f64 {
    E / (K_B * temperature)
}

/// -∂f/∂E (1/eV)，z = β(E - μ)；对 z 对称，取 |z| 保证数值稳定
fn fermi_window(z: f64, beta: f64) -> f64 {
    let a = (-z.abs()).exp();
    beta * a / ((1.0 + a) * (1.0 + a))
}

/// 梯形积分
fn trapezoid(x: &[f64], y: &[f64]) -> f64 {
    x.windows(2)
        .zip(y.windows(2))
        .map(|(xs, ys)| 0.5 * (xs[1] - xs[0]) * (ys[0] + ys[1]))
        .sum()
}
