//! # 输运参数提取
//!
//! 由单个测量点 (Seebeck, 电导率, 温度) 反解模型参数。
//!
//! ## 算法概述
//! 1. 以 cp = 0 为起点极小化 |S_model(cp) - |S_measured||，得到约化化学势 cp*
//! 2. 固定 cp*，以 0 为起点极小化第二个残差，得到 σ_E0（或有效质量 m*）
//!
//! 两步均使用 `transport/optimize.rs` 的一维 Nelder-Mead，不需要导数。
//! 测量 Seebeck 始终取绝对值（模型不区分载流子类型）。
//! 未收敛时返回找到的最优点，并通过 `converged` 标记。
//! 收敛要求两步都满足单纯形宽度判据，且残差低于起点处的残差；
//! 目标函数在起点附近平坦（例如 cp* 极深时电导率下溢）时视为未收敛。
//!
//! ## 依赖关系
//! - 被 `models/sample.rs`, `models/series.rs`, `commands/extract.rs` 使用
//! - 使用 `transport/powerlaw.rs`, `transport/sphere.rs`, `transport/optimize.rs`

use crate::error::{Result, TransportError};
use crate::transport::constants::M_E;
use crate::transport::optimize::{minimize_scalar, Minimum, MinimizerOptions};
use crate::transport::{powerlaw, sphere};

/// 输运函数提取结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransportFit {
    /// 约化化学势 cp*
    pub reduced_chemical_potential: f64,
    /// 输运函数前因子 σ_E0 (S/m)
    pub sigma_e0: f64,
    /// 两步极小化是否都收敛且残差下降
    pub converged: bool,
}

/// 有效质量提取结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassFit {
    /// 约化化学势 cp*
    pub reduced_chemical_potential: f64,
    /// 有效质量 (m_e)
    pub effective_mass: f64,
    /// 两步极小化是否都收敛
    pub converged: bool,
}

/// 参数提取器
#[derive(Debug, Clone, Copy, Default)]
pub struct Extractor {
    options: MinimizerOptions,
}

impl Extractor {
    /// 使用指定的极小化配置创建提取器
    pub fn new(options: MinimizerOptions) -> Self {
        Self { options }
    }

    /// 极小化配置
    pub fn options(&self) -> &MinimizerOptions {
        &self.options
    }

    /// 提取输运函数前因子 σ_E0
    ///
    /// `temperature` 不进入幂律模型（约化化学势与温度无关），仅做有效性检查。
    pub fn fit_transport_function(
        &self,
        seebeck: f64,
        conductivity: f64,
        temperature: f64,
        s: f64,
    ) -> Result<TransportFit> {
        check_finite("Seebeck coefficient", seebeck)?;
        check_finite("conductivity", conductivity)?;
        check_temperature(temperature)?;
        if !s.is_finite() || s < 0.0 {
            return Err(TransportError::InvalidExponent(s));
        }

        let target = seebeck.abs();
        let seebeck_residual = |cp: f64| residual(powerlaw::seebeck(cp, s), target);
        let cp = minimize_scalar(seebeck_residual, 0.0, &self.options);

        let conductivity_residual =
            |sigma_e0: f64| residual(powerlaw::conductivity(cp.x, s, sigma_e0), conductivity);
        let sigma = minimize_scalar(conductivity_residual, 0.0, &self.options);

        Ok(TransportFit {
            reduced_chemical_potential: cp.x,
            sigma_e0: sigma.x,
            converged: fitted(&cp, seebeck_residual(0.0))
                && fitted(&sigma, conductivity_residual(0.0)),
        })
    }

    /// 提取球形能谷的有效质量 (m_e)，散射指数隐含 s = 1
    pub fn fit_effective_mass(
        &self,
        seebeck: f64,
        carrier_density: f64,
        temperature: f64,
    ) -> Result<MassFit> {
        check_finite("Seebeck coefficient", seebeck)?;
        check_temperature(temperature)?;
        if !carrier_density.is_finite() || carrier_density <= 0.0 {
            return Err(TransportError::InvalidArgument(format!(
                "carrier density must be positive, got {}",
                carrier_density
            )));
        }

        let target = seebeck.abs();
        let seebeck_residual = |cp: f64| (sphere::seebeck(cp) - target).abs();
        let cp = minimize_scalar(seebeck_residual, 0.0, &self.options);

        let density_residual = |mass: f64| {
            residual(sphere::carriers(cp.x, temperature, mass * M_E), carrier_density)
        };
        let mass = minimize_scalar(density_residual, 0.0, &self.options);

        Ok(MassFit {
            reduced_chemical_potential: cp.x,
            effective_mass: mass.x,
            converged: fitted(&cp, seebeck_residual(0.0))
                && fitted(&mass, density_residual(0.0)),
        })
    }
}

/// 提取输运函数前因子 σ_E0 (S/m)
pub fn extract_transport_function(
    seebeck: f64,
    conductivity: f64,
    temperature: f64,
    s: f64,
) -> Result<f64> {
    Extractor::default()
        .fit_transport_function(seebeck, conductivity, temperature, s)
        .map(|fit| fit.sigma_e0)
}

/// 提取有效质量 (m_e)
pub fn extract_effective_mass(seebeck: f64, carrier_density: f64, temperature: f64) -> Result<f64> {
    Extractor::default()
        .fit_effective_mass(seebeck, carrier_density, temperature)
        .map(|fit| fit.effective_mass)
}

/// 绝对残差；模型定义域错误视为无穷大
fn residual(model: Option<f64>, measured: f64) -> f64 {
    model.map_or(f64::INFINITY, |value| (value - measured).abs())
}

/// 满足宽度判据，且残差低于起点残差（或已精确为 0）
fn fitted(minimum: &Minimum, start_residual: f64) -> bool {
    minimum.converged && (minimum.fx < start_residual || minimum.fx == 0.0)
}

fn check_finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(TransportError::InvalidArgument(format!(
            "{} must be finite, got {}",
            name, value
        )))
    }
}

fn check_temperature(temperature: f64) -> Result<()> {
    if temperature.is_finite() && temperature > 0.0 {
        Ok(())
    } else {
        Err(TransportError::InvalidArgument(format!(
            "temperature must be positive, got {} K",
            temperature
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_recovers_model_parameters() {
        let extractor = Extractor::default();
        for &s in &[0.0, 0.5, 1.0, 1.5, 2.0] {
            for &cp_true in &[-4.0, -1.0, 0.0, 1.5, 5.0] {
                for &sigma_true in &[1.0e3, 5.0e4, 2.0e6] {
                    let seebeck = powerlaw::seebeck(cp_true, s).unwrap();
                    let conductivity = powerlaw::conductivity(cp_true, s, sigma_true).unwrap();

                    let fit = extractor
                        .fit_transport_function(seebeck, conductivity, 300.0, s)
                        .unwrap();

                    assert!(fit.converged);
                    assert!(
                        (fit.reduced_chemical_potential - cp_true).abs() < 1e-3,
                        "s={} cp={} sigma={}: cp* = {}",
                        s,
                        cp_true,
                        sigma_true,
                        fit.reduced_chemical_potential
                    );
                    assert!(
                        (fit.sigma_e0 - sigma_true).abs() / sigma_true < 1e-3,
                        "s={} cp={} sigma={}: sigma* = {}",
                        s,
                        cp_true,
                        sigma_true,
                        fit.sigma_e0
                    );
                }
            }
        }
    }

    #[test]
    fn test_seebeck_sign_is_ignored() {
        let s = 1.0;
        let seebeck = powerlaw::seebeck(0.7, s).unwrap();
        let conductivity = powerlaw::conductivity(0.7, s, 4.0e4).unwrap();

        let positive = extract_transport_function(seebeck, conductivity, 300.0, s).unwrap();
        let negative = extract_transport_function(-seebeck, conductivity, 300.0, s).unwrap();
        assert_eq!(positive, negative);
    }

    #[test]
    fn test_temperature_does_not_change_prefactor() {
        let seebeck = 2.0e-4;
        let conductivity = 3.0e4;
        let low = extract_transport_function(seebeck, conductivity, 100.0, 1.0).unwrap();
        let high = extract_transport_function(seebeck, conductivity, 800.0, 1.0).unwrap();
        assert_eq!(low, high);
    }

    #[test]
    fn test_effective_mass_round_trip() {
        let temperature = 300.0;
        for &mass_true in &[0.3, 1.0, 2.5] {
            for &cp_true in &[-2.0, 0.5, 3.0] {
                let seebeck = sphere::seebeck(cp_true);
                let density = sphere::carriers(cp_true, temperature, mass_true * M_E).unwrap();

                let fit = Extractor::default()
                    .fit_effective_mass(-seebeck, density, temperature)
                    .unwrap();
                assert!(
                    (fit.effective_mass - mass_true).abs() / mass_true < 1e-3,
                    "m={} cp={}: m* = {}",
                    mass_true,
                    cp_true,
                    fit.effective_mass
                );
            }
        }
    }

    #[test]
    fn test_invalid_inputs_are_rejected() {
        assert!(matches!(
            extract_transport_function(2e-4, 1e4, 300.0, -1.0),
            Err(TransportError::InvalidExponent(_))
        ));
        assert!(matches!(
            extract_transport_function(2e-4, 1e4, 300.0, f64::NAN),
            Err(TransportError::InvalidExponent(_))
        ));
        assert!(extract_transport_function(f64::NAN, 1e4, 300.0, 1.0).is_err());
        assert!(extract_transport_function(2e-4, 1e4, 0.0, 1.0).is_err());
        assert!(extract_effective_mass(2e-4, -1e25, 300.0).is_err());
    }

    #[test]
    fn test_vanishing_seebeck_returns_quickly() {
        // S → 0 把 cp* 推向极大值，每次 F_k 求值的代价须保持有界
        let start = std::time::Instant::now();
        for &seebeck in &[0.0, 1.0e-9] {
            let fit = Extractor::default()
                .fit_transport_function(seebeck, 1.0e4, 300.0, 1.0)
                .unwrap();
            assert!(fit.reduced_chemical_potential.is_finite(), "S = {}", seebeck);
            assert!(fit.reduced_chemical_potential > 0.0, "S = {}", seebeck);
            assert!(fit.sigma_e0.is_finite(), "S = {}", seebeck);
        }
        assert!(start.elapsed().as_secs() < 30);
    }

    #[test]
    fn test_flat_conductivity_residual_is_not_converged() {
        // S = 50 mV/K 对应 cp* ≈ -578，σ_E0 的任何有限步长都不改变电导率残差
        let fit = Extractor::default()
            .fit_transport_function(5.0e-2, 1.0e4, 300.0, 1.0)
            .unwrap();
        assert!(fit.reduced_chemical_potential < -500.0);
        assert!(!fit.converged);
    }

    #[test]
    fn test_iteration_cap_reports_non_convergence() {
        let extractor = Extractor::new(MinimizerOptions {
            max_iterations: 2,
            ..MinimizerOptions::default()
        });
        let fit = extractor
            .fit_transport_function(2.0e-4, 3.0e4, 300.0, 1.0)
            .unwrap();
        assert!(!fit.converged);
        assert!(fit.sigma_e0.is_finite());
    }
}
