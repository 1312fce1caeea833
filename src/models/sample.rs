//! # 单样品实验数据模型
//!
//! 一个样品拥有按温度排序的电导率曲线和 Seebeck 曲线（测量温度可以不同），
//! 以及可选的已知载流子浓度。
//!
//! ## 功能
//! - 两条曲线温度范围的交集（温度窗口）
//! - 窗口内线性插值，使两条曲线落在同一温度网格上
//! - 逐温度点提取 σ_E0（已知载流子浓度时同时提取有效质量）
//!
//! ## 依赖关系
//! - 被 `models/series.rs`, `parsers/sample.rs`, `commands/analyze/` 使用
//! - 使用 `transport/extract.rs`, `utils/interp.rs`

use crate::error::{Result, TransportError};
use crate::parsers;
use crate::transport::Extractor;
use crate::utils::interp::{interp, linspace};

use std::path::Path;

/// 单个样品的实验输运数据
#[derive(Debug, Clone)]
pub struct Sample {
    /// 样品名称（唯一标识）
    pub name: String,

    /// 电导率数据 (温度 K, 电导率 S/m)，按温度升序
    conductivity: Vec<(f64, f64)>,

    /// Seebeck 数据 (温度 K, Seebeck V/K)，按温度升序
    seebeck: Vec<(f64, f64)>,

    /// 载流子浓度 (1/m^3)
    pub carrier_density: Option<f64>,
}

/// 温度窗口内的插值数据
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolatedData {
    pub temperatures: Vec<f64>,
    pub seebecks: Vec<f64>,
    pub conductivities: Vec<f64>,
}

/// 单样品温度分析结果
#[derive(Debug, Clone)]
pub struct TemperatureAnalysis {
    /// 样品名称
    pub sample: String,
    /// 温度 (K)
    pub temperatures: Vec<f64>,
    /// 约化化学势 cp*
    pub reduced_chemical_potentials: Vec<f64>,
    /// 输运函数前因子 σ_E0 (S/m)
    pub transport_functions: Vec<f64>,
    /// 有效质量 (m_e)，仅在载流子浓度已知时计算
    pub effective_masses: Option<Vec<f64>>,
    /// 未收敛的提取次数
    pub unconverged: usize,
}

impl TemperatureAnalysis {
    /// σ_E0 的相对离散度 (max - min) / mean
    ///
    /// 值越大说明单带、单一散射机制的假设越不适用。
    pub fn prefactor_spread(&self) -> Option<f64> {
        spread(&self.transport_functions)
    }
}

impl Sample {
    /// 创建样品，曲线按温度排序
    pub fn new(
        name: impl Into<String>,
        conductivity: Vec<(f64, f64)>,
        seebeck: Vec<(f64, f64)>,
        carrier_density: Option<f64>,
    ) -> Result<Self> {
        let name = name.into();

        let conductivity = normalize_trace(&name, "conductivity", conductivity)?;
        let seebeck = normalize_trace(&name, "Seebeck", seebeck)?;

        if let Some(n) = carrier_density {
            if !n.is_finite() || n <= 0.0 {
                return Err(TransportError::InvalidArgument(format!(
                    "Sample '{}': carrier density must be positive, got {}",
                    name, n
                )));
            }
        }

        Ok(Sample {
            name,
            conductivity,
            seebeck,
            carrier_density,
        })
    }

    /// 从 `{name}_conductivity.csv` / `{name}_seebeck.csv` 读取样品
    pub fn from_csv(name: &str, dir: &Path, carrier_density: Option<f64>) -> Result<Self> {
        parsers::sample::load_sample(name, dir, carrier_density)
    }

    /// 电导率数据 (K, S/m)
    pub fn conductivity(&self) -> &[(f64, f64)] {
        &self.conductivity
    }

    /// Seebeck 数据 (K, V/K)
    pub fn seebeck(&self) -> &[(f64, f64)] {
        &self.seebeck
    }

    /// 电导率与 Seebeck 温度范围的交集 (T_min, T_max)
    pub fn temperature_window(&self) -> Result<(f64, f64)> {
        let (cond_min, cond_max) = bounds(&self.conductivity);
        let (seeb_min, seeb_max) = bounds(&self.seebeck);

        let min = cond_min.max(seeb_min);
        let max = cond_max.min(seeb_max);

        if min > max {
            return Err(TransportError::NoTemperatureOverlap {
                sample: self.name.clone(),
                min,
                max,
            });
        }

        Ok((min, max))
    }

    /// 在窗口内某一温度插值 (Seebeck, 电导率)
    pub fn interpolate_at(&self, temperature: f64) -> Result<(f64, f64)> {
        let (min, max) = self.temperature_window()?;
        if !(min..=max).contains(&temperature) {
            return Err(TransportError::TemperatureOutsideWindow {
                sample: self.name.clone(),
                temperature,
                max,
                min,
            });
        }

        Ok((
            interp_trace(&self.seebeck, temperature),
            interp_trace(&self.conductivity, temperature),
        ))
    }

    /// 在温度窗口内取 n 个等距温度并插值两条曲线
    pub fn get_interpolated_data(&self, n_temperatures: usize) -> Result<InterpolatedData> {
        if n_temperatures == 0 {
            return Err(TransportError::InvalidArgument(
                "number of interpolated temperatures must be at least 1".to_string(),
            ));
        }

        let (t_min, t_max) = self.temperature_window()?;
        let temperatures = linspace(t_min, t_max, n_temperatures);

        let seebecks = temperatures
            .iter()
            .map(|&t| interp_trace(&self.seebeck, t))
            .collect();
        let conductivities = temperatures
            .iter()
            .map(|&t| interp_trace(&self.conductivity, t))
            .collect();

        Ok(InterpolatedData {
            temperatures,
            seebecks,
            conductivities,
        })
    }

    /// 温度分析：逐温度点提取 σ_E0（及有效质量）
    pub fn extract_transport_coefficients(
        &self,
        n_temperatures: usize,
        s: f64,
    ) -> Result<TemperatureAnalysis> {
        self.extract_transport_coefficients_with(&Extractor::default(), n_temperatures, s)
    }

    /// 同 `extract_transport_coefficients`，使用指定的提取器
    pub fn extract_transport_coefficients_with(
        &self,
        extractor: &Extractor,
        n_temperatures: usize,
        s: f64,
    ) -> Result<TemperatureAnalysis> {
        let data = self.get_interpolated_data(n_temperatures)?;

        let mut unconverged = 0;
        let mut reduced_chemical_potentials = Vec::with_capacity(data.temperatures.len());
        let mut transport_functions = Vec::with_capacity(data.temperatures.len());

        for ((&seebeck, &conductivity), &temperature) in data
            .seebecks
            .iter()
            .zip(&data.conductivities)
            .zip(&data.temperatures)
        {
            let fit = extractor.fit_transport_function(seebeck, conductivity, temperature, s)?;
            if !fit.converged {
                unconverged += 1;
            }
            reduced_chemical_potentials.push(fit.reduced_chemical_potential);
            transport_functions.push(fit.sigma_e0);
        }

        let effective_masses = match self.carrier_density {
            Some(density) => {
                let mut masses = Vec::with_capacity(data.temperatures.len());
                for (&seebeck, &temperature) in data.seebecks.iter().zip(&data.temperatures) {
                    let fit = extractor.fit_effective_mass(seebeck, density, temperature)?;
                    if !fit.converged {
                        unconverged += 1;
                    }
                    masses.push(fit.effective_mass);
                }
                Some(masses)
            }
            None => None,
        };

        Ok(TemperatureAnalysis {
            sample: self.name.clone(),
            temperatures: data.temperatures,
            reduced_chemical_potentials,
            transport_functions,
            effective_masses,
            unconverged,
        })
    }
}

/// 对原始数据列表逐点提取 σ_E0 (S/m)
pub fn temperature_analysis(
    seebecks: &[f64],
    conductivities: &[f64],
    temperatures: &[f64],
    s: f64,
) -> Result<Vec<f64>> {
    check_lengths("Seebeck vs conductivity", seebecks, conductivities)?;
    check_lengths("Seebeck vs temperature", seebecks, temperatures)?;

    let extractor = Extractor::default();
    seebecks
        .iter()
        .zip(conductivities)
        .zip(temperatures)
        .map(|((&seebeck, &conductivity), &temperature)| {
            extractor
                .fit_transport_function(seebeck, conductivity, temperature, s)
                .map(|fit| fit.sigma_e0)
        })
        .collect()
}

pub(crate) fn check_lengths(what: &str, left: &[f64], right: &[f64]) -> Result<()> {
    if left.len() != right.len() {
        return Err(TransportError::LengthMismatch {
            what: what.to_string(),
            left: left.len(),
            right: right.len(),
        });
    }
    Ok(())
}

/// (max - min) / mean，空列表或均值为 0 时返回 `None`
pub(crate) fn spread(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    if mean == 0.0 {
        None
    } else {
        Some((max - min) / mean.abs())
    }
}

/// 校验并按温度排序一条曲线
fn normalize_trace(
    sample: &str,
    property: &str,
    mut trace: Vec<(f64, f64)>,
) -> Result<Vec<(f64, f64)>> {
    if trace.is_empty() {
        return Err(TransportError::EmptyTrace {
            sample: sample.to_string(),
            property: property.to_string(),
        });
    }
    if trace.iter().any(|(t, v)| !t.is_finite() || !v.is_finite()) {
        return Err(TransportError::InvalidArgument(format!(
            "Sample '{}': {} data contains non-finite values",
            sample, property
        )));
    }

    trace.sort_by(|a, b| a.0.total_cmp(&b.0));
    Ok(trace)
}

/// 已排序曲线的温度范围
fn bounds(trace: &[(f64, f64)]) -> (f64, f64) {
    (trace[0].0, trace[trace.len() - 1].0)
}

fn interp_trace(trace: &[(f64, f64)], temperature: f64) -> f64 {
    let (xp, fp): (Vec<f64>, Vec<f64>) = trace.iter().copied().unzip();
    interp(temperature, &xp, &fp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::powerlaw;

    fn trace(temperatures: &[f64], f: impl Fn(f64) -> f64) -> Vec<(f64, f64)> {
        temperatures.iter().map(|&t| (t, f(t))).collect()
    }

    #[test]
    fn test_temperature_window() {
        let sample = Sample::new(
            "A",
            trace(&[100.0, 200.0, 300.0], |_| 1.0e4),
            trace(&[150.0, 250.0, 350.0], |_| 2.0e-4),
            None,
        )
        .unwrap();
        assert_eq!(sample.temperature_window().unwrap(), (150.0, 300.0));
    }

    #[test]
    fn test_traces_are_sorted() {
        let sample = Sample::new(
            "B",
            vec![(300.0, 3.0), (100.0, 1.0), (200.0, 2.0)],
            vec![(250.0, 2.5e-4), (150.0, 1.5e-4)],
            None,
        )
        .unwrap();
        let temps: Vec<f64> = sample.conductivity().iter().map(|p| p.0).collect();
        assert_eq!(temps, vec![100.0, 200.0, 300.0]);
        assert_eq!(sample.seebeck()[0], (150.0, 1.5e-4));
    }

    #[test]
    fn test_no_overlap_is_an_error() {
        let sample = Sample::new(
            "C",
            trace(&[100.0, 200.0], |_| 1.0e4),
            trace(&[250.0, 350.0], |_| 2.0e-4),
            None,
        )
        .unwrap();
        assert!(matches!(
            sample.temperature_window(),
            Err(TransportError::NoTemperatureOverlap { .. })
        ));
        assert!(sample.get_interpolated_data(5).is_err());
    }

    #[test]
    fn test_interpolation_reproduces_linear_seebeck() {
        let (a, b) = (3.0e-7, 1.0e-5);
        let sample = Sample::new(
            "D",
            trace(&[120.0, 180.0, 260.0, 330.0], |t| 1.0e4 + 5.0 * t),
            trace(&[100.0, 400.0], |t| a * t + b),
            None,
        )
        .unwrap();

        let data = sample.get_interpolated_data(9).unwrap();
        assert_eq!(data.temperatures.len(), 9);
        assert_eq!(data.temperatures[0], 120.0);
        assert_eq!(data.temperatures[8], 330.0);

        for (&t, &v) in data.temperatures.iter().zip(&data.seebecks) {
            let expected = a * t + b;
            assert!((v - expected).abs() / expected < 1e-12);
        }
        for (&t, &c) in data.temperatures.iter().zip(&data.conductivities) {
            assert!((c - (1.0e4 + 5.0 * t)).abs() < 1e-8);
        }
    }

    #[test]
    fn test_interpolate_at_outside_window() {
        let sample = Sample::new(
            "E",
            trace(&[100.0, 300.0], |_| 1.0e4),
            trace(&[100.0, 300.0], |_| 2.0e-4),
            None,
        )
        .unwrap();
        assert!(sample.interpolate_at(200.0).is_ok());
        assert!(matches!(
            sample.interpolate_at(400.0),
            Err(TransportError::TemperatureOutsideWindow { .. })
        ));
    }

    #[test]
    fn test_invalid_samples_are_rejected() {
        assert!(matches!(
            Sample::new("F", vec![], vec![(300.0, 1e-4)], None),
            Err(TransportError::EmptyTrace { .. })
        ));
        assert!(Sample::new("G", vec![(300.0, f64::NAN)], vec![(300.0, 1e-4)], None).is_err());
        assert!(Sample::new("H", vec![(300.0, 1e4)], vec![(300.0, 1e-4)], Some(-1.0)).is_err());
        assert!(Sample::new("I", vec![(300.0, 1e4)], vec![(300.0, 1e-4)], None)
            .unwrap()
            .get_interpolated_data(0)
            .is_err());
    }

    #[test]
    fn test_temperature_analysis_recovers_constant_prefactor() {
        // 单带、s = 1、σ_E0 不随温度变化：cp 随温度线性漂移
        let s = 1.0;
        let sigma_e0 = 2.0e4;
        let cp = |t: f64| 2.0 - t / 100.0;
        let temps = [100.0, 200.0, 300.0, 400.0];
        let sample = Sample::new(
            "J",
            trace(&temps, |t| powerlaw::conductivity(cp(t), s, sigma_e0).unwrap()),
            trace(&temps, |t| powerlaw::seebeck(cp(t), s).unwrap()),
            None,
        )
        .unwrap();

        // 网格点与测量点重合时插值精确
        let analysis = sample.extract_transport_coefficients(4, s).unwrap();
        assert_eq!(analysis.sample, "J");
        for (&t, &expected) in analysis.temperatures.iter().zip(&temps) {
            assert!((t - expected).abs() < 1e-9);
        }
        assert_eq!(analysis.unconverged, 0);
        assert!(analysis.effective_masses.is_none());
        for (&sigma, &t) in analysis.transport_functions.iter().zip(&temps) {
            assert!((sigma - sigma_e0).abs() / sigma_e0 < 1e-3, "T = {}", t);
        }
        assert!(analysis.prefactor_spread().unwrap() < 1e-3);
    }

    #[test]
    fn test_temperature_analysis_with_carrier_density() {
        let sample = Sample::new(
            "K",
            trace(&[200.0, 400.0], |_| 3.0e4),
            trace(&[200.0, 400.0], |t| 1.0e-4 + 2.0e-7 * t),
            Some(1.0e25),
        )
        .unwrap();
        let analysis = sample.extract_transport_coefficients(3, 1.0).unwrap();
        let masses = analysis.effective_masses.unwrap();
        assert_eq!(masses.len(), 3);
        assert!(masses.iter().all(|&m| m > 0.0 && m.is_finite()));
    }

    #[test]
    fn test_raw_temperature_analysis() {
        let s = 1.0;
        let seebecks = [powerlaw::seebeck(0.0, s).unwrap(), powerlaw::seebeck(1.0, s).unwrap()];
        let conductivities = [
            powerlaw::conductivity(0.0, s, 1.0e4).unwrap(),
            powerlaw::conductivity(1.0, s, 1.0e4).unwrap(),
        ];
        let result =
            temperature_analysis(&seebecks, &conductivities, &[300.0, 400.0], s).unwrap();
        assert!(result.iter().all(|&v| (v - 1.0e4).abs() / 1.0e4 < 1e-3));

        assert!(matches!(
            temperature_analysis(&seebecks, &conductivities[..1], &[300.0, 400.0], s),
            Err(TransportError::LengthMismatch { .. })
        ));
    }
}
