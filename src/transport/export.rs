//! # 结果导出
//!
//! 将分析结果写为 CSV，每行一个温度点 / 样品 / 模型网格点。
//!
//! ## 支持内容
//! - 温度分析：T, cp*, σ_E0, m*（载流子浓度未知时 m* 为空）
//! - Jonker 分析：样品, S, σ, σ_E0
//! - 正向模型：cp, S, σ, n
//!
//! ## 依赖关系
//! - 被 `commands/analyze/`, `commands/model.rs` 调用
//! - 使用 `models/sample.rs` 的 TemperatureAnalysis
//! - 使用 `csv` + `serde` 序列化

use crate::error::{Result, TransportError};
use crate::models::TemperatureAnalysis;

use serde::Serialize;
use std::path::Path;

/// 温度分析的一行
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureRecord {
    #[serde(rename = "temperature_K")]
    pub temperature: f64,
    pub reduced_chemical_potential: f64,
    #[serde(rename = "sigma_e0_S_per_m")]
    pub sigma_e0: f64,
    #[serde(rename = "effective_mass_me")]
    pub effective_mass: Option<f64>,
}

/// Jonker 分析的一行
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JonkerRecord {
    pub sample: String,
    #[serde(rename = "seebeck_V_per_K")]
    pub seebeck: f64,
    #[serde(rename = "conductivity_S_per_m")]
    pub conductivity: f64,
    #[serde(rename = "sigma_e0_S_per_m")]
    pub sigma_e0: f64,
}

/// 正向模型网格的一行
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelRecord {
    pub reduced_chemical_potential: f64,
    #[serde(rename = "seebeck_V_per_K")]
    pub seebeck: Option<f64>,
    #[serde(rename = "conductivity_S_per_m")]
    pub conductivity: Option<f64>,
    #[serde(rename = "carrier_density_per_m3")]
    pub carrier_density: Option<f64>,
}

/// 温度分析结果转为逐行记录
pub fn temperature_records(analysis: &TemperatureAnalysis) -> Vec<TemperatureRecord> {
    analysis
        .temperatures
        .iter()
        .enumerate()
        .map(|(i, &temperature)| TemperatureRecord {
            temperature,
            reduced_chemical_potential: analysis.reduced_chemical_potentials[i],
            sigma_e0: analysis.transport_functions[i],
            effective_mass: analysis
                .effective_masses
                .as_ref()
                .and_then(|masses| masses.get(i).copied()),
        })
        .collect()
}

/// 导出温度分析结果
pub fn temperature_to_csv(analysis: &TemperatureAnalysis, output_path: &Path) -> Result<()> {
    write_records(&temperature_records(analysis), output_path)
}

/// 写出任意可序列化记录（首行为字段名）
pub fn write_records<T: Serialize>(records: &[T], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for record in records {
        wtr.serialize(record)?;
    }

    wtr.flush().map_err(|e| TransportError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
