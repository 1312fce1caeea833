//! # 样品系列模型
//!
//! 同一材料体系的一组样品（通常为不同掺杂浓度），用于 Jonker 分析：
//! 固定温度下对每个样品提取 σ_E0，若各样品的 σ_E0 相近，
//! 说明掺杂只移动化学势而不改变输运函数。
//!
//! ## 依赖关系
//! - 被 `commands/analyze/jonker.rs` 使用
//! - 使用 `models/sample.rs`, `parsers/sample.rs`, `transport/extract.rs`

use crate::error::{Result, TransportError};
use crate::models::sample::{check_lengths, spread, Sample};
use crate::parsers;
use crate::transport::Extractor;

use std::path::Path;

/// Jonker 分析汇总
#[derive(Debug, Clone, PartialEq)]
pub struct JonkerSummary {
    /// 平均 σ_E0 (S/m)
    pub mean: f64,
    /// 最小 σ_E0 (S/m)
    pub min: f64,
    /// 最大 σ_E0 (S/m)
    pub max: f64,
    /// 每个样品的 σ_E0 (S/m)，与输入顺序一致
    pub prefactors: Vec<f64>,
}

impl JonkerSummary {
    fn from_prefactors(prefactors: Vec<f64>) -> Result<Self> {
        if prefactors.is_empty() {
            return Err(TransportError::EmptySeries);
        }

        let min = prefactors.iter().copied().fold(f64::INFINITY, f64::min);
        let max = prefactors.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = prefactors.iter().sum::<f64>() / prefactors.len() as f64;

        Ok(JonkerSummary {
            mean,
            min,
            max,
            prefactors,
        })
    }

    /// (max - min) / mean
    pub fn spread(&self) -> Option<f64> {
        spread(&self.prefactors)
    }
}

/// 样品系列
#[derive(Debug, Clone, Default)]
pub struct SampleSeries {
    pub samples: Vec<Sample>,
}

impl SampleSeries {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    /// 从目录加载全部样品（按名称排序）
    pub fn from_path(dir: &Path) -> Result<Self> {
        parsers::sample::load_series(dir).map(Self::new)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// 样品名称列表
    pub fn names(&self) -> Vec<&str> {
        self.samples.iter().map(|s| s.name.as_str()).collect()
    }

    /// 对并列的 Seebeck / 电导率列表做 Jonker 分析
    pub fn jonker_analysis(
        seebecks: &[f64],
        conductivities: &[f64],
        temperature: f64,
        s: f64,
    ) -> Result<JonkerSummary> {
        Self::jonker_analysis_with(&Extractor::default(), seebecks, conductivities, temperature, s)
    }

    /// 同 `jonker_analysis`，使用指定的提取器
    pub fn jonker_analysis_with(
        extractor: &Extractor,
        seebecks: &[f64],
        conductivities: &[f64],
        temperature: f64,
        s: f64,
    ) -> Result<JonkerSummary> {
        check_lengths("Seebeck vs conductivity", seebecks, conductivities)?;

        let prefactors = seebecks
            .iter()
            .zip(conductivities)
            .map(|(&seebeck, &conductivity)| {
                extractor
                    .fit_transport_function(seebeck, conductivity, temperature, s)
                    .map(|fit| fit.sigma_e0)
            })
            .collect::<Result<Vec<f64>>>()?;

        JonkerSummary::from_prefactors(prefactors)
    }

    /// 在给定温度插值每个样品后做 Jonker 分析
    pub fn jonker_at(&self, temperature: f64, s: f64) -> Result<JonkerSummary> {
        self.jonker_at_with(&Extractor::default(), temperature, s)
    }

    /// 同 `jonker_at`，使用指定的提取器
    pub fn jonker_at_with(
        &self,
        extractor: &Extractor,
        temperature: f64,
        s: f64,
    ) -> Result<JonkerSummary> {
        let (seebecks, conductivities) = self.interpolate_at(temperature)?;
        Self::jonker_analysis_with(extractor, &seebecks, &conductivities, temperature, s)
    }

    /// 在给定温度插值每个样品，返回并列的 (Seebeck, 电导率) 列表
    pub fn interpolate_at(&self, temperature: f64) -> Result<(Vec<f64>, Vec<f64>)> {
        if self.samples.is_empty() {
            return Err(TransportError::EmptySeries);
        }

        self.samples
            .iter()
            .map(|sample| sample.interpolate_at(temperature))
            .collect::<Result<Vec<_>>>()
            .map(|pairs| pairs.into_iter().unzip())
    }
}
