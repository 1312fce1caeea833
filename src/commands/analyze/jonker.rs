//! # Jonker 分析子命令实现
//!
//! 在固定温度下对目录中全部样品插值并提取 σ_E0，
//! 输出每个样品的结果以及均值 / 最小值 / 最大值。
//!
//! ## 依赖关系
//! - 使用 `cli/analyze.rs` 定义的 JonkerArgs
//! - 使用 `models/series.rs` 进行分析
//! - 使用 `transport/export.rs` 导出 CSV

use crate::cli::analyze::JonkerArgs;
use crate::error::Result;
use crate::models::{JonkerSummary, SampleSeries};
use crate::transport::export::{self, JonkerRecord};
use crate::utils::output;

use tabled::{Table, Tabled};

/// 执行 Jonker 分析
pub fn execute(args: JonkerArgs) -> Result<()> {
    output::print_header(&format!("Jonker Analysis at {} K", args.temperature));

    let series = SampleSeries::from_path(&args.input)?;
    output::print_info(&format!(
        "Loaded {} samples: {}",
        series.len(),
        series.names().join(", ")
    ));

    let (records, summary) = analyze_series(&series, args.temperature, args.exponent)?;

    print_records(&records);
    print_summary(&summary);

    if let Some(path) = &args.output {
        export::write_records(&records, path)?;
        output::print_success(&format!("Results written to '{}'", path.display()));
    }

    Ok(())
}

/// 插值全部样品并汇总
fn analyze_series(
    series: &SampleSeries,
    temperature: f64,
    s: f64,
) -> Result<(Vec<JonkerRecord>, JonkerSummary)> {
    let summary = series.jonker_at(temperature, s)?;
    let (seebecks, conductivities) = series.interpolate_at(temperature)?;

    let records = series
        .samples
        .iter()
        .zip(seebecks.into_iter().zip(conductivities))
        .zip(&summary.prefactors)
        .map(|((sample, (seebeck, conductivity)), &sigma_e0)| JonkerRecord {
            sample: sample.name.clone(),
            seebeck,
            conductivity,
            sigma_e0,
        })
        .collect();

    Ok((records, summary))
}

/// 打印逐样品表格
fn print_records(records: &[JonkerRecord]) {
    #[derive(Tabled)]
    struct JonkerRow {
        #[tabled(rename = "Sample")]
        sample: String,
        #[tabled(rename = "S (μV/K)")]
        seebeck: String,
        #[tabled(rename = "σ (S/m)")]
        conductivity: String,
        #[tabled(rename = "σ_E0 (S/m)")]
        sigma_e0: String,
    }

    let rows: Vec<JonkerRow> = records
        .iter()
        .map(|r| JonkerRow {
            sample: r.sample.clone(),
            seebeck: format!("{:.2}", r.seebeck * 1.0e6),
            conductivity: format!("{:.4e}", r.conductivity),
            sigma_e0: format!("{:.4e}", r.sigma_e0),
        })
        .collect();

    println!("{}", Table::new(&rows));
}

/// 打印汇总
fn print_summary(summary: &JonkerSummary) {
    output::print_separator();
    output::print_info(&format!("Mean σ_E0: {:.4e} S/m", summary.mean));
    output::print_info(&format!(
        "Range:     {:.4e} to {:.4e} S/m",
        summary.min, summary.max
    ));
    if let Some(spread) = summary.spread() {
        output::print_info(&format!("Spread:    {:.1}% of the mean", 100.0 * spread));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sample;

    #[test]
    fn test_records_follow_sample_order() {
        let make = |name: &str, seebeck: f64, conductivity: f64| {
            Sample::new(
                name,
                vec![(250.0, conductivity), (350.0, conductivity)],
                vec![(250.0, seebeck), (350.0, seebeck)],
                None,
            )
            .unwrap()
        };
        let series = SampleSeries::new(vec![
            make("lo", 2.5e-4, 5.0e3),
            make("hi", 1.0e-4, 6.0e4),
        ]);

        let (records, summary) = analyze_series(&series, 300.0, 1.0).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].sample, "lo");
        assert_eq!(records[1].seebeck, 1.0e-4);
        assert_eq!(records[1].sigma_e0, summary.prefactors[1]);
        assert_eq!(summary, series.jonker_at(300.0, 1.0).unwrap());
    }
}
