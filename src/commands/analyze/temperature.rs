//! # 温度分析子命令实现
//!
//! 对样品在温度窗口内逐点提取 σ_E0（及有效质量）。
//!
//! ## 功能
//! - 单样品模式（`--sample`）：打印结果表格并写出 CSV
//! - 批量模式：并行分析目录中全部样品（rayon），
//!   每个样品写出 `{name}_transport.csv`
//!
//! ## 依赖关系
//! - 使用 `cli/analyze.rs` 定义的 TemperatureArgs
//! - 使用 `batch/` 模块进行批量处理
//! - 使用 `parsers/` 读取样品，`transport/export.rs` 导出

use crate::batch::{BatchRunner, ProcessResult};
use crate::cli::analyze::TemperatureArgs;
use crate::commands::{extractor_with_cap, format_optional};
use crate::error::{Result, TransportError};
use crate::models::TemperatureAnalysis;
use crate::parsers;
use crate::transport::{export, Extractor};
use crate::utils::output;

use std::fs;
use std::path::{Path, PathBuf};
use tabled::{Table, Tabled};

/// 执行温度分析
pub fn execute(args: TemperatureArgs) -> Result<()> {
    output::print_header("Transport Function vs Temperature");

    if !args.input.is_dir() {
        return Err(TransportError::DirectoryNotFound {
            path: args.input.display().to_string(),
        });
    }

    let config = AnalysisConfig::from_args(&args);

    match &args.sample {
        Some(name) => execute_single_sample(name, &args, &config),
        None => execute_batch(&args, &config),
    }
}

/// 单样品与批量模式共享的配置
struct AnalysisConfig {
    input: PathBuf,
    extractor: Extractor,
    points: usize,
    exponent: f64,
    overwrite: bool,
}

impl AnalysisConfig {
    fn from_args(args: &TemperatureArgs) -> Self {
        Self {
            input: args.input.clone(),
            extractor: extractor_with_cap(args.max_iterations),
            points: args.points,
            exponent: args.exponent,
            overwrite: args.overwrite,
        }
    }
}

/// 单样品模式
fn execute_single_sample(name: &str, args: &TemperatureArgs, config: &AnalysisConfig) -> Result<()> {
    output::print_info(&format!("Single sample mode: '{}'", name));

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(output_file_name(name)));

    if output_path.exists() && !config.overwrite {
        output::print_skip(&format!(
            "Output exists, use --overwrite to replace: {}",
            output_path.display()
        ));
        return Ok(());
    }

    let sample = parsers::load_sample(name, &config.input, args.carrier_density)?;
    let (t_min, t_max) = sample.temperature_window()?;
    output::print_success(&format!(
        "Loaded sample '{}' ({} conductivity / {} Seebeck points, window {} K to {} K)",
        sample.name,
        sample.conductivity().len(),
        sample.seebeck().len(),
        t_min,
        t_max
    ));

    let analysis =
        sample.extract_transport_coefficients_with(&config.extractor, config.points, config.exponent)?;

    print_analysis_table(&analysis);
    report_quality(&analysis);

    export::temperature_to_csv(&analysis, &output_path)?;
    output::print_success(&format!("Results written to '{}'", output_path.display()));

    Ok(())
}

/// 批量处理模式
fn execute_batch(args: &TemperatureArgs, config: &AnalysisConfig) -> Result<()> {
    output::print_info(&format!("Batch mode: directory '{}'", config.input.display()));

    if args.carrier_density.is_some() {
        output::print_warning("--carrier-density applies to a single sample; ignored in batch mode");
    }

    let names = parsers::discover_sample_names(&config.input)?;
    output::print_info(&format!("Found {} samples", names.len()));

    let output_dir = args
        .output
        .clone()
        .unwrap_or_else(|| config.input.join("transport"));
    fs::create_dir_all(&output_dir).map_err(|e| TransportError::FileWriteError {
        path: output_dir.display().to_string(),
        source: e,
    })?;

    let runner = BatchRunner::new(args.jobs);
    output::print_info(&format!("Running with {} parallel jobs", runner.jobs()));

    let result = runner.run(&names, |name| process_batch_sample(name, &output_dir, config))?;

    // 打印统计
    output::print_separator();
    output::print_done(&format!(
        "Batch complete: {} samples, {} success, {} skipped, {} failed",
        result.total(),
        result.success,
        result.skipped,
        result.failed
    ));

    output::print_failures(&result.failures, 10);

    Ok(())
}

/// 处理批量模式中的单个样品
fn process_batch_sample(name: &str, output_dir: &Path, config: &AnalysisConfig) -> ProcessResult {
    let output_file = output_dir.join(output_file_name(name));

    if output_file.exists() && !config.overwrite {
        return ProcessResult::Skipped(format!(
            "Output exists, skipping: {}",
            output_file.display()
        ));
    }

    let outcome = parsers::load_sample(name, &config.input, None)
        .and_then(|sample| {
            sample.extract_transport_coefficients_with(
                &config.extractor,
                config.points,
                config.exponent,
            )
        })
        .and_then(|analysis| {
            export::temperature_to_csv(&analysis, &output_file).map(|_| analysis)
        });

    match outcome {
        Ok(analysis) if analysis.unconverged > 0 => ProcessResult::Success(format!(
            "{} -> {} ({} fits did not converge)",
            name,
            output_file.display(),
            analysis.unconverged
        )),
        Ok(_) => ProcessResult::Success(format!("{} -> {}", name, output_file.display())),
        Err(e) => ProcessResult::Failed(name.to_string(), e.to_string()),
    }
}

/// 输出文件名 `{name}_transport.csv`
fn output_file_name(name: &str) -> String {
    format!("{}_transport.csv", name)
}

/// 提取质量提示
fn report_quality(analysis: &TemperatureAnalysis) {
    if analysis.unconverged > 0 {
        output::print_warning(&format!(
            "{} fit(s) did not converge; best points are reported",
            analysis.unconverged
        ));
    }
    if let Some(spread) = analysis.prefactor_spread() {
        output::print_info(&format!(
            "sigma_E0 spread over the window: {:.1}% of the mean",
            100.0 * spread
        ));
    }
}

/// 打印结果表格
fn print_analysis_table(analysis: &TemperatureAnalysis) {
    #[derive(Tabled)]
    struct TemperatureRow {
        #[tabled(rename = "T (K)")]
        temperature: String,
        #[tabled(rename = "cp* (kT)")]
        cp: String,
        #[tabled(rename = "σ_E0 (S/m)")]
        sigma_e0: String,
        #[tabled(rename = "m* (m_e)")]
        mass: String,
    }

    let rows: Vec<TemperatureRow> = export::temperature_records(analysis)
        .into_iter()
        .map(|r| TemperatureRow {
            temperature: format!("{:.1}", r.temperature),
            cp: format!("{:.4}", r.reduced_chemical_potential),
            sigma_e0: format!("{:.4e}", r.sigma_e0),
            mass: format_optional(r.effective_mass, 4),
        })
        .collect();

    output::print_header(&format!("Sample '{}'", analysis.sample));
    println!("{}", Table::new(&rows));
}
