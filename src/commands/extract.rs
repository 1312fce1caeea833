//! # extract 命令实现
//!
//! 对单个测量点运行两步提取并以表格输出。
//!
//! ## 依赖关系
//! - 使用 `cli/extract.rs` 定义的 ExtractArgs
//! - 使用 `transport/extract.rs` 进行提取

use crate::cli::extract::ExtractArgs;
use crate::commands::extractor_with_cap;
use crate::error::Result;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 结果表格行
#[derive(Tabled)]
struct QuantityRow {
    #[tabled(rename = "Quantity")]
    quantity: &'static str,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Unit")]
    unit: &'static str,
}

/// 执行 extract 命令
pub fn execute(args: ExtractArgs) -> Result<()> {
    output::print_header("Transport Function Extraction");
    output::print_info(&format!(
        "S = {:.4e} V/K, sigma = {:.4e} S/m, T = {} K, s = {}",
        args.seebeck, args.conductivity, args.temperature, args.exponent
    ));

    let extractor = extractor_with_cap(args.max_iterations);

    let fit = extractor.fit_transport_function(
        args.seebeck,
        args.conductivity,
        args.temperature,
        args.exponent,
    )?;
    if !fit.converged {
        output::print_warning("sigma_E0 extraction did not converge; reporting best point");
    }

    let mut rows = vec![
        QuantityRow {
            quantity: "Reduced chemical potential",
            value: format!("{:.6}", fit.reduced_chemical_potential),
            unit: "kT",
        },
        QuantityRow {
            quantity: "sigma_E0",
            value: format!("{:.6e}", fit.sigma_e0),
            unit: "S/m",
        },
    ];

    if let Some(density) = args.carrier_density {
        let mass = extractor.fit_effective_mass(args.seebeck, density, args.temperature)?;
        if !mass.converged {
            output::print_warning("effective mass extraction did not converge; reporting best point");
        }
        rows.push(QuantityRow {
            quantity: "Effective mass",
            value: format!("{:.6}", mass.effective_mass),
            unit: "m_e",
        });
    }

    println!("{}", Table::new(&rows));
    output::print_success("Extraction complete");

    Ok(())
}
