//! # model 命令实现
//!
//! 在约化化学势网格上计算所选几何的正向模型。
//!
//! ## 功能
//! - powerlaw: S(cp, s), σ(cp, s, σ_E0)
//! - sphere / cylinder: S(cp), σ(cp, T, τ_0), n(cp, T, m*)
//! - numeric: 由表格化 σ_E(E) 数值积分，μ = cp·kT
//!
//! 定义域错误的网格点在表格中显示为 `n/a`，在 CSV 中留空。
//!
//! ## 依赖关系
//! - 使用 `cli/model.rs` 定义的 ModelArgs
//! - 使用 `transport/` 的模型函数与导出
//! - 使用 `parsers/table.rs` 读取数值输运函数

use crate::cli::model::{Geometry, ModelArgs};
use crate::commands::format_optional;
use crate::error::{Result, TransportError};
use crate::parsers::parse_table_file;
use crate::transport::constants::{E, K_B, M_E};
use crate::transport::export::{self, ModelRecord};
use crate::transport::numeric::TransportTable;
use crate::transport::{cylinder, powerlaw, sphere};
use crate::utils::interp::linspace;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 模型表格行
#[derive(Tabled)]
struct ModelRow {
    #[tabled(rename = "cp (kT)")]
    cp: String,
    #[tabled(rename = "S (V/K)")]
    seebeck: String,
    #[tabled(rename = "σ (S/m)")]
    conductivity: String,
    #[tabled(rename = "n (1/m³)")]
    carriers: String,
}

/// 执行 model 命令
pub fn execute(args: ModelArgs) -> Result<()> {
    output::print_header(&format!("Forward Model: {}", args.geometry));

    let records = evaluate(&args)?;

    let rows: Vec<ModelRow> = records
        .iter()
        .map(|r| ModelRow {
            cp: format!("{:.3}", r.reduced_chemical_potential),
            seebeck: format_optional(r.seebeck, 4),
            conductivity: format_optional(r.conductivity, 4),
            carriers: format_optional(r.carrier_density, 4),
        })
        .collect();
    println!("{}", Table::new(&rows));

    let undefined = records
        .iter()
        .filter(|r| r.seebeck.is_none() || r.conductivity.is_none())
        .count();
    if undefined > 0 {
        output::print_warning(&format!(
            "{} grid point(s) outside the model's domain",
            undefined
        ));
    }

    if let Some(path) = &args.output {
        export::write_records(&records, path)?;
        output::print_success(&format!("Model grid written to '{}'", path.display()));
    }

    Ok(())
}

/// 在网格上计算模型
pub fn evaluate(args: &ModelArgs) -> Result<Vec<ModelRecord>> {
    if args.points == 0 {
        return Err(TransportError::InvalidArgument(
            "model grid needs at least 1 point".to_string(),
        ));
    }
    if !(args.cp_min <= args.cp_max) {
        return Err(TransportError::InvalidArgument(format!(
            "cp range is empty: {} > {}",
            args.cp_min, args.cp_max
        )));
    }
    if !args.temperature.is_finite() || args.temperature <= 0.0 {
        return Err(TransportError::InvalidArgument(format!(
            "temperature must be positive, got {} K",
            args.temperature
        )));
    }

    let grid = linspace(args.cp_min, args.cp_max, args.points);
    let t = args.temperature;

    let records = match args.geometry {
        Geometry::Powerlaw => {
            if !args.exponent.is_finite() || args.exponent < 0.0 {
                return Err(TransportError::InvalidExponent(args.exponent));
            }
            let seebecks = powerlaw::seebeck_curve(&grid, args.exponent);
            let conductivities = powerlaw::conductivity_curve(&grid, args.exponent, args.sigma_e0);
            grid.iter()
                .zip(seebecks)
                .zip(conductivities)
                .map(|((&cp, seebeck), conductivity)| ModelRecord {
                    reduced_chemical_potential: cp,
                    seebeck,
                    conductivity,
                    carrier_density: None,
                })
                .collect()
        }
        Geometry::Sphere => {
            let mass = args.mass * M_E;
            grid.iter()
                .map(|&cp| ModelRecord {
                    reduced_chemical_potential: cp,
                    seebeck: sphere::try_seebeck(cp),
                    conductivity: sphere::conductivity(cp, t, args.tau, mass),
                    carrier_density: sphere::carriers(cp, t, mass),
                })
                .collect()
        }
        Geometry::Cylinder => {
            let mass = args.mass * M_E;
            let l = args.inverse_length;
            grid.iter()
                .map(|&cp| ModelRecord {
                    reduced_chemical_potential: cp,
                    seebeck: cylinder::try_seebeck(cp),
                    conductivity: cylinder::conductivity(cp, t, args.tau, l),
                    carrier_density: cylinder::carriers(cp, t, mass, l),
                })
                .collect()
        }
        Geometry::Numeric => {
            let path = args.table.as_ref().ok_or_else(|| {
                TransportError::InvalidArgument(
                    "--table is required for the numeric geometry".to_string(),
                )
            })?;
            let table = TransportTable::new(parse_table_file(path)?)?;
            let (e_min, e_max) = table.energy_range();
            output::print_info(&format!(
                "Transport table: {} points, {:.4} to {:.4} eV",
                table.len(),
                e_min,
                e_max
            ));
            let kt = K_B * t / E;
            grid.iter()
                .map(|&cp| ModelRecord {
                    reduced_chemical_potential: cp,
                    seebeck: table.seebeck(cp * kt, t),
                    conductivity: Some(table.conductivity(cp * kt, t)),
                    carrier_density: None,
                })
                .collect()
        }
    };

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn args(geometry: Geometry) -> ModelArgs {
        ModelArgs {
            geometry,
            cp_min: -2.0,
            cp_max: 2.0,
            points: 5,
            temperature: 300.0,
            exponent: 1.0,
            sigma_e0: 1.0e4,
            mass: 1.0,
            tau: 1.0e-14,
            inverse_length: 1.0e9,
            table: None,
            output: None,
        }
    }

    #[test]
    fn test_powerlaw_grid() {
        let records = evaluate(&args(Geometry::Powerlaw)).unwrap();
        assert_eq!(records.len(), 5);
        assert_eq!(records[0].reduced_chemical_potential, -2.0);
        assert_eq!(records[4].reduced_chemical_potential, 2.0);
        assert_eq!(records[2].seebeck, powerlaw::seebeck(0.0, 1.0));
        // 化学势升高：S 降低，σ 升高
        assert!(records[0].seebeck > records[4].seebeck);
        assert!(records[0].conductivity < records[4].conductivity);
        assert!(records.iter().all(|r| r.carrier_density.is_none()));
    }

    #[test]
    fn test_pocket_grids_have_carriers() {
        for geometry in [Geometry::Sphere, Geometry::Cylinder] {
            let records = evaluate(&args(geometry)).unwrap();
            assert!(records
                .windows(2)
                .all(|w| w[0].carrier_density < w[1].carrier_density));
            assert!(records.iter().all(|r| r.seebeck.unwrap() > 0.0));
        }
    }

    #[test]
    fn test_numeric_requires_table() {
        assert!(evaluate(&args(Geometry::Numeric)).is_err());

        let path = std::env::temp_dir().join(format!(
            "semitransport_model_table_{}.csv",
            std::process::id()
        ));
        let content: String = (0..=400)
            .map(|i| format!("{}, {}\n", -1.0 + i as f64 * 0.005, 5.0e4))
            .collect();
        fs::write(&path, content).unwrap();

        let mut numeric = args(Geometry::Numeric);
        numeric.table = Some(path.clone());
        let records = evaluate(&numeric).unwrap();
        for r in &records {
            let sigma = r.conductivity.unwrap();
            assert!((sigma - 5.0e4).abs() / 5.0e4 < 1e-4);
        }

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_invalid_grid() {
        let mut bad = args(Geometry::Powerlaw);
        bad.points = 0;
        assert!(evaluate(&bad).is_err());

        let mut bad = args(Geometry::Powerlaw);
        bad.cp_min = 3.0;
        assert!(evaluate(&bad).is_err());

        let mut bad = args(Geometry::Powerlaw);
        bad.exponent = -0.5;
        assert!(matches!(evaluate(&bad), Err(TransportError::InvalidExponent(_))));
    }
}
