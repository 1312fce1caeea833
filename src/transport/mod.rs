//! # 输运模型模块
//!
//! 半导体输运系数模型与参数提取。
//!
//! ## 子模块
//! - `constants`: 物理常数
//! - `fermi`: Fermi-Dirac 积分
//! - `powerlaw`: 幂律输运函数模型
//! - `sphere`: 球形能谷模型
//! - `cylinder`: 圆柱形能谷模型
//! - `numeric`: 表格化输运函数的数值模型
//! - `optimize`: 一维 Nelder-Mead 极小化
//! - `extract`: 由测量数据反解 σ_E0 / 有效质量
//! - `export`: 结果导出 (CSV)
//!
//! ## 依赖关系
//! - 被 `models/` 和 `commands/` 使用

pub mod constants;
pub mod cylinder;
pub mod export;
pub mod extract;
pub mod fermi;
pub mod numeric;
pub mod optimize;
pub mod powerlaw;
pub mod sphere;

pub use extract::{
    extract_effective_mass, extract_transport_function, Extractor, MassFit, TransportFit,
};
pub use optimize::MinimizerOptions;
