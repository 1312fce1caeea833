//! # Fermi-Dirac 积分
//!
//! 计算完全 (非归一化) Fermi-Dirac 积分：
//!
//! ```text
//! F_k(x) = ∫_0^∞ t^k / (1 + exp(t - x)) dt,   k > -1
//! ```
//!
//! ## 算法概述
//! 1. k = 0 使用解析式 ln(1 + e^x)
//! 2. [0, 1] 区间：占据函数在 t = 0 处的 Taylor 级数逐项积分，
//!    精确处理 t^k 在端点的奇异性（任意 k > -1）
//! 3. [1, ∞) 区间：分段 Gauss-Legendre 求积，远离 Fermi 面处分段宽度逐段加倍，
//!    Fermi 面附近 (|t - x| < 30) 使用单位宽度分段，
//!    因此计算量随 x 按对数增长
//!
//! 占据函数的极点位于 t = x ± iπ(2n+1)，级数收敛半径 ≥ π。
//!
//! ## 依赖关系
//! - 被 `transport/powerlaw.rs`, `transport/sphere.rs`, `transport/cylinder.rs` 使用
//! - 无外部模块依赖

/// Taylor 级数积分区间的上限
const HEAD_END: f64 = 1.0;

/// Taylor 级数项数
const SERIES_TERMS: usize = 64;

/// Fermi 面以上的积分截断余量 (单位 kT)
const TAIL_MARGIN: f64 = 60.0;

/// Fermi 面附近单位宽度分段的半宽 (单位 kT)
const EDGE_HALF_WIDTH: f64 = 30.0;

/// 10 点 Gauss-Legendre 节点（正半轴）
const GL_NODES: [f64; 5] = [
    0.148_874_338_981_631_2,
    0.433_395_394_129_247_2,
    0.679_409_568_299_024_4,
    0.865_063_366_688_984_5,
    0.973_906_528_517_171_7,
];

/// 10 点 Gauss-Legendre 权重
const GL_WEIGHTS: [f64; 5] = [
    0.295_524_224_714_752_9,
    0.269_266_719_309_996_3,
    0.219_086_362_515_982_0,
    0.149_451_349_150_580_6,
    0.066_671_344_308_688_1,
];

/// 计算 Fermi-Dirac 积分 F_order(x)
///
/// 定义域外（`order <= -1`、参数非有限）或结果溢出时返回 `None`。
pub fn fermi_dirac(order: f64, x: f64) -> Option<f64> {
    if !order.is_finite() || !x.is_finite() || order <= -1.0 {
        return None;
    }

    let value = if order == 0.0 {
        softplus(x)
    } else {
        head_series(order, x) + tail_quadrature(order, x)
    };

    if value.is_finite() {
        Some(value)
    } else {
        None
    }
}

/// Fermi-Dirac 占据函数 1 / (1 + exp(t - x))，数值稳定形式
pub fn occupation(t: f64, x: f64) -> f64 {
    let z = t - x;
    if z > 0.0 {
        let e = (-z).exp();
        e / (1.0 + e)
    } else {
        1.0 / (1.0 + z.exp())
    }
}

/// ln(1 + e^x)
fn softplus(x: f64) -> f64 {
    if x > 0.0 {
        x + (-x).exp().ln_1p()
    } else {
        x.exp().ln_1p()
    }
}

/// ∫_0^1 t^k f(t) dt，f 按 Taylor 级数展开后逐项积分
fn head_series(order: f64, x: f64) -> f64 {
    // f' = f^2 - f  =>  (n+1) c_{n+1} = Σ c_j c_{n-j} - c_n
    let mut coeffs = [0.0_f64; SERIES_TERMS];
    coeffs[0] = occupation(0.0, x);

    for n in 0..SERIES_TERMS - 1 {
        let cauchy: f64 = (0..=n).map(|j| coeffs[j] * coeffs[n - j]).sum();
        coeffs[n + 1] = (cauchy - coeffs[n]) / (n as f64 + 1.0);
    }

    coeffs
        .iter()
        .enumerate()
        .map(|(n, c)| {
            let power = n as f64 + order + 1.0;
            c * HEAD_END.powf(power) / power
        })
        .sum()
}

/// ∫_1^∞ t^k f(t) dt，分段 Gauss-Legendre
fn tail_quadrature(order: f64, x: f64) -> f64 {
    let integrand = |t: f64| t.powf(order) * occupation(t, x);

    let edge = (x - EDGE_HALF_WIDTH).max(HEAD_END);
    let cutoff = x.max(0.0) + TAIL_MARGIN + 2.0 * order.max(0.0);

    let mut sum = 0.0;
    let mut lo = HEAD_END;

    // 远离 Fermi 面：占据函数 ≈ 1，被积函数近似 t^k，分段按几何级数加宽
    while lo < edge {
        let hi = (2.0 * lo).min(edge);
        sum += gauss_legendre(lo, hi, &integrand);
        lo = hi;
    }

    // Fermi 面附近及以上：单位宽度；x 超出 f64 整数精度时 lo + 1 不再前进
    while lo < cutoff {
        let hi = (lo + 1.0).min(cutoff);
        if hi <= lo {
            break;
        }
        sum += gauss_legendre(lo, hi, &integrand);
        lo = hi;
    }

    sum
}

/// [a, b] 上的 10 点 Gauss-Legendre 求积
fn gauss_legendre<F>(a: f64, b: f64, f: &F) -> f64
where
    F: Fn(f64) -> f64,
{
    let mid = 0.5 * (a + b);
    let half = 0.5 * (b - a);

    let sum: f64 = GL_NODES
        .iter()
        .zip(GL_WEIGHTS.iter())
        .map(|(node, weight)| weight * (f(mid - half * node) + f(mid + half * node)))
        .sum();

    half * sum
}
