//! # 插值工具
//!
//! 线性等分网格与分段线性插值（超出范围时取端点值）。
//!
//! ## 依赖关系
//! - 被 `models/sample.rs`, `commands/model.rs` 使用
//! - 无外部模块依赖

/// 在 [start, end] 上生成 n 个等距点；n = 1 时返回 [start]
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// 在升序节点 `xp` 上对 `fp` 做分段线性插值
///
/// `xp` 为空时返回 NaN。
pub fn interp(x: f64, xp: &[f64], fp: &[f64]) -> f64 {
    let n = xp.len().min(fp.len());
    if n == 0 {
        return f64::NAN;
    }
    if x <= xp[0] {
        return fp[0];
    }
    if x >= xp[n - 1] {
        return fp[n - 1];
    }

    // 第一个 > x 的节点
    let hi = xp[..n].partition_point(|&v| v <= x);
    let lo = hi - 1;

    let (x0, x1) = (xp[lo], xp[hi]);
    let (y0, y1) = (fp[lo], fp[hi]);
    y0 + (y1 - y0) * (x - x0) / (x1 - x0)
}
