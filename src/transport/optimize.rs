//! # 一维无导数极小化
//!
//! 一维 Nelder-Mead 单纯形搜索（两点单纯形）。
//!
//! ## 算法概述
//! 单纯形由最优点 b 与最差点 w 组成，每步依次尝试：
//! - 反射 `2b - w`，更优时尝试扩张 `3b - 2w`
//! - 外收缩 `1.5b - 0.5w` 或内收缩 `0.5b + 0.5w`
//! - 均失败时向 b 收缩一半
//!
//! 目标函数值为 NaN 时按 +∞ 处理。
//! 单纯形宽度 `|w - b| <= x_abs_tol + x_rel_tol * |b|` 时收敛。
//!
//! ## 依赖关系
//! - 被 `transport/extract.rs` 使用
//! - 无外部模块依赖

/// 极小化器配置
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimizerOptions {
    /// 起点为 0 时第二个单纯形顶点的绝对步长
    pub zero_step: f64,
    /// 起点非 0 时第二个顶点的相对步长
    pub relative_step: f64,
    /// 单纯形宽度的绝对容差
    pub x_abs_tol: f64,
    /// 单纯形宽度的相对容差
    pub x_rel_tol: f64,
    /// 最大迭代次数
    pub max_iterations: usize,
}

impl Default for MinimizerOptions {
    fn default() -> Self {
        MinimizerOptions {
            zero_step: 2.5e-4,
            relative_step: 0.05,
            x_abs_tol: 1e-10,
            x_rel_tol: 1e-10,
            max_iterations: 1000,
        }
    }
}

/// 极小化结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Minimum {
    /// 找到的最优点
    pub x: f64,
    /// 最优点处的目标函数值
    pub fx: f64,
    /// 实际迭代次数
    pub iterations: usize,
    /// 是否满足单纯形宽度判据（否则为达到迭代上限时的最优点）
    ///
    /// 只说明 x 已收敛；平坦的目标函数同样会收敛，残差是否下降由调用方判断。
    pub converged: bool,
}

/// 从 `x0` 出发极小化一维函数 `f`
pub fn minimize_scalar<F>(f: F, x0: f64, options: &MinimizerOptions) -> Minimum
where
    F: Fn(f64) -> f64,
{
    let eval = |x: f64| {
        let v = f(x);
        if v.is_nan() {
            f64::INFINITY
        } else {
            v
        }
    };

    let x1 = if x0 == 0.0 {
        options.zero_step
    } else {
        x0 * (1.0 + options.relative_step)
    };

    let (mut best, mut worst) = (x0, x1);
    let (mut f_best, mut f_worst) = (eval(best), eval(worst));
    let mut iterations = 0;

    loop {
        if f_worst < f_best {
            std::mem::swap(&mut best, &mut worst);
            std::mem::swap(&mut f_best, &mut f_worst);
        }

        let width = (worst - best).abs();
        if width <= options.x_abs_tol + options.x_rel_tol * best.abs() {
            return Minimum {
                x: best,
                fx: f_best,
                iterations,
                converged: true,
            };
        }

        if iterations >= options.max_iterations {
            return Minimum {
                x: best,
                fx: f_best,
                iterations,
                converged: false,
            };
        }
        iterations += 1;

        // 反射
        let reflected = 2.0 * best - worst;
        let f_reflected = eval(reflected);

        if f_reflected < f_best {
            // 扩张
            let expanded = 3.0 * best - 2.0 * worst;
            let f_expanded = eval(expanded);
            if f_expanded < f_reflected {
                worst = expanded;
                f_worst = f_expanded;
            } else {
                worst = reflected;
                f_worst = f_reflected;
            }
            continue;
        }

        let contracted = if f_reflected < f_worst {
            // 外收缩
            let point = 1.5 * best - 0.5 * worst;
            let value = eval(point);
            (value <= f_reflected).then_some((point, value))
        } else {
            // 内收缩
            let point = 0.5 * (best + worst);
            let value = eval(point);
            (value < f_worst).then_some((point, value))
        };

        match contracted {
            Some((point, value)) => {
                worst = point;
                f_worst = value;
            }
            None => {
                // 向最优点收缩
                worst = best + 0.5 * (worst - best);
                f_worst = eval(worst);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quadratic_minimum() {
        let result = minimize_scalar(|x| (x - 3.0).powi(2), 0.0, &MinimizerOptions::default());
        assert!(result.converged);
        assert!((result.x - 3.0).abs() < 1e-8);
    }

    #[test]
    fn test_absolute_value_kink() {
        // 非光滑 V 形目标（提取器的残差形式）
        let result = minimize_scalar(|x| (x + 7.25).abs(), 0.0, &MinimizerOptions::default());
        assert!(result.converged);
        assert!((result.x + 7.25).abs() < 1e-8);
    }

    #[test]
    fn test_large_scale_target_from_zero() {
        let target = 2.5e6;
        let result = minimize_scalar(|x| (x - target).abs(), 0.0, &MinimizerOptions::default());
        assert!(result.converged);
        assert!((result.x - target).abs() / target < 1e-9);
    }

    #[test]
    fn test_nonzero_start() {
        let result = minimize_scalar(|x| (x - 1.0).powi(2), 10.0, &MinimizerOptions::default());
        assert!((result.x - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_nan_region_is_avoided() {
        // x < 0 时目标为 NaN
        let result = minimize_scalar(
            |x| (x.sqrt() - 2.0).abs(),
            0.0,
            &MinimizerOptions::default(),
        );
        assert!((result.x - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_flat_objective_converges_in_x_only() {
        let result = minimize_scalar(|_| 1.0e4, 0.0, &MinimizerOptions::default());
        assert!(result.converged);
        assert_eq!(result.fx, 1.0e4);
        assert!(result.x.abs() <= MinimizerOptions::default().zero_step);
    }

    #[test]
    fn test_iteration_cap_returns_best_point() {
        let options = MinimizerOptions {
            max_iterations: 3,
            ..MinimizerOptions::default()
        };
        let result = minimize_scalar(|x| (x - 1000.0).abs(), 0.0, &options);
        assert!(!result.converged);
        assert_eq!(result.iterations, 3);
        assert!(result.fx < 1000.0);
    }
}
