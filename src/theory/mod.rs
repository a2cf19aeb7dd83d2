//! 排队论闭式解（Theoretical Model Evaluator）
//!
//! M/D/1 与 M/M/1 的等待时间 CDF 及均值，用于和经验分布对比。
//! 两者都要求 λ < μ（稳定系统），否则显式拒绝。

use crate::error::ConfigError;
use crate::metrics::Cdf;

/// CDF 离散化步长（时间单位）。
const STEP: f64 = 0.1;

fn grid(t_max: f64) -> Vec<f64> {
    let n = (t_max.max(0.0).ceil() / STEP) as usize;
    (0..n).map(|k| k as f64 * STEP).collect()
}

fn check_rates(lambda: f64, mu: f64) -> Result<(), ConfigError> {
    ConfigError::check_rate("arrival rate", lambda)?;
    ConfigError::check_rate("service rate", mu)?;
    ConfigError::check_stable(lambda, mu)
}

/// M/D/1 等待时间 CDF，在 `[0, t_max]` 上按 0.1 步长求值。
///
/// `F(t) = (1 - λ/μ) · Σ_{j=0..⌊μt⌋} λ^j (j/μ - t)^j / j! · e^{-λ(j/μ - t)}`
///
/// `λ^j / j!` 用迭代累积，避免显式阶乘溢出。
pub fn md1_wait_cdf(lambda: f64, mu: f64, t_max: f64) -> Result<Cdf, ConfigError> {
    check_rates(lambda, mu)?;

    let xs = grid(t_max);
    let scale = 1.0 - lambda / mu;
    let ps = xs
        .iter()
        .map(|&t| {
            let mut sum = 0.0_f64;
            let mut coeff = 1.0_f64; // λ^j / j!
            let j_max = (mu * t).floor() as u64;
            for j in 0..=j_max {
                if j > 0 {
                    coeff *= lambda / j as f64;
                }
                let u = j as f64 / mu - t;
                sum += coeff * u.powi(j as i32) * (-lambda * u).exp();
            }
            scale * sum
        })
        .collect();

    Ok(Cdf { xs, ps })
}

/// M/M/1 等待时间 CDF：`F(t) = 1 - (λ/μ)·e^{-(μ-λ)t}`。
pub fn mm1_wait_cdf(lambda: f64, mu: f64, t_max: f64) -> Result<Cdf, ConfigError> {
    check_rates(lambda, mu)?;

    let xs = grid(t_max);
    let ps = xs
        .iter()
        .map(|&t| 1.0 - lambda / mu * (-(mu - lambda) * t).exp())
        .collect();

    Ok(Cdf { xs, ps })
}

/// M/M/1 平均排队等待：`W_q = λ / (μ(μ - λ))`。
pub fn mm1_mean_wait(lambda: f64, mu: f64) -> Result<f64, ConfigError> {
    check_rates(lambda, mu)?;
    Ok(lambda / (mu * (mu - lambda)))
}

/// M/D/1 平均排队等待：`W_q = λ / (2μ(μ - λ))`。
pub fn md1_mean_wait(lambda: f64, mu: f64) -> Result<f64, ConfigError> {
    check_rates(lambda, mu)?;
    Ok(lambda / (2.0 * mu * (mu - lambda)))
}
