//! 随机过程生成器
//!
//! 生成到达间隔与服务时间序列（指数分布、常数、两类分类抽取）。
//! 所有采样器都显式接收 RNG，种子由调用方控制以便复现。

use rand::Rng;
use rand::rngs::StdRng;
use rand_distr::{Bernoulli, Distribution, Exp};

use crate::error::ConfigError;

/// 每包一个样本的采样器抽象（服务时间用）。
pub trait Sampler {
    fn sample(&mut self, rng: &mut StdRng) -> f64;
}

/// 指数分布采样器，均值 1/rate。
#[derive(Debug, Clone)]
pub struct Exponential {
    dist: Exp<f64>,
}

impl Exponential {
    pub fn new(rate: f64) -> Result<Self, ConfigError> {
        ConfigError::check_rate("rate", rate)?;
        let dist = Exp::new(rate).map_err(|_| ConfigError::NonPositiveRate {
            name: "rate",
            value: rate,
        })?;
        Ok(Self { dist })
    }
}

impl Sampler for Exponential {
    fn sample(&mut self, rng: &mut StdRng) -> f64 {
        self.dist.sample(rng)
    }
}

/// 常数采样器（确定性服务时间）。
#[derive(Debug, Clone, Copy)]
pub struct Constant(f64);

impl Constant {
    pub fn new(value: f64) -> Result<Self, ConfigError> {
        ConfigError::check_rate("service time", value)?;
        Ok(Self(value))
    }
}

impl Sampler for Constant {
    fn sample(&mut self, _rng: &mut StdRng) -> f64 {
        self.0
    }
}

/// 生成 n 个独立同分布的 Exp(rate) 到达间隔。
pub fn exp_interarrivals(
    rng: &mut StdRng,
    rate: f64,
    n: usize,
) -> Result<Vec<f64>, ConfigError> {
    if n == 0 {
        return Err(ConfigError::ZeroPackets);
    }
    let mut sampler = Exponential::new(rate)?;
    Ok((0..n).map(|_| sampler.sample(rng)).collect())
}

/// 到达间隔的前缀和，即到达时间包络（非递减）。
pub fn cumsum(deltas: &[f64]) -> Vec<f64> {
    let mut acc = 0.0;
    deltas
        .iter()
        .map(|d| {
            acc += d;
            acc
        })
        .collect()
}

/// 复用器的包类别。显式枚举而不是 0/1 下标，便于扩展到更多类别。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacketClass {
    Short,
    Long,
}

/// 两类分类抽取：每包独立掷一次 Bernoulli(P(Long))。
#[derive(Debug, Clone)]
pub struct ClassMix {
    dist: Bernoulli,
}

impl ClassMix {
    /// `probs = [P(Short), P(Long)]`，必须和为 1。
    pub fn new(probs: [f64; 2]) -> Result<Self, ConfigError> {
        let sum = probs[0] + probs[1];
        if (sum - 1.0).abs() > 1e-9 {
            return Err(ConfigError::BadClassProbs(sum));
        }
        if probs.iter().any(|p| *p < 0.0) {
            return Err(ConfigError::BadClassProbs(sum));
        }
        let dist = Bernoulli::new(probs[1]).map_err(|_| ConfigError::BadClassProbs(sum))?;
        Ok(Self { dist })
    }

    pub fn draw(&self, rng: &mut StdRng) -> PacketClass {
        if rng.sample(self.dist) {
            PacketClass::Long
        } else {
            PacketClass::Short
        }
    }
}
