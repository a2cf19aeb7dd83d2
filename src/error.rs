//! 配置与稳定性错误
//!
//! 所有校验在采样/仿真开始之前完成，仿真过程中不会再出错。

use thiserror::Error;

/// 仿真配置错误：构造采样器、队列策略或场景时参数非法。
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("packet count must be positive")]
    ZeroPackets,

    #[error("{name} must be positive, got {value}")]
    NonPositiveRate { name: &'static str, value: f64 },

    #[error("bucket capacity must be at least 1 token, got {0}")]
    CapacityTooSmall(f64),

    #[error("class probabilities must sum to 1, got {0}")]
    BadClassProbs(f64),

    #[error("expected exactly {expected} packet classes, got {got}")]
    BadClassCount { expected: usize, got: usize },

    #[error("utilization must lie in (0, 1), got {0}")]
    BadUtilization(f64),

    #[error("unstable system: arrival rate {lambda} >= service rate {mu}")]
    Unstable { lambda: f64, mu: f64 },
}

impl ConfigError {
    /// `rate > 0` 检查的简写，`name` 用于错误信息。
    pub fn check_rate(name: &'static str, value: f64) -> Result<(), ConfigError> {
        if value > 0.0 && value.is_finite() {
            Ok(())
        } else {
            Err(ConfigError::NonPositiveRate { name, value })
        }
    }

    /// λ < μ 稳定性检查。闭式解在 λ >= μ 时发散,必须显式拒绝。
    pub fn check_stable(lambda: f64, mu: f64) -> Result<(), ConfigError> {
        if lambda < mu {
            Ok(())
        } else {
            Err(ConfigError::Unstable { lambda, mu })
        }
    }
}
