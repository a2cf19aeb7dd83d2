//! 令牌桶（Token Bucket）
//!
//! 桶中最多 `capacity` 个令牌，按 `token_rate` 连续累积；
//! 一个令牌放行一个 packet。两种策略共用同一累积规则：
//! - `shape`：无限队列，无令牌时 packet 延迟到令牌凑足 1 个；
//! - `admit`：无队列，无令牌时直接丢弃。

use tracing::debug;

use crate::error::ConfigError;

/// 令牌桶参数。`credits` 的生命周期只在一次仿真内，结束即丢弃。
#[derive(Debug, Clone, Copy)]
pub struct TokenBucket {
    token_rate: f64,
    capacity: f64,
}

/// 整形结果：完整的离开时间包络。整形策略从不丢包。
#[derive(Debug, Clone)]
pub struct ShapeResult {
    pub departures: Vec<f64>,
}

impl TokenBucket {
    pub fn new(token_rate: f64, capacity: f64) -> Result<Self, ConfigError> {
        ConfigError::check_rate("token rate", token_rate)?;
        if !(capacity >= 1.0) {
            return Err(ConfigError::CapacityTooSmall(capacity));
        }
        Ok(Self {
            token_rate,
            capacity,
        })
    }

    pub fn token_rate(&self) -> f64 {
        self.token_rate
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// 无限队列整形：对每个到达时间给出离开时间。
    ///
    /// 初始假设桶满且第 0 个 packet 在 t=0 已立即发出，
    /// 所以 credits 从 `capacity - 1` 开始、`departures[0] = arrivals[0]`。
    /// 之后每个 packet：先按距上次离开的间隔累积令牌（封顶 capacity），
    /// 够 1 个则立即发出，否则等 `(1 - credits) / token_rate` 后发出并清零。
    pub fn shape(&self, arrivals: &[f64]) -> ShapeResult {
        let mut departures = Vec::with_capacity(arrivals.len());
        if arrivals.is_empty() {
            return ShapeResult { departures };
        }

        departures.push(arrivals[0]);
        let mut credits = self.capacity - 1.0;
        let mut last_departure = arrivals[0];

        for &t in &arrivals[1..] {
            // t 可能早于上次离开；此时 dt 为负，表示欠下的累积时间
            let dt = t - last_departure;
            let accrued = (credits + self.token_rate * dt).min(self.capacity);

            if accrued >= 1.0 {
                credits = accrued - 1.0;
                last_departure = t;
            } else {
                let wait = (1.0 - accrued) / self.token_rate;
                credits = 0.0;
                last_departure = t + wait;
            }
            debug_assert!(credits >= 0.0 && credits <= self.capacity);
            departures.push(last_departure);
        }

        debug!(
            packets = arrivals.len(),
            last_departure, "令牌桶整形完成"
        );
        ShapeResult { departures }
    }

    /// 无队列准入控制：返回被丢弃的 packet 数。
    ///
    /// 桶从空开始，每个 packet 按自己的到达间隔累积令牌；
    /// 不足 1 个令牌时丢弃，已累积的零头保留在桶里继续累积。
    pub fn admit(&self, interarrivals: &[f64]) -> u64 {
        let mut credits = 0.0_f64;
        let mut drops = 0_u64;

        for &gap in interarrivals {
            credits = (credits + self.token_rate * gap).min(self.capacity);
            if credits >= 1.0 {
                credits -= 1.0;
            } else {
                drops += 1;
            }
        }

        debug!(packets = interarrivals.len(), drops, "准入控制完成");
        drops
    }
}
