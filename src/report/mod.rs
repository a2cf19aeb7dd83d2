//! 仿真结果输出（供外部绘图层消费）
//!
//! 设计目标与取舍：
//! - **结构化**：输出 JSON 数组而不是文本日志，绘图端自行渲染
//! - **自包含**：一个文件包含一次仿真的全部序列与参数回显
//!
//! 本 crate 不做任何绘图。

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::metrics::{BacklogSeries, Cdf};

/// 一次仿真的完整时间序列。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Trace {
    pub arrivals: Vec<f64>,
    pub departures: Vec<f64>,
    pub wait_times: Vec<f64>,
    pub inter_departures: Vec<f64>,
    pub backlog: BacklogSeries,
    pub wait_cdf: Cdf,
    pub mean_wait: f64,
}

/// 仿真报告，按场景打标签序列化。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "scenario", rename_all = "snake_case")]
pub enum Report {
    /// 令牌桶整形（无限队列，无丢包）
    TokenBucket {
        packets: usize,
        arrival_rate: f64,
        token_rate: f64,
        bucket_size: f64,
        #[serde(flatten)]
        trace: Trace,
    },
    /// 令牌桶准入控制（无队列），只有丢包计数
    TokenBucketDrop {
        packets: usize,
        arrival_rate: f64,
        token_rate: f64,
        bucket_size: f64,
        drop_count: u64,
    },
    /// M/D/1：经验 + 理论 CDF
    Md1 {
        packets: usize,
        arrival_rate: f64,
        service_rate: f64,
        theory_cdf: Cdf,
        theory_mean_wait: f64,
        #[serde(flatten)]
        trace: Trace,
    },
    /// M/M/1：经验 + 理论 CDF
    Mm1 {
        packets: usize,
        arrival_rate: f64,
        service_rate: f64,
        theory_cdf: Cdf,
        theory_mean_wait: f64,
        #[serde(flatten)]
        trace: Trace,
    },
    /// 两类包复用器（M/G/1），只有经验分布
    Mux {
        packets: usize,
        arrival_rate: f64,
        service_rate: f64,
        utilization: f64,
        #[serde(flatten)]
        trace: Trace,
    },
}

impl Report {
    /// 将报告以 JSON 写入 `path`。
    pub fn write_json(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string(self).map_err(io::Error::other)?;
        fs::write(path, json)
    }
}
