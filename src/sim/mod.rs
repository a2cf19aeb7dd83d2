//! 仿真场景（scenario runners）
//!
//! 把生成器、队列策略、理论求值与指标聚合串成一次完整的批处理
//! 仿真：校验配置 → 采样 → 递推 → 派生指标 → 报告。
//! 单线程顺序执行，一个进程跑一个场景后结束。

mod config;
mod runner;

pub use config::{Md1Scenario, Mm1Scenario, MuxScenario, TokenBucketScenario};
pub use runner::{run_md1, run_mm1, run_mux, run_token_bucket, run_token_bucket_drop};

/// backlog 离散化采样点数：最多 10_000 个区间。
pub(crate) fn backlog_points(packets: usize) -> usize {
    packets.min(10_000)
}
