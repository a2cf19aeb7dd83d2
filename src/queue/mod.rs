//! 队列与整形策略（Queueing disciplines）
//!
//! 提供三种离散策略：令牌桶整形（无限队列）、令牌桶准入控制（无队列，
//! 超额丢弃）、单服务台 FIFO（Lindley 递推）。全部是严格串行的
//! 前缀计算：每一步只依赖上一步的状态。

mod lindley;
mod token_bucket;

pub use lindley::{departure_envelope, waiting_times};
pub use token_bucket::{ShapeResult, TokenBucket};
