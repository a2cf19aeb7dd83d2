//! 派生指标（Metrics Aggregator）
//!
//! 从到达/离开包络派生 backlog 阶梯序列、每包等待时间、
//! 离开间隔与经验 CDF。全部是只读变换，不修改输入。

use serde::{Deserialize, Serialize};

/// backlog 阶梯序列：`counts[k]` 是 `times[k]` 时刻在系统中的 packet 数。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BacklogSeries {
    pub times: Vec<f64>,
    pub counts: Vec<u64>,
}

/// 离散化的 CDF：`ps[k] = F(xs[k])`。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cdf {
    pub xs: Vec<f64>,
    pub ps: Vec<f64>,
}

/// 在 `points` 个等宽区间端点上采样瞬时 backlog。
///
/// `pktInSystem(t) = #{arrival <= t} - #{departure <= t}`，要求两个包络
/// 均非降。用两个只向前推进、从不回退的游标各扫一遍，总工作量
/// O(N + points)，而不是每个区间重扫 O(N)。
///
/// 所有 packet 在 t=0 瞬间离开（等待全为 0 且首达为 0）时区间宽度
/// 无法定义，返回空序列而不是除零。
pub fn backlog_series(arrivals: &[f64], departures: &[f64], points: usize) -> BacklogSeries {
    debug_assert_eq!(arrivals.len(), departures.len());

    let horizon = departures.last().copied().unwrap_or(0.0);
    if points == 0 || horizon <= 0.0 {
        return BacklogSeries::default();
    }

    let dt = horizon / points as f64;
    let mut times = Vec::with_capacity(points);
    let mut counts = Vec::with_capacity(points);

    let mut arr_idx = 0_usize;
    let mut dep_idx = 0_usize;
    for k in 0..points {
        let t = dt * (k + 1) as f64;
        while arr_idx < arrivals.len() && arrivals[arr_idx] <= t {
            arr_idx += 1;
        }
        while dep_idx < departures.len() && departures[dep_idx] <= t {
            dep_idx += 1;
        }
        // dep[i] >= arr[i] 且两者有序，故 arr_idx >= dep_idx
        times.push(t);
        counts.push((arr_idx - dep_idx) as u64);
    }

    BacklogSeries { times, counts }
}

/// 每包等待时间序列：`departure[i] - arrival[i]`。
pub fn wait_times(arrivals: &[f64], departures: &[f64]) -> Vec<f64> {
    debug_assert_eq!(arrivals.len(), departures.len());
    arrivals
        .iter()
        .zip(departures.iter())
        .map(|(a, d)| d - a)
        .collect()
}

/// 离开间隔序列：离开包络的一阶差分，首项为 0。对 FIFO 全部非负。
pub fn inter_departures(departures: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(departures.len());
    let mut prev = None;
    for &d in departures {
        out.push(match prev {
            Some(p) => d - p,
            None => 0.0,
        });
        prev = Some(d);
    }
    out
}

/// 样本的经验 CDF：排序后 `F(x_(k)) = (k+1)/N`。
pub fn empirical_cdf(samples: &[f64]) -> Cdf {
    let mut xs: Vec<f64> = samples.to_vec();
    xs.sort_by(|a, b| a.partial_cmp(b).expect("non-NaN samples"));
    let n = xs.len() as f64;
    let ps = (0..xs.len()).map(|k| (k + 1) as f64 / n).collect();
    Cdf { xs, ps }
}

pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}
