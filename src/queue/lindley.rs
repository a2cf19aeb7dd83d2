//! 单服务台 FIFO：Lindley 递推
//!
//! `W[i] = max(0, W[i-1] + S[i-1] - A[i])`，`W[0] = 0`。
//! 不用显式队列结构就能得到每个 packet 开始服务前的排队等待时间。

/// 对给定的到达间隔与每包服务时间序列计算排队等待时间。
///
/// 两个序列长度必须一致（上游配置校验保证）。递推严格串行，
/// 以显式的累加器折叠实现，不依赖任何全局可变状态。
pub fn waiting_times(interarrivals: &[f64], service_times: &[f64]) -> Vec<f64> {
    debug_assert_eq!(interarrivals.len(), service_times.len());

    let n = interarrivals.len();
    let mut waits = Vec::with_capacity(n);
    if n == 0 {
        return waits;
    }

    waits.push(0.0);
    let mut prev = 0.0_f64;
    for i in 1..n {
        prev = (prev + service_times[i - 1] - interarrivals[i]).max(0.0);
        waits.push(prev);
    }
    waits
}

/// 离开时间包络：`departure[i] = arrival[i] + wait[i]`。
///
/// 对 FIFO 满足非降与 `departure[i] >= arrival[i]`。
pub fn departure_envelope(arrivals: &[f64], waits: &[f64]) -> Vec<f64> {
    debug_assert_eq!(arrivals.len(), waits.len());
    arrivals
        .iter()
        .zip(waits.iter())
        .map(|(a, w)| a + w)
        .collect()
}
