use rand::rngs::StdRng;
use tracing::info;

use super::backlog_points;
use super::config::{Md1Scenario, Mm1Scenario, MuxScenario, TokenBucketScenario};
use crate::dist::{self, ClassMix, Constant, Exponential, PacketClass, Sampler};
use crate::error::ConfigError;
use crate::metrics;
use crate::queue::{self, TokenBucket};
use crate::report::{Report, Trace};
use crate::theory;

/// 从到达/离开包络组装完整的派生指标序列。
fn build_trace(arrivals: Vec<f64>, departures: Vec<f64>, points: usize) -> Trace {
    let wait_times = metrics::wait_times(&arrivals, &departures);
    let inter_departures = metrics::inter_departures(&departures);
    let backlog = metrics::backlog_series(&arrivals, &departures, points);
    let wait_cdf = metrics::empirical_cdf(&wait_times);
    let mean_wait = metrics::mean(&wait_times);
    Trace {
        arrivals,
        departures,
        wait_times,
        inter_departures,
        backlog,
        wait_cdf,
        mean_wait,
    }
}

/// 令牌桶整形（无限队列）。
pub fn run_token_bucket(
    cfg: &TokenBucketScenario,
    rng: &mut StdRng,
) -> Result<Report, ConfigError> {
    cfg.validate()?;
    info!(
        packets = cfg.packets,
        arrival_rate = cfg.arrival_rate,
        token_rate = cfg.token_rate,
        bucket_size = cfg.bucket_size,
        "▶️  令牌桶整形仿真"
    );

    let interarrivals = dist::exp_interarrivals(rng, cfg.arrival_rate, cfg.packets)?;
    let arrivals = dist::cumsum(&interarrivals);

    let bucket = TokenBucket::new(cfg.token_rate, cfg.bucket_size)?;
    let shaped = bucket.shape(&arrivals);

    let trace = build_trace(arrivals, shaped.departures, backlog_points(cfg.packets));
    info!(mean_wait = trace.mean_wait, "仿真完成");

    Ok(Report::TokenBucket {
        packets: cfg.packets,
        arrival_rate: cfg.arrival_rate,
        token_rate: cfg.token_rate,
        bucket_size: cfg.bucket_size,
        trace,
    })
}

/// 令牌桶准入控制（无队列，超额丢弃）。
pub fn run_token_bucket_drop(
    cfg: &TokenBucketScenario,
    rng: &mut StdRng,
) -> Result<Report, ConfigError> {
    cfg.validate()?;
    info!(
        packets = cfg.packets,
        arrival_rate = cfg.arrival_rate,
        token_rate = cfg.token_rate,
        bucket_size = cfg.bucket_size,
        "▶️  令牌桶准入控制仿真"
    );

    let interarrivals = dist::exp_interarrivals(rng, cfg.arrival_rate, cfg.packets)?;
    let bucket = TokenBucket::new(cfg.token_rate, cfg.bucket_size)?;
    let drop_count = bucket.admit(&interarrivals);
    info!(drop_count, "仿真完成");

    Ok(Report::TokenBucketDrop {
        packets: cfg.packets,
        arrival_rate: cfg.arrival_rate,
        token_rate: cfg.token_rate,
        bucket_size: cfg.bucket_size,
        drop_count,
    })
}

/// M/D/1：Lindley 递推 + 闭式 CDF 对照。
pub fn run_md1(cfg: &Md1Scenario, rng: &mut StdRng) -> Result<Report, ConfigError> {
    cfg.validate()?;
    info!(
        packets = cfg.packets,
        lambda = cfg.arrival_rate,
        mu = cfg.service_rate,
        "▶️  M/D/1 仿真"
    );

    let interarrivals = dist::exp_interarrivals(rng, cfg.arrival_rate, cfg.packets)?;
    let mut service = Constant::new(1.0 / cfg.service_rate)?;
    let service_times: Vec<f64> = (0..cfg.packets).map(|_| service.sample(rng)).collect();

    let waits = queue::waiting_times(&interarrivals, &service_times);
    let arrivals = dist::cumsum(&interarrivals);
    let departures = queue::departure_envelope(&arrivals, &waits);

    let wait_max = waits.iter().cloned().fold(0.0_f64, f64::max);
    let theory_cdf = theory::md1_wait_cdf(cfg.arrival_rate, cfg.service_rate, wait_max)?;
    let theory_mean_wait = theory::md1_mean_wait(cfg.arrival_rate, cfg.service_rate)?;

    let trace = build_trace(arrivals, departures, backlog_points(cfg.packets));
    info!(
        mean_wait = trace.mean_wait,
        theory_mean_wait, "仿真完成"
    );

    Ok(Report::Md1 {
        packets: cfg.packets,
        arrival_rate: cfg.arrival_rate,
        service_rate: cfg.service_rate,
        theory_cdf,
        theory_mean_wait,
        trace,
    })
}

/// M/M/1：Lindley 递推 + 闭式 CDF 对照。
pub fn run_mm1(cfg: &Mm1Scenario, rng: &mut StdRng) -> Result<Report, ConfigError> {
    cfg.validate()?;
    info!(
        packets = cfg.packets,
        lambda = cfg.arrival_rate,
        mu = cfg.service_rate,
        "▶️  M/M/1 仿真"
    );

    let interarrivals = dist::exp_interarrivals(rng, cfg.arrival_rate, cfg.packets)?;
    let mut service = Exponential::new(cfg.service_rate)?;
    let service_times: Vec<f64> = (0..cfg.packets).map(|_| service.sample(rng)).collect();

    let waits = queue::waiting_times(&interarrivals, &service_times);
    let arrivals = dist::cumsum(&interarrivals);
    let departures = queue::departure_envelope(&arrivals, &waits);

    let wait_max = waits.iter().cloned().fold(0.0_f64, f64::max);
    let theory_cdf = theory::mm1_wait_cdf(cfg.arrival_rate, cfg.service_rate, wait_max)?;
    let theory_mean_wait = theory::mm1_mean_wait(cfg.arrival_rate, cfg.service_rate)?;

    let trace = build_trace(arrivals, departures, backlog_points(cfg.packets));
    info!(
        mean_wait = trace.mean_wait,
        theory_mean_wait, "仿真完成"
    );

    Ok(Report::Mm1 {
        packets: cfg.packets,
        arrival_rate: cfg.arrival_rate,
        service_rate: cfg.service_rate,
        theory_cdf,
        theory_mean_wait,
        trace,
    })
}

/// 两类包复用器（M/G/1）：每包按 Bernoulli 抽类别，服务时间查表。
pub fn run_mux(cfg: &MuxScenario, rng: &mut StdRng) -> Result<Report, ConfigError> {
    cfg.validate()?;

    let per_class = cfg.service_times();
    let mu = cfg.service_rate();
    let lambda = cfg.arrival_rate();
    info!(
        packets = cfg.packets,
        bandwidth_bps = cfg.bandwidth_bps,
        utilization = cfg.utilization,
        lambda,
        mu,
        "▶️  复用器仿真"
    );

    let mix = ClassMix::new([cfg.class_probs[0], cfg.class_probs[1]])?;
    let interarrivals = dist::exp_interarrivals(rng, lambda, cfg.packets)?;
    let service_times: Vec<f64> = (0..cfg.packets)
        .map(|_| match mix.draw(rng) {
            PacketClass::Short => per_class[0],
            PacketClass::Long => per_class[1],
        })
        .collect();

    let waits = queue::waiting_times(&interarrivals, &service_times);
    let arrivals = dist::cumsum(&interarrivals);
    let departures = queue::departure_envelope(&arrivals, &waits);

    let trace = build_trace(arrivals, departures, backlog_points(cfg.packets));
    info!(mean_wait = trace.mean_wait, "仿真完成");

    Ok(Report::Mux {
        packets: cfg.packets,
        arrival_rate: lambda,
        service_rate: mu,
        utilization: cfg.utilization,
        trace,
    })
}
