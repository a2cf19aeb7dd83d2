use clap::Parser;
use qsim_rs::report::Report;
use qsim_rs::sim::{TokenBucketScenario, run_token_bucket};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

/// 令牌桶整形器（无限队列，永不丢包）
#[derive(Debug, Parser)]
#[command(
    name = "token-bucket",
    about = "Simulate a token bucket traffic shaper with an infinite queue"
)]
struct Args {
    /// Number of packets received by the shaper
    #[arg(long, default_value_t = 1000)]
    packets: usize,

    /// Long term average packet arrival rate (per second)
    #[arg(long, default_value_t = 350.0)]
    arrival_rate: f64,

    /// Token generation rate (per second)
    #[arg(long, default_value_t = 350.0)]
    token_rate: f64,

    /// Max tokens in the bucket
    #[arg(long, default_value_t = 5.0)]
    bucket_size: f64,

    /// RNG seed; omit for a fresh run each time
    #[arg(long)]
    seed: Option<u64>,

    /// 输出 JSON 报告文件（供绘图层加载）；不填则不生成
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();
    let cfg = TokenBucketScenario {
        packets: args.packets,
        arrival_rate: args.arrival_rate,
        token_rate: args.token_rate,
        bucket_size: args.bucket_size,
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let report = match run_token_bucket(&cfg, &mut rng) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    };

    if let Report::TokenBucket { trace, .. } = &report {
        println!("mean_wait {}", trace.mean_wait);
    }

    if let Some(out) = args.out {
        if let Err(err) = report.write_json(&out) {
            eprintln!("error: write {}: {err}", out.display());
            std::process::exit(1);
        }
        println!("report_json {}", out.display());
    }
}
