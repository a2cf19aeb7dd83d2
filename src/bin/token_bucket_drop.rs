use clap::Parser;
use qsim_rs::report::Report;
use qsim_rs::sim::{TokenBucketScenario, run_token_bucket_drop};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

/// 令牌桶准入控制（无队列，无令牌即丢弃）
#[derive(Debug, Parser)]
#[command(
    name = "token-bucket-drop",
    about = "Simulate a token bucket shaper with no queue, counting dropped packets"
)]
struct Args {
    /// Number of packets received by the shaper
    #[arg(long, default_value_t = 10_000)]
    packets: usize,

    /// Long term average packet arrival rate (per second)
    #[arg(long, default_value_t = 350.0)]
    arrival_rate: f64,

    /// Token generation rate (per second)
    #[arg(long, default_value_t = 350.0)]
    token_rate: f64,

    /// Max tokens in the bucket
    #[arg(long, default_value_t = 2.0)]
    bucket_size: f64,

    /// RNG seed; omit for a fresh run each time
    #[arg(long)]
    seed: Option<u64>,

    /// Output JSON report file; omit to skip
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

    let report = match run_token_bucket_drop(&cfg, &mut rng) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    };

    if let Report::TokenBucketDrop { drop_count, .. } = &report {
        println!("drop_count {drop_count}");
    }

    if let Some(out) = args.out {
        if let Err(err) = report.write_json(&out) {
            eprintln!("error: write {}: {err}", out.display());
            std::process::exit(1);
        }
        println!("report_json {}", out.display());
    }
}
