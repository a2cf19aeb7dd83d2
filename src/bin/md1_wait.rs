use clap::Parser;
use qsim_rs::report::Report;
use qsim_rs::sim::{Md1Scenario, run_md1};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

/// M/D/1 排队系统：泊松到达，常数服务时间
#[derive(Debug, Parser)]
#[command(
    name = "md1-wait",
    about = "Simulate an M/D/1 queue via Lindley's recursion and compare with the closed-form CDF"
)]
struct Args {
    /// Number of packets received by the queueing system
    #[arg(long, default_value_t = 1000)]
    packets: usize,

    /// Long term average packet arrival rate lambda (per second)
    #[arg(long, default_value_t = 0.5)]
    arrival_rate: f64,

    /// Constant service rate mu (per second); must exceed the arrival rate
    #[arg(long, default_value_t = 1.0)]
    service_rate: f64,

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
    let cfg = Md1Scenario {
        packets: args.packets,
        arrival_rate: args.arrival_rate,
        service_rate: args.service_rate,
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let report = match run_md1(&cfg, &mut rng) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    };

    if let Report::Md1 {
        trace,
        theory_mean_wait,
        ..
    } = &report
    {
        println!("mean_wait {}", trace.mean_wait);
        println!("theory_mean_wait {theory_mean_wait}");
    }

    if let Some(out) = args.out {
        if let Err(err) = report.write_json(&out) {
            eprintln!("error: write {}: {err}", out.display());
            std::process::exit(1);
        }
        println!("report_json {}", out.display());
    }
}
