use clap::Parser;
use qsim_rs::report::Report;
use qsim_rs::sim::{MuxScenario, run_mux};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

/// 两类包复用器（M/G/1）：两种包长按比例混合，经一条出链路串行发送
#[derive(Debug, Parser)]
#[command(
    name = "mux-wait",
    about = "Simulate a two-class packet multiplexer (M/G/1) via Lindley's recursion"
)]
struct Args {
    /// Number of packets received by the multiplexer
    #[arg(long, default_value_t = 10_000)]
    packets: usize,

    /// Packet lengths of the two classes (bytes)
    #[arg(long, num_args = 2, default_values_t = [40, 1500])]
    packet_lengths: Vec<u64>,

    /// Traffic proportion of the two classes; must sum to 1
    #[arg(long, num_args = 2, default_values_t = [0.25, 0.75])]
    class_probs: Vec<f64>,

    /// Outgoing link bandwidth (bits per second)
    #[arg(long, default_value_t = 100_000_000.0)]
    bandwidth_bps: f64,

    /// Target utilization rho, in (0, 1)
    #[arg(long, default_value_t = 0.5)]
    utilization: f64,

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
    let cfg = MuxScenario {
        packets: args.packets,
        packet_lengths: args.packet_lengths,
        class_probs: args.class_probs,
        bandwidth_bps: args.bandwidth_bps,
        utilization: args.utilization,
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let report = match run_mux(&cfg, &mut rng) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    };

    if let Report::Mux { trace, .. } = &report {
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
