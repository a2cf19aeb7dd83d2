use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("qsim-rs-{prefix}-{}-{nanos}", std::process::id()));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

#[test]
fn token_bucket_writes_report_json_with_full_envelopes() {
    let dir = unique_temp_dir("token-bucket");
    let out = dir.join("report.json");

    let output = Command::new(env!("CARGO_BIN_EXE_token_bucket"))
        .args([
            "--packets",
            "50",
            "--arrival-rate",
            "350",
            "--token-rate",
            "350",
            "--bucket-size",
            "5",
            "--seed",
            "1",
            "--out",
        ])
        .arg(&out)
        .output()
        .expect("run token_bucket");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.lines().any(|l| l.starts_with("mean_wait ")), "stdout: {stdout}");

    let json: Value =
        serde_json::from_str(&fs::read_to_string(&out).expect("read report")).expect("parse json");
    assert_eq!(json["scenario"], "token_bucket");
    assert_eq!(json["packets"], 50);

    let arrivals = json["arrivals"].as_array().expect("arrivals");
    let departures = json["departures"].as_array().expect("departures");
    assert_eq!(arrivals.len(), 50);
    assert_eq!(departures.len(), 50);
    for (a, d) in arrivals.iter().zip(departures.iter()) {
        let (a, d) = (a.as_f64().expect("f64"), d.as_f64().expect("f64"));
        assert!(d >= a, "departure {d} precedes arrival {a}");
    }

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn token_bucket_is_reproducible_under_a_fixed_seed() {
    let dir = unique_temp_dir("token-bucket-seed");
    let run = |name: &str| -> Value {
        let out = dir.join(name);
        let output = Command::new(env!("CARGO_BIN_EXE_token_bucket"))
            .args(["--packets", "20", "--seed", "99", "--out"])
            .arg(&out)
            .output()
            .expect("run token_bucket");
        assert!(output.status.success());
        serde_json::from_str(&fs::read_to_string(&out).expect("read report")).expect("parse json")
    };

    assert_eq!(run("a.json"), run("b.json"));
    fs::remove_dir_all(&dir).ok();
}

#[test]
fn token_bucket_drop_prints_drop_count_and_respects_config_errors() {
    let output = Command::new(env!("CARGO_BIN_EXE_token_bucket_drop"))
        .args([
            "--packets",
            "1000",
            "--arrival-rate",
            "350",
            "--token-rate",
            "350",
            "--bucket-size",
            "2",
            "--seed",
            "7",
        ])
        .output()
        .expect("run token_bucket_drop");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let count_line = stdout
        .lines()
        .find(|l| l.starts_with("drop_count "))
        .expect("drop_count line");
    let drops: u64 = count_line["drop_count ".len()..].trim().parse().expect("integer");
    assert!(drops <= 1000);

    // A bucket that cannot hold one whole token is a configuration error.
    let output = Command::new(env!("CARGO_BIN_EXE_token_bucket_drop"))
        .args(["--packets", "10", "--bucket-size", "0.5"])
        .output()
        .expect("run token_bucket_drop");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bucket capacity"), "stderr: {stderr}");
}
