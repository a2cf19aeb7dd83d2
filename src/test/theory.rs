use crate::error::ConfigError;
use crate::theory::{md1_mean_wait, md1_wait_cdf, mm1_mean_wait, mm1_wait_cdf};

#[test]
fn unstable_systems_are_rejected() {
    assert_eq!(
        mm1_wait_cdf(1.0, 1.0, 5.0),
        Err(ConfigError::Unstable {
            lambda: 1.0,
            mu: 1.0
        })
    );
    assert!(mm1_wait_cdf(2.0, 1.0, 5.0).is_err());
    assert!(md1_wait_cdf(1.0, 1.0, 5.0).is_err());
    assert!(mm1_mean_wait(3.0, 2.0).is_err());
    assert!(md1_mean_wait(3.0, 2.0).is_err());
}

#[test]
fn non_positive_rates_are_rejected() {
    assert!(mm1_wait_cdf(0.0, 1.0, 5.0).is_err());
    assert!(mm1_wait_cdf(0.5, -1.0, 5.0).is_err());
    assert!(md1_wait_cdf(-0.5, 1.0, 5.0).is_err());
}

#[test]
fn mm1_cdf_starts_at_one_minus_rho_and_approaches_one() {
    let cdf = mm1_wait_cdf(0.5, 1.0, 20.0).expect("stable");
    assert_eq!(cdf.xs.len(), cdf.ps.len());
    assert_eq!(cdf.xs[0], 0.0);
    assert!((cdf.ps[0] - 0.5).abs() < 1e-12, "F(0) = {}", cdf.ps[0]);
    let last = *cdf.ps.last().expect("non-empty");
    assert!(last > 0.99, "F(t_max) = {last}");
}

#[test]
fn mm1_cdf_is_monotone_within_unit_interval() {
    let cdf = mm1_wait_cdf(0.8, 1.0, 30.0).expect("stable");
    for w in cdf.ps.windows(2) {
        assert!(w[1] >= w[0] - 1e-12);
    }
    assert!(cdf.ps.iter().all(|&p| (0.0..=1.0 + 1e-12).contains(&p)));
}

#[test]
fn md1_cdf_starts_at_one_minus_rho_and_is_monotone() {
    let cdf = md1_wait_cdf(0.5, 1.0, 10.0).expect("stable");
    assert!((cdf.ps[0] - 0.5).abs() < 1e-12, "F(0) = {}", cdf.ps[0]);
    for w in cdf.ps.windows(2) {
        assert!(w[1] >= w[0] - 1e-9, "non-monotone CDF");
    }
    assert!(cdf.ps.iter().all(|&p| (0.0..=1.0 + 1e-9).contains(&p)));
    let last = *cdf.ps.last().expect("non-empty");
    assert!(last > 0.99, "F(t_max) = {last}");
}

#[test]
fn md1_waits_stochastically_less_than_mm1() {
    // Deterministic service has no variance, so at every t the M/D/1 wait
    // CDF dominates the M/M/1 one.
    let md1 = md1_wait_cdf(0.7, 1.0, 10.0).expect("stable");
    let mm1 = mm1_wait_cdf(0.7, 1.0, 10.0).expect("stable");
    for (d, m) in md1.ps.iter().zip(mm1.ps.iter()) {
        assert!(d >= &(m - 1e-9), "M/D/1 below M/M/1");
    }
}

#[test]
fn mean_waits_match_closed_forms() {
    // W_q(M/M/1) = lambda / (mu (mu - lambda)); M/D/1 is exactly half.
    let mm1 = mm1_mean_wait(0.5, 1.0).expect("stable");
    let md1 = md1_mean_wait(0.5, 1.0).expect("stable");
    assert!((mm1 - 1.0).abs() < 1e-12);
    assert!((md1 - 0.5).abs() < 1e-12);
}

#[test]
fn zero_horizon_yields_an_empty_grid() {
    let cdf = mm1_wait_cdf(0.5, 1.0, 0.0).expect("stable");
    assert!(cdf.xs.is_empty());
    assert!(cdf.ps.is_empty());
}
