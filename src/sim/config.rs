use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Token bucket shaper / admission-control parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenBucketScenario {
    /// Number of packets received by the shaper
    pub packets: usize,
    /// Long term average packet arrival rate (per second)
    pub arrival_rate: f64,
    /// Token generation rate (per second)
    pub token_rate: f64,
    /// Max tokens in the bucket
    pub bucket_size: f64,
}

impl TokenBucketScenario {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.packets == 0 {
            return Err(ConfigError::ZeroPackets);
        }
        ConfigError::check_rate("arrival rate", self.arrival_rate)?;
        ConfigError::check_rate("token rate", self.token_rate)?;
        if !(self.bucket_size >= 1.0) {
            return Err(ConfigError::CapacityTooSmall(self.bucket_size));
        }
        Ok(())
    }
}

/// M/D/1: Poisson arrivals, constant service time 1/mu.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Md1Scenario {
    pub packets: usize,
    /// lambda
    pub arrival_rate: f64,
    /// mu; service time is the constant 1/mu
    pub service_rate: f64,
}

impl Md1Scenario {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.packets == 0 {
            return Err(ConfigError::ZeroPackets);
        }
        ConfigError::check_rate("arrival rate", self.arrival_rate)?;
        ConfigError::check_rate("service rate", self.service_rate)?;
        ConfigError::check_stable(self.arrival_rate, self.service_rate)
    }
}

/// M/M/1: Poisson arrivals, Exp(mu) service times.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mm1Scenario {
    pub packets: usize,
    pub arrival_rate: f64,
    pub service_rate: f64,
}

impl Mm1Scenario {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.packets == 0 {
            return Err(ConfigError::ZeroPackets);
        }
        ConfigError::check_rate("arrival rate", self.arrival_rate)?;
        ConfigError::check_rate("service rate", self.service_rate)?;
        ConfigError::check_stable(self.arrival_rate, self.service_rate)
    }
}

/// Two-class packet multiplexer (M/G/1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MuxScenario {
    pub packets: usize,
    /// Packet lengths of the two classes (bytes)
    pub packet_lengths: Vec<u64>,
    /// Traffic proportion of the two classes, must sum to 1
    pub class_probs: Vec<f64>,
    /// Outgoing link bandwidth (bits per second)
    pub bandwidth_bps: f64,
    /// Target utilization rho, in (0, 1)
    pub utilization: f64,
}

impl MuxScenario {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.packets == 0 {
            return Err(ConfigError::ZeroPackets);
        }
        if self.packet_lengths.len() != 2 {
            return Err(ConfigError::BadClassCount {
                expected: 2,
                got: self.packet_lengths.len(),
            });
        }
        if self.class_probs.len() != 2 {
            return Err(ConfigError::BadClassCount {
                expected: 2,
                got: self.class_probs.len(),
            });
        }
        if self.packet_lengths.iter().any(|&l| l == 0) {
            return Err(ConfigError::NonPositiveRate {
                name: "packet length",
                value: 0.0,
            });
        }
        let sum: f64 = self.class_probs.iter().sum();
        if (sum - 1.0).abs() > 1e-9 {
            return Err(ConfigError::BadClassProbs(sum));
        }
        ConfigError::check_rate("bandwidth", self.bandwidth_bps)?;
        if !(self.utilization > 0.0 && self.utilization < 1.0) {
            return Err(ConfigError::BadUtilization(self.utilization));
        }
        Ok(())
    }

    /// Per-class service times (seconds): length in bits over link bandwidth.
    pub fn service_times(&self) -> [f64; 2] {
        let bits = |bytes: u64| (bytes * 8) as f64;
        [
            bits(self.packet_lengths[0]) / self.bandwidth_bps,
            bits(self.packet_lengths[1]) / self.bandwidth_bps,
        ]
    }

    /// Average packet transmission rate mu = bandwidth / avg packet length (bits).
    pub fn service_rate(&self) -> f64 {
        let avg_bits = (self.packet_lengths[0] * 8) as f64 * self.class_probs[0]
            + (self.packet_lengths[1] * 8) as f64 * self.class_probs[1];
        self.bandwidth_bps / avg_bits
    }

    /// lambda = rho * mu.
    pub fn arrival_rate(&self) -> f64 {
        self.utilization * self.service_rate()
    }
}
