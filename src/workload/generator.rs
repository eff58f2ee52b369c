//! Random workload generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SimError};
use crate::models::{Pid, Process, Ticks};

/// Bounds for random workloads.
///
/// All bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadConfig {
    /// Number of processes (PIDs `1..=count`).
    pub count: usize,
    /// Latest arrival tick.
    pub max_arrival: Ticks,
    /// Longest burst. Bursts are drawn from `1..=max_burst`.
    pub max_burst: Ticks,
    /// Largest priority value. Priorities are drawn from `1..=max_priority`.
    pub max_priority: i32,
    /// RNG seed. `None` = nondeterministic.
    pub seed: Option<u64>,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            count: 5,
            max_arrival: 10,
            max_burst: 10,
            max_priority: 5,
            seed: None,
        }
    }
}

impl WorkloadConfig {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    pub fn with_max_arrival(mut self, max_arrival: Ticks) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    pub fn with_max_burst(mut self, max_burst: Ticks) -> Self {
        self.max_burst = max_burst;
        self
    }

    pub fn with_max_priority(mut self, max_priority: i32) -> Self {
        self.max_priority = max_priority;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks that the bounds can produce valid descriptors.
    pub fn validate(&self) -> Result<()> {
        if self.max_arrival < 0 {
            return Err(SimError::InvalidWorkloadConfig(format!(
                "max_arrival must be >= 0, got {}",
                self.max_arrival
            )));
        }
        if self.max_burst < 1 {
            return Err(SimError::InvalidWorkloadConfig(format!(
                "max_burst must be >= 1, got {}",
                self.max_burst
            )));
        }
        if self.max_priority < 1 {
            return Err(SimError::InvalidWorkloadConfig(format!(
                "max_priority must be >= 1, got {}",
                self.max_priority
            )));
        }
        if Pid::try_from(self.count).is_err() {
            return Err(SimError::InvalidWorkloadConfig(format!(
                "count {} exceeds the PID range",
                self.count
            )));
        }
        Ok(())
    }
}

/// Generates random process workloads.
#[derive(Debug, Clone, Default)]
pub struct WorkloadGenerator {
    config: WorkloadConfig,
}

impl WorkloadGenerator {
    pub fn new(config: WorkloadConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WorkloadConfig {
        &self.config
    }

    /// Generates a workload, seeded from the config when a seed is set.
    pub fn generate(&self) -> Result<Vec<Process>> {
        match self.config.seed {
            Some(seed) => self.generate_with(&mut StdRng::seed_from_u64(seed)),
            None => self.generate_with(&mut rand::rng()),
        }
    }

    /// Generates a workload from the given RNG.
    ///
    /// The result is sorted by arrival time; equal arrivals keep PID order.
    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> Result<Vec<Process>> {
        self.config.validate()?;
        let cfg = &self.config;

        let mut processes: Vec<Process> = (1..=cfg.count)
            .map(|i| {
                // count fits in Pid after validate()
                let pid = i as Pid;
                Process::new(pid, rng.random_range(1..=cfg.max_burst))
                    .with_arrival(rng.random_range(0..=cfg.max_arrival))
                    .with_priority(rng.random_range(1..=cfg.max_priority))
            })
            .collect();
        processes.sort_by_key(|p| p.arrival_time);

        debug!(count = processes.len(), seed = ?cfg.seed, "generated workload");
        Ok(processes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_processes;

    #[test]
    fn test_generated_workload_is_valid() {
        let config = WorkloadConfig::new(50).with_seed(7);
        let processes = WorkloadGenerator::new(config.clone()).generate().unwrap();

        assert_eq!(processes.len(), 50);
        assert!(validate_processes(&processes).is_ok());
        for p in &processes {
            assert!((0..=config.max_arrival).contains(&p.arrival_time));
            assert!((1..=config.max_burst).contains(&p.burst_time));
            assert!((1..=config.max_priority).contains(&p.priority));
        }
    }

    #[test]
    fn test_sorted_by_arrival() {
        let processes = WorkloadGenerator::new(WorkloadConfig::new(30).with_seed(1))
            .generate()
            .unwrap();
        assert!(processes
            .windows(2)
            .all(|w| w[0].arrival_time <= w[1].arrival_time));
    }

    #[test]
    fn test_same_seed_same_workload() {
        let config = WorkloadConfig::new(10).with_seed(42);
        let a = WorkloadGenerator::new(config.clone()).generate().unwrap();
        let b = WorkloadGenerator::new(config).generate().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_count() {
        let processes = WorkloadGenerator::new(WorkloadConfig::new(0))
            .generate()
            .unwrap();
        assert!(processes.is_empty());
    }

    #[test]
    fn test_invalid_bounds_rejected() {
        let config = WorkloadConfig::new(3).with_max_burst(0);
        let err = WorkloadGenerator::new(config).generate().unwrap_err();
        assert!(matches!(err, SimError::InvalidWorkloadConfig(_)));

        let config = WorkloadConfig::new(3).with_max_arrival(-1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_partial_json() {
        let config: WorkloadConfig = serde_json::from_str(r#"{"count": 8, "seed": 3}"#).unwrap();
        assert_eq!(config.count, 8);
        assert_eq!(config.max_burst, 10);
        assert_eq!(config.seed, Some(3));
    }
}
