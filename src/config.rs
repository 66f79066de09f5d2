use std::{env, str::FromStr};

use crate::{error::ConfigError, scheduler::PolicyKind, sim::WorkloadConfig};

pub const ENV_POLICIES: &str = "SCHED_POLICIES";
pub const ENV_QUANTUM: &str = "SCHED_QUANTUM";
pub const ENV_SEED: &str = "SCHED_SEED";
pub const ENV_TICKS: &str = "SCHED_TICKS";
pub const ENV_P_ARRIVAL: &str = "SCHED_P_ARRIVAL";

/// Settings for a batch of simulations over one synthetic workload.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub policies: Vec<PolicyKind>,
    pub quantum: i64,
    /// Seeds both the workload and the lottery draws.
    pub seed: u64,
    pub workload: WorkloadConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            policies: PolicyKind::ALL.to_vec(),
            quantum: 2,
            seed: 0,
            workload: WorkloadConfig::default(),
        }
    }
}

impl SimConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(list) = lookup(ENV_POLICIES) {
            config.policies = list
                .split(',')
                .filter(|s| !s.trim().is_empty())
                .map(PolicyKind::from_str)
                .collect::<Result<_, _>>()?;
        }
        if let Some(value) = lookup(ENV_QUANTUM) {
            config.quantum = parse(ENV_QUANTUM, &value)?;
        }
        if let Some(value) = lookup(ENV_SEED) {
            config.seed = parse(ENV_SEED, &value)?;
        }
        if let Some(value) = lookup(ENV_TICKS) {
            config.workload.ticks = parse(ENV_TICKS, &value)?;
        }
        if let Some(value) = lookup(ENV_P_ARRIVAL) {
            let p: f64 = parse(ENV_P_ARRIVAL, &value)?;
            if !(0.0..=1.0).contains(&p) {
                return Err(ConfigError::OutOfRange {
                    var: ENV_P_ARRIVAL,
                    range: "[0, 1]",
                    value,
                });
            }
            config.workload.p_arrival = p;
        }

        config.workload.seed = config.seed;
        Ok(config)
    }
}

fn parse<T: FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Unparsable {
        var,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let vars: HashMap<&'static str, String> =
            vars.iter().map(|&(k, v)| (k, v.to_string())).collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn defaults_without_overrides() {
        let config = SimConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, SimConfig::default());
    }

    #[test]
    fn overrides_apply() {
        let config = SimConfig::from_lookup(lookup(&[
            (ENV_POLICIES, "rr, hrrn,lottery"),
            (ENV_QUANTUM, "4"),
            (ENV_SEED, "17"),
            (ENV_TICKS, "50"),
        ]))
        .unwrap();
        assert_eq!(
            config.policies,
            vec![PolicyKind::RoundRobin, PolicyKind::Hrrn, PolicyKind::Lottery]
        );
        assert_eq!(config.quantum, 4);
        assert_eq!(config.workload.seed, 17);
        assert_eq!(config.workload.ticks, 50);
    }

    #[test]
    fn bad_values_are_reported() {
        assert_eq!(
            SimConfig::from_lookup(lookup(&[(ENV_POLICIES, "fcfs,edf")])),
            Err(ConfigError::UnknownPolicy("edf".to_string()))
        );
        assert!(matches!(
            SimConfig::from_lookup(lookup(&[(ENV_QUANTUM, "two")])),
            Err(ConfigError::Unparsable { var: ENV_QUANTUM, .. })
        ));
        assert!(matches!(
            SimConfig::from_lookup(lookup(&[(ENV_P_ARRIVAL, "1.5")])),
            Err(ConfigError::OutOfRange { .. })
        ));
    }
}
