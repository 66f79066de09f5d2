use std::num::NonZeroU64;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    core::{Process, ProcessId, Ticks},
    error::InvalidInput,
    scheduler::PolicyKind,
};

/// A process as entered by a caller, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessSpec {
    pub arrival_time: i64,
    pub burst_time: i64,
    pub priority: Option<i64>,
    pub tickets: Option<i64>,
}

impl ProcessSpec {
    pub fn burst(burst_time: i64) -> Self {
        Self {
            burst_time,
            ..Self::default()
        }
    }

    pub fn arriving(arrival_time: i64, burst_time: i64) -> Self {
        Self {
            arrival_time,
            burst_time,
            ..Self::default()
        }
    }

    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_tickets(mut self, tickets: i64) -> Self {
        self.tickets = Some(tickets);
        self
    }
}

fn non_negative(process: ProcessId, field: &'static str, value: i64) -> Result<u64, InvalidInput> {
    u64::try_from(value).map_err(|_| InvalidInput::NegativeValue {
        process,
        field,
        value,
    })
}

/// Checks every spec for `policy` and assigns 1-based ids in input order.
/// Fails on the first offending process; nothing is scheduled on error.
pub fn validate(
    specs: &[ProcessSpec],
    policy: PolicyKind,
) -> Result<Vec<Process>, InvalidInput> {
    if specs.is_empty() {
        return Err(InvalidInput::EmptyProcessSet);
    }

    specs
        .iter()
        .enumerate()
        .map(|(i, spec)| {
            let id = i + 1;
            let arrival_time = non_negative(id, "arrival time", spec.arrival_time)?;
            let burst_time = non_negative(id, "burst time", spec.burst_time)?;
            let mut process = Process::new(id, arrival_time, burst_time);

            match (spec.priority, policy) {
                (Some(priority), _) => {
                    process.priority = non_negative(id, "priority", priority)?;
                }
                (None, PolicyKind::Priority) => {
                    return Err(InvalidInput::MissingField {
                        process: id,
                        field: "priority",
                    });
                }
                (None, _) => {}
            }

            if policy == PolicyKind::Lottery {
                // Missing tickets default to a single ticket
                let tickets = spec.tickets.unwrap_or(1);
                process.tickets = u64::try_from(tickets)
                    .ok()
                    .filter(|&t| t > 0)
                    .ok_or(InvalidInput::NonPositiveTickets {
                        process: id,
                        tickets,
                    })?;
            }

            Ok(process)
        })
        .collect()
}

pub fn validate_quantum(quantum: i64) -> Result<NonZeroU64, InvalidInput> {
    u64::try_from(quantum)
        .ok()
        .and_then(NonZeroU64::new)
        .ok_or(InvalidInput::NonPositiveQuantum(quantum))
}

/// Parameters for a synthetic process set.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkloadConfig {
    /// Arrivals are drawn for ticks `0..ticks`.
    pub ticks: Ticks,
    pub p_arrival: f64,
    pub p_short: f64,
    pub short_burst: Ticks,
    pub long_burst: Ticks,
    pub max_priority: u64,
    pub max_tickets: u64,
    pub seed: u64,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            ticks: 20,
            p_arrival: 0.3,
            p_short: 0.3,
            short_burst: 2,
            long_burst: 6,
            max_priority: 5,
            max_tickets: 10,
            seed: 0,
        }
    }
}

/// Bernoulli arrivals: each tick spawns a process with probability `p_arrival`,
/// whose burst is short with probability `p_short`.
pub fn bernoulli_workload(config: &WorkloadConfig) -> Vec<ProcessSpec> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut specs = Vec::new();

    for t in 0..config.ticks {
        if rng.random::<f64>() < config.p_arrival {
            let burst = if rng.random::<f64>() < config.p_short {
                config.short_burst
            } else {
                config.long_burst
            };

            specs.push(ProcessSpec {
                arrival_time: t as i64,
                burst_time: burst as i64,
                priority: Some(rng.random_range(0..=config.max_priority) as i64),
                tickets: Some(rng.random_range(1..=config.max_tickets.max(1)) as i64),
            });
        }
    }

    specs
}
