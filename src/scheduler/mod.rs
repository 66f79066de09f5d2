pub mod fcfs;
pub mod hrrn;
pub mod lottery;
pub mod order;
pub mod priority;
pub mod round_robin;
pub mod sjf;

use std::{fmt, str::FromStr};

use crate::{
    core::{SimCtx, SlotIdx, Ticks},
    error::{ConfigError, SimError},
};
pub use fcfs::FcfsScheduler;
pub use hrrn::HrrnScheduler;
pub use lottery::{LotteryScheduler, RandomDraw, ScriptedDraw, TicketDraw};
pub use priority::PriorityScheduler;
pub use round_robin::RoundRobinScheduler;
pub use sjf::SjfScheduler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Run `slot` for `slice` ticks; `slice` never exceeds its remaining time.
    Run { slot: SlotIdx, slice: Ticks },
    /// Nothing runnable; advance the clock.
    IdleUntil(Ticks),
}

pub trait Scheduler {
    /// When false every process is treated as arriving at t=0.
    fn models_arrival(&self) -> bool {
        false
    }

    /// Called while at least one process is outstanding.
    fn pick_next(&mut self, ctx: &SimCtx) -> Result<Decision, SimError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    Fcfs,
    Sjf,
    Priority,
    RoundRobin,
    Hrrn,
    Lottery,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 6] = [
        PolicyKind::Fcfs,
        PolicyKind::Sjf,
        PolicyKind::Priority,
        PolicyKind::RoundRobin,
        PolicyKind::Hrrn,
        PolicyKind::Lottery,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PolicyKind::Fcfs => "First Come First Serve",
            PolicyKind::Sjf => "Shortest Job First",
            PolicyKind::Priority => "Priority",
            PolicyKind::RoundRobin => "Round Robin",
            PolicyKind::Hrrn => "Highest Response Ratio Next",
            PolicyKind::Lottery => "Lottery",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" => Ok(PolicyKind::Fcfs),
            "sjf" => Ok(PolicyKind::Sjf),
            "priority" | "prio" => Ok(PolicyKind::Priority),
            "rr" | "round_robin" => Ok(PolicyKind::RoundRobin),
            "hrrn" => Ok(PolicyKind::Hrrn),
            "lottery" => Ok(PolicyKind::Lottery),
            other => Err(ConfigError::UnknownPolicy(other.to_string())),
        }
    }
}

/// A policy selection as received from a caller, quantum not yet validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    Fcfs,
    Sjf,
    Priority,
    RoundRobin { quantum: i64 },
    Hrrn,
    Lottery,
}

impl Policy {
    pub fn kind(self) -> PolicyKind {
        match self {
            Policy::Fcfs => PolicyKind::Fcfs,
            Policy::Sjf => PolicyKind::Sjf,
            Policy::Priority => PolicyKind::Priority,
            Policy::RoundRobin { .. } => PolicyKind::RoundRobin,
            Policy::Hrrn => PolicyKind::Hrrn,
            Policy::Lottery => PolicyKind::Lottery,
        }
    }

    pub fn from_kind(kind: PolicyKind, quantum: i64) -> Self {
        match kind {
            PolicyKind::Fcfs => Policy::Fcfs,
            PolicyKind::Sjf => Policy::Sjf,
            PolicyKind::Priority => Policy::Priority,
            PolicyKind::RoundRobin => Policy::RoundRobin { quantum },
            PolicyKind::Hrrn => Policy::Hrrn,
            PolicyKind::Lottery => Policy::Lottery,
        }
    }
}
