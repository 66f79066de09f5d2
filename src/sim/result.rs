use average::{Estimate, Mean};

use crate::{
    core::{ProcessId, ScheduleEvent, SimEvent, SimOutcome, Ticks},
    scheduler::PolicyKind,
};

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub policy: PolicyKind,
    /// Only set for Round Robin.
    pub quantum: Option<Ticks>,
    /// One entry per process, in completion order.
    pub schedule: Vec<ScheduleEvent>,
    pub trace: Vec<SimEvent>,
    pub average_waiting_time: f64,
    pub average_turnaround_time: f64,
    pub average_response_time: f64,
    pub makespan: Ticks,
    pub busy_time: Ticks,
    pub idle_time: Ticks,
    pub context_switches: u64,
}

fn mean(schedule: &[ScheduleEvent], field: fn(&ScheduleEvent) -> Ticks) -> f64 {
    schedule.iter().map(|e| field(e) as f64).collect::<Mean>().estimate()
}

// Round Robin reports whole-tick averages, truncated toward zero
fn truncated_mean(schedule: &[ScheduleEvent], field: fn(&ScheduleEvent) -> Ticks) -> f64 {
    let total: Ticks = schedule.iter().map(field).sum();
    (total / schedule.len().max(1) as Ticks) as f64
}

impl SimulationResult {
    pub(crate) fn summarize(
        policy: PolicyKind,
        quantum: Option<Ticks>,
        outcome: SimOutcome,
    ) -> Self {
        let schedule = &outcome.schedule;
        let average: fn(&[ScheduleEvent], fn(&ScheduleEvent) -> Ticks) -> f64 =
            if policy == PolicyKind::RoundRobin {
                truncated_mean
            } else {
                mean
            };
        let average_waiting_time = average(schedule, |e| e.waiting_time);
        let average_turnaround_time = average(schedule, |e| e.turnaround_time);
        let average_response_time = average(schedule, |e| e.response_time);

        Self {
            policy,
            quantum,
            schedule: outcome.schedule,
            trace: outcome.trace,
            average_waiting_time,
            average_turnaround_time,
            average_response_time,
            makespan: outcome.makespan,
            busy_time: outcome.busy_time,
            idle_time: outcome.idle_time,
            context_switches: outcome.context_switches,
        }
    }

    /// Process ids in completion order.
    pub fn service_order(&self) -> Vec<ProcessId> {
        self.schedule.iter().map(|e| e.process).collect()
    }

    pub fn event_for(&self, process: ProcessId) -> Option<&ScheduleEvent> {
        self.schedule.iter().find(|e| e.process == process)
    }

    pub fn total_waiting_time(&self) -> Ticks {
        self.schedule.iter().map(|e| e.waiting_time).sum()
    }

    pub fn cpu_utilization(&self) -> f64 {
        if self.makespan == 0 {
            return 1.0;
        }
        self.busy_time as f64 / self.makespan as f64
    }
}
