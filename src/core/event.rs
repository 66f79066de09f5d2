use crate::core::{ProcessId, Ticks};

/// Observational trace entry. Never feeds back into scheduling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimEvent {
    // No runnable process; clock jumped forward
    Idle {
        from: Ticks,
        until: Ticks,
    },
    Dispatched {
        process: ProcessId,
        at: Ticks,
        slice: Ticks,
    },
    Preempted {
        process: ProcessId,
        at: Ticks,
        remaining: Ticks,
    },
    WaitingComputed {
        process: ProcessId,
        waiting: Ticks,
    },
    Completed {
        process: ProcessId,
        at: Ticks,
    },
}

/// Timing summary for one completed process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEvent {
    pub process: ProcessId,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub first_run: Ticks,
    pub completion_time: Ticks,
    pub waiting_time: Ticks,
    pub turnaround_time: Ticks,
    pub response_time: Ticks,
}
