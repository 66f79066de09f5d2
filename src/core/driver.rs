use tracing::trace;

use super::{
    event::{ScheduleEvent, SimEvent},
    observer::Observer,
    state::{Process, SimCtx, SlotIdx, Ticks},
};
use crate::{
    error::SimError,
    scheduler::{Decision, Scheduler},
};

/// Everything a finished run produced, before summarization.
#[derive(Debug)]
pub struct SimOutcome {
    pub schedule: Vec<ScheduleEvent>,
    pub trace: Vec<SimEvent>,
    pub makespan: Ticks,
    pub busy_time: Ticks,
    pub idle_time: Ticks,
    pub context_switches: u64,
}

pub struct SimCore<S: Scheduler> {
    pub ctx: SimCtx,
    pub scheduler: S,
    observer: Observer,
    schedule: Vec<ScheduleEvent>,
    trace: Vec<SimEvent>,
}

impl<S: Scheduler> SimCore<S> {
    /// Builds a run over already-validated processes.
    pub fn new(processes: Vec<Process>, scheduler: S) -> Self {
        let ctx = SimCtx::new(processes, scheduler.models_arrival());
        let schedule = Vec::with_capacity(ctx.len());
        Self {
            ctx,
            scheduler,
            observer: Observer::new(),
            schedule,
            trace: Vec::new(),
        }
    }

    /// Applies one scheduling decision and returns the events it produced.
    pub fn step(&mut self) -> Result<Vec<SimEvent>, SimError> {
        let mut events = Vec::new();
        match self.scheduler.pick_next(&self.ctx)? {
            Decision::Run { slot, slice } => self.dispatch(slot, slice, &mut events),
            Decision::IdleUntil(until) => {
                let from = self.ctx.now;
                self.ctx.idle_until(until);
                events.push(SimEvent::Idle {
                    from,
                    until: self.ctx.now,
                });
            }
        }

        for event in &events {
            trace!(?event, now = self.ctx.now, "sim event");
        }
        self.observer.observe(&self.ctx, &events);
        self.trace.extend(events.iter().cloned());
        Ok(events)
    }

    fn dispatch(&mut self, slot: SlotIdx, slice: Ticks, events: &mut Vec<SimEvent>) {
        let process = self.ctx.process(slot).id;
        events.push(SimEvent::Dispatched {
            process,
            at: self.ctx.now,
            slice,
        });

        if !self.ctx.run_slice(slot, slice) {
            self.ctx.mark_preempted(slot);
            events.push(SimEvent::Preempted {
                process,
                at: self.ctx.now,
                remaining: self.ctx.remaining(slot),
            });
            return;
        }

        self.ctx.mark_completed(slot);
        let record = self.completion_record(slot);
        events.push(SimEvent::WaitingComputed {
            process,
            waiting: record.waiting_time,
        });
        events.push(SimEvent::Completed {
            process,
            at: record.completion_time,
        });
        self.schedule.push(record);
    }

    fn completion_record(&self, slot: SlotIdx) -> ScheduleEvent {
        let entry = &self.ctx.slots[slot];
        let arrival = self.ctx.arrival(slot);
        let completion_time = entry.completion_time.unwrap_or(self.ctx.now);
        let first_run = entry.first_run.unwrap_or(completion_time);
        let turnaround_time = completion_time.saturating_sub(arrival);

        ScheduleEvent {
            process: entry.process.id,
            arrival_time: arrival,
            burst_time: entry.process.burst_time,
            first_run,
            completion_time,
            waiting_time: turnaround_time.saturating_sub(entry.process.burst_time),
            turnaround_time,
            response_time: first_run.saturating_sub(arrival),
        }
    }

    pub fn all_completed(&self) -> bool {
        self.ctx.all_completed()
    }

    pub fn now(&self) -> Ticks {
        self.ctx.now
    }

    pub fn observer(&self) -> &Observer {
        &self.observer
    }

    /// Steps until every process has completed.
    pub fn run(mut self) -> Result<SimOutcome, SimError> {
        while !self.all_completed() {
            self.step()?;
        }

        Ok(SimOutcome {
            makespan: self.ctx.now,
            busy_time: self.observer.busy_time,
            idle_time: self.observer.idle_time,
            context_switches: self.observer.context_switches,
            schedule: self.schedule,
            trace: self.trace,
        })
    }
}
