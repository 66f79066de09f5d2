// Index into the slot Vec; stable for the whole run
pub type SlotIdx = usize;
// 1-based, assigned from input position
pub type ProcessId = usize;
pub type Ticks = u64;

/// A validated process descriptor. Immutable for the lifetime of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    pub id: ProcessId,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    /// Lower value is serviced first.
    pub priority: u64,
    pub tickets: u64,
}

impl Process {
    pub fn new(id: ProcessId, arrival_time: Ticks, burst_time: Ticks) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority: 0,
            tickets: 1,
        }
    }

    pub fn with_priority(mut self, priority: u64) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_tickets(mut self, tickets: u64) -> Self {
        self.tickets = tickets;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessState {
    Pending,
    Preempted,
    Completed,
}

#[derive(Debug)]
pub struct ProcessSlot {
    pub process: Process,
    pub state: ProcessState,
    pub remaining: Ticks,
    pub first_run: Option<Ticks>,
    pub completion_time: Option<Ticks>,
}

/// Per-run simulation state shared between the driver and the policy.
#[derive(Debug)]
pub struct SimCtx {
    pub now: Ticks,
    pub slots: Vec<ProcessSlot>,
    models_arrival: bool,
    outstanding: usize,
}

impl SimCtx {
    pub fn new(processes: Vec<Process>, models_arrival: bool) -> Self {
        let slots: Vec<ProcessSlot> = processes
            .into_iter()
            .map(|process| ProcessSlot {
                remaining: process.burst_time,
                process,
                state: ProcessState::Pending,
                first_run: None,
                completion_time: None,
            })
            .collect();

        Self {
            now: 0,
            outstanding: slots.len(),
            slots,
            models_arrival,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn models_arrival(&self) -> bool {
        self.models_arrival
    }

    pub fn outstanding(&self) -> usize {
        self.outstanding
    }

    pub fn all_completed(&self) -> bool {
        self.outstanding == 0
    }

    pub fn process(&self, slot: SlotIdx) -> &Process {
        &self.slots[slot].process
    }

    pub fn remaining(&self, slot: SlotIdx) -> Ticks {
        self.slots[slot].remaining
    }

    /// Arrival as seen by the policy: zero when arrival is not modeled.
    pub fn arrival(&self, slot: SlotIdx) -> Ticks {
        if self.models_arrival {
            self.slots[slot].process.arrival_time
        } else {
            0
        }
    }

    pub fn is_completed(&self, slot: SlotIdx) -> bool {
        self.slots[slot].state == ProcessState::Completed
    }

    pub fn has_arrived(&self, slot: SlotIdx) -> bool {
        self.arrival(slot) <= self.now
    }

    pub fn is_runnable(&self, slot: SlotIdx) -> bool {
        !self.is_completed(slot) && self.has_arrived(slot)
    }

    /// Slots not yet completed, in index order.
    pub fn outstanding_slots(&self) -> impl Iterator<Item = SlotIdx> + '_ {
        (0..self.slots.len()).filter(|&slot| !self.is_completed(slot))
    }

    pub fn earliest_outstanding_arrival(&self) -> Option<Ticks> {
        self.outstanding_slots()
            .map(|slot| self.arrival(slot))
            .min()
    }

    pub fn advance_time(&mut self, delta: Ticks) {
        self.now = self.now.saturating_add(delta);
    }

    pub fn idle_until(&mut self, until: Ticks) {
        debug_assert!(until >= self.now, "clock must not move backwards");
        self.now = self.now.max(until);
    }

    // Charge `slice` ticks to `slot`; returns true once the slot has no work left
    pub fn run_slice(&mut self, slot: SlotIdx, slice: Ticks) -> bool {
        let now = self.now;
        let entry = &mut self.slots[slot];
        debug_assert!(
            entry.state != ProcessState::Completed,
            "Completed process {} dispatched again",
            entry.process.id
        );
        debug_assert!(
            slice <= entry.remaining,
            "Slice {slice} exceeds remaining time of process {}",
            entry.process.id
        );

        entry.first_run.get_or_insert(now);
        entry.remaining = entry.remaining.saturating_sub(slice);
        self.advance_time(slice);
        self.slots[slot].remaining == 0
    }

    pub fn mark_preempted(&mut self, slot: SlotIdx) {
        self.slots[slot].state = ProcessState::Preempted;
    }

    pub fn mark_completed(&mut self, slot: SlotIdx) {
        let now = self.now;
        let entry = &mut self.slots[slot];
        debug_assert_eq!(entry.remaining, 0, "Completing process with work left");
        debug_assert!(
            entry.state != ProcessState::Completed,
            "Process {} completed twice",
            entry.process.id
        );

        entry.state = ProcessState::Completed;
        entry.completion_time = Some(now);
        self.outstanding -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrival_is_zero_when_not_modeled() {
        let ctx = SimCtx::new(vec![Process::new(1, 7, 3)], false);
        assert_eq!(ctx.arrival(0), 0);
        assert!(ctx.has_arrived(0));

        let ctx = SimCtx::new(vec![Process::new(1, 7, 3)], true);
        assert_eq!(ctx.arrival(0), 7);
        assert!(!ctx.has_arrived(0));
    }

    #[test]
    fn run_slice_tracks_first_run_and_completion() {
        let mut ctx = SimCtx::new(vec![Process::new(1, 0, 5)], true);
        ctx.advance_time(2);

        assert!(!ctx.run_slice(0, 3));
        ctx.mark_preempted(0);
        assert_eq!(ctx.slots[0].first_run, Some(2));
        assert_eq!(ctx.now, 5);

        assert!(ctx.run_slice(0, 2));
        ctx.mark_completed(0);
        assert_eq!(ctx.slots[0].first_run, Some(2));
        assert_eq!(ctx.slots[0].completion_time, Some(7));
        assert!(ctx.all_completed());
    }
}
