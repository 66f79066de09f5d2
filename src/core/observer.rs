use super::{
    event::SimEvent,
    state::{ProcessState, SimCtx, Ticks},
};

#[derive(Debug, Default)]
pub struct Observer {
    last_now: Ticks,
    last_dispatched: Option<usize>,
    pub busy_time: Ticks,
    pub idle_time: Ticks,
    pub context_switches: u64,
}

impl Observer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, ctx: &SimCtx, events: &[SimEvent]) {
        debug_assert!(
            ctx.now >= self.last_now,
            "clock moved backwards: {} -> {}",
            self.last_now,
            ctx.now
        );
        self.last_now = ctx.now;

        for event in events {
            match *event {
                SimEvent::Idle { from, until } => self.idle_time += until - from,
                SimEvent::Dispatched { process, slice, .. } => {
                    self.busy_time += slice;
                    if self.last_dispatched.is_some_and(|last| last != process) {
                        self.context_switches += 1;
                    }
                    self.last_dispatched = Some(process);
                }
                _ => {}
            }
        }

        let mut outstanding = 0;
        for slot in &ctx.slots {
            let id = slot.process.id;
            match slot.state {
                ProcessState::Completed => {
                    debug_assert_eq!(
                        slot.remaining, 0,
                        "Completed process {id} still has remaining time"
                    );
                    debug_assert!(
                        slot.completion_time.is_some(),
                        "Completed process {id} missing completion time"
                    );
                }
                ProcessState::Preempted => {
                    outstanding += 1;
                    debug_assert!(
                        slot.remaining > 0,
                        "Preempted process {id} has no remaining time"
                    );
                    debug_assert!(
                        slot.first_run.is_some(),
                        "Preempted process {id} never ran"
                    );
                }
                ProcessState::Pending => outstanding += 1,
            }
        }
        debug_assert_eq!(
            outstanding,
            ctx.outstanding(),
            "outstanding counter out of sync with slot states"
        );
    }
}
