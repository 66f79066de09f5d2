//! Quantum-based round robin over a fixed circular scan.
//!
//! The scan visits slots in index order. After servicing a slot it moves to
//! the next slot only if that slot has already arrived, otherwise it wraps
//! back to slot 0. Completed and not-yet-arrived slots are skipped. When a
//! whole pass since the last wrap made no progress, the clock idles forward
//! to the arrival that unblocks the scan.

use std::num::NonZeroU64;

use tracing::debug;

use super::{Decision, Scheduler};
use crate::{
    core::{SimCtx, SlotIdx, Ticks},
    error::SimError,
};

#[derive(Debug)]
pub struct RoundRobinScheduler {
    quantum: Ticks,
    cursor: SlotIdx,
    // Last decision ran `cursor`; advance before the next pick
    dispatched: bool,
    // Some slot ran since the scan last wrapped to 0
    progressed: bool,
}

impl RoundRobinScheduler {
    pub fn new(quantum: NonZeroU64) -> Self {
        Self {
            quantum: quantum.get(),
            cursor: 0,
            dispatched: false,
            progressed: false,
        }
    }

    fn next_cursor(&self, ctx: &SimCtx) -> SlotIdx {
        let next = self.cursor + 1;
        if next == ctx.len() {
            0
        } else if ctx.arrival(next) <= ctx.now {
            next
        } else {
            0
        }
    }

    fn advance(&mut self, ctx: &SimCtx) {
        let next = self.next_cursor(ctx);
        if next == 0 {
            self.progressed = false;
        }
        self.cursor = next;
    }

    fn stall(&mut self, ctx: &SimCtx) -> Result<Decision, SimError> {
        let blocker = self.cursor + 1;
        let until = if blocker < ctx.len() {
            ctx.arrival(blocker)
        } else {
            // Every outstanding slot was visited and none had arrived
            self.cursor = 0;
            ctx.earliest_outstanding_arrival().unwrap_or(ctx.now)
        };

        if until <= ctx.now {
            return Err(SimError::Stalled {
                now: ctx.now,
                outstanding: ctx.outstanding(),
            });
        }

        debug!(from = ctx.now, until, "round robin scan blocked, idling");
        Ok(Decision::IdleUntil(until))
    }
}

impl Scheduler for RoundRobinScheduler {
    fn models_arrival(&self) -> bool {
        true
    }

    fn pick_next(&mut self, ctx: &SimCtx) -> Result<Decision, SimError> {
        if std::mem::take(&mut self.dispatched) {
            self.advance(ctx);
        }

        // Bounded: the rest of the current pass, then at most one full pass
        // after a wrap before either finding work or stalling.
        for _ in 0..2 * ctx.len() {
            let slot = self.cursor;
            if ctx.is_runnable(slot) {
                self.dispatched = true;
                self.progressed = true;
                return Ok(Decision::Run {
                    slot,
                    slice: ctx.remaining(slot).min(self.quantum),
                });
            }

            if self.next_cursor(ctx) == 0 && !self.progressed {
                return self.stall(ctx);
            }
            self.advance(ctx);
        }

        Err(SimError::Stalled {
            now: ctx.now,
            outstanding: ctx.outstanding(),
        })
    }
}
