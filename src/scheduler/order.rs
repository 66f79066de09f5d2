use super::Decision;
use crate::{
    core::{Process, SimCtx, SlotIdx},
    error::SimError,
};

/// A service order fixed before the run starts, consumed front to back.
///
/// Each slot appears exactly once, so a process can never be selected twice
/// even when several share the same sort key.
#[derive(Debug)]
pub struct ServiceOrder {
    slots: Vec<SlotIdx>,
    cursor: usize,
}

impl ServiceOrder {
    pub fn input_order(ctx: &SimCtx) -> Self {
        Self {
            slots: (0..ctx.len()).collect(),
            cursor: 0,
        }
    }

    // Stable: equal keys keep input order
    pub fn sorted_by_key<K, F>(ctx: &SimCtx, mut key: F) -> Self
    where
        K: Ord,
        F: FnMut(&Process) -> K,
    {
        let mut slots: Vec<SlotIdx> = (0..ctx.len()).collect();
        slots.sort_by_key(|&slot| key(ctx.process(slot)));
        Self { slots, cursor: 0 }
    }

    /// Next slot in order that has not completed yet.
    pub fn next(&mut self, ctx: &SimCtx) -> Option<SlotIdx> {
        while let Some(&slot) = self.slots.get(self.cursor) {
            if !ctx.is_completed(slot) {
                return Some(slot);
            }
            self.cursor += 1;
        }
        None
    }

    // Shared by the run-to-completion policies
    pub(crate) fn decide(&mut self, ctx: &SimCtx) -> Result<Decision, SimError> {
        let slot = self.next(ctx).ok_or(SimError::Stalled {
            now: ctx.now,
            outstanding: ctx.outstanding(),
        })?;
        Ok(Decision::Run {
            slot,
            slice: ctx.remaining(slot),
        })
    }
}
