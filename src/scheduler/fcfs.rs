use super::{Decision, Scheduler, order::ServiceOrder};
use crate::{core::SimCtx, error::SimError};

/// Services processes in input order, each to completion.
#[derive(Debug, Default)]
pub struct FcfsScheduler {
    order: Option<ServiceOrder>,
}

impl FcfsScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for FcfsScheduler {
    fn pick_next(&mut self, ctx: &SimCtx) -> Result<Decision, SimError> {
        self.order
            .get_or_insert_with(|| ServiceOrder::input_order(ctx))
            .decide(ctx)
    }
}
