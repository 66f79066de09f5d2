use super::{Decision, Scheduler, order::ServiceOrder};
use crate::{core::SimCtx, error::SimError};

/// Non-preemptive shortest job first. All processes are ready at t=0.
#[derive(Debug, Default)]
pub struct SjfScheduler {
    order: Option<ServiceOrder>,
}

impl SjfScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for SjfScheduler {
    fn pick_next(&mut self, ctx: &SimCtx) -> Result<Decision, SimError> {
        self.order
            .get_or_insert_with(|| ServiceOrder::sorted_by_key(ctx, |p| p.burst_time))
            .decide(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::test_util::{bursts, order, run, waits};

    #[test]
    fn shortest_burst_first() {
        let outcome = run(bursts(&[6, 8, 7, 3]), SjfScheduler::new());
        assert_eq!(order(&outcome.schedule), vec![4, 1, 3, 2]);
        assert_eq!(waits(&outcome.schedule), vec![0, 3, 9, 16]);
    }

    #[test]
    fn equal_bursts_each_serviced_once_in_input_order() {
        let outcome = run(bursts(&[4, 2, 4, 2]), SjfScheduler::new());
        assert_eq!(order(&outcome.schedule), vec![2, 4, 1, 3]);
        assert_eq!(waits(&outcome.schedule), vec![0, 2, 4, 8]);
    }

    #[test]
    fn zero_burst_runs_first_without_waiting() {
        let outcome = run(bursts(&[3, 0]), SjfScheduler::new());
        assert_eq!(order(&outcome.schedule), vec![2, 1]);
        assert_eq!(waits(&outcome.schedule), vec![0, 0]);
    }
}
