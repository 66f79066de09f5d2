use super::{Decision, Scheduler, order::ServiceOrder};
use crate::{core::SimCtx, error::SimError};

/// Non-preemptive priority scheduling.
///
/// Numerically smaller priority values are serviced first; equal priorities
/// keep input order. The clock advances by each selected process's own burst.
#[derive(Debug, Default)]
pub struct PriorityScheduler {
    order: Option<ServiceOrder>,
}

impl PriorityScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for PriorityScheduler {
    fn pick_next(&mut self, ctx: &SimCtx) -> Result<Decision, SimError> {
        self.order
            .get_or_insert_with(|| ServiceOrder::sorted_by_key(ctx, |p| p.priority))
            .decide(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::Process,
        scheduler::test_util::{order, run, waits},
    };

    fn with_priorities(bursts: &[u64], priorities: &[u64]) -> Vec<Process> {
        bursts
            .iter()
            .zip(priorities)
            .enumerate()
            .map(|(i, (&b, &p))| Process::new(i + 1, 0, b).with_priority(p))
            .collect()
    }

    #[test]
    fn ascending_priority_value() {
        let processes = with_priorities(&[10, 1, 2, 1, 5], &[3, 1, 4, 5, 2]);
        let outcome = run(processes, PriorityScheduler::new());
        assert_eq!(order(&outcome.schedule), vec![2, 5, 1, 3, 4]);
        // P2(1) P5(5) P1(10) P3(2) P4(1)
        assert_eq!(waits(&outcome.schedule), vec![0, 1, 6, 16, 18]);
    }

    #[test]
    fn ties_keep_input_order() {
        let processes = with_priorities(&[3, 4, 5], &[2, 0, 2]);
        let outcome = run(processes, PriorityScheduler::new());
        assert_eq!(order(&outcome.schedule), vec![2, 1, 3]);
        assert_eq!(waits(&outcome.schedule), vec![0, 4, 7]);
    }
}
