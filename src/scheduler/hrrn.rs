use std::cmp::Ordering;

use super::{Decision, Scheduler};
use crate::{
    core::{SimCtx, SlotIdx, Ticks},
    error::SimError,
};

/// `(waited + burst) / burst`, kept as an exact fraction.
/// A zero burst uses denominator 1.
#[derive(Debug, Clone, Copy)]
pub struct ResponseRatio {
    num: u128,
    den: u128,
}

impl ResponseRatio {
    pub fn new(waited: Ticks, burst: Ticks) -> Self {
        Self {
            num: u128::from(waited) + u128::from(burst),
            den: u128::from(burst.max(1)),
        }
    }
}

impl PartialEq for ResponseRatio {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ResponseRatio {}

impl PartialOrd for ResponseRatio {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ResponseRatio {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.num * other.den).cmp(&(other.num * self.den))
    }
}

/// Non-preemptive highest response ratio next.
#[derive(Debug, Default)]
pub struct HrrnScheduler;

impl HrrnScheduler {
    pub fn new() -> Self {
        Self
    }

    // Highest ratio wins; ties go to the earliest arrival, then the lowest index
    fn select(ctx: &SimCtx) -> Option<SlotIdx> {
        let mut best: Option<(SlotIdx, ResponseRatio)> = None;
        for slot in ctx.outstanding_slots().filter(|&s| ctx.has_arrived(s)) {
            let ratio = ResponseRatio::new(
                ctx.now - ctx.arrival(slot),
                ctx.process(slot).burst_time,
            );
            let better = match best {
                None => true,
                Some((chosen, best_ratio)) => match ratio.cmp(&best_ratio) {
                    Ordering::Greater => true,
                    Ordering::Equal => ctx.arrival(slot) < ctx.arrival(chosen),
                    Ordering::Less => false,
                },
            };
            if better {
                best = Some((slot, ratio));
            }
        }
        best.map(|(slot, _)| slot)
    }
}

impl Scheduler for HrrnScheduler {
    fn models_arrival(&self) -> bool {
        true
    }

    fn pick_next(&mut self, ctx: &SimCtx) -> Result<Decision, SimError> {
        if let Some(slot) = Self::select(ctx) {
            return Ok(Decision::Run {
                slot,
                slice: ctx.remaining(slot),
            });
        }

        // Nothing has arrived yet: skip the idle gap
        match ctx.earliest_outstanding_arrival() {
            Some(until) if until > ctx.now => Ok(Decision::IdleUntil(until)),
            _ => Err(SimError::Stalled {
                now: ctx.now,
                outstanding: ctx.outstanding(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{Process, SimEvent},
        scheduler::test_util::{order, run, waits},
    };

    fn arrivals_bursts(arrivals: &[u64], bursts: &[u64]) -> Vec<Process> {
        arrivals
            .iter()
            .zip(bursts)
            .enumerate()
            .map(|(i, (&a, &b))| Process::new(i + 1, a, b))
            .collect()
    }

    #[test]
    fn ratio_ordering_is_exact() {
        assert!(ResponseRatio::new(3, 2) > ResponseRatio::new(4, 3));
        assert_eq!(ResponseRatio::new(2, 2), ResponseRatio::new(4, 4));
        // zero burst: denominator 1
        assert_eq!(ResponseRatio::new(5, 0), ResponseRatio::new(4, 1));
    }

    #[test]
    fn long_waiting_short_job_beats_long_job() {
        // At t=3: P2 ratio (3-0+1)/1 = 4, P3 ratio (3-2+8)/8 = 1.125
        let outcome = run(arrivals_bursts(&[0, 0, 2], &[3, 1, 8]), HrrnScheduler::new());
        assert_eq!(order(&outcome.schedule), vec![1, 2, 3]);
        assert_eq!(waits(&outcome.schedule), vec![0, 3, 2]);
    }

    #[test]
    fn ties_prefer_earliest_arrival_then_lowest_index() {
        // At t=4 both P2 and P3 have ratio 2; P3 arrived earlier
        let outcome = run(arrivals_bursts(&[0, 2, 0], &[4, 2, 4]), HrrnScheduler::new());
        assert_eq!(order(&outcome.schedule), vec![1, 3, 2]);

        // Identical arrival and burst: lower index first
        let outcome = run(arrivals_bursts(&[0, 0, 0], &[2, 2, 2]), HrrnScheduler::new());
        assert_eq!(order(&outcome.schedule), vec![1, 2, 3]);
    }

    #[test]
    fn skips_idle_gaps() {
        let outcome = run(arrivals_bursts(&[4, 20], &[3, 1]), HrrnScheduler::new());
        assert_eq!(waits(&outcome.schedule), vec![0, 0]);
        assert_eq!(
            outcome
                .trace
                .iter()
                .filter(|e| matches!(e, SimEvent::Idle { .. }))
                .count(),
            2
        );
        assert_eq!(outcome.makespan, 21);
    }
}
