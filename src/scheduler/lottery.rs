use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::trace;

use super::{Decision, Scheduler};
use crate::{core::SimCtx, error::SimError};

/// Source of lottery draws.
pub trait TicketDraw {
    /// Returns a winning ticket in `1..=total`. `total` is never zero.
    fn draw(&mut self, total: u64) -> u64;
}

impl<T: TicketDraw + ?Sized> TicketDraw for &mut T {
    fn draw(&mut self, total: u64) -> u64 {
        (**self).draw(total)
    }
}

/// Uniform draws from any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomDraw<R: Rng>(pub R);

impl RandomDraw<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(StdRng::from_os_rng())
    }
}

impl<R: Rng> TicketDraw for RandomDraw<R> {
    fn draw(&mut self, total: u64) -> u64 {
        self.0.random_range(1..=total)
    }
}

/// Replays a fixed sequence of draws, cycling when exhausted.
/// Values are folded into `1..=total`.
#[derive(Debug, Clone)]
pub struct ScriptedDraw {
    script: Vec<u64>,
    next: usize,
}

impl ScriptedDraw {
    pub fn new(script: Vec<u64>) -> Self {
        Self { script, next: 0 }
    }
}

impl TicketDraw for ScriptedDraw {
    fn draw(&mut self, total: u64) -> u64 {
        let Some(&raw) = self.script.get(self.next % self.script.len().max(1)) else {
            return 1;
        };
        self.next += 1;
        raw.saturating_sub(1) % total + 1
    }
}

/// Ticket-weighted random selection among outstanding processes.
/// Each winner runs to completion.
#[derive(Debug)]
pub struct LotteryScheduler<D: TicketDraw> {
    draw: D,
}

impl<D: TicketDraw> LotteryScheduler<D> {
    pub fn new(draw: D) -> Self {
        Self { draw }
    }
}

impl<D: TicketDraw> Scheduler for LotteryScheduler<D> {
    fn pick_next(&mut self, ctx: &SimCtx) -> Result<Decision, SimError> {
        let exhausted = SimError::AllTicketsExhausted {
            outstanding: ctx.outstanding(),
        };

        let total: u64 = ctx
            .outstanding_slots()
            .map(|slot| ctx.process(slot).tickets)
            .sum();
        if total == 0 {
            return Err(exhausted);
        }

        let winner = self.draw.draw(total);
        trace!(total, winner, "lottery draw");

        // First slot whose cumulative ticket count reaches the draw
        let mut cumulative = 0;
        let slot = ctx
            .outstanding_slots()
            .find(|&slot| {
                cumulative += ctx.process(slot).tickets;
                cumulative >= winner
            })
            .ok_or(exhausted)?;

        Ok(Decision::Run {
            slot,
            slice: ctx.remaining(slot),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{Process, SimCore},
        scheduler::test_util::{order, run, waits},
    };

    fn weighted(bursts: &[u64], tickets: &[u64]) -> Vec<Process> {
        bursts
            .iter()
            .zip(tickets)
            .enumerate()
            .map(|(i, (&b, &t))| Process::new(i + 1, 0, b).with_tickets(t))
            .collect()
    }

    #[test]
    fn cumulative_ranges_pick_winner() {
        // tickets [2, 3, 5]: draws 3 -> P2, then of [2, 5]: 7 -> P3, then P1
        let draw = ScriptedDraw::new(vec![3, 7, 1]);
        let outcome = run(weighted(&[4, 2, 6], &[2, 3, 5]), LotteryScheduler::new(draw));
        assert_eq!(order(&outcome.schedule), vec![2, 3, 1]);
        assert_eq!(waits(&outcome.schedule), vec![0, 2, 8]);
    }

    #[test]
    fn seeded_draws_reproduce_order() {
        let processes = weighted(&[3, 1, 4, 1, 5, 9], &[1, 4, 2, 8, 5, 7]);
        let first = run(processes.clone(), LotteryScheduler::new(RandomDraw::seeded(42)));
        let second = run(processes, LotteryScheduler::new(RandomDraw::seeded(42)));
        assert_eq!(order(&first.schedule), order(&second.schedule));
    }

    #[test]
    fn zero_ticket_process_waits_for_ticket_holders() {
        let processes = weighted(&[1, 1, 1], &[0, 1, 0]);
        let mut sim = SimCore::new(processes, LotteryScheduler::new(ScriptedDraw::new(vec![1])));
        sim.step().unwrap();
        assert_eq!(sim.ctx.slots[1].completion_time, Some(1));
        assert!(!sim.ctx.is_completed(0));
        assert!(!sim.ctx.is_completed(2));

        // Only zero-ticket processes remain
        assert_eq!(
            sim.step(),
            Err(SimError::AllTicketsExhausted { outstanding: 2 })
        );
    }

    #[test]
    fn scripted_draw_folds_into_range() {
        let mut draw = ScriptedDraw::new(vec![0, 11]);
        assert_eq!(draw.draw(5), 1);
        assert_eq!(draw.draw(5), 1);
        assert_eq!(draw.draw(5), 1);
    }
}
