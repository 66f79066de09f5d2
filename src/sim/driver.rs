use rand::rngs::StdRng;
use tracing::{debug, instrument};

use super::{
    result::SimulationResult,
    workload::{ProcessSpec, validate, validate_quantum},
};
use crate::{
    core::{Process, SimCore, SimOutcome},
    error::SimError,
    scheduler::{
        FcfsScheduler, HrrnScheduler, LotteryScheduler, Policy, PriorityScheduler, RandomDraw,
        RoundRobinScheduler, Scheduler, SjfScheduler, TicketDraw,
    },
};

/// Runs one policy over one process set per call. Holds no state between
/// runs apart from the lottery draw source.
pub struct SchedulerEngine<D: TicketDraw = RandomDraw<StdRng>> {
    draw: D,
}

impl SchedulerEngine {
    pub fn seeded(seed: u64) -> Self {
        Self::with_draw(RandomDraw::seeded(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_draw(RandomDraw::from_entropy())
    }
}

impl<D: TicketDraw> SchedulerEngine<D> {
    pub fn with_draw(draw: D) -> Self {
        Self { draw }
    }

    /// Validates `specs` for `policy`, then simulates to completion.
    ///
    /// Invalid input is rejected before any scheduling decision is made.
    #[instrument(skip(self, specs), fields(processes = specs.len()))]
    pub fn run(
        &mut self,
        policy: Policy,
        specs: &[ProcessSpec],
    ) -> Result<SimulationResult, SimError> {
        let kind = policy.kind();
        let processes = validate(specs, kind)?;

        let mut quantum = None;
        let outcome = match policy {
            Policy::Fcfs => simulate(processes, FcfsScheduler::new())?,
            Policy::Sjf => simulate(processes, SjfScheduler::new())?,
            Policy::Priority => simulate(processes, PriorityScheduler::new())?,
            Policy::RoundRobin { quantum: raw } => {
                let q = validate_quantum(raw)?;
                quantum = Some(q.get());
                simulate(processes, RoundRobinScheduler::new(q))?
            }
            Policy::Hrrn => simulate(processes, HrrnScheduler::new())?,
            Policy::Lottery => simulate(processes, LotteryScheduler::new(&mut self.draw))?,
        };

        let result = SimulationResult::summarize(kind, quantum, outcome);
        debug!(
            policy = %kind,
            avg_wait = result.average_waiting_time,
            avg_turnaround = result.average_turnaround_time,
            makespan = result.makespan,
            "simulation finished"
        );
        Ok(result)
    }
}

fn simulate<S: Scheduler>(
    processes: Vec<Process>,
    scheduler: S,
) -> Result<SimOutcome, SimError> {
    SimCore::new(processes, scheduler).run()
}
