use anyhow::Context;
use average::Estimate;
use sched_model::{Policy, SchedulerEngine, SimConfig, SimulationResult, sim::bernoulli_workload};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = SimConfig::from_env().context("loading configuration")?;
    let specs = bernoulli_workload(&config.workload);
    info!(
        processes = specs.len(),
        seed = config.seed,
        quantum = config.quantum,
        "generated workload"
    );

    let mut engine = SchedulerEngine::seeded(config.seed);
    let mut waits = Vec::with_capacity(config.policies.len());

    for &kind in &config.policies {
        let policy = Policy::from_kind(kind, config.quantum);
        let result = engine
            .run(policy, &specs)
            .with_context(|| format!("running {kind}"))?;
        report(&result);
        waits.push(result.average_waiting_time);
    }

    if waits.len() > 1 {
        println!(
            "Mean of average waiting times across {} policies: {:.2} tick(s)",
            waits.len(),
            avg(waits.into_iter())
        );
    }
    Ok(())
}

fn report(result: &SimulationResult) {
    match result.quantum {
        Some(quantum) => println!("== {} (quantum {quantum})", result.policy),
        None => println!("== {}", result.policy),
    }

    for event in &result.schedule {
        println!(
            "P{:<3} arrival={:<4} burst={:<4} wait={:<4} turnaround={:<4} done@{}",
            event.process,
            event.arrival_time,
            event.burst_time,
            event.waiting_time,
            event.turnaround_time,
            event.completion_time
        );
    }

    let n = result.schedule.len();
    println!(
        "Average waiting time for {n} processes = {:.2} tick(s)",
        result.average_waiting_time
    );
    println!(
        "Average turnaround time for {n} processes = {:.2} tick(s)",
        result.average_turnaround_time
    );
    println!(
        "Average response time: {:.2} tick(s), CPU utilization {:.1}%, {} context switch(es)",
        result.average_response_time,
        result.cpu_utilization() * 100.0,
        result.context_switches
    );
    if result.idle_time > 0 {
        println!("CPU idle for {} tick(s)", result.idle_time);
    }
}

fn avg(iter: impl Iterator<Item = f64>) -> f64 {
    iter.collect::<average::Mean>().estimate()
}
