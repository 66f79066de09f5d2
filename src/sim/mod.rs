pub mod driver;
pub mod result;
pub mod workload;

pub use driver::SchedulerEngine;
pub use result::SimulationResult;
pub use workload::{ProcessSpec, WorkloadConfig, bernoulli_workload};
