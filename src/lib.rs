pub mod config;
pub mod core;
pub mod error;
pub mod scheduler;
pub mod sim;

pub use config::SimConfig;
pub use crate::core::{Process, ProcessId, ScheduleEvent, SimEvent, Ticks};
pub use error::{ConfigError, InvalidInput, SimError};
pub use scheduler::{Policy, PolicyKind, Scheduler, ScriptedDraw, TicketDraw};
pub use sim::{ProcessSpec, SchedulerEngine, SimulationResult};
