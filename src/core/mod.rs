pub mod driver;
pub mod event;
pub mod observer;
pub mod state;

pub use driver::{SimCore, SimOutcome};
pub use event::{ScheduleEvent, SimEvent};
pub use observer::Observer;
pub use state::{Process, ProcessId, ProcessSlot, ProcessState, SimCtx, SlotIdx, Ticks};
