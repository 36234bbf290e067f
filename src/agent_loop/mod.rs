//! Agent loop primitives (run state, events, runner).

pub mod events;
pub mod runner;
pub mod types;

pub use events::{RunEvent, RunEventPayload, RunEventSink, RunLifecycle};
pub use runner::{LoopRunner, DEFAULT_RECURSION_LIMIT, DEFAULT_SYSTEM_PROMPT};
pub use types::{LoopState, RunId, RunOutcome, RunState};
