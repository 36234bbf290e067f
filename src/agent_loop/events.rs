//! Step-update events emitted while a run progresses.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::ModelMessage;

use super::types::RunId;

/// Run lifecycle event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum RunLifecycle {
    Started,
    Completed,
    Failed { error: String },
}

/// What a single node contributed to the run state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RunEventPayload {
    Lifecycle {
        state: RunLifecycle,
    },
    /// The model node appended `message`; `llm_calls` is the new count.
    ModelStep {
        llm_calls: usize,
        message: ModelMessage,
    },
    /// The tool node appended one result message per pending call.
    ToolStep {
        results: Vec<ModelMessage>,
    },
}

/// Envelope for run events.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunEvent {
    pub run_id: RunId,
    pub seq: u64,
    pub timestamp: DateTime<Utc>,
    pub payload: RunEventPayload,
}

/// Callback receiving run events in order.
pub type RunEventSink = Arc<dyn Fn(RunEvent) + Send + Sync>;

pub(crate) struct RunEventEmitter {
    run_id: RunId,
    seq: AtomicU64,
    sink: Option<RunEventSink>,
}

impl RunEventEmitter {
    pub(crate) fn new(run_id: RunId, sink: Option<RunEventSink>) -> Self {
        Self {
            run_id,
            seq: AtomicU64::new(1),
            sink,
        }
    }

    pub(crate) fn emit(&self, payload: RunEventPayload) {
        let Some(sink) = &self.sink else { return; };
        let seq = self.seq.fetch_add(1, Ordering::SeqCst);
        (sink)(RunEvent {
            run_id: self.run_id,
            seq,
            timestamp: Utc::now(),
            payload,
        });
    }

    pub(crate) fn lifecycle(&self, state: RunLifecycle) {
        self.emit(RunEventPayload::Lifecycle { state });
    }
}
