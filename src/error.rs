use thiserror::Error;

use crate::core::{ProcessId, Ticks};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    /// Outstanding processes hold no tickets. Validation makes this unreachable.
    #[error("all tickets exhausted with {outstanding} process(es) outstanding")]
    AllTicketsExhausted { outstanding: usize },

    #[error("scheduler stalled at t={now} with {outstanding} process(es) outstanding")]
    Stalled { now: Ticks, outstanding: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("process count must be positive")]
    EmptyProcessSet,

    #[error("{field} of P{process} must not be negative (got {value})")]
    NegativeValue {
        process: ProcessId,
        field: &'static str,
        value: i64,
    },

    #[error("P{process} is missing a {field}")]
    MissingField {
        process: ProcessId,
        field: &'static str,
    },

    #[error("P{process} must hold at least one ticket (got {tickets})")]
    NonPositiveTickets { process: ProcessId, tickets: i64 },

    #[error("time quantum must be positive (got {0})")]
    NonPositiveQuantum(i64),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var}: cannot parse {value:?}")]
    Unparsable { var: &'static str, value: String },

    #[error("unknown policy {0:?}")]
    UnknownPolicy(String),

    #[error("{var} must lie in {range} (got {value})")]
    OutOfRange {
        var: &'static str,
        range: &'static str,
        value: String,
    },
}
