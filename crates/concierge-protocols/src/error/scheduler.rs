//! Errors raised by a host scheduler.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("Scheduler unavailable: {0}")]
    Unavailable(String),

    #[error("Schedule rejected: {0}")]
    Rejected(String),

    #[error("Scheduled task not found: {0}")]
    NotFound(String),

    #[error("Scheduler internal error: {0}")]
    Internal(String),
}
