//! # Concierge Schedule Tools Extension
//!
//! Lets the model defer work to the host's scheduler. The tools hold no
//! state: every call is delegated to the [`Scheduler`] found in the
//! [`ToolContext`].
//!
//! ## Tools
//!
//! - `schedule_task`: Schedule a task at a date, after a delay, or on a cron expression
//! - `get_scheduled_tasks`: List every scheduled task
//! - `cancel_scheduled_task`: Cancel a task by its ID
//!
//! [`Scheduler`]: concierge_protocols::Scheduler
//! [`ToolContext`]: concierge_protocols::ToolContext

pub mod extension;
pub mod tools;

pub use extension::ScheduleToolsExtension;
pub use tools::{EXECUTE_TASK_CALLBACK, TaskDescriptor, When};
