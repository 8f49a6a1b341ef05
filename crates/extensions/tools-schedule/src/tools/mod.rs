//! Scheduling tools.

mod cancel_scheduled_task;
mod get_scheduled_tasks;
mod schedule_task;

#[cfg(test)]
mod fakes;

pub use cancel_scheduled_task::CancelScheduledTaskTool;
pub use get_scheduled_tasks::GetScheduledTasksTool;
pub use schedule_task::{EXECUTE_TASK_CALLBACK, ScheduleTaskTool, TaskDescriptor, When};
