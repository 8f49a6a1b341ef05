//! In-memory schedulers for tool tests.

use std::sync::Mutex;

use async_trait::async_trait;

use concierge_protocols::error::SchedulerError;
use concierge_protocols::scheduler::{ScheduledTask, Scheduler, TaskHandle, Trigger};

/// Records every call and keeps tasks in a vector.
#[derive(Default)]
pub struct RecordingScheduler {
    pub tasks: Mutex<Vec<ScheduledTask>>,
    pub cancelled: Mutex<Vec<TaskHandle>>,
}

impl RecordingScheduler {
    pub fn with_tasks(tasks: Vec<ScheduledTask>) -> Self {
        Self {
            tasks: Mutex::new(tasks),
            cancelled: Mutex::new(Vec::new()),
        }
    }

    pub fn scheduled(&self) -> Vec<ScheduledTask> {
        self.tasks.lock().unwrap().clone()
    }
}

#[async_trait]
impl Scheduler for RecordingScheduler {
    async fn schedule(
        &self,
        trigger: Trigger,
        callback: &str,
        description: &str,
    ) -> Result<ScheduledTask, SchedulerError> {
        let mut tasks = self.tasks.lock().unwrap();
        let task = ScheduledTask {
            id: TaskHandle::new(format!("task-{}", tasks.len() + 1)),
            callback: callback.to_string(),
            description: description.to_string(),
            trigger,
            next_run: None,
        };
        tasks.push(task.clone());
        Ok(task)
    }

    async fn list(&self) -> Result<Vec<ScheduledTask>, SchedulerError> {
        Ok(self.scheduled())
    }

    async fn cancel(&self, handle: &TaskHandle) -> Result<(), SchedulerError> {
        let mut tasks = self.tasks.lock().unwrap();
        let before = tasks.len();
        tasks.retain(|t| &t.id != handle);
        if tasks.len() == before {
            return Err(SchedulerError::NotFound(handle.to_string()));
        }
        self.cancelled.lock().unwrap().push(handle.clone());
        Ok(())
    }
}

/// Fails every call.
pub struct FailingScheduler;

#[async_trait]
impl Scheduler for FailingScheduler {
    async fn schedule(
        &self,
        _trigger: Trigger,
        _callback: &str,
        _description: &str,
    ) -> Result<ScheduledTask, SchedulerError> {
        Err(SchedulerError::Unavailable("storage offline".to_string()))
    }

    async fn list(&self) -> Result<Vec<ScheduledTask>, SchedulerError> {
        Err(SchedulerError::Unavailable("storage offline".to_string()))
    }

    async fn cancel(&self, _handle: &TaskHandle) -> Result<(), SchedulerError> {
        Err(SchedulerError::Unavailable("storage offline".to_string()))
    }
}
