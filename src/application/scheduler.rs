// Virtual-time schedule of periodic tick tasks
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchedulerError {
    #[error("task {0} has a zero period")]
    ZeroPeriod(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(usize);

#[derive(Debug, Clone)]
struct ScheduledTask {
    name: String,
    period: Duration,
    next_due: Duration,
}

/// Tasks fire every `period` measured from the scheduler's start. Polling
/// late returns every missed firing and keeps the original cadence.
#[derive(Debug, Clone)]
pub struct TickScheduler {
    start: Duration,
    tasks: Vec<ScheduledTask>,
}

impl TickScheduler {
    pub fn new(start: Duration) -> Self {
        Self {
            start,
            tasks: Vec::new(),
        }
    }

    pub fn every(&mut self, name: &str, period: Duration) -> Result<TaskId, SchedulerError> {
        if period.is_zero() {
            return Err(SchedulerError::ZeroPeriod(name.to_string()));
        }

        self.tasks.push(ScheduledTask {
            name: name.to_string(),
            period,
            next_due: self.start + period,
        });
        Ok(TaskId(self.tasks.len() - 1))
    }

    pub fn name(&self, id: TaskId) -> Option<&str> {
        self.tasks.get(id.0).map(|task| task.name.as_str())
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.tasks.iter().map(|task| task.next_due).min()
    }

    /// Collect every firing due at `now`, ordered by deadline then by
    /// registration order.
    pub fn due(&mut self, now: Duration) -> Vec<TaskId> {
        let mut fired = Vec::new();

        for (idx, task) in self.tasks.iter_mut().enumerate() {
            while task.next_due <= now {
                fired.push((task.next_due, TaskId(idx)));
                task.next_due += task.period;
            }
        }

        fired.sort();
        fired.into_iter().map(|(_, id)| id).collect()
    }
}
