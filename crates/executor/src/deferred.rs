//! A queue of cancellable zero-delay tasks.
//!
//! Scheduling a task returns a handle. Tasks become due on the next drain,
//! never during the call that scheduled them, so work queued while a batch is
//! being processed waits for the following tick.

use log::trace;
use std::collections::VecDeque;
use std::fmt;

/// Opaque identifier for a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

impl fmt::Display for TaskHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task-{}", self.0)
    }
}

/// FIFO of deferred tasks, each carrying a payload of type `T`.
#[derive(Debug)]
pub struct TaskQueue<T> {
    queue: VecDeque<(TaskHandle, T)>,
    next_id: u64,
}

impl<T> TaskQueue<T> {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            next_id: 1,
        }
    }

    /// Queue a task. Returns the handle for cancellation.
    pub fn schedule(&mut self, payload: T) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.queue.push_back((handle, payload));
        trace!("Scheduled {}", handle);
        handle
    }

    /// Cancel a task. Returns `false` if it already ran or was never queued.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.queue.len();
        self.queue.retain(|(h, _)| *h != handle);
        let removed = self.queue.len() != before;
        if removed {
            trace!("Cancelled {}", handle);
        }
        removed
    }

    /// Removes and returns every task queued so far, in scheduling order.
    pub fn take_ready(&mut self) -> Vec<(TaskHandle, T)> {
        self.queue.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl<T> Default for TaskQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
