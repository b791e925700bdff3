//! Per-frame coalescing of pointer input.

/// A depth-one queue holding the latest update waiting for the next frame.
///
/// Scheduling while an update is pending replaces it, so at most one
/// recomputation happens per frame and it always uses the newest input.
///
/// # Example
///
/// ```
/// # use folio::interaction::FrameQueue;
/// let mut queue = FrameQueue::new();
/// queue.schedule(1);
/// queue.schedule(2);
/// assert_eq!(queue.take(), Some(2));
/// assert_eq!(queue.take(), None);
/// ```
#[derive(Debug, Clone)]
pub struct FrameQueue<T> {
    pending: Option<T>,
}

impl<T> Default for FrameQueue<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> FrameQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `value` for the next frame.
    ///
    /// Returns true when a still-pending update was replaced.
    pub fn schedule(&mut self, value: T) -> bool {
        self.pending.replace(value).is_some()
    }

    /// Removes the pending update for application in the current frame
    pub fn take(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// Drops the pending update without applying it
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
