//! Platform abstraction layer
//!
//! The host owns the event loop. The controller only sees two narrow seams:
//! - `FrameScheduler`: asks the host for another frame callback
//! - `SpawnSource`: hands over spawn points collected from input (clicks)

use std::collections::VecDeque;

use glam::DVec2;

/// Requests the next frame callback from the host
pub trait FrameScheduler {
    fn request_next_tick(&mut self);
}

/// Yields spawn points received since the last frame
pub trait SpawnSource {
    fn next_spawn(&mut self) -> Option<DVec2>;
}

/// Records frame requests; the host polls it after each frame
///
/// Used by the web loop (which re-arms `requestAnimationFrame` when a request is
/// pending) and by the native headless loop.
#[derive(Debug, Default)]
pub struct FrameRequests {
    pending: bool,
    total: u64,
}

impl FrameRequests {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the pending request, if any
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    /// Requests made since creation
    pub fn total(&self) -> u64 {
        self.total
    }
}

impl FrameScheduler for FrameRequests {
    fn request_next_tick(&mut self) {
        self.pending = true;
        self.total += 1;
    }
}

/// FIFO of spawn points filled by input handlers between frames
#[derive(Debug, Default)]
pub struct SpawnQueue {
    points: VecDeque<DVec2>,
}

impl SpawnQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, point: DVec2) {
        self.points.push_back(point);
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl SpawnSource for SpawnQueue {
    fn next_spawn(&mut self) -> Option<DVec2> {
        self.points.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_requests() {
        let mut frames = FrameRequests::new();
        assert!(!frames.take());

        frames.request_next_tick();
        frames.request_next_tick();
        assert_eq!(frames.total(), 2);
        assert!(frames.take());
        assert!(!frames.take());
    }

    #[test]
    fn test_spawn_queue_is_fifo() {
        let mut queue = SpawnQueue::new();
        queue.push(DVec2::new(1.0, 1.0));
        queue.push(DVec2::new(2.0, 2.0));
        assert!(!queue.is_empty());

        assert_eq!(queue.next_spawn(), Some(DVec2::new(1.0, 1.0)));
        assert_eq!(queue.next_spawn(), Some(DVec2::new(2.0, 2.0)));
        assert_eq!(queue.next_spawn(), None);
        assert!(queue.is_empty());
    }
}
