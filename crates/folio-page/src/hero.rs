//! Hero canvas input plumbing
//!
//! Browser listeners fire between animation frames. They push into an
//! [`EventQueue`] and the frame callback drains it through [`QueuedFrames`],
//! so the engine only ever sees input at frame boundaries.

use folio_canvas::{FrameScheduler, HostEvent};
use std::cell::RefCell;
use std::rc::Rc;

/// Single-threaded, shareable buffer of pending host events
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: Rc<RefCell<Vec<HostEvent>>>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: HostEvent) {
        self.events.borrow_mut().push(event);
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

/// Scheduler for a host that calls back once per presented frame.
///
/// Every call is a frame: the host only ticks when it has one to present.
#[derive(Debug, Clone, Default)]
pub struct QueuedFrames {
    queue: EventQueue,
}

impl QueuedFrames {
    pub fn new(queue: EventQueue) -> Self {
        Self { queue }
    }
}

impl FrameScheduler for QueuedFrames {
    fn next_frame(&mut self, events: &mut Vec<HostEvent>) -> bool {
        events.append(&mut self.queue.events.borrow_mut());
        true
    }
}
