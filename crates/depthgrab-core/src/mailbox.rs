use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

use crate::frame::DepthFrame;

struct Slot {
    frame: Option<DepthFrame>,
    closed: bool,
}

/// Single-slot, latest-frame-wins mailbox between the driver callback and
/// the processing thread.
///
/// The driver only ever touches the slot; conversion and export both run on
/// the consumer side, so an in-progress export can never race a frame
/// arrival. An undelivered frame is displaced by the next one rather than
/// queued.
pub struct FrameMailbox {
    slot: Mutex<Slot>,
    available: Condvar,
}

impl FrameMailbox {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(Slot {
                frame: None,
                closed: false,
            }),
            available: Condvar::new(),
        }
    }

    /// Driver side: deposit a frame, displacing any frame the consumer has
    /// not picked up yet. Returns the displaced frame, if any, so the
    /// caller can account for drops.
    pub fn publish(&self, frame: DepthFrame) -> Option<DepthFrame> {
        let mut slot = self.slot.lock();
        let displaced = slot.frame.replace(frame);
        self.available.notify_one();
        displaced
    }

    /// Consumer side: take the pending frame without blocking.
    pub fn take(&self) -> Option<DepthFrame> {
        self.slot.lock().frame.take()
    }

    /// Consumer side: wait up to `timeout` for a frame. Returns `None` on
    /// timeout, or immediately once the mailbox is closed and drained.
    pub fn take_timeout(&self, timeout: Duration) -> Option<DepthFrame> {
        let deadline = Instant::now() + timeout;
        let mut slot = self.slot.lock();
        loop {
            if let Some(frame) = slot.frame.take() {
                return Some(frame);
            }
            if slot.closed {
                return None;
            }
            if self.available.wait_until(&mut slot, deadline).timed_out() {
                return slot.frame.take();
            }
        }
    }

    /// Driver side: signal that no more frames will arrive. Wakes any
    /// waiting consumer.
    pub fn close(&self) {
        let mut slot = self.slot.lock();
        slot.closed = true;
        self.available.notify_all();
    }

    pub fn is_closed(&self) -> bool {
        self.slot.lock().closed
    }
}

impl Default for FrameMailbox {
    fn default() -> Self {
        Self::new()
    }
}
