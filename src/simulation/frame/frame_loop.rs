/// Lifecycle of the per-frame advancement
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    /// Not started yet
    Idle,
    /// A frame is requested after every delivered frame
    Running,
    /// Stopped for good; late frames are ignored
    Cancelled,
}

/// Bookkeeping for a self-rescheduling frame callback.
///
/// The host requests a display frame whenever `start` or `on_frame` returns
/// true, and drops its pending request on `cancel`.
#[derive(Debug)]
pub struct FrameLoop {
    state: LoopState,
    pending: bool,
    delivered: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            state: LoopState::Idle,
            pending: false,
            delivered: 0,
        }
    }

    /// Returns true when the caller must request the first frame
    pub fn start(&mut self) -> bool {
        if self.state != LoopState::Idle {
            return false;
        }
        self.state = LoopState::Running;
        self.pending = true;
        true
    }

    /// Called when a requested frame arrives. Returns true when the frame
    /// should advance the simulation and request the next one.
    pub fn on_frame(&mut self) -> bool {
        self.pending = false;
        if self.state != LoopState::Running {
            return false;
        }
        self.delivered += 1;
        self.pending = true;
        true
    }

    pub fn cancel(&mut self) {
        if self.state == LoopState::Running {
            log::debug!("frame loop cancelled after {} frames", self.delivered);
        }
        self.state = LoopState::Cancelled;
        self.pending = false;
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// A frame has been requested and not yet delivered
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Frames that advanced the simulation
    pub fn delivered(&self) -> u64 {
        self.delivered
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}
