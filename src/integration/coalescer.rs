//! Render and resize coalescing for the main loop
//!
//! Any number of render requests seen during one loop iteration produce a
//! single frame. A burst of resizes collapses to the last size, and a size
//! equal to the one already applied is dropped.

#[derive(Debug, Clone, Default)]
pub struct Coalescer {
    applied_size: Option<(u16, u16)>,
    render_pending: bool,
}

impl Coalescer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The terminal itself asked for a frame (frame-rate tick, resume, resize)
    pub fn note_frame_due(&mut self) {
        self.render_pending = true;
    }

    pub fn note_render_requests(&mut self, count: usize) {
        if count > 0 {
            self.render_pending = true;
        }
    }

    /// Size to apply for this iteration, if any. Applying a size also
    /// schedules a frame.
    pub fn resize(&mut self, requested: &[(u16, u16)]) -> Option<(u16, u16)> {
        let last = requested.last().copied()?;
        if self.applied_size == Some(last) {
            return None;
        }
        self.applied_size = Some(last);
        self.render_pending = true;
        Some(last)
    }

    /// Whether to draw now; clears the pending flag.
    pub fn take_render(&mut self) -> bool {
        std::mem::take(&mut self.render_pending)
    }
}
