use serde::{Deserialize, Serialize};

/// Timer slots. At most one timer is pending per slot; scheduling into a
/// slot replaces whatever was pending there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerId {
    /// Next typewriter reveal on the home page
    Typewriter,
    /// Staged reveal of the home page's secondary content
    ContentReveal,
    /// Auto-dismissal of the contact form's success acknowledgment
    AckDismiss,
}

/// A scheduled timer: its slot plus the token the owner checks on delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerKey {
    pub id: TimerId,
    pub token: u64,
}

impl TimerKey {
    pub fn new(id: TimerId, token: u64) -> Self {
        Self { id, token }
    }
}
