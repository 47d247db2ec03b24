use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::core::timer::TimerKey;
use crate::domain::contact::{MailOutcome, SubmissionId};

/// Raw messages from external sources (input, timers, services)
/// These represent unprocessed external events that need to be translated to domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawMsg {
    // System events
    /// Tick carrying the time elapsed since startup
    Tick(Duration),
    Render,
    Resize(u16, u16),
    Quit,
    Suspend,
    Resume,

    // User input
    Key(KeyEvent),
    Paste(String),

    // Service events
    TimerFired(TimerKey),
    MailCompleted {
        submission: SubmissionId,
        outcome: MailOutcome,
    },
    ResumeDownloaded(Result<PathBuf, String>),

    // System status
    SystemMessage(String),
    Error(String),
}

impl RawMsg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(
            self,
            RawMsg::Tick(_) | RawMsg::Render | RawMsg::TimerFired(_)
        )
    }
}
