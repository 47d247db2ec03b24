use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{
    msg::Msg,
    timer::{TimerId, TimerKey},
};
use crate::domain::contact::{ContactPayload, SubmissionId};

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    // Render requests travel through Cmd::RequestRender and are coalesced by AppRunner.
    Resize { width: u16, height: u16 },
}

/// Elm-like command definitions
/// Represents side effects (timers, the mail relay, file I/O, etc.)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    // Timer commands
    /// Fire `RawMsg::TimerFired(key)` after `after`, replacing any pending timer in the slot
    ScheduleTimer {
        key: TimerKey,
        after: Duration,
    },
    CancelTimer {
        id: TimerId,
    },

    // Contact form
    SendMail {
        submission: SubmissionId,
        payload: ContactPayload,
    },

    // Files
    DownloadResume {
        source: PathBuf,
        file_name: String,
    },

    // UI-related commands
    Tui(TuiCommand),
    /// Request a render; coalesced by AppRunner
    RequestRender,

    // Logging related
    LogError {
        message: String,
    },
    LogInfo {
        message: String,
    },

    // Batch command (execute multiple commands together)
    Batch(Vec<Cmd>),

    // Do nothing (for testing)
    None,
}

impl Cmd {
    /// Combine multiple commands into one
    pub fn batch(mut commands: Vec<Cmd>) -> Cmd {
        match commands.len() {
            0 => Cmd::None,
            1 => commands.pop().unwrap_or(Cmd::None),
            _ => Cmd::Batch(commands),
        }
    }

    pub fn schedule(id: TimerId, token: u64, after: Duration) -> Cmd {
        Cmd::ScheduleTimer {
            key: TimerKey::new(id, token),
            after,
        }
    }

    /// Whether the command requires asynchronous processing
    pub fn is_async(&self) -> bool {
        match self {
            Cmd::ScheduleTimer { .. } | Cmd::SendMail { .. } | Cmd::DownloadResume { .. } => true,

            Cmd::CancelTimer { .. }
            | Cmd::Tui(..)
            | Cmd::RequestRender
            | Cmd::LogError { .. }
            | Cmd::LogInfo { .. }
            | Cmd::None => false,

            Cmd::Batch(cmds) => cmds.iter().any(|cmd| cmd.is_async()),
        }
    }

    /// Get command priority (smaller numbers = higher priority)
    pub fn priority(&self) -> u8 {
        match self {
            // UI-related has highest priority
            Cmd::Tui(..) | Cmd::RequestRender => 0,

            // Cancellation must land before anything scheduled after it
            Cmd::CancelTimer { .. } => 1,
            Cmd::ScheduleTimer { .. } => 2,

            // User actions
            Cmd::SendMail { .. } | Cmd::DownloadResume { .. } => 3,

            // Logging have lowest priority
            Cmd::LogError { .. } | Cmd::LogInfo { .. } => 4,

            // Batch takes highest priority of contained commands
            Cmd::Batch(cmds) => cmds.iter().map(|cmd| cmd.priority()).min().unwrap_or(255),

            Cmd::None => 255,
        }
    }
}

/// Command execution result
#[derive(Debug, Clone)]
pub enum CmdResult {
    /// Success (may generate new messages)
    Success(Vec<Msg>),
    /// Error
    Error(String),
    /// Still executing (for async commands)
    Pending,
}
