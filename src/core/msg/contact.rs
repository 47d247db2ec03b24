use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::domain::contact::{Field, MailOutcome, SubmissionId};

/// Messages specific to ContactState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ContactMsg {
    // Editing mode
    StartEditing,
    StopEditing,
    FocusNext,
    FocusPrev,
    /// Jump straight to a field, for callers that already know it
    Focus(Field),

    /// Key handed to the text engine for the focused field
    Input(KeyEvent),
    SetField(Field, String),
    /// Text inserted at the focused field's cursor
    Paste(String),

    Submit,
    MailCompleted {
        submission: SubmissionId,
        outcome: MailOutcome,
    },
    DismissNotice,
}
