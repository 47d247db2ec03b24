use serde::{Deserialize, Serialize};

use crate::domain::typewriter::TypewriterParams;

/// Messages specific to HomeState
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HomeMsg {
    // Skills panel
    NextCategory,
    PrevCategory,
    /// Select by label. Keys cycle with Next/PrevCategory; this is for callers
    /// that already know the label.
    SelectCategory(String),

    // Lower panel (skills / experience / projects)
    NextSection,
    PrevSection,

    /// Replace the typewriter's text or timing. No key produces it; embedders
    /// and tests drive the restart through it.
    Reconfigure(TypewriterParams),
}
