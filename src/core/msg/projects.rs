use serde::{Deserialize, Serialize};

/// Messages specific to ProjectsState
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectsMsg {
    NextFilter,
    PrevFilter,
    /// Select by label, for callers that already know it
    SelectFilter(String),
    SelectNext,
    SelectPrev,
    ClearSelection,
    /// Show the selected card's links in the status line
    OpenSelected,
}
