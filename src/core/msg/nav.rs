use serde::{Deserialize, Serialize};

use crate::domain::ui::Page;

/// Messages specific to NavState
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavMsg {
    Select(Page),
    /// Index into the navigation bar entries
    SelectEntry(usize),
    Next,
    Prev,
    /// Run the mount hook of the current page (startup)
    MountCurrent,
}
