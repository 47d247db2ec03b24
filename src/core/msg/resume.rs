use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Messages specific to the resume page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResumeMsg {
    Download,
    Downloaded(PathBuf),
    DownloadFailed(String),
}
