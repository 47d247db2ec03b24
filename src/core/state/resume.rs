use std::path::PathBuf;

use crate::{
    core::{cmd::Cmd, msg::resume::ResumeMsg},
    domain::content::ResumeDocument,
};

#[derive(Debug, Clone, Default)]
pub struct ResumeState {
    pub downloading: bool,
    pub saved_to: Option<PathBuf>,
}

impl ResumeState {
    pub fn update(&mut self, msg: ResumeMsg, document: &ResumeDocument) -> Vec<Cmd> {
        match msg {
            ResumeMsg::Download => {
                if self.downloading {
                    return vec![];
                }
                self.downloading = true;
                vec![Cmd::DownloadResume {
                    source: document.path.clone(),
                    file_name: document.download_name.clone(),
                }]
            }
            ResumeMsg::Downloaded(path) => {
                self.downloading = false;
                self.saved_to = Some(path);
                vec![]
            }
            ResumeMsg::DownloadFailed(error) => {
                self.downloading = false;
                vec![Cmd::LogError {
                    message: format!("Resume download failed: {error}"),
                }]
            }
        }
    }
}
