use std::path::{Path, PathBuf};

use directories::UserDirs;
use tokio::sync::mpsc;

use crate::core::raw_msg::RawMsg;
use crate::utils;

/// Relative path of the document that ships inside the binary
pub const BUNDLED_RESUME_PATH: &str = "assets/resume.pdf";
const BUNDLED_RESUME: &[u8] = include_bytes!("../../assets/resume.pdf");

/// Where the bytes of a download come from
#[derive(Debug, Clone, PartialEq, Eq)]
enum Source {
    File(PathBuf),
    Bundled,
}

/// Copies the resume document into the user's download directory.
///
/// Relative document paths are looked up under the config directory. The
/// default document is compiled in, so it downloads even when no copy exists
/// on disk.
#[derive(Debug, Clone)]
pub struct ResumeDownloader {
    raw_tx: mpsc::UnboundedSender<RawMsg>,
    source_root: PathBuf,
    target_dir: PathBuf,
}

impl ResumeDownloader {
    pub fn new(raw_tx: mpsc::UnboundedSender<RawMsg>) -> Self {
        Self::with_target_dir(raw_tx, default_download_dir())
    }

    pub fn with_target_dir(raw_tx: mpsc::UnboundedSender<RawMsg>, target_dir: PathBuf) -> Self {
        Self {
            raw_tx,
            source_root: utils::get_config_dir(),
            target_dir,
        }
    }

    /// Resolve relative document paths against `root` instead of the config directory.
    pub fn with_source_root(mut self, root: PathBuf) -> Self {
        self.source_root = root;
        self
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    /// Start the copy in the background. The result arrives as
    /// `RawMsg::ResumeDownloaded`.
    pub fn download(&self, source: PathBuf, file_name: String) {
        let raw_tx = self.raw_tx.clone();
        let root = self.source_root.clone();
        let target = self.target_dir.join(file_name);
        tokio::spawn(async move {
            let source = resolve(&root, &source).await;
            let result = save_document(&source, &target).await;
            if let Err(e) = &result {
                log::error!("Resume download from {source:?} failed: {e}");
            }
            let _ = raw_tx.send(RawMsg::ResumeDownloaded(result));
        });
    }
}

async fn resolve(root: &Path, path: &Path) -> Source {
    if path.is_absolute() {
        return Source::File(path.to_path_buf());
    }
    let candidate = root.join(path);
    let on_disk = tokio::fs::try_exists(&candidate).await.unwrap_or(false);
    if !on_disk && path == Path::new(BUNDLED_RESUME_PATH) {
        Source::Bundled
    } else {
        Source::File(candidate)
    }
}

async fn save_document(source: &Source, target: &Path) -> Result<PathBuf, String> {
    if let Some(parent) = target.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| format!("{}: {e}", parent.display()))?;
    }
    match source {
        Source::File(path) => {
            tokio::fs::copy(path, target)
                .await
                .map_err(|e| format!("{}: {e}", path.display()))?;
        }
        Source::Bundled => {
            tokio::fs::write(target, BUNDLED_RESUME)
                .await
                .map_err(|e| format!("{}: {e}", target.display()))?;
        }
    }
    Ok(target.to_path_buf())
}

fn default_download_dir() -> PathBuf {
    UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
        .unwrap_or_else(utils::get_data_dir)
}
