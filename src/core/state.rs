use std::sync::Arc;

use crate::{
    domain::{
        content::{Content, Project},
        ui::Page,
    },
    infrastructure::config::Config,
};

pub mod contact;
pub mod home;
pub mod nav;
pub mod projects;
pub mod resume;
pub mod system;

pub use contact::ContactState;
pub use home::HomeState;
pub use nav::NavState;
pub use projects::ProjectsState;
pub use resume::ResumeState;
pub use system::SystemState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Read-only portfolio content shared with the presentation layer
    pub content: Arc<Content>,
    pub nav: NavState,
    pub home: HomeState,
    pub projects: ProjectsState,
    pub contact: ContactState,
    pub resume: ResumeState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    /// The content moves out of `config`; `AppState::content` is its only copy.
    pub fn new_with_config(mut config: Config) -> Self {
        let content = Arc::new(std::mem::take(&mut config.content));
        let animation = &config.animation;
        let home = HomeState::new(
            animation.typewriter_params(&content.profile.name),
            animation.reveal_delay(),
            animation.blink(),
            content.category_labels(),
        );
        let contact = ContactState::new(config.contact.ack_duration());

        Self {
            content,
            home,
            contact,
            config: ConfigState { config },
            ..Default::default()
        }
    }

    /// Start on `page` instead of the home page.
    pub fn with_start_page(mut self, page: Page) -> Self {
        self.nav = NavState::new(page);
        self
    }

    pub fn current_page(&self) -> Page {
        self.nav.current
    }

    /// Keys go to the contact form's text engine.
    pub fn is_editing(&self) -> bool {
        self.nav.current == Page::Contact && self.contact.editing
    }

    /// A blocking notice is open.
    pub fn has_modal(&self) -> bool {
        self.nav.current == Page::Contact && self.contact.notice.is_some()
    }

    pub fn visible_projects(&self) -> Vec<&Project> {
        self.projects.visible(&self.content.projects)
    }
}
