//! Page components
//!
//! Components are stateless renderers that receive state as parameters.
//! [`Components::render`] lays out the frame: navbar, the current page,
//! footer, and the blocking notice on top when one is open.

use ratatui::prelude::*;

use crate::{core::state::AppState, domain::ui::Page};

pub mod about;
pub mod contact;
pub mod footer;
pub mod home;
pub mod navbar;
pub mod notice;
pub mod projects;
pub mod resume;

pub use about::AboutComponent;
pub use contact::ContactComponent;
pub use footer::FooterComponent;
pub use home::HomeComponent;
pub use navbar::NavbarComponent;
pub use notice::NoticeComponent;
pub use projects::ProjectsComponent;
pub use resume::ResumeComponent;

/// Collection of all components
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub navbar: NavbarComponent,
    pub home: HomeComponent,
    pub about: AboutComponent,
    pub projects: ProjectsComponent,
    pub resume: ResumeComponent,
    pub contact: ContactComponent,
    pub footer: FooterComponent,
    pub notice: NoticeComponent,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let area = frame.area();
        let layout = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(area);

        self.navbar.view(state, frame, layout[0]);

        let body = layout[1].inner(Margin::new(1, 0));
        match state.current_page() {
            Page::Home => self.home.view(state, frame, body),
            Page::About => self.about.view(state, frame, body),
            Page::Projects => self.projects.view(state, frame, body),
            Page::Resume => self.resume.view(state, frame, body),
            Page::Contact => self.contact.view(state, frame, body),
        }

        self.footer.view(state, frame, layout[2]);

        if state.has_modal() {
            self.notice.view(state, frame, area);
        }
    }
}
