//! Footer component: brand line on top, status or key hints below

use chrono::Datelike;
use ratatui::{prelude::*, widgets::*};

use crate::{core::state::AppState, domain::ui::Page};

#[derive(Debug, Clone, Default)]
pub struct FooterComponent;

impl FooterComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn copyright(&self, state: &AppState) -> String {
        format!(
            "© {} {}",
            chrono::Local::now().year(),
            state.content.profile.name
        )
    }

    /// Key hints for the current page
    pub fn hints(&self, state: &AppState) -> &'static str {
        match state.current_page() {
            Page::Home => "h/l: skill category  j/k: section  tab: next page  q: quit",
            Page::About => "1-6: jump to page  tab: next page  q: quit",
            Page::Projects => "h/l: filter  j/k: select  enter: open  esc: clear  q: quit",
            Page::Resume => "d: download  tab: next page  q: quit",
            Page::Contact if state.is_editing() => "esc: stop editing  ctrl-s: send",
            Page::Contact => "i: edit  ctrl-s: send  q: quit",
        }
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let rows = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(area);

        let socials: Vec<&str> = state
            .content
            .profile
            .socials
            .iter()
            .map(|s| s.label.as_str())
            .collect();
        let brand = Line::from(vec![
            Span::styled(
                format!(" {}.", state.content.profile.first_name()),
                styles.style("accent"),
            ),
            Span::styled("  Home · About · Projects · Contact  ", styles.style("muted")),
            Span::styled(socials.join(" · "), styles.style("link")),
        ]);
        let cols = Layout::horizontal([Constraint::Min(0), Constraint::Length(32)]).split(rows[0]);
        frame.render_widget(Paragraph::new(brand), cols[0]);
        frame.render_widget(
            Paragraph::new(Span::styled(self.copyright(state), styles.style("muted")))
                .alignment(Alignment::Right),
            cols[1],
        );

        let status = match state.system.status_message() {
            Some(message) => Span::styled(format!(" {message}"), styles.style("accent")),
            None => Span::styled(format!(" {}", self.hints(state)), styles.style("muted")),
        };
        frame.render_widget(Paragraph::new(status), rows[1]);
    }
}
