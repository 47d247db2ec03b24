//! Resume page component

use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;

pub const DOWNLOAD_HINT: &str = "Press d to download";

#[derive(Debug, Clone, Default)]
pub struct ResumeComponent;

impl ResumeComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn lines<'a>(&self, state: &'a AppState) -> Vec<Line<'a>> {
        let styles = &state.config.config.styles;
        let document = &state.content.resume;

        let mut lines = vec![
            Line::styled("Resume", styles.style("title")),
            Line::default(),
            Line::from(vec![
                Span::styled("Document  ", styles.style("muted")),
                Span::styled(document.path.display().to_string(), styles.style("link")),
            ]),
            Line::from(vec![
                Span::styled("Save as   ", styles.style("muted")),
                Span::raw(document.download_name.as_str()),
            ]),
            Line::default(),
        ];

        let resume = &state.resume;
        if resume.downloading {
            lines.push(Line::styled("Downloading...", styles.style("accent")));
        } else if let Some(path) = &resume.saved_to {
            lines.push(Line::styled(
                format!("Saved to {}", path.display()),
                styles.style("success"),
            ));
        } else {
            lines.push(Line::styled(DOWNLOAD_HINT, styles.style("muted")));
        }
        lines
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(state.config.config.styles.style("muted"));
        frame.render_widget(Paragraph::new(self.lines(state)).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn last_line(state: &AppState) -> String {
        ResumeComponent::new()
            .lines(state)
            .last()
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    #[test]
    fn test_status_line_follows_download_state() {
        let mut state = AppState::default();
        assert_eq!(last_line(&state), DOWNLOAD_HINT);

        state.resume.downloading = true;
        assert_eq!(last_line(&state), "Downloading...");

        state.resume.downloading = false;
        state.resume.saved_to = Some(PathBuf::from("/tmp/cv.pdf"));
        assert_eq!(last_line(&state), "Saved to /tmp/cv.pdf");
    }
}
