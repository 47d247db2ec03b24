//! Projects page component
//!
//! Filter tabs over a vertical list of project cards. The list scrolls so the
//! selected card stays on screen.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    presentation::widgets::{project_card::CARD_HEIGHT, ProjectCardWidget, TabBarWidget},
};

pub const EMPTY_MESSAGE: &str = "No projects match this filter.";

#[derive(Debug, Clone, Default)]
pub struct ProjectsComponent;

impl ProjectsComponent {
    pub fn new() -> Self {
        Self
    }

    /// First card index to draw so that `selected` fits into `capacity` rows
    /// of cards.
    pub fn scroll_offset(selected: Option<usize>, len: usize, capacity: usize) -> usize {
        let capacity = capacity.max(1);
        match selected {
            Some(idx) if idx >= capacity => (idx + 1 - capacity).min(len.saturating_sub(capacity)),
            _ => 0,
        }
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let projects = &state.projects;
        let visible = state.visible_projects();

        let layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(area);

        frame.render_widget(
            TabBarWidget::new(
                projects.filters.iter().map(|f| f.title().to_string()),
                Some(projects.active_filter),
            )
            .highlight_style(styles.style("highlight")),
            layout[0],
        );
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(projects.active().title().to_string(), styles.style("title")),
                Span::styled(format!(" ({})", visible.len()), styles.style("muted")),
            ])),
            layout[1],
        );

        if visible.is_empty() {
            frame.render_widget(
                Paragraph::new(EMPTY_MESSAGE)
                    .style(styles.style("muted"))
                    .alignment(Alignment::Center),
                layout[2],
            );
            return;
        }

        let capacity = usize::from(layout[2].height / CARD_HEIGHT);
        let offset = Self::scroll_offset(projects.selected, visible.len(), capacity);
        let shown = visible.iter().enumerate().skip(offset).take(capacity.max(1));

        let rows = Layout::vertical(
            std::iter::repeat(Constraint::Length(CARD_HEIGHT))
                .take(capacity.max(1))
                .chain(std::iter::once(Constraint::Min(0))),
        )
        .split(layout[2]);

        for ((idx, project), row) in shown.zip(rows.iter()) {
            frame.render_widget(
                ProjectCardWidget::new(project, projects.selected == Some(idx))
                    .tag_style(styles.style("tag"))
                    .muted_style(styles.style("muted")),
                *row,
            );
        }
    }
}
