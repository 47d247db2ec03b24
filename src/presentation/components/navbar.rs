//! Navigation bar component

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    domain::ui::{Page, NAV_ENTRIES},
    presentation::widgets::TabBarWidget,
};

/// Top bar: brand on the left, numbered page entries on the right
#[derive(Debug, Clone, Default)]
pub struct NavbarComponent;

impl NavbarComponent {
    pub fn new() -> Self {
        Self
    }

    /// Index of the highlighted entry. The Experience entry wins over Home
    /// while the home page shows its experience panel.
    pub fn active_entry(&self, state: &AppState) -> Option<usize> {
        let current = state.current_page();
        let section = (current == Page::Home).then_some(state.home.section);
        NAV_ENTRIES
            .iter()
            .position(|entry| {
                entry.page == current && entry.section.is_some() && entry.section == section
            })
            .or_else(|| {
                NAV_ENTRIES
                    .iter()
                    .position(|entry| entry.page == current && entry.section.is_none())
            })
    }

    pub fn titles(&self) -> Vec<String> {
        NAV_ENTRIES
            .iter()
            .enumerate()
            .map(|(i, entry)| format!("{} {}", i + 1, entry.label))
            .collect()
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(styles.style("muted"));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let brand = state.content.profile.first_name().to_string();
        let brand_width = u16::try_from(brand.chars().count() + 3).unwrap_or(u16::MAX);
        let layout = Layout::horizontal([Constraint::Length(brand_width), Constraint::Min(0)])
            .split(inner);

        frame.render_widget(
            Paragraph::new(Span::styled(format!(" {brand}."), styles.style("accent"))),
            layout[0],
        );
        frame.render_widget(
            TabBarWidget::new(self.titles(), self.active_entry(state))
                .highlight_style(styles.style("highlight")),
            layout[1],
        );
    }
}
