//! Blocking notice overlay

use ratatui::{prelude::*, widgets::*};

use crate::{core::state::AppState, domain::contact::Notice};

pub const DISMISS_HINT: &str = "Press Enter to dismiss";

#[derive(Debug, Clone, Default)]
pub struct NoticeComponent;

impl NoticeComponent {
    pub fn new() -> Self {
        Self
    }

    /// Centered rectangle of at most `width` x `height` inside `area`
    pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
        let width = width.min(area.width);
        let height = height.min(area.height);
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let Some(notice) = &state.contact.notice else {
            return;
        };
        self.view_notice(notice, state, frame, area);
    }

    fn view_notice(&self, notice: &Notice, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let popup = Self::centered(area, 50, 7);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(styles.style("error"))
            .title(format!(" {} ", notice.title))
            .title_bottom(Line::styled(DISMISS_HINT, styles.style("muted")).centered());

        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(notice.body.as_str())
                .block(block)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            popup,
        );
    }
}
