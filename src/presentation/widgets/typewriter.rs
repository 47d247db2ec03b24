use ratatui::prelude::*;
use ratatui::widgets::Widget;

pub const CURSOR: &str = "|";

/// Revealed typewriter text followed by the blinking cursor.
#[derive(Debug, Clone)]
pub struct TypewriterWidget<'a> {
    text: &'a str,
    cursor_visible: bool,
    style: Style,
    cursor_style: Style,
}

impl<'a> TypewriterWidget<'a> {
    pub fn new(text: &'a str, cursor_visible: bool) -> Self {
        Self {
            text,
            cursor_visible,
            style: Style::default(),
            cursor_style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn cursor_style(mut self, style: Style) -> Self {
        self.cursor_style = style;
        self
    }

    pub fn line(&self) -> Line<'a> {
        // The cursor keeps its cell when hidden so the line does not jitter
        let cursor = if self.cursor_visible { CURSOR } else { " " };
        Line::from(vec![
            Span::styled(self.text, self.style),
            Span::styled(cursor, self.cursor_style),
        ])
    }
}

impl Widget for TypewriterWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.line().render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rendered(widget: TypewriterWidget<'_>, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buffer = Buffer::empty(area);
        widget.render(area, &mut buffer);
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_cursor_follows_text() {
        assert_eq!(rendered(TypewriterWidget::new("Sher", true), 6), "Sher| ");
    }

    #[test]
    fn test_hidden_cursor_keeps_width() {
        assert_eq!(rendered(TypewriterWidget::new("Sher", false), 6), "Sher  ");
    }

    #[test]
    fn test_empty_text_shows_cursor_only() {
        assert_eq!(rendered(TypewriterWidget::new("", true), 3), "|  ");
    }
}
