use ratatui::prelude::*;
use ratatui::widgets::{Tabs, Widget};

/// One-line row of tabs; used for the navigation bar, home sections,
/// skill categories and project filters.
#[derive(Debug, Clone)]
pub struct TabBarWidget {
    titles: Vec<String>,
    selected: Option<usize>,
    style: Style,
    highlight_style: Style,
}

impl TabBarWidget {
    pub fn new<I, T>(titles: I, selected: Option<usize>) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
            selected,
            style: Style::default(),
            highlight_style: Style::default().reversed(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn highlight_style(mut self, style: Style) -> Self {
        self.highlight_style = style;
        self
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }
}

impl Widget for TabBarWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Tabs::new(self.titles)
            .select(self.selected)
            .style(self.style)
            .highlight_style(self.highlight_style)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_titles() {
        let widget = TabBarWidget::new(["All Projects", "Next.js"], Some(0));
        assert_eq!(widget.titles(), &["All Projects".to_string(), "Next.js".to_string()]);
    }

    #[test]
    fn test_render_shows_every_title() {
        let widget = TabBarWidget::new(["Frontend", "Backend", "AI"], Some(1));
        let area = Rect::new(0, 0, 40, 1);
        let mut buffer = Buffer::empty(area);
        widget.render(area, &mut buffer);

        let content: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("Frontend"));
        assert!(content.contains("Backend"));
        assert!(content.contains("AI"));
    }

    #[test]
    fn test_selected_tab_is_highlighted() {
        let widget = TabBarWidget::new(["One", "Two"], Some(1))
            .highlight_style(Style::default().fg(Color::Cyan));
        let area = Rect::new(0, 0, 20, 1);
        let mut buffer = Buffer::empty(area);
        widget.render(area, &mut buffer);

        let two = buffer
            .content()
            .iter()
            .position(|c| c.symbol() == "T")
            .expect("second tab rendered");
        assert_eq!(buffer.content()[two].fg, Color::Cyan);
    }

    #[test]
    fn test_render_zero_width() {
        let widget = TabBarWidget::new(["Home"], None);
        let area = Rect::new(0, 0, 0, 1);
        let mut buffer = Buffer::empty(area);
        widget.render(area, &mut buffer);
    }
}
