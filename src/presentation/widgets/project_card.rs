use std::str::FromStr;

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

use crate::domain::{content::Project, text::truncate_to_width};

/// Tags shown on a card that is not selected
pub const TAG_LIMIT: usize = 4;
/// Rows taken by one card, borders included
pub const CARD_HEIGHT: u16 = 5;

/// A bordered project summary. The selected card lists every tag;
/// the others show the first few and a "+N more" marker.
#[derive(Debug, Clone)]
pub struct ProjectCardWidget<'a> {
    project: &'a Project,
    selected: bool,
    tag_style: Style,
    muted_style: Style,
}

impl<'a> ProjectCardWidget<'a> {
    pub fn new(project: &'a Project, selected: bool) -> Self {
        Self {
            project,
            selected,
            tag_style: Style::default(),
            muted_style: Style::default().dim(),
        }
    }

    pub fn tag_style(mut self, style: Style) -> Self {
        self.tag_style = style;
        self
    }

    pub fn muted_style(mut self, style: Style) -> Self {
        self.muted_style = style;
        self
    }

    pub fn tag_labels(&self) -> Vec<String> {
        if self.selected {
            return self.project.tags.clone();
        }
        let (shown, hidden) = self.project.visible_tags(TAG_LIMIT);
        let mut labels = shown.to_vec();
        if hidden > 0 {
            labels.push(format!("+{hidden} more"));
        }
        labels
    }

    /// Border color derived from the project's gradient token, e.g.
    /// `from-blue-500 to-purple-600` gives blue.
    pub fn accent(&self) -> Color {
        self.project
            .color
            .split(|c: char| !c.is_ascii_alphabetic())
            .filter(|word| !word.is_empty() && *word != "from" && *word != "to")
            .find_map(|word| Color::from_str(word).ok())
            .unwrap_or(Color::Cyan)
    }
}

impl Widget for ProjectCardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let accent = self.accent();
        let border_style = if self.selected {
            Style::default().fg(accent).bold()
        } else {
            Style::default().fg(accent)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if self.selected {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(border_style)
            .title(Span::styled(self.project.name.as_str(), border_style));
        let inner = block.inner(area);
        block.render(area, buf);

        let width = usize::from(inner.width);
        let mut tags = Vec::new();
        for (i, label) in self.tag_labels().into_iter().enumerate() {
            if i > 0 {
                tags.push(Span::raw(" "));
            }
            tags.push(Span::styled(format!("[{label}]"), self.tag_style));
        }
        let links = format!(
            "live: {}  source: {}",
            self.project.live_url, self.project.github_url
        );
        let lines = vec![
            Line::from(truncate_to_width(&self.project.description, width)),
            Line::from(tags),
            Line::styled(truncate_to_width(&links, width), self.muted_style),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn project(tags: &[&str]) -> Project {
        Project {
            name: "Trading Bot Dashboard".into(),
            description: "Live crypto trading dashboard".into(),
            live_url: "https://bot.example.com".into(),
            github_url: "https://github.com/example/bot".into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            color: "from-green-500 to-blue-600".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_unselected_card_limits_tags() {
        let p = project(&["Next.js", "Python", "AI", "Trading", "WebSockets", "Redis"]);
        let card = ProjectCardWidget::new(&p, false);
        assert_eq!(
            card.tag_labels(),
            vec!["Next.js", "Python", "AI", "Trading", "+2 more"]
        );
    }

    #[test]
    fn test_selected_card_shows_all_tags() {
        let p = project(&["Next.js", "Python", "AI", "Trading", "WebSockets", "Redis"]);
        let card = ProjectCardWidget::new(&p, true);
        assert_eq!(card.tag_labels().len(), 6);
    }

    #[test]
    fn test_few_tags_have_no_marker() {
        let p = project(&["Python"]);
        assert_eq!(ProjectCardWidget::new(&p, false).tag_labels(), vec!["Python"]);
    }

    #[test]
    fn test_accent_from_gradient_token() {
        let p = project(&[]);
        assert_eq!(ProjectCardWidget::new(&p, false).accent(), Color::Green);

        let plain = Project::default();
        assert_eq!(ProjectCardWidget::new(&plain, false).accent(), Color::Cyan);
    }

    #[test]
    fn test_render_includes_name_and_links() {
        let p = project(&["Python"]);
        let area = Rect::new(0, 0, 60, CARD_HEIGHT);
        let mut buffer = Buffer::empty(area);
        ProjectCardWidget::new(&p, false).render(area, &mut buffer);

        let content: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("Trading Bot Dashboard"));
        assert!(content.contains("[Python]"));
        assert!(content.contains("live: https://bot.example.com"));
    }
}
