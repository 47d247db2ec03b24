//! About page component

use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;

const PROFILE_WIDTH: u16 = 36;

#[derive(Debug, Clone, Default)]
pub struct AboutComponent;

impl AboutComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let layout = Layout::horizontal([Constraint::Length(PROFILE_WIDTH), Constraint::Min(0)])
            .spacing(1)
            .split(area);
        self.view_profile(state, frame, layout[0]);
        self.view_story(state, frame, layout[1]);
    }

    /// Name, role, location, website, socials and quick links
    pub fn profile_lines<'a>(&self, state: &'a AppState) -> Vec<Line<'a>> {
        let styles = &state.config.config.styles;
        let profile = &state.content.profile;

        let mut lines = vec![
            Line::styled(profile.name.as_str(), styles.style("title")),
            Line::styled(profile.role.as_str(), styles.style("accent")),
            Line::from(vec![
                Span::styled("Location  ", styles.style("muted")),
                Span::raw(profile.location.as_str()),
            ]),
        ];
        if let Some(website) = &profile.website {
            lines.push(Line::from(vec![
                Span::styled("Website   ", styles.style("muted")),
                Span::styled(website.as_str(), styles.style("link")),
            ]));
        }
        lines.push(Line::default());
        for social in &profile.socials {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<10}", social.label), styles.style("muted")),
                Span::styled(social.href.as_str(), styles.style("link")),
            ]));
        }
        lines.push(Line::default());
        lines.push(Line::styled(
            "2 About · 4 Projects · 5 Resume · 6 Contact",
            styles.style("muted"),
        ));
        lines
    }

    fn view_profile(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(styles.style("muted"))
            .title(" Profile ");
        frame.render_widget(
            Paragraph::new(self.profile_lines(state))
                .block(block)
                .wrap(Wrap { trim: true }),
            area,
        );
    }

    fn view_story(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let mut lines = vec![Line::styled("About Me", styles.style("title")), Line::default()];
        for paragraph in &state.content.about {
            lines.push(Line::from(paragraph.as_str()));
            lines.push(Line::default());
        }

        // chips
        let mut chips = Vec::new();
        for skill in &state.content.profile.skills {
            chips.push(Span::styled(format!("[{skill}]"), styles.style("tag")));
            chips.push(Span::raw(" "));
        }
        lines.push(Line::from(chips));

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
    }
}
