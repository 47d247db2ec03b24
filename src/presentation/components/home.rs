//! Home page component
//!
//! The hero block (greeting, typewriter name, role, then the staged reveal of
//! bio and links) above a tabbed panel with skills, experience and featured
//! projects.

use ratatui::{prelude::*, widgets::*};
use strum::IntoEnumIterator;

use crate::{
    core::state::AppState,
    domain::{filter::skills_for, ui::Section},
    presentation::widgets::{project_card::CARD_HEIGHT, ProjectCardWidget, TabBarWidget, TypewriterWidget},
};

/// Number of projects in the featured strip
pub const FEATURED_PROJECTS: usize = 3;
const HERO_HEIGHT: u16 = 9;

#[derive(Debug, Clone, Default)]
pub struct HomeComponent;

impl HomeComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let layout = Layout::vertical([
            Constraint::Length(HERO_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

        self.view_hero(state, frame, layout[0]);

        let styles = &state.config.config.styles;
        let sections: Vec<Section> = Section::iter().collect();
        let selected = sections.iter().position(|s| *s == state.home.section);
        frame.render_widget(
            TabBarWidget::new(sections.iter().map(ToString::to_string), selected)
                .highlight_style(styles.style("highlight")),
            layout[1],
        );

        match state.home.section {
            Section::Skills => self.view_skills(state, frame, layout[2]),
            Section::Experience => self.view_experience(state, frame, layout[2]),
            Section::Projects => self.view_featured(state, frame, layout[2]),
        }
    }

    /// Lines of the hero block. Bio and links appear only once the staged
    /// reveal has happened.
    pub fn hero_lines<'a>(&self, state: &'a AppState) -> Vec<Line<'a>> {
        let styles = &state.config.config.styles;
        let profile = &state.content.profile;
        let typewriter = &state.home.typewriter;

        let mut lines = vec![
            Line::styled("Hi, I'm", styles.style("muted")),
            TypewriterWidget::new(
                typewriter.display_text(),
                state.home.cursor_visible(state.system.elapsed),
            )
            .style(styles.style("title"))
            .cursor_style(styles.style("accent"))
            .line(),
            Line::styled(profile.role.as_str(), styles.style("accent")),
            Line::default(),
        ];

        if state.home.show_content {
            lines.push(Line::from(profile.bio.as_str()));
            lines.push(Line::default());
            let socials: Vec<&str> = profile.socials.iter().map(|s| s.label.as_str()).collect();
            lines.push(Line::from(vec![
                Span::styled("Hire Me ", styles.style("highlight")),
                Span::styled(profile.hire_me_link(), styles.style("link")),
            ]));
            lines.push(Line::styled(socials.join(" · "), styles.style("muted")));
        }
        lines
    }

    fn view_hero(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            Paragraph::new(self.hero_lines(state)).wrap(Wrap { trim: true }),
            area,
        );
    }

    fn view_skills(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let panel = &state.home.skills;
        let layout = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).split(area);

        frame.render_widget(
            TabBarWidget::new(panel.categories().to_vec(), panel.active_index())
                .highlight_style(styles.style("highlight")),
            layout[0],
        );

        let items: Vec<ListItem> = skills_for(&state.content.skill_categories, panel.active())
            .iter()
            .map(|skill| {
                ListItem::new(Line::from(vec![
                    Span::styled(" • ", styles.style("accent")),
                    Span::raw(skill.name.as_str()),
                ]))
            })
            .collect();
        frame.render_widget(List::new(items), layout[1]);
    }

    fn view_experience(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let mut lines = Vec::new();
        for exp in &state.content.profile.experience {
            lines.push(Line::from(vec![
                Span::styled(exp.role.as_str(), styles.style("title")),
                Span::raw(" @ "),
                Span::styled(exp.company.as_str(), styles.style("accent")),
                Span::styled(format!("  ({})", exp.period), styles.style("muted")),
            ]));
            lines.push(Line::from(exp.summary.as_str()));
            lines.push(Line::default());
        }
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
    }

    fn view_featured(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let projects = state.content.featured_projects(FEATURED_PROJECTS);
        let rows = Layout::vertical(
            projects
                .iter()
                .map(|_| Constraint::Length(CARD_HEIGHT))
                .chain(std::iter::once(Constraint::Min(0))),
        )
        .split(area);
        for (project, row) in projects.iter().zip(rows.iter()) {
            frame.render_widget(
                ProjectCardWidget::new(project, false)
                    .tag_style(styles.style("tag"))
                    .muted_style(styles.style("muted")),
                *row,
            );
        }
    }
}
