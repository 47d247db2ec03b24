use crate::{
    core::{cmd::Cmd, msg::projects::ProjectsMsg},
    domain::{
        content::Project,
        filter::{filter_projects, project_filters, ProjectFilter},
    },
};

/// Projects page state: the active filter tab and the selected card
#[derive(Debug, Clone)]
pub struct ProjectsState {
    pub filters: Vec<ProjectFilter>,
    pub active_filter: usize,
    /// Index into the filtered list
    pub selected: Option<usize>,
}

impl Default for ProjectsState {
    fn default() -> Self {
        Self {
            filters: project_filters(),
            active_filter: 0,
            selected: None,
        }
    }
}

impl ProjectsState {
    pub fn active(&self) -> &ProjectFilter {
        self.filters
            .get(self.active_filter)
            .unwrap_or(&ProjectFilter::All)
    }

    pub fn visible<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        filter_projects(projects, self.active())
    }

    pub fn selected_project<'a>(&self, projects: &'a [Project]) -> Option<&'a Project> {
        self.selected
            .and_then(|idx| self.visible(projects).get(idx).copied())
    }

    pub fn reset(&mut self) {
        self.active_filter = 0;
        self.selected = None;
    }

    pub fn update(&mut self, msg: ProjectsMsg, projects: &[Project]) -> Vec<Cmd> {
        match msg {
            ProjectsMsg::NextFilter => {
                if !self.filters.is_empty() {
                    self.active_filter = (self.active_filter + 1) % self.filters.len();
                }
                self.selected = None;
                vec![]
            }
            ProjectsMsg::PrevFilter => {
                if !self.filters.is_empty() {
                    let len = self.filters.len();
                    self.active_filter = (self.active_filter + len - 1) % len;
                }
                self.selected = None;
                vec![]
            }
            ProjectsMsg::SelectFilter(label) => {
                match self.filters.iter().position(|f| f.label() == label) {
                    Some(idx) => {
                        self.active_filter = idx;
                        self.selected = None;
                        vec![]
                    }
                    None => vec![Cmd::LogError {
                        message: format!("Unknown project filter: {label}"),
                    }],
                }
            }
            ProjectsMsg::SelectNext => {
                let count = self.visible(projects).len();
                self.selected = match (count, self.selected) {
                    (0, _) => None,
                    (_, None) => Some(0),
                    (n, Some(i)) => Some((i + 1) % n),
                };
                vec![]
            }
            ProjectsMsg::SelectPrev => {
                let count = self.visible(projects).len();
                self.selected = match (count, self.selected) {
                    (0, _) => None,
                    (n, None) => Some(n - 1),
                    (n, Some(i)) => Some((i + n - 1) % n),
                };
                vec![]
            }
            ProjectsMsg::ClearSelection => {
                self.selected = None;
                vec![]
            }
            // Handled by the top-level update, which owns the status line
            ProjectsMsg::OpenSelected => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn project(name: &str, tags: &[&str]) -> Project {
        Project {
            name: name.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    fn gallery() -> Vec<Project> {
        vec![
            project("Shop", &["Next.js", "E-commerce"]),
            project("Bot", &["Python", "AI"]),
            project("Blog", &["Next.js", "Full-Stack"]),
        ]
    }

    #[test]
    fn test_default_is_all() {
        let state = ProjectsState::default();
        assert_eq!(state.active(), &ProjectFilter::All);
        assert_eq!(state.visible(&gallery()).len(), 3);
    }

    #[test]
    fn test_select_filter_by_label() {
        let projects = gallery();
        let mut state = ProjectsState::default();
        state.update(ProjectsMsg::SelectFilter("Next.js".into()), &projects);
        let names: Vec<&str> = state
            .visible(&projects)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Shop", "Blog"]);

        let cmds = state.update(ProjectsMsg::SelectFilter("Rust".into()), &projects);
        assert_eq!(state.active().label(), "Next.js");
        assert!(matches!(cmds.as_slice(), [Cmd::LogError { .. }]));
    }

    #[test]
    fn test_selection_wraps_within_filtered_list() {
        let projects = gallery();
        let mut state = ProjectsState::default();
        state.update(ProjectsMsg::SelectFilter("Next.js".into()), &projects);

        state.update(ProjectsMsg::SelectNext, &projects);
        assert_eq!(state.selected_project(&projects).map(|p| p.name.as_str()), Some("Shop"));
        state.update(ProjectsMsg::SelectNext, &projects);
        state.update(ProjectsMsg::SelectNext, &projects);
        assert_eq!(state.selected, Some(0));
        state.update(ProjectsMsg::SelectPrev, &projects);
        assert_eq!(state.selected_project(&projects).map(|p| p.name.as_str()), Some("Blog"));
    }

    #[test]
    fn test_filter_change_clears_selection() {
        let projects = gallery();
        let mut state = ProjectsState::default();
        state.update(ProjectsMsg::SelectNext, &projects);
        assert!(state.selected.is_some());
        state.update(ProjectsMsg::NextFilter, &projects);
        assert_eq!(state.selected, None);
        assert_eq!(state.active().label(), "Next.js");
        state.update(ProjectsMsg::PrevFilter, &projects);
        state.update(ProjectsMsg::PrevFilter, &projects);
        assert_eq!(state.active().label(), "E-commerce");
    }

    #[test]
    fn test_selection_on_empty_list() {
        let projects = gallery();
        let mut state = ProjectsState::default();
        state.update(ProjectsMsg::SelectFilter("E-commerce".into()), &projects);
        state.update(ProjectsMsg::SelectFilter("Python".into()), &projects);
        state.update(ProjectsMsg::SelectNext, &[]);
        assert_eq!(state.selected, None);
    }
}
