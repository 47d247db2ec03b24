use crate::{
    core::{
        cmd::Cmd,
        msg::{nav::NavMsg, projects::ProjectsMsg, resume::ResumeMsg, Msg},
        state::AppState,
        textarea_engine::TextAreaEngine,
        timer::TimerId,
    },
    domain::ui::Page,
    infrastructure::tui::textarea_engine::TuiTextAreaEngine,
};

/// Collaborators the otherwise pure update needs
pub struct UpdateContext<'a> {
    pub text_area: &'a dyn TextAreaEngine,
}

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, state: AppState) -> (AppState, Vec<Cmd>) {
    update_with_context(
        msg,
        state,
        &UpdateContext {
            text_area: &TuiTextAreaEngine,
        },
    )
}

pub fn update_with_context(
    msg: Msg,
    mut state: AppState,
    ctx: &UpdateContext<'_>,
) -> (AppState, Vec<Cmd>) {
    match msg {
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        Msg::Nav(nav_msg) => {
            let mount_current = matches!(nav_msg, NavMsg::MountCurrent);
            let from = state.nav.current;
            let mut commands = state.nav.update(nav_msg);
            let to = state.nav.current;

            if from != to {
                commands.extend(leave_page(from, &mut state));
            }
            if from != to || mount_current {
                commands.extend(enter_page(to, &mut state));
            }
            if let Some(section) = state.nav.anchor.take() {
                state.home.focus_section(section);
            }
            (state, commands)
        }

        Msg::Home(home_msg) => {
            let commands = state.home.update(home_msg);
            (state, commands)
        }

        Msg::Projects(ProjectsMsg::OpenSelected) => {
            let links = state
                .projects
                .selected_project(&state.content.projects)
                .map(|project| {
                    format!(
                        "{}  live: {}  source: {}",
                        project.name, project.live_url, project.github_url
                    )
                });
            if let Some(links) = links {
                state.system.status_message = Some(links);
            }
            (state, vec![])
        }

        Msg::Projects(projects_msg) => {
            let content = state.content.clone();
            let commands = state.projects.update(projects_msg, &content.projects);
            (state, commands)
        }

        Msg::Contact(contact_msg) => {
            let commands = state.contact.update(contact_msg, ctx.text_area);
            (state, commands)
        }

        Msg::Resume(resume_msg) => {
            match &resume_msg {
                ResumeMsg::Download => {
                    state.system.status_message =
                        Some(format!("Downloading {}...", state.content.resume.download_name));
                }
                ResumeMsg::Downloaded(path) => {
                    state.system.status_message =
                        Some(format!("Resume saved to {}", path.display()));
                }
                ResumeMsg::DownloadFailed(error) => {
                    state.system.status_message =
                        Some(format!("Error: Resume download failed: {error}"));
                }
            }
            let content = state.content.clone();
            let commands = state.resume.update(resume_msg, &content.resume);
            (state, commands)
        }

        Msg::Timer(key) => {
            let commands = match key.id {
                TimerId::Typewriter | TimerId::ContentReveal => state.home.on_timer(key),
                TimerId::AckDismiss => state.contact.on_timer(key),
            };
            (state, commands)
        }
    }
}

/// Mount hook of `page`
fn enter_page(page: Page, state: &mut AppState) -> Vec<Cmd> {
    match page {
        Page::Home => state.home.mount(),
        Page::Projects => {
            state.projects.reset();
            vec![]
        }
        Page::About | Page::Resume | Page::Contact => vec![],
    }
}

/// Unmount hook of `page`: cancel its timers and drop its transient state
fn leave_page(page: Page, state: &mut AppState) -> Vec<Cmd> {
    match page {
        Page::Home => state.home.unmount(),
        Page::Projects => {
            state.projects.reset();
            vec![]
        }
        Page::Contact => state.contact.unmount(),
        Page::About | Page::Resume => vec![],
    }
}
