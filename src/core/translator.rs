use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        msg::{
            contact::ContactMsg, home::HomeMsg, nav::NavMsg, projects::ProjectsMsg,
            resume::ResumeMsg, system::SystemMsg, Msg,
        },
        raw_msg::RawMsg,
        state::AppState,
    },
    domain::ui::Page,
    presentation::config::keybindings::Action,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],
        RawMsg::Tick(elapsed) => vec![Msg::System(SystemMsg::Tick(elapsed))],

        // User input - translate based on context and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Paste(text) => translate_paste(text, state),

        // Service events
        RawMsg::TimerFired(key) => vec![Msg::Timer(key)],
        RawMsg::MailCompleted {
            submission,
            outcome,
        } => vec![Msg::Contact(ContactMsg::MailCompleted {
            submission,
            outcome,
        })],
        RawMsg::ResumeDownloaded(Ok(path)) => vec![Msg::Resume(ResumeMsg::Downloaded(path))],
        RawMsg::ResumeDownloaded(Err(error)) => {
            vec![Msg::Resume(ResumeMsg::DownloadFailed(error))]
        }

        RawMsg::SystemMessage(msg) => vec![Msg::System(SystemMsg::UpdateStatusMessage(msg))],
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Rendering is orchestrated by AppRunner
        RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    // A blocking notice swallows everything but its dismiss keys
    if state.has_modal() {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc => vec![Msg::Contact(ContactMsg::DismissNotice)],
            _ => vec![],
        };
    }

    if state.is_editing() {
        translate_editing_keys(key, state)
    } else {
        translate_normal_mode_keys(key, state)
    }
}

/// Key bindings while a contact field is being edited
fn translate_editing_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    match key {
        KeyEvent {
            code: KeyCode::Esc, ..
        } => vec![Msg::Contact(ContactMsg::StopEditing)],

        KeyEvent {
            code: KeyCode::Tab, ..
        } => vec![Msg::Contact(ContactMsg::FocusNext)],

        KeyEvent {
            code: KeyCode::BackTab,
            ..
        } => vec![Msg::Contact(ContactMsg::FocusPrev)],

        KeyEvent {
            code: KeyCode::Char('s'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => vec![Msg::Contact(ContactMsg::Submit)],

        // Enter moves on from single-line fields; the message field takes newlines
        KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            ..
        } if !state.contact.focus.is_multiline() => vec![Msg::Contact(ContactMsg::FocusNext)],

        // Everything else goes to the text engine
        _ => vec![Msg::Contact(ContactMsg::Input(key))],
    }
}

/// Key bindings when in normal navigation mode
fn translate_normal_mode_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    match state.config.config.keybindings.action_for(key) {
        Some(action) => translate_action_to_msg(action, state),
        None => vec![],
    }
}

fn translate_action_to_msg(action: Action, state: &AppState) -> Vec<Msg> {
    let page = state.current_page();
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],

        Action::NextPage => vec![Msg::Nav(NavMsg::Next)],
        Action::PrevPage => vec![Msg::Nav(NavMsg::Prev)],
        Action::GoHome => vec![Msg::Nav(NavMsg::SelectEntry(0))],
        Action::GoAbout => vec![Msg::Nav(NavMsg::SelectEntry(1))],
        Action::GoExperience => vec![Msg::Nav(NavMsg::SelectEntry(2))],
        Action::GoProjects => vec![Msg::Nav(NavMsg::SelectEntry(3))],
        Action::GoResume => vec![Msg::Nav(NavMsg::SelectEntry(4))],
        Action::GoContact => vec![Msg::Nav(NavMsg::SelectEntry(5))],

        Action::Next => match page {
            Page::Home => vec![Msg::Home(HomeMsg::NextCategory)],
            Page::Projects => vec![Msg::Projects(ProjectsMsg::NextFilter)],
            Page::Contact => vec![Msg::Contact(ContactMsg::FocusNext)],
            Page::About | Page::Resume => vec![],
        },
        Action::Prev => match page {
            Page::Home => vec![Msg::Home(HomeMsg::PrevCategory)],
            Page::Projects => vec![Msg::Projects(ProjectsMsg::PrevFilter)],
            Page::Contact => vec![Msg::Contact(ContactMsg::FocusPrev)],
            Page::About | Page::Resume => vec![],
        },
        Action::Down => match page {
            Page::Home => vec![Msg::Home(HomeMsg::NextSection)],
            Page::Projects => vec![Msg::Projects(ProjectsMsg::SelectNext)],
            Page::Contact => vec![Msg::Contact(ContactMsg::FocusNext)],
            Page::About | Page::Resume => vec![],
        },
        Action::Up => match page {
            Page::Home => vec![Msg::Home(HomeMsg::PrevSection)],
            Page::Projects => vec![Msg::Projects(ProjectsMsg::SelectPrev)],
            Page::Contact => vec![Msg::Contact(ContactMsg::FocusPrev)],
            Page::About | Page::Resume => vec![],
        },
        Action::Activate => match page {
            Page::Projects => vec![Msg::Projects(ProjectsMsg::OpenSelected)],
            Page::Resume => vec![Msg::Resume(ResumeMsg::Download)],
            Page::Contact => vec![Msg::Contact(ContactMsg::StartEditing)],
            Page::Home | Page::About => vec![],
        },
        Action::Unselect => match page {
            Page::Projects if state.projects.selected.is_some() => {
                vec![Msg::Projects(ProjectsMsg::ClearSelection)]
            }
            _ => vec![Msg::System(SystemMsg::ClearStatusMessage)],
        },

        Action::Edit => match page {
            Page::Contact => vec![Msg::Contact(ContactMsg::StartEditing)],
            _ => vec![],
        },
        Action::Submit => match page {
            Page::Contact => vec![Msg::Contact(ContactMsg::Submit)],
            _ => vec![],
        },

        Action::Download => vec![Msg::Resume(ResumeMsg::Download)],
    }
}

/// Pasted text goes to the focused field while editing
fn translate_paste(text: String, state: &AppState) -> Vec<Msg> {
    if !state.is_editing() || state.has_modal() {
        return vec![];
    }
    vec![Msg::Contact(ContactMsg::Paste(text))]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::timer::{TimerId, TimerKey},
        domain::contact::{Field, Notice},
        infrastructure::config::Config,
    };
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn create_test_state(page: Page) -> AppState {
        AppState::new_with_config(Config::embedded().expect("embedded config"))
            .with_start_page(page)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let mut state = create_test_state(Page::Contact);
        state.contact.editing = true;
        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(ctrl('c')), &state),
            vec![Msg::System(SystemMsg::Quit)]
        );
    }

    #[rstest]
    #[case(Page::Home, KeyCode::Char('l'), Msg::Home(HomeMsg::NextCategory))]
    #[case(Page::Home, KeyCode::Char('j'), Msg::Home(HomeMsg::NextSection))]
    #[case(Page::Projects, KeyCode::Right, Msg::Projects(ProjectsMsg::NextFilter))]
    #[case(Page::Projects, KeyCode::Char('k'), Msg::Projects(ProjectsMsg::SelectPrev))]
    #[case(Page::Projects, KeyCode::Enter, Msg::Projects(ProjectsMsg::OpenSelected))]
    #[case(Page::Resume, KeyCode::Enter, Msg::Resume(ResumeMsg::Download))]
    #[case(Page::Contact, KeyCode::Enter, Msg::Contact(ContactMsg::StartEditing))]
    #[case(Page::About, KeyCode::Char('3'), Msg::Nav(NavMsg::SelectEntry(2)))]
    #[case(Page::About, KeyCode::Tab, Msg::Nav(NavMsg::Next))]
    #[case(Page::Home, KeyCode::Char('q'), Msg::System(SystemMsg::Quit))]
    fn test_normal_mode_keys(#[case] page: Page, #[case] code: KeyCode, #[case] expected: Msg) {
        let state = create_test_state(page);
        assert_eq!(translate_raw_to_domain(RawMsg::Key(key(code)), &state), vec![expected]);
    }

    #[test]
    fn test_editing_mode_routes_keys_to_form() {
        let mut state = create_test_state(Page::Contact);
        state.contact.editing = true;

        let typed = key(KeyCode::Char('q'));
        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(typed), &state),
            vec![Msg::Contact(ContactMsg::Input(typed))]
        );
        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(key(KeyCode::Esc)), &state),
            vec![Msg::Contact(ContactMsg::StopEditing)]
        );
        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(ctrl('s')), &state),
            vec![Msg::Contact(ContactMsg::Submit)]
        );
        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(key(KeyCode::Enter)), &state),
            vec![Msg::Contact(ContactMsg::FocusNext)]
        );

        state.contact.focus = Field::Message;
        let enter = key(KeyCode::Enter);
        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(enter), &state),
            vec![Msg::Contact(ContactMsg::Input(enter))]
        );
    }

    #[test]
    fn test_notice_is_modal() {
        let mut state = create_test_state(Page::Contact);
        state.contact.notice = Some(Notice::error("Invalid email"));

        assert!(translate_raw_to_domain(RawMsg::Key(key(KeyCode::Char('q'))), &state).is_empty());
        assert!(translate_raw_to_domain(RawMsg::Key(key(KeyCode::Tab)), &state).is_empty());
        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(key(KeyCode::Enter)), &state),
            vec![Msg::Contact(ContactMsg::DismissNotice)]
        );
    }

    #[test]
    fn test_paste_reaches_form_only_while_editing() {
        let mut state = create_test_state(Page::Contact);
        assert!(translate_raw_to_domain(RawMsg::Paste("x".into()), &state).is_empty());

        state.contact.editing = true;
        assert_eq!(
            translate_raw_to_domain(RawMsg::Paste("x.com".into()), &state),
            vec![Msg::Contact(ContactMsg::Paste("x.com".into()))]
        );

        state.contact.notice = Some(Notice::error("Invalid email"));
        assert!(translate_raw_to_domain(RawMsg::Paste("x".into()), &state).is_empty());
    }

    #[test]
    fn test_service_events() {
        let state = create_test_state(Page::Home);
        let timer = TimerKey::new(TimerId::Typewriter, 7);
        assert_eq!(
            translate_raw_to_domain(RawMsg::TimerFired(timer), &state),
            vec![Msg::Timer(timer)]
        );
        assert_eq!(
            translate_raw_to_domain(RawMsg::ResumeDownloaded(Err("gone".into())), &state),
            vec![Msg::Resume(ResumeMsg::DownloadFailed("gone".into()))]
        );
        assert!(translate_raw_to_domain(RawMsg::Render, &state).is_empty());
    }
}
