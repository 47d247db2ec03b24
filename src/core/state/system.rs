use std::time::Duration;

use crate::core::{
    cmd::{Cmd, TuiCommand},
    msg::system::SystemMsg,
};

/// System-related state
#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    pub status_message: Option<String>,
    /// Time since startup as of the last tick; drives the cursor blink
    pub elapsed: Duration,
}

impl SystemState {
    pub fn status_message(&self) -> Option<&String> {
        self.status_message.as_ref()
    }

    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            SystemMsg::Suspend => {
                self.should_suspend = true;
                vec![]
            }

            SystemMsg::Resume => {
                self.should_suspend = false;
                vec![]
            }

            SystemMsg::Resize(width, height) => {
                vec![Cmd::Tui(TuiCommand::Resize { width, height })]
            }

            SystemMsg::Tick(elapsed) => {
                self.elapsed = elapsed;
                vec![]
            }

            SystemMsg::UpdateStatusMessage(message) => {
                self.status_message = Some(message);
                vec![]
            }

            SystemMsg::ClearStatusMessage => {
                self.status_message = None;
                vec![]
            }

            SystemMsg::ShowError(error) => {
                self.status_message = Some(format!("Error: {error}"));
                vec![Cmd::LogError { message: error }]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_system_state_quit_isolated() {
        let mut system = SystemState::default();
        assert!(!system.should_quit);
        let cmds = system.update(SystemMsg::Quit);
        assert!(system.should_quit);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_suspend_and_resume() {
        let mut system = SystemState::default();
        system.update(SystemMsg::Suspend);
        assert!(system.should_suspend);
        system.update(SystemMsg::Resume);
        assert!(!system.should_suspend);
    }

    #[test]
    fn test_resize_generates_tui_command() {
        let mut system = SystemState::default();
        let cmds = system.update(SystemMsg::Resize(120, 40));
        assert_eq!(
            cmds,
            vec![Cmd::Tui(TuiCommand::Resize {
                width: 120,
                height: 40
            })]
        );
    }

    #[test]
    fn test_tick_records_elapsed() {
        let mut system = SystemState::default();
        system.update(SystemMsg::Tick(Duration::from_millis(1500)));
        assert_eq!(system.elapsed, Duration::from_millis(1500));
    }

    #[test]
    fn test_status_messages() {
        let mut system = SystemState::default();
        system.update(SystemMsg::UpdateStatusMessage("hello".into()));
        assert_eq!(system.status_message(), Some(&"hello".to_string()));

        let cmds = system.update(SystemMsg::ShowError("boom".into()));
        assert_eq!(system.status_message(), Some(&"Error: boom".to_string()));
        assert_eq!(
            cmds,
            vec![Cmd::LogError {
                message: "boom".into()
            }]
        );

        system.update(SystemMsg::ClearStatusMessage);
        assert_eq!(system.status_message(), None);
    }
}
