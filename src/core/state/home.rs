use std::time::Duration;

use crate::{
    core::{
        cmd::Cmd,
        msg::home::HomeMsg,
        timer::{TimerId, TimerKey},
    },
    domain::{
        blink::Blink,
        filter::DEFAULT_SKILL_CATEGORY,
        typewriter::{Activation, Step, Typewriter, TypewriterParams},
        ui::Section,
    },
};

/// Active tab of the skills panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillsPanel {
    categories: Vec<String>,
    active: String,
}

impl SkillsPanel {
    pub fn new(categories: Vec<String>) -> Self {
        let active = Self::default_label(&categories);
        Self { categories, active }
    }

    fn default_label(categories: &[String]) -> String {
        if categories.iter().any(|c| c == DEFAULT_SKILL_CATEGORY) || categories.is_empty() {
            DEFAULT_SKILL_CATEGORY.to_string()
        } else {
            categories[0].clone()
        }
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn active_index(&self) -> Option<usize> {
        self.categories.iter().position(|c| *c == self.active)
    }

    /// Make `label` active. Unknown labels are rejected.
    pub fn select(&mut self, label: &str) -> bool {
        if self.categories.iter().any(|c| c == label) {
            self.active = label.to_string();
            true
        } else {
            false
        }
    }

    pub fn next(&mut self) {
        if self.categories.is_empty() {
            return;
        }
        let idx = self.active_index().map_or(0, |i| (i + 1) % self.categories.len());
        self.active = self.categories[idx].clone();
    }

    pub fn prev(&mut self) {
        if self.categories.is_empty() {
            return;
        }
        let len = self.categories.len();
        let idx = self.active_index().map_or(0, |i| (i + len - 1) % len);
        self.active = self.categories[idx].clone();
    }

    pub fn reset(&mut self) {
        self.active = Self::default_label(&self.categories);
    }
}

/// Home page state: the typewriter greeting, the staged reveal that follows
/// it, and the lower panels.
#[derive(Debug, Clone)]
pub struct HomeState {
    pub typewriter: Typewriter,
    /// Secondary content (bio, links) is visible
    pub show_content: bool,
    /// Delay between typewriter completion and `show_content`
    pub reveal_delay: Duration,
    pub blink: Blink,
    pub skills: SkillsPanel,
    pub section: Section,
}

impl Default for HomeState {
    fn default() -> Self {
        Self {
            typewriter: Typewriter::default(),
            show_content: false,
            reveal_delay: Duration::from_millis(300),
            blink: Blink::default(),
            skills: SkillsPanel::default(),
            section: Section::default(),
        }
    }
}

impl HomeState {
    pub fn new(
        params: TypewriterParams,
        reveal_delay: Duration,
        blink: Blink,
        categories: Vec<String>,
    ) -> Self {
        Self {
            typewriter: Typewriter::new(params),
            reveal_delay,
            blink,
            skills: SkillsPanel::new(categories),
            ..Default::default()
        }
    }

    pub fn update(&mut self, msg: HomeMsg) -> Vec<Cmd> {
        match msg {
            HomeMsg::NextCategory => {
                self.skills.next();
                vec![]
            }
            HomeMsg::PrevCategory => {
                self.skills.prev();
                vec![]
            }
            HomeMsg::SelectCategory(label) => {
                if self.skills.select(&label) {
                    vec![]
                } else {
                    vec![Cmd::LogError {
                        message: format!("Unknown skill category: {label}"),
                    }]
                }
            }
            HomeMsg::NextSection => {
                self.section = self.section.next();
                vec![]
            }
            HomeMsg::PrevSection => {
                self.section = self.section.prev();
                vec![]
            }
            HomeMsg::Reconfigure(params) => match self.typewriter.reconfigure(params) {
                Some(step) => {
                    self.show_content = false;
                    let mut cmds = vec![Cmd::CancelTimer {
                        id: TimerId::ContentReveal,
                    }];
                    cmds.extend(self.commands_for(step));
                    cmds
                }
                None => vec![],
            },
        }
    }

    /// The page became visible: start a fresh activation.
    pub fn mount(&mut self) -> Vec<Cmd> {
        self.show_content = false;
        let step = self.typewriter.start();
        let mut cmds = vec![Cmd::CancelTimer {
            id: TimerId::ContentReveal,
        }];
        cmds.extend(self.commands_for(step));
        cmds
    }

    /// The page was left: drop the activation and everything pending on it.
    pub fn unmount(&mut self) -> Vec<Cmd> {
        self.typewriter.stop();
        self.show_content = false;
        self.skills.reset();
        self.section = Section::default();
        vec![
            Cmd::CancelTimer {
                id: TimerId::Typewriter,
            },
            Cmd::CancelTimer {
                id: TimerId::ContentReveal,
            },
        ]
    }

    pub fn focus_section(&mut self, section: Section) {
        self.section = section;
    }

    pub fn on_timer(&mut self, key: TimerKey) -> Vec<Cmd> {
        match key.id {
            TimerId::Typewriter => {
                let step = self.typewriter.advance(Activation::new(key.token));
                self.commands_for(step)
            }
            TimerId::ContentReveal => {
                if key.token == self.typewriter.activation().id()
                    && self.typewriter.is_complete()
                {
                    self.show_content = true;
                }
                vec![]
            }
            TimerId::AckDismiss => vec![],
        }
    }

    pub fn cursor_visible(&self, elapsed: Duration) -> bool {
        self.blink.is_visible(elapsed)
    }

    fn commands_for(&self, step: Step) -> Vec<Cmd> {
        match step {
            Step::Schedule { activation, after } => {
                vec![Cmd::schedule(TimerId::Typewriter, activation.id(), after)]
            }
            Step::Completed { activation } => vec![Cmd::schedule(
                TimerId::ContentReveal,
                activation.id(),
                self.reveal_delay,
            )],
            Step::Ignored => vec![],
        }
    }
}
