use crate::{
    core::{cmd::Cmd, msg::nav::NavMsg},
    domain::ui::{Page, Section, NAV_ENTRIES},
};

/// Which page is shown. Page lifecycle (mount/unmount hooks) is driven by
/// the top-level update, which compares the page before and after.
#[derive(Debug, Clone, Default)]
pub struct NavState {
    pub current: Page,
    /// Home panel requested by the last navigation, consumed by update
    pub anchor: Option<Section>,
}

impl NavState {
    pub fn new(current: Page) -> Self {
        Self {
            current,
            anchor: None,
        }
    }

    pub fn update(&mut self, msg: NavMsg) -> Vec<Cmd> {
        match msg {
            NavMsg::Select(page) => {
                self.current = page;
                self.anchor = None;
                vec![]
            }
            NavMsg::SelectEntry(index) => match NAV_ENTRIES.get(index) {
                Some(entry) => {
                    self.current = entry.page;
                    self.anchor = entry.section;
                    vec![]
                }
                None => vec![Cmd::LogError {
                    message: format!("No navigation entry at index {index}"),
                }],
            },
            NavMsg::Next => {
                self.current = self.current.next();
                self.anchor = None;
                vec![]
            }
            NavMsg::Prev => {
                self.current = self.current.prev();
                self.anchor = None;
                vec![]
            }
            NavMsg::MountCurrent => vec![],
        }
    }
}
