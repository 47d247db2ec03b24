use serde::{Deserialize, Serialize};

pub mod contact;
pub mod home;
pub mod nav;
pub mod projects;
pub mod resume;
pub mod system;

use contact::ContactMsg;
use home::HomeMsg;
use nav::NavMsg;
use projects::ProjectsMsg;
use resume::ResumeMsg;
use system::SystemMsg;

use crate::core::timer::TimerKey;

/// Domain messages representing application intent
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Page switching (delegated to NavState, with page lifecycle in update)
    Nav(NavMsg),

    // Page-specific operations
    Home(HomeMsg),
    Projects(ProjectsMsg),
    Contact(ContactMsg),
    Resume(ResumeMsg),

    // A timer scheduled through Cmd::ScheduleTimer elapsed
    Timer(TimerKey),
}

impl Msg {
    /// Determine if this is a frequent message during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::System(system_msg) => system_msg.is_frequent(),
            Msg::Timer(_) => true,
            _ => false,
        }
    }
}
