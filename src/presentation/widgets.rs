//! Reusable widgets
//!
//! Small ratatui widgets composed by the page components.

pub mod form_field;
pub mod project_card;
pub mod tab_bar;
pub mod typewriter;

pub use form_field::FormFieldWidget;
pub use project_card::ProjectCardWidget;
pub use tab_bar::TabBarWidget;
pub use typewriter::TypewriterWidget;
