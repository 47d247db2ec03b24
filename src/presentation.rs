//! Presentation layer
//!
//! This module contains UI components and widgets:
//! - Page components (stateless, rendered from `AppState`)
//! - Reusable widgets
//! - Configuration (styles, keybindings)

pub mod components;
pub mod config;
pub mod widgets;
