//! # folio - a personal portfolio in the terminal
//!
//! Five pages (home, about, projects, resume, contact) rendered with ratatui
//! on top of an Elm-like architecture for predictable state management.
//!
//! ## Architecture Overview
//!
//! - **State** (`core::state`): the unified application state
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): pure functions that transform state
//! - **Command** (`core::cmd`): side effects (timers, mail, downloads, rendering)
//! - **View** (`presentation::components`): rendering from the current state
//!
//! ## Example Usage
//!
//! ```rust
//! use folio::core::{msg::{nav::NavMsg, Msg}, state::AppState, update::update};
//! use folio::domain::ui::Page;
//!
//! let state = AppState::default();
//! let (state, _cmds) = update(Msg::Nav(NavMsg::Select(Page::Projects)), state);
//! assert_eq!(state.current_page(), Page::Projects);
//! ```
//!
//! The typewriter on the home page and the contact form's mail relay are the
//! only asynchronous parts; both run as services and report back through
//! [`core::raw_msg::RawMsg`].

#![deny(warnings)]

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

pub use crate::core::{cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, update::update};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
