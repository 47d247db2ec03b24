//! Domain layer
//!
//! Plain data and pure logic that the rest of the application is built on:
//! - Portfolio content (profile, projects, skills, resume document)
//! - The typewriter animator and cursor blink
//! - Skill category and project filter selection
//! - Contact form payloads and mail outcomes

pub mod blink;
pub mod contact;
pub mod content;
pub mod filter;
pub mod text;
pub mod typewriter;
pub mod ui;
