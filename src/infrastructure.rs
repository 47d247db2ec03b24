//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - TUI foundation
//! - CLI argument processing and layered configuration
//! - Timer, mail relay and resume download services

pub mod cli;
pub mod config;
pub mod mail;
pub mod mail_service;
pub mod resume;
pub mod timer_service;
pub mod tui;
