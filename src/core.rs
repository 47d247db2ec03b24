//! Core Elm Architecture implementation
//!
//! - `msg` / `raw_msg`: domain messages and the external events they come from
//! - `state`: the unified application state
//! - `update`: the pure transition function
//! - `cmd` / `cmd_executor`: side effects and their dispatch to services
//! - `timer`: slots and tokens shared by timer commands and their expiries

pub mod cmd;
pub mod cmd_executor;
pub mod msg;
pub mod raw_msg;
pub mod state;
pub mod textarea_engine;
pub mod timer;
pub mod translator;
pub mod update;
