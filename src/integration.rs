//! Integration layer
//!
//! Glue between the pure core and the outside world:
//! - Runtime: message queues, update cycle, command execution
//! - AppRunner: the main loop over terminal and service events
//! - Renderer and render/resize coalescing

pub mod app_runner;
pub mod coalescer;
pub mod renderer;
pub mod runtime;
