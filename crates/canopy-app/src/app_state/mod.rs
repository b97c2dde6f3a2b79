//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the host window and the view manager, and reacts to
//! the events the manager emits.

mod core;
mod event_handler;
mod host;
mod host_actions;
mod init;
mod keys;
mod polling;
mod shutdown;
mod title;
mod types;
mod view_events;

pub use core::CanopyApp;
