//! Dashboard shell - Elm-style interaction core
//!
//! This crate provides the state and logic behind a dashboard's header menus
//! and resizable panel layout: independent dropdown menus with outside-click
//! dismissal, and panel groups whose sizes stay within bounds, add up to 100
//! and survive a reload.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod error;
pub mod geometry;
pub mod menu;
pub mod messages;
pub mod model;
pub mod panel;
pub mod persistence;
pub mod pointer;
pub mod runtime;
pub mod script;
pub mod settings;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::ShellConfig;
pub use error::{LayoutRejection, ShellError};
pub use messages::Msg;
pub use model::AppModel;
pub use runtime::Shell;
