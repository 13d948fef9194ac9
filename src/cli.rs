//! Command-line argument parsing for the replay tool
//!
//! Supports:
//! - An explicit config file, or the one in the config directory
//! - A state directory for layout records, or an in-memory store

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::ShellConfig;
use crate::persistence::{FileLayoutStore, LayoutStore, MemoryLayoutStore};

/// Replay pointer and menu events against a headless dashboard shell
#[derive(Parser, Debug)]
#[command(
    name = "dashboard-shell",
    version,
    about = "Replay interaction scripts against the dashboard shell"
)]
pub struct CliArgs {
    /// Shell config (defaults to the config directory, then built-ins)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding persisted layouts
    #[arg(long, value_name = "DIR", conflicts_with = "in_memory")]
    pub state_dir: Option<PathBuf>,

    /// Keep layouts in memory only
    #[arg(long)]
    pub in_memory: bool,

    /// YAML script of messages to replay
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,
}

impl CliArgs {
    pub fn load_config(&self) -> Result<ShellConfig, String> {
        match &self.config {
            Some(path) => ShellConfig::load_from(path),
            None => Ok(ShellConfig::load()),
        }
    }

    /// The store selected by the flags
    pub fn layout_store(&self) -> Result<Arc<dyn LayoutStore>, String> {
        if self.in_memory {
            return Ok(Arc::new(MemoryLayoutStore::new()));
        }
        let store = match &self.state_dir {
            Some(dir) => FileLayoutStore::new(dir.join("layouts")),
            None => FileLayoutStore::in_state_dir().ok_or_else(|| {
                "No state directory available; use --state-dir or --in-memory".to_string()
            })?,
        };
        tracing::debug!("layouts stored in {}", store.dir().display());
        Ok(Arc::new(store))
    }
}
