//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging menu and
//! panel state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=shell=debug,message=debug` - scoped filtering
//! - `RUST_LOG=dashboard_shell::update=trace` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `logs/dashboard-shell.log` under the state directory
//! (see `config_paths`) with daily rotation. File logging uses debug level
//! by default.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::menu::MenuId;
use crate::model::AppModel;
use crate::panel::{resize::sums_to_total, LayoutId, SIZE_TOLERANCE};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). File logging writes to
/// the logs directory with daily rotation and is skipped, with a warning on
/// stderr, when that directory cannot be created.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console goes to stderr so replay output on stdout stays clean
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "dashboard-shell.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    // A second init (tests, embedding hosts) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Lightweight snapshot of menu and layout state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct ShellSnapshot {
    pub open_menus: Vec<MenuId>,
    pub listening: bool,
    pub groups: Vec<GroupSnapshot>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupSnapshot {
    pub layout_id: LayoutId,
    pub sizes: Vec<f64>,
    pub bounds: Vec<(f64, f64)>,
    pub dragging: Option<usize>,
}

impl ShellSnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        Self {
            open_menus: model.menus.open_menus(),
            listening: model.watcher.is_listening(),
            groups: model
                .layouts
                .groups()
                .map(|group| GroupSnapshot {
                    layout_id: group.layout_id().clone(),
                    sizes: group.sizes(),
                    bounds: group
                        .panels()
                        .iter()
                        .map(|panel| (panel.min_size, panel.max_size))
                        .collect(),
                    dragging: group.active_handle(),
                })
                .collect(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &ShellSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.open_menus != other.open_menus {
            changes.push(format!(
                "open menus: {} → {}",
                join_ids(&self.open_menus),
                join_ids(&other.open_menus)
            ));
        }
        if self.listening != other.listening {
            let status = if other.listening {
                "attached"
            } else {
                "detached"
            };
            changes.push(format!("listener {}", status));
        }

        for (before, after) in self.groups.iter().zip(&other.groups) {
            if before.sizes != after.sizes {
                changes.push(format!(
                    "{}: {:?} → {:?}",
                    after.layout_id, before.sizes, after.sizes
                ));
            }
            if before.dragging != after.dragging {
                match after.dragging {
                    Some(handle) => changes.push(format!("{}: drag on #{}", after.layout_id, handle)),
                    None => changes.push(format!("{}: drag ended", after.layout_id)),
                }
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }

    /// Panic with context if any group left the size invariants
    pub fn assert_invariants(&self, context: &str) {
        for group in &self.groups {
            assert!(
                sums_to_total(&group.sizes),
                "[{}] {} sizes {:?} do not add up to 100",
                context,
                group.layout_id,
                group.sizes
            );
            for (size, (min, max)) in group.sizes.iter().zip(&group.bounds) {
                assert!(
                    *size >= min - SIZE_TOLERANCE && *size <= max + SIZE_TOLERANCE,
                    "[{}] {} size {} outside [{}, {}]",
                    context,
                    group.layout_id,
                    size,
                    min,
                    max
                );
            }
        }
        assert_eq!(
            self.listening,
            !self.open_menus.is_empty(),
            "[{}] listener state out of step with open menus",
            context
        );
    }
}

fn join_ids(ids: &[MenuId]) -> String {
    if ids.is_empty() {
        return "none".to_string();
    }
    ids.iter()
        .map(MenuId::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShellConfig;
    use crate::persistence::MemoryLayoutStore;

    #[test]
    fn test_diff_reports_menu_and_listener() {
        let mut model =
            AppModel::new(&ShellConfig::default(), &MemoryLayoutStore::new()).unwrap();
        let before = ShellSnapshot::from_model(&model);

        model.menus.toggle(&MenuId::from("tools")).unwrap();
        model.watcher.sync(&model.menus);
        let after = ShellSnapshot::from_model(&model);

        assert_eq!(
            before.diff(&after).as_deref(),
            Some("open menus: none → tools; listener attached")
        );
        assert_eq!(after.diff(&after), None);
    }
}
