//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::sync::Arc;

use dashboard_shell::config::ShellConfig;
use dashboard_shell::geometry::{Direction, Rect};
use dashboard_shell::menu::{MenuId, MenuSpec};
use dashboard_shell::model::AppModel;
use dashboard_shell::panel::{GroupSpec, LayoutId, PanelSpec};
use dashboard_shell::persistence::MemoryLayoutStore;
use dashboard_shell::pointer::CountingHost;
use dashboard_shell::runtime::Shell;

pub const DASHBOARD: &str = "dashboard";
pub const DASHBOARD_KEY: &str = "dashboard-layout";

/// Two menus side by side in the header, each with content dropping below
/// its trigger:
///
/// - `tools`: trigger (0,0) 40x40, content (0,40) 200x100
/// - `balance`: trigger (300,0) 40x40, content (300,40) 200x100
pub fn two_menus() -> Vec<MenuSpec> {
    vec![
        MenuSpec::new(
            "tools",
            Rect::new(0.0, 0.0, 40.0, 40.0),
            Rect::new(0.0, 40.0, 200.0, 100.0),
        ),
        MenuSpec::new(
            "balance",
            Rect::new(300.0, 0.0, 40.0, 40.0),
            Rect::new(300.0, 40.0, 200.0, 100.0),
        ),
    ]
}

/// Three-panel horizontal group 1000px wide, so 10px is exactly 1%
pub fn dashboard_group() -> GroupSpec {
    GroupSpec::new(
        DASHBOARD,
        Direction::Horizontal,
        vec![
            PanelSpec::new("sidebar", 15.0, 30.0, 20.0),
            PanelSpec::new("main", 40.0, 70.0, 60.0),
            PanelSpec::new("inspector", 10.0, 30.0, 20.0),
        ],
    )
    .with_persistence_key(DASHBOARD_KEY)
    .with_bounds(Rect::new(0.0, 100.0, 1000.0, 600.0))
}

pub fn test_config() -> ShellConfig {
    ShellConfig {
        menus: two_menus(),
        groups: vec![dashboard_group()],
        ..ShellConfig::default()
    }
}

pub fn test_model() -> AppModel {
    AppModel::new(&test_config(), &MemoryLayoutStore::new()).expect("test config is valid")
}

pub fn test_model_with_store(store: &MemoryLayoutStore) -> AppModel {
    AppModel::new(&test_config(), store).expect("test config is valid")
}

pub fn mount<'a>(
    store: &Arc<MemoryLayoutStore>,
    host: &'a mut CountingHost,
) -> Shell<&'a mut CountingHost> {
    Shell::mount(&test_config(), store.clone(), host).expect("test config is valid")
}

pub fn menu(id: &str) -> MenuId {
    MenuId::from(id)
}

pub fn dashboard() -> LayoutId {
    LayoutId::from(DASHBOARD)
}

/// Assert sizes match within float tolerance
pub fn assert_sizes(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "{:?} vs {:?}", actual, expected);
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < 1e-9, "{:?} vs {:?}", actual, expected);
    }
}
