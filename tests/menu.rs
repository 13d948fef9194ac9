//! Tests for header menus: independent open state per trigger

mod common;

use common::{menu, test_model};
use dashboard_shell::error::ShellError;
use dashboard_shell::geometry::{Point, Rect};
use dashboard_shell::menu::{MenuController, MenuSpec};
use dashboard_shell::messages::{MenuMsg, Msg};
use dashboard_shell::update::update;

// ============================================================================
// Toggle semantics
// ============================================================================

#[test]
fn test_menus_start_closed() {
    let model = test_model();
    assert_eq!(model.menus.is_open(&menu("tools")), Ok(false));
    assert_eq!(model.menus.is_open(&menu("balance")), Ok(false));
    assert_eq!(model.menus.content_region(&menu("tools")), Ok(None));
}

#[test]
fn test_toggle_flips_only_its_menu() {
    let mut model = test_model();

    update(&mut model, Msg::toggle("tools"));
    assert_eq!(model.menus.is_open(&menu("tools")), Ok(true));
    assert_eq!(model.menus.is_open(&menu("balance")), Ok(false));

    update(&mut model, Msg::toggle("balance"));
    assert_eq!(model.menus.open_menus(), vec![menu("tools"), menu("balance")]);

    update(&mut model, Msg::toggle("tools"));
    assert_eq!(model.menus.open_menus(), vec![menu("balance")]);
}

#[test]
fn test_toggle_parity() {
    let mut model = test_model();
    for n in 1..=7 {
        update(&mut model, Msg::toggle("tools"));
        assert_eq!(model.menus.is_open(&menu("tools")), Ok(n % 2 == 1));
    }
}

#[test]
fn test_open_region_present_only_while_open() {
    let mut model = test_model();
    update(&mut model, Msg::Menu(MenuMsg::Open(menu("tools"))));
    assert_eq!(
        model.menus.content_region(&menu("tools")),
        Ok(Some(Rect::new(0.0, 40.0, 200.0, 100.0)))
    );

    update(&mut model, Msg::Menu(MenuMsg::Close(menu("tools"))));
    assert_eq!(model.menus.content_region(&menu("tools")), Ok(None));
}

// ============================================================================
// Unknown ids and registration
// ============================================================================

#[test]
fn test_unknown_id_is_noop_with_error() {
    let mut model = test_model();
    let before = model.menus.open_menus();

    update(&mut model, Msg::toggle("settings"));

    assert_eq!(model.menus.open_menus(), before);
    assert_eq!(model.ui.last_error.as_deref(), Some("unknown menu: settings"));
    assert!(!model.watcher.is_listening());
}

#[test]
fn test_controller_rejects_duplicate_trigger() {
    let spec = MenuSpec::new("tools", Rect::default(), Rect::default());
    let result = MenuController::with_menus(&[spec.clone(), spec]);
    assert_eq!(result.err(), Some(ShellError::DuplicateMenu(menu("tools"))));
}

#[test]
fn test_register_after_mount() {
    let mut model = test_model();
    let spec = MenuSpec::new(
        "ai-assistant",
        Rect::new(100.0, 0.0, 40.0, 40.0),
        Rect::new(100.0, 40.0, 150.0, 80.0),
    );
    update(&mut model, Msg::Menu(MenuMsg::Register(spec)));
    update(&mut model, Msg::toggle("ai-assistant"));

    assert_eq!(model.menus.is_open(&menu("ai-assistant")), Ok(true));
    assert_eq!(model.menus.len(), 3);
}

#[test]
fn test_set_regions_moves_hit_area() {
    let mut model = test_model();
    update(&mut model, Msg::toggle("tools"));
    update(
        &mut model,
        Msg::Menu(MenuMsg::SetRegions {
            id: menu("tools"),
            trigger: Rect::new(600.0, 0.0, 40.0, 40.0),
            content: Rect::new(600.0, 40.0, 100.0, 100.0),
        }),
    );

    assert_eq!(
        model.menus.region_contains(&menu("tools"), Point::new(650.0, 60.0)),
        Ok(true)
    );
    assert_eq!(
        model.menus.region_contains(&menu("tools"), Point::new(10.0, 60.0)),
        Ok(false)
    );
}
