//! Tests for the assistance settings store

mod common;

use common::{menu, test_model};
use dashboard_shell::messages::{Msg, SettingsMsg};
use dashboard_shell::settings::AssistanceLevel;
use dashboard_shell::update::update;

#[test]
fn test_each_setter_changes_only_its_field() {
    let mut model = test_model();
    let defaults = model.settings.clone();

    update(&mut model, Msg::Settings(SettingsMsg::SetSuggestions(false)));
    assert!(!model.settings.suggestions);
    assert_eq!(model.settings.auto_completion, defaults.auto_completion);
    assert_eq!(model.settings.proactive_alerts, defaults.proactive_alerts);
    assert_eq!(model.settings.assistance_level, defaults.assistance_level);

    update(&mut model, Msg::Settings(SettingsMsg::SetAutoCompletion(false)));
    assert!(!model.settings.auto_completion);

    update(&mut model, Msg::Settings(SettingsMsg::SetProactiveAlerts(true)));
    assert!(model.settings.proactive_alerts);
}

#[test]
fn test_all_levels_selectable() {
    let mut model = test_model();
    for level in AssistanceLevel::ALL {
        update(
            &mut model,
            Msg::Settings(SettingsMsg::SetAssistanceLevel(level)),
        );
        assert_eq!(model.settings.assistance_level, level);
    }
}

#[test]
fn test_settings_survive_menu_close() {
    let mut model = test_model();
    update(&mut model, Msg::toggle("tools"));
    update(
        &mut model,
        Msg::Settings(SettingsMsg::SetAssistanceLevel(AssistanceLevel::Minimal)),
    );
    update(&mut model, Msg::pointer_down(900.0, 900.0));

    assert_eq!(model.menus.is_open(&menu("tools")), Ok(false));
    assert_eq!(model.settings.assistance_level, AssistanceLevel::Minimal);
}
