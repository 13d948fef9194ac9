//! Assistance settings handlers

use crate::commands::Cmd;
use crate::messages::SettingsMsg;
use crate::model::AppModel;

/// Handle settings messages
pub fn update_settings(model: &mut AppModel, msg: SettingsMsg) -> Option<Cmd> {
    let settings = &mut model.settings;
    match msg {
        SettingsMsg::SetSuggestions(enabled) => settings.set_suggestions(enabled),
        SettingsMsg::SetAutoCompletion(enabled) => settings.set_auto_completion(enabled),
        SettingsMsg::SetProactiveAlerts(enabled) => settings.set_proactive_alerts(enabled),
        SettingsMsg::SetAssistanceLevel(level) => {
            tracing::debug!(level = level.name(), "assistance level changed");
            settings.set_assistance_level(level)
        }
    }
    Some(Cmd::Redraw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShellConfig;
    use crate::persistence::MemoryLayoutStore;
    use crate::settings::AssistanceLevel;

    #[test]
    fn test_settings_do_not_touch_menus() {
        let mut model =
            AppModel::new(&ShellConfig::default(), &MemoryLayoutStore::new()).unwrap();

        update_settings(&mut model, SettingsMsg::SetProactiveAlerts(true));
        update_settings(
            &mut model,
            SettingsMsg::SetAssistanceLevel(AssistanceLevel::Minimal),
        );

        assert!(model.settings.proactive_alerts);
        assert_eq!(model.settings.assistance_level, AssistanceLevel::Minimal);
        assert!(!model.menus.any_open());
    }
}
