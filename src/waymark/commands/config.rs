use crate::commands::{CmdMessage, CmdResult, WaymarkPaths};
use crate::config::WaymarkConfig;
use crate::error::Result;
use crate::model::Scope;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &WaymarkPaths, scope: Scope, action: ConfigAction) -> Result<CmdResult> {
    let dir = paths.scope_dir(scope)?;
    match action {
        ConfigAction::ShowAll => {
            let config = WaymarkConfig::load(&dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = WaymarkConfig::load(&dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(value) => result.add_message(CmdMessage::info(value)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = WaymarkConfig::load(&dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut result = CmdResult::default();
                result.add_message(CmdMessage::error(e));
                return Ok(result);
            }
            config.save(&dir)?;
            let display_value = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_value
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    fn temp_paths(dir: &std::path::Path) -> WaymarkPaths {
        WaymarkPaths {
            project: Some(dir.join(".waymark")),
            global: dir.join("global"),
        }
    }

    #[test]
    fn show_all_returns_defaults_without_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(&temp_paths(dir.path()), Scope::Project, ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(WaymarkConfig::default()));
    }

    #[test]
    fn set_persists_and_show_key_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let paths = temp_paths(dir.path());

        let result = run(
            &paths,
            Scope::Project,
            ConfigAction::Set("title-prefix".into(), "Ops Console".into()),
        )
        .unwrap();
        assert!(matches!(result.messages[0].level, MessageLevel::Success));

        let result = run(
            &paths,
            Scope::Project,
            ConfigAction::ShowKey("title-prefix".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].content, "Ops Console");
    }

    #[test]
    fn unknown_key_is_an_error_message_not_a_failure() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(
            &temp_paths(dir.path()),
            Scope::Project,
            ConfigAction::Set("bogus".into(), "x".into()),
        )
        .unwrap();
        assert!(matches!(result.messages[0].level, MessageLevel::Error));
    }
}
