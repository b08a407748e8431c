use crate::commands::{CmdMessage, CmdResult};
use crate::config::Thresholds;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
    Reset,
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = Thresholds::load(config_dir).unwrap_or_default();
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = Thresholds::load(config_dir).unwrap_or_default();
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => {
                    result.add_message(CmdMessage::info(val.to_string()));
                    Ok(result)
                }
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)));
                    Ok(result)
                }
            }
        }
        ConfigAction::Set(key, value) => {
            let mut result = CmdResult::default();
            let parsed: u32 = match value.parse() {
                Ok(v) => v,
                Err(_) => {
                    result.add_message(CmdMessage::error(format!(
                        "Invalid value for {}: {} (expected a non-negative integer)",
                        key, value
                    )));
                    return Ok(result);
                }
            };

            let mut config = Thresholds::load(config_dir).unwrap_or_default();
            if let Err(e) = config.set(&key, parsed) {
                result.add_message(CmdMessage::error(e));
                return Ok(result);
            }
            config.save(config_dir);

            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, parsed)));
            Ok(result)
        }
        ConfigAction::Reset => {
            let config = Thresholds::default();
            config.save(config_dir);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success("Thresholds reset to defaults"));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_show_all_returns_defaults_when_unset() {
        let temp = TempDir::new().unwrap();
        let result = run(temp.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(Thresholds::default()));
    }

    #[test]
    fn test_set_persists() {
        let temp = TempDir::new().unwrap();
        let result = run(
            temp.path(),
            ConfigAction::Set("hard_lapses_min".into(), "4".into()),
        )
        .unwrap();
        assert!(result.messages[0].content.contains("set to 4"));

        let loaded = Thresholds::load(temp.path()).unwrap();
        assert_eq!(loaded.hard_lapses_min, 4);
    }

    #[test]
    fn test_show_key_after_set() {
        let temp = TempDir::new().unwrap();
        run(
            temp.path(),
            ConfigAction::Set("very_easy_ivl_min".into(), "120".into()),
        )
        .unwrap();

        let result = run(temp.path(), ConfigAction::ShowKey("very_easy_ivl_min".into())).unwrap();
        assert_eq!(result.messages[0].content, "120");
    }

    #[test]
    fn test_unknown_key_reports_error_message() {
        let temp = TempDir::new().unwrap();
        let result = run(temp.path(), ConfigAction::ShowKey("bogus".into())).unwrap();
        assert!(result.messages[0].content.contains("Unknown config key"));

        let result = run(temp.path(), ConfigAction::Set("bogus".into(), "1".into())).unwrap();
        assert!(result.messages[0].content.contains("Unknown config key"));
    }

    #[test]
    fn test_non_numeric_value_rejected() {
        let temp = TempDir::new().unwrap();
        let result = run(
            temp.path(),
            ConfigAction::Set("hard_lapses_min".into(), "lots".into()),
        )
        .unwrap();
        assert!(result.messages[0].content.contains("Invalid value"));
        assert_eq!(
            Thresholds::load(temp.path()).unwrap().hard_lapses_min,
            Thresholds::default().hard_lapses_min
        );
    }

    #[test]
    fn test_reset_restores_defaults() {
        let temp = TempDir::new().unwrap();
        run(
            temp.path(),
            ConfigAction::Set("easy_ivl_min".into(), "60".into()),
        )
        .unwrap();

        let result = run(temp.path(), ConfigAction::Reset).unwrap();
        assert!(result.messages[0].content.contains("reset"));
        assert_eq!(
            Thresholds::load(temp.path()).unwrap(),
            Thresholds::default()
        );
    }
}
