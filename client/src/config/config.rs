use serde::{Deserialize, Serialize};
use tictacpro_common::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};

use super::{GameMode, TicTacToeMatchConfig};

const CONFIG_FILE_NAME: &str = "tictacpro_config.yaml";

fn get_config_path() -> std::path::PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    CONFIG_FILE_NAME.into()
}

pub fn get_config_manager() -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>
{
    ConfigManager::from_yaml_file(get_config_path())
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub last_mode: GameMode,
    #[serde(default)]
    pub tictactoe: TicTacToeMatchConfig,
    /// Fixed seed for the computer's random picks; `None` draws a fresh one each run.
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.tictactoe.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictacpro_common::config::{ConfigContentProvider, ConfigSerializer};
    use tictacpro_common::games::tictactoe::{Difficulty, Mark};

    fn get_temp_file_path() -> std::path::PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictacpro_client_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_saved_by_manager_is_read_back() {
        let config = Config {
            last_mode: GameMode::HumanVsComputer,
            tictactoe: TicTacToeMatchConfig {
                difficulty: Difficulty::Hard,
                computer_mark: Mark::PlayerA,
                bot_move_delay_ms: 0,
            },
            rng_seed: Some(42),
        };
        let file_path = get_temp_file_path();
        let manager = ConfigManager::new(
            FileContentConfigProvider::new(&file_path),
            YamlConfigSerializer::new(),
        );
        manager.set_config(&config).unwrap();

        let reloaded: ConfigManager<_, Config, _> = ConfigManager::from_yaml_file(&file_path);
        assert_eq!(reloaded.get_config().unwrap(), config);
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager: ConfigManager<_, Config, _> =
            ConfigManager::from_yaml_file("this_file_does_not_exist.yaml");
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let file_path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(&file_path);
        provider.set_config_content("last_mode: HumanVsComputer\n").unwrap();

        let manager: ConfigManager<_, Config, _> =
            ConfigManager::new(provider, YamlConfigSerializer::new());
        let config = manager.get_config().unwrap();
        assert_eq!(config.last_mode, GameMode::HumanVsComputer);
        assert_eq!(config.tictactoe, TicTacToeMatchConfig::default());
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_empty_computer_mark_cant_be_read() {
        let invalid_config_content = r#"
            tictactoe:
              difficulty: Hard
              computer_mark: Empty
              bot_move_delay_ms: 100
        "#;

        let file_path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(&file_path);
        provider.set_config_content(invalid_config_content).unwrap();

        let manager: ConfigManager<_, Config, _> =
            ConfigManager::new(provider, YamlConfigSerializer::new());
        assert!(manager.get_config().is_err());
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_excessive_delay_is_invalid() {
        let config = Config {
            tictactoe: TicTacToeMatchConfig {
                bot_move_delay_ms: 60_000,
                ..TicTacToeMatchConfig::default()
            },
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
