use grid_game_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use grid_game_common::games::tictactoe::GameSettings;

use crate::args::Args;

const CONFIG_FILE_NAME: &str = "grid_game_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    path: Option<&str>,
) -> ConfigManager<FileContentConfigProvider, GameSettings, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(&get_config_path()),
    }
}

/// Applies command line overrides on top of the stored settings.
pub fn resolve_settings(stored: GameSettings, args: &Args) -> Result<GameSettings, String> {
    let mut settings = stored;

    if let Some(width) = args.width {
        settings.width = width;
    }
    if let Some(height) = args.height {
        settings.height = height;
    }
    if let Some(win_run_length) = args.win_run_length {
        settings.win_run_length = Some(win_run_length);
    } else if args.width.is_some() || args.height.is_some() {
        // A stored run length was chosen for the stored size.
        settings.win_run_length = None;
    }

    settings
        .validate()
        .map_err(|e| format!("Invalid settings: {}", e))?;
    Ok(settings)
}
