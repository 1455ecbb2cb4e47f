use std::path::Path;

/// Returns the platform-specific path for the config file.
///
/// # Notes
/// - Uses platform-specific config directory (e.g., ~/.config on Linux)
/// - Falls back to current directory if config directory is unavailable
pub fn get_config_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("faceit_export")
        .join("config.toml")
        .to_string_lossy()
        .to_string()
}

/// Returns the platform-specific path for the log directory.
pub fn get_log_dir_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("faceit_export")
        .join("logs")
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_layout() {
        let config_path = get_config_path();
        assert!(config_path.contains("faceit_export"));
        assert!(config_path.ends_with("config.toml"));
    }

    #[test]
    fn test_log_dir_path_layout() {
        let log_dir_path = get_log_dir_path();
        assert!(log_dir_path.contains("faceit_export"));
        assert!(log_dir_path.ends_with("logs"));
    }
}
