//! XDG Base Directory paths for prism.
//!
//! CLI tools should use XDG paths for cross-platform consistency,
//! not platform-native paths.

use std::path::PathBuf;

/// Get the prism config directory.
///
/// Returns `$XDG_CONFIG_HOME/prism` if set, otherwise `~/.config/prism`.
/// This is where config files and effect bundles are stored.
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg_config).join("prism")
    } else if let Some(home) = dirs::home_dir() {
        home.join(".config/prism")
    } else {
        PathBuf::from(".config/prism")
    }
}

/// Get the directory operator-installed effect bundles live in.
///
/// Each bundle is a subdirectory named after its library:
/// `effects/<name>/<name>.so` plus an optional `config.toml`.
pub fn effects_dir() -> PathBuf {
    config_dir().join("effects")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_ends_with_prism() {
        let path = config_dir();
        assert!(path.ends_with("prism") || path.to_string_lossy().contains("prism"));
    }

    #[test]
    fn test_effects_dir_is_under_config_dir() {
        assert!(effects_dir().starts_with(config_dir()));
        assert!(effects_dir().ends_with("effects"));
    }
}
