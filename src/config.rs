//! Configuration with layered resolution using figment.
//!
//! Resolution order (highest priority last):
//! 1. User config: `~/.config/jamkit/config.toml` (XDG) or platform config dir
//! 2. Project config: `<project root>/jamkit.toml`
//! 3. Environment variables: `JAMKIT_*` (`__` separates sections)
//!
//! Every key has a default, so an empty configuration is valid:
//!
//! ```toml
//! [shell]
//! timeout_secs = 60
//!
//! [godot]
//! executables = ["godot", "godot4"]
//!
//! [phaser]
//! dev_url = "http://localhost:5173"
//! ```
//!
//! The project root is never part of the configuration. It is derived from
//! the executable location, see [`ProjectRoot`](crate::context::ProjectRoot).

use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// File name of the project-level config, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "jamkit.toml";

/// Boxed wrapper for figment::Error to reduce Result size on the stack.
#[derive(Debug)]
pub struct ConfigError(Box<figment::Error>);

impl Deref for ConfigError {
    type Target = figment::Error;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self(Box::new(err))
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub shell: ShellConfig,
    pub godot: GodotConfig,
    pub phaser: PhaserConfig,
}

/// Settings for `run_command`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Wall-clock limit before a command is killed.
    pub timeout_secs: u64,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self { timeout_secs: 60 }
    }
}

impl ShellConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Settings for launching the Godot editor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GodotConfig {
    /// Candidate executables, tried in order.
    pub executables: Vec<String>,
}

impl Default for GodotConfig {
    fn default() -> Self {
        Self {
            executables: vec![
                "godot".to_string(),
                "godot4".to_string(),
                r"C:\Program Files\Godot\Godot.exe".to_string(),
                r"C:\Godot\Godot_v4.2-stable_win64.exe".to_string(),
                "/Applications/Godot.app/Contents/MacOS/Godot".to_string(),
            ],
        }
    }
}

/// Settings for the Phaser (Vite) dev server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhaserConfig {
    /// URL reported once the dev server is started.
    pub dev_url: String,
}

impl Default for PhaserConfig {
    fn default() -> Self {
        Self {
            dev_url: "http://localhost:5173".to_string(),
        }
    }
}

impl Config {
    /// Load config with layered resolution (defaults → user → project → env).
    pub fn load(project_root: &Path) -> Result<Self, ConfigError> {
        Self::figment(Self::user_config_path(), project_root.join(PROJECT_CONFIG_FILE))
            .extract()
            .map_err(ConfigError::from)
    }

    fn figment(user_config: PathBuf, project_config: PathBuf) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            // Layer 1: User config (lowest priority)
            .merge(Toml::file(user_config))
            // Layer 2: Project config
            .merge(Toml::file(project_config))
            // Layer 3: Environment variables (highest priority)
            .merge(Env::prefixed("JAMKIT_").split("__"))
    }

    /// User config path: ~/.config/jamkit/config.toml (XDG) or platform config dir.
    fn user_config_path() -> PathBuf {
        if let Some(home) = dirs::home_dir() {
            let xdg_path = home.join(".config").join("jamkit").join("config.toml");
            if xdg_path.exists() {
                return xdg_path;
            }
        }
        dirs::config_dir()
            .map(|p| p.join("jamkit").join("config.toml"))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn load_from(dir: &Path) -> Config {
        Config::figment(dir.join("missing-user.toml"), dir.join(PROJECT_CONFIG_FILE))
            .extract()
            .unwrap()
    }

    #[test]
    #[serial]
    fn test_defaults_without_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_from(dir.path());

        assert_eq!(config.shell.timeout_secs, 60);
        assert_eq!(config.shell.timeout(), Duration::from_secs(60));
        assert_eq!(config.godot.executables[0], "godot");
        assert_eq!(config.phaser.dev_url, "http://localhost:5173");
    }

    #[test]
    #[serial]
    fn test_project_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(PROJECT_CONFIG_FILE),
            "[shell]\ntimeout_secs = 5\n\n[godot]\nexecutables = [\"/opt/godot\"]\n",
        )
        .unwrap();

        let config = load_from(dir.path());
        assert_eq!(config.shell.timeout_secs, 5);
        assert_eq!(config.godot.executables, vec!["/opt/godot".to_string()]);
        assert_eq!(config.phaser.dev_url, "http://localhost:5173");
    }

    #[test]
    #[serial]
    fn test_env_overrides_project_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(PROJECT_CONFIG_FILE),
            "[phaser]\ndev_url = \"http://localhost:8080\"\n",
        )
        .unwrap();

        std::env::set_var("JAMKIT_PHASER__DEV_URL", "http://127.0.0.1:3000");
        let config = load_from(dir.path());
        std::env::remove_var("JAMKIT_PHASER__DEV_URL");

        assert_eq!(config.phaser.dev_url, "http://127.0.0.1:3000");
    }
}
