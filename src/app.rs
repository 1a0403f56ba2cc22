use crate::error::{Error, Result};
use crate::models::{CurrentUser, Role};
use adw::Application;
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub user_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub role: Role,
    pub window_width: i32,
    pub window_height: i32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            user_name: "Dr. Ana Silva".into(),
            avatar: None,
            role: Role::Attendant,
            window_width: 1280,
            window_height: 800,
        }
    }
}

impl AppSettings {
    fn toml_path() -> Option<PathBuf> {
        let base = BaseDirs::new()?;
        Some(base.config_dir().join("mediacare.toml"))
    }

    /// A missing file is not an error, it just means defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(Error::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        toml::from_str(&text).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn try_load() -> Result<Self> {
        let path = Self::toml_path().ok_or(Error::NoConfigDir)?;
        Self::load_from(&path)
    }

    pub fn load() -> Self {
        match Self::try_load() {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Using default settings: {e}");
                Self::default()
            }
        }
    }

    pub fn current_user(&self) -> CurrentUser {
        CurrentUser {
            name: self.user_name.clone(),
            role: self.role,
            avatar: self.avatar.clone(),
        }
    }
}

pub fn build_ui(app: &Application) {
    let settings = AppSettings::load();
    log::info!(
        "Opening desk for {} as {}",
        settings.user_name,
        settings.role.label()
    );
    crate::ui::main_window::show_main_window(app, &settings);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = AppSettings::load_from(&dir.path().join("mediacare.toml")).unwrap();
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "user_name = \"Carlos Silva\"\nrole = \"gerente\"").unwrap();

        let settings = AppSettings::load_from(file.path()).unwrap();
        assert_eq!(settings.user_name, "Carlos Silva");
        assert_eq!(settings.role, Role::Manager);
        assert_eq!(settings.window_width, 1280);

        let user = settings.current_user();
        assert_eq!(user.name, "Carlos Silva");
        assert_eq!(user.role, Role::Manager);
    }

    #[test]
    fn invalid_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "role = \"diretor\"").unwrap();

        let err = AppSettings::load_from(file.path()).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }), "{err}");
    }

    #[test]
    fn defaults_round_trip_through_toml() {
        let text = toml::to_string_pretty(&AppSettings::default()).unwrap();
        assert!(text.contains("role = \"atendente\""));
        assert_eq!(toml::from_str::<AppSettings>(&text).unwrap(), AppSettings::default());
    }
}
