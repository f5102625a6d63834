// Keytranspose Settings Module
// Where the word list lives and which noise entries to drop from it

use std::path::{Path, PathBuf};

/// Word list used when nothing else is configured
pub const DEFAULT_DICTIONARY_PATH: &str = "/usr/share/dict/american-english";

/// Single letters that system word lists carry as entries but that are not words
pub const DEFAULT_OMISSIONS: &[&str] = &[
    "b", "c", "d", "e", "f", "g", "h", "j", "k", "l", "m", "n", "p", "q", "r", "s", "t", "u", "v",
    "w", "y", "z",
];

/// Settings for a run
///
/// These settings are loaded from a TOML file (default:
/// ~/.config/keytranspose/settings.toml) and can be overridden from the
/// command line.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Word list to sweep
    dictionary_path: PathBuf,

    /// Single-character entries dropped from the word list
    omissions: Vec<String>,
}

/// Errors that can occur when loading settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("Invalid setting value: {0}")]
    InvalidValue(String),
}

/// TOML representation for deserializing settings
#[derive(Debug, Clone, serde::Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct SettingsToml {
    #[serde(default)]
    dictionary: Option<DictionarySettings>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct DictionarySettings {
    #[serde(default)]
    path: Option<PathBuf>,

    #[serde(default)]
    omissions: Option<Vec<String>>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

impl Settings {
    /// Create settings with the built-in defaults
    pub fn new() -> Self {
        Self {
            dictionary_path: PathBuf::from(DEFAULT_DICTIONARY_PATH),
            omissions: DEFAULT_OMISSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Load settings from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load settings from TOML string
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let toml_settings: SettingsToml =
            toml::from_str(content).map_err(|e| SettingsError::TomlParse(e.to_string()))?;

        let mut settings = Self::new();

        if let Some(dictionary) = toml_settings.dictionary {
            if let Some(path) = dictionary.path {
                settings.dictionary_path = path;
            }
            if let Some(omissions) = dictionary.omissions {
                settings.set_omissions(omissions)?;
            }
        }

        Ok(settings)
    }

    /// Get the default settings path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("keytranspose").join("settings.toml"))
    }

    /// Load from default location (~/.config/keytranspose/settings.toml)
    pub fn load_default() -> Result<Self, SettingsError> {
        if let Some(path) = Self::default_path() {
            if path.exists() {
                log::debug!("loading settings from {}", path.display());
                return Self::from_file(path);
            }
        }
        // Return default settings if file doesn't exist
        Ok(Self::new())
    }

    pub fn dictionary_path(&self) -> &Path {
        &self.dictionary_path
    }

    pub fn set_dictionary_path(&mut self, path: impl Into<PathBuf>) {
        self.dictionary_path = path.into();
    }

    pub fn omissions(&self) -> &[String] {
        &self.omissions
    }

    /// Replace the omission list
    ///
    /// Every entry must be exactly one character.
    pub fn set_omissions<I, S>(&mut self, omissions: I) -> Result<(), SettingsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut validated = Vec::new();
        for entry in omissions {
            let entry = entry.into();
            if entry.chars().count() != 1 {
                return Err(SettingsError::InvalidValue(format!(
                    "omission '{}' must be a single character",
                    entry
                )));
            }
            if !validated.contains(&entry) {
                validated.push(entry);
            }
        }
        self.omissions = validated;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_settings_default() {
        let settings = Settings::new();
        assert_eq!(
            settings.dictionary_path(),
            Path::new("/usr/share/dict/american-english")
        );
        assert_eq!(settings.omissions().len(), DEFAULT_OMISSIONS.len());
        assert!(settings.omissions().iter().any(|o| o == "q"));
        // real one-letter words stay
        assert!(!settings.omissions().iter().any(|o| o == "a" || o == "i"));
    }

    #[test]
    fn test_settings_from_toml() {
        let toml = r#"
[dictionary]
path = "/tmp/words"
omissions = ["x", "y"]
"#;

        let settings = Settings::from_toml(toml).unwrap();
        assert_eq!(settings.dictionary_path(), Path::new("/tmp/words"));
        assert_eq!(settings.omissions(), &["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn test_settings_partial_toml_keeps_defaults() {
        let settings = Settings::from_toml("[dictionary]\npath = \"/tmp/words\"\n").unwrap();
        assert_eq!(settings.omissions().len(), DEFAULT_OMISSIONS.len());

        let settings = Settings::from_toml("").unwrap();
        assert_eq!(
            settings.dictionary_path(),
            Path::new(DEFAULT_DICTIONARY_PATH)
        );
    }

    #[test]
    fn test_settings_rejects_long_omission() {
        let result = Settings::from_toml("[dictionary]\nomissions = [\"ab\"]\n");
        assert!(matches!(result, Err(SettingsError::InvalidValue(_))));

        let mut settings = Settings::new();
        assert!(settings.set_omissions([""]).is_err());
    }

    #[test]
    fn test_settings_rejects_unknown_keys() {
        let result = Settings::from_toml("[dictionary]\nwords = \"/tmp\"\n");
        assert!(matches!(result, Err(SettingsError::TomlParse(_))));
    }

    #[test]
    fn test_set_omissions_dedups() {
        let mut settings = Settings::new();
        settings.set_omissions(["z", "z", "q"]).unwrap();
        assert_eq!(settings.omissions(), &["z".to_string(), "q".to_string()]);
    }

    #[test]
    fn test_settings_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[dictionary]\npath = \"/tmp/one\"\nomissions = [\"q\"]\n").unwrap();
        file.flush().unwrap();

        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.dictionary_path(), Path::new("/tmp/one"));
        assert_eq!(settings.omissions(), &["q".to_string()]);
    }

    #[test]
    fn test_settings_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Settings::from_file(dir.path().join("settings.toml"));
        assert!(matches!(result, Err(SettingsError::Io(_))));
    }
}
