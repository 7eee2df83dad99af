use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::IconError;
use crate::favicon::FaviconOptions;

/// Favicon settings read from a JSON file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionsFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest_background: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
}

impl OptionsFile {
    pub fn load(path: &Path) -> Result<OptionsFile, IconError> {
        let content = fs::read_to_string(path).map_err(|e| IconError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| IconError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Lay these values over `base`, keeping `base` where a field is unset.
    pub fn merge_into(self, base: FaviconOptions) -> FaviconOptions {
        FaviconOptions {
            prefix: self.prefix.unwrap_or(base.prefix),
            background: self.background.unwrap_or(base.background),
            theme_color: self.theme_color.unwrap_or(base.theme_color),
            manifest_background: self.manifest_background.unwrap_or(base.manifest_background),
            name: self.name.unwrap_or(base.name),
            short_name: self.short_name.unwrap_or(base.short_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn load_partial_file() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(
            temp_file.path(),
            r##"{ "prefix": "app-", "theme_color": "#336699" }"##,
        )
        .unwrap();

        let loaded = OptionsFile::load(temp_file.path()).unwrap();
        assert_eq!(loaded.prefix.as_deref(), Some("app-"));
        assert_eq!(loaded.theme_color, Some(Color::new(0x33, 0x66, 0x99)));
        assert_eq!(loaded.background, None);
    }

    #[test]
    fn merge_keeps_unset_fields() {
        let file = OptionsFile {
            theme_color: Some(Color::BLACK),
            ..OptionsFile::default()
        };
        let base = FaviconOptions::new("x-", Color::new(1, 2, 3));

        let merged = file.merge_into(base);
        assert_eq!(merged.prefix, "x-");
        assert_eq!(merged.background, Color::new(1, 2, 3));
        assert_eq!(merged.theme_color, Color::BLACK);
        assert_eq!(merged.manifest_background, Color::WHITE);
    }

    #[test]
    fn load_missing_file_returns_error() {
        let result = OptionsFile::load(Path::new("/nonexistent/icoset.json"));
        assert!(matches!(result, Err(IconError::Config { .. })));
    }

    #[test]
    fn load_bad_color_returns_error() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), r#"{ "background": "blue" }"#).unwrap();

        let result = OptionsFile::load(temp_file.path());
        assert!(matches!(result, Err(IconError::Config { .. })));
    }

    #[test]
    fn load_unknown_field_returns_error() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), r##"{ "colour": "#fff" }"##).unwrap();

        let result = OptionsFile::load(temp_file.path());
        assert!(result.is_err());
    }
}
