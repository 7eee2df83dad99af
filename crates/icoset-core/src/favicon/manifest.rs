use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::IconError;

pub const MANIFEST_FILENAME: &str = "manifest.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

impl ManifestIcon {
    pub fn png(src: String, size: u32) -> Self {
        ManifestIcon {
            src,
            sizes: format!("{}x{}", size, size),
            mime_type: "image/png".to_string(),
        }
    }
}

/// Web app manifest referencing the Android Chrome icons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebManifest {
    pub name: String,
    pub short_name: String,
    pub icons: Vec<ManifestIcon>,
    pub theme_color: Color,
    pub background_color: Color,
    pub display: String,
}

impl WebManifest {
    pub fn to_json(&self) -> Result<Vec<u8>, IconError> {
        serde_json::to_vec_pretty(self).map_err(|e| IconError::Manifest {
            reason: e.to_string(),
        })
    }
}
