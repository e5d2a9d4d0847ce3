use serde::{Deserialize, Serialize};

use crate::api::error::GalaxyError;

/// Asset manifest for the page. Loaded from JSON at runtime; every key is
/// optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetManifest {
    /// Relative path to the image shared by the sun and every body sprite.
    pub texture: String,
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self {
            texture: "assets/cat_planet.jpg".to_string(),
        }
    }
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, GalaxyError> {
        let manifest: Self = serde_json::from_str(json)
            .map_err(|source| GalaxyError::Json { what: "manifest", source })?;
        if manifest.texture.trim().is_empty() {
            return Err(GalaxyError::InvalidConfig("manifest texture path is empty"));
        }
        Ok(manifest)
    }
}
