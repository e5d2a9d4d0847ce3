//! DOM-free logic for the page decorations around the scene: the typed
//! headline and the scroll-reveal of content sections.

pub mod reveal;
pub mod typewriter;

use serde::{Deserialize, Serialize};

use crate::api::error::GalaxyError;

pub use reveal::{RevealState, ScrollReveal};
pub use typewriter::Typewriter;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Headline typed into the `typing-text` element.
    pub headline: String,
    /// Milliseconds between two typed characters.
    pub type_delay_ms: u32,
    /// CSS selectors whose matches fade in when scrolled into view.
    pub reveal_selectors: Vec<String>,
    /// Visible fraction at which the observer reports an element.
    pub reveal_threshold: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            headline: "WELCOME TO THE CAT GALAXY".to_string(),
            type_delay_ms: 50,
            reveal_selectors: vec![
                ".project-card".to_string(),
                ".stack-item".to_string(),
                ".about-grid".to_string(),
            ],
            reveal_threshold: 0.1,
        }
    }
}

impl PageConfig {
    pub fn from_json(json: &str) -> Result<Self, GalaxyError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|source| GalaxyError::Json { what: "page config", source })?;
        if !(0.0..=1.0).contains(&config.reveal_threshold) {
            return Err(GalaxyError::InvalidConfig("reveal_threshold must be in [0, 1]"));
        }
        Ok(config)
    }

    /// Selectors joined into one `querySelectorAll` argument.
    pub fn reveal_query(&self) -> String {
        self.reveal_selectors.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = PageConfig::default();
        assert_eq!(config.headline, "WELCOME TO THE CAT GALAXY");
        assert_eq!(config.type_delay_ms, 50);
        assert_eq!(config.reveal_query(), ".project-card, .stack-item, .about-grid");
    }

    #[test]
    fn partial_override() {
        let config = PageConfig::from_json(r#"{ "type_delay_ms": 20 }"#).unwrap();
        assert_eq!(config.type_delay_ms, 20);
        assert_eq!(config.reveal_threshold, 0.1);
    }

    #[test]
    fn threshold_out_of_range() {
        assert!(matches!(
            PageConfig::from_json(r#"{ "reveal_threshold": 1.5 }"#),
            Err(GalaxyError::InvalidConfig(_))
        ));
    }
}
