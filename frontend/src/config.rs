use log::{warn, Level};
use serde::Deserialize;
use thiserror::Error;
use web_sys::window;

/// Id of the optional inline JSON block in `index.html` that overrides defaults.
pub const CONFIG_ELEMENT_ID: &str = "landing-config";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Local trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("landing config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("checkout_url must not be empty")]
    EmptyCheckoutUrl,
    #[error("autoplay_interval_ms must be greater than zero")]
    ZeroAutoplayInterval,
    #[error("swipe_confidence_threshold must be a finite, non-negative number (got {0})")]
    InvalidSwipeThreshold(f64),
}

/// Runtime knobs of the page. Every field falls back to its default when
/// missing from the inline JSON block.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub checkout_url: String,
    pub tracking_event: String,
    pub pricing_anchor: String,
    pub autoplay_interval_ms: u32,
    pub swipe_confidence_threshold: f64,
    pub transition_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            checkout_url: "https://pay.kiwify.com.br/ZQnfEu4".to_string(),
            tracking_event: "InitiateCheckout".to_string(),
            pricing_anchor: "pricing".to_string(),
            autoplay_interval_ms: 5000,
            swipe_confidence_threshold: 10_000.0,
            transition_ms: 400,
        }
    }
}

impl Config {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.checkout_url.trim().is_empty() {
            return Err(ConfigError::EmptyCheckoutUrl);
        }
        if self.autoplay_interval_ms == 0 {
            return Err(ConfigError::ZeroAutoplayInterval);
        }
        let threshold = self.swipe_confidence_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ConfigError::InvalidSwipeThreshold(threshold));
        }
        Ok(())
    }

    /// Reads the inline config block from the document. A missing block means
    /// defaults; a broken one is logged and also means defaults.
    pub fn load() -> Self {
        let raw = window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => Config::from_json(&raw).unwrap_or_else(|e| {
                warn!("Ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
                Config::default()
            }),
            _ => Config::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_object_gives_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.autoplay_interval_ms, 5000);
        assert_eq!(config.swipe_confidence_threshold, 10_000.0);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config =
            Config::from_json(r#"{"autoplay_interval_ms": 8000, "pricing_anchor": "oferta"}"#)
                .unwrap();
        assert_eq!(config.autoplay_interval_ms, 8000);
        assert_eq!(config.pricing_anchor, "oferta");
        assert_eq!(config.checkout_url, Config::default().checkout_url);
        assert_eq!(config.tracking_event, "InitiateCheckout");
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            Config::from_json("{not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn rejects_zero_interval() {
        assert!(matches!(
            Config::from_json(r#"{"autoplay_interval_ms": 0}"#),
            Err(ConfigError::ZeroAutoplayInterval)
        ));
    }

    #[test]
    fn rejects_blank_checkout_url() {
        assert!(matches!(
            Config::from_json(r#"{"checkout_url": "   "}"#),
            Err(ConfigError::EmptyCheckoutUrl)
        ));
    }

    #[test]
    fn rejects_negative_threshold() {
        assert!(matches!(
            Config::from_json(r#"{"swipe_confidence_threshold": -1.0}"#),
            Err(ConfigError::InvalidSwipeThreshold(_))
        ));
    }
}
