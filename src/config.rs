//! Tunables for the brewing page.
//! Defaults are compiled in; a partial JSON object stored under
//! [`CONFIG_STORAGE_KEY`] in localStorage overrides individual fields.

use serde::Deserialize;
use thiserror::Error;

use crate::model::PROXIMITY_THRESHOLD;
use crate::util::cwarn;

pub const CONFIG_STORAGE_KEY: &str = "infinite_brew.config";

pub const DEFAULT_ENDPOINT: &str = "https://ai.hackclub.com/chat/completions";
pub const DEFAULT_MODEL: &str = "moonshotai/kimi-k2-instruct-0905";
pub const DEFAULT_FALLBACK_NAME: &str = "Mystic Brew";
pub const DEFAULT_PROMPT: &str = "You are a magical potion naming expert. Create a truly creative, unique name for a potion made by combining pumpkin and candy. Keep it short (1-3 words) and make it Halloween-themed. NEVER include words like: spell, brew, potion, elixir, fog, pumpkin, candy, or any brewing-related terms. Make it imaginative and original, not just combining the ingredient names. Examples: Midnight Delight, Spooky Sweet, Gourd Magic. Return only the name, nothing else.";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("stored config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct BrewConfig {
    pub endpoint: String,
    pub model: String,
    pub prompt: String,
    /// Used whenever the naming service fails or times out.
    pub fallback_name: String,
    pub proximity_threshold: f64,
    /// How long the brewing overlay stays up.
    pub brew_duration_ms: u32,
    /// Never longer than `brew_duration_ms`; enforced by `validate`.
    pub naming_timeout_ms: u32,
}

impl Default for BrewConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
            fallback_name: DEFAULT_FALLBACK_NAME.to_string(),
            proximity_threshold: PROXIMITY_THRESHOLD,
            brew_duration_ms: 4000,
            naming_timeout_ms: 3500,
        }
    }
}

impl BrewConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: BrewConfig = serde_json::from_str(raw)?;
        cfg.validate()
    }

    fn validate(mut self) -> Result<Self, ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid("endpoint is empty".into()));
        }
        if self.fallback_name.trim().is_empty() {
            return Err(ConfigError::Invalid("fallback_name is empty".into()));
        }
        if !self.proximity_threshold.is_finite() || self.proximity_threshold <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "proximity_threshold must be positive, got {}",
                self.proximity_threshold
            )));
        }
        if self.brew_duration_ms == 0 {
            return Err(ConfigError::Invalid("brew_duration_ms must be non-zero".into()));
        }
        self.naming_timeout_ms = self.naming_timeout_ms.min(self.brew_duration_ms);
        Ok(self)
    }

    /// Reads overrides from localStorage, falling back to defaults on any problem.
    pub fn load() -> Self {
        let Some(raw) = read_stored_config() else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(cfg) => cfg,
            Err(err) => {
                cwarn(&format!("ignoring {}: {}", CONFIG_STORAGE_KEY, err));
                Self::default()
            }
        }
    }
}

fn read_stored_config() -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    let raw = storage.get_item(CONFIG_STORAGE_KEY).ok()??;
    if raw.trim().is_empty() {
        return None;
    }
    Some(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let cfg = BrewConfig::from_json("{}").expect("defaults");
        assert_eq!(cfg, BrewConfig::default());
        assert_eq!(cfg.fallback_name, "Mystic Brew");
        assert_eq!(cfg.brew_duration_ms, 4000);
        assert_eq!(cfg.proximity_threshold, 96.0);
    }

    #[test]
    fn partial_overrides_merge_onto_defaults() {
        let cfg = BrewConfig::from_json(r#"{"endpoint":"http://localhost:9000/v1","brew_duration_ms":2000}"#)
            .expect("valid");
        assert_eq!(cfg.endpoint, "http://localhost:9000/v1");
        assert_eq!(cfg.brew_duration_ms, 2000);
        assert_eq!(cfg.model, DEFAULT_MODEL);
        assert_eq!(cfg.naming_timeout_ms, 2000);
    }

    #[test]
    fn naming_timeout_never_exceeds_brew_duration() {
        let cfg = BrewConfig::from_json(r#"{"naming_timeout_ms":10000}"#).expect("valid");
        assert_eq!(cfg.naming_timeout_ms, cfg.brew_duration_ms);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(BrewConfig::from_json("not json"), Err(ConfigError::Parse(_))));
        assert!(matches!(BrewConfig::from_json(r#"{"endpoint":"  "}"#), Err(ConfigError::Invalid(_))));
        assert!(matches!(BrewConfig::from_json(r#"{"proximity_threshold":-1}"#), Err(ConfigError::Invalid(_))));
        assert!(matches!(BrewConfig::from_json(r#"{"brew_duration_ms":0}"#), Err(ConfigError::Invalid(_))));
    }
}
