use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ClubError, Result};
use crate::i18n::Language;

/// Top-level configuration. Every field falls back to a built-in default, so
/// an empty YAML document is a valid config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClubConfig {
    pub wizard: WizardConfig,
    pub rewards: RewardsConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    pub contact_min_len: usize,
    pub code_len: usize,
    pub send_code_delay_ms: u64,
    pub verify_code_delay_ms: u64,
    pub create_profile_delay_ms: u64,
    /// How long the confirmation stays on screen before the identity is handed over.
    pub completion_delay_ms: u64,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            contact_min_len: 10,
            code_len: 4,
            send_code_delay_ms: 1500,
            verify_code_delay_ms: 1500,
            create_profile_delay_ms: 2500,
            completion_delay_ms: 1500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardsConfig {
    pub signup_bonus: u32,
    /// Lifetime points needed for Regular, Gourmet and Legend.
    pub rank_thresholds: [u32; 3],
    pub wheel_spin_ms: u64,
    pub wheel_cooldown_ms: u64,
    pub memory_base_reward: u32,
    pub memory_mismatch_ms: u64,
}

impl Default for RewardsConfig {
    fn default() -> Self {
        Self {
            signup_bonus: 500,
            rank_thresholds: [1_000, 2_500, 5_000],
            wheel_spin_ms: 3_000,
            wheel_cooldown_ms: 60_000,
            memory_base_reward: 200,
            memory_mismatch_ms: 800,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub language: Language,
    /// Deadline of the promo countdown on the home view, ms since epoch.
    pub promo_deadline_ms: Option<u64>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            language: Language::En,
            promo_deadline_ms: None,
        }
    }
}

impl ClubConfig {
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| ClubError::ConfigIo {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_yaml_str(&source)?;
        log::info!("Loaded club config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = ClubConfig::from_yaml_str("").unwrap();
        assert_eq!(config, ClubConfig::default());
        assert_eq!(config.wizard.code_len, 4);
        assert_eq!(config.rewards.signup_bonus, 500);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = ClubConfig::from_yaml_str(
            "wizard:\n  send_code_delay_ms: 10\nui:\n  language: ru\n",
        )
        .unwrap();
        assert_eq!(config.wizard.send_code_delay_ms, 10);
        assert_eq!(config.wizard.contact_min_len, 10);
        assert_eq!(config.ui.language, Language::Ru);
        assert_eq!(config.rewards, RewardsConfig::default());
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let err = ClubConfig::from_yaml_str("wizard: [not, a, map]").unwrap_err();
        assert!(matches!(err, ClubError::ConfigParse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ClubConfig::load(Path::new("/nonexistent/club.yaml")).unwrap_err();
        match err {
            ClubError::ConfigIo { path, .. } => assert!(path.ends_with("club.yaml")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
