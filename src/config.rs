//! Engine defaults loaded from inquiry_mind.toml and environment variables.

use serde::Deserialize;

use crate::error::{InquiryMindError, Result};
use crate::types::LearningContext;

/// Defaults applied by the `*_default` engine entry points.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub default_context: LearningContext,
    pub default_depth: i32,
    pub default_stakeholders: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_context: LearningContext::Personal,
            default_depth: 3,
            default_stakeholders: 5,
        }
    }
}

/// File shape for inquiry_mind.toml; every field optional.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    default_context: Option<String>,
    default_depth: Option<i32>,
    default_stakeholders: Option<i32>,
}

impl EngineConfig {
    /// Load defaults from inquiry_mind.toml in the working directory (if
    /// present), then apply INQ_* environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = Self::default();
        if let Ok(raw) = std::fs::read_to_string("inquiry_mind.toml") {
            let file: FileConfig = toml::from_str(&raw).map_err(|e| InquiryMindError::Config {
                message: format!("inquiry_mind.toml: {}", e),
            })?;
            if let Some(context) = file.default_context {
                config.default_context = LearningContext::from_str(&context);
            }
            if let Some(depth) = file.default_depth {
                config.default_depth = depth;
            }
            if let Some(stakeholders) = file.default_stakeholders {
                config.default_stakeholders = stakeholders;
            }
        }
        config.apply_env();
        Ok(config)
    }

    /// Environment overrides with forgiving parsing; malformed values are
    /// ignored rather than rejected.
    fn apply_env(&mut self) {
        if let Ok(context) = std::env::var("INQ_DEFAULT_CONTEXT") {
            self.default_context = LearningContext::from_str(&context);
        }
        if let Some(depth) = std::env::var("INQ_DEFAULT_DEPTH")
            .ok()
            .and_then(|v| v.parse::<i32>().ok())
        {
            self.default_depth = depth;
        }
        if let Some(stakeholders) = std::env::var("INQ_DEFAULT_STAKEHOLDERS")
            .ok()
            .and_then(|v| v.parse::<i32>().ok())
        {
            self.default_stakeholders = stakeholders;
        }
    }
}
