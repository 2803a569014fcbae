//! Named `(mapping, rules, filters)` presets, persisted as a JSON list.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::config::RunConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub name: String,
    pub created_at: String,
    #[serde(flatten)]
    pub config: RunConfig,
}

impl Preset {
    pub fn new(name: impl Into<String>, config: RunConfig) -> Self {
        Self {
            name: name.into(),
            created_at: Utc::now().to_rfc3339(),
            config,
        }
    }
}

/// Loads the preset list. A missing file is an empty list, not an error.
pub fn load_presets(path: &Path) -> Result<Vec<Preset>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read presets: {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parse presets: {}", path.display()))
}

pub fn find_preset<'a>(presets: &'a [Preset], name: &str) -> Option<&'a Preset> {
    presets.iter().find(|preset| preset.name == name)
}

/// Inserts or replaces a preset by name and writes the list back.
pub fn save_preset(path: &Path, preset: Preset) -> Result<()> {
    let mut presets = load_presets(path)?;
    presets.retain(|existing| existing.name != preset.name);
    presets.push(preset);
    let raw = serde_json::to_string_pretty(&presets).context("serialize presets")?;
    fs::write(path, raw).with_context(|| format!("write presets: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use sla_model::{FieldKey, RulesConfig};

    use super::*;

    #[test]
    fn save_then_load_round_trips_and_upserts() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("presets.json");

        let mut config = RunConfig::default();
        config.mapping.set(FieldKey::Status, "Status");
        save_preset(&path, Preset::new("eu-air", config.clone())).expect("save preset");

        config.rules = RulesConfig {
            exclude_china: true,
            ..RulesConfig::default()
        };
        save_preset(&path, Preset::new("eu-air", config)).expect("replace preset");

        let presets = load_presets(&path).expect("load presets");
        assert_eq!(presets.len(), 1);
        let preset = find_preset(&presets, "eu-air").expect("find preset");
        assert!(preset.config.rules.exclude_china);
        assert_eq!(
            preset.config.mapping.column_for(FieldKey::Status),
            Some("Status")
        );
    }

    #[test]
    fn missing_preset_file_is_empty() {
        let dir = tempfile::tempdir().expect("temp dir");
        let presets = load_presets(&dir.path().join("none.json")).expect("load");
        assert!(presets.is_empty());
    }
}
