//! Run configuration files: `{mapping, rules, filters}` as plain JSON.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use sla_model::{FieldMapping, FiltersConfig, RulesConfig};

/// One run's configuration tuple. Every part is optional in the file;
/// missing parts fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RunConfig {
    pub mapping: FieldMapping,
    pub rules: RulesConfig,
    pub filters: FiltersConfig,
}

pub fn load_run_config(path: &Path) -> Result<RunConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parse config: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use sla_model::FieldKey;

    use super::*;

    #[test]
    fn partial_config_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{"mapping":{{"status":"Status"}},"rules":{{"excludeChina":true}}}}"#
        )
        .expect("write config");

        let config = load_run_config(file.path()).expect("load config");
        assert_eq!(config.mapping.column_for(FieldKey::Status), Some("Status"));
        assert!(config.rules.exclude_china);
        assert_eq!(config.rules.status_matchers, vec!["shipped".to_string()]);
        assert!(config.filters.is_unrestricted());
    }

    #[test]
    fn malformed_config_reports_the_path() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "not json").expect("write config");
        let error = load_run_config(file.path()).expect_err("must fail");
        assert!(error.to_string().contains("parse config"));
    }
}
