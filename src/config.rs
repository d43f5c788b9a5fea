use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_DIR: &str = "AutoGeneratedScripts";
pub const DEFAULT_EXTENSION: &str = "cs";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneratorConfig {
    pub target: Option<String>,
    pub source: Option<PathBuf>,
    // built-in template when unset
    pub template: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub extension: String,
    pub make_rpcs: bool,
    pub on_value_changed: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            target: None,
            source: None,
            template: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            extension: DEFAULT_EXTENSION.to_string(),
            make_rpcs: false,
            on_value_changed: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub target: Option<String>,
    pub source: Option<PathBuf>,
    pub template: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub extension: Option<String>,
    pub make_rpcs: Option<bool>,
    pub on_value_changed: Option<bool>,
}

impl GeneratorConfig {
    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(v) = overrides.target {
            self.target = Some(v);
        }
        if let Some(v) = overrides.source {
            self.source = Some(v);
        }
        if let Some(v) = overrides.template {
            self.template = Some(v);
        }
        if let Some(v) = overrides.output_dir {
            self.output_dir = v;
        }
        if let Some(v) = overrides.extension {
            self.extension = v;
        }
        if let Some(v) = overrides.make_rpcs {
            self.make_rpcs = v;
        }
        if let Some(v) = overrides.on_value_changed {
            self.on_value_changed = v;
        }
    }

    pub fn output_file_name(&self, class_name: &str) -> String {
        let ext = self.extension.trim_start_matches('.');
        if ext.is_empty() {
            class_name.to_string()
        } else {
            format!("{}.{}", class_name, ext)
        }
    }
}

pub fn load_config(path: &Path) -> Result<GeneratorConfig> {
    if !path.is_file() {
        return Ok(GeneratorConfig::default());
    }
    let raw = fs::read(path).with_context(|| format!("Failed reading {}", path.display()))?;
    let cfg: GeneratorConfig = serde_json::from_slice(&raw)
        .with_context(|| format!("Invalid JSON in {}", path.display()))?;
    Ok(cfg)
}

pub fn save_config(path: &Path, cfg: &GeneratorConfig) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed creating {}", parent.display()))?;
    }
    fs::write(path, serde_json::to_vec_pretty(cfg)?)
        .with_context(|| format!("Failed writing {}", path.display()))?;
    Ok(())
}
