use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::graph::naming::NamingScheme;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct RunConfig {
    #[serde(default)]
    pub naming: NamingScheme,
    #[serde(default = "default_trace_steps")]
    pub trace_steps: bool,
    #[serde(default)]
    pub early_exit: bool,
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            naming: NamingScheme::default(),
            trace_steps: default_trace_steps(),
            early_exit: false,
            queue_capacity: default_queue_capacity(),
        }
    }
}

impl RunConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("config file {:?} not found, using defaults", path);
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: RunConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }
}

fn default_trace_steps() -> bool {
    true
}

fn default_queue_capacity() -> usize {
    100
}
