//! Interpreter configuration loaded from ~/.kitgraph/interpreter.yaml.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::factory::OperandOrder;
use crate::visitor::printer::DEFAULT_INDENT_WIDTH;

use super::error::ConfigError;

pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Interpreter settings loaded from YAML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpreterConfig {
    /// How popped operands map onto binary slots.
    #[serde(default)]
    pub operand_order: OperandOrder,
    /// Deepest element nesting accepted before the parse is rejected.
    #[serde(default = "InterpreterConfig::default_max_depth")]
    pub max_depth: usize,
    /// Spaces per level in printed trees.
    #[serde(default = "InterpreterConfig::default_indent_width")]
    pub indent_width: usize,
}

impl InterpreterConfig {
    /// Standard location of the config file.
    pub fn default_path() -> Option<PathBuf> {
        let home = dirs::home_dir()?;
        Some(home.join(".kitgraph").join("interpreter.yaml"))
    }

    /// Load config from the standard path.
    /// Returns None if the file doesn't exist or can't be parsed.
    pub fn load() -> Option<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            return None;
        }
        match Self::load_from(&path) {
            Ok(config) => Some(config),
            Err(e) => {
                warn!(path = %path.display(), "ignoring interpreter config: {e}");
                None
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Save config as YAML, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    fn default_max_depth() -> usize {
        DEFAULT_MAX_DEPTH
    }

    fn default_indent_width() -> usize {
        DEFAULT_INDENT_WIDTH
    }
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            operand_order: OperandOrder::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}
