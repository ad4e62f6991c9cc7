use std::collections::HashMap;
use std::path::{Path, PathBuf};

use notion_template::error::NotionError;
use notion_template::id::ResourceId;
use notion_template::page::DatabaseSummary;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

pub const DEFAULT_CONFIG_FILE: &str = "config.json";
const DATABASES_KEY: &str = "databases";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  #[error("Configuration file '{0}' not found.")]
  NotFound(PathBuf),

  #[error("Error loading configuration: Invalid JSON format. {0}")]
  InvalidJson(#[from] serde_json::Error),

  #[error("Invalid configuration: No 'databases' array found.")]
  MissingDatabases,

  #[error("No database found with label '{0}'.")]
  UnknownDatabase(String),

  #[error("No template found with label '{0}'.")]
  UnknownTemplate(String),

  #[error(transparent)]
  InvalidId(#[from] NotionError),

  #[error(transparent)]
  Io(#[from] std::io::Error),
}

/// Maps human readable labels to database and template ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
  pub databases: Vec<DatabaseEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseEntry {
  pub label: String,
  pub id: String,
  /// Template applied when a page is created in this database without an explicit template.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub template: Option<String>,
  #[serde(default)]
  pub templates: Vec<TemplateEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateEntry {
  pub label: String,
  pub id: String,
}

impl Config {
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    if !path.exists() {
      return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&content)?;
    if !value.get(DATABASES_KEY).is_some_and(Value::is_array) {
      return Err(ConfigError::MissingDatabases);
    }
    Ok(serde_json::from_value(value)?)
  }

  /// Like [Config::load], but a missing file yields an empty configuration so raw ids keep
  /// working without one.
  pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
    match Self::load(path) {
      Err(ConfigError::NotFound(path)) => {
        warn!("Configuration file '{}' not found", path.display());
        Ok(Self::default())
      },
      result => result,
    }
  }

  /// Loads the configuration needed to resolve `names`. A missing file is only tolerated when
  /// every name is already a raw id.
  pub fn load_for(path: &Path, names: &[&str]) -> Result<Self, ConfigError> {
    if names.iter().all(|name| ResourceId::normalize(name).is_ok()) {
      Self::load_or_default(path)
    } else {
      Self::load(path)
    }
  }

  pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
    let content = serde_json::to_string_pretty(self)?;
    std::fs::write(path, content)?;
    Ok(())
  }

  pub fn find_database(&self, label: &str) -> Option<&DatabaseEntry> {
    self
      .databases
      .iter()
      .find(|db| db.label.eq_ignore_ascii_case(label))
  }

  pub fn find_template(&self, label: &str) -> Option<&TemplateEntry> {
    self
      .databases
      .iter()
      .find_map(|db| db.find_template(label))
  }

  /// Resolves a database label, falling back to treating the input as a raw id.
  pub fn resolve_database(
    &self,
    label_or_id: &str,
  ) -> Result<(ResourceId, Option<&DatabaseEntry>), ConfigError> {
    if let Some(entry) = self.find_database(label_or_id) {
      return Ok((ResourceId::normalize(&entry.id)?, Some(entry)));
    }

    let id = ResourceId::normalize(label_or_id)
      .map_err(|_| ConfigError::UnknownDatabase(label_or_id.to_string()))?;
    let entry = self
      .databases
      .iter()
      .find(|db| ResourceId::normalize(&db.id).is_ok_and(|db_id| db_id == id));
    Ok((id, entry))
  }

  /// Resolves a template label, looking in `database` first and then in every configured
  /// database, falling back to treating the input as a raw id.
  pub fn resolve_template(
    &self,
    database: Option<&DatabaseEntry>,
    label_or_id: &str,
  ) -> Result<ResourceId, ConfigError> {
    let entry = database
      .and_then(|db| db.find_template(label_or_id))
      .or_else(|| self.find_template(label_or_id));
    if let Some(entry) = entry {
      return Ok(ResourceId::normalize(&entry.id)?);
    }

    ResourceId::normalize(label_or_id)
      .map_err(|_| ConfigError::UnknownTemplate(label_or_id.to_string()))
  }

  /// Rebuilds the database list from the databases the integration can see. Databases that were
  /// already configured keep their label and templates.
  pub fn merge_shared(&self, shared: Vec<DatabaseSummary>) -> Config {
    let mut existing = self
      .databases
      .iter()
      .filter_map(|db| {
        ResourceId::normalize(&db.id)
          .ok()
          .map(|id| (id, db.clone()))
      })
      .collect::<HashMap<_, _>>();

    let databases = shared
      .into_iter()
      .map(|summary| match existing.remove(&summary.id) {
        Some(previous) => DatabaseEntry {
          id: summary.id.to_string(),
          ..previous
        },
        None => DatabaseEntry {
          label: if summary.title.is_empty() {
            "Untitled".to_string()
          } else {
            summary.title
          },
          id: summary.id.to_string(),
          template: None,
          templates: vec![],
        },
      })
      .collect();
    Config { databases }
  }
}

impl DatabaseEntry {
  pub fn find_template(&self, label: &str) -> Option<&TemplateEntry> {
    self
      .templates
      .iter()
      .find(|template| template.label.eq_ignore_ascii_case(label))
  }
}
