use std::fmt::Display;

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::blocks::ContentBlock;
use crate::define::DATABASE_ID_KEY;
use crate::fields::PropertyMap;
use crate::id::ResourceId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageParent {
  Database(ResourceId),
  /// Newer API versions put database pages under a data source that still names its database.
  DataSource {
    database_id: ResourceId,
  },
  Page(ResourceId),
  Block(ResourceId),
  Workspace,
  Unknown,
}

impl PageParent {
  pub fn database_id(&self) -> Option<&ResourceId> {
    match self {
      PageParent::Database(id) => Some(id),
      PageParent::DataSource { database_id } => Some(database_id),
      _ => None,
    }
  }
}

#[derive(Debug, Clone)]
pub struct PageRecord {
  pub id: ResourceId,
  pub url: String,
  pub parent: PageParent,
  /// Properties exactly as retrieved, keyed by name.
  pub properties: IndexMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseSummary {
  pub id: ResourceId,
  pub title: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreatePageParams {
  pub database_id: Option<ResourceId>,
  pub title: String,
  pub template_id: Option<ResourceId>,
  pub open_after_create: bool,
}

impl CreatePageParams {
  pub fn new(title: impl ToString) -> Self {
    Self {
      database_id: None,
      title: title.to_string(),
      template_id: None,
      open_after_create: false,
    }
  }

  pub fn with_database(mut self, database_id: ResourceId) -> Self {
    self.database_id = Some(database_id);
    self
  }

  pub fn with_template(mut self, template_id: ResourceId) -> Self {
    self.template_id = Some(template_id);
    self
  }

  pub fn open_after_create(mut self, open: bool) -> Self {
    self.open_after_create = open;
    self
  }
}

/// Everything submitted to create one page.
#[derive(Debug, Clone, PartialEq)]
pub struct CreationRequest {
  pub database_id: ResourceId,
  pub properties: PropertyMap,
  pub children: Vec<ContentBlock>,
}

impl Serialize for CreationRequest {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    let mut parent = IndexMap::new();
    parent.insert(DATABASE_ID_KEY, &self.database_id);

    let mut map = serializer.serialize_map(Some(3))?;
    map.serialize_entry("parent", &parent)?;
    map.serialize_entry("properties", &self.properties)?;
    map.serialize_entry("children", &self.children)?;
    map.end()
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedPage {
  pub id: ResourceId,
  pub url: String,
}

impl Display for CreatedPage {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{} ({})", self.url, self.id)
  }
}
