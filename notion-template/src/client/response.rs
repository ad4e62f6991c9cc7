use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::fields::{DatabaseSchema, FieldType};
use crate::id::ResourceId;
use crate::page::{CreatedPage, DatabaseSummary, PageParent, PageRecord};

#[derive(Debug, Deserialize)]
pub(crate) struct DatabaseObject {
  pub id: ResourceId,
  #[serde(default)]
  pub title: Vec<RichTextObject>,
  #[serde(default)]
  pub properties: IndexMap<String, PropertyDefinition>,
}

impl DatabaseObject {
  fn plain_title(&self) -> String {
    self
      .title
      .iter()
      .map(|text| text.plain_text.as_str())
      .collect::<String>()
  }
}

#[derive(Debug, Deserialize)]
pub(crate) struct PropertyDefinition {
  #[serde(rename = "type")]
  pub field_type: FieldType,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RichTextObject {
  #[serde(default)]
  pub plain_text: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PageObject {
  pub id: ResourceId,
  pub url: String,
  pub parent: ParentObject,
  #[serde(default)]
  pub properties: IndexMap<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum ParentObject {
  DatabaseId { database_id: ResourceId },
  DataSourceId { database_id: ResourceId },
  PageId { page_id: ResourceId },
  BlockId { block_id: ResourceId },
  Workspace,
  #[serde(other)]
  Unknown,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListResponse<T> {
  pub results: Vec<T>,
  #[serde(default)]
  pub next_cursor: Option<String>,
  #[serde(default)]
  pub has_more: bool,
}

impl<T> ListResponse<T> {
  /// The cursor to continue from, if the service has more results.
  pub fn continuation(&self) -> Option<String> {
    if self.has_more {
      self.next_cursor.clone()
    } else {
      None
    }
  }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
  #[serde(default)]
  pub code: String,
  #[serde(default)]
  pub message: String,
}

impl From<DatabaseObject> for DatabaseSchema {
  fn from(object: DatabaseObject) -> Self {
    let title = object.plain_title();
    DatabaseSchema {
      id: object.id,
      title,
      fields: object
        .properties
        .into_iter()
        .map(|(name, definition)| (name, definition.field_type))
        .collect(),
    }
  }
}

impl From<DatabaseObject> for DatabaseSummary {
  fn from(object: DatabaseObject) -> Self {
    let title = object.plain_title();
    DatabaseSummary {
      id: object.id,
      title,
    }
  }
}

impl From<ParentObject> for PageParent {
  fn from(parent: ParentObject) -> Self {
    match parent {
      ParentObject::DatabaseId { database_id } => PageParent::Database(database_id),
      ParentObject::DataSourceId { database_id } => PageParent::DataSource { database_id },
      ParentObject::PageId { page_id } => PageParent::Page(page_id),
      ParentObject::BlockId { block_id } => PageParent::Block(block_id),
      ParentObject::Workspace => PageParent::Workspace,
      ParentObject::Unknown => PageParent::Unknown,
    }
  }
}

impl From<PageObject> for PageRecord {
  fn from(object: PageObject) -> Self {
    PageRecord {
      id: object.id,
      url: object.url,
      parent: object.parent.into(),
      properties: object.properties,
    }
  }
}

impl From<PageObject> for CreatedPage {
  fn from(object: PageObject) -> Self {
    CreatedPage {
      id: object.id,
      url: object.url,
    }
  }
}
