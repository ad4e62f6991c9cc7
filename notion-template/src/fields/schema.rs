use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::NotionError;
use crate::fields::FieldType;
use crate::id::ResourceId;
use crate::service::NotionService;

/// The property definitions of a database, keyed by property name in the order the service
/// returned them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseSchema {
  pub id: ResourceId,
  pub title: String,
  pub fields: IndexMap<String, FieldType>,
}

impl DatabaseSchema {
  pub fn new(id: ResourceId, title: impl ToString) -> Self {
    Self {
      id,
      title: title.to_string(),
      fields: IndexMap::new(),
    }
  }

  pub fn with_field(mut self, name: impl ToString, field_type: FieldType) -> Self {
    self.fields.insert(name.to_string(), field_type);
    self
  }

  pub fn field_type(&self, name: &str) -> Option<&FieldType> {
    self.fields.get(name)
  }

  /// Returns the name of the first field typed as [FieldType::Title]. The service allows at most
  /// one per database.
  pub fn find_title_field(&self) -> Result<&str, NotionError> {
    self
      .fields
      .iter()
      .find(|(_, field_type)| matches!(field_type, FieldType::Title))
      .map(|(name, _)| name.as_str())
      .ok_or_else(|| NotionError::NoTitleField(self.id.clone()))
  }
}

pub async fn fetch_schema<S>(
  service: &S,
  database_id: &ResourceId,
) -> Result<DatabaseSchema, NotionError>
where
  S: NotionService + ?Sized,
{
  trace!("fetch schema of database: {}", database_id);
  service
    .retrieve_database(database_id)
    .await
    .map_err(NotionError::SchemaFetch)
}
