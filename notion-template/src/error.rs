use crate::id::ResourceId;

#[derive(Debug, thiserror::Error)]
pub enum NotionError {
  #[error("Invalid identifier format: '{0}'")]
  InvalidIdentifier(String),

  #[error("Failed to retrieve the database schema: {0}")]
  SchemaFetch(#[source] ServiceError),

  #[error("Failed to fetch template page children: {0}")]
  BlockFetch(#[source] ServiceError),

  #[error("Failed to fetch the template page: {0}")]
  TemplateFetch(#[source] ServiceError),

  #[error("Failed to create the page: {0}")]
  PageCreation(#[source] ServiceError),

  #[error("No title property found in the schema of database {0}")]
  NoTitleField(ResourceId),

  #[error("No target database: pass a database id or a template that lives in a database")]
  NoTargetCollection,

  #[error(transparent)]
  Internal(#[from] anyhow::Error),
}

/// Failures raised by a [crate::service::NotionService] implementation.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
  #[error("Request failed: {0}")]
  Http(#[from] reqwest::Error),

  #[error("Notion API responded with {status} ({code}): {message}")]
  Api {
    status: u16,
    code: String,
    message: String,
  },

  #[error("Unexpected response payload: {0}")]
  Decode(#[from] serde_json::Error),

  #[error(transparent)]
  Internal(#[from] anyhow::Error),
}
