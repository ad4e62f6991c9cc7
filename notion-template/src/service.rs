use async_trait::async_trait;

use crate::blocks::ContentBlock;
use crate::error::ServiceError;
use crate::fields::DatabaseSchema;
use crate::id::ResourceId;
use crate::page::{CreatedPage, CreationRequest, DatabaseSummary, PageRecord};

/// The remote calls the page pipeline depends on. [crate::client::NotionClient] talks to the
/// hosted API; tests plug in an in-memory implementation.
#[async_trait]
pub trait NotionService: Send + Sync + 'static {
  async fn retrieve_database(
    &self,
    database_id: &ResourceId,
  ) -> Result<DatabaseSchema, ServiceError>;

  async fn retrieve_page(&self, page_id: &ResourceId) -> Result<PageRecord, ServiceError>;

  /// Returns every immediate child of the block, in document order.
  async fn list_block_children(
    &self,
    block_id: &ResourceId,
  ) -> Result<Vec<ContentBlock>, ServiceError>;

  async fn create_page(&self, request: &CreationRequest) -> Result<CreatedPage, ServiceError>;

  /// Lists the databases shared with the integration, least recently edited first.
  async fn search_databases(&self) -> Result<Vec<DatabaseSummary>, ServiceError>;
}
