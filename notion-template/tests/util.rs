#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Once;

use anyhow::anyhow;
use async_trait::async_trait;
use indexmap::IndexMap;
use notion_template::blocks::ContentBlock;
use notion_template::error::ServiceError;
use notion_template::fields::DatabaseSchema;
use notion_template::id::ResourceId;
use notion_template::page::{
  CreatedPage, CreationRequest, DatabaseSummary, PageLauncher, PageParent, PageRecord,
};
use notion_template::service::NotionService;
use parking_lot::Mutex;
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::Subscriber;
use tracing_subscriber::util::SubscriberInitExt;

pub fn setup_log() {
  static START: Once = Once::new();
  START.call_once(|| {
    let subscriber = Subscriber::builder()
      .with_env_filter(EnvFilter::new("notion_template=trace"))
      .with_ansi(true)
      .finish();
    subscriber.try_init().unwrap();
  });
}

pub fn random_id() -> ResourceId {
  ResourceId::normalize(&uuid::Uuid::new_v4().simple().to_string()).unwrap()
}

#[derive(Debug, Clone, PartialEq)]
pub enum ServiceCall {
  RetrieveDatabase(ResourceId),
  RetrievePage(ResourceId),
  ListBlockChildren(ResourceId),
  CreatePage(ResourceId),
  SearchDatabases,
}

/// In-memory [NotionService] that records every call it receives.
#[derive(Default)]
pub struct MockNotionService {
  databases: HashMap<ResourceId, DatabaseSchema>,
  pages: HashMap<ResourceId, PageRecord>,
  children: HashMap<ResourceId, Vec<ContentBlock>>,
  reject_create: bool,
  calls: Mutex<Vec<ServiceCall>>,
  created: Mutex<Vec<CreationRequest>>,
}

impl MockNotionService {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_database(mut self, schema: DatabaseSchema) -> Self {
    self.databases.insert(schema.id.clone(), schema);
    self
  }

  pub fn with_page(mut self, page: PageRecord) -> Self {
    self.pages.insert(page.id.clone(), page);
    self
  }

  pub fn with_children(mut self, block_id: &ResourceId, children: Vec<Value>) -> Self {
    self.children.insert(
      block_id.clone(),
      children.into_iter().map(ContentBlock::new).collect(),
    );
    self
  }

  pub fn reject_create(mut self) -> Self {
    self.reject_create = true;
    self
  }

  pub fn calls(&self) -> Vec<ServiceCall> {
    self.calls.lock().clone()
  }

  pub fn created(&self) -> Vec<CreationRequest> {
    self.created.lock().clone()
  }

  fn record(&self, call: ServiceCall) {
    self.calls.lock().push(call);
  }
}

fn not_found(id: &ResourceId) -> ServiceError {
  ServiceError::Api {
    status: 404,
    code: "object_not_found".to_string(),
    message: format!("Could not find object with ID: {}.", id),
  }
}

#[async_trait]
impl NotionService for MockNotionService {
  async fn retrieve_database(
    &self,
    database_id: &ResourceId,
  ) -> Result<DatabaseSchema, ServiceError> {
    self.record(ServiceCall::RetrieveDatabase(database_id.clone()));
    self
      .databases
      .get(database_id)
      .cloned()
      .ok_or_else(|| not_found(database_id))
  }

  async fn retrieve_page(&self, page_id: &ResourceId) -> Result<PageRecord, ServiceError> {
    self.record(ServiceCall::RetrievePage(page_id.clone()));
    self
      .pages
      .get(page_id)
      .cloned()
      .ok_or_else(|| not_found(page_id))
  }

  async fn list_block_children(
    &self,
    block_id: &ResourceId,
  ) -> Result<Vec<ContentBlock>, ServiceError> {
    self.record(ServiceCall::ListBlockChildren(block_id.clone()));
    self
      .children
      .get(block_id)
      .cloned()
      .ok_or_else(|| not_found(block_id))
  }

  async fn create_page(&self, request: &CreationRequest) -> Result<CreatedPage, ServiceError> {
    self.record(ServiceCall::CreatePage(request.database_id.clone()));
    if self.reject_create {
      return Err(ServiceError::Api {
        status: 400,
        code: "validation_error".to_string(),
        message: "body failed validation".to_string(),
      });
    }

    self.created.lock().push(request.clone());
    let id = random_id();
    let url = format!("https://www.notion.so/New-Page-{}", id.simple());
    Ok(CreatedPage { id, url })
  }

  async fn search_databases(&self) -> Result<Vec<DatabaseSummary>, ServiceError> {
    self.record(ServiceCall::SearchDatabases);
    Ok(
      self
        .databases
        .values()
        .map(|schema| DatabaseSummary {
          id: schema.id.clone(),
          title: schema.title.clone(),
        })
        .collect(),
    )
  }
}

pub fn template_page(id: ResourceId, parent: PageParent, properties: Value) -> PageRecord {
  let properties = properties
    .as_object()
    .map(|object| {
      object
        .iter()
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect::<IndexMap<_, _>>()
    })
    .unwrap_or_default();

  PageRecord {
    url: format!("https://www.notion.so/Template-{}", id.simple()),
    id,
    parent,
    properties,
  }
}

pub fn paragraph_block(text: &str) -> Value {
  json!({
    "object": "block",
    "id": random_id().to_string(),
    "type": "paragraph",
    "created_time": "2024-01-01T00:00:00.000Z",
    "last_edited_time": "2024-01-01T00:00:00.000Z",
    "has_children": false,
    "archived": false,
    "paragraph": {
      "rich_text": [{ "type": "text", "text": { "content": text }, "plain_text": text }],
      "color": "default"
    }
  })
}

pub fn child_page_block(title: &str) -> Value {
  json!({
    "object": "block",
    "id": random_id().to_string(),
    "type": "child_page",
    "has_children": true,
    "child_page": { "title": title }
  })
}

#[derive(Default)]
pub struct RecordingLauncher {
  pub urls: Mutex<Vec<String>>,
  fail: bool,
}

impl RecordingLauncher {
  pub fn failing() -> Self {
    Self {
      urls: Mutex::new(vec![]),
      fail: true,
    }
  }
}

impl PageLauncher for RecordingLauncher {
  fn launch(&self, url: &str) -> Result<(), anyhow::Error> {
    self.urls.lock().push(url.to_string());
    if self.fail {
      return Err(anyhow!("no handler registered for notion://"));
    }
    Ok(())
  }
}
