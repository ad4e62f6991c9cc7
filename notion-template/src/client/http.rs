use std::time::Duration;

use anyhow::anyhow;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use tracing::trace;

use crate::blocks::ContentBlock;
use crate::client::response::{DatabaseObject, ErrorResponse, ListResponse, PageObject};
use crate::define::{
  NOTION_API_BASE_URL, NOTION_API_VERSION, NOTION_VERSION_HEADER, PAGE_SIZE, REQUEST_TIMEOUT_SECS,
};
use crate::error::ServiceError;
use crate::fields::DatabaseSchema;
use crate::id::ResourceId;
use crate::page::{CreatedPage, CreationRequest, DatabaseSummary, PageRecord};
use crate::service::NotionService;

/// [NotionService] over the public REST API. The integration token and API version travel as
/// default headers, so the client holds no other state between calls.
#[derive(Debug, Clone)]
pub struct NotionClient {
  http: reqwest::Client,
  base_url: String,
}

impl NotionClient {
  pub fn new(token: &str) -> Result<Self, ServiceError> {
    Self::with_base_url(token, NOTION_API_BASE_URL)
  }

  pub fn with_base_url(token: &str, base_url: impl ToString) -> Result<Self, ServiceError> {
    let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
      .map_err(|err| anyhow!("Invalid integration token: {}", err))?;
    auth.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, auth);
    headers.insert(
      NOTION_VERSION_HEADER,
      HeaderValue::from_static(NOTION_API_VERSION),
    );

    let http = reqwest::Client::builder()
      .default_headers(headers)
      .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
      .build()?;

    Ok(Self {
      http,
      base_url: base_url.to_string().trim_end_matches('/').to_string(),
    })
  }

  fn url(&self, path: &str) -> String {
    format!("{}/{}", self.base_url, path)
  }

  async fn get<T: DeserializeOwned>(
    &self,
    path: &str,
    query: &[(&str, String)],
  ) -> Result<T, ServiceError> {
    trace!("GET {}", path);
    self.send(self.http.get(self.url(path)).query(query)).await
  }

  async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ServiceError>
  where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
  {
    trace!("POST {}", path);
    self.send(self.http.post(self.url(path)).json(body)).await
  }

  async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ServiceError> {
    let response = request.send().await?;
    parse_response(response).await
  }
}

async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ServiceError> {
  let status = response.status();
  let bytes = response.bytes().await?;
  if !status.is_success() {
    let error = serde_json::from_slice::<ErrorResponse>(&bytes).unwrap_or_else(|_| ErrorResponse {
      code: String::new(),
      message: String::from_utf8_lossy(&bytes).into_owned(),
    });
    return Err(ServiceError::Api {
      status: status.as_u16(),
      code: error.code,
      message: error.message,
    });
  }
  Ok(serde_json::from_slice(&bytes)?)
}

#[async_trait]
impl NotionService for NotionClient {
  async fn retrieve_database(
    &self,
    database_id: &ResourceId,
  ) -> Result<DatabaseSchema, ServiceError> {
    let object: DatabaseObject = self.get(&format!("databases/{}", database_id), &[]).await?;
    Ok(object.into())
  }

  async fn retrieve_page(&self, page_id: &ResourceId) -> Result<PageRecord, ServiceError> {
    let object: PageObject = self.get(&format!("pages/{}", page_id), &[]).await?;
    Ok(object.into())
  }

  async fn list_block_children(
    &self,
    block_id: &ResourceId,
  ) -> Result<Vec<ContentBlock>, ServiceError> {
    let path = format!("blocks/{}/children", block_id);
    let mut blocks = vec![];
    let mut cursor: Option<String> = None;
    loop {
      let mut query = vec![("page_size", PAGE_SIZE.to_string())];
      if let Some(cursor) = cursor.take() {
        query.push(("start_cursor", cursor));
      }

      let list: ListResponse<ContentBlock> = self.get(&path, &query).await?;
      cursor = list.continuation();
      blocks.extend(list.results);
      if cursor.is_none() {
        break;
      }
    }
    Ok(blocks)
  }

  async fn create_page(&self, request: &CreationRequest) -> Result<CreatedPage, ServiceError> {
    let object: PageObject = self.post("pages", request).await?;
    Ok(object.into())
  }

  async fn search_databases(&self) -> Result<Vec<DatabaseSummary>, ServiceError> {
    let mut databases = vec![];
    let mut cursor: Option<String> = None;
    loop {
      let mut body = Map::new();
      body.insert(
        "filter".to_string(),
        json!({ "value": "database", "property": "object" }),
      );
      body.insert(
        "sort".to_string(),
        json!({ "direction": "ascending", "timestamp": "last_edited_time" }),
      );
      body.insert("page_size".to_string(), json!(PAGE_SIZE));
      if let Some(cursor) = cursor.take() {
        body.insert("start_cursor".to_string(), Value::String(cursor));
      }

      let list: ListResponse<DatabaseObject> = self.post("search", &body).await?;
      cursor = list.continuation();
      databases.extend(list.results.into_iter().map(DatabaseSummary::from));
      if cursor.is_none() {
        break;
      }
    }
    Ok(databases)
  }
}
