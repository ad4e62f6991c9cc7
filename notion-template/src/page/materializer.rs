use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::blocks::{ContentBlock, fetch_children};
use crate::error::NotionError;
use crate::fields::{DatabaseSchema, PropertyMap, PropertyValue, fetch_schema, filter_for_write};
use crate::id::ResourceId;
use crate::page::{
  CreatePageParams, CreatedPage, CreationRequest, DesktopLauncher, PageLauncher, desktop_url,
};
use crate::service::NotionService;

/// Builds and submits new database pages, optionally seeded from a template page.
///
/// Remote calls are issued one after another: template page, template children, target schema,
/// then the single create call. Nothing is written before the create call, so a failure at any
/// earlier step leaves the workspace untouched.
pub struct PageMaterializer<S> {
  service: Arc<S>,
  launcher: Arc<dyn PageLauncher>,
}

impl<S> PageMaterializer<S>
where
  S: NotionService,
{
  pub fn new(service: Arc<S>) -> Self {
    Self {
      service,
      launcher: Arc::new(DesktopLauncher),
    }
  }

  pub fn with_launcher(mut self, launcher: Arc<dyn PageLauncher>) -> Self {
    self.launcher = launcher;
    self
  }

  pub async fn create_page(&self, params: CreatePageParams) -> Result<CreatedPage, NotionError> {
    let request = self.build_request(&params).await?;
    debug!(
      "create page with properties: {}",
      serde_json::to_string(&request.properties).unwrap_or_default()
    );
    debug!("create page with {} children", request.children.len());

    let created = self
      .service
      .create_page(&request)
      .await
      .map_err(NotionError::PageCreation)?;
    info!("Page created successfully: {}", created.url);

    if params.open_after_create {
      self.open(&created);
    }
    Ok(created)
  }

  /// Resolves the target database and assembles the request without submitting it.
  pub async fn build_request(
    &self,
    params: &CreatePageParams,
  ) -> Result<CreationRequest, NotionError> {
    let mut properties = PropertyMap::new();
    let mut children = Vec::<ContentBlock>::new();
    let mut database_id = params.database_id.clone();
    let mut fetched: Option<(ResourceId, DatabaseSchema)> = None;

    if let Some(template_id) = &params.template_id {
      let template = self
        .service
        .retrieve_page(template_id)
        .await
        .map_err(NotionError::TemplateFetch)?;

      if database_id.is_none() {
        match template.parent.database_id() {
          Some(parent_id) => {
            debug!("use template parent database: {}", parent_id);
            database_id = Some(parent_id.clone());
          },
          None => return Err(NotionError::NoTargetCollection),
        }
      }

      children = fetch_children(self.service.as_ref(), template_id).await?;

      if let Some(database_id) = &database_id {
        let target_schema = fetch_schema(self.service.as_ref(), database_id).await?;
        let template_properties = template
          .properties
          .iter()
          .filter_map(|(name, value)| {
            PropertyValue::from_page_property(value).map(|value| (name.clone(), value))
          })
          .collect::<PropertyMap>();
        properties.extend(filter_for_write(&template_properties, &target_schema));
        fetched = Some((database_id.clone(), target_schema));
      }
    }

    let database_id = database_id.ok_or(NotionError::NoTargetCollection)?;
    let schema = match fetched {
      Some((fetched_id, schema)) if fetched_id == database_id => schema,
      _ => fetch_schema(self.service.as_ref(), &database_id).await?,
    };

    let title_field = schema.find_title_field()?;
    properties.insert(title_field.to_string(), PropertyValue::title(&params.title));

    Ok(CreationRequest {
      database_id,
      properties,
      children,
    })
  }

  fn open(&self, page: &CreatedPage) {
    let url = desktop_url(&page.url);
    info!("Opening page: {}", url);
    if let Err(err) = self.launcher.launch(&url) {
      warn!("Failed to open page {}: {}", url, err);
    }
  }
}
