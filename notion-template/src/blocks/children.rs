use tracing::{debug, trace};

use crate::blocks::ContentBlock;
use crate::error::NotionError;
use crate::id::ResourceId;
use crate::service::NotionService;

/// Fetches the immediate children of the template page in document order and drops the blocks
/// that can't be duplicated into another page. Nested children are not fetched.
pub async fn fetch_children<S>(
  service: &S,
  template_id: &ResourceId,
) -> Result<Vec<ContentBlock>, NotionError>
where
  S: NotionService + ?Sized,
{
  trace!("fetch children of template: {}", template_id);
  let blocks = service
    .list_block_children(template_id)
    .await
    .map_err(NotionError::BlockFetch)?;

  let total = blocks.len();
  let blocks = blocks
    .into_iter()
    .filter(|block| block.block_type().is_duplicable())
    .collect::<Vec<_>>();
  if blocks.len() != total {
    debug!(
      "skip {} block(s) of template {} that can't be duplicated",
      total - blocks.len(),
      template_id
    );
  }
  Ok(blocks)
}
