pub mod blocks;
pub mod client;
pub mod define;
pub mod error;
pub mod fields;
pub mod id;
pub mod page;
pub mod service;

pub mod preclude {
  pub use crate::blocks::*;
  pub use crate::client::NotionClient;
  pub use crate::error::{NotionError, ServiceError};
  pub use crate::fields::*;
  pub use crate::id::ResourceId;
  pub use crate::page::*;
  pub use crate::service::NotionService;
}
