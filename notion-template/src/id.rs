use std::fmt::{Display, Formatter};

use fancy_regex::Regex;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::error::NotionError;

lazy_static! {
  static ref DASHED_ID_REGEX: Regex =
    Regex::new(r"^[a-f0-9]{8}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{12}$").unwrap();
  static ref SIMPLE_ID_REGEX: Regex = Regex::new(r"^[a-f0-9]{32}$").unwrap();
}

/// Identifier of a page, block or database in its dashed `8-4-4-4-12` form.
///
/// The only ways to build one are [ResourceId::normalize] and deserialization, which runs the
/// same normalization, so every `ResourceId` handed to the service is canonical.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourceId(String);

impl ResourceId {
  /// Accepts either 32 lowercase hex characters or the dashed form. Anything else, including
  /// uppercase hex, is rejected.
  pub fn normalize(id: &str) -> Result<Self, NotionError> {
    if is_match(&DASHED_ID_REGEX, id) {
      return Ok(Self(id.to_string()));
    }

    if is_match(&SIMPLE_ID_REGEX, id) {
      let dashed = format!(
        "{}-{}-{}-{}-{}",
        &id[..8],
        &id[8..12],
        &id[12..16],
        &id[16..20],
        &id[20..]
      );
      return Ok(Self(dashed));
    }

    Err(NotionError::InvalidIdentifier(id.to_string()))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// The 32 character form without dashes, as it appears in page urls.
  pub fn simple(&self) -> String {
    self.0.replace('-', "")
  }
}

#[inline]
fn is_match(regex: &Regex, s: &str) -> bool {
  regex.is_match(s).unwrap_or(false)
}

impl TryFrom<String> for ResourceId {
  type Error = NotionError;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    Self::normalize(&value)
  }
}

impl From<ResourceId> for String {
  fn from(id: ResourceId) -> Self {
    id.0
  }
}

impl AsRef<str> for ResourceId {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

impl Display for ResourceId {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.0)
  }
}
