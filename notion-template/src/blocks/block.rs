use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::blocks::BlockType;
use crate::define::{OBJECT_KEY, TYPE_KEY};

/// One block of page content, kept as the JSON object the service returned.
///
/// Serializing a block writes only what the create endpoint accepts: `object`, `type` and the
/// payload stored under the type key. Ids, timestamps, authorship and `has_children` are left out.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ContentBlock(Value);

impl ContentBlock {
  pub fn new(value: Value) -> Self {
    Self(value)
  }

  pub fn block_type(&self) -> BlockType {
    self
      .type_str()
      .map(BlockType::from_block_ty)
      .unwrap_or(BlockType::Unsupported)
  }

  pub fn id(&self) -> Option<&str> {
    self.0.get("id").and_then(Value::as_str)
  }

  pub fn raw(&self) -> &Value {
    &self.0
  }

  fn type_str(&self) -> Option<&str> {
    self.0.get(TYPE_KEY).and_then(Value::as_str)
  }
}

impl From<Value> for ContentBlock {
  fn from(value: Value) -> Self {
    Self(value)
  }
}

impl Serialize for ContentBlock {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    let ty = self.type_str();
    let payload = ty.and_then(|ty| self.0.get(ty));

    let len = 1 + usize::from(ty.is_some()) + usize::from(payload.is_some());
    let mut map = serializer.serialize_map(Some(len))?;
    map.serialize_entry(OBJECT_KEY, "block")?;
    if let Some(ty) = ty {
      map.serialize_entry(TYPE_KEY, ty)?;
      if let Some(payload) = payload {
        map.serialize_entry(ty, payload)?;
      }
    }
    map.end()
  }
}
