use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Value, json};

use crate::define::TYPE_KEY;
use crate::fields::{DatabaseSchema, FieldType};

/// Property values keyed by property name.
pub type PropertyMap = IndexMap<String, PropertyValue>;

/// A typed property value. Serialized as `{"<type>": <payload>}`, the shape the create endpoint
/// expects.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyValue {
  pub field_type: FieldType,
  pub payload: Value,
}

impl PropertyValue {
  pub fn new(field_type: FieldType, payload: Value) -> Self {
    Self {
      field_type,
      payload,
    }
  }

  pub fn title(content: &str) -> Self {
    Self::new(
      FieldType::Title,
      json!([{ "type": "text", "text": { "content": content } }]),
    )
  }

  /// Lifts a property as returned by page retrieval, `{"id": .., "type": "select", "select":
  /// {..}}`, into a [PropertyValue]. Returns `None` when the type tag or its payload is missing.
  pub fn from_page_property(value: &Value) -> Option<Self> {
    let field_type = FieldType::from_type_str(value.get(TYPE_KEY)?.as_str()?);
    let payload = value.get(field_type.as_str())?.clone();
    Some(Self::new(field_type, payload))
  }
}

impl Serialize for PropertyValue {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    let mut map = serializer.serialize_map(Some(1))?;
    map.serialize_entry(self.field_type.as_str(), &self.payload)?;
    map.end()
  }
}

/// Keeps only the values that can be written into a database with the given schema:
/// the property must exist in the schema, must not be computed by the service, and must carry the
/// type the schema declares for it. Input order is preserved.
pub fn filter_for_write(properties: &PropertyMap, schema: &DatabaseSchema) -> PropertyMap {
  properties
    .iter()
    .filter(|(name, value)| match schema.field_type(name) {
      Some(field_type) => !field_type.is_computed() && *field_type == value.field_type,
      None => false,
    })
    .map(|(name, value)| (name.clone(), value.clone()))
    .collect()
}
