use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The type tag of a database property. The tag doubles as the key of the property payload on the
/// wire, e.g. `{"select": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
  Title,
  RichText,
  Number,
  Select,
  MultiSelect,
  Status,
  Date,
  People,
  Files,
  Checkbox,
  Url,
  Email,
  PhoneNumber,
  Formula,
  Relation,
  Rollup,
  CreatedTime,
  CreatedBy,
  LastEditedTime,
  LastEditedBy,
  UniqueId,
  Verification,
  Button,
  Custom(String),
}

impl FieldType {
  pub fn as_str(&self) -> &str {
    match self {
      FieldType::Title => "title",
      FieldType::RichText => "rich_text",
      FieldType::Number => "number",
      FieldType::Select => "select",
      FieldType::MultiSelect => "multi_select",
      FieldType::Status => "status",
      FieldType::Date => "date",
      FieldType::People => "people",
      FieldType::Files => "files",
      FieldType::Checkbox => "checkbox",
      FieldType::Url => "url",
      FieldType::Email => "email",
      FieldType::PhoneNumber => "phone_number",
      FieldType::Formula => "formula",
      FieldType::Relation => "relation",
      FieldType::Rollup => "rollup",
      FieldType::CreatedTime => "created_time",
      FieldType::CreatedBy => "created_by",
      FieldType::LastEditedTime => "last_edited_time",
      FieldType::LastEditedBy => "last_edited_by",
      FieldType::UniqueId => "unique_id",
      FieldType::Verification => "verification",
      FieldType::Button => "button",
      FieldType::Custom(s) => s,
    }
  }

  pub fn from_type_str(s: &str) -> Self {
    match s {
      "title" => FieldType::Title,
      "rich_text" => FieldType::RichText,
      "number" => FieldType::Number,
      "select" => FieldType::Select,
      "multi_select" => FieldType::MultiSelect,
      "status" => FieldType::Status,
      "date" => FieldType::Date,
      "people" => FieldType::People,
      "files" => FieldType::Files,
      "checkbox" => FieldType::Checkbox,
      "url" => FieldType::Url,
      "email" => FieldType::Email,
      "phone_number" => FieldType::PhoneNumber,
      "formula" => FieldType::Formula,
      "relation" => FieldType::Relation,
      "rollup" => FieldType::Rollup,
      "created_time" => FieldType::CreatedTime,
      "created_by" => FieldType::CreatedBy,
      "last_edited_time" => FieldType::LastEditedTime,
      "last_edited_by" => FieldType::LastEditedBy,
      "unique_id" => FieldType::UniqueId,
      "verification" => FieldType::Verification,
      "button" => FieldType::Button,
      _ => FieldType::Custom(s.to_string()),
    }
  }

  /// Fields the service computes itself. Writing them in a create request is rejected or ignored,
  /// so they are never copied from a template.
  pub fn is_computed(&self) -> bool {
    matches!(
      self,
      FieldType::Rollup
        | FieldType::Formula
        | FieldType::CreatedBy
        | FieldType::CreatedTime
        | FieldType::LastEditedBy
        | FieldType::LastEditedTime
        | FieldType::UniqueId
        | FieldType::Button
    )
  }
}

impl From<String> for FieldType {
  fn from(s: String) -> Self {
    FieldType::from_type_str(&s)
  }
}

impl From<FieldType> for String {
  fn from(field_type: FieldType) -> Self {
    field_type.as_str().to_string()
  }
}

impl Display for FieldType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}
