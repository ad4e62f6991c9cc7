use std::path::PathBuf;

use notion_template_cli::config::{Config, DatabaseEntry, TemplateEntry};
use tempfile::TempDir;

pub const TASKS_ID: &str = "0123456789abcdef0123456789abcdef";
pub const JOURNAL_ID: &str = "fedcba98-7654-3210-fedc-ba9876543210";
pub const WEEKLY_ID: &str = "11111111222233334444555555555555";
pub const BUG_ID: &str = "aaaaaaaa-bbbb-cccc-dddd-eeeeeeeeeeee";
pub const ENTRY_ID: &str = "99999999888877776666555555555555";

pub fn sample_config() -> Config {
  Config {
    databases: vec![
      DatabaseEntry {
        label: "Tasks".to_string(),
        id: TASKS_ID.to_string(),
        template: Some("Weekly".to_string()),
        templates: vec![
          TemplateEntry {
            label: "Weekly".to_string(),
            id: WEEKLY_ID.to_string(),
          },
          TemplateEntry {
            label: "Bug".to_string(),
            id: BUG_ID.to_string(),
          },
        ],
      },
      DatabaseEntry {
        label: "Journal".to_string(),
        id: JOURNAL_ID.to_string(),
        template: None,
        templates: vec![TemplateEntry {
          label: "Entry".to_string(),
          id: ENTRY_ID.to_string(),
        }],
      },
    ],
  }
}

pub fn write_config(content: &str) -> (TempDir, PathBuf) {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("config.json");
  std::fs::write(&path, content).unwrap();
  (dir, path)
}
