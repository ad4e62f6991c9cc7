use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BlockType {
  Paragraph,
  Heading1,
  Heading2,
  Heading3,
  BulletedListItem,
  NumberedListItem,
  ToDo,
  Toggle,
  Quote,
  Callout,
  Code,
  Divider,
  Equation,
  Image,
  Video,
  File,
  Pdf,
  Bookmark,
  Embed,
  LinkPreview,
  LinkToPage,
  TableOfContents,
  Breadcrumb,
  Table,
  TableRow,
  ColumnList,
  Column,
  SyncedBlock,
  Template,
  ChildPage,
  ChildDatabase,
  Unsupported,
  Custom(String),
}

impl BlockType {
  pub fn as_str(&self) -> &str {
    match self {
      BlockType::Paragraph => "paragraph",
      BlockType::Heading1 => "heading_1",
      BlockType::Heading2 => "heading_2",
      BlockType::Heading3 => "heading_3",
      BlockType::BulletedListItem => "bulleted_list_item",
      BlockType::NumberedListItem => "numbered_list_item",
      BlockType::ToDo => "to_do",
      BlockType::Toggle => "toggle",
      BlockType::Quote => "quote",
      BlockType::Callout => "callout",
      BlockType::Code => "code",
      BlockType::Divider => "divider",
      BlockType::Equation => "equation",
      BlockType::Image => "image",
      BlockType::Video => "video",
      BlockType::File => "file",
      BlockType::Pdf => "pdf",
      BlockType::Bookmark => "bookmark",
      BlockType::Embed => "embed",
      BlockType::LinkPreview => "link_preview",
      BlockType::LinkToPage => "link_to_page",
      BlockType::TableOfContents => "table_of_contents",
      BlockType::Breadcrumb => "breadcrumb",
      BlockType::Table => "table",
      BlockType::TableRow => "table_row",
      BlockType::ColumnList => "column_list",
      BlockType::Column => "column",
      BlockType::SyncedBlock => "synced_block",
      BlockType::Template => "template",
      BlockType::ChildPage => "child_page",
      BlockType::ChildDatabase => "child_database",
      BlockType::Unsupported => "unsupported",
      BlockType::Custom(s) => s,
    }
  }

  pub fn from_block_ty(s: &str) -> Self {
    match s {
      "paragraph" => BlockType::Paragraph,
      "heading_1" => BlockType::Heading1,
      "heading_2" => BlockType::Heading2,
      "heading_3" => BlockType::Heading3,
      "bulleted_list_item" => BlockType::BulletedListItem,
      "numbered_list_item" => BlockType::NumberedListItem,
      "to_do" => BlockType::ToDo,
      "toggle" => BlockType::Toggle,
      "quote" => BlockType::Quote,
      "callout" => BlockType::Callout,
      "code" => BlockType::Code,
      "divider" => BlockType::Divider,
      "equation" => BlockType::Equation,
      "image" => BlockType::Image,
      "video" => BlockType::Video,
      "file" => BlockType::File,
      "pdf" => BlockType::Pdf,
      "bookmark" => BlockType::Bookmark,
      "embed" => BlockType::Embed,
      "link_preview" => BlockType::LinkPreview,
      "link_to_page" => BlockType::LinkToPage,
      "table_of_contents" => BlockType::TableOfContents,
      "breadcrumb" => BlockType::Breadcrumb,
      "table" => BlockType::Table,
      "table_row" => BlockType::TableRow,
      "column_list" => BlockType::ColumnList,
      "column" => BlockType::Column,
      "synced_block" => BlockType::SyncedBlock,
      "template" => BlockType::Template,
      "child_page" => BlockType::ChildPage,
      "child_database" => BlockType::ChildDatabase,
      "unsupported" => BlockType::Unsupported,
      _ => BlockType::Custom(s.to_string()),
    }
  }

  /// A child page block points at a page owned by the template. Copying it would leave the new
  /// page with a reference it does not own.
  pub fn is_duplicable(&self) -> bool {
    !matches!(self, BlockType::ChildPage)
  }
}

impl Display for BlockType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}
