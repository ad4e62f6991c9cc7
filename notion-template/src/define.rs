// Service endpoint
pub const NOTION_API_BASE_URL: &str = "https://api.notion.com/v1";
pub const NOTION_API_VERSION: &str = "2022-06-28";
pub const NOTION_VERSION_HEADER: &str = "notion-version";
pub const PAGE_SIZE: u32 = 100;
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Wire keys
pub const TYPE_KEY: &str = "type";
pub const OBJECT_KEY: &str = "object";
pub const DATABASE_ID_KEY: &str = "database_id";

// Url schemes
pub const WEB_URL_PREFIX: &str = "https://";
pub const DESKTOP_URL_PREFIX: &str = "notion://";
