use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, anyhow};
use notion_template::client::NotionClient;
use notion_template::page::{CreatePageParams, PageMaterializer};
use notion_template::service::NotionService;
use tracing::{debug, info};

use crate::cli::{Cli, Command, NewArgs, TemplateArgs};
use crate::config::{Config, ConfigError};

pub const TOKEN_ENV: &str = "NOTION_TOKEN";

pub async fn handle(cli: Cli) -> anyhow::Result<()> {
  match cli.command {
    Command::New(args) => {
      let mut names = vec![args.db.as_str()];
      names.extend(args.template.as_deref());
      let config = Config::load_for(&cli.config, &names)?;
      let params = new_page_params(&config, &args)?;
      create_page(params).await
    },
    Command::Template(args) => {
      let config = Config::load_for(&cli.config, &[args.id.as_str()])?;
      let params = template_page_params(&config, &args)?;
      create_page(params).await
    },
    Command::Setup => setup(&cli.config).await,
  }
}

/// Resolves `new` arguments against the configuration. The database's default template applies
/// unless `--template` or `--no-template` is given.
pub fn new_page_params(config: &Config, args: &NewArgs) -> Result<CreatePageParams, ConfigError> {
  let (database_id, database) = config.resolve_database(&args.db)?;
  let template = match (&args.template, args.no_template) {
    (Some(template), _) => Some(template.as_str()),
    (None, false) => database.and_then(|db| db.template.as_deref()),
    (None, true) => None,
  };

  let mut params = CreatePageParams::new(&args.title)
    .with_database(database_id)
    .open_after_create(args.open);
  if let Some(template) = template {
    params = params.with_template(config.resolve_template(database, template)?);
  }
  Ok(params)
}

pub fn template_page_params(
  config: &Config,
  args: &TemplateArgs,
) -> Result<CreatePageParams, ConfigError> {
  let template_id = config.resolve_template(None, &args.id)?;
  Ok(
    CreatePageParams::new(&args.title)
      .with_template(template_id)
      .open_after_create(args.open),
  )
}

fn connect() -> anyhow::Result<Arc<NotionClient>> {
  let token = std::env::var(TOKEN_ENV)
    .map_err(|_| anyhow!("{} environment variable is not set.", TOKEN_ENV))?;
  Ok(Arc::new(NotionClient::new(&token)?))
}

async fn create_page(params: CreatePageParams) -> anyhow::Result<()> {
  debug!("create page: {:?}", params);
  let client = connect()?;
  let created = PageMaterializer::new(client).create_page(params).await?;
  println!("{}", created.url);
  Ok(())
}

async fn setup(config_path: &Path) -> anyhow::Result<()> {
  let client = connect()?;
  info!("Fetching shared databases...");
  let shared = client
    .search_databases()
    .await
    .context("Error fetching databases")?;
  if shared.is_empty() {
    println!("No shared databases found.");
    return Ok(());
  }

  let count = shared.len();
  let config = Config::load_or_default(config_path)?.merge_shared(shared);
  config
    .save(config_path)
    .with_context(|| format!("Error writing configuration file {}", config_path.display()))?;
  println!(
    "Found {} databases. Configuration written to {}",
    count,
    config_path.display()
  );
  Ok(())
}
