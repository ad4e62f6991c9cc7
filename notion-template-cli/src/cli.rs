use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::DEFAULT_CONFIG_FILE;

pub const DEFAULT_TITLE: &str = "Untitled";

#[derive(Debug, Parser)]
#[command(
  name = "notion-page",
  version,
  about = "Create Notion database pages, optionally from a template page"
)]
pub struct Cli {
  /// Configuration file location
  #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
  pub config: PathBuf,

  #[command(subcommand)]
  pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
  /// Create a page in a database. The database's default template is applied unless another
  /// template is given.
  New(NewArgs),
  /// Create a page from a template, in the database the template lives in
  Template(TemplateArgs),
  /// Write the configuration file from the databases shared with the integration
  Setup,
}

#[derive(Debug, Clone, Args)]
pub struct NewArgs {
  /// Label or id of the target database
  #[arg(long)]
  pub db: String,

  /// Title of the new page
  #[arg(long, default_value = DEFAULT_TITLE)]
  pub title: String,

  /// Label or id of the template page
  #[arg(long)]
  pub template: Option<String>,

  /// Ignore the database's default template
  #[arg(long, conflicts_with = "template")]
  pub no_template: bool,

  /// Open the created page in the desktop app
  #[arg(long)]
  pub open: bool,
}

#[derive(Debug, Clone, Args)]
pub struct TemplateArgs {
  /// Label or id of the template page
  #[arg(long)]
  pub id: String,

  /// Title of the new page
  #[arg(long, default_value = DEFAULT_TITLE)]
  pub title: String,

  /// Open the created page in the desktop app
  #[arg(long)]
  pub open: bool,
}
