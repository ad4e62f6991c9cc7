use clap::Parser;
use notion_template_cli::cli::Cli;
use notion_template_cli::commands;
use notion_template_cli::log::init_log;

#[tokio::main]
async fn main() {
  dotenv::dotenv().ok();
  init_log();

  let cli = Cli::parse();
  if let Err(err) = commands::handle(cli).await {
    eprintln!("Error: {:#}", err);
    std::process::exit(1);
  }
}
