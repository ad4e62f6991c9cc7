use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::Subscriber;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_FILTER: &str = "notion_template=info,notion_template_cli=info";

/// Logs go to stderr so stdout only carries command output. `RUST_LOG` overrides the default
/// filter, e.g. `RUST_LOG=notion_template=debug` prints the payloads sent on create.
pub fn init_log() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
  let subscriber = Subscriber::builder()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .finish();
  let _ = subscriber.try_init();
}
