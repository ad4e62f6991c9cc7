use anyhow::Error;

use crate::define::{DESKTOP_URL_PREFIX, WEB_URL_PREFIX};

/// Opens a created page for the user.
pub trait PageLauncher: Send + Sync {
  fn launch(&self, url: &str) -> Result<(), Error>;
}

/// Hands the url to the operating system, which routes the `notion://` scheme to the desktop app.
#[derive(Debug, Default, Clone, Copy)]
pub struct DesktopLauncher;

impl PageLauncher for DesktopLauncher {
  fn launch(&self, url: &str) -> Result<(), Error> {
    open::that(url)?;
    Ok(())
  }
}

/// Rewrites a page's web url to the desktop app scheme, keeping host and path.
pub fn desktop_url(web_url: &str) -> String {
  match web_url.strip_prefix(WEB_URL_PREFIX) {
    Some(rest) => format!("{}{}", DESKTOP_URL_PREFIX, rest),
    None => web_url.to_string(),
  }
}
