//! `folio show` command implementation.

use clap::Args;
use console::Term;
use folio_config::SiteConfig;

use super::SiteArgs;
use crate::error::CliError;

/// Arguments for the show command.
#[derive(Args)]
pub(crate) struct ShowArgs {
    #[command(flatten)]
    site: SiteArgs,

    /// Print single-line JSON.
    #[arg(long)]
    compact: bool,
}

impl ShowArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let sites = self.site.load()?;
        let sites: Vec<&SiteConfig> = sites.iter().collect();
        let json = render(&sites, self.compact)?;
        Term::stdout().write_line(&json)?;
        Ok(())
    }
}

/// One site renders as an object, several as an array.
fn render(sites: &[&SiteConfig], compact: bool) -> Result<String, serde_json::Error> {
    match (sites, compact) {
        ([site], true) => serde_json::to_string(site),
        ([site], false) => serde_json::to_string_pretty(site),
        (_, true) => serde_json::to_string(sites),
        (_, false) => serde_json::to_string_pretty(sites),
    }
}
