//! `folio resolve` command implementation.

use clap::Args;
use console::Term;

use super::SiteArgs;
use crate::error::CliError;

/// Arguments for the resolve command.
#[derive(Args)]
pub(crate) struct ResolveArgs {
    /// Import specifier, e.g. `@/components/Card.vue`.
    specifier: String,

    #[command(flatten)]
    site: SiteArgs,
}

impl ResolveArgs {
    /// Print the resolved path for every loaded site.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Unresolved` if a site has no alias for the specifier.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let sites = self.site.load()?;
        let stdout = Term::stdout();
        for site in &sites {
            let path = site
                .resolve_import(&self.specifier)
                .ok_or_else(|| CliError::Unresolved(self.specifier.clone()))?;
            if sites.len() > 1 {
                stdout.write_line(&format!("{}\t{}", site.title(), path.display()))?;
            } else {
                stdout.write_line(&path.display().to_string())?;
            }
        }
        Ok(())
    }
}
