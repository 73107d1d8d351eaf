//! `folio check` command implementation.

use clap::Args;

use super::{SiteArgs, site_label};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    site: SiteArgs,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if a config fails to load or any site references a
    /// path that does not exist.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let sites = self.site.load()?;
        let failing = sites.check();

        for site in &sites {
            output.site(site.title(), &site_label(site));
            match failing.iter().find(|(s, _)| std::ptr::eq(*s, site)) {
                Some((_, errors)) => {
                    for error in errors {
                        output.issue(&error.to_string());
                    }
                }
                None => output.success("  ok"),
            }
        }

        if failing.is_empty() {
            output.info(&format!("{} site(s) ready to build", sites.len()));
            Ok(())
        } else {
            Err(CliError::Check {
                count: failing.len(),
                total: sites.len(),
            })
        }
    }
}
