//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod resolve;
pub(crate) mod show;

use std::path::PathBuf;

use clap::Args;
use folio_config::{CliSettings, SiteConfig, SiteSet};

use crate::error::CliError;

pub(crate) use check::CheckArgs;
pub(crate) use resolve::ResolveArgs;
pub(crate) use show::ShowArgs;

/// Which sites to load, shared by every command.
#[derive(Args)]
pub(crate) struct SiteArgs {
    /// Site config file, repeat for several sites (default: auto-discover folio.toml).
    #[arg(short, long = "config")]
    configs: Vec<PathBuf>,

    /// Content source directory (overrides config, single site only).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Site title (overrides config, single site only).
    #[arg(long)]
    title: Option<String>,
}

impl SiteArgs {
    /// Load the selected sites with CLI overrides applied.
    pub(crate) fn load(&self) -> Result<SiteSet, CliError> {
        let settings = CliSettings {
            source_dir: self.source_dir.clone(),
            title: self.title.clone(),
        };

        let sites = if self.configs.is_empty() {
            SiteSet::from_sites(vec![SiteConfig::load(None, Some(&settings))?])
        } else {
            SiteSet::load(&self.configs, Some(&settings))?
        };
        tracing::info!(count = sites.len(), "Loaded sites");
        Ok(sites)
    }
}

/// Label for a site in terminal output.
pub(crate) fn site_label(site: &SiteConfig) -> String {
    site.config_path().map_or_else(
        || format!("(defaults in {})", site.base_dir().display()),
        |path| path.display().to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_site_label_uses_config_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.toml");
        std::fs::write(&path, "title = \"Portfolio\"\n").unwrap();
        let site = SiteConfig::load(Some(&path), None).unwrap();
        assert_eq!(site_label(&site), path.display().to_string());
    }

    #[test]
    fn test_site_label_defaults() {
        let site = SiteConfig::new("/site");
        assert_eq!(site_label(&site), "(defaults in /site)");
    }

    #[test]
    fn test_load_explicit_configs() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.toml");
        let b = dir.path().join("b.toml");
        std::fs::write(&a, "title = \"Alpha\"\n").unwrap();
        std::fs::write(&b, "title = \"Beta\"\n").unwrap();

        let args = SiteArgs {
            configs: vec![a, b],
            source_dir: None,
            title: None,
        };
        let sites = args.load().unwrap();
        assert_eq!(sites.len(), 2);
        assert!(sites.get("Alpha").is_some());
        assert_eq!(
            sites.get("Beta").map(SiteConfig::base_dir),
            Some(dir.path())
        );
    }

    #[test]
    fn test_load_title_override_with_several_configs_fails() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.toml");
        let b = dir.path().join("b.toml");
        std::fs::write(&a, "title = \"Alpha\"\n").unwrap();
        std::fs::write(&b, "title = \"Beta\"\n").unwrap();

        let args = SiteArgs {
            configs: vec![a, b],
            source_dir: None,
            title: Some("Preview".to_owned()),
        };
        assert!(matches!(args.load(), Err(CliError::Config(_))));
    }

    #[test]
    fn test_load_missing_config_fails() {
        let args = SiteArgs {
            configs: vec![Path::new("/definitely/not/here.toml").to_path_buf()],
            source_dir: None,
            title: None,
        };
        assert!(matches!(args.load(), Err(CliError::Config(_))));
    }
}
