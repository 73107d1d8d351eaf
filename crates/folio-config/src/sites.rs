//! Several sites loaded side by side.
//!
//! Each site file is loaded on its own into its own [`SiteConfig`]; nothing
//! resolved for one site is visible to another.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::{CliSettings, ConfigError, ConfigurationError, SiteConfig};

/// Independently loaded site configurations, in load order.
#[derive(Debug, Default)]
pub struct SiteSet {
    sites: Vec<SiteConfig>,
}

impl SiteSet {
    /// Load every site file in `paths`.
    ///
    /// `source_dir` and `title` overrides in `cli_settings` only apply when a
    /// single site is loaded; they are what tells sites apart.
    ///
    /// # Errors
    ///
    /// Returns the first load error, `ConfigError::Validation` if the same
    /// file is listed twice or an override would be shared by several sites.
    pub fn load<P: AsRef<Path>>(
        paths: &[P],
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        if paths.len() > 1
            && let Some(settings) = cli_settings
        {
            if settings.source_dir.is_some() {
                return Err(ConfigError::Validation(
                    "a source directory override cannot be shared by several sites".to_owned(),
                ));
            }
            if settings.title.is_some() {
                return Err(ConfigError::Validation(
                    "a title override cannot be shared by several sites".to_owned(),
                ));
            }
        }

        let mut seen: Vec<PathBuf> = Vec::with_capacity(paths.len());
        let mut sites = Vec::with_capacity(paths.len());
        for path in paths {
            let path = path.as_ref();
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            let canonical = path.canonicalize()?;
            if seen.contains(&canonical) {
                return Err(ConfigError::Validation(format!(
                    "{} is listed more than once",
                    path.display()
                )));
            }
            seen.push(canonical);
            sites.push(SiteConfig::load(Some(path), cli_settings)?);
        }

        Ok(Self::from_sites(sites))
    }

    /// Collect already-built configs.
    #[must_use]
    pub fn from_sites(sites: Vec<SiteConfig>) -> Self {
        warn_shared_source_dirs(&sites);
        Self { sites }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SiteConfig> {
        self.sites.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// First site with the given title.
    #[must_use]
    pub fn get(&self, title: &str) -> Option<&SiteConfig> {
        self.sites.iter().find(|site| site.title() == title)
    }

    /// Run [`SiteConfig::check`] on every site.
    ///
    /// Only sites with problems are returned.
    #[must_use]
    pub fn check(&self) -> Vec<(&SiteConfig, Vec<ConfigurationError>)> {
        self.sites
            .iter()
            .map(|site| (site, site.check()))
            .filter(|(_, errors)| !errors.is_empty())
            .collect()
    }
}

impl<'a> IntoIterator for &'a SiteSet {
    type Item = &'a SiteConfig;
    type IntoIter = std::slice::Iter<'a, SiteConfig>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Sites building from one source tree are usually a copy-paste leftover.
fn warn_shared_source_dirs(sites: &[SiteConfig]) {
    let mut by_source: HashMap<PathBuf, &str> = HashMap::new();
    for site in sites {
        if let Some(other) = by_source.insert(site.source_dir(), site.title()) {
            tracing::warn!(
                source_dir = %site.source_dir().display(),
                first = %other,
                second = %site.title(),
                "Two sites share a source directory"
            );
        }
    }
}
