//! Site configuration for folio.
//!
//! Parses `folio.toml` site files with serde and hands the renderer a single
//! immutable [`SiteConfig`] per site. Config files are auto-discovered in
//! the current directory and its parents.
//!
//! ```toml
//! title = "Portfolio"
//! description = "Selected work"
//! source_dir = "src"
//!
//! [theme]
//! navigation = false
//! sidebar = false
//! social_links = false
//! site_title = false
//! logo = "/logo.svg"
//!
//! [build]
//! transforms = ["image"]
//!
//! [build.alias]
//! "@" = "src"
//! ```
//!
//! Relative paths resolve against the directory of the config file. Sites
//! can share settings by naming a base file with `extends = "base.toml"`;
//! the base is merged underneath, except for `title` and `description`.
//! Several sites can be loaded side by side with [`SiteSet`].
//!
//! Loading checks the shape of the file only. Whether referenced paths
//! exist is answered by [`SiteConfig::check`].
//!
//! ## Environment Variable Expansion
//!
//! `title`, `description` and `theme.logo` support `${VAR}` (error if unset)
//! and `${VAR:-default}`.

mod build_options;
mod check;
mod expand;
mod extends;
mod sites;
mod theme;

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use build_options::{BuildOptions, ContentTransform};
pub use check::ConfigurationError;
pub use sites::SiteSet;
pub use theme::{NavItem, SidebarItem, SocialLink, ThemeConfig, Toggle};

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "folio.toml";

const DEFAULT_SOURCE_DIR: &str = "src";
const DEFAULT_PUBLIC_DIR: &str = "public";

/// CLI settings that override configuration file values.
///
/// Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override content source directory.
    pub source_dir: Option<PathBuf>,
    /// Override site title.
    pub title: Option<String>,
}

/// Site file as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SiteFile {
    title: String,
    description: String,
    source_dir: Option<String>,
    public_dir: Option<String>,
    theme: ThemeConfig,
    build: BuildOptions,
}

impl SiteFile {
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.title = expand::expand_env(&self.title, "title")?;
        self.description = expand::expand_env(&self.description, "description")?;
        expand::expand_opt(&mut self.theme.logo, "theme.logo")?;
        Ok(())
    }
}

/// Configuration of one site.
///
/// Immutable once built: read it through the accessors and share it by
/// reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteConfig {
    title: String,
    description: String,
    /// Resolved content directory.
    source_dir: PathBuf,
    /// Static asset directory, relative to `source_dir`.
    public_dir: PathBuf,
    theme: ThemeConfig,
    build: BuildOptions,
    /// Directory relative paths resolve against.
    base_dir: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    config_path: Option<PathBuf>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`theme.logo`").
        field: String,
        /// Error message (e.g., "${`SITE_LOGO`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
pub(crate) fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn is_remote(reference: &str) -> bool {
    reference.starts_with("http://") || reference.starts_with("https://")
}

/// True if joining `rel` onto a directory stays inside that directory.
fn stays_inside(rel: &str) -> bool {
    Path::new(rel)
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

impl SiteConfig {
    /// Create a config with defaults, rooted at `base_dir`.
    ///
    /// Performs no I/O.
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        Self {
            title: String::new(),
            description: String::new(),
            source_dir: base_dir.join(DEFAULT_SOURCE_DIR),
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            theme: ThemeConfig::default(),
            build: BuildOptions::default(),
            base_dir,
            config_path: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the source directory, relative to the base directory.
    #[must_use]
    pub fn with_source_dir(mut self, source_dir: impl AsRef<Path>) -> Self {
        self.source_dir = self.base_dir.join(source_dir);
        self
    }

    /// Set the static asset directory, relative to the source directory.
    #[must_use]
    pub fn with_public_dir(mut self, public_dir: impl Into<PathBuf>) -> Self {
        self.public_dir = public_dir.into();
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: ThemeConfig) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_build(mut self, build: BuildOptions) -> Self {
        self.build = build;
        self
    }

    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `folio.toml` in current directory and parents,
    /// falling back to defaults rooted at the current directory.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
            Self::new(std::env::current_dir().unwrap_or_default())
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Load configuration from a specific file, following `extends`.
    ///
    /// # Errors
    ///
    /// Returns error if the file or one of its bases can't be read or parsed,
    /// an environment variable is unset, or a value is malformed.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let table = extends::read_merged(path)?;
        let mut file: SiteFile = toml::Value::Table(table).try_into()?;

        // Expand environment variables before path resolution
        file.expand_env_vars()?;

        let base_dir = path.parent().unwrap_or(Path::new("."));
        let mut config = Self::from_file(file, base_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        tracing::debug!(
            path = %path.display(),
            title = %config.title,
            source_dir = %config.source_dir.display(),
            "Loaded site config"
        );
        Ok(config)
    }

    fn from_file(file: SiteFile, base_dir: &Path) -> Self {
        let mut config = Self::new(base_dir)
            .with_title(file.title)
            .with_description(file.description)
            .with_theme(file.theme)
            .with_build(file.build);
        if let Some(source_dir) = file.source_dir {
            config = config.with_source_dir(source_dir);
        }
        if let Some(public_dir) = file.public_dir {
            config = config.with_public_dir(public_dir);
        }
        config
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.source_dir.clone_from(source_dir);
        }
        if let Some(title) = &settings.title {
            self.title.clone_from(title);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        discover_from(&current)
    }

    /// Validate the shape of configuration values.
    ///
    /// Called automatically after loading from file. Does not look at the
    /// filesystem; see [`SiteConfig::check`] for that.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source_dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "source_dir cannot be empty".to_owned(),
            ));
        }
        if self.public_dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "public_dir cannot be empty".to_owned(),
            ));
        }
        if let Some(logo) = &self.theme.logo {
            require_non_empty(logo, "theme.logo")?;
            if !is_remote(logo) && !stays_inside(logo.trim_start_matches('/')) {
                return Err(ConfigError::Validation(format!(
                    "theme.logo {logo} points outside the site"
                )));
            }
        }
        self.build.validate()
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Content source directory.
    #[must_use]
    pub fn source_dir(&self) -> PathBuf {
        self.source_dir.clone()
    }

    /// Static asset directory (`public/` under the source directory).
    #[must_use]
    pub fn public_dir(&self) -> PathBuf {
        self.source_dir.join(&self.public_dir)
    }

    #[must_use]
    pub fn theme(&self) -> &ThemeConfig {
        &self.theme
    }

    #[must_use]
    pub fn build(&self) -> &BuildOptions {
        &self.build
    }

    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path of the file this config was loaded from.
    #[must_use]
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Where the logo lives on disk.
    ///
    /// `/logo.svg` resolves inside the public directory, other relative
    /// values inside the source directory. Remote logos have no local file.
    #[must_use]
    pub fn logo_file(&self) -> Option<PathBuf> {
        let logo = self.theme.logo.as_deref()?;
        if is_remote(logo) {
            return None;
        }
        Some(if logo.starts_with('/') {
            self.public_dir().join(logo.trim_start_matches('/'))
        } else {
            self.source_dir.join(logo)
        })
    }

    /// Alias names with their resolved target directories, ordered by name.
    pub fn alias_targets(&self) -> impl Iterator<Item = (&str, PathBuf)> + '_ {
        self.build
            .alias
            .iter()
            .map(|(name, target)| (name.as_str(), self.base_dir.join(target)))
    }

    /// Resolve an import specifier through the alias table.
    ///
    /// Returns `None` when no alias applies; such imports must be relative.
    /// Specifiers that would climb out of the alias target with `..` also
    /// return `None`.
    #[must_use]
    pub fn resolve_import(&self, specifier: &str) -> Option<PathBuf> {
        let (target, rest) = self.build.match_alias(specifier)?;
        if !stays_inside(rest) {
            return None;
        }
        let dir = self.base_dir.join(target);
        Some(if rest.is_empty() { dir } else { dir.join(rest) })
    }

    #[must_use]
    pub fn has_transform(&self, transform: ContentTransform) -> bool {
        self.build.transforms.contains(&transform)
    }
}

/// Walk from `start` up to the filesystem root looking for `folio.toml`.
fn discover_from(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}
