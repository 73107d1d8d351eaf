//! Path checks run by the site builder before it starts.
//!
//! Loading never touches the paths a config references. [`SiteConfig::check`]
//! reports every reference that does not resolve so the builder can fail
//! with all problems at once.

use std::path::{Path, PathBuf};

use crate::SiteConfig;

/// File extensions accepted as logo images.
const IMAGE_EXTENSIONS: &[&str] = &["svg", "png", "jpg", "jpeg", "gif", "webp", "avif", "ico"];

/// A path reference in a site config that does not resolve.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Source directory not found: {}", .0.display())]
    MissingSourceDir(PathBuf),

    #[error("Logo {logo} not found at {}", .path.display())]
    MissingLogo {
        /// Logo as written in the config.
        logo: String,
        /// Where it was looked up.
        path: PathBuf,
    },

    #[error("Logo {} is not an image asset", .0.display())]
    LogoNotImage(PathBuf),

    #[error("Alias {name} target not found: {}", .path.display())]
    MissingAliasTarget { name: String, path: PathBuf },
}

impl SiteConfig {
    /// Check that every path this config references exists.
    ///
    /// Returns all problems found; an empty list means the site can be built.
    #[must_use]
    pub fn check(&self) -> Vec<ConfigurationError> {
        let mut errors = Vec::new();

        let source_dir = self.source_dir();
        if !source_dir.is_dir() {
            errors.push(ConfigurationError::MissingSourceDir(source_dir));
        }

        if let (Some(logo), Some(path)) = (self.theme().logo.as_deref(), self.logo_file()) {
            if path.is_file() {
                if !is_image(&path) {
                    errors.push(ConfigurationError::LogoNotImage(path));
                }
            } else {
                errors.push(ConfigurationError::MissingLogo {
                    logo: logo.to_owned(),
                    path,
                });
            }
        }

        for (name, path) in self.alias_targets() {
            if !path.is_dir() {
                errors.push(ConfigurationError::MissingAliasTarget {
                    name: name.to_owned(),
                    path,
                });
            }
        }

        if !errors.is_empty() {
            tracing::debug!(
                site = %self.title(),
                count = errors.len(),
                "Config references unresolved paths"
            );
        }

        errors
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}
