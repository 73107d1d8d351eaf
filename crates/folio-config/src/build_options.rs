//! `[build]` section: path aliases and content transforms.
//!
//! ```toml
//! [build]
//! transforms = ["image"]
//!
//! [build.alias]
//! "@" = "src"
//! "@assets" = "src/public/assets"
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, require_non_empty};

/// Options for the bundling step of the site build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    /// Symbolic import prefix to directory, relative to the config file.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub alias: BTreeMap<String, String>,
    /// Build-time transforms applied to content and asset references.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub transforms: Vec<ContentTransform>,
}

/// A build-time transform the renderer should run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentTransform {
    /// Resize/convert images via directives in asset references.
    Image,
}

impl BuildOptions {
    #[must_use]
    pub fn with_alias(mut self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.alias.insert(name.into(), target.into());
        self
    }

    #[must_use]
    pub fn with_transform(mut self, transform: ContentTransform) -> Self {
        if !self.transforms.contains(&transform) {
            self.transforms.push(transform);
        }
        self
    }

    /// Find the alias that applies to an import specifier.
    ///
    /// A key matches when the specifier equals it or continues with `/`.
    /// The longest matching key wins. Returns the key's target and the
    /// remainder of the specifier with all leading separators removed.
    pub(crate) fn match_alias<'a>(&'a self, specifier: &'a str) -> Option<(&'a str, &'a str)> {
        self.alias
            .iter()
            .filter_map(|(key, target)| {
                let rest = specifier.strip_prefix(key.as_str())?;
                let rest = if rest.is_empty() || key.ends_with('/') {
                    rest
                } else {
                    rest.strip_prefix('/')?
                };
                Some((key.len(), target.as_str(), rest.trim_start_matches('/')))
            })
            .max_by_key(|(len, _, _)| *len)
            .map(|(_, target, rest)| (target, rest))
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for (name, target) in &self.alias {
            if name.is_empty() {
                return Err(ConfigError::Validation(
                    "build.alias keys cannot be empty".to_owned(),
                ));
            }
            require_non_empty(target, &format!("build.alias.\"{name}\""))?;
        }

        for (i, transform) in self.transforms.iter().enumerate() {
            if self.transforms[..i].contains(transform) {
                return Err(ConfigError::Validation(format!(
                    "build.transforms lists {transform:?} more than once"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aliases() -> BuildOptions {
        BuildOptions::default()
            .with_alias("@", "src")
            .with_alias("@theme", "src/.theme")
            .with_alias("~/", "lib")
    }

    #[test]
    fn test_parse_build_section() {
        let build: BuildOptions = toml::from_str(
            r#"
transforms = ["image"]

[alias]
"@" = "src"
"#,
        )
        .unwrap();
        assert_eq!(build.transforms, vec![ContentTransform::Image]);
        assert_eq!(build.alias.get("@").map(String::as_str), Some("src"));
    }

    #[test]
    fn test_parse_unknown_transform_fails() {
        let result: Result<BuildOptions, _> = toml::from_str(r#"transforms = ["minify"]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_match_alias_exact() {
        assert_eq!(aliases().match_alias("@"), Some(("src", "")));
    }

    #[test]
    fn test_match_alias_prefix_with_separator() {
        assert_eq!(
            aliases().match_alias("@/components/Card.vue"),
            Some(("src", "components/Card.vue"))
        );
    }

    #[test]
    fn test_match_alias_longest_key_wins() {
        assert_eq!(
            aliases().match_alias("@theme/Layout.vue"),
            Some(("src/.theme", "Layout.vue"))
        );
    }

    #[test]
    fn test_match_alias_requires_separator() {
        // `@themes` is not `@theme` followed by a path
        assert_eq!(aliases().match_alias("@themes/x"), None);
    }

    #[test]
    fn test_match_alias_key_with_trailing_slash() {
        assert_eq!(aliases().match_alias("~/util.js"), Some(("lib", "util.js")));
    }

    #[test]
    fn test_match_alias_strips_repeated_separators() {
        assert_eq!(
            aliases().match_alias("@//etc/passwd"),
            Some(("src", "etc/passwd"))
        );
        assert_eq!(aliases().match_alias("~//util.js"), Some(("lib", "util.js")));
    }

    #[test]
    fn test_match_alias_relative_import_unmatched() {
        assert_eq!(aliases().match_alias("./local.js"), None);
    }

    #[test]
    fn test_with_transform_deduplicates() {
        let build = BuildOptions::default()
            .with_transform(ContentTransform::Image)
            .with_transform(ContentTransform::Image);
        assert_eq!(build.transforms.len(), 1);
    }

    #[test]
    fn test_validate_rejects_duplicate_transform() {
        let build = BuildOptions {
            transforms: vec![ContentTransform::Image, ContentTransform::Image],
            ..BuildOptions::default()
        };
        let err = build.validate().unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_validate_rejects_empty_alias_target() {
        let build = BuildOptions::default().with_alias("@", "");
        let err = build.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("build.alias"));
    }

    #[test]
    fn test_validate_rejects_empty_alias_key() {
        let build = BuildOptions::default().with_alias("", "src");
        assert!(build.validate().is_err());
    }
}
