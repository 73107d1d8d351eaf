//! `[theme]` section: navigation, sidebar, social links, site title and logo.
//!
//! ```toml
//! [theme]
//! navigation = false
//! sidebar = false
//! social_links = false
//! site_title = false
//! logo = "/logo.svg"
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A theme option that can be left to the renderer's default, switched off,
/// or given a value.
///
/// In TOML, an absent key is [`Toggle::Unset`], `false` is
/// [`Toggle::Disabled`] and any other value is [`Toggle::Enabled`]. `true`
/// reads as `Unset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toggle<T> {
    /// Not configured; the renderer decides.
    Unset,
    /// Explicitly switched off.
    Disabled,
    /// Switched on with the given value.
    Enabled(T),
}

impl<T> Default for Toggle<T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<T> Toggle<T> {
    #[must_use]
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// The configured value, if enabled.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Enabled(v) => Some(v),
            Self::Unset | Self::Disabled => None,
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Toggle<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr<U> {
            Flag(bool),
            Value(U),
        }

        Ok(match Repr::<T>::deserialize(deserializer)? {
            Repr::Flag(false) => Self::Disabled,
            Repr::Flag(true) => Self::Unset,
            Repr::Value(v) => Self::Enabled(v),
        })
    }
}

impl<T: Serialize> Serialize for Toggle<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Unset => serializer.serialize_none(),
            Self::Disabled => serializer.serialize_bool(false),
            Self::Enabled(v) => v.serialize(serializer),
        }
    }
}

/// Theme options handed to the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Top navigation bar entries.
    #[serde(skip_serializing_if = "Toggle::is_unset")]
    pub navigation: Toggle<Vec<NavItem>>,
    /// Left-hand page tree.
    #[serde(skip_serializing_if = "Toggle::is_unset")]
    pub sidebar: Toggle<Vec<SidebarItem>>,
    /// External profile icons.
    #[serde(skip_serializing_if = "Toggle::is_unset")]
    pub social_links: Toggle<Vec<SocialLink>>,
    /// Text shown in place of the site title.
    #[serde(skip_serializing_if = "Toggle::is_unset")]
    pub site_title: Toggle<String>,
    /// Logo image. `/`-prefixed paths live in the public directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

impl ThemeConfig {
    /// Theme with every toggle switched off and no logo.
    #[must_use]
    pub fn bare() -> Self {
        Self {
            navigation: Toggle::Disabled,
            sidebar: Toggle::Disabled,
            social_links: Toggle::Disabled,
            site_title: Toggle::Disabled,
            logo: None,
        }
    }

    #[must_use]
    pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = Some(logo.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub text: String,
    pub link: String,
}

/// Sidebar entry. Entries without a link act as group headings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarItem {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<SidebarItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Icon name, e.g. `github`.
    pub icon: String,
    pub link: String,
}
