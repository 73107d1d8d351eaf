//! `extends` chains between site files.
//!
//! A site file can name a base file whose tables are merged underneath it:
//!
//! ```toml
//! extends = "../shared/folio.base.toml"
//! title = "Portfolio"
//! ```
//!
//! # Merge Rules
//!
//! - Tables merge recursively, child keys override base keys
//! - Arrays and scalars are replaced, never concatenated
//! - `title` and `description`: never inherited

use std::path::{Path, PathBuf};

use toml::{Table, Value};

use crate::ConfigError;

const EXTENDS_KEY: &str = "extends";

/// Keys each site must declare for itself.
const NEVER_INHERITED: &[&str] = &["title", "description"];

/// Read a site file and fold in every base it extends.
pub(crate) fn read_merged(path: &Path) -> Result<Table, ConfigError> {
    let mut chain = Vec::new();
    read_chain(path, &mut chain)
}

fn read_chain(path: &Path, chain: &mut Vec<PathBuf>) -> Result<Table, ConfigError> {
    let canonical = path.canonicalize()?;
    if chain.contains(&canonical) {
        let cycle = chain
            .iter()
            .chain(std::iter::once(&canonical))
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(" -> ");
        return Err(ConfigError::Validation(format!("extends cycle: {cycle}")));
    }
    chain.push(canonical);

    let content = std::fs::read_to_string(path)?;
    let mut table: Table = toml::from_str(&content)?;

    let Some(extends) = table.remove(EXTENDS_KEY) else {
        return Ok(table);
    };
    let Value::String(base) = extends else {
        return Err(ConfigError::Validation(
            "extends must be a path string".to_owned(),
        ));
    };

    let base_path = path.parent().unwrap_or(Path::new(".")).join(base);
    if !base_path.exists() {
        return Err(ConfigError::NotFound(base_path));
    }
    tracing::debug!(site = %path.display(), base = %base_path.display(), "Merging base config");

    let base = read_chain(&base_path, chain)?;
    Ok(merge_tables(base, table))
}

/// Merge a child table over its base.
#[must_use]
pub(crate) fn merge_tables(mut base: Table, child: Table) -> Table {
    for key in NEVER_INHERITED {
        base.remove(*key);
    }
    deep_merge(&mut base, child);
    base
}

fn deep_merge(base: &mut Table, child: Table) {
    for (key, value) in child {
        match value {
            Value::Table(child_table) => {
                if let Some(Value::Table(base_table)) = base.get_mut(&key) {
                    deep_merge(base_table, child_table);
                } else {
                    base.insert(key, Value::Table(child_table));
                }
            }
            other => {
                base.insert(key, other);
            }
        }
    }
}
