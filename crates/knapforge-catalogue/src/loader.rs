//! Catalogue parsing.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use knapforge_core::Item;
use tracing::{debug, warn};

use crate::error::{CatalogueError, Result};

const FIELD_COUNT: usize = 4;

/// One catalogue record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogueEntry {
    pub item: Item,
    /// Image reference as written in the file. May be empty.
    pub image: String,
}

/// An ordered list of catalogue entries.
///
/// # Example
///
/// ```
/// use knapforge_catalogue::Catalogue;
///
/// let catalogue: Catalogue = "\
/// Lamp,60,10,lamp.png
/// not a record
/// Chair,100,20,chair.png
/// ".parse().unwrap();
///
/// assert_eq!(catalogue.len(), 2);
/// assert_eq!(catalogue.items()[1].name(), "Chair");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalogue {
    entries: Vec<CatalogueEntry>,
}

impl Catalogue {
    pub fn new(entries: Vec<CatalogueEntry>) -> Self {
        Self { entries }
    }

    /// Reads and parses the catalogue at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let catalogue: Catalogue = text.parse()?;
        debug!(
            event = "catalogue_loaded",
            path = %path.display(),
            entries = catalogue.len(),
        );
        Ok(catalogue)
    }

    pub fn entries(&self) -> &[CatalogueEntry] {
        &self.entries
    }

    /// Returns the items in file order.
    pub fn items(&self) -> Vec<Item> {
        self.entries.iter().map(|e| e.item.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keeps the entries whose name contains `query`, ignoring case.
    ///
    /// An empty query keeps everything. Order is preserved.
    pub fn filter_by_name(&self, query: &str) -> Catalogue {
        let query = query.to_lowercase();
        let entries = self
            .entries
            .iter()
            .filter(|e| e.item.name().to_lowercase().contains(&query))
            .cloned()
            .collect();
        Catalogue { entries }
    }
}

impl FromStr for Catalogue {
    type Err = CatalogueError;

    fn from_str(s: &str) -> Result<Self> {
        let mut entries = Vec::new();
        for (i, raw) in s.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split(',').collect();
            if fields.len() != FIELD_COUNT {
                warn!(
                    event = "catalogue_line_skipped",
                    line = i + 1,
                    fields = fields.len(),
                );
                continue;
            }
            let value = parse_number(fields[1], i + 1, "value")?;
            let weight = parse_number(fields[2], i + 1, "weight")?;
            entries.push(CatalogueEntry {
                item: Item::new(fields[0], value, weight),
                image: fields[3].to_string(),
            });
        }
        Ok(Catalogue { entries })
    }
}

fn parse_number(text: &str, line: usize, field: &'static str) -> Result<i64> {
    text.trim()
        .parse::<i64>()
        .map_err(|e| CatalogueError::Parse {
            line,
            field,
            text: text.to_string(),
            message: e.to_string(),
        })
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
