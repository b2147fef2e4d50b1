use crate::catalog::CatalogIndex;
use crate::error::FetchError;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fs;
use std::path::Path;

/// Read the requested pack list: one name per line, trimmed, lowercased,
/// blank lines dropped. Order is kept.
pub fn read_requested(path: &Path) -> Result<Vec<String>, FetchError> {
    let raw = fs::read_to_string(path).map_err(|source| FetchError::PackList {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect())
}

/// Category identifier -> pack names, in first-seen order on both levels.
/// The archive service consumes this ordering as-is, so serialization must
/// not sort keys (hence the manual `Serialize` over a `serde_json::Value`,
/// which would).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorizedSelection {
    categories: Vec<(String, Vec<String>)>,
}

impl CategorizedSelection {
    pub fn push(&mut self, category: &str, pack: &str) {
        if let Some((_, packs)) = self
            .categories
            .iter_mut()
            .find(|(id, _)| id == category)
        {
            packs.push(pack.to_string());
        } else {
            self.categories
                .push((category.to_string(), vec![pack.to_string()]));
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories
            .iter()
            .map(|(id, packs)| (id.as_str(), packs.as_slice()))
    }

    /// Number of categories, not packs.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn pack_count(&self) -> usize {
        self.categories.iter().map(|(_, packs)| packs.len()).sum()
    }

    /// Same structure with interior spaces in pack names replaced by literal
    /// plus characters, the encoding the archive service expects.
    pub fn plus_encoded(&self) -> CategorizedSelection {
        CategorizedSelection {
            categories: self
                .categories
                .iter()
                .map(|(id, packs)| {
                    let encoded = packs.iter().map(|p| p.replace(' ', "+")).collect();
                    (id.clone(), encoded)
                })
                .collect(),
        }
    }
}

impl Serialize for CategorizedSelection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for (id, packs) in &self.categories {
            map.serialize_entry(id, packs)?;
        }
        map.end()
    }
}

#[derive(Debug, Default)]
pub struct Partition {
    pub selection: CategorizedSelection,
    pub invalid: Vec<String>,
}

/// Walk the requested list in order: known names land under their category,
/// unknown names land in the invalid list. Duplicates are kept as-is.
pub fn partition(requested: &[String], index: &CatalogIndex) -> Partition {
    let mut out = Partition::default();
    for pack in requested {
        match index.category_of(pack) {
            Some(category) => out.selection.push(category, pack),
            None => out.invalid.push(pack.clone()),
        }
    }
    out
}
