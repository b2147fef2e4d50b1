use crate::config::FetchConfig;
use crate::error::FetchError;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogResponse {
    pub categories: Vec<CatalogCategory>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogCategory {
    pub category: String,
    #[serde(default)]
    pub packs: Vec<CatalogPack>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogPack {
    pub name: String,
}

/// Derive the category identifier the archive service expects from a
/// category display name: lowercase, spaces and slashes become hyphens.
pub fn category_slug(display_name: &str) -> String {
    display_name.to_lowercase().replace(['/', ' '], "-")
}

/// Pack name (lowercased) -> category identifier, built fresh each run.
/// Lookups are case-insensitive; the catalog's own casing is not kept.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    by_name: HashMap<String, String>,
}

impl CatalogIndex {
    pub fn from_response(response: &CatalogResponse) -> Self {
        let mut by_name = HashMap::new();
        for category in &response.categories {
            let slug = category_slug(&category.category);
            for pack in &category.packs {
                by_name.insert(pack.name.to_lowercase(), slug.clone());
            }
        }
        Self { by_name }
    }

    pub fn category_of(&self, requested: &str) -> Option<&str> {
        self.by_name
            .get(&requested.to_lowercase())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

pub fn parse_catalog(body: &str) -> Result<CatalogIndex, FetchError> {
    let response: CatalogResponse =
        serde_json::from_str(body).map_err(|e| FetchError::CatalogParse(e.to_string()))?;
    Ok(CatalogIndex::from_response(&response))
}

pub async fn fetch(
    client: &reqwest::Client,
    config: &FetchConfig,
) -> Result<CatalogIndex, FetchError> {
    let url = config.catalog_url();
    let response = client
        .get(&url)
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .await
        .map_err(|e| FetchError::CatalogFetch(e.to_string()))?
        .error_for_status()
        .map_err(|e| FetchError::CatalogFetch(e.to_string()))?;
    let body = response
        .text()
        .await
        .map_err(|e| FetchError::CatalogFetch(e.to_string()))?;
    parse_catalog(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG_FIXTURE: &str = r#"{
        "categories": [
            {
                "category": "Mobs",
                "packs": [
                    {"name": "villager trading", "display": "Villager Trading"},
                    {"name": "dragon fight", "display": "Dragon Fight"}
                ]
            },
            {
                "category": "Survival",
                "packs": [
                    {"name": "graves", "display": "Graves"}
                ]
            }
        ]
    }"#;

    #[test]
    fn category_slug_lowercases_and_hyphenates() {
        assert_eq!(category_slug("Mobs"), "mobs");
        assert_eq!(category_slug("Hermit Crafted"), "hermit-crafted");
        assert_eq!(category_slug("Items/Blocks"), "items-blocks");
        assert_eq!(category_slug("Teleportation Commands"), "teleportation-commands");
    }

    #[test]
    fn category_slug_is_idempotent() {
        let once = category_slug("Items/Blocks And More");
        assert_eq!(category_slug(&once), once);
    }

    #[test]
    fn index_has_one_entry_per_pack_across_categories() {
        let index = parse_catalog(CATALOG_FIXTURE).expect("parse catalog");
        assert_eq!(index.len(), 3);
        assert_eq!(index.category_of("villager trading"), Some("mobs"));
        assert_eq!(index.category_of("dragon fight"), Some("mobs"));
        assert_eq!(index.category_of("graves"), Some("survival"));
        assert_eq!(index.category_of("unknown pack"), None);
    }

    #[test]
    fn lookups_are_case_insensitive() {
        let index = parse_catalog(CATALOG_FIXTURE).expect("parse catalog");
        assert_eq!(index.category_of("Villager Trading"), Some("mobs"));
        assert_eq!(index.category_of("GRAVES"), Some("survival"));
    }

    #[test]
    fn catalog_pack_names_with_uppercase_still_match() {
        let body = r#"{"categories":[{"category":"Mobs","packs":[{"name":"Wandering Trades"}]}]}"#;
        let index = parse_catalog(body).expect("parse catalog");
        assert_eq!(index.category_of("wandering trades"), Some("mobs"));
    }

    #[test]
    fn malformed_catalog_json_is_a_parse_error() {
        let err = parse_catalog("{not json").unwrap_err();
        assert_eq!(err.code(), "catalog.parse_failed");
    }

    #[test]
    fn category_with_no_packs_is_tolerated() {
        let body = r#"{"categories":[{"category":"Empty"}]}"#;
        let index = parse_catalog(body).expect("parse catalog");
        assert!(index.is_empty());
    }
}
