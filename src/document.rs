//! Self-contained slider documents: one slider plus the product and media
//! fixtures it renders against.
//!
//! Used by the `slider-check` CLI and the integration tests; a document is
//! the whole world one render needs, so files under `fixtures/` can exercise
//! the full pipeline without a host CMS.

use serde::Deserialize;
use std::collections::HashMap;

use crate::catalog::{MemoryCatalog, Product};
use crate::error::{SliderError, SliderResult};
use crate::media::MemoryMedia;
use crate::store::{MemoryStore, Slider};

#[derive(Debug, Clone, Deserialize)]
pub struct SliderDocument {
    pub slider: Slider,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub media: HashMap<u64, String>,
    #[serde(default)]
    pub placeholder_image: Option<String>,
}

impl SliderDocument {
    pub fn from_json(input: &str) -> SliderResult<SliderDocument> {
        serde_json::from_str(input).map_err(|e| SliderError::Document(e.to_string()))
    }

    pub fn from_yaml(input: &str) -> SliderResult<SliderDocument> {
        serde_yaml::from_str(input).map_err(|e| SliderError::Document(e.to_string()))
    }

    pub fn store(&self) -> MemoryStore {
        let mut store = MemoryStore::new();
        store.insert(self.slider.clone());
        store
    }

    pub fn catalog(&self) -> MemoryCatalog {
        let catalog = MemoryCatalog::new(self.products.clone());
        match &self.placeholder_image {
            Some(url) => catalog.with_placeholder(url.clone()),
            None => catalog,
        }
    }

    pub fn media_library(&self) -> MemoryMedia {
        MemoryMedia::from_map(self.media.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SliderStatus;

    #[test]
    fn parses_a_minimal_json_document() {
        let doc = SliderDocument::from_json(
            r#"{"slider": {"id": 4, "status": "published", "settings": {"heading": "Hi"}}}"#,
        )
        .unwrap();

        assert_eq!(doc.slider.id, 4);
        assert_eq!(doc.slider.status, SliderStatus::Published);
        assert!(doc.products.is_empty());
    }

    #[test]
    fn rejects_malformed_documents() {
        let err = SliderDocument::from_json("{\"slider\": 5}").unwrap_err();
        assert!(matches!(err, SliderError::Document(_)));
    }

    #[test]
    fn parses_yaml_with_fixtures() {
        let doc = SliderDocument::from_yaml(
            "slider:\n  id: 2\n  status: published\n  settings:\n    products: [1]\nproducts:\n  - id: 1\n    name: Mug\n    permalink: https://shop.test/p/1\nmedia:\n  7: https://cdn.test/7.jpg\n",
        )
        .unwrap();

        assert_eq!(doc.products.len(), 1);
        assert_eq!(doc.media.get(&7).map(String::as_str), Some("https://cdn.test/7.jpg"));
    }
}
