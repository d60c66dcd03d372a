use serde::{Deserialize, Serialize};

/// Minimum length of a product search term, after trimming.
pub const MIN_SEARCH_TERM_LEN: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Draft,
    #[default]
    Published,
}

/// A product record as surfaced by the external catalog.
///
/// Only the fields the slider renders are carried; everything else stays
/// with the collaborator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub permalink: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub price_html: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub on_sale: bool,
    #[serde(default)]
    pub status: ProductStatus,
}

/// An {id, display label} pair returned by the admin product search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: u64,
    pub label: String,
}

impl SearchHit {
    fn for_product(product: &Product) -> SearchHit {
        SearchHit {
            id: product.id,
            label: format!("{} (ID: {})", product.name, product.id),
        }
    }
}

/// The external product catalog the slider reads from.
pub trait ProductCatalog {
    /// Look up one product by id. `None` for unknown ids.
    fn product(&self, id: u64) -> Option<Product>;

    /// Placeholder image URL used for products without an image of their own.
    fn placeholder_image(&self) -> Option<String> {
        None
    }

    /// All published products whose name matches `term` (case-insensitive
    /// substring). Term-length policy is enforced by [`search_products`].
    fn find_products(&self, term: &str) -> Vec<Product>;
}

/// Admin product search: free-text term to {id, label} pairs.
///
/// Terms shorter than [`MIN_SEARCH_TERM_LEN`] after trimming yield an empty
/// result rather than an error.
pub fn search_products(catalog: &dyn ProductCatalog, term: &str) -> Vec<SearchHit> {
    let term = term.trim();
    if term.chars().count() < MIN_SEARCH_TERM_LEN {
        return Vec::new();
    }
    catalog
        .find_products(term)
        .iter()
        .map(SearchHit::for_product)
        .collect()
}

/// In-memory catalog used by tests and the `slider-check` CLI.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    products: Vec<Product>,
    placeholder: Option<String>,
}

impl MemoryCatalog {
    pub fn new(products: Vec<Product>) -> MemoryCatalog {
        MemoryCatalog {
            products,
            placeholder: None,
        }
    }

    pub fn with_placeholder(mut self, url: impl Into<String>) -> MemoryCatalog {
        self.placeholder = Some(url.into());
        self
    }
}

impl ProductCatalog for MemoryCatalog {
    fn product(&self, id: u64) -> Option<Product> {
        self.products.iter().find(|p| p.id == id).cloned()
    }

    fn placeholder_image(&self) -> Option<String> {
        self.placeholder.clone()
    }

    fn find_products(&self, term: &str) -> Vec<Product> {
        let needle = term.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.status == ProductStatus::Published)
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> MemoryCatalog {
        MemoryCatalog::new(vec![
            Product { id: 1, name: "Blue Mug".into(), ..Product::default() },
            Product { id: 2, name: "Blue Teapot".into(), ..Product::default() },
            Product {
                id: 3,
                name: "Blue Draft".into(),
                status: ProductStatus::Draft,
                ..Product::default()
            },
        ])
    }

    #[test]
    fn search_requires_three_characters() {
        assert!(search_products(&catalog(), "bl").is_empty());
        assert!(search_products(&catalog(), "  bl  ").is_empty());
        assert_eq!(search_products(&catalog(), "blu").len(), 2);
    }

    #[test]
    fn search_labels_include_the_id() {
        let hits = search_products(&catalog(), "mug");
        assert_eq!(hits, vec![SearchHit { id: 1, label: "Blue Mug (ID: 1)".into() }]);
    }

    #[test]
    fn search_skips_unpublished_products() {
        let hits = search_products(&catalog(), "draft");
        assert!(hits.is_empty());
    }
}
