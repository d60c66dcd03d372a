use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Product, ProductCatalog, ProductStatus};
use crate::media::MediaLibrary;

/// A manually curated slide, as persisted: a media-library image reference
/// plus an optional destination URL and title.
///
/// A slide without an image reference is never persisted or rendered; the
/// save path drops it and [`merge_slides`] skips it defensively.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomSlide {
    #[serde(default)]
    pub image_id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
}

impl CustomSlide {
    pub fn has_image(&self) -> bool {
        self.image_id != 0
    }
}

/// A custom slide with its image reference resolved to a URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCustomSlide {
    pub image_url: String,
    pub url: String,
    pub title: String,
}

/// A slide ready for rendering. Built fresh on every render, never cached.
#[derive(Debug, Clone, PartialEq)]
pub enum Slide {
    Product(Product),
    Custom(ResolvedCustomSlide),
}

/// Merge product references and custom slides into one ordered slide list.
///
/// Product ids that no longer resolve to a published product are silently
/// dropped (a missing product means "no longer part of this slider", not a
/// fault). Catalog order is preserved as returned; custom slides follow in
/// their persisted order. Custom slides whose image reference is missing or
/// unresolvable are excluded.
pub fn merge_slides(
    product_ids: &[u64],
    custom_slides: &[CustomSlide],
    catalog: &dyn ProductCatalog,
    media: &dyn MediaLibrary,
) -> Vec<Slide> {
    let mut slides = Vec::with_capacity(product_ids.len() + custom_slides.len());

    for &id in product_ids {
        match catalog.product(id) {
            Some(mut product) if product.status == ProductStatus::Published => {
                if product.image_url.is_none() {
                    product.image_url = catalog.placeholder_image();
                }
                slides.push(Slide::Product(product));
            }
            _ => {
                debug!(product_id = id, "dropping stale product reference");
            }
        }
    }

    for slide in custom_slides {
        if !slide.has_image() {
            debug!("skipping custom slide without image reference");
            continue;
        }
        match media.image_url(slide.image_id) {
            Some(image_url) => slides.push(Slide::Custom(ResolvedCustomSlide {
                image_url,
                url: slide.url.clone(),
                title: slide.title.clone(),
            })),
            None => {
                debug!(image_id = slide.image_id, "skipping custom slide with unresolvable image");
            }
        }
    }

    slides
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryCatalog;
    use crate::media::MemoryMedia;

    fn product(id: u64, name: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            permalink: format!("https://shop.test/product/{id}"),
            ..Product::default()
        }
    }

    #[test]
    fn stale_product_ids_are_dropped() {
        let catalog = MemoryCatalog::new(vec![product(1, "Mug")]);
        let media = MemoryMedia::new();

        let slides = merge_slides(&[1, 99], &[], &catalog, &media);
        assert_eq!(slides.len(), 1);
        assert!(matches!(&slides[0], Slide::Product(p) if p.id == 1));
    }

    #[test]
    fn unpublished_products_are_dropped() {
        let mut draft = product(2, "Hidden");
        draft.status = ProductStatus::Draft;
        let catalog = MemoryCatalog::new(vec![draft]);

        let slides = merge_slides(&[2], &[], &catalog, &MemoryMedia::new());
        assert!(slides.is_empty());
    }

    #[test]
    fn custom_slides_follow_products_in_persisted_order() {
        let catalog = MemoryCatalog::new(vec![product(1, "Mug")]);
        let mut media = MemoryMedia::new();
        media.insert(10, "https://cdn.test/a.jpg");
        media.insert(11, "https://cdn.test/b.jpg");

        let customs = vec![
            CustomSlide { image_id: 10, url: String::new(), title: "A".into() },
            CustomSlide { image_id: 11, url: String::new(), title: "B".into() },
        ];
        let slides = merge_slides(&[1], &customs, &catalog, &media);

        assert_eq!(slides.len(), 3);
        assert!(matches!(&slides[0], Slide::Product(_)));
        assert!(matches!(&slides[1], Slide::Custom(c) if c.title == "A"));
        assert!(matches!(&slides[2], Slide::Custom(c) if c.title == "B"));
    }

    #[test]
    fn imageless_custom_slide_is_excluded() {
        let customs = vec![CustomSlide::default()];
        let slides = merge_slides(&[], &customs, &MemoryCatalog::new(vec![]), &MemoryMedia::new());
        assert!(slides.is_empty());
    }

    #[test]
    fn placeholder_image_backfills_products_without_one() {
        let catalog = MemoryCatalog::new(vec![product(1, "Mug")])
            .with_placeholder("https://cdn.test/placeholder.png");

        let slides = merge_slides(&[1], &[], &catalog, &MemoryMedia::new());
        match &slides[0] {
            Slide::Product(p) => {
                assert_eq!(p.image_url.as_deref(), Some("https://cdn.test/placeholder.png"));
            }
            _ => panic!("expected product slide"),
        }
    }
}
