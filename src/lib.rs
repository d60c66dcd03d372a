//! # shopslide
//!
//! A product-carousel configuration and rendering engine for storefront CMS
//! integrations.
//!
//! The pipeline: a persisted, loosely-typed settings bag is resolved into a
//! fully-defaulted [`SliderConfig`]; product references and curated image
//! slides are merged into one ordered slide list; the renderer turns both
//! into markup, scoped CSS, and the JSON payload the client-side carousel
//! widget consumes at DOM-ready.
//!
//! Host concerns (storage, product catalog, media library) enter through the
//! [`SliderStore`], [`ProductCatalog`] and [`MediaLibrary`] traits; in-memory
//! implementations ship for tests and the `slider-check` CLI.
//!
//! ## Example
//! ```
//! use shopslide::{
//!     Caller, MemoryCatalog, MemoryMedia, MemoryStore, Product, SettingsMap, SettingValue,
//!     ShortcodeEngine, Slider, SliderStatus,
//! };
//!
//! let mut settings = SettingsMap::new();
//! settings.set("products", SettingValue::List(vec![SettingValue::Int(1)]));
//! settings.set("heading", SettingValue::text("Featured"));
//!
//! let mut store = MemoryStore::new();
//! store.insert(Slider { id: 7, status: SliderStatus::Published, settings });
//!
//! let catalog = MemoryCatalog::new(vec![Product {
//!     id: 1,
//!     name: "Mug".into(),
//!     permalink: "https://shop.example/p/1".into(),
//!     ..Product::default()
//! }]);
//! let media = MemoryMedia::new();
//!
//! let engine = ShortcodeEngine::new(&store, &catalog, &media);
//! let html = engine.render(Some("7"), Caller::Anonymous);
//! assert!(html.contains("ss-slider-7"));
//! ```

pub mod catalog;
pub mod color;
pub mod config;
pub mod document;
pub mod error;
pub mod media;
pub mod preview;
pub mod render;
pub mod sanitize;
pub mod settings;
pub mod shortcode;
pub mod slides;
pub mod store;

// --- Core types ---
pub use catalog::{search_products, MemoryCatalog, Product, ProductCatalog, ProductStatus, SearchHit};
pub use config::{
    new_slider_settings, resolve, resolve_from_submitted_form, sanitize_submitted_form,
    ArrowPosition, ArrowStyle, BarPosition, DefaultPalette, GlobalDefaults, HeadingAlign,
    HeadingTransform, PaginationStyle, SliderConfig,
};
pub use document::SliderDocument;
pub use error::{SliderError, SliderResult};
pub use media::{MediaLibrary, MemoryMedia};
pub use preview::{render_preview, PREVIEW_SCOPE_ID};
pub use render::{render, RenderOutput, WidgetConfig, TRANSITION_MS};
pub use settings::{SettingValue, SettingsMap};
pub use shortcode::{Caller, RenderState, ShortcodeEngine};
pub use slides::{merge_slides, CustomSlide, ResolvedCustomSlide, Slide};
pub use store::{MemoryStore, Slider, SliderStatus, SliderStore};
