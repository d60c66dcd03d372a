use pretty_assertions::assert_eq;
use shopslide::{
    render_preview, search_products, Caller, MemoryCatalog, MemoryMedia, MemoryStore, Product,
    RenderState, SettingValue, SettingsMap, ShortcodeEngine, Slider, SliderDocument, SliderError,
    SliderStatus, PREVIEW_SCOPE_ID,
};
use std::fs;
use std::path::PathBuf;

fn fixture_path(filename: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("fixtures");
    path.push(filename);
    path
}

fn load_document(filename: &str) -> SliderDocument {
    let yaml = fs::read_to_string(fixture_path(filename)).unwrap();
    SliderDocument::from_yaml(&yaml).unwrap()
}

fn evaluate(doc: &SliderDocument) -> (RenderState, Option<shopslide::RenderOutput>) {
    let store = doc.store();
    let catalog = doc.catalog();
    let media = doc.media_library();
    let engine = ShortcodeEngine::new(&store, &catalog, &media);
    engine.evaluate(Some(&doc.slider.id.to_string()))
}

// --- Fixture documents ---

#[test]
fn valid_basic_renders() {
    let doc = load_document("valid-basic.yaml");
    let (state, output) = evaluate(&doc);

    assert_eq!(state, RenderState::Ready);
    let output = output.unwrap();
    let html = output.html();

    assert!(html.contains("ss-slider-101"));
    assert!(html.contains("Featured products"));
    assert!(html.contains("Stoneware Mug"));
    // The teapot has no image of its own: the placeholder fills in.
    assert!(html.contains("https://cdn.shop.test/placeholder.png"));
    // Sale badge on the discounted product.
    assert!(html.contains("ss-product-badge-sale"));
    // Autoplay flows into the widget payload.
    assert!(output.widget_config.to_json().contains("\"delay\":4500"));
}

#[test]
fn valid_custom_slides_render_with_progress_bar() {
    let doc = load_document("valid-custom-slides.yaml");
    let (state, output) = evaluate(&doc);

    assert_eq!(state, RenderState::Ready);
    let output = output.unwrap();

    assert!(output.markup.contains("ss-custom-slide-link"));
    assert!(output.markup.contains("Lookbook"));
    assert!(output.inline_css.contains("top: 0; bottom: auto;"));
    assert!(output.inline_css.contains("background: #00aa55;"));
    assert!(output.widget_config.to_json().contains("\"type\":\"progressbar\""));
}

#[test]
fn draft_slider_is_not_found() {
    let doc = load_document("draft-slider.yaml");
    assert_eq!(evaluate(&doc).0, RenderState::NotFoundOrUnpublished);
}

#[test]
fn stale_products_yield_no_resolved_slides() {
    let doc = load_document("stale-products.yaml");
    assert_eq!(evaluate(&doc).0, RenderState::NoResolvedSlides);
}

#[test]
fn imageless_slide_yields_no_resolved_slides() {
    let doc = load_document("imageless-slide.yaml");
    assert_eq!(evaluate(&doc).0, RenderState::NoResolvedSlides);
}

#[test]
fn nothing_configured_is_its_own_state() {
    let doc = load_document("nothing-configured.yaml");
    assert_eq!(evaluate(&doc).0, RenderState::NoSlidesConfigured);
}

// --- Permission gating ---

#[test]
fn error_text_is_gated_by_permission() {
    let doc = load_document("draft-slider.yaml");
    let store = doc.store();
    let catalog = doc.catalog();
    let media = doc.media_library();
    let engine = ShortcodeEngine::new(&store, &catalog, &media);

    let id = doc.slider.id.to_string();
    assert_eq!(engine.render(Some(&id), Caller::Anonymous), "");
    assert!(engine
        .render(Some(&id), Caller::Editor)
        .contains("Slider not found or not published."));
}

// --- Preview path ---

#[test]
fn preview_renders_an_unsaved_form() {
    let catalog = MemoryCatalog::new(vec![Product {
        id: 1,
        name: "Mug".to_string(),
        permalink: "https://shop.test/p/1".to_string(),
        ..Product::default()
    }]);

    let mut form = SettingsMap::new();
    form.set("products", SettingValue::List(vec![SettingValue::Int(1)]));
    form.set("heading", SettingValue::text("Preview"));

    let output = render_preview(&form, &catalog, &MemoryMedia::new()).unwrap();
    assert!(output.markup.contains(&format!("ss-slider-{PREVIEW_SCOPE_ID}")));
    assert!(output.markup.contains("Preview"));
}

#[test]
fn preview_failures_are_structured() {
    let catalog = MemoryCatalog::new(vec![]);
    let err = render_preview(&SettingsMap::new(), &catalog, &MemoryMedia::new()).unwrap_err();
    assert_eq!(err, SliderError::NothingConfigured);
    assert_eq!(
        err.to_string(),
        "No products or custom slides selected for this slider."
    );
}

// --- Several sliders on one page ---

#[test]
fn two_sliders_scope_their_css_separately() {
    let product = Product {
        id: 1,
        name: "Mug".to_string(),
        permalink: "https://shop.test/p/1".to_string(),
        ..Product::default()
    };
    let catalog = MemoryCatalog::new(vec![product]);
    let media = MemoryMedia::new();

    let mut store = MemoryStore::new();
    for id in [21, 22] {
        let mut settings = SettingsMap::new();
        settings.set("products", SettingValue::List(vec![SettingValue::Int(1)]));
        store.insert(Slider { id, status: SliderStatus::Published, settings });
    }

    let engine = ShortcodeEngine::new(&store, &catalog, &media);
    let first = engine.render(Some("21"), Caller::Anonymous);
    let second = engine.render(Some("22"), Caller::Anonymous);

    assert!(first.contains(".ss-slider-21 "));
    assert!(!first.contains(".ss-slider-22 "));
    assert!(second.contains(".ss-slider-22 "));
}

// --- Admin product search contract ---

#[test]
fn product_search_enforces_the_minimum_term_length() {
    let catalog = MemoryCatalog::new(vec![Product {
        id: 9,
        name: "Glazed Bowl".to_string(),
        permalink: "https://shop.test/p/9".to_string(),
        ..Product::default()
    }]);

    assert!(search_products(&catalog, "gl").is_empty());
    let hits = search_products(&catalog, "glaze");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].label, "Glazed Bowl (ID: 9)");
}
