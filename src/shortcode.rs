//! The public shortcode engine.
//!
//! A small state machine: id validation, entity lookup, configuration
//! resolution, slide merge, and finally HTML emission. Error states render
//! as an inline fragment for callers who can edit sliders and as an empty
//! string for everyone else, so a misconfigured slider never leaks details
//! to (or breaks) a public page.

use tracing::debug;

use crate::catalog::ProductCatalog;
use crate::config;
use crate::media::MediaLibrary;
use crate::render::{self, escape_html, RenderOutput};
use crate::sanitize;
use crate::settings::SettingValue;
use crate::slides::merge_slides;
use crate::store::SliderStore;

/// Terminal states of one shortcode evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    IdInvalid,
    NotFoundOrUnpublished,
    NoSlidesConfigured,
    NoResolvedSlides,
    Ready,
}

impl RenderState {
    /// The admin-facing message for an error state; `None` for `Ready`.
    pub fn error_message(self) -> Option<&'static str> {
        match self {
            RenderState::IdInvalid => Some("Invalid slider ID."),
            RenderState::NotFoundOrUnpublished => Some("Slider not found or not published."),
            RenderState::NoSlidesConfigured => {
                Some("No products or custom slides selected for this slider.")
            }
            RenderState::NoResolvedSlides => Some("No valid slides found."),
            RenderState::Ready => None,
        }
    }
}

/// Who is asking for the render. Only callers with edit permission see
/// error fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Caller {
    Anonymous,
    Editor,
}

impl Caller {
    pub fn can_edit(self) -> bool {
        matches!(self, Caller::Editor)
    }
}

pub struct ShortcodeEngine<'a> {
    store: &'a dyn SliderStore,
    catalog: &'a dyn ProductCatalog,
    media: &'a dyn MediaLibrary,
}

impl<'a> ShortcodeEngine<'a> {
    pub fn new(
        store: &'a dyn SliderStore,
        catalog: &'a dyn ProductCatalog,
        media: &'a dyn MediaLibrary,
    ) -> ShortcodeEngine<'a> {
        ShortcodeEngine { store, catalog, media }
    }

    /// Render the shortcode. `id_attr` is the raw attribute value; a missing
    /// attribute is treated as `0` and therefore invalid.
    pub fn render(&self, id_attr: Option<&str>, caller: Caller) -> String {
        let (state, output) = self.evaluate(id_attr);
        match output {
            Some(output) => output.html(),
            None => self.error_fragment(state, caller),
        }
    }

    /// Run the state machine without deciding presentation.
    pub fn evaluate(&self, id_attr: Option<&str>) -> (RenderState, Option<RenderOutput>) {
        let raw = id_attr.unwrap_or("0");
        let slider_id = sanitize::sanitize_integer(&SettingValue::text(raw));
        if slider_id == 0 {
            return (RenderState::IdInvalid, None);
        }

        let slider = match self.store.slider(slider_id) {
            Some(slider) if slider.is_published() => slider,
            _ => return (RenderState::NotFoundOrUnpublished, None),
        };

        let config = config::resolve(&slider.settings);
        if config.products.is_empty() && config.custom_slides.is_empty() {
            return (RenderState::NoSlidesConfigured, None);
        }

        let slides = merge_slides(&config.products, &config.custom_slides, self.catalog, self.media);
        if slides.is_empty() {
            return (RenderState::NoResolvedSlides, None);
        }

        debug!(slider_id, slide_count = slides.len(), "rendering slider");
        let output = render::render(&config, &slides, slider_id);
        (RenderState::Ready, Some(output))
    }

    fn error_fragment(&self, state: RenderState, caller: Caller) -> String {
        if !caller.can_edit() {
            return String::new();
        }
        match state.error_message() {
            Some(message) => format!("<div class=\"ss-error\">{}</div>", escape_html(message)),
            None => String::new(),
        }
    }
}
