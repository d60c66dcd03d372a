//! Admin live preview: render an unsaved settings form.
//!
//! Unlike the public shortcode path, every failure here comes back as a
//! structured error: the caller is always an authorized admin surface and
//! wants to show the reason, not an empty string.

use crate::catalog::ProductCatalog;
use crate::config;
use crate::error::{SliderError, SliderResult};
use crate::media::MediaLibrary;
use crate::render::{self, RenderOutput};
use crate::settings::SettingsMap;
use crate::slides::merge_slides;

/// Scope id used for previews. Real slider ids never reach this value, so
/// preview CSS can never collide with a published slider on the same page.
pub const PREVIEW_SCOPE_ID: u64 = u64::MAX;

/// Render a live preview from an admin-submitted, not-yet-persisted form.
///
/// Resolution uses the preview defaults (see
/// [`config::resolve_from_submitted_form`]); the scope id is the fixed
/// [`PREVIEW_SCOPE_ID`] sentinel since no real id exists yet.
pub fn render_preview(
    form: &SettingsMap,
    catalog: &dyn ProductCatalog,
    media: &dyn MediaLibrary,
) -> SliderResult<RenderOutput> {
    let config = config::resolve_from_submitted_form(form);

    if config.products.is_empty() && config.custom_slides.is_empty() {
        return Err(SliderError::NothingConfigured);
    }

    let slides = merge_slides(&config.products, &config.custom_slides, catalog, media);
    if slides.is_empty() {
        return Err(SliderError::NoValidSlides);
    }

    Ok(render::render(&config, &slides, PREVIEW_SCOPE_ID))
}
