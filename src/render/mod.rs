//! Rendering: configuration + resolved slides in, markup / scoped CSS /
//! widget payload out.
//!
//! `render` is a pure function returning data; assembling the final HTML
//! fragment (and deciding who gets to see error text) stays with the
//! shortcode engine and the preview path.

pub mod css;
pub mod markup;
pub mod widget;

pub use markup::escape_html;
pub use widget::{
    AutoplaySetting, Breakpoint, NavigationSetting, PaginationSetting, WidgetConfig, TRANSITION_MS,
};

use crate::config::SliderConfig;
use crate::slides::Slide;

/// Everything a host page needs to display one slider.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutput {
    pub markup: String,
    pub inline_css: String,
    pub widget_config: WidgetConfig,
}

impl RenderOutput {
    /// The complete fragment: scoped styles followed by the slider markup.
    pub fn html(&self) -> String {
        if self.inline_css.is_empty() {
            self.markup.clone()
        } else {
            format!("<style>\n{}</style>\n{}", self.inline_css, self.markup)
        }
    }
}

/// Render a slider. `scope` keys the wrapper class and every generated CSS
/// selector so multiple sliders can coexist on one page.
pub fn render(config: &SliderConfig, slides: &[Slide], scope: u64) -> RenderOutput {
    let widget_config = WidgetConfig::from_config(config);
    let markup = markup::slider_markup(config, slides, scope, &widget_config.to_json());
    let inline_css = css::inline_css(config, scope);

    RenderOutput {
        markup,
        inline_css,
        widget_config,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::config::resolve;
    use crate::settings::{keys, SettingValue, SettingsMap};

    fn one_slide() -> Vec<Slide> {
        vec![Slide::Product(Product {
            id: 1,
            name: "Mug".to_string(),
            permalink: "https://shop.test/p/1".to_string(),
            ..Product::default()
        })]
    }

    #[test]
    fn render_is_deterministic() {
        let config = resolve(&SettingsMap::new());
        let a = render(&config, &one_slide(), 4);
        let b = render(&config, &one_slide(), 4);
        assert_eq!(a, b);
    }

    #[test]
    fn html_wraps_css_in_a_style_tag() {
        let config = resolve(&SettingsMap::new());
        let output = render(&config, &one_slide(), 4);
        let html = output.html();
        assert!(html.starts_with("<style>\n"));
        assert!(html.contains("</style>\n<div class=\"ss-slider ss-slider-4\""));
    }

    #[test]
    fn widget_json_is_embedded_in_markup() {
        let mut settings = SettingsMap::new();
        settings.set(keys::SLIDE_GAP, SettingValue::Int(33));
        let config = resolve(&settings);
        let output = render(&config, &one_slide(), 4);
        assert!(output.markup.contains("&quot;spaceBetween&quot;:33"));
        assert_eq!(output.widget_config.space_between, 33);
    }
}
