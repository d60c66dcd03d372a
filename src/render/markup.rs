//! HTML emission for the slider fragment.
//!
//! Pure string building: configuration and resolved slides in, markup out.
//! Every dynamic value is escaped here; upstream sanitization is treated as
//! untrusted anyway.

use crate::catalog::Product;
use crate::config::{HeadingTransform, PaginationStyle, SliderConfig};
use crate::sanitize;
use crate::slides::{ResolvedCustomSlide, Slide};

/// Escape text for use in HTML content or double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

pub(crate) fn slider_markup(
    config: &SliderConfig,
    slides: &[Slide],
    scope: u64,
    widget_json: &str,
) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "<div class=\"ss-slider ss-slider-{scope}\" data-slider-id=\"{scope}\" \
         data-arrow-style=\"{}\" data-arrow-position=\"{}\">\n",
        config.arrow_style.as_str(),
        config.arrow_position.as_str(),
    ));

    if !config.heading.is_empty() {
        out.push_str(&heading(config));
    }

    out.push_str(&format!(
        "<div class=\"swiper\" data-config=\"{}\" style=\"--swiper-navigation-color: {}; \
         --swiper-pagination-color: {};\">\n",
        escape_html(widget_json),
        escape_html(&config.primary_color),
        escape_html(&config.primary_color),
    ));

    out.push_str("<div class=\"swiper-wrapper\">\n");
    for slide in slides {
        out.push_str("<div class=\"swiper-slide\">");
        match slide {
            Slide::Product(product) => out.push_str(&product_slide(product, config)),
            Slide::Custom(custom) => out.push_str(&custom_slide(custom, config)),
        }
        out.push_str("</div>\n");
    }
    out.push_str("</div>\n");

    if config.show_arrows {
        out.push_str("<div class=\"swiper-button-prev\"></div>\n");
        out.push_str("<div class=\"swiper-button-next\"></div>\n");
    }
    if config.pagination_style != PaginationStyle::None {
        out.push_str("<div class=\"swiper-pagination\"></div>\n");
    }

    out.push_str("</div>\n</div>\n");
    out
}

fn heading(config: &SliderConfig) -> String {
    let mut style = format!(
        "font-size:{}px;text-align:{};color:{};",
        config.heading_size,
        config.heading_align.as_str(),
        escape_html(&config.heading_color),
    );
    if config.heading_transform == HeadingTransform::Uppercase {
        style.push_str("text-transform:uppercase;");
    }
    format!(
        "<h2 class=\"ss-slider-heading\" style=\"{style}\">{}</h2>\n",
        escape_html(&config.heading),
    )
}

fn product_slide(product: &Product, config: &SliderConfig) -> String {
    let mut out = String::from("<div class=\"ss-product\">");

    if config.clickable_image {
        out.push_str(&format!(
            "<a href=\"{}\" class=\"ss-product-link\">",
            escape_html(&product.permalink)
        ));
    } else {
        out.push_str("<div class=\"ss-product-content\">");
    }

    if config.show_image {
        if let Some(image_url) = &product.image_url {
            out.push_str(&format!(
                "<img src=\"{}\" alt=\"{}\" class=\"ss-product-image\" />",
                escape_html(image_url),
                escape_html(&product.name),
            ));
        }
    }

    out.push_str("<div class=\"ss-product-info\">");

    if config.show_title {
        out.push_str(&format!(
            "<h3 class=\"ss-product-title\">{}</h3>",
            escape_html(&product.name)
        ));
    }

    if config.show_price && !product.price_html.is_empty() {
        out.push_str(&format!(
            "<div class=\"ss-product-price\">{}</div>",
            sanitize::sanitize_html(&product.price_html)
        ));
    }

    if config.show_rating && product.average_rating > 0.0 {
        out.push_str(&rating(product.average_rating));
    }

    if config.show_description && !product.short_description.is_empty() {
        out.push_str(&format!(
            "<div class=\"ss-product-description\">{}</div>",
            sanitize::sanitize_html(&product.short_description)
        ));
    }

    if product.on_sale {
        out.push_str("<span class=\"ss-product-badge ss-product-badge-sale\">Sale!</span>");
    }

    if config.show_button {
        out.push_str(&format!(
            "<div class=\"ss-product-actions\">\
             <a href=\"{}\" class=\"button ss-view-product\">{}</a></div>",
            escape_html(&product.permalink),
            escape_html(&config.button_text),
        ));
    }

    out.push_str("</div>");
    out.push_str(if config.clickable_image { "</a>" } else { "</div>" });
    out.push_str("</div>");
    out
}

fn rating(average: f64) -> String {
    let filled = average.round().clamp(0.0, 5.0) as usize;
    let stars: String = "★".repeat(filled) + &"☆".repeat(5 - filled);
    format!(
        "<div class=\"ss-product-rating\" aria-label=\"Rated {average} out of 5\">{stars}</div>"
    )
}

fn custom_slide(slide: &ResolvedCustomSlide, config: &SliderConfig) -> String {
    let mut out = String::from("<div class=\"ss-custom-slide\">");

    let clickable = config.clickable_image && !slide.url.is_empty();
    if clickable {
        out.push_str(&format!(
            "<a href=\"{}\" class=\"ss-custom-slide-link\">",
            escape_html(&slide.url)
        ));
    } else {
        out.push_str("<div class=\"ss-custom-slide-content\">");
    }

    out.push_str(&format!(
        "<img src=\"{}\" alt=\"{}\" class=\"ss-custom-slide-image\" />",
        escape_html(&slide.image_url),
        escape_html(&slide.title),
    ));

    if !slide.title.is_empty() {
        out.push_str(&format!(
            "<div class=\"ss-custom-slide-title\">{}</div>",
            escape_html(&slide.title)
        ));
    }

    out.push_str(if clickable { "</a>" } else { "</div>" });
    out.push_str("</div>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::resolve;
    use crate::settings::{keys, SettingValue, SettingsMap};

    fn sample_product() -> Product {
        Product {
            id: 5,
            name: "Teapot <Deluxe>".to_string(),
            permalink: "https://shop.test/product/5".to_string(),
            image_url: Some("https://cdn.test/teapot.jpg".to_string()),
            price_html: "<span>$25</span>".to_string(),
            short_description: "A fine pot".to_string(),
            average_rating: 4.5,
            on_sale: true,
            ..Product::default()
        }
    }

    fn render_one(settings: SettingsMap) -> String {
        let config = resolve(&settings);
        slider_markup(&config, &[Slide::Product(sample_product())], 12, "{}")
    }

    #[test]
    fn escaping() {
        assert_eq!(escape_html("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
    }

    #[test]
    fn wrapper_carries_scope_and_data_attributes() {
        let html = render_one(SettingsMap::new());
        assert!(html.contains("class=\"ss-slider ss-slider-12\""));
        assert!(html.contains("data-slider-id=\"12\""));
        assert!(html.contains("data-arrow-style=\"default\""));
        assert!(html.contains("data-arrow-position=\"inside\""));
    }

    #[test]
    fn heading_renders_only_when_configured() {
        assert!(!render_one(SettingsMap::new()).contains("ss-slider-heading"));

        let mut settings = SettingsMap::new();
        settings.set(keys::HEADING, SettingValue::text("Deals"));
        settings.set(keys::HEADING_ALIGN, SettingValue::text("center"));
        settings.set(keys::HEADING_TRANSFORM, SettingValue::text("uppercase"));
        let html = render_one(settings);
        assert!(html.contains("<h2 class=\"ss-slider-heading\""));
        assert!(html.contains("text-align:center;"));
        assert!(html.contains("text-transform:uppercase;"));
        assert!(html.contains(">Deals</h2>"));
    }

    #[test]
    fn product_fields_are_gated_by_flags() {
        let html = render_one(SettingsMap::new());
        assert!(html.contains("ss-product-title"));
        assert!(html.contains("ss-product-price"));
        assert!(html.contains("ss-product-image"));
        // Description and rating default off.
        assert!(!html.contains("ss-product-description"));
        assert!(!html.contains("ss-product-rating"));

        let mut settings = SettingsMap::new();
        settings.set(keys::SHOW_TITLE, SettingValue::text("0"));
        settings.set(keys::SHOW_RATING, SettingValue::text("1"));
        let html = render_one(settings);
        assert!(!html.contains("ss-product-title"));
        assert!(html.contains("ss-product-rating"));
        assert!(html.contains("Rated 4.5 out of 5"));
    }

    #[test]
    fn sale_badge_is_unconditional() {
        let mut settings = SettingsMap::new();
        settings.set(keys::SHOW_TITLE, SettingValue::text("0"));
        settings.set(keys::SHOW_BUTTON, SettingValue::text("0"));
        assert!(render_one(settings).contains("ss-product-badge-sale"));
    }

    #[test]
    fn product_name_is_escaped() {
        let html = render_one(SettingsMap::new());
        assert!(html.contains("Teapot &lt;Deluxe&gt;"));
        assert!(!html.contains("Teapot <Deluxe>"));
    }

    #[test]
    fn clickable_image_switches_wrapper_tag() {
        let html = render_one(SettingsMap::new());
        assert!(html.contains("<a href=\"https://shop.test/product/5\" class=\"ss-product-link\">"));

        let mut settings = SettingsMap::new();
        settings.set(keys::CLICKABLE_IMAGE, SettingValue::text("0"));
        let html = render_one(settings);
        assert!(html.contains("class=\"ss-product-content\""));
        assert!(!html.contains("ss-product-link"));
    }

    #[test]
    fn custom_slide_links_only_with_url_and_clickable() {
        let slide = ResolvedCustomSlide {
            image_url: "https://cdn.test/banner.jpg".to_string(),
            url: "https://shop.test/sale".to_string(),
            title: "Banner".to_string(),
        };
        let config = resolve(&SettingsMap::new());
        let html = slider_markup(&config, &[Slide::Custom(slide.clone())], 3, "{}");
        assert!(html.contains("ss-custom-slide-link"));
        assert!(html.contains("ss-custom-slide-title"));

        let unlinked = ResolvedCustomSlide { url: String::new(), ..slide };
        let html = slider_markup(&config, &[Slide::Custom(unlinked)], 3, "{}");
        assert!(html.contains("ss-custom-slide-content"));
        assert!(!html.contains("ss-custom-slide-link"));
    }

    #[test]
    fn navigation_and_pagination_elements_follow_config() {
        let html = render_one(SettingsMap::new());
        assert!(html.contains("swiper-button-prev"));
        assert!(html.contains("swiper-pagination"));

        let mut settings = SettingsMap::new();
        settings.set(keys::SHOW_ARROWS, SettingValue::text("0"));
        settings.set(keys::PAGINATION_STYLE, SettingValue::text("none"));
        let html = render_one(settings);
        assert!(!html.contains("swiper-button-prev"));
        assert!(!html.contains("<div class=\"swiper-pagination\"></div>"));
    }
}
