//! Scoped inline CSS for one slider instance.
//!
//! Selectors are qualified by the `ss-slider-{scope}` class so several
//! sliders can share a page without cross-contaminating styles. The
//! sanitized custom style sheet is appended last so author CSS wins over
//! every generated rule.

use crate::color::darken_color;
use crate::config::{ArrowPosition, ArrowStyle, BarPosition, PaginationStyle, SliderConfig};

/// Percentage by which hover shades are darkened.
const HOVER_DARKEN_PERCENT: u32 = 15;

/// Percentage by which the gradient end stop is darkened.
const GRADIENT_DARKEN_PERCENT: u32 = 25;

pub(crate) fn inline_css(config: &SliderConfig, scope: u64) -> String {
    let root = format!(".ss-slider-{scope}");
    let mut css = String::new();

    button_rules(&mut css, &root, config);
    design_rules(&mut css, &root, config);
    if config.show_arrows {
        arrow_rules(&mut css, &root, config);
    }
    if config.pagination_style == PaginationStyle::ProgressBar {
        progress_bar_rules(&mut css, &root, config);
    }

    if !config.custom_css.is_empty() {
        css.push_str(&config.custom_css);
        css.push('\n');
    }

    css
}

fn button_rules(css: &mut String, root: &str, config: &SliderConfig) {
    let hover = darken_color(&config.button_color, HOVER_DARKEN_PERCENT);
    css.push_str(&format!(
        "{root} .ss-product-actions .button,\n{root} .ss-view-product {{ \
         background-color: {c} !important; border-color: {c} !important; color: {t} !important; }}\n",
        c = config.button_color,
        t = config.button_text_color,
    ));
    css.push_str(&format!(
        "{root} .ss-product-actions .button:hover,\n{root} .ss-view-product:hover {{ \
         background-color: {h} !important; border-color: {h} !important; }}\n",
        h = hover,
    ));
}

fn design_rules(css: &mut String, root: &str, config: &SliderConfig) {
    if config.max_width > 0 {
        css.push_str(&format!(
            "{root} {{ max-width: {}px; margin-left: auto; margin-right: auto; }}\n",
            config.max_width,
        ));
    }
    css.push_str(&format!(
        "{root} .ss-product,\n{root} .ss-custom-slide {{ background-color: {}; border-radius: {}px; }}\n",
        config.secondary_color, config.border_radius,
    ));
    css.push_str(&format!(
        "{root} .ss-product-image,\n{root} .ss-custom-slide-image {{ border-radius: {}px; }}\n",
        config.border_radius,
    ));
}

fn arrow_rules(css: &mut String, root: &str, config: &SliderConfig) {
    let background = arrow_background(config);

    css.push_str(&format!(
        "{root} .swiper-button-prev,\n{root} .swiper-button-next {{ \
         width: {size}px; height: {size}px; color: {color}; background: {background}; {shape} }}\n",
        size = config.arrow_size,
        color = config.arrow_color,
        shape = arrow_shape(config.arrow_style),
    ));

    if config.arrow_style != ArrowStyle::Minimal {
        css.push_str(&format!(
            "{root} .swiper-button-prev:hover,\n{root} .swiper-button-next:hover {{ background: {}; }}\n",
            darken_color(base_arrow_color(config), HOVER_DARKEN_PERCENT),
        ));
    }

    match config.arrow_position {
        ArrowPosition::Inside => {
            css.push_str(&format!(
                "{root} .swiper-button-prev {{ left: 10px; }}\n{root} .swiper-button-next {{ right: 10px; }}\n",
            ));
        }
        ArrowPosition::Outside => {
            let offset = config.arrow_size + 10;
            css.push_str(&format!(
                "{root} .swiper-button-prev {{ left: -{offset}px; }}\n{root} .swiper-button-next {{ right: -{offset}px; }}\n",
            ));
        }
        ArrowPosition::Center => {
            css.push_str(&format!(
                "{root} .swiper-button-prev,\n{root} .swiper-button-next {{ top: 50%; transform: translateY(-50%); }}\n",
            ));
        }
    }
}

fn base_arrow_color(config: &SliderConfig) -> &str {
    match config.arrow_style {
        ArrowStyle::Themed => &config.primary_color,
        _ => &config.arrow_bg_color,
    }
}

fn arrow_background(config: &SliderConfig) -> String {
    if config.arrow_style == ArrowStyle::Minimal {
        return "transparent".to_string();
    }
    let base = base_arrow_color(config);
    if config.nav_arrow_gradient {
        format!(
            "linear-gradient(135deg, {base}, {})",
            darken_color(base, GRADIENT_DARKEN_PERCENT)
        )
    } else {
        base.to_string()
    }
}

fn arrow_shape(style: ArrowStyle) -> &'static str {
    match style {
        ArrowStyle::Default | ArrowStyle::Themed => "border-radius: 50%;",
        ArrowStyle::Square => "border-radius: 0;",
        ArrowStyle::RoundedSquare => "border-radius: 8px;",
        ArrowStyle::Minimal => "border-radius: 0; box-shadow: none;",
    }
}

fn progress_bar_rules(css: &mut String, root: &str, config: &SliderConfig) {
    let position = match config.bar_position {
        BarPosition::Top => "top: 0; bottom: auto;",
        BarPosition::Bottom => "top: auto; bottom: 0;",
    };
    css.push_str(&format!(
        "{root} .swiper-pagination-progressbar {{ height: {}px; {position} background: rgba(0, 0, 0, 0.1); }}\n",
        config.bar_height,
    ));
    css.push_str(&format!(
        "{root} .swiper-pagination-progressbar .swiper-pagination-progressbar-fill {{ background: {}; }}\n",
        config.bar_color,
    ));
}
