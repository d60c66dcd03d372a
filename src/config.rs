//! Configuration resolution: the persisted settings bag in, one normalized
//! [`SliderConfig`] out.
//!
//! Every field has a well-defined default, so a slider with no stored
//! settings (or arbitrarily malformed ones) still resolves to a coherent,
//! renderable configuration. Resolution never fails; existence and publish
//! state are the shortcode engine's concern.

use serde::{Deserialize, Serialize};

use crate::sanitize;
use crate::settings::{keys, SettingValue, SettingsMap};
use crate::slides::CustomSlide;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaginationStyle {
    Dots,
    ProgressBar,
    Fraction,
    None,
}

impl PaginationStyle {
    fn from_setting(value: &str) -> Option<PaginationStyle> {
        match value {
            "dots" => Some(PaginationStyle::Dots),
            "progress_bar" | "progress-bar" => Some(PaginationStyle::ProgressBar),
            "fraction" => Some(PaginationStyle::Fraction),
            "none" => Some(PaginationStyle::None),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrowStyle {
    Default,
    Square,
    RoundedSquare,
    Minimal,
    Themed,
}

impl ArrowStyle {
    fn from_setting(value: &str) -> Option<ArrowStyle> {
        match value {
            "default" => Some(ArrowStyle::Default),
            "square" => Some(ArrowStyle::Square),
            "rounded_square" | "rounded-square" => Some(ArrowStyle::RoundedSquare),
            "minimal" => Some(ArrowStyle::Minimal),
            "themed" => Some(ArrowStyle::Themed),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ArrowStyle::Default => "default",
            ArrowStyle::Square => "square",
            ArrowStyle::RoundedSquare => "rounded_square",
            ArrowStyle::Minimal => "minimal",
            ArrowStyle::Themed => "themed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrowPosition {
    Inside,
    Outside,
    Center,
}

impl ArrowPosition {
    fn from_setting(value: &str) -> Option<ArrowPosition> {
        match value {
            "inside" => Some(ArrowPosition::Inside),
            "outside" => Some(ArrowPosition::Outside),
            "center" => Some(ArrowPosition::Center),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ArrowPosition::Inside => "inside",
            ArrowPosition::Outside => "outside",
            ArrowPosition::Center => "center",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarPosition {
    Top,
    Bottom,
}

impl BarPosition {
    fn from_setting(value: &str) -> Option<BarPosition> {
        match value {
            "top" => Some(BarPosition::Top),
            "bottom" => Some(BarPosition::Bottom),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadingAlign {
    Left,
    Center,
    Right,
}

impl HeadingAlign {
    fn from_setting(value: &str) -> Option<HeadingAlign> {
        match value {
            "left" => Some(HeadingAlign::Left),
            "center" => Some(HeadingAlign::Center),
            "right" => Some(HeadingAlign::Right),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HeadingAlign::Left => "left",
            HeadingAlign::Center => "center",
            HeadingAlign::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadingTransform {
    None,
    Uppercase,
}

impl HeadingTransform {
    fn from_setting(value: &str) -> Option<HeadingTransform> {
        match value {
            "none" => Some(HeadingTransform::None),
            "uppercase" => Some(HeadingTransform::Uppercase),
            _ => None,
        }
    }
}

/// Default polarity for every boolean setting.
///
/// Display flags default on and are persisted as `"0"` to disable; opt-in
/// behaviors default off and are persisted as `"1"` to enable. The asymmetry
/// is a behavioral contract and is encoded here per field rather than
/// inferred anywhere else.
const FLAG_DEFAULTS: &[(&str, bool)] = &[
    (keys::SHOW_IMAGE, true),
    (keys::SHOW_TITLE, true),
    (keys::SHOW_PRICE, true),
    (keys::SHOW_BUTTON, true),
    (keys::CLICKABLE_IMAGE, true),
    (keys::SHOW_ARROWS, true),
    (keys::SHOW_DESCRIPTION, false),
    (keys::SHOW_RATING, false),
    (keys::AUTOPLAY, false),
    (keys::LOOP, false),
    (keys::NAV_ARROW_GRADIENT, false),
];

pub(crate) fn flag_default(key: &str) -> bool {
    FLAG_DEFAULTS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, d)| *d)
        .unwrap_or(false)
}

/// The defaults that differ between the published-render path and the admin
/// live-preview path.
///
/// The divergence (preview showcasing different colors and a larger radius)
/// is preserved from the original behavior on purpose; see DESIGN.md. Do not
/// unify the two tables without product guidance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultPalette {
    pub primary_color: &'static str,
    pub secondary_color: &'static str,
    pub button_color: &'static str,
    pub border_radius: u32,
}

impl DefaultPalette {
    /// Defaults used when rendering a published slider.
    pub fn published() -> DefaultPalette {
        DefaultPalette {
            primary_color: "#000000",
            secondary_color: "#ffffff",
            button_color: "#0073aa",
            border_radius: 4,
        }
    }

    /// Defaults used by the admin live preview for not-yet-saved forms.
    pub fn preview() -> DefaultPalette {
        DefaultPalette {
            primary_color: "#111827",
            secondary_color: "#f9fafb",
            button_color: "#2563eb",
            border_radius: 8,
        }
    }
}

/// The fully-defaulted, typed configuration for one slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    // Content
    pub products: Vec<u64>,
    pub custom_slides: Vec<CustomSlide>,

    // Display
    pub show_image: bool,
    pub show_title: bool,
    pub show_price: bool,
    pub show_description: bool,
    pub show_rating: bool,
    pub show_button: bool,
    pub clickable_image: bool,
    pub button_text: String,
    pub heading: String,
    pub heading_size: u32,
    pub heading_align: HeadingAlign,
    pub heading_color: String,
    pub heading_transform: HeadingTransform,

    // Design
    pub primary_color: String,
    pub secondary_color: String,
    pub button_color: String,
    pub button_text_color: String,
    pub border_radius: u32,
    pub slide_gap: u32,
    pub max_width: u32,

    // Navigation
    pub pagination_style: PaginationStyle,
    pub show_arrows: bool,
    pub arrow_style: ArrowStyle,
    pub arrow_position: ArrowPosition,
    pub arrow_color: String,
    pub arrow_bg_color: String,
    pub nav_arrow_gradient: bool,
    pub arrow_size: u32,
    pub bar_color: String,
    pub bar_height: u32,
    pub bar_position: BarPosition,

    // Behavior
    #[serde(rename = "loop")]
    pub loop_slides: bool,
    pub autoplay: bool,
    pub autoplay_speed: u32,

    pub custom_css: String,
}

/// Resolve the configuration for a published slider from its persisted
/// settings. Missing or empty values fall back to the published defaults.
pub fn resolve(settings: &SettingsMap) -> SliderConfig {
    resolve_with(settings, &DefaultPalette::published())
}

/// Resolve a configuration from an admin-submitted, not-yet-persisted form.
///
/// Mirrors [`resolve`] field for field but uses the preview defaults for the
/// fields where the two paths intentionally diverge.
pub fn resolve_from_submitted_form(form: &SettingsMap) -> SliderConfig {
    resolve_with(form, &DefaultPalette::preview())
}

fn resolve_with(settings: &SettingsMap, palette: &DefaultPalette) -> SliderConfig {
    SliderConfig {
        products: product_ids(settings),
        custom_slides: custom_slides(settings),

        show_image: flag(settings, keys::SHOW_IMAGE),
        show_title: flag(settings, keys::SHOW_TITLE),
        show_price: flag(settings, keys::SHOW_PRICE),
        show_description: flag(settings, keys::SHOW_DESCRIPTION),
        show_rating: flag(settings, keys::SHOW_RATING),
        show_button: flag(settings, keys::SHOW_BUTTON),
        clickable_image: flag(settings, keys::CLICKABLE_IMAGE),
        button_text: text_or(settings, keys::BUTTON_TEXT, "View Product"),
        heading: text_or(settings, keys::HEADING, ""),
        heading_size: int_or(settings, keys::HEADING_SIZE, 28, 12, 72),
        heading_align: enum_or(settings, keys::HEADING_ALIGN, HeadingAlign::Left, HeadingAlign::from_setting),
        heading_color: color_or(settings, keys::HEADING_COLOR, "#000000"),
        heading_transform: enum_or(
            settings,
            keys::HEADING_TRANSFORM,
            HeadingTransform::None,
            HeadingTransform::from_setting,
        ),

        primary_color: color_or(settings, keys::PRIMARY_COLOR, palette.primary_color),
        secondary_color: color_or(settings, keys::SECONDARY_COLOR, palette.secondary_color),
        button_color: color_or(settings, keys::BUTTON_COLOR, palette.button_color),
        button_text_color: color_or(settings, keys::BUTTON_TEXT_COLOR, "#ffffff"),
        border_radius: int_or(settings, keys::BORDER_RADIUS, palette.border_radius, 0, 50),
        slide_gap: int_or(settings, keys::SLIDE_GAP, 20, 0, 100),
        max_width: int_or(settings, keys::MAX_WIDTH, 1200, 0, 3000),

        pagination_style: enum_or(
            settings,
            keys::PAGINATION_STYLE,
            PaginationStyle::Dots,
            PaginationStyle::from_setting,
        ),
        show_arrows: flag(settings, keys::SHOW_ARROWS),
        arrow_style: enum_or(settings, keys::ARROW_STYLE, ArrowStyle::Default, ArrowStyle::from_setting),
        arrow_position: enum_or(
            settings,
            keys::ARROW_POSITION,
            ArrowPosition::Inside,
            ArrowPosition::from_setting,
        ),
        arrow_color: color_or(settings, keys::ARROW_COLOR, "#ffffff"),
        arrow_bg_color: color_or(settings, keys::ARROW_BG_COLOR, "#000000"),
        nav_arrow_gradient: flag(settings, keys::NAV_ARROW_GRADIENT),
        arrow_size: int_or(settings, keys::ARROW_SIZE, 40, 20, 100),
        bar_color: color_or(settings, keys::BAR_COLOR, "#0073aa"),
        bar_height: int_or(settings, keys::BAR_HEIGHT, 4, 1, 20),
        bar_position: enum_or(settings, keys::BAR_POSITION, BarPosition::Bottom, BarPosition::from_setting),

        loop_slides: flag(settings, keys::LOOP),
        autoplay: flag(settings, keys::AUTOPLAY),
        autoplay_speed: int_or(settings, keys::AUTOPLAY_SPEED, 3000, 1000, 10_000),

        custom_css: settings
            .get(keys::CUSTOM_CSS)
            .and_then(SettingValue::as_text)
            .map(sanitize::sanitize_css)
            .unwrap_or_default(),
    }
}

/// Boolean resolution with per-field polarity.
///
/// Fields defaulting on are true unless explicitly stored as `"0"` (or
/// `false`/`0`); fields defaulting off are false unless explicitly stored as
/// `"1"` (or `true`/non-zero). An absent or empty value is the default.
fn flag(settings: &SettingsMap, key: &str) -> bool {
    let default = flag_default(key);
    let Some(value) = settings.get(key) else {
        return default;
    };
    if value.is_empty() {
        return default;
    }
    match value {
        SettingValue::Bool(b) => *b,
        SettingValue::Int(i) => *i != 0,
        SettingValue::Text(s) => {
            if default {
                s.trim() != "0"
            } else {
                s.trim() == "1"
            }
        }
        _ => default,
    }
}

/// Text resolution: absent or empty stored values fall back to the default.
fn text_or(settings: &SettingsMap, key: &str, default: &str) -> String {
    match settings.get(key) {
        Some(value) if !value.is_empty() => match value {
            SettingValue::Text(s) => sanitize::sanitize_text(s),
            other => sanitize::sanitize_text(&sanitize::sanitize_integer(other).to_string()),
        },
        _ => default.to_string(),
    }
}

fn color_or(settings: &SettingsMap, key: &str, default: &str) -> String {
    match settings.text(key) {
        Some(s) => sanitize::sanitize_hex_color(s, default),
        None => default.to_string(),
    }
}

/// Integer resolution: absent, empty, or zero stored values fall back to the
/// default (matching the original's empty-value handling), everything else
/// is clamped to the documented range.
fn int_or(settings: &SettingsMap, key: &str, default: u32, min: u32, max: u32) -> u32 {
    let value = match settings.get(key) {
        Some(v) => sanitize::sanitize_integer(v),
        None => return default,
    };
    if value == 0 {
        return default;
    }
    (value.min(u64::from(u32::MAX)) as u32).clamp(min, max)
}

fn enum_or<T>(settings: &SettingsMap, key: &str, default: T, parse: fn(&str) -> Option<T>) -> T {
    settings
        .text(key)
        .and_then(|s| parse(s.trim()))
        .unwrap_or(default)
}

fn product_ids(settings: &SettingsMap) -> Vec<u64> {
    match settings.get(keys::PRODUCTS) {
        Some(SettingValue::List(values)) => sanitize::sanitize_array_of_integers(values),
        Some(other) => sanitize::sanitize_array_of_integers(std::slice::from_ref(other)),
        None => Vec::new(),
    }
}

// Imageless slides are kept here: they still count as "configured" for the
// shortcode state machine and are only excluded when slides are merged.
fn custom_slides(settings: &SettingsMap) -> Vec<CustomSlide> {
    match settings.get(keys::CUSTOM_SLIDES) {
        Some(SettingValue::Slides(slides)) => slides.clone(),
        _ => Vec::new(),
    }
}

/// Store-wide defaults applied only when a slider is created.
///
/// Injected explicitly rather than read from an ambient option store so the
/// seeding logic is testable in isolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalDefaults {
    pub autoplay: bool,
    #[serde(rename = "loop")]
    pub loop_slides: bool,
    pub autoplay_speed: u32,
}

impl Default for GlobalDefaults {
    fn default() -> GlobalDefaults {
        GlobalDefaults {
            autoplay: true,
            loop_slides: true,
            autoplay_speed: 3000,
        }
    }
}

/// Initial settings for a newly created slider, seeded from the store-wide
/// defaults. Independent of the slider's later lifecycle.
pub fn new_slider_settings(globals: &GlobalDefaults) -> SettingsMap {
    let mut settings = SettingsMap::new();
    settings.set(keys::AUTOPLAY, SettingValue::text(if globals.autoplay { "1" } else { "0" }));
    settings.set(keys::LOOP, SettingValue::text(if globals.loop_slides { "1" } else { "0" }));
    settings.set(
        keys::AUTOPLAY_SPEED,
        SettingValue::Int(i64::from(globals.autoplay_speed.clamp(1000, 10_000))),
    );
    settings
}

/// Sanitize an admin-submitted settings form into the persisted shape.
///
/// Checkbox-backed flags are persisted as `"1"`/`"0"` strings; an absent
/// checkbox means unchecked, so every known flag is always written. Colors,
/// integers, text and the custom style sheet go through their respective
/// sanitizers; custom slides without an image reference are dropped.
pub fn sanitize_submitted_form(raw: &SettingsMap) -> SettingsMap {
    let mut out = SettingsMap::new();
    let palette = DefaultPalette::published();

    for (key, _) in FLAG_DEFAULTS {
        let checked = raw.get(key).map(SettingValue::truthy).unwrap_or(false);
        out.set(*key, SettingValue::text(if checked { "1" } else { "0" }));
    }

    let mut set_text = |key: &str| {
        if let Some(value) = raw.get(key) {
            if let Some(s) = value.as_text() {
                out.set(key, SettingValue::text(sanitize::sanitize_text(s)));
            }
        }
    };
    set_text(keys::BUTTON_TEXT);
    set_text(keys::HEADING);

    let color_fields = [
        (keys::PRIMARY_COLOR, palette.primary_color),
        (keys::SECONDARY_COLOR, palette.secondary_color),
        (keys::BUTTON_COLOR, palette.button_color),
        (keys::BUTTON_TEXT_COLOR, "#ffffff"),
        (keys::HEADING_COLOR, "#000000"),
        (keys::ARROW_COLOR, "#ffffff"),
        (keys::ARROW_BG_COLOR, "#000000"),
        (keys::BAR_COLOR, "#0073aa"),
    ];
    for (key, default) in color_fields {
        if let Some(s) = raw.text(key) {
            out.set(key, SettingValue::text(sanitize::sanitize_hex_color(s, default)));
        }
    }

    let int_fields = [
        keys::BORDER_RADIUS,
        keys::SLIDE_GAP,
        keys::MAX_WIDTH,
        keys::ARROW_SIZE,
        keys::BAR_HEIGHT,
        keys::HEADING_SIZE,
        keys::AUTOPLAY_SPEED,
    ];
    for key in int_fields {
        if let Some(value) = raw.get(key) {
            out.set(key, SettingValue::Int(sanitize::sanitize_integer(value) as i64));
        }
    }

    let enum_fields = [
        keys::PAGINATION_STYLE,
        keys::ARROW_STYLE,
        keys::ARROW_POSITION,
        keys::BAR_POSITION,
        keys::HEADING_ALIGN,
        keys::HEADING_TRANSFORM,
    ];
    for key in enum_fields {
        if let Some(s) = raw.text(key) {
            out.set(key, SettingValue::text(sanitize::sanitize_text(s)));
        }
    }

    if let Some(value) = raw.get(keys::CUSTOM_CSS) {
        if let Some(s) = value.as_text() {
            out.set(keys::CUSTOM_CSS, SettingValue::text(sanitize::sanitize_css(s)));
        }
    }

    if let Some(SettingValue::List(values)) = raw.get(keys::PRODUCTS) {
        out.set(
            keys::PRODUCTS,
            SettingValue::List(
                sanitize::sanitize_array_of_integers(values)
                    .into_iter()
                    .map(|id| SettingValue::Int(id as i64))
                    .collect(),
            ),
        );
    }

    if let Some(SettingValue::Slides(slides)) = raw.get(keys::CUSTOM_SLIDES) {
        let cleaned: Vec<CustomSlide> = slides
            .iter()
            .filter(|slide| slide.has_image())
            .map(|slide| CustomSlide {
                image_id: slide.image_id,
                url: sanitize::sanitize_url(&slide.url),
                title: sanitize::sanitize_text(&slide.title),
            })
            .collect();
        out.set(keys::CUSTOM_SLIDES, SettingValue::Slides(cleaned));
    }

    out
}
