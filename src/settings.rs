use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::slides::CustomSlide;

/// Keys under which slider settings are persisted.
///
/// Every setting is individually optional at the persistence layer; the
/// configuration resolver is the only component that interprets these keys.
pub mod keys {
    pub const PRODUCTS: &str = "products";
    pub const CUSTOM_SLIDES: &str = "custom_slides";

    pub const SHOW_IMAGE: &str = "show_image";
    pub const SHOW_TITLE: &str = "show_title";
    pub const SHOW_PRICE: &str = "show_price";
    pub const SHOW_DESCRIPTION: &str = "show_description";
    pub const SHOW_RATING: &str = "show_rating";
    pub const SHOW_BUTTON: &str = "show_button";
    pub const CLICKABLE_IMAGE: &str = "clickable_image";
    pub const BUTTON_TEXT: &str = "button_text";
    pub const HEADING: &str = "heading";
    pub const HEADING_SIZE: &str = "heading_size";
    pub const HEADING_ALIGN: &str = "heading_align";
    pub const HEADING_COLOR: &str = "heading_color";
    pub const HEADING_TRANSFORM: &str = "heading_transform";

    pub const PRIMARY_COLOR: &str = "primary_color";
    pub const SECONDARY_COLOR: &str = "secondary_color";
    pub const BUTTON_COLOR: &str = "button_color";
    pub const BUTTON_TEXT_COLOR: &str = "button_text_color";
    pub const BORDER_RADIUS: &str = "border_radius";
    pub const SLIDE_GAP: &str = "slide_gap";
    pub const MAX_WIDTH: &str = "max_width";

    pub const PAGINATION_STYLE: &str = "pagination_style";
    pub const SHOW_ARROWS: &str = "show_arrows";
    pub const ARROW_STYLE: &str = "arrow_style";
    pub const ARROW_POSITION: &str = "arrow_position";
    pub const ARROW_COLOR: &str = "arrow_color";
    pub const ARROW_BG_COLOR: &str = "arrow_bg_color";
    pub const NAV_ARROW_GRADIENT: &str = "nav_arrow_gradient";
    pub const ARROW_SIZE: &str = "arrow_size";
    pub const BAR_COLOR: &str = "bar_color";
    pub const BAR_HEIGHT: &str = "bar_height";
    pub const BAR_POSITION: &str = "bar_position";

    pub const AUTOPLAY: &str = "autoplay";
    pub const LOOP: &str = "loop";
    pub const AUTOPLAY_SPEED: &str = "autoplay_speed";

    pub const CUSTOM_CSS: &str = "custom_css";
}

/// A single persisted setting value.
///
/// The persistence layer is loosely typed: booleans arrive as `"1"`/`"0"`
/// strings from checkbox saves, numbers as integers or numeric strings, and
/// list-valued settings as arrays of whatever was submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Slides(Vec<CustomSlide>),
    List(Vec<SettingValue>),
}

impl SettingValue {
    pub fn text(s: impl Into<String>) -> SettingValue {
        SettingValue::Text(s.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            SettingValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Truthy coercion for boolean-ish inputs: `true`, non-zero numbers and
    /// the strings `"1"`, `"true"`, `"on"`, `"yes"` (case-insensitive) are
    /// true; everything else, including list values, is false.
    pub fn truthy(&self) -> bool {
        match self {
            SettingValue::Bool(b) => *b,
            SettingValue::Int(i) => *i != 0,
            SettingValue::Float(f) => *f != 0.0,
            SettingValue::Text(s) => {
                matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "on" | "yes")
            }
            SettingValue::Slides(_) | SettingValue::List(_) => false,
        }
    }

    /// "Empty" in the sense the resolver uses for fall-back-to-default:
    /// the value carries no usable content.
    pub fn is_empty(&self) -> bool {
        match self {
            SettingValue::Text(s) => s.trim().is_empty(),
            SettingValue::Slides(slides) => slides.is_empty(),
            SettingValue::List(values) => values.is_empty(),
            SettingValue::Bool(_) | SettingValue::Int(_) | SettingValue::Float(_) => false,
        }
    }
}

/// The persisted settings bag for one slider.
///
/// Untyped access stops at the configuration resolver; downstream code only
/// ever sees the typed [`crate::config::SliderConfig`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsMap {
    values: HashMap<String, SettingValue>,
}

impl SettingsMap {
    pub fn new() -> SettingsMap {
        SettingsMap::default()
    }

    pub fn get(&self, key: &str) -> Option<&SettingValue> {
        self.values.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: SettingValue) {
        self.values.insert(key.into(), value);
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// The stored string for `key`, if the value is textual.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(SettingValue::as_text)
    }
}

impl FromIterator<(String, SettingValue)> for SettingsMap {
    fn from_iter<T: IntoIterator<Item = (String, SettingValue)>>(iter: T) -> SettingsMap {
        SettingsMap {
            values: iter.into_iter().collect(),
        }
    }
}
