//! The configuration payload handed to the client-side carousel widget.
//!
//! The shape mirrors what the widget library expects at init: scalar fields
//! plus several "either `false` or an options object" members, modeled as
//! untagged enums so they serialize to exactly that.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::config::{PaginationStyle, SliderConfig};

/// Slide transition duration in milliseconds. Fixed; independent of the
/// configurable autoplay delay.
pub const TRANSITION_MS: u32 = 300;

/// Breakpoint thresholds (px) and the slides-per-view ladder they select.
const BREAKPOINTS: &[(u32, u32)] = &[(640, 2), (768, 3), (1024, 4)];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AutoplaySetting {
    Disabled(bool),
    Enabled {
        delay: u32,
        #[serde(rename = "disableOnInteraction")]
        disable_on_interaction: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PaginationSetting {
    Disabled(bool),
    Enabled {
        el: String,
        clickable: bool,
        #[serde(rename = "type")]
        kind: &'static str,
        #[serde(rename = "dynamicBullets", skip_serializing_if = "Option::is_none")]
        dynamic_bullets: Option<bool>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NavigationSetting {
    Disabled(bool),
    Enabled {
        #[serde(rename = "nextEl")]
        next_el: String,
        #[serde(rename = "prevEl")]
        prev_el: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Breakpoint {
    #[serde(rename = "slidesPerView")]
    pub slides_per_view: u32,
    #[serde(rename = "spaceBetween")]
    pub space_between: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetConfig {
    #[serde(rename = "slidesPerView")]
    pub slides_per_view: u32,
    #[serde(rename = "spaceBetween")]
    pub space_between: u32,
    pub speed: u32,
    #[serde(rename = "loop")]
    pub loop_slides: bool,
    pub autoplay: AutoplaySetting,
    pub pagination: PaginationSetting,
    pub navigation: NavigationSetting,
    pub breakpoints: BTreeMap<u32, Breakpoint>,
}

impl WidgetConfig {
    pub fn from_config(config: &SliderConfig) -> WidgetConfig {
        let autoplay = if config.autoplay {
            AutoplaySetting::Enabled {
                delay: config.autoplay_speed,
                disable_on_interaction: false,
            }
        } else {
            AutoplaySetting::Disabled(false)
        };

        let enabled_pagination = |kind: &'static str, dynamic_bullets: Option<bool>| {
            PaginationSetting::Enabled {
                el: ".swiper-pagination".to_string(),
                clickable: true,
                kind,
                dynamic_bullets,
            }
        };
        let pagination = match config.pagination_style {
            PaginationStyle::None => PaginationSetting::Disabled(false),
            PaginationStyle::Dots => enabled_pagination("bullets", Some(true)),
            PaginationStyle::ProgressBar => enabled_pagination("progressbar", None),
            PaginationStyle::Fraction => enabled_pagination("fraction", None),
        };

        let navigation = if config.show_arrows {
            NavigationSetting::Enabled {
                next_el: ".swiper-button-next".to_string(),
                prev_el: ".swiper-button-prev".to_string(),
            }
        } else {
            NavigationSetting::Disabled(false)
        };

        let breakpoints = BREAKPOINTS
            .iter()
            .map(|&(width, slides)| {
                (width, Breakpoint { slides_per_view: slides, space_between: config.slide_gap })
            })
            .collect();

        WidgetConfig {
            slides_per_view: 1,
            space_between: config.slide_gap,
            speed: TRANSITION_MS,
            loop_slides: config.loop_slides,
            autoplay,
            pagination,
            navigation,
            breakpoints,
        }
    }

    /// Serialize for the `data-config` attribute. Serialization of this
    /// type cannot fail; the fallback keeps the function total anyway.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::resolve;
    use crate::settings::{keys, SettingValue, SettingsMap};

    fn config_with(entries: &[(&str, SettingValue)]) -> SliderConfig {
        let mut settings = SettingsMap::new();
        for (key, value) in entries {
            settings.set(*key, value.clone());
        }
        resolve(&settings)
    }

    #[test]
    fn default_payload_shape() {
        let widget = WidgetConfig::from_config(&config_with(&[]));
        let json: serde_json::Value = serde_json::from_str(&widget.to_json()).unwrap();

        assert_eq!(json["slidesPerView"], 1);
        assert_eq!(json["spaceBetween"], 20);
        assert_eq!(json["speed"], 300);
        assert_eq!(json["loop"], false);
        assert_eq!(json["autoplay"], false);
        assert_eq!(json["pagination"]["type"], "bullets");
        assert_eq!(json["pagination"]["dynamicBullets"], true);
        assert_eq!(json["navigation"]["nextEl"], ".swiper-button-next");
        assert_eq!(json["breakpoints"]["640"]["slidesPerView"], 2);
        assert_eq!(json["breakpoints"]["768"]["slidesPerView"], 3);
        assert_eq!(json["breakpoints"]["1024"]["slidesPerView"], 4);
    }

    #[test]
    fn autoplay_carries_the_configured_delay() {
        let config = config_with(&[
            (keys::AUTOPLAY, SettingValue::text("1")),
            (keys::AUTOPLAY_SPEED, SettingValue::Int(5000)),
        ]);
        let json: serde_json::Value =
            serde_json::from_str(&WidgetConfig::from_config(&config).to_json()).unwrap();

        assert_eq!(json["autoplay"]["delay"], 5000);
        assert_eq!(json["autoplay"]["disableOnInteraction"], false);
        // Transition speed stays fixed regardless of the autoplay delay.
        assert_eq!(json["speed"], 300);
    }

    #[test]
    fn pagination_styles_map_to_widget_types() {
        let fraction = config_with(&[(keys::PAGINATION_STYLE, SettingValue::text("fraction"))]);
        let json: serde_json::Value =
            serde_json::from_str(&WidgetConfig::from_config(&fraction).to_json()).unwrap();
        assert_eq!(json["pagination"]["type"], "fraction");
        assert!(json["pagination"]["dynamicBullets"].is_null());

        let none = config_with(&[(keys::PAGINATION_STYLE, SettingValue::text("none"))]);
        let json: serde_json::Value =
            serde_json::from_str(&WidgetConfig::from_config(&none).to_json()).unwrap();
        assert_eq!(json["pagination"], false);
    }

    #[test]
    fn hidden_arrows_disable_navigation() {
        let config = config_with(&[(keys::SHOW_ARROWS, SettingValue::text("0"))]);
        let json: serde_json::Value =
            serde_json::from_str(&WidgetConfig::from_config(&config).to_json()).unwrap();
        assert_eq!(json["navigation"], false);
    }

    #[test]
    fn breakpoint_gap_follows_the_configured_gap() {
        let config = config_with(&[(keys::SLIDE_GAP, SettingValue::Int(35))]);
        let json: serde_json::Value =
            serde_json::from_str(&WidgetConfig::from_config(&config).to_json()).unwrap();
        assert_eq!(json["breakpoints"]["640"]["spaceBetween"], 35);
        assert_eq!(json["breakpoints"]["1024"]["spaceBetween"], 35);
    }
}
