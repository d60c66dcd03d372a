//! Sanitization and validation layer.
//!
//! Every value crossing the trust boundary (persisted settings, admin form
//! submissions) passes through one of these functions before rendering sees
//! it. All of them are total: any input, however malformed, yields a defined
//! output, and nothing here ever returns an error.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::settings::{SettingValue, SettingsMap};

/// Tags allowed through [`sanitize_html`], with their allowed attributes.
const ALLOWED_TAGS: &[(&str, &[&str])] = &[
    ("p", &[]),
    ("strong", &[]),
    ("em", &[]),
    ("b", &[]),
    ("i", &[]),
    ("u", &[]),
    ("a", &["href", "title", "target", "rel"]),
    ("br", &[]),
    ("ul", &[]),
    ("ol", &[]),
    ("li", &[]),
    ("span", &["class"]),
];

/// URL schemes rejected outright (case-insensitive prefix match).
const DENIED_SCHEMES: &[&str] = &["javascript", "data", "vbscript"];

fn script_block_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        RegexBuilder::new(r"<(?:script|style)\b[^>]*>.*?</(?:script|style)\s*>")
            .case_insensitive(true)
            .dot_matches_new_line(true)
            .build()
            .unwrap()
    })
}

fn open_script_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        RegexBuilder::new(r"<(?:script|style)\b.*$")
            .case_insensitive(true)
            .dot_matches_new_line(true)
            .build()
            .unwrap()
    })
}

fn any_tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<[^>]*>?").unwrap())
}

/// Strip all markup, including the contents of script/style blocks.
fn strip_all_tags(input: &str) -> String {
    let no_scripts = script_block_regex().replace_all(input, "");
    let no_scripts = open_script_regex().replace_all(&no_scripts, "");
    any_tag_regex().replace_all(&no_scripts, "").into_owned()
}

/// Strip all markup and normalize whitespace to single spaces.
pub fn sanitize_text(text: &str) -> String {
    let stripped = strip_all_tags(text);
    let cleaned: String = stripped.chars().filter(|c| !c.is_control()).collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn attr_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"([a-zA-Z-]+)\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap())
}

fn escape_attr_value(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Strip all tags except a small allow-list (p, strong, em, b, i, u,
/// a[href|title|target|rel], br, ul, ol, li, span[class]).
///
/// Disallowed tags are removed but their text content is kept. `href`
/// attributes additionally pass through [`sanitize_url`] and are dropped if
/// it rejects them.
pub fn sanitize_html(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(lt) = rest.find('<') {
        out.push_str(&rest[..lt]);
        let tag_rest = &rest[lt + 1..];

        let Some(gt) = tag_rest.find('>') else {
            // Unterminated tag: drop the remainder, as strip_tags does.
            return out;
        };
        let body = &tag_rest[..gt];
        rest = &tag_rest[gt + 1..];

        let (closing, body) = match body.strip_prefix('/') {
            Some(b) => (true, b),
            None => (false, body),
        };
        let name: String = body
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();

        let Some((_, allowed_attrs)) = ALLOWED_TAGS.iter().find(|(t, _)| *t == name) else {
            continue;
        };

        if closing {
            out.push_str("</");
            out.push_str(&name);
            out.push('>');
            continue;
        }

        out.push('<');
        out.push_str(&name);
        for caps in attr_regex().captures_iter(body) {
            let attr = caps[1].to_ascii_lowercase();
            if !allowed_attrs.contains(&attr.as_str()) {
                continue;
            }
            let raw_value = caps.get(2).or_else(|| caps.get(3)).map_or("", |m| m.as_str());
            let value = if attr == "href" {
                sanitize_url(raw_value)
            } else {
                raw_value.to_string()
            };
            if attr == "href" && value.is_empty() {
                continue;
            }
            out.push(' ');
            out.push_str(&attr);
            out.push_str("=\"");
            out.push_str(&escape_attr_value(&value));
            out.push('"');
        }
        if name == "br" {
            out.push_str(" /");
        }
        out.push('>');
    }

    out.push_str(rest);
    out
}

fn url_char_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)[^a-z0-9\-~+_.?#=!&;,/:%@$|*'()\[\]\u{80}-\u{10FFFF}]").unwrap()
    })
}

/// Escape a URL for storage and reject dangerous schemes.
///
/// Returns the empty string when the scheme prefix matches the denylist
/// (javascript, data, vbscript), case-insensitively.
pub fn sanitize_url(url: &str) -> String {
    let url = url.trim_start().replace(' ', "%20");
    let url = url_char_regex().replace_all(&url, "").into_owned();

    let lower = url.to_ascii_lowercase();
    for scheme in DENIED_SCHEMES {
        if lower.starts_with(&format!("{scheme}:")) {
            return String::new();
        }
    }

    url
}

/// Leading-integer parse: optional sign followed by digits, anything after
/// is ignored. Non-numeric input parses as 0.
fn int_from_text(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let run: String = digits.chars().take_while(char::is_ascii_digit).collect();
    let magnitude: i64 = run.parse().unwrap_or(0);
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Coerce to a non-negative integer: negatives and non-numeric input become 0.
pub fn sanitize_integer(value: &SettingValue) -> u64 {
    let int = match value {
        SettingValue::Bool(true) => 1,
        SettingValue::Bool(false) => 0,
        SettingValue::Int(i) => *i,
        SettingValue::Float(f) => *f as i64,
        SettingValue::Text(s) => int_from_text(s),
        SettingValue::Slides(_) | SettingValue::List(_) => 0,
    };
    int.max(0) as u64
}

/// Boolean coercion accepting `true`/`false`, `"1"`/`"0"`, `"true"`/`"false"`
/// and the usual truthy string forms.
pub fn sanitize_boolean(value: &SettingValue) -> bool {
    value.truthy()
}

fn hex_color_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$").unwrap())
}

/// Accept `#RGB` / `#RRGGBB` after trimming; anything else yields `default`
/// verbatim.
pub fn sanitize_hex_color(color: &str, default: &str) -> String {
    let color = color.trim();
    if hex_color_regex().is_match(color) {
        color.to_string()
    } else {
        default.to_string()
    }
}

/// Map every element through [`sanitize_integer`], drop zeroes, and
/// re-index densely. Order is preserved; duplicates are not collapsed.
pub fn sanitize_array_of_integers(values: &[SettingValue]) -> Vec<u64> {
    values
        .iter()
        .map(sanitize_integer)
        .filter(|&id| id != 0)
        .collect()
}

fn css_protocol_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        RegexBuilder::new(r"(?:javascript|vbscript|data)\s*:\s*")
            .case_insensitive(true)
            .build()
            .unwrap()
    })
}

/// Strip markup and the `javascript:`/`vbscript:`/`data:` substrings from a
/// custom style sheet.
///
/// This is a denylist, not a CSS parser: it does not validate syntax and
/// cannot catch every injection vector (`url()` exfiltration on attribute
/// selectors, for one).
pub fn sanitize_css(css: &str) -> String {
    let stripped = strip_all_tags(css);
    css_protocol_regex().replace_all(&stripped, "").into_owned()
}

fn text_of(value: &SettingValue) -> String {
    match value {
        SettingValue::Text(s) => s.clone(),
        SettingValue::Int(i) => i.to_string(),
        SettingValue::Float(f) => f.to_string(),
        SettingValue::Bool(true) => "1".to_string(),
        SettingValue::Bool(false) => String::new(),
        SettingValue::Slides(_) | SettingValue::List(_) => String::new(),
    }
}

/// A fully sanitized, range-clamped slider configuration as produced by the
/// save path. Every field is populated; there is no error case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SanitizedConfig {
    pub title: String,
    pub description: String,
    pub slides_visible: u64,
    pub autoplay: bool,
    pub speed: u64,
    pub bg_color: String,
    pub product_ids: Vec<u64>,
    pub link_url: String,
    pub custom_css: String,
    #[serde(rename = "loop")]
    pub loop_slides: bool,
    pub navigation: bool,
    pub pagination: bool,
    pub lazy_loading: bool,
    pub transition_speed: u64,
}

impl Default for SanitizedConfig {
    fn default() -> SanitizedConfig {
        SanitizedConfig {
            title: String::new(),
            description: String::new(),
            slides_visible: 3,
            autoplay: false,
            speed: 300,
            bg_color: "#ffffff".to_string(),
            product_ids: Vec::new(),
            link_url: String::new(),
            custom_css: String::new(),
            loop_slides: true,
            navigation: true,
            pagination: true,
            lazy_loading: true,
            transition_speed: 300,
        }
    }
}

impl SanitizedConfig {
    /// Project back into a settings map, the shape the save path persists.
    pub fn to_settings(&self) -> SettingsMap {
        let mut map = SettingsMap::new();
        map.set("title", SettingValue::text(self.title.as_str()));
        map.set("description", SettingValue::text(self.description.as_str()));
        map.set("slides_visible", SettingValue::Int(self.slides_visible as i64));
        map.set("autoplay", SettingValue::Bool(self.autoplay));
        map.set("speed", SettingValue::Int(self.speed as i64));
        map.set("bg_color", SettingValue::text(self.bg_color.as_str()));
        map.set(
            "product_ids",
            SettingValue::List(self.product_ids.iter().map(|&id| SettingValue::Int(id as i64)).collect()),
        );
        map.set("link_url", SettingValue::text(self.link_url.as_str()));
        map.set("custom_css", SettingValue::text(self.custom_css.as_str()));
        map.set("loop", SettingValue::Bool(self.loop_slides));
        map.set("navigation", SettingValue::Bool(self.navigation));
        map.set("pagination", SettingValue::Bool(self.pagination));
        map.set("lazy_loading", SettingValue::Bool(self.lazy_loading));
        map.set("transition_speed", SettingValue::Int(self.transition_speed as i64));
        map
    }
}

/// Sanitize a complete slider configuration: merge over defaults, apply the
/// per-field sanitizer to every key, then clamp numeric ranges (1-6 slides
/// visible, 100-10000 ms speed, 100-3000 ms transition).
///
/// Total by construction: any input map yields a fully populated record.
pub fn sanitize_slider_config(raw: &SettingsMap) -> SanitizedConfig {
    let defaults = SanitizedConfig::default();

    let text_field = |key: &str, default: &str| match raw.get(key) {
        Some(v) => sanitize_text(&text_of(v)),
        None => default.to_string(),
    };
    let int_field = |key: &str, default: u64| match raw.get(key) {
        Some(v) => sanitize_integer(v),
        None => default,
    };
    let bool_field = |key: &str, default: bool| match raw.get(key) {
        Some(v) => sanitize_boolean(v),
        None => default,
    };

    let description = match raw.get("description") {
        Some(v) => sanitize_html(&text_of(v)),
        None => defaults.description.clone(),
    };
    let bg_color = match raw.get("bg_color") {
        Some(v) => sanitize_hex_color(&text_of(v), &defaults.bg_color),
        None => defaults.bg_color.clone(),
    };
    let product_ids = match raw.get("product_ids") {
        Some(SettingValue::List(values)) => sanitize_array_of_integers(values),
        Some(other) => sanitize_array_of_integers(std::slice::from_ref(other)),
        None => Vec::new(),
    };
    let link_url = match raw.get("link_url") {
        Some(v) => sanitize_url(&text_of(v)),
        None => defaults.link_url.clone(),
    };
    let custom_css = match raw.get("custom_css") {
        Some(v) => sanitize_css(&text_of(v)),
        None => defaults.custom_css.clone(),
    };

    SanitizedConfig {
        title: text_field("title", &defaults.title),
        description,
        slides_visible: int_field("slides_visible", defaults.slides_visible).clamp(1, 6),
        autoplay: bool_field("autoplay", defaults.autoplay),
        speed: int_field("speed", defaults.speed).clamp(100, 10_000),
        bg_color,
        product_ids,
        link_url,
        custom_css,
        loop_slides: bool_field("loop", defaults.loop_slides),
        navigation: bool_field("navigation", defaults.navigation),
        pagination: bool_field("pagination", defaults.pagination),
        lazy_loading: bool_field("lazy_loading", defaults.lazy_loading),
        transition_speed: int_field("transition_speed", defaults.transition_speed).clamp(100, 3000),
    }
}
