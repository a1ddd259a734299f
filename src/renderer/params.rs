//! Rendering parameters for a chord box.
//!
//! [`ChordBoxParams`] is what callers pass in: every field optional, camelCase
//! when deserialized. [`ResolvedParams`] is the same set with all defaults
//! and fallbacks applied.

use serde::{Deserialize, Serialize};

use super::constants::*;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChordBoxParams {
    pub num_strings: Option<u32>,
    pub num_frets: Option<u32>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub stroke_width: Option<f64>,
    pub show_tuning: Option<bool>,
    pub default_color: Option<String>,
    pub bg_color: Option<String>,
    pub label_color: Option<String>,
    pub string_color: Option<String>,
    pub fret_color: Option<String>,
    pub bridge_color: Option<String>,
    pub stroke_color: Option<String>,
    pub text_color: Option<String>,
    pub string_width: Option<f64>,
    pub fret_width: Option<f64>,
    pub font_family: Option<String>,
    pub font_size: Option<f64>,
    pub font_style: Option<String>,
    pub font_weight: Option<String>,
    pub label_weight: Option<String>,
    /// Overrides the derived finger-dot radius
    pub circle_radius: Option<f64>,
}

impl ChordBoxParams {
    /// Overrides used for dictionary thumbnails: four frets, no tuning row.
    pub fn compact() -> Self {
        Self {
            num_frets: Some(4),
            show_tuning: Some(false),
            ..Self::default()
        }
    }

    /// Layer `overrides` on top of `self`; set fields in `overrides` win.
    pub fn merged_with(&self, overrides: &ChordBoxParams) -> ChordBoxParams {
        fn pick<T: Clone>(over: &Option<T>, base: &Option<T>) -> Option<T> {
            over.clone().or_else(|| base.clone())
        }
        ChordBoxParams {
            num_strings: pick(&overrides.num_strings, &self.num_strings),
            num_frets: pick(&overrides.num_frets, &self.num_frets),
            x: pick(&overrides.x, &self.x),
            y: pick(&overrides.y, &self.y),
            width: pick(&overrides.width, &self.width),
            height: pick(&overrides.height, &self.height),
            stroke_width: pick(&overrides.stroke_width, &self.stroke_width),
            show_tuning: pick(&overrides.show_tuning, &self.show_tuning),
            default_color: pick(&overrides.default_color, &self.default_color),
            bg_color: pick(&overrides.bg_color, &self.bg_color),
            label_color: pick(&overrides.label_color, &self.label_color),
            string_color: pick(&overrides.string_color, &self.string_color),
            fret_color: pick(&overrides.fret_color, &self.fret_color),
            bridge_color: pick(&overrides.bridge_color, &self.bridge_color),
            stroke_color: pick(&overrides.stroke_color, &self.stroke_color),
            text_color: pick(&overrides.text_color, &self.text_color),
            string_width: pick(&overrides.string_width, &self.string_width),
            fret_width: pick(&overrides.fret_width, &self.fret_width),
            font_family: pick(&overrides.font_family, &self.font_family),
            font_size: pick(&overrides.font_size, &self.font_size),
            font_style: pick(&overrides.font_style, &self.font_style),
            font_weight: pick(&overrides.font_weight, &self.font_weight),
            label_weight: pick(&overrides.label_weight, &self.label_weight),
            circle_radius: pick(&overrides.circle_radius, &self.circle_radius),
        }
    }

    /// Apply defaults. Unset (or empty/zero) entity colors and widths fall
    /// back to `defaultColor` and `strokeWidth`.
    pub fn resolve(&self) -> ResolvedParams {
        let text = |v: &Option<String>, default: &str| -> String {
            v.as_deref()
                .filter(|s| !s.is_empty())
                .unwrap_or(default)
                .to_string()
        };
        let positive = |v: Option<f64>| v.filter(|n| *n > 0.0);

        let default_color = text(&self.default_color, DEFAULT_COLOR);
        let stroke_width = positive(self.stroke_width).unwrap_or(DEFAULT_STROKE_WIDTH);

        ResolvedParams {
            num_strings: self.num_strings.filter(|n| *n > 0).unwrap_or(DEFAULT_NUM_STRINGS),
            num_frets: self.num_frets.unwrap_or(DEFAULT_NUM_FRETS),
            x: self.x.unwrap_or(0.0),
            y: self.y.unwrap_or(0.0),
            width: positive(self.width).unwrap_or(DEFAULT_WIDTH),
            height: positive(self.height).unwrap_or(DEFAULT_HEIGHT),
            stroke_width,
            show_tuning: self.show_tuning.unwrap_or(true),
            bg_color: text(&self.bg_color, DEFAULT_BG_COLOR),
            label_color: text(&self.label_color, DEFAULT_LABEL_COLOR),
            string_color: text(&self.string_color, &default_color),
            fret_color: text(&self.fret_color, &default_color),
            bridge_color: text(&self.bridge_color, &default_color),
            stroke_color: text(&self.stroke_color, &default_color),
            text_color: text(&self.text_color, &default_color),
            string_width: positive(self.string_width).unwrap_or(stroke_width),
            fret_width: positive(self.fret_width).unwrap_or(stroke_width),
            font_family: text(&self.font_family, DEFAULT_FONT_FAMILY),
            font_size: positive(self.font_size),
            font_style: text(&self.font_style, DEFAULT_FONT_STYLE),
            font_weight: text(&self.font_weight, DEFAULT_FONT_WEIGHT),
            label_weight: text(&self.label_weight, DEFAULT_LABEL_WEIGHT),
            circle_radius: positive(self.circle_radius),
            default_color,
        }
    }
}

/// Fully-defaulted chord box parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedParams {
    pub num_strings: u32,
    pub num_frets: u32,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub stroke_width: f64,
    pub show_tuning: bool,
    pub default_color: String,
    pub bg_color: String,
    pub label_color: String,
    pub string_color: String,
    pub fret_color: String,
    pub bridge_color: String,
    pub stroke_color: String,
    pub text_color: String,
    pub string_width: f64,
    pub fret_width: f64,
    pub font_family: String,
    /// `None` lets the layout derive a size from the board width
    pub font_size: Option<f64>,
    pub font_style: String,
    pub font_weight: String,
    pub label_weight: String,
    pub circle_radius: Option<f64>,
}

impl Default for ResolvedParams {
    fn default() -> Self {
        ChordBoxParams::default().resolve()
    }
}
