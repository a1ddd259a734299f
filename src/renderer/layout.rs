//! Layout computation: derives board geometry from the chord box params.
//!
//! Everything here is a pure function of [`ResolvedParams`]; two boxes built
//! from equal params get equal layouts.

use super::constants::*;
use super::params::ResolvedParams;

/// Sizes derived from the board dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub circle_radius: f64,
    pub barre_radius: f64,
    pub font_size: f64,
    pub bar_shift_x: f64,
    pub bridge_stroke_width: f64,
}

/// Board geometry in unscaled surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Drawable board width (75% of the box)
    pub width: f64,
    /// Drawable board height (75% of the box)
    pub height: f64,
    pub num_strings: u32,
    pub num_frets: u32,
    pub string_spacing: f64,
    pub fret_spacing: f64,
    /// Top-left corner of the nut row
    pub x: f64,
    pub y: f64,
    pub metrics: Metrics,
}

impl Layout {
    pub fn new(params: &ResolvedParams) -> Self {
        let width = params.width * BOARD_SCALE;
        let height = params.height * BOARD_SCALE;

        let num_strings = params.num_strings;
        let num_frets = params.num_frets;
        let string_spacing = width / num_strings as f64;
        // One spare row below the last fret for the tuning labels
        let fret_spacing = height / (num_frets as f64 + 2.0);

        // Room on the sides for markers on the outer strings
        let x = params.x + params.width * BOARD_MARGIN + string_spacing / 2.0;
        let y = params.y + params.height * BOARD_MARGIN + fret_spacing;

        let metrics = Metrics {
            circle_radius: width / CIRCLE_RADIUS_DIV,
            barre_radius: width / BARRE_RADIUS_DIV,
            font_size: params.font_size.unwrap_or_else(|| (width / FONT_SIZE_DIV).ceil()),
            bar_shift_x: width / BAR_SHIFT_DIV,
            bridge_stroke_width: (height / BRIDGE_STROKE_DIV).ceil(),
        };

        Self {
            width,
            height,
            num_strings,
            num_frets,
            string_spacing,
            fret_spacing,
            x,
            y,
            metrics,
        }
    }

    /// The same layout with the tuning row given back to the frets.
    ///
    /// Only the spacing changes; the origin stays where [`Layout::new`] put it.
    pub fn without_tuning_row(&self) -> Self {
        Self {
            fret_spacing: self.height / (self.num_frets as f64 + 1.0),
            ..*self
        }
    }

    /// X of a string, numbered from the right (string 1 is the rightmost).
    ///
    /// Numbers outside `1..=num_strings` land off the board.
    pub fn string_x(&self, string: u32) -> f64 {
        let column = self.num_strings as f64 - string as f64;
        self.x + self.string_spacing * column
    }

    /// X of the leftmost column plus `column` string spacings.
    pub fn column_x(&self, column: u32) -> f64 {
        self.x + self.string_spacing * column as f64
    }

    /// Y of fret line `row`; row 0 is the nut.
    pub fn fret_y(&self, row: f64) -> f64 {
        self.y + self.fret_spacing * row
    }

    pub fn last_string_x(&self) -> f64 {
        self.column_x(self.num_strings.saturating_sub(1))
    }

    pub fn last_fret_y(&self) -> f64 {
        self.fret_y(self.num_frets as f64)
    }
}
