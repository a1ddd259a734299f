//! Chord diagram renderer. Paints a [`ChordDefinition`] onto a [`Surface`].
//!
//! A diagram is drawn in a fixed order: nut (or position number), strings,
//! frets, tuning labels, finger markers, barres. [`ChordBox`] holds only its
//! resolved params and base layout, so one instance can draw any number of
//! chords.

pub mod constants;
mod layout;
mod params;
mod surface;
mod svg_builder;

pub use layout::{Layout, Metrics};
pub use params::{ChordBoxParams, ResolvedParams};
pub use surface::{Container, ElementId, Fit, Font, ShapeStyle, Stroke, Surface, TextStyle};
pub use svg_builder::{unknown_chord_svg, SvgBuilder};

use crate::error::RenderError;
use crate::model::{Barre, ChordDefinition, Fret, StringFret};
use constants::*;

// ═══════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════

/// Render `chord` into a new surface sized by `params` and fitted into
/// `container`.
pub fn render_chord<S: Surface>(
    container: Container,
    chord: &ChordDefinition,
    params: &ChordBoxParams,
) -> Result<S, RenderError> {
    if !container.is_drawable() {
        return Err(RenderError::EmptyContainer {
            width: container.width,
            height: container.height,
        });
    }
    let chord_box = ChordBox::new(params);
    let mut surface = S::create(container, chord_box.params.width, chord_box.params.height);
    chord_box.draw(&mut surface, chord);
    Ok(surface)
}

/// Render `chord` to a self-contained SVG string.
pub fn render_chord_to_svg(
    container: Container,
    chord: &ChordDefinition,
    params: &ChordBoxParams,
) -> Result<String, RenderError> {
    render_chord::<SvgBuilder>(container, chord, params).map(SvgBuilder::build)
}

// ═══════════════════════════════════════════════════════════════════════
// ChordBox
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq)]
pub struct ChordBox {
    params: ResolvedParams,
    layout: Layout,
}

impl ChordBox {
    pub fn new(params: &ChordBoxParams) -> Self {
        let params = params.resolve();
        let layout = Layout::new(&params);
        Self { params, layout }
    }

    pub fn params(&self) -> &ResolvedParams {
        &self.params
    }

    /// Layout with the tuning row reserved.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Layout used for `chord`: an explicit empty tuning gives the tuning
    /// row back to the frets.
    pub fn layout_for(&self, chord: &ChordDefinition) -> Layout {
        if chord.hides_tuning_row() {
            self.layout.without_tuning_row()
        } else {
            self.layout
        }
    }

    pub fn draw<S: Surface>(&self, surface: &mut S, chord: &ChordDefinition) {
        let diagram = Diagram::new(self, chord);
        tracing::debug!(
            fingers = chord.chord.len(),
            barres = chord.barres.len(),
            position = diagram.position,
            "drawing chord diagram"
        );

        diagram.draw_nut_or_position(surface);
        diagram.draw_strings(surface);
        diagram.draw_frets(surface);
        diagram.draw_tuning(surface);

        let labels = chord.shows_labels();
        for finger in &chord.chord {
            diagram.draw_finger(surface, finger, labels);
        }
        for barre in &chord.barres {
            diagram.draw_barre(surface, barre);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Per-draw state
// ═══════════════════════════════════════════════════════════════════════

/// Everything one draw call needs, fixed before the first primitive.
struct Diagram<'a> {
    params: &'a ResolvedParams,
    layout: Layout,
    chord: &'a ChordDefinition,
    position: u32,
    position_text: u32,
}

impl<'a> Diagram<'a> {
    fn new(chord_box: &'a ChordBox, chord: &'a ChordDefinition) -> Self {
        Self {
            params: &chord_box.params,
            layout: chord_box.layout_for(chord),
            chord,
            position: chord.position(),
            position_text: chord.position_text(),
        }
    }

    fn font(&self) -> Font<'a> {
        Font {
            family: &self.params.font_family,
            size: self.layout.metrics.font_size,
            style: &self.params.font_style,
            weight: &self.params.font_weight,
        }
    }

    fn text_style(&self) -> TextStyle<'a> {
        let color = self.params.text_color.as_str();
        TextStyle {
            stroke: Stroke { color, width: TEXT_STROKE_WIDTH },
            fill: color,
        }
    }

    /// Frets are shifted up one row when a chord at position 1 also labels
    /// row 1, so fret 1 sits on the nut.
    fn fret_shift(&self) -> i64 {
        if self.position == 1 && self.position_text == 1 {
            self.position_text as i64
        } else {
            0
        }
    }

    fn draw_nut_or_position<S: Surface>(&self, surface: &mut S) {
        let l = &self.layout;
        if self.position <= 1 {
            let half_stroke = self.params.stroke_width / 2.0;
            let from_x = l.x - half_stroke;
            let from_y = l.y - l.metrics.bridge_stroke_width;
            let width = l.last_string_x() - from_x + half_stroke;
            let height = l.y - from_y;
            surface.rect(
                from_x,
                from_y,
                width,
                height,
                &ShapeStyle {
                    fill: Some(self.params.bridge_color.as_str()),
                    ..Default::default()
                },
            );
        } else {
            surface.text(
                l.x - l.string_spacing / 2.0 - l.string_spacing * 0.1,
                l.fret_y(self.position_text as f64),
                &self.position.to_string(),
                &self.font(),
                &self.text_style(),
            );
        }
    }

    fn draw_strings<S: Surface>(&self, surface: &mut S) {
        let l = &self.layout;
        let stroke = Stroke {
            color: &self.params.string_color,
            width: self.params.string_width,
        };
        for i in 0..l.num_strings {
            let x = l.column_x(i);
            surface.line(x, l.y, x, l.last_fret_y(), &stroke);
        }
    }

    fn draw_frets<S: Surface>(&self, surface: &mut S) {
        let l = &self.layout;
        let stroke = Stroke {
            color: &self.params.fret_color,
            width: self.params.fret_width,
        };
        for i in 0..=l.num_frets {
            let y = l.fret_y(i as f64);
            surface.line(l.x, y, l.last_string_x(), y, &stroke);
        }
    }

    fn draw_tuning<S: Surface>(&self, surface: &mut S) {
        if !self.params.show_tuning {
            return;
        }
        let l = &self.layout;
        let y = l.last_fret_y() + l.fret_spacing / 12.0;
        let (font, style) = (self.font(), self.text_style());
        for (i, label) in self.chord.tuning_labels().into_iter().take(l.num_strings as usize).enumerate() {
            surface.text(l.column_x(i as u32), y, label, &font, &style);
        }
    }

    fn draw_finger<S: Surface>(&self, surface: &mut S, finger: &StringFret, labels: bool) {
        let l = &self.layout;
        let p = self.params;

        let fret_num = match finger.fret {
            Fret::Mute => 0,
            Fret::Fretted(f) => f as i64 - self.fret_shift(),
        };

        let x = l.string_x(finger.string);
        let mut y = l.fret_y(fret_num as f64);
        if fret_num == 0 {
            y -= l.metrics.bridge_stroke_width;
        }

        if finger.fret.is_mute() {
            surface.text(x, y - l.fret_spacing, MUTE_GLYPH, &self.font(), &self.text_style());
        } else {
            let fill = if fret_num > 0 { p.stroke_color.as_str() } else { p.bg_color.as_str() };
            surface.circle(
                x,
                y - l.fret_spacing / 2.0,
                p.circle_radius.unwrap_or(l.metrics.circle_radius),
                &ShapeStyle {
                    fill: Some(fill),
                    stroke: Some(Stroke { color: &p.stroke_color, width: p.stroke_width }),
                    corner_radius: None,
                },
            );
        }

        let label = match (&finger.label, labels) {
            (Some(label), true) if !label.is_empty() => label,
            _ => return,
        };
        let size = l.metrics.font_size * LABEL_FONT_SCALE;
        let color = if fret_num != 0 { p.label_color.as_str() } else { p.stroke_color.as_str() };
        surface.text(
            x,
            y - l.fret_spacing / 2.0 - size * LABEL_Y_SHIFT,
            label,
            &Font { size, weight: &p.label_weight, ..self.font() },
            &TextStyle {
                stroke: Stroke { color, width: LABEL_STROKE_WIDTH },
                fill: color,
            },
        );
    }

    fn draw_barre<S: Surface>(&self, surface: &mut S, barre: &Barre) {
        let l = &self.layout;
        let fret_num = barre.fret as i64 - self.fret_shift();

        let x = l.string_x(barre.from) - l.metrics.bar_shift_x;
        let x_to = l.string_x(barre.to) + l.metrics.bar_shift_x;

        let cell_top = l.fret_y((fret_num - 1) as f64);
        let y = cell_top + l.fret_spacing / 4.0;
        let y_to = cell_top + l.fret_spacing / 4.0 * 3.0;

        surface.rect(
            x,
            y,
            x_to - x,
            y_to - y,
            &ShapeStyle {
                fill: Some(self.params.stroke_color.as_str()),
                stroke: None,
                corner_radius: Some(l.metrics.barre_radius),
            },
        );
    }
}
