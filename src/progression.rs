//! Chord progressions written as whitespace-separated chords, in either
//! degree (`4 5 3 6`) or name (`F G Em Am`) notation.

use serde::{Deserialize, Serialize};

use crate::degree::{degree_to_name, name_to_degree};
use crate::dictionary::ChordDictionary;
use crate::error::RenderError;
use crate::renderer::{render_chord_to_svg, unknown_chord_svg, ChordBoxParams, Container};

/// Notation a progression is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    Degree,
    Name,
}

/// A named degree progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub id: &'static str,
    pub progression: &'static str,
}

pub const PRESETS: [Preset; 6] = [
    Preset { id: "1645", progression: "1 6 4 5" },
    Preset { id: "1625", progression: "1 6 2 5" },
    Preset { id: "canon", progression: "1 5 6 3 4 1 2 5" },
    Preset { id: "4536251", progression: "4 5 3 6 2 5 1" },
    Preset { id: "1564", progression: "1 5 6 4" },
    Preset { id: "6415", progression: "6 4 1 5" },
];

/// Progression shown before the user types anything.
pub const DEFAULT_PROGRESSION: &str = "4 5 3 6 2 5 1";

pub fn preset(id: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.id == id)
}

/// Split on runs of whitespace, dropping empty tokens.
pub fn split_progression(input: &str) -> Vec<&str> {
    input.split_whitespace().collect()
}

/// Resolve a progression to chord names in `key`.
///
/// Degree chords that cannot be converted are kept as typed.
pub fn progression_to_names(key: &str, input: &str, mode: InputMode, shorthand: bool) -> Vec<String> {
    split_progression(input)
        .into_iter()
        .map(|chord| match mode {
            InputMode::Degree => degree_to_name(key, chord, shorthand),
            InputMode::Name => chord.to_string(),
        })
        .collect()
}

/// Rewrite a progression into `target` notation, space-joined.
///
/// The input is assumed to be in the other notation; chords that do not
/// convert are carried over unchanged.
pub fn convert_progression(key: &str, input: &str, target: InputMode, shorthand: bool) -> String {
    split_progression(input)
        .into_iter()
        .map(|chord| match target {
            InputMode::Degree => name_to_degree(key, chord, shorthand),
            InputMode::Name => degree_to_name(key, chord, shorthand),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Append a preset to what has been typed so far.
pub fn append_preset(current: &str, preset: &str) -> String {
    format!("{} {}", current, preset)
}

/// One diagram of a rendered progression.
#[derive(Debug)]
pub struct RenderedChord {
    pub name: String,
    pub svg: Result<String, RenderError>,
}

impl RenderedChord {
    /// The diagram, or a placeholder naming the chord when it has none.
    pub fn svg_or_placeholder(&self, container: Container) -> String {
        match &self.svg {
            Ok(svg) => svg.clone(),
            Err(_) => unknown_chord_svg(&self.name, container),
        }
    }
}

/// Render every chord of a progression, one SVG per chord.
///
/// A chord missing from `dictionary` fails on its own entry; the rest are
/// still rendered.
pub fn render_progression(
    dictionary: &ChordDictionary,
    key: &str,
    input: &str,
    mode: InputMode,
    shorthand: bool,
    container: Container,
    params: &ChordBoxParams,
) -> Vec<RenderedChord> {
    progression_to_names(key, input, mode, shorthand)
        .into_iter()
        .map(|name| {
            let svg = dictionary
                .lookup(&name)
                .and_then(|def| render_chord_to_svg(container, def, params));
            if let Err(ref err) = svg {
                tracing::warn!(chord = %name, %err, "chord diagram not rendered");
            }
            RenderedChord { name, svg }
        })
        .collect()
}
