//! Data model for chord fingering diagrams.
//!
//! The serialized shape follows the compact array form used by chord
//! dictionaries: `{"chord": [[1, 0], [2, 1], [6, "x"]], "position": 3}`.

use serde::{Deserialize, Serialize};

/// Open-string labels used when a chord does not specify its own tuning.
pub const STANDARD_TUNING: [&str; 6] = ["E", "A", "D", "G", "B", "E"];

/// Fingering of a single chord shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordDefinition {
    /// One entry per played or muted string
    pub chord: Vec<StringFret>,
    /// Fret the diagram starts at; 0 or 1 draws the nut
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    /// Row offset of the position number; defaults to `position`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_text: Option<u32>,
    /// Barres, drawn after the individual fingers
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub barres: Vec<Barre>,
    /// Open-string labels. `None` means standard tuning, an empty list hides
    /// the tuning row.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tuning: Option<Vec<String>>,
}

impl ChordDefinition {
    pub fn new(chord: Vec<StringFret>) -> Self {
        Self {
            chord,
            position: None,
            position_text: None,
            barres: Vec::new(),
            tuning: None,
        }
    }

    pub fn with_position(mut self, position: u32) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_position_text(mut self, position_text: u32) -> Self {
        self.position_text = Some(position_text);
        self
    }

    pub fn with_barre(mut self, from: u32, to: u32, fret: u32) -> Self {
        self.barres.push(Barre { from, to, fret });
        self
    }

    pub fn with_tuning<I, S>(mut self, tuning: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tuning = Some(tuning.into_iter().map(Into::into).collect());
        self
    }

    pub fn position(&self) -> u32 {
        self.position.unwrap_or(0)
    }

    pub fn position_text(&self) -> u32 {
        self.position_text.unwrap_or_else(|| self.position())
    }

    /// Tuning labels to draw, falling back to standard tuning.
    pub fn tuning_labels(&self) -> Vec<&str> {
        match &self.tuning {
            Some(t) => t.iter().map(String::as_str).collect(),
            None => STANDARD_TUNING.to_vec(),
        }
    }

    /// Whether an explicit empty tuning asks for the tuning row to be dropped.
    pub fn hides_tuning_row(&self) -> bool {
        matches!(&self.tuning, Some(t) if t.is_empty())
    }

    /// Finger labels are drawn only for chords listing more than two strings.
    pub fn shows_labels(&self) -> bool {
        self.chord.len() > 2
    }
}

/// A fret value: a fret number (0 = open) or a muted string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FretRepr", into = "FretRepr")]
pub enum Fret {
    Fretted(u32),
    Mute,
}

impl Fret {
    pub fn is_mute(self) -> bool {
        matches!(self, Fret::Mute)
    }
}

impl From<u32> for Fret {
    fn from(n: u32) -> Self {
        Fret::Fretted(n)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum FretRepr {
    Number(u32),
    Text(String),
}

impl TryFrom<FretRepr> for Fret {
    type Error = String;

    fn try_from(repr: FretRepr) -> Result<Self, Self::Error> {
        match repr {
            FretRepr::Number(n) => Ok(Fret::Fretted(n)),
            FretRepr::Text(t) if t.eq_ignore_ascii_case("x") => Ok(Fret::Mute),
            FretRepr::Text(t) => Err(format!("invalid fret value '{t}', expected a number or \"x\"")),
        }
    }
}

impl From<Fret> for FretRepr {
    fn from(fret: Fret) -> Self {
        match fret {
            Fret::Fretted(n) => FretRepr::Number(n),
            Fret::Mute => FretRepr::Text("x".into()),
        }
    }
}

/// `(string, fret, label)`; string 1 is the highest-pitched string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StringFretRepr", into = "StringFretRepr")]
pub struct StringFret {
    pub string: u32,
    pub fret: Fret,
    pub label: Option<String>,
}

impl StringFret {
    pub fn new(string: u32, fret: u32) -> Self {
        Self { string, fret: Fret::Fretted(fret), label: None }
    }

    pub fn muted(string: u32) -> Self {
        Self { string, fret: Fret::Mute, label: None }
    }

    pub fn labelled(string: u32, fret: u32, label: impl Into<String>) -> Self {
        Self { string, fret: Fret::Fretted(fret), label: Some(label.into()) }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum StringFretRepr {
    Labelled(u32, Fret, String),
    Plain(u32, Fret),
}

impl From<StringFretRepr> for StringFret {
    fn from(repr: StringFretRepr) -> Self {
        match repr {
            StringFretRepr::Labelled(string, fret, label) => Self { string, fret, label: Some(label) },
            StringFretRepr::Plain(string, fret) => Self { string, fret, label: None },
        }
    }
}

impl From<StringFret> for StringFretRepr {
    fn from(sf: StringFret) -> Self {
        match sf.label {
            Some(label) => StringFretRepr::Labelled(sf.string, sf.fret, label),
            None => StringFretRepr::Plain(sf.string, sf.fret),
        }
    }
}

/// One finger pressing strings `from`..=`to` at `fret`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Barre {
    #[serde(rename = "fromString")]
    pub from: u32,
    #[serde(rename = "toString")]
    pub to: u32,
    pub fret: u32,
}
