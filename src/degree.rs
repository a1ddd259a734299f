//! Conversion between scale-degree chords (`2m7`) and pitch-name chords
//! (`Dm7`) within a major key.
//!
//! Keys and roots are spelled with sharps only. Flat suffixes such as `b5`
//! are carried along as part of the chord type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DegreeError;

/// Semitone offsets of the major (Ionian) scale degrees from the tonic.
pub const MAJOR_SCALE: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];

// ═══════════════════════════════════════════════════════════════════════
// Pitch classes
// ═══════════════════════════════════════════════════════════════════════

/// One of the 12 chromatic pitches, named with sharps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PitchClass {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl PitchClass {
    /// All pitch classes in chromatic order starting at C.
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::CSharp,
        PitchClass::D,
        PitchClass::DSharp,
        PitchClass::E,
        PitchClass::F,
        PitchClass::FSharp,
        PitchClass::G,
        PitchClass::GSharp,
        PitchClass::A,
        PitchClass::ASharp,
        PitchClass::B,
    ];

    /// Semitones above C.
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Self {
        Self::ALL[(index % 12) as usize]
    }

    /// Canonical sharp spelling, e.g. `"F#"`.
    pub fn name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::CSharp => "C#",
            PitchClass::D => "D",
            PitchClass::DSharp => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F#",
            PitchClass::G => "G",
            PitchClass::GSharp => "G#",
            PitchClass::A => "A",
            PitchClass::ASharp => "A#",
            PitchClass::B => "B",
        }
    }

    /// Look up a canonical name. Flat spellings are not recognised.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.name() == name)
    }

    /// The pitch `semitones` above this one.
    pub fn transpose(self, semitones: u8) -> Self {
        Self::from_index(self.index() + semitones % 12)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PitchClass {
    type Err = DegreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| DegreeError::UnknownKey(s.to_string()))
    }
}

impl TryFrom<String> for PitchClass {
    type Error = DegreeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PitchClass> for String {
    fn from(p: PitchClass) -> Self {
        p.name().to_string()
    }
}

fn parse_key(key: &str) -> Result<PitchClass, DegreeError> {
    PitchClass::from_name(key).ok_or_else(|| DegreeError::UnknownKey(key.to_string()))
}

/// Split a name chord into its root and chord type.
///
/// The root is two characters when the second one is `#` or `b`.
pub fn split_root(name_chord: &str) -> (&str, &str) {
    let mut chars = name_chord.char_indices();
    let Some((_, first)) = chars.next() else {
        return ("", "");
    };
    let first_end = first.len_utf8();
    match chars.next() {
        Some((i, '#')) | Some((i, 'b')) => name_chord.split_at(i + 1),
        _ => name_chord.split_at(first_end),
    }
}

/// Degrees that read as minor under the shorthand convention.
fn is_minor_degree(degree: u8) -> bool {
    matches!(degree, 2 | 3 | 6)
}

// ═══════════════════════════════════════════════════════════════════════
// Translator
// ═══════════════════════════════════════════════════════════════════════

/// Degree/name translator with a fixed shorthand convention.
///
/// With shorthand enabled a bare `2`, `3` or `6` means a minor chord and a
/// bare `7` a diminished one; an explicit `M` suffix forces the plain chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DegreeTranslator {
    pub shorthand: bool,
}

impl Default for DegreeTranslator {
    fn default() -> Self {
        Self { shorthand: true }
    }
}

impl DegreeTranslator {
    pub fn new(shorthand: bool) -> Self {
        Self { shorthand }
    }

    pub fn try_degree_to_name(&self, key: &str, degree_chord: &str) -> Result<String, DegreeError> {
        try_degree_to_name(key, degree_chord, self.shorthand)
    }

    pub fn try_name_to_degree(&self, key: &str, name_chord: &str) -> Result<String, DegreeError> {
        try_name_to_degree(key, name_chord, self.shorthand)
    }

    pub fn degree_to_name(&self, key: &str, degree_chord: &str) -> String {
        degree_to_name(key, degree_chord, self.shorthand)
    }

    pub fn name_to_degree(&self, key: &str, name_chord: &str) -> String {
        name_to_degree(key, name_chord, self.shorthand)
    }
}

/// Convert a degree chord (`2m7`) to a name chord (`Dm7`) in `key`.
pub fn try_degree_to_name(key: &str, degree_chord: &str, shorthand: bool) -> Result<String, DegreeError> {
    let mut chars = degree_chord.chars();
    let degree = chars
        .next()
        .and_then(|c| c.to_digit(10))
        .filter(|&d| d > 0)
        .ok_or_else(|| DegreeError::Parse(degree_chord.to_string()))? as u8;

    let suffix = chars.as_str();
    let chord_type = if suffix.is_empty() && shorthand {
        if is_minor_degree(degree) {
            "m"
        } else if degree == 7 {
            "dim"
        } else {
            ""
        }
    } else if suffix == "M" {
        ""
    } else {
        suffix
    };

    let tonic = parse_key(key)?;
    let root = tonic.transpose(MAJOR_SCALE[((degree - 1) % 7) as usize]);
    Ok(format!("{}{}", root, chord_type))
}

/// Convert a name chord (`Dm7`) to a degree chord (`2m7`) in `key`.
pub fn try_name_to_degree(key: &str, name_chord: &str, shorthand: bool) -> Result<String, DegreeError> {
    let (root_name, suffix) = split_root(name_chord);

    let tonic = parse_key(key)?;
    let root = PitchClass::from_name(root_name)
        .ok_or_else(|| DegreeError::UnknownRoot(root_name.to_string()))?;

    let distance = (root.index() + 12 - tonic.index()) % 12;
    let degree = MAJOR_SCALE
        .iter()
        .position(|&offset| offset == distance)
        .map(|i| i as u8 + 1)
        .ok_or_else(|| DegreeError::NonDiatonic {
            chord: name_chord.to_string(),
            key: key.to_string(),
        })?;

    let mut chord_type = suffix;
    if shorthand {
        let implied = if is_minor_degree(degree) {
            Some("m")
        } else if degree == 7 {
            Some("dim")
        } else {
            None
        };
        if let Some(implied) = implied {
            if chord_type == implied {
                chord_type = "";
            } else if chord_type.is_empty() {
                chord_type = "M";
            }
        }
    }

    Ok(format!("{}{}", degree, chord_type))
}

/// Like [`try_degree_to_name`], but returns `degree_chord` unchanged when it
/// cannot be converted.
pub fn degree_to_name(key: &str, degree_chord: &str, shorthand: bool) -> String {
    try_degree_to_name(key, degree_chord, shorthand).unwrap_or_else(|err| {
        tracing::debug!(key, chord = degree_chord, %err, "degree chord left unchanged");
        degree_chord.to_string()
    })
}

/// Like [`try_name_to_degree`], but returns `name_chord` unchanged when it
/// cannot be converted.
pub fn name_to_degree(key: &str, name_chord: &str, shorthand: bool) -> String {
    try_name_to_degree(key, name_chord, shorthand).unwrap_or_else(|err| {
        tracing::debug!(key, chord = name_chord, %err, "name chord left unchanged");
        name_chord.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pitch_class_names_round_trip() {
        for p in PitchClass::ALL {
            assert_eq!(PitchClass::from_name(p.name()), Some(p));
            assert_eq!(PitchClass::from_index(p.index()), p);
        }
        assert_eq!(PitchClass::from_name("Bb"), None);
        assert_eq!(PitchClass::from_name("H"), None);
    }

    #[test]
    fn transpose_wraps_octave() {
        assert_eq!(PitchClass::A.transpose(4), PitchClass::CSharp);
        assert_eq!(PitchClass::B.transpose(1), PitchClass::C);
    }

    #[test]
    fn split_root_handles_accidentals() {
        assert_eq!(split_root("C#m7"), ("C#", "m7"));
        assert_eq!(split_root("Bbmaj7"), ("Bb", "maj7"));
        assert_eq!(split_root("Dm7b5"), ("D", "m7b5"));
        assert_eq!(split_root("G"), ("G", ""));
        assert_eq!(split_root(""), ("", ""));
    }

    #[test]
    fn errors_are_typed() {
        assert_eq!(
            try_degree_to_name("C", "x", true),
            Err(DegreeError::Parse("x".into()))
        );
        assert_eq!(
            try_degree_to_name("C", "", true),
            Err(DegreeError::Parse("".into()))
        );
        assert_eq!(
            try_degree_to_name("H", "1", true),
            Err(DegreeError::UnknownKey("H".into()))
        );
        assert_eq!(
            try_name_to_degree("C", "H7", true),
            Err(DegreeError::UnknownRoot("H".into()))
        );
        assert_eq!(
            try_name_to_degree("C", "C#", true),
            Err(DegreeError::NonDiatonic { chord: "C#".into(), key: "C".into() })
        );
    }

    #[test]
    fn flat_root_is_unknown() {
        assert_eq!(
            try_name_to_degree("C", "Bb", true),
            Err(DegreeError::UnknownRoot("Bb".into()))
        );
        assert_eq!(name_to_degree("C", "Bb", true), "Bb");
    }

    #[test]
    fn degrees_above_seven_wrap() {
        assert_eq!(degree_to_name("C", "8", false), "C");
        assert_eq!(degree_to_name("C", "9m", false), "Dm");
    }

    #[test]
    fn zero_degree_is_rejected() {
        assert_eq!(degree_to_name("C", "0", true), "0");
    }

    #[test]
    fn translator_fixes_convention() {
        let t = DegreeTranslator::new(false);
        assert_eq!(t.degree_to_name("C", "2"), "D");
        assert_eq!(t.name_to_degree("C", "Dm"), "2m");
        assert!(DegreeTranslator::default().shorthand);
    }
}
