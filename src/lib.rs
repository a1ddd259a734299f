//! chordlib: guitar chord diagram rendering and scale-degree chord
//! translation.
//!
//! # Example
//! ```no_run
//! use chordlib::{degree_to_name, render_named_chord_to_svg, ChordBoxParams, ChordDictionary, Container};
//!
//! let name = degree_to_name("C", "6", true); // "Am"
//! let svg = render_named_chord_to_svg(
//!     ChordDictionary::builtin(),
//!     &name,
//!     Container::new(100.0, 120.0),
//!     &ChordBoxParams::compact(),
//! ).unwrap();
//! println!("{svg}");
//! ```

pub mod degree;
pub mod dictionary;
pub mod error;
pub mod model;
pub mod progression;
pub mod renderer;

#[cfg(target_os = "android")]
pub mod android;

pub use degree::{
    degree_to_name, name_to_degree, try_degree_to_name, try_name_to_degree, DegreeTranslator, PitchClass,
};
pub use dictionary::ChordDictionary;
pub use error::{DegreeError, DictionaryError, RenderError};
pub use model::*;
pub use progression::{
    convert_progression, progression_to_names, render_progression, split_progression, InputMode, RenderedChord,
};
pub use renderer::{
    render_chord, render_chord_to_svg, unknown_chord_svg, ChordBox, ChordBoxParams, Container, Surface, SvgBuilder,
};

/// Look up `name` in `dictionary` and render it to SVG.
pub fn render_named_chord_to_svg(
    dictionary: &ChordDictionary,
    name: &str,
    container: Container,
    params: &ChordBoxParams,
) -> Result<String, RenderError> {
    let chord = dictionary.lookup(name)?;
    render_chord_to_svg(container, chord, params)
}

/// Render a chord from the built-in dictionary with compact params, taking
/// extra params as JSON. An empty or absent JSON string means no overrides.
pub fn render_builtin_chord(
    name: &str,
    width: f64,
    height: f64,
    params_json: Option<&str>,
) -> Result<String, RenderError> {
    let overrides = match params_json.map(str::trim) {
        Some(json) if !json.is_empty() => serde_json::from_str(json).map_err(RenderError::InvalidParams)?,
        _ => ChordBoxParams::default(),
    };
    let params = ChordBoxParams::compact().merged_with(&overrides);
    render_named_chord_to_svg(ChordDictionary::builtin(), name, Container::new(width, height), &params)
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI for iOS (static library) and Android (JNI)
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// # Safety
/// `ptr` must be null or a valid null-terminated C string.
unsafe fn str_arg<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(ptr) }.to_str().ok()
}

fn into_c_string(s: String) -> *mut c_char {
    CString::new(s).map(CString::into_raw).unwrap_or(std::ptr::null_mut())
}

/// Render a chord from the built-in dictionary and return SVG as a C string.
/// The caller must free the returned string with `chordlib_free_string`.
///
/// Returns null when the chord is unknown or the size is not positive.
///
/// # Safety
/// `name` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn chordlib_render_chord(name: *const c_char, width: f64, height: f64) -> *mut c_char {
    let Some(name) = (unsafe { str_arg(name) }) else {
        return std::ptr::null_mut();
    };
    match render_builtin_chord(name, width, height, None) {
        Ok(svg) => into_c_string(svg),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Convert a degree chord to a chord name. Unconvertible input is returned
/// unchanged. The caller must free the result with `chordlib_free_string`.
///
/// # Safety
/// `key` and `chord` must be valid null-terminated UTF-8 C strings.
#[no_mangle]
pub unsafe extern "C" fn chordlib_degree_to_name(
    key: *const c_char,
    chord: *const c_char,
    shorthand: bool,
) -> *mut c_char {
    match unsafe { (str_arg(key), str_arg(chord)) } {
        (Some(key), Some(chord)) => into_c_string(degree_to_name(key, chord, shorthand)),
        _ => std::ptr::null_mut(),
    }
}

/// Convert a chord name to a degree chord. Unconvertible input is returned
/// unchanged. The caller must free the result with `chordlib_free_string`.
///
/// # Safety
/// `key` and `chord` must be valid null-terminated UTF-8 C strings.
#[no_mangle]
pub unsafe extern "C" fn chordlib_name_to_degree(
    key: *const c_char,
    chord: *const c_char,
    shorthand: bool,
) -> *mut c_char {
    match unsafe { (str_arg(key), str_arg(chord)) } {
        (Some(key), Some(chord)) => into_c_string(name_to_degree(key, chord, shorthand)),
        _ => std::ptr::null_mut(),
    }
}

/// Free a string previously returned by chordlib functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a chordlib function, or null.
#[no_mangle]
pub unsafe extern "C" fn chordlib_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}
