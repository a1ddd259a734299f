//! JNI bindings for Android.
//!
//! These functions are called from Kotlin via the JNI bridge.

use jni::objects::{JClass, JString};
use jni::sys::{jboolean, jfloat, jstring, JNI_TRUE};
use jni::JNIEnv;

use crate::{degree_to_name, name_to_degree, render_builtin_chord};

fn new_jstring(env: &mut JNIEnv, s: &str) -> jstring {
    match env.new_string(s) {
        Ok(js) => js.into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

fn get_string(env: &mut JNIEnv, s: &JString) -> Option<String> {
    if s.is_null() {
        return None;
    }
    env.get_string(s).ok().map(|s| s.into())
}

/// Render a chord from the built-in dictionary to SVG.
///
/// Called from Kotlin as:
///   external fun renderChord(name: String, width: Float, height: Float, paramsJson: String?): String?
#[no_mangle]
pub extern "system" fn Java_com_chordlib_app_ChordLib_renderChord(
    mut env: JNIEnv,
    _class: JClass,
    name: JString,
    width: jfloat,
    height: jfloat,
    params_json: JString,
) -> jstring {
    let Some(name) = get_string(&mut env, &name) else {
        return std::ptr::null_mut();
    };
    let params = get_string(&mut env, &params_json);

    match render_builtin_chord(&name, width as f64, height as f64, params.as_deref()) {
        Ok(svg) => new_jstring(&mut env, &svg),
        Err(err) => {
            tracing::warn!(chord = %name, %err, "renderChord failed");
            std::ptr::null_mut()
        }
    }
}

/// Called from Kotlin as:
///   external fun degreeToName(key: String, chord: String, shorthand: Boolean): String?
#[no_mangle]
pub extern "system" fn Java_com_chordlib_app_ChordLib_degreeToName(
    mut env: JNIEnv,
    _class: JClass,
    key: JString,
    chord: JString,
    shorthand: jboolean,
) -> jstring {
    match (get_string(&mut env, &key), get_string(&mut env, &chord)) {
        (Some(key), Some(chord)) => {
            let name = degree_to_name(&key, &chord, shorthand == JNI_TRUE);
            new_jstring(&mut env, &name)
        }
        _ => std::ptr::null_mut(),
    }
}

/// Called from Kotlin as:
///   external fun nameToDegree(key: String, chord: String, shorthand: Boolean): String?
#[no_mangle]
pub extern "system" fn Java_com_chordlib_app_ChordLib_nameToDegree(
    mut env: JNIEnv,
    _class: JClass,
    key: JString,
    chord: JString,
    shorthand: jboolean,
) -> jstring {
    match (get_string(&mut env, &key), get_string(&mut env, &chord)) {
        (Some(key), Some(chord)) => {
            let degree = name_to_degree(&key, &chord, shorthand == JNI_TRUE);
            new_jstring(&mut env, &degree)
        }
        _ => std::ptr::null_mut(),
    }
}
