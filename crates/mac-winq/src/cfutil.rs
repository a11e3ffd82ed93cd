//! Small CoreFoundation dictionary accessors for window-list entries.

use core::ffi::c_void;

use core_foundation::{
    base::TCFType,
    dictionary::{CFDictionaryGetValue, CFDictionaryRef},
    number::CFNumber,
    string::{CFString, CFStringRef},
};
use winmap::Rect;

/// Borrow a CFStringRef and convert to a Rust String.
fn cfstring_to_string(s: CFStringRef) -> String {
    // SAFETY: CFStringRef obtained from system APIs; wrap under get rule.
    let cf = unsafe { CFString::wrap_under_get_rule(s) };
    cf.to_string()
}

/// Get a String value for the given CFDictionary key.
pub(crate) fn dict_get_string(dict: CFDictionaryRef, key: CFStringRef) -> Option<String> {
    let value = unsafe { CFDictionaryGetValue(dict, key as *const c_void) };
    if value.is_null() {
        return None;
    }
    Some(cfstring_to_string(value as CFStringRef))
}

/// Get a 32-bit integer from CFDictionary for the given key.
pub(crate) fn dict_get_i32(dict: CFDictionaryRef, key: CFStringRef) -> Option<i32> {
    let value = unsafe { CFDictionaryGetValue(dict, key as *const c_void) };
    if value.is_null() {
        return None;
    }
    let n = unsafe { CFNumber::wrap_under_get_rule(value as _) };
    n.to_i64().map(|v| v as i32)
}

/// Get an f64 from CFDictionary for the given key.
pub(crate) fn dict_get_f64(dict: CFDictionaryRef, key: CFStringRef) -> Option<f64> {
    let value = unsafe { CFDictionaryGetValue(dict, key as *const c_void) };
    if value.is_null() {
        return None;
    }
    let n = unsafe { CFNumber::wrap_under_get_rule(value as _) };
    n.to_f64()
}

/// Read a `kCGWindowBounds`-style sub-dictionary (`X`, `Y`, `Width`,
/// `Height`) as a rectangle.
pub(crate) fn dict_get_bounds(dict: CFDictionaryRef, key: CFStringRef) -> Option<Rect> {
    let value = unsafe { CFDictionaryGetValue(dict, key as *const c_void) };
    if value.is_null() {
        return None;
    }
    let bounds = value as CFDictionaryRef;
    let key_x = CFString::from_static_string("X");
    let key_y = CFString::from_static_string("Y");
    let key_w = CFString::from_static_string("Width");
    let key_h = CFString::from_static_string("Height");
    let x = dict_get_f64(bounds, key_x.as_concrete_TypeRef())?;
    let y = dict_get_f64(bounds, key_y.as_concrete_TypeRef())?;
    let w = dict_get_f64(bounds, key_w.as_concrete_TypeRef())?;
    let h = dict_get_f64(bounds, key_h.as_concrete_TypeRef())?;
    Some(Rect::new(x, y, w, h))
}
