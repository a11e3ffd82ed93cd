//! On-screen window enumeration via the CoreGraphics window list.

use std::ffi::c_void;

use core_foundation::{
    array::{CFArray, CFArrayGetCount, CFArrayGetValueAtIndex},
    base::{CFTypeRef, TCFType},
    dictionary::CFDictionaryRef,
};
use core_graphics::window as cgw;
use tracing::{trace, warn};
use winmap::WindowInfo;

use crate::cfutil::{dict_get_bounds, dict_get_i32, dict_get_string};

#[link(name = "CoreGraphics", kind = "framework")]
unsafe extern "C" {
    fn CGWindowListCopyWindowInfo(option: u32, relative_to_window: u32) -> CFTypeRef; // CFArrayRef
}

const K_CG_WINDOW_LIST_OPTION_ON_SCREEN_ONLY: u32 = 1 << 0;
const K_CG_WINDOW_LIST_OPTION_EXCLUDE_DESKTOP_ELEMENTS: u32 = 1 << 4;

/// Snapshot all on-screen windows in the order CoreGraphics reports
/// them (front-to-back).
///
/// Entries without an owner pid or without readable bounds are skipped;
/// a missing title becomes the empty string.
pub fn list_windows() -> Vec<WindowInfo> {
    trace!("list_windows");
    let mut out = Vec::new();
    unsafe {
        let arr_ref = CGWindowListCopyWindowInfo(
            K_CG_WINDOW_LIST_OPTION_ON_SCREEN_ONLY
                | K_CG_WINDOW_LIST_OPTION_EXCLUDE_DESKTOP_ELEMENTS,
            0,
        );
        if arr_ref.is_null() {
            warn!("list_windows: CGWindowListCopyWindowInfo returned null");
            return out;
        }
        let arr: CFArray<*const c_void> = CFArray::wrap_under_create_rule(arr_ref as _);
        unsafe extern "C" {
            fn CFGetTypeID(cf: CFTypeRef) -> u64;
            fn CFDictionaryGetTypeID() -> u64;
        }
        for i in 0..CFArrayGetCount(arr.as_concrete_TypeRef()) {
            let item = CFArrayGetValueAtIndex(arr.as_concrete_TypeRef(), i) as CFTypeRef;
            if item.is_null() || CFGetTypeID(item) != CFDictionaryGetTypeID() {
                continue;
            }
            let d = item as CFDictionaryRef;
            let owner_pid = match dict_get_i32(d, cgw::kCGWindowOwnerPID) {
                Some(p) => p,
                None => continue,
            };
            let bounds = match dict_get_bounds(d, cgw::kCGWindowBounds) {
                Some(b) => b,
                None => continue,
            };
            let title = dict_get_string(d, cgw::kCGWindowName).unwrap_or_default();
            out.push(WindowInfo {
                title,
                owner_pid,
                bounds,
            });
        }
    }
    out
}
