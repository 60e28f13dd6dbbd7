// C ABI for host editors. Strings returned by this module must be released
// with `kruti_free_string`.
use crate::core::engine::LegacyConverter;
use std::borrow::Cow;
use std::ffi::{c_char, CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex};
use tracing::{error, info};

static ENGINE: Mutex<Option<Arc<LegacyConverter>>> = Mutex::new(None);

fn engine() -> Option<Arc<LegacyConverter>> {
    ENGINE.lock().ok().and_then(|guard| guard.clone())
}

/// Invalid UTF-8 sequences become U+FFFD; the rest of the text survives.
///
/// # Safety
/// `ptr` must be null or a valid NUL-terminated string.
unsafe fn read_str<'a>(ptr: *const c_char) -> Cow<'a, str> {
    if ptr.is_null() {
        return Cow::Borrowed("");
    }
    CStr::from_ptr(ptr).to_string_lossy()
}

fn into_c_string(s: String) -> *mut c_char {
    // interior NULs cannot cross the boundary
    CString::new(s).unwrap_or_default().into_raw()
}

#[no_mangle]
pub extern "C" fn kruti_engine_init() {
    let result = catch_unwind(|| {
        if let Ok(mut guard) = ENGINE.lock() {
            if guard.is_none() {
                *guard = Some(Arc::new(LegacyConverter::new()));
                info!("converter initialized");
            }
        }
    });
    if result.is_err() {
        error!("panic during converter initialization");
    }
}

#[no_mangle]
pub extern "C" fn kruti_engine_destroy() {
    if let Ok(mut guard) = ENGINE.lock() {
        guard.take();
    }
}

/// Returns the converted text. Without an initialized engine the input is
/// returned unchanged.
///
/// # Safety
/// `text` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn kruti_convert(text: *const c_char) -> *mut c_char {
    let input = read_str(text);
    let result = catch_unwind(AssertUnwindSafe(|| match engine() {
        Some(engine) => engine.convert(&input),
        None => input.to_string(),
    }));
    let output = result.unwrap_or_else(|_| {
        error!("panic in kruti_convert");
        input.to_string()
    });
    into_c_string(output)
}

/// Returns a JSON array of `{"text", "needs_legacy_font"}` objects.
///
/// # Safety
/// `text` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn kruti_convert_segments_json(text: *const c_char) -> *mut c_char {
    let input = read_str(text);
    let result = catch_unwind(AssertUnwindSafe(|| {
        let segments = match engine() {
            Some(engine) => engine.convert_with_segments(&input),
            None if input.is_empty() => Vec::new(),
            None => vec![crate::core::types::Segment::new(input.as_ref(), false)],
        };
        serde_json::to_string(&segments).unwrap_or_else(|_| "[]".to_string())
    }));
    let json = result.unwrap_or_else(|_| {
        error!("panic in kruti_convert_segments_json");
        "[]".to_string()
    });
    into_c_string(json)
}

/// # Safety
/// `s` must be null or a pointer previously returned by this module.
#[no_mangle]
pub unsafe extern "C" fn kruti_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}
