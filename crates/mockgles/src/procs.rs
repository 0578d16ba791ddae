//! Mock implementations of the OpenGL ES entry points.
//!
//! Only queries that feed capability detection return meaningful values.
//! The debug group markers exist so tests can assert on their order.

use std::ffi::CStr;
use std::ptr;

use crate::gl::*;
use crate::registry::{current_extensions, record_call};

pub const MOCK_VENDOR: &CStr = c"MockGLES";
pub const MOCK_VERSION: &CStr = c"3.0";
pub const MOCK_MAX_COMBINED_TEXTURE_IMAGE_UNITS: GLint = 8;

/// Fails to compile unless `$func` has exactly the signature `$pfn`.
macro_rules! assert_signature {
    ($func:ident: $pfn:ty) => {
        const _: $pfn = $func;
    };
}

/// Stand-in for every entry point the mock does not implement.
pub extern "system" fn do_nothing() {}

pub extern "system" fn mock_get_string(name: GLenum) -> *const GLubyte {
    match name {
        GL_VENDOR => MOCK_VENDOR.as_ptr().cast(),
        GL_VERSION | GL_SHADING_LANGUAGE_VERSION => MOCK_VERSION.as_ptr().cast(),
        _ => c"".as_ptr().cast(),
    }
}

assert_signature!(mock_get_string: PFNGLGETSTRINGPROC);

/// Returns null for an index outside the configured extension list.
pub extern "system" fn mock_get_stringi(name: GLenum, index: GLuint) -> *const GLubyte {
    match name {
        GL_EXTENSIONS => current_extensions()
            .get(index as usize)
            .map_or(ptr::null(), |ext| ext.as_ptr().cast()),
        _ => c"".as_ptr().cast(),
    }
}

assert_signature!(mock_get_stringi: PFNGLGETSTRINGIPROC);

/// # Safety
/// `data` must be null or valid for a single `GLint` write.
pub unsafe extern "system" fn mock_get_integerv(pname: GLenum, data: *mut GLint) {
    if data.is_null() {
        return;
    }
    let value = match pname {
        GL_NUM_EXTENSIONS => GLint::try_from(current_extensions().len()).unwrap_or(GLint::MAX),
        GL_MAX_COMBINED_TEXTURE_IMAGE_UNITS => MOCK_MAX_COMBINED_TEXTURE_IMAGE_UNITS,
        _ => 0,
    };
    unsafe { *data = value };
}

assert_signature!(mock_get_integerv: PFNGLGETINTEGERVPROC);

pub extern "system" fn mock_get_error() -> GLenum {
    GL_NO_ERROR
}

assert_signature!(mock_get_error: PFNGLGETERRORPROC);

pub extern "system" fn mock_pop_debug_group_khr() {
    record_call("PopDebugGroupKHR");
}

assert_signature!(mock_pop_debug_group_khr: PFNGLPOPDEBUGGROUPKHRPROC);

pub extern "system" fn mock_push_debug_group_khr(
    _source: GLenum,
    _id: GLuint,
    _length: GLsizei,
    _message: *const GLchar,
) {
    record_call("PushDebugGroupKHR");
}

assert_signature!(mock_push_debug_group_khr: PFNGLPUSHDEBUGGROUPKHRPROC);
assert_signature!(do_nothing: PFNGLFLUSHPROC);
