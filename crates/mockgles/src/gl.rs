//! Native OpenGL ES types, enums and entry point signatures.
//!
//! Only the subset the mock interprets is declared here. Values match the
//! Khronos `GLES3/gl3.h` and `GLES2/gl2ext.h` headers.

#![allow(non_camel_case_types, clippy::upper_case_acronyms)]

use std::ffi::c_char;

pub type GLenum = u32;
pub type GLuint = u32;
pub type GLint = i32;
pub type GLsizei = i32;
pub type GLchar = c_char;
pub type GLubyte = u8;

// Error state
pub const GL_NO_ERROR: GLenum = 0;

// glGetString / glGetStringi
pub const GL_VENDOR: GLenum = 0x1F00;
pub const GL_RENDERER: GLenum = 0x1F01;
pub const GL_VERSION: GLenum = 0x1F02;
pub const GL_EXTENSIONS: GLenum = 0x1F03;
pub const GL_SHADING_LANGUAGE_VERSION: GLenum = 0x8B8C;

// glGetIntegerv
pub const GL_MAX_TEXTURE_SIZE: GLenum = 0x0D33;
pub const GL_NUM_EXTENSIONS: GLenum = 0x821D;
pub const GL_MAX_COMBINED_TEXTURE_IMAGE_UNITS: GLenum = 0x8B4D;

// KHR_debug
pub const GL_DEBUG_SOURCE_APPLICATION_KHR: GLenum = 0x824A;

/// `glGetString`
pub type PFNGLGETSTRINGPROC = unsafe extern "system" fn(name: GLenum) -> *const GLubyte;
/// `glGetStringi`
pub type PFNGLGETSTRINGIPROC =
    unsafe extern "system" fn(name: GLenum, index: GLuint) -> *const GLubyte;
/// `glGetIntegerv`
pub type PFNGLGETINTEGERVPROC = unsafe extern "system" fn(pname: GLenum, data: *mut GLint);
/// `glGetError`
pub type PFNGLGETERRORPROC = unsafe extern "system" fn() -> GLenum;
/// `glPushDebugGroupKHR`
pub type PFNGLPUSHDEBUGGROUPKHRPROC = unsafe extern "system" fn(
    source: GLenum,
    id: GLuint,
    length: GLsizei,
    message: *const GLchar,
);
/// `glPopDebugGroupKHR`
pub type PFNGLPOPDEBUGGROUPKHRPROC = unsafe extern "system" fn();
/// `glFlush`
pub type PFNGLFLUSHPROC = unsafe extern "system" fn();

// Resolved addresses are reinterpreted as these pointer types.
static_assertions::assert_eq_size!(PFNGLGETSTRINGPROC, *const std::ffi::c_void);
static_assertions::assert_eq_size!(PFNGLGETSTRINGIPROC, *const std::ffi::c_void);
static_assertions::assert_eq_size!(PFNGLGETINTEGERVPROC, *const std::ffi::c_void);
static_assertions::assert_eq_size!(PFNGLGETERRORPROC, *const std::ffi::c_void);
static_assertions::assert_eq_size!(PFNGLPUSHDEBUGGROUPKHRPROC, *const std::ffi::c_void);
static_assertions::assert_eq_size!(PFNGLPOPDEBUGGROUPKHRPROC, *const std::ffi::c_void);
static_assertions::assert_eq_size!(PFNGLFLUSHPROC, *const std::ffi::c_void);
