//! Typed OpenGL ES entry points resolved by name.
//!
//! This is the seam a GLES backend consumes: given any resolver it looks up
//! each entry point once and calls through the native signature afterwards.

use std::ffi::{CStr, c_void};

use crate::error::MockGlesError;
use crate::gl::*;

/// Resolved OpenGL ES entry points.
#[derive(Clone)]
pub struct ProcTable {
    get_string: PFNGLGETSTRINGPROC,
    get_stringi: PFNGLGETSTRINGIPROC,
    get_integerv: PFNGLGETINTEGERVPROC,
    get_error: PFNGLGETERRORPROC,
    push_debug_group_khr: Option<PFNGLPUSHDEBUGGROUPKHRPROC>,
    pop_debug_group_khr: Option<PFNGLPOPDEBUGGROUPKHRPROC>,
    flush: PFNGLFLUSHPROC,
}

macro_rules! resolve_proc {
    ($resolver:expr, $name:expr, $pfn:ty) => {{
        let ptr: *const c_void = $resolver($name);
        if ptr.is_null() {
            None
        } else {
            // SAFETY: a non-null address returned for this name points at a
            // function with the native signature.
            Some(unsafe { std::mem::transmute::<*const c_void, $pfn>(ptr) })
        }
    }};
}

impl ProcTable {
    /// Resolve every entry point through `resolver`.
    ///
    /// Core entry points must resolve; the `KHR_debug` ones may be missing.
    pub fn new(resolver: impl Fn(&CStr) -> *const c_void) -> Result<Self, MockGlesError> {
        let get_string = resolve_proc!(resolver, c"glGetString", PFNGLGETSTRINGPROC)
            .ok_or(MockGlesError::MissingEntryPoint("glGetString"))?;
        let get_stringi = resolve_proc!(resolver, c"glGetStringi", PFNGLGETSTRINGIPROC)
            .ok_or(MockGlesError::MissingEntryPoint("glGetStringi"))?;
        let get_integerv = resolve_proc!(resolver, c"glGetIntegerv", PFNGLGETINTEGERVPROC)
            .ok_or(MockGlesError::MissingEntryPoint("glGetIntegerv"))?;
        let get_error = resolve_proc!(resolver, c"glGetError", PFNGLGETERRORPROC)
            .ok_or(MockGlesError::MissingEntryPoint("glGetError"))?;
        let flush = resolve_proc!(resolver, c"glFlush", PFNGLFLUSHPROC)
            .ok_or(MockGlesError::MissingEntryPoint("glFlush"))?;

        let push_debug_group_khr =
            resolve_proc!(resolver, c"glPushDebugGroupKHR", PFNGLPUSHDEBUGGROUPKHRPROC);
        let pop_debug_group_khr =
            resolve_proc!(resolver, c"glPopDebugGroupKHR", PFNGLPOPDEBUGGROUPKHRPROC);

        Ok(Self {
            get_string,
            get_stringi,
            get_integerv,
            get_error,
            push_debug_group_khr,
            pop_debug_group_khr,
            flush,
        })
    }

    /// `glGetString`. A null result reads as an empty string.
    pub fn get_string(&self, name: GLenum) -> String {
        let ptr = unsafe { (self.get_string)(name) };
        read_gl_string(ptr).unwrap_or_default()
    }

    /// `glGetStringi`. `None` when the driver returned null.
    pub fn get_stringi(&self, name: GLenum, index: GLuint) -> Option<String> {
        let ptr = unsafe { (self.get_stringi)(name, index) };
        read_gl_string(ptr)
    }

    /// `glGetIntegerv` for a single value.
    pub fn get_integer(&self, pname: GLenum) -> GLint {
        let mut value = 0;
        unsafe { (self.get_integerv)(pname, &mut value) };
        value
    }

    pub fn get_error(&self) -> GLenum {
        unsafe { (self.get_error)() }
    }

    pub fn flush(&self) {
        unsafe { (self.flush)() }
    }

    /// `glPushDebugGroupKHR`. Ignored when the entry point is unavailable.
    pub fn push_debug_group(&self, source: GLenum, id: GLuint, message: &str) {
        let Some(push) = self.push_debug_group_khr else {
            return;
        };
        // Lengths beyond GLsizei are truncated.
        let length = GLsizei::try_from(message.len()).unwrap_or(GLsizei::MAX);
        unsafe { push(source, id, length, message.as_ptr().cast()) };
    }

    /// `glPopDebugGroupKHR`. Ignored when the entry point is unavailable.
    pub fn pop_debug_group(&self) {
        if let Some(pop) = self.pop_debug_group_khr {
            unsafe { pop() };
        }
    }

    /// Enumerate extensions via `GL_NUM_EXTENSIONS` and `glGetStringi`.
    pub fn extensions(&self) -> Vec<String> {
        let count = self.get_integer(GL_NUM_EXTENSIONS).max(0) as GLuint;
        (0..count)
            .filter_map(|index| self.get_stringi(GL_EXTENSIONS, index))
            .collect()
    }

    pub fn has_extension(&self, name: &str) -> bool {
        self.extensions().iter().any(|ext| ext == name)
    }

    /// Whether debug group markers can be emitted.
    pub fn supports_debug_groups(&self) -> bool {
        self.push_debug_group_khr.is_some()
            && self.pop_debug_group_khr.is_some()
            && self.has_extension("GL_KHR_debug")
    }
}

impl std::fmt::Debug for ProcTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcTable")
            .field("push_debug_group_khr", &self.push_debug_group_khr.is_some())
            .field("pop_debug_group_khr", &self.pop_debug_group_khr.is_some())
            .finish_non_exhaustive()
    }
}

fn read_gl_string(ptr: *const GLubyte) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    // SAFETY: GL strings are NUL terminated and owned by the driver.
    let s = unsafe { CStr::from_ptr(ptr.cast()) };
    Some(s.to_string_lossy().into_owned())
}
