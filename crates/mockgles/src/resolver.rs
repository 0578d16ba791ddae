//! Name to function pointer resolution for the mock driver.
//!
//! Mirrors `eglGetProcAddress`: the backend asks for every entry point by
//! name, including optional extension entry points. Names the mock does not
//! implement resolve to [`MockProc::NoOp`], never to null.

use std::ffi::{CStr, c_void};
use std::sync::OnceLock;

use ahash::AHashMap;

use crate::gl::*;
use crate::procs;

/// An entry point implemented by the mock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MockProc {
    GetString,
    GetStringi,
    GetIntegerv,
    GetError,
    PushDebugGroupKHR,
    PopDebugGroupKHR,
    /// Shared stub for every unrecognised name.
    NoOp,
}

impl MockProc {
    /// Every implemented entry point with the name it is resolved by.
    pub const NAMED: [(&'static str, MockProc); 6] = [
        ("glGetString", MockProc::GetString),
        ("glGetStringi", MockProc::GetStringi),
        ("glGetIntegerv", MockProc::GetIntegerv),
        ("glGetError", MockProc::GetError),
        ("glPushDebugGroupKHR", MockProc::PushDebugGroupKHR),
        ("glPopDebugGroupKHR", MockProc::PopDebugGroupKHR),
    ];

    /// Address of the implementation, as a driver loader would return it.
    pub fn address(self) -> *const c_void {
        match self {
            Self::GetString => procs::mock_get_string as PFNGLGETSTRINGPROC as *const c_void,
            Self::GetStringi => procs::mock_get_stringi as PFNGLGETSTRINGIPROC as *const c_void,
            Self::GetIntegerv => procs::mock_get_integerv as PFNGLGETINTEGERVPROC as *const c_void,
            Self::GetError => procs::mock_get_error as PFNGLGETERRORPROC as *const c_void,
            Self::PushDebugGroupKHR => {
                procs::mock_push_debug_group_khr as PFNGLPUSHDEBUGGROUPKHRPROC as *const c_void
            }
            Self::PopDebugGroupKHR => {
                procs::mock_pop_debug_group_khr as PFNGLPOPDEBUGGROUPKHRPROC as *const c_void
            }
            Self::NoOp => procs::do_nothing as PFNGLFLUSHPROC as *const c_void,
        }
    }
}

static RESOLVER_TABLE: OnceLock<AHashMap<&'static [u8], MockProc>> = OnceLock::new();

fn table() -> &'static AHashMap<&'static [u8], MockProc> {
    RESOLVER_TABLE.get_or_init(|| {
        MockProc::NAMED
            .iter()
            .map(|(name, proc)| (name.as_bytes(), *proc))
            .collect()
    })
}

/// Look up the mock implementation registered under `name`.
pub fn lookup(name: &CStr) -> MockProc {
    table()
        .get(name.to_bytes())
        .copied()
        .unwrap_or(MockProc::NoOp)
}

/// Resolve `name` to a callable address. Never returns null.
pub fn resolve(name: &CStr) -> *const c_void {
    lookup(name).address()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names_resolve_to_their_implementation() {
        for (name, proc) in MockProc::NAMED {
            let name = std::ffi::CString::new(name).unwrap();
            assert_eq!(lookup(&name), proc);
            assert_eq!(resolve(&name), proc.address());
        }
    }

    #[test]
    fn test_unknown_names_resolve_to_no_op() {
        let no_op = MockProc::NoOp.address();
        for name in [c"glFlush", c"glDrawArrays", c"glgetstring", c"glGetString ", c""] {
            assert_eq!(lookup(name), MockProc::NoOp);
            let address = resolve(name);
            assert!(!address.is_null());
            assert_eq!(address, no_op);
        }
    }

    #[test]
    fn test_implementations_are_distinct() {
        let mut addresses: Vec<_> = MockProc::NAMED
            .iter()
            .map(|(_, proc)| proc.address())
            .chain(std::iter::once(MockProc::NoOp.address()))
            .collect();
        addresses.sort();
        addresses.dedup();
        assert_eq!(addresses.len(), MockProc::NAMED.len() + 1);
    }
}
