//! The owning handle of the live mock.

use std::ffi::CString;
use std::marker::PhantomData;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::MockConfig;
use crate::proc_table::ProcTable;
use crate::registry::{ExclusiveGuard, MockRegistry};

/// Ordered, append-only log of recorded entry point names.
pub(crate) type CallLog = Mutex<Vec<String>>;

/// A mocked OpenGL ES driver.
///
/// At most one `MockGles` exists per registry. Dropping it releases
/// exclusivity; function pointers obtained from it stay callable afterwards
/// but no longer record anything.
///
/// # Example
///
/// ```rust
/// use mockgles::{gl, MockGles};
///
/// let mock = MockGles::new();
/// let gl = mock.proc_table();
///
/// assert_eq!(gl.get_string(gl::GL_VENDOR), "MockGLES");
/// assert_eq!(gl.get_integer(gl::GL_NUM_EXTENSIONS), 1);
///
/// gl.push_debug_group(gl::GL_DEBUG_SOURCE_APPLICATION_KHR, 0, "pass");
/// gl.pop_debug_group();
/// assert_eq!(mock.captured_calls(), vec!["PushDebugGroupKHR", "PopDebugGroupKHR"]);
/// ```
pub struct MockGles {
    calls: Arc<CallLog>,
    extensions: Vec<String>,
    /// Keeps the C strings handed out by `glGetStringi` alive.
    _extension_strings: Arc<[CString]>,
    proc_table: ProcTable,
    // Declared last so the lock is released only after the log is gone.
    _exclusive: ExclusiveGuard,
    // The native API is single threaded.
    _not_send: PhantomData<*const ()>,
}

static_assertions::assert_not_impl_any!(MockGles: Send, Sync);

impl MockGles {
    /// Acquire the global mock with the default extension list.
    ///
    /// # Panics
    /// Panics if another `MockGles` is still alive.
    #[track_caller]
    pub fn new() -> Self {
        Self::with_config(&MockConfig::default())
    }

    /// Acquire the global mock reporting `extensions` instead of the default.
    ///
    /// # Panics
    /// Panics if another `MockGles` is still alive.
    #[track_caller]
    pub fn with_extensions<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_config(&MockConfig::new().with_extensions(extensions))
    }

    /// Acquire the global mock with an explicit configuration.
    ///
    /// # Panics
    /// Panics if another `MockGles` is still alive.
    #[track_caller]
    pub fn with_config(config: &MockConfig) -> Self {
        MockRegistry::global().acquire(config)
    }

    pub(crate) fn from_parts(
        extensions: Vec<String>,
        extension_strings: Arc<[CString]>,
        calls: Arc<CallLog>,
        proc_table: ProcTable,
        exclusive: ExclusiveGuard,
    ) -> Self {
        Self {
            calls,
            extensions,
            _extension_strings: extension_strings,
            proc_table,
            _exclusive: exclusive,
            _not_send: PhantomData,
        }
    }

    /// Proc table resolved through the mock resolver.
    pub fn proc_table(&self) -> &ProcTable {
        &self.proc_table
    }

    /// Extensions this instance reports.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Get a copy of all recorded calls (for test assertions).
    pub fn captured_calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    /// Return all recorded calls and clear the log.
    pub fn take_captured_calls(&self) -> Vec<String> {
        std::mem::take(&mut *self.calls.lock())
    }

    /// Count recorded calls named `name`.
    pub fn count_calls(&self, name: &str) -> usize {
        self.calls.lock().iter().filter(|call| *call == name).count()
    }

    /// Get total number of recorded calls.
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Clear recorded calls (useful between test steps).
    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }
}

impl Default for MockGles {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for MockGles {
    fn drop(&mut self) {
        tracing::debug!(
            calls = self.calls.lock().len(),
            "Releasing MockGLES instance"
        );
    }
}

impl std::fmt::Debug for MockGles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockGles")
            .field("extensions", &self.extensions)
            .field("calls", &*self.calls.lock())
            .finish_non_exhaustive()
    }
}
