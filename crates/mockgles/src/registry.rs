//! Exclusive ownership of the mock and routing of recorded calls.
//!
//! OpenGL ES is not thread safe, and the mock entry points are plain
//! function pointers with no room for a context argument. A [`MockRegistry`]
//! therefore tracks the single live [`MockGles`] instance: it owns the
//! exclusivity lock, the extension list the queries report, and a weak
//! observer on the live instance's call log.
//!
//! Acquiring from a registry routes the mock entry points invoked on the
//! calling thread to that registry. Threads that never acquired a mock fall
//! back to [`MockRegistry::global`].

use std::cell::RefCell;
use std::ffi::CString;
use std::sync::{Arc, OnceLock, Weak};

use parking_lot::Mutex;

use crate::config::MockConfig;
use crate::error::MockGlesError;
use crate::mock_gles::{CallLog, MockGles};
use crate::proc_table::ProcTable;
use crate::resolver;

/// Guard held by the live instance for as long as it exists.
pub(crate) type ExclusiveGuard = parking_lot::lock_api::ArcMutexGuard<parking_lot::RawMutex, ()>;

type SharedState = Arc<Mutex<RegistryState>>;

static GLOBAL_REGISTRY: OnceLock<MockRegistry> = OnceLock::new();

// Registry the mock entry points report to on this thread. Threads that
// never acquired a mock (`None`) use the global registry.
thread_local! {
    static CURRENT_REGISTRY: RefCell<Option<Weak<Mutex<RegistryState>>>> =
        const { RefCell::new(None) };
}

struct RegistryState {
    /// Observer on the live instance's call log. Never upgraded for longer
    /// than a single append.
    active: Weak<CallLog>,
    /// Extensions of the most recently acquired instance.
    extensions: Arc<[CString]>,
}

impl RegistryState {
    fn record(&self, name: &str) {
        match self.active.upgrade() {
            Some(calls) => {
                tracing::trace!(call = name, "Recorded GL call");
                calls.lock().push(name.to_string());
            }
            None => {
                tracing::trace!(call = name, "No live MockGLES, dropping GL call");
            }
        }
    }
}

/// Tracks the at-most-one live [`MockGles`].
pub struct MockRegistry {
    in_use: Arc<Mutex<()>>,
    state: SharedState,
}

impl MockRegistry {
    /// Create an empty registry with the default extension list.
    pub fn new() -> Self {
        let extensions = to_c_strings(&MockConfig::default().extensions)
            .unwrap_or_else(|_| Arc::from(Vec::new()));

        Self {
            in_use: Arc::new(Mutex::new(())),
            state: Arc::new(Mutex::new(RegistryState {
                active: Weak::new(),
                extensions,
            })),
        }
    }

    /// The process-wide registry used by threads that never acquired a mock.
    pub fn global() -> &'static MockRegistry {
        GLOBAL_REGISTRY.get_or_init(MockRegistry::new)
    }

    /// Take exclusive ownership of the mock without blocking.
    ///
    /// On success the mock entry points invoked on this thread report to
    /// this registry. Fails with [`MockGlesError::AlreadyInUse`] while
    /// another instance acquired from this registry is alive.
    pub fn try_acquire(&self, config: &MockConfig) -> Result<MockGles, MockGlesError> {
        let extensions = to_c_strings(&config.extensions)?;

        let Some(guard) = self.in_use.try_lock_arc() else {
            tracing::warn!("MockGLES acquire rejected: an instance is still alive");
            return Err(MockGlesError::AlreadyInUse);
        };

        let proc_table = ProcTable::new(resolver::resolve)?;
        let calls: Arc<CallLog> = Arc::new(Mutex::new(Vec::new()));

        {
            let mut state = self.state.lock();
            state.extensions = extensions.clone();
            state.active = Arc::downgrade(&calls);
        }
        CURRENT_REGISTRY.with(|current| {
            *current.borrow_mut() = Some(Arc::downgrade(&self.state));
        });

        tracing::debug!(
            extensions = config.extensions.len(),
            "Acquired MockGLES instance"
        );

        Ok(MockGles::from_parts(
            config.extensions.clone(),
            extensions,
            calls,
            proc_table,
            guard,
        ))
    }

    /// Take exclusive ownership of the mock.
    ///
    /// # Panics
    /// Panics if another instance is still alive. This indicates a test that
    /// never released its mock and is not meant to be recovered from.
    #[track_caller]
    pub fn acquire(&self, config: &MockConfig) -> MockGles {
        match self.try_acquire(config) {
            Ok(mock) => mock,
            Err(e) => panic!("{}", e),
        }
    }

    /// Whether an instance acquired from this registry is currently alive.
    pub fn is_active(&self) -> bool {
        self.state.lock().active.strong_count() > 0
    }

    /// Extension list of the most recently acquired instance.
    pub fn active_extensions(&self) -> Vec<String> {
        self.state
            .lock()
            .extensions
            .iter()
            .map(|ext| ext.to_string_lossy().into_owned())
            .collect()
    }

    /// Append `name` to the live instance's call log.
    ///
    /// Dropped silently when no instance is alive, which happens when a
    /// backend keeps invoking function pointers after its test ended.
    pub fn record_call(&self, name: &str) {
        self.state.lock().record(name);
    }
}

impl Default for MockRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// State the entry points on this thread report to, `None` once the
/// registry it was acquired from is gone.
fn current_state() -> Option<SharedState> {
    CURRENT_REGISTRY.with(|current| match &*current.borrow() {
        Some(state) => state.upgrade(),
        None => Some(MockRegistry::global().state.clone()),
    })
}

/// Record an invocation against the live instance of this thread's registry.
pub fn record_call(name: &str) {
    if let Some(state) = current_state() {
        state.lock().record(name);
    }
}

/// Extensions reported to this thread, empty once its registry is gone.
///
/// The strings stay alive while their registry keeps the list.
pub(crate) fn current_extensions() -> Arc<[CString]> {
    current_state().map_or_else(
        || Arc::from(Vec::new()),
        |state| state.lock().extensions.clone(),
    )
}

fn to_c_strings(names: &[String]) -> Result<Arc<[CString]>, MockGlesError> {
    names
        .iter()
        .map(|name| {
            CString::new(name.as_str())
                .map_err(|_| MockGlesError::InvalidExtensionName(name.clone()))
        })
        .collect()
}
