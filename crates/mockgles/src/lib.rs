//! Mock OpenGL ES driver for testing GLES backends without a GPU.
//!
//! A backend resolves its entry points by name through [`resolver::resolve`]
//! instead of the platform loader. The mock answers capability queries with
//! fixed values and records debug group markers so tests can assert on call
//! order.
//!
//! # Overview
//!
//! - [`MockGles`] - Owning handle of the single live mock. Exposes the call log.
//! - [`MockRegistry`] - Enforces that at most one [`MockGles`] is alive.
//! - [`resolver`] - Maps entry point names to mock implementations.
//! - [`ProcTable`] - Typed entry points resolved through any resolver.
//!
//! # Example
//!
//! ```rust,no_run
//! use mockgles::MockGles;
//!
//! let mock = MockGles::with_extensions(["GL_A", "GL_B"]);
//!
//! assert_eq!(mock.proc_table().extensions(), vec!["GL_A", "GL_B"]);
//! assert!(!mock.proc_table().supports_debug_groups());
//! ```
//!
//! # Exclusivity
//!
//! OpenGL ES is not thread safe, so neither is the mock. Creating a second
//! [`MockGles`] while one is alive panics; tests that create one must not
//! run concurrently (for example with `serial_test`).

pub mod config;
pub mod error;
pub mod gl;
pub mod logging;
pub mod mock_gles;
pub mod proc_table;
pub mod procs;
pub mod registry;
pub mod resolver;

pub use config::MockConfig;
pub use error::MockGlesError;
pub use mock_gles::MockGles;
pub use proc_table::ProcTable;
pub use registry::{MockRegistry, record_call};
