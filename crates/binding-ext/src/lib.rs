//! Helpers shared by the data-binding compiler passes.
//!
//! # Overview
//!
//! - [`KeyedLazy`] / [`TryKeyedLazy`] - per-key memoization of a pure initializer
//! - [`naming`] - binary-name, resource-id and camel-case conversions used when
//!   emitting generated sources
//! - [`StepDispatcher`] - runs [`ProcessingStep`]s across compilation rounds and
//!   hands them a shared [`SourceWriter`]
//!
//! # Example
//!
//! ```
//! use binding_ext::naming::{android_id, to_camel_case, to_camel_case_as_var};
//! use binding_ext::KeyedLazy;
//!
//! let id = android_id("@+id/user_name").unwrap();
//! assert_eq!(to_camel_case(id), "UserName");
//! assert_eq!(to_camel_case_as_var(id), "userName");
//!
//! let mut field_names = KeyedLazy::new(|id: &String| to_camel_case_as_var(id));
//! assert_eq!(field_names.get("first_name".to_string()), "firstName");
//! ```

pub mod memo;
pub mod naming;
pub mod processor;
pub mod writer;

pub use memo::{KeyedLazy, TryKeyedLazy};
pub use naming::NamingError;
pub use processor::{BuildInfo, ProcessError, ProcessingStep, Round, StepDispatcher};
pub use writer::{FsSourceWriter, MemorySourceWriter, SourceWriter};

/// Result type used by the processor and writers.
pub type Result<T, E = ProcessError> = std::result::Result<T, E>;
