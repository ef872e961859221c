//! # mz-store
//!
//! The MZ task registry and conversation transcript, plus the JSON memory
//! file they are persisted to.
//!
//! - [`Store`]: the aggregate root (`tasks` + `conversations`) with validated
//!   create / list / complete / delete operations
//! - [`NewTask`]: raw, unvalidated task input as typed by the user
//! - [`MemoryFile`]: whole-file load (self-healing) and save of a [`Store`]

pub mod error;
pub mod new_task;
pub mod persist;
pub mod store;
mod validate;

pub use error::StoreError;
pub use new_task::NewTask;
pub use persist::{Inspection, MemoryFile, RepairReason};
pub use store::Store;
