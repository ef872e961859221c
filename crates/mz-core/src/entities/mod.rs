//! Entity structs for the MZ memory document.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation of `memory.json`.

mod message;
mod task;

pub use message::Message;
pub use task::Task;
