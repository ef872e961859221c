pub mod decorations;
pub mod dispatch;
pub mod parse;
pub mod task;
