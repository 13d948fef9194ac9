//! Runtime module - host integration
//!
//! - `shell` - owns the model, executes commands and holds the pointer
//!   listener handle for a `PointerHost`
//! - `writer` - the single background thread that writes layout records

pub mod shell;
pub mod writer;

pub use shell::Shell;
