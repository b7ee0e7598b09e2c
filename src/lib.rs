//! tpt - fast terminal-capability emitter.
//!
//! Emits ANSI escape sequences for a fixed set of tput capability names
//! without spawning a process, and delegates everything else to the real
//! tput with its exit status passed through unchanged.

pub mod branding;
pub mod capability;
pub mod cli;
pub mod config;
pub mod delegate;
pub mod dispatch;

pub use capability::Rule;
pub use cli::Invocation;
pub use config::Config;
pub use delegate::{Delegate, DelegateError, Tput};
pub use dispatch::Dispatcher;
