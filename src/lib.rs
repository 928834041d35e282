//! rac-admin: builds, previews and runs 1C:Enterprise cluster administration
//! (`rac`) commands from a static command catalogue and a persisted set of
//! `$(name)` variables.

include!(concat!(env!("OUT_DIR"), "/translations.rs"));

use std::sync::Arc;
use std::sync::atomic::AtomicBool;

/// Set to `true` to ask a running command to stop.
pub type CancellationToken = Arc<AtomicBool>;

pub mod cli;
pub mod constants;
pub mod core;
pub mod models;
pub mod system;
