//! # System Interaction Layer
//!
//! The boundary between the command-building core and the operating system.
//!
//! - **`executor`**: spawns the external `rac` program with its argument tokens,
//!   captures its output and enforces the execution timeout and `Ctrl+C`
//!   cancellation.

pub mod executor;
