// src/cli/handlers/mod.rs

// One module per CLI action.

pub mod commands;
pub mod commons;
pub mod describe;
pub mod exec;
pub mod modes;
pub mod preview;
pub mod var;
