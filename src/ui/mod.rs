//! Terminal detection and per-process output context

pub mod context;
pub mod terminal;
