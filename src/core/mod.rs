//! Core infrastructure
//!
//! Cross-cutting support shared by every other module. Currently this is the
//! logging layer; the macros themselves are exported at the crate root.

pub mod logging;
