//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `catalog`, `ui`) and each is provided
//! as an `RwSignal` context by `App`, so components depend only on the slice
//! they render.

pub mod catalog;
pub mod session;
pub mod ui;
