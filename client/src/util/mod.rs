//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, native dialogs, task
//! spawning) from page and component logic. Each degrades to a no-op outside
//! the `hydrate` build so SSR and native tests run without a window.

pub mod dialog;
pub mod dispatch;
pub mod storage;
