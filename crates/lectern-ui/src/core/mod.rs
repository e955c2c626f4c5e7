//! Core, DOM-free primitives and state transitions for the reader UI.
pub mod catalog;
pub mod panel;
pub mod preferences;
pub mod storage;
pub mod store;
pub mod visibility;
