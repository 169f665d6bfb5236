//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep formatting out of component bodies so it can be
//! unit-tested without a browser.

pub mod format;
