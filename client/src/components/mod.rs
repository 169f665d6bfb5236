//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each panel receives the page-owned signal it renders from as a prop and
//! changes it only through the `state::dispatch_*` helpers.

pub mod chat_panel;
pub mod upload_panel;
