//! Networking for the two request flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page always calls same-origin `/predict` and `/chat`; the server
//! forwards them to the configured backends. `api` performs the calls and
//! returns `decoder` outcomes ready to be dispatched as `Settled` events.

pub mod api;
