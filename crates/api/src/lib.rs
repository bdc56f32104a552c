//! HTTP API for the palm-reading service.
//!
//! Handlers are straight-line compositions: validate input presence,
//! invoke the fortune generator (upload endpoint only), call storage,
//! serialize to JSON. Business logic lives in `palmlens-core`.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
pub mod uploads;
