//! Domain logic for the palm-reading service.
//!
//! Everything in this crate is synchronous and I/O-free: language
//! normalization, the per-language template tables, the zodiac cycle,
//! and the fortune generator itself. Randomness is injected by the
//! caller so the generator is deterministic under a fixed seed.

pub mod error;
pub mod fortune;
pub mod language;
pub mod templates;
pub mod types;
pub mod zodiac;
