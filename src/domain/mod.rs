//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — coordinates, lookup outcomes, age map, policy and report structs.
//! - `constants.rs` — registry defaults and fixed display strings.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.
//!
//! ## Compatibility note
//! `AgeEntry`, `Violation` and `JsonReport` shape the `--json` output and the
//! JSON report file. Keep schema-impacting changes explicit.

pub mod constants;
pub mod models;
