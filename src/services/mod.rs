//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `duration.rs` — millisecond duration split into years/days/hours/minutes/seconds.
//! - `registry.rs` — Maven Central search lookup of a version's publish time.
//! - `age_info.rs` — ignore filter, parallel resolution, ordering, age descriptions.
//! - `threshold.rs` — single-limit age policy validation and evaluation.
//! - `manifest.rs` — dependency list from TOML manifest and `--dependency` flags.
//! - `config.rs` — config file loading and flag/file/default merge.
//! - `report.rs` — JSON/HTML report files.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod age_info;
pub mod config;
pub mod duration;
pub mod manifest;
pub mod output;
pub mod registry;
pub mod report;
pub mod threshold;
