//! # sensortab-domain
//!
//! Pure domain model for the sensor tab of an entity console.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps
//! - Define **Sensor descriptors** (name, description, type, action links)
//!   and the **metadata map** keyed by sensor name
//! - Define **Sensor values** and their display formatting (rounding)
//! - Define **Sensor rows** — the join of a live value with its metadata,
//!   including the stub fallback when metadata is missing
//! - Define the **action styles** lookup for well-known action keys
//! - Define the **refresh state** consulted by the polling loop
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod action;
pub mod metadata;
pub mod refresh;
pub mod row;
pub mod sensor;
pub mod value;
