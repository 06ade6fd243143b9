//! # sensortab-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `SensorSource` — fetch sensor metadata and current values
//!   - `SensorTable` — the table widget rows are handed to
//! - Define the **driving/inbound** use-case struct:
//!   - `SensorTabService` — load metadata, update now, auto-refresh and
//!     empty-row toggles
//! - Provide **in-process infrastructure** that doesn't need IO
//!   (the periodic `poller`)
//! - Orchestrate domain objects without knowing *how* HTTP or rendering works
//!
//! ## Dependency rule
//! Depends on `sensortab-domain` only (plus `tokio` for locks and timers).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod poller;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod test_support;
