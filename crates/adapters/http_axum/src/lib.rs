//! # sensortab-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **sensors tab** as a server-side-rendered page that works
//!   with **zero JavaScript**: the toolbar controls are `<form>` elements
//!   that POST back and redirect (PRG), and the page reloads itself with
//!   `<meta http-equiv="refresh">` at the poll period
//! - Serve a small **JSON view** of the rows and tab state under `/api`
//! - Map HTTP requests into `SensorTabService` calls (driving adapter)
//!
//! ## Dependency rule
//! Depends on `sensortab-app` (port traits and the service),
//! `sensortab-domain` (row model) and `sensortab-adapter-table-html`, whose
//! widget renders the table embedded in the page.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;
