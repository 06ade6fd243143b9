//! # sensortab-adapter-table-html
//!
//! Server-side HTML table widget for sensor rows.
//!
//! ## Responsibilities
//! - Render the **name** cell (tooltip with description and type), the
//!   **actions** cell (icon or text links) and the **value** cell (numbers
//!   rounded to four decimals)
//! - Render rows and the table through `askama` templates, which escape
//!   every interpolated string ([`prep`] applies the same escaping to
//!   text inserted elsewhere)
//! - Keep the current rows, replacing them by id on every update
//! - Hide rows with empty values when the empty filter is on
//!
//! ## Dependency rule
//! Implements the `SensorTable` port from `sensortab-app`; depends on
//! `sensortab-domain` for the row model. Knows nothing about HTTP.

pub mod columns;
mod escape;
mod table;

pub use escape::prep;
pub use table::HtmlSensorTable;
